use payback_quantities::Cost;
use serde::Serialize;

/// Fee, net value and the investment ratios derived from the gross value.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Returns {
    pub operator_fee: Cost,
    pub net_value: Cost,

    /// Years until the investment is paid back, `0.0` when that is undefined.
    ///
    /// See [`Returns::payback`] for the reason it is undefined.
    pub payback_years: f64,

    /// Annual net value relative to the investment, `0.0` without an investment.
    pub roi: f64,

    pub payback: Payback,
}

impl Returns {
    pub fn new(gross_value: Cost, fee_rate: f64, investment: Cost) -> Self {
        let operator_fee = gross_value * fee_rate;
        let net_value = gross_value - operator_fee;
        let payback = Payback::new(investment, net_value);
        let payback_years = match payback {
            Payback::Years(years) => years,
            Payback::NotApplicable | Payback::Never => 0.0,
        };
        let roi = if investment.is_positive() { net_value / investment } else { 0.0 };
        Self { operator_fee, net_value, payback_years, roi, payback }
    }
}

/// Payback period with the undefined cases told apart.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "years", rename_all = "kebab-case")]
pub enum Payback {
    /// No investment was given.
    NotApplicable,

    /// The net value is not positive, so the investment never pays back.
    Never,

    Years(f64),
}

impl Payback {
    pub fn new(investment: Cost, net_value: Cost) -> Self {
        if !investment.is_positive() {
            Self::NotApplicable
        } else if !net_value.is_positive() {
            Self::Never
        } else {
            Self::Years(investment / net_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_fee() {
        let returns = Returns::new(Cost::new(100_000.0), 0.15, Cost::new(1_000_000.0));
        assert_abs_diff_eq!(returns.operator_fee.get(), 15_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(returns.net_value.get(), 85_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(returns.payback_years, 1_000_000.0 / 85_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(returns.roi, 0.085, epsilon = 1e-12);
        assert!(matches!(returns.payback, Payback::Years(_)));
    }

    #[test]
    fn test_no_investment() {
        let returns = Returns::new(Cost::new(100_000.0), 0.15, Cost::ZERO);
        assert_eq!(returns.payback, Payback::NotApplicable);
        assert_abs_diff_eq!(returns.payback_years, 0.0);
        assert_abs_diff_eq!(returns.roi, 0.0);
    }

    #[test]
    fn test_negative_net_value() {
        let returns = Returns::new(Cost::new(-10_000.0), 0.15, Cost::new(500_000.0));
        assert_eq!(returns.payback, Payback::Never);
        assert_abs_diff_eq!(returns.payback_years, 0.0);
        assert!(returns.roi < 0.0);
    }

    #[test]
    fn test_zero_gross_value() {
        let returns = Returns::new(Cost::ZERO, 0.15, Cost::new(500_000.0));
        assert_eq!(returns.payback, Payback::Never);
        assert_abs_diff_eq!(returns.payback_years, 0.0);
        assert_abs_diff_eq!(returns.roi, 0.0);
    }
}
