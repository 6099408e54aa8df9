use payback_quantities::{Cost, KilowattRate, Kilowatts, Megawatts};
use serde::Serialize;

use crate::{
    constants::{Constants, ReferenceInstallation, SeasonalSchedule},
    parameters::{FlexibilityModel, SeasonalPricing},
    prelude::*,
};

/// Flexibility income together with everything it was derived from.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum FlexibilityBreakdown {
    Parametric(SeasonalBreakdown),
    ReferenceScaled(ReferenceScaling),
}

impl FlexibilityBreakdown {
    pub fn new(model: &FlexibilityModel, power: Kilowatts, constants: &Constants) -> Self {
        match model {
            FlexibilityModel::Parametric(pricing) => {
                Self::Parametric(SeasonalBreakdown::new(pricing, power, constants.schedule))
            }
            FlexibilityModel::ReferenceScaled => {
                Self::ReferenceScaled(ReferenceScaling::new(power, &constants.reference))
            }
        }
    }

    pub const fn income(&self) -> Cost {
        match self {
            Self::Parametric(breakdown) => breakdown.income,
            Self::ReferenceScaled(scaling) => scaling.income,
        }
    }
}

/// Availability income accrued hour by hour up to a year, plus the winter activations.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SeasonalBreakdown {
    pub pricing: SeasonalPricing,
    pub schedule: SeasonalSchedule,
    pub power: Megawatts,
    pub price_per_hour: Cost,
    pub price_per_day: Cost,
    pub price_per_week: Cost,
    pub price_per_month: Cost,
    pub price_per_winter: Cost,
    pub price_per_summer: Cost,
    pub availability_per_year: Cost,
    pub activation_sum: Cost,
    pub income: Cost,
}

impl SeasonalBreakdown {
    pub fn new(pricing: &SeasonalPricing, power: Kilowatts, schedule: SeasonalSchedule) -> Self {
        let power = Megawatts::from(power);
        let price_per_hour = pricing.availability_price * power;
        let price_per_day = price_per_hour * pricing.hours_per_day.get();
        let price_per_week = price_per_day * f64::from(schedule.business_days_per_week);
        let price_per_month = price_per_week * f64::from(schedule.weeks_per_month);
        let price_per_winter = price_per_month * f64::from(schedule.winter_months);
        let price_per_summer = price_per_winter * pricing.summer_factor;
        let availability_per_year = price_per_winter + price_per_summer;
        let activation_sum =
            pricing.activation_price * power * f64::from(pricing.activations_per_winter);
        let income = availability_per_year + activation_sum;
        debug!(%availability_per_year, %activation_sum, %income, "seasonal flexibility income");
        Self {
            pricing: *pricing,
            schedule,
            power,
            price_per_hour,
            price_per_day,
            price_per_week,
            price_per_month,
            price_per_winter,
            price_per_summer,
            availability_per_year,
            activation_sum,
            income,
        }
    }
}

/// Flexibility income scaled from the reference installation's audited yield.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReferenceScaling {
    pub income: Cost,
    pub rate: KilowattRate,
    pub reference: ReferenceInstallation,
}

impl ReferenceScaling {
    pub fn new(power: Kilowatts, reference: &ReferenceInstallation) -> Self {
        let income = power * reference.rate;
        debug!(%power, rate = %reference.rate, %income, "reference-scaled flexibility income");
        Self { income, rate: reference.rate, reference: reference.clone() }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use payback_quantities::{Hours, MegawattHourRate, Percentage};

    use super::*;

    fn pricing() -> SeasonalPricing {
        SeasonalPricing::builder()
            .availability_price(200.0)
            .hours_per_day(2.0)
            .activations_per_winter(7)
            .activation_price(10_000.0)
            .summer_factor(50.0)
            .build()
    }

    #[test]
    fn test_seasonal_chain() {
        let breakdown =
            SeasonalBreakdown::new(&pricing(), Kilowatts::new(250.0), SeasonalSchedule::default());
        assert_abs_diff_eq!(breakdown.power.get(), 0.25);
        assert_abs_diff_eq!(breakdown.price_per_hour.get(), 50.0);
        assert_abs_diff_eq!(breakdown.price_per_day.get(), 100.0);
        assert_abs_diff_eq!(breakdown.price_per_week.get(), 500.0);
        assert_abs_diff_eq!(breakdown.price_per_month.get(), 2_000.0);
        assert_abs_diff_eq!(breakdown.price_per_winter.get(), 12_000.0);
        assert_abs_diff_eq!(breakdown.price_per_summer.get(), 6_000.0);
        assert_abs_diff_eq!(breakdown.availability_per_year.get(), 18_000.0);
        assert_abs_diff_eq!(breakdown.activation_sum.get(), 17_500.0);
        assert_abs_diff_eq!(breakdown.income.get(), 35_500.0);
    }

    #[test]
    fn test_no_summer_income() {
        let pricing = SeasonalPricing { summer_factor: Percentage::ZERO, ..pricing() };
        let breakdown =
            SeasonalBreakdown::new(&pricing, Kilowatts::new(250.0), SeasonalSchedule::default());
        assert_eq!(breakdown.price_per_summer, Cost::ZERO);
        assert_eq!(breakdown.availability_per_year, breakdown.price_per_winter);
    }

    #[test]
    fn test_custom_schedule() {
        let pricing = SeasonalPricing {
            availability_price: MegawattHourRate::new(100.0),
            hours_per_day: Hours::new(1.0),
            activations_per_winter: 0,
            ..pricing()
        };
        let schedule =
            SeasonalSchedule { business_days_per_week: 7, weeks_per_month: 4, winter_months: 5 };
        let breakdown = SeasonalBreakdown::new(&pricing, Kilowatts::new(1000.0), schedule);
        assert_abs_diff_eq!(breakdown.price_per_winter.get(), 100.0 * 7.0 * 4.0 * 5.0);
        assert_eq!(breakdown.activation_sum, Cost::ZERO);
    }

    #[test]
    fn test_reference_scaled() {
        let constants = Constants::default();
        let breakdown = FlexibilityBreakdown::new(
            &FlexibilityModel::ReferenceScaled,
            Kilowatts::new(250.0),
            &constants,
        );
        assert_abs_diff_eq!(breakdown.income().get(), 222_750.0);
        match breakdown {
            FlexibilityBreakdown::ReferenceScaled(scaling) => {
                assert_eq!(scaling.reference, constants.reference);
            }
            FlexibilityBreakdown::Parametric(_) => panic!("expected the reference-scaled model"),
        }
    }

    #[test]
    fn test_reference_rate_override() {
        let reference =
            ReferenceInstallation { rate: KilowattRate::new(1000.0), ..Default::default() };
        let scaling = ReferenceScaling::new(Kilowatts::new(100.0), &reference);
        assert_abs_diff_eq!(scaling.income.get(), 100_000.0);
    }
}
