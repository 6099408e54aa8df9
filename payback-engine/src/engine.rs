use enumset::EnumSet;
use payback_quantities::Cost;

use crate::{
    constants::Constants,
    estimates::Estimates,
    flexibility::FlexibilityBreakdown,
    parameters::Parameters,
    prelude::*,
    returns::Returns,
    solar::SolarBreakdown,
    valuation::{RevenueStream, Valuation},
};

/// Stateless valuation engine bound to a set of model constants.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct Engine {
    constants: Constants,
}

impl Engine {
    pub const fn new(constants: Constants) -> Self {
        Self { constants }
    }

    pub const fn constants(&self) -> &Constants {
        &self.constants
    }

    /// Evaluate the parameters from scratch.
    #[instrument(skip_all, fields(power = %parameters.battery.power))]
    pub fn evaluate(&self, parameters: &Parameters) -> Valuation {
        let mut included = EnumSet::only(RevenueStream::Flexibility);

        let flexibility = FlexibilityBreakdown::new(
            &parameters.flexibility,
            parameters.battery.power,
            &self.constants,
        );

        let solar = if parameters.include_solar {
            included |= RevenueStream::Solar;
            SolarBreakdown::new(&parameters.solar)
        } else {
            None
        };

        let estimates = if parameters.include_estimates {
            included |= RevenueStream::PeakShaving | RevenueStream::SpotArbitrage;
            Some(Estimates::new(&parameters.battery, &self.constants))
        } else {
            None
        };

        let flexibility_income = flexibility.income();
        let solar_utilization_value = solar.map_or(Cost::ZERO, |solar| solar.value);
        let peak_shaving_value = estimates.map_or(Cost::ZERO, |estimates| estimates.peak_shaving);
        let spot_arbitrage_value =
            estimates.map_or(Cost::ZERO, |estimates| estimates.spot_arbitrage);

        let gross_value =
            flexibility_income + solar_utilization_value + peak_shaving_value + spot_arbitrage_value;
        let returns = Returns::new(gross_value, self.constants.fee_rate, parameters.investment);
        debug!(
            %gross_value,
            net_value = %returns.net_value,
            payback_years = returns.payback_years,
            roi = returns.roi,
            "evaluated"
        );

        Valuation {
            flexibility_income,
            solar_utilization_value,
            peak_shaving_value,
            spot_arbitrage_value,
            gross_value,
            operator_fee: returns.operator_fee,
            net_value: returns.net_value,
            payback_years: returns.payback_years,
            roi: returns.roi,
            payback: returns.payback,
            flexibility,
            solar,
            usable_energy: estimates.map(|estimates| estimates.usable_energy),
            included,
        }
    }
}
