use payback_quantities::{Cost, KilowattHours};
use serde::Serialize;

use crate::{constants::Constants, parameters::Battery, prelude::*};

/// Peak-shaving and spot-arbitrage estimates based on industry-typical rates.
///
/// Neither is verified, the report must label both.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Estimates {
    pub usable_energy: KilowattHours,
    pub peak_shaving: Cost,
    pub spot_arbitrage: Cost,
}

impl Estimates {
    pub fn new(battery: &Battery, constants: &Constants) -> Self {
        let usable_energy = battery.usable_energy(constants.usable_fraction);
        let peak_shaving = battery.power * constants.peak_shaving_rate;
        let spot_arbitrage = usable_energy * constants.spot_arbitrage_rate;
        debug!(%usable_energy, %peak_shaving, %spot_arbitrage, "estimates");
        Self { usable_energy, peak_shaving, spot_arbitrage }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::parameters::UsableEnergyBasis;

    #[test]
    fn test_power_basis() {
        let estimates = Estimates::new(&Battery::default(), &Constants::default());
        assert_abs_diff_eq!(estimates.peak_shaving.get(), 10_600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimates.spot_arbitrage.get(), 5_925.0, epsilon = 1e-9);
    }

    #[test]
    fn test_capacity_basis() {
        let battery = Battery::builder()
            .power(250.0)
            .usable_energy_basis(UsableEnergyBasis::Capacity(KilowattHours::new(500.0)))
            .build();
        let estimates = Estimates::new(&battery, &Constants::default());
        assert_abs_diff_eq!(estimates.usable_energy.get(), 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimates.peak_shaving.get(), 10_600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimates.spot_arbitrage.get(), 9_480.0, epsilon = 1e-9);
    }
}
