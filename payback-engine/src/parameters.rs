use std::{fs, path::Path};

use bon::Builder;
use payback_quantities::{
    Cost,
    Hours,
    KilowattHourRate,
    KilowattHours,
    Kilowatts,
    MegawattHourRate,
    Percentage,
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Everything the user can tune for a single evaluation.
///
/// Defaults follow the product's reference project, so a scenario file may override only a part.
#[must_use]
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    #[builder(default)]
    pub battery: Battery,

    #[builder(default)]
    pub flexibility: FlexibilityModel,

    /// Solar inputs are kept even when [`Parameters::include_solar`] is off.
    #[builder(default)]
    pub solar: Solar,

    #[builder(default = true)]
    pub include_solar: bool,

    /// Include the unverified peak-shaving and spot-arbitrage estimates.
    #[builder(default = true)]
    pub include_estimates: bool,

    #[builder(into, default = Cost::new(1_200_000.0))]
    pub investment: Cost,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Parameters {
    /// Read a scenario file, anything it does not name keeps the product default.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read the scenario from `{}`", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid scenario in `{}`", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[must_use]
#[derive(Builder, Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Battery {
    /// Installed power rating.
    #[serde(rename = "power_kw")]
    #[builder(into, default = Kilowatts::new(250.0))]
    pub power: Kilowatts,

    #[builder(default)]
    pub usable_energy_basis: UsableEnergyBasis,
}

impl Default for Battery {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Battery {
    /// Energy the estimates are sized by.
    pub fn usable_energy(&self, usable_fraction: f64) -> KilowattHours {
        match self.usable_energy_basis {
            UsableEnergyBasis::Power => self.power * Hours::ONE,
            UsableEnergyBasis::Capacity(capacity) => capacity * usable_fraction,
        }
    }

    pub const fn capacity(&self) -> Option<KilowattHours> {
        match self.usable_energy_basis {
            UsableEnergyBasis::Power => None,
            UsableEnergyBasis::Capacity(capacity) => Some(capacity),
        }
    }
}

/// What the usable energy of the battery is derived from.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsableEnergyBasis {
    /// Power-only sizing: the power figure is taken as one hour worth of energy.
    #[default]
    Power,

    /// Nameplate capacity, of which only the usable fraction is cycled.
    #[serde(rename = "capacity_kwh")]
    Capacity(KilowattHours),
}

/// Flexibility income model, fixed per deployment.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum FlexibilityModel {
    /// Seasonal accrual from user-supplied market prices.
    Parametric(SeasonalPricing),

    /// Battery power times the audited rate of the reference installation.
    ReferenceScaled,
}

impl Default for FlexibilityModel {
    fn default() -> Self {
        Self::Parametric(SeasonalPricing::default())
    }
}

impl FlexibilityModel {
    pub const fn pricing(&self) -> Option<&SeasonalPricing> {
        match self {
            Self::Parametric(pricing) => Some(pricing),
            Self::ReferenceScaled => None,
        }
    }
}

/// Winter-season flexibility market prices.
#[must_use]
#[derive(Builder, Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonalPricing {
    #[serde(rename = "activation_price_per_mwh")]
    #[builder(into, default = MegawattHourRate::new(10_000.0))]
    pub activation_price: MegawattHourRate,

    /// Availability price per megawatt-hour of committed capacity, per hour.
    #[serde(rename = "availability_price_per_mwh_per_hour")]
    #[builder(into, default = MegawattHourRate::new(200.0))]
    pub availability_price: MegawattHourRate,

    #[builder(into, default = Hours::new(2.0))]
    pub hours_per_day: Hours,

    #[builder(default = 7)]
    pub activations_per_winter: u32,

    /// Summer availability income relative to the winter one.
    #[serde(rename = "summer_factor_percent")]
    #[builder(into, default = Percentage::new(50.0))]
    pub summer_factor: Percentage,
}

impl Default for SeasonalPricing {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// On-site solar installation.
#[must_use]
#[derive(Builder, Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Solar {
    /// Installed peak power.
    #[serde(rename = "capacity_kwp")]
    #[builder(into, default = Kilowatts::new(355.0))]
    pub capacity: Kilowatts,

    #[serde(rename = "spot_price_per_kwh")]
    #[builder(into, default = KilowattHourRate::new(1.10))]
    pub spot_price: KilowattHourRate,

    /// Annual production per installed kWp.
    #[serde(rename = "production_kwh_per_kwp")]
    #[builder(into, default = Hours::new(895.0))]
    pub specific_yield: Hours,

    #[serde(rename = "self_consumption_without_battery_percent")]
    #[builder(into, default = Percentage::new(30.0))]
    pub self_consumption_without_battery: Percentage,

    #[serde(rename = "self_consumption_with_battery_percent")]
    #[builder(into, default = Percentage::new(43.0))]
    pub self_consumption_with_battery: Percentage,
}

impl Default for Solar {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_energy_power_basis() {
        let battery = Battery::builder().power(250.0).build();
        assert_eq!(battery.usable_energy(0.8), KilowattHours::new(250.0));
        assert_eq!(battery.capacity(), None);
    }

    #[test]
    fn test_usable_energy_capacity_basis() {
        let battery = Battery::builder()
            .power(250.0)
            .usable_energy_basis(UsableEnergyBasis::Capacity(KilowattHours::new(500.0)))
            .build();
        assert_eq!(battery.usable_energy(0.8), KilowattHours::new(400.0));
    }

    #[test]
    fn test_partial_scenario() {
        let parameters = Parameters::from_toml_str(
            r#"
            include_estimates = false
            investment = 900000

            [battery]
            power_kw = 500
            usable_energy_basis = { capacity_kwh = 1000 }

            [flexibility]
            model = "parametric"
            summer_factor_percent = 25
            "#,
        )
        .unwrap();
        assert!(!parameters.include_estimates);
        assert!(parameters.include_solar);
        assert_eq!(parameters.investment, Cost::new(900_000.0));
        assert_eq!(parameters.battery.power, Kilowatts::new(500.0));
        assert_eq!(parameters.battery.capacity(), Some(KilowattHours::new(1000.0)));
        let pricing = parameters.flexibility.pricing().unwrap();
        assert_eq!(pricing.summer_factor, Percentage::new(25.0));
        assert_eq!(pricing.activations_per_winter, 7);
        assert_eq!(parameters.solar, Solar::default());
    }

    #[test]
    fn test_reference_scaled_scenario() {
        let parameters: Parameters = toml::from_str(
            r#"
            [flexibility]
            model = "reference-scaled"
            "#,
        )
        .unwrap();
        assert_eq!(parameters.flexibility, FlexibilityModel::ReferenceScaled);
    }

    #[test]
    fn test_power_basis_scenario() {
        let parameters: Parameters = toml::from_str(
            r#"
            [battery]
            usable_energy_basis = "power"
            "#,
        )
        .unwrap();
        assert_eq!(parameters.battery.usable_energy_basis, UsableEnergyBasis::Power);
    }

    #[test]
    fn test_misspelled_keys_are_rejected() {
        assert!(Parameters::from_toml_str("invesment = 0").is_err());
        assert!(Parameters::from_toml_str("[solar]\ncapacity_kw = 0").is_err());
        assert!(Parameters::from_toml_str("[battery]\npower = 500").is_err());
        assert!(
            Parameters::from_toml_str(
                r#"
                [flexibility]
                model = "parametric"
                sumer_factor_percent = 25
                "#,
            )
            .is_err()
        );
    }
}
