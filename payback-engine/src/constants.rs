use std::{fs, path::Path};

use payback_quantities::{Cost, KilowattHourRate, KilowattRate, Kilowatts};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Fixed model assumptions that are not part of the user input.
///
/// Every field is defaulted, so a configuration file only needs to name what it overrides.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Constants {
    /// Operator's share of the gross value, as a ratio.
    pub fee_rate: f64,

    /// Estimated peak-shaving saving per installed kilowatt per year.
    #[serde(rename = "peak_shaving_rate_per_kw")]
    pub peak_shaving_rate: KilowattRate,

    /// Estimated spot-arbitrage income per usable kilowatt-hour per year.
    #[serde(rename = "spot_arbitrage_rate_per_kwh")]
    pub spot_arbitrage_rate: KilowattHourRate,

    /// Usable share of the nameplate capacity (depth of discharge).
    pub usable_fraction: f64,

    pub schedule: SeasonalSchedule,

    pub reference: ReferenceInstallation,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            fee_rate: 0.15,
            peak_shaving_rate: KilowattRate::new(42.4),
            spot_arbitrage_rate: KilowattHourRate::new(23.7),
            usable_fraction: 0.8,
            schedule: SeasonalSchedule::default(),
            reference: ReferenceInstallation::default(),
        }
    }
}

impl Constants {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read the constants from `{}`", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid constants in `{}`", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str::<Self>(text)?.validated()
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validated(self) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&self.fee_rate),
            "fee rate must be within `0..=1`, got {}",
            self.fee_rate,
        );
        ensure!(
            self.usable_fraction > 0.0 && self.usable_fraction <= 1.0,
            "usable fraction must be within `(0, 1]`, got {}",
            self.usable_fraction,
        );
        ensure!(self.peak_shaving_rate.get().is_finite(), "peak-shaving rate must be finite");
        ensure!(self.spot_arbitrage_rate.get().is_finite(), "spot-arbitrage rate must be finite");
        ensure!(self.reference.rate.get().is_finite(), "reference rate must be finite");
        self.schedule.validate()?;
        Ok(self)
    }
}

/// Calendar assumptions of the seasonal availability model.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonalSchedule {
    pub business_days_per_week: u32,
    pub weeks_per_month: u32,
    pub winter_months: u32,
}

impl Default for SeasonalSchedule {
    fn default() -> Self {
        Self { business_days_per_week: 5, weeks_per_month: 4, winter_months: 6 }
    }
}

impl SeasonalSchedule {
    fn validate(self) -> Result {
        ensure!(self.business_days_per_week > 0, "there must be at least one business day a week");
        ensure!(self.weeks_per_month > 0, "there must be at least one week a month");
        ensure!(self.winter_months > 0, "winter must last at least one month");
        Ok(())
    }
}

/// Audited yield of a real installation, used to scale the flexibility income by power.
///
/// Only [`ReferenceInstallation::rate`] takes part in the calculation, the rest is reported as is.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceInstallation {
    pub name: String,

    #[serde(rename = "power_kw")]
    pub power: Kilowatts,

    pub availability_income: Cost,

    pub activation_income: Cost,

    /// Documented flexibility income per kilowatt per year.
    #[serde(rename = "rate_per_kw")]
    pub rate: KilowattRate,
}

impl Default for ReferenceInstallation {
    fn default() -> Self {
        Self {
            name: "Holskogveien 76".to_owned(),
            power: Kilowatts::new(250.0),
            availability_income: Cost::new(105_000.0),
            activation_income: Cost::new(117_750.0),
            rate: KilowattRate::new(891.0),
        }
    }
}

impl ReferenceInstallation {
    pub fn total_income(&self) -> Cost {
        self.availability_income + self.activation_income
    }
}
