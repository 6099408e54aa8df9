//! Parameter Set arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use payback_engine::{
    Parameters,
    parameters::{Battery, FlexibilityModel, SeasonalPricing, Solar, UsableEnergyBasis},
};
use payback_quantities::{
    Cost,
    Hours,
    KilowattHourRate,
    KilowattHours,
    Kilowatts,
    MegawattHourRate,
    Percentage,
};

use crate::{prelude::*, validation::validate};

#[derive(Parser)]
pub struct ScenarioArgs {
    /// TOML scenario file, it takes precedence over the individual parameter options.
    #[clap(long, env = "PAYBACK_SCENARIO")]
    scenario: Option<PathBuf>,

    #[clap(flatten)]
    battery: BatteryArgs,

    #[clap(flatten)]
    flexibility: FlexibilityArgs,

    #[clap(flatten)]
    solar: SolarArgs,

    /// Leave the solar-utilization value out.
    #[clap(long, env = "EXCLUDE_SOLAR")]
    exclude_solar: bool,

    /// Leave the peak-shaving and spot-arbitrage estimates out.
    #[clap(long, env = "EXCLUDE_ESTIMATES")]
    exclude_estimates: bool,

    /// Total investment, zero when unknown.
    #[clap(long = "investment", env = "INVESTMENT", default_value = "1200000")]
    investment: Cost,
}

impl ScenarioArgs {
    /// Validated Parameter Set from the scenario file or from the individual options.
    pub fn parameters(&self) -> Result<Parameters> {
        let parameters = match &self.scenario {
            Some(path) => {
                info!(path = %path.display(), "loading the scenario…");
                Parameters::from_toml_file(path)?
            }
            None => self.to_parameters(),
        };
        validate(&parameters)?;
        Ok(parameters)
    }

    fn to_parameters(&self) -> Parameters {
        Parameters::builder()
            .battery(self.battery.into())
            .flexibility(self.flexibility.into())
            .solar(self.solar.into())
            .include_solar(!self.exclude_solar)
            .include_estimates(!self.exclude_estimates)
            .investment(self.investment)
            .build()
    }
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct BatteryArgs {
    /// Battery power rating in kilowatts.
    #[clap(long = "battery-power-kw", env = "BATTERY_POWER_KW", default_value = "250")]
    power: Kilowatts,

    /// Nameplate capacity in kilowatt-hours, when omitted the power sizes the estimates.
    #[clap(
        id = "battery_capacity_kwh",
        long = "battery-capacity-kwh",
        env = "BATTERY_CAPACITY_KWH"
    )]
    capacity: Option<KilowattHours>,
}

impl From<BatteryArgs> for Battery {
    fn from(args: BatteryArgs) -> Self {
        Self::builder()
            .power(args.power)
            .usable_energy_basis(
                args.capacity.map_or(UsableEnergyBasis::Power, UsableEnergyBasis::Capacity),
            )
            .build()
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FlexibilityModelKind {
    /// Seasonal accrual from the market prices.
    Parametric,

    /// Battery power times the documented rate of the reference installation.
    ReferenceScaled,
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct FlexibilityArgs {
    #[clap(long = "flexibility-model", env = "FLEXIBILITY_MODEL", default_value = "parametric")]
    model: FlexibilityModelKind,

    /// Activation price per megawatt-hour.
    #[clap(
        long = "activation-price-per-mwh",
        env = "ACTIVATION_PRICE_PER_MWH",
        default_value = "10000"
    )]
    activation_price: MegawattHourRate,

    /// Availability price per megawatt-hour of committed capacity, per hour.
    #[clap(
        long = "availability-price-per-mwh-per-hour",
        env = "AVAILABILITY_PRICE_PER_MWH_PER_HOUR",
        default_value = "200"
    )]
    availability_price: MegawattHourRate,

    /// Committed hours per business day.
    #[clap(long = "hours-per-day", env = "HOURS_PER_DAY", default_value = "2")]
    hours_per_day: Hours,

    #[clap(long = "activations-per-winter", env = "ACTIVATIONS_PER_WINTER", default_value = "7")]
    activations_per_winter: u32,

    /// Summer availability income as a percentage of the winter one.
    #[clap(long = "summer-factor-percent", env = "SUMMER_FACTOR_PERCENT", default_value = "50")]
    summer_factor: Percentage,
}

impl From<FlexibilityArgs> for FlexibilityModel {
    fn from(args: FlexibilityArgs) -> Self {
        match args.model {
            FlexibilityModelKind::Parametric => Self::Parametric(
                SeasonalPricing::builder()
                    .activation_price(args.activation_price)
                    .availability_price(args.availability_price)
                    .hours_per_day(args.hours_per_day)
                    .activations_per_winter(args.activations_per_winter)
                    .summer_factor(args.summer_factor)
                    .build(),
            ),
            FlexibilityModelKind::ReferenceScaled => Self::ReferenceScaled,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct SolarArgs {
    /// Installed solar peak power.
    #[clap(
        id = "solar_capacity_kwp",
        long = "solar-capacity-kwp",
        env = "SOLAR_CAPACITY_KWP",
        default_value = "355"
    )]
    capacity: Kilowatts,

    #[clap(
        long = "solar-spot-price-per-kwh",
        env = "SOLAR_SPOT_PRICE_PER_KWH",
        default_value = "1.10"
    )]
    spot_price: KilowattHourRate,

    /// Annual production per installed kWp.
    #[clap(
        long = "solar-production-kwh-per-kwp",
        env = "SOLAR_PRODUCTION_KWH_PER_KWP",
        default_value = "895"
    )]
    specific_yield: Hours,

    #[clap(
        long = "self-consumption-without-battery-percent",
        env = "SELF_CONSUMPTION_WITHOUT_BATTERY_PERCENT",
        default_value = "30"
    )]
    self_consumption_without_battery: Percentage,

    #[clap(
        long = "self-consumption-with-battery-percent",
        env = "SELF_CONSUMPTION_WITH_BATTERY_PERCENT",
        default_value = "43"
    )]
    self_consumption_with_battery: Percentage,
}

impl From<SolarArgs> for Solar {
    fn from(args: SolarArgs) -> Self {
        Self::builder()
            .capacity(args.capacity)
            .spot_price(args.spot_price)
            .specific_yield(args.specific_yield)
            .self_consumption_without_battery(args.self_consumption_without_battery)
            .self_consumption_with_battery(args.self_consumption_with_battery)
            .build()
    }
}
