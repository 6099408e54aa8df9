use payback_quantities::{Cost, KilowattHours, Percentage};
use serde::Serialize;

use crate::{parameters::Solar, prelude::*};

/// Extra solar self-consumption the battery enables.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SolarBreakdown {
    pub annual_production: KilowattHours,

    /// May be negative, the value then turns negative too.
    pub self_consumption_delta: Percentage,

    pub additional_self_consumption: KilowattHours,

    pub value: Cost,
}

impl SolarBreakdown {
    /// Returns [`None`] when no solar capacity is installed.
    pub fn new(solar: &Solar) -> Option<Self> {
        if !solar.capacity.is_positive() {
            return None;
        }
        let annual_production = solar.capacity * solar.specific_yield;
        let self_consumption_delta =
            solar.self_consumption_with_battery - solar.self_consumption_without_battery;
        if self_consumption_delta < Percentage::ZERO {
            warn!(
                with_battery = %solar.self_consumption_with_battery,
                without_battery = %solar.self_consumption_without_battery,
                "self-consumption with the battery is lower than without it"
            );
        }
        let additional_self_consumption = annual_production * self_consumption_delta;
        let value = additional_self_consumption * solar.spot_price;
        debug!(%annual_production, %additional_self_consumption, %value, "solar utilization");
        Some(Self { annual_production, self_consumption_delta, additional_self_consumption, value })
    }
}
