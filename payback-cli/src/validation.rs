use payback_engine::Parameters;
use payback_quantities::Percentage;

use crate::prelude::*;

/// Reject inputs the valuation has no meaning for.
///
/// A lower self-consumption with the battery than without it is accepted, the engine logs it.
pub fn validate(parameters: &Parameters) -> Result {
    let battery = &parameters.battery;
    ensure_positive("battery power", battery.power.get())?;
    if let Some(capacity) = battery.capacity() {
        ensure_positive("battery capacity", capacity.get())?;
    }

    if let Some(pricing) = parameters.flexibility.pricing() {
        ensure_non_negative("activation price", pricing.activation_price.get())?;
        ensure_non_negative("availability price", pricing.availability_price.get())?;
        ensure_non_negative("hours per day", pricing.hours_per_day.get())?;
        ensure_percentage("summer factor", pricing.summer_factor)?;
    }

    let solar = &parameters.solar;
    ensure_non_negative("solar capacity", solar.capacity.get())?;
    ensure_non_negative("solar spot price", solar.spot_price.get())?;
    ensure_non_negative("solar production per kWp", solar.specific_yield.get())?;
    ensure_percentage("self-consumption without battery", solar.self_consumption_without_battery)?;
    ensure_percentage("self-consumption with battery", solar.self_consumption_with_battery)?;

    ensure_non_negative("investment", parameters.investment.get())?;
    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> Result {
    ensure!(value.is_finite() && value > 0.0, "{name} must be positive and finite, got {value}");
    Ok(())
}

fn ensure_non_negative(name: &str, value: f64) -> Result {
    ensure!(
        value.is_finite() && value >= 0.0,
        "{name} must be finite and not negative, got {value}"
    );
    Ok(())
}

fn ensure_percentage(name: &str, percentage: Percentage) -> Result {
    ensure!(percentage.is_within_bounds(), "{name} must be within 0..=100%, got {percentage}");
    Ok(())
}
