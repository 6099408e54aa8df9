use std::fmt::{self, Write};

use payback_engine::{flexibility::FlexibilityBreakdown, parameters::UsableEnergyBasis};

use super::Report;
use crate::{
    prelude::*,
    tables::{TableStyle, build_flexibility_table, build_key_figures_table, build_streams_table},
};

impl Report<'_> {
    pub(super) fn to_markdown(&self) -> Result<String> {
        let mut document = String::new();
        self.write_title(&mut document)?;
        self.write_configuration(&mut document)?;
        self.write_tables(&mut document)?;
        self.write_calculation_basis(&mut document)?;
        self.write_assumptions(&mut document)?;
        write_limitations(&mut document)?;
        Ok(document)
    }

    fn write_title(&self, document: &mut String) -> fmt::Result {
        writeln!(document, "# Battery payback report")?;
        writeln!(document)?;
        writeln!(document, "Generated on {}.", self.locale.date(self.date))?;
        writeln!(document)
    }

    fn write_configuration(&self, document: &mut String) -> fmt::Result {
        let locale = self.locale;
        let battery = &self.parameters.battery;

        writeln!(document, "## System configuration")?;
        writeln!(document)?;
        writeln!(document, "- Battery power: {} kW", locale.number(battery.power.get(), 0))?;
        match battery.usable_energy_basis {
            UsableEnergyBasis::Power => {
                writeln!(
                    document,
                    "- Battery capacity: not given, sized as one hour at full power",
                )?;
            }
            UsableEnergyBasis::Capacity(capacity) => {
                writeln!(
                    document,
                    "- Battery capacity: {} kWh, of which {} usable",
                    locale.number(capacity.get(), 0),
                    locale.ratio(self.constants.usable_fraction),
                )?;
            }
        }
        match self.parameters.flexibility.pricing() {
            Some(pricing) => {
                writeln!(document, "- Flexibility model: seasonal market prices")?;
                writeln!(
                    document,
                    "- Availability price: {} kr/MWh per hour, {} h per day",
                    locale.number(pricing.availability_price.get(), 0),
                    locale.number(pricing.hours_per_day.get(), 1),
                )?;
                writeln!(
                    document,
                    "- Activation price: {} kr/MWh, {} activations per winter",
                    locale.number(pricing.activation_price.get(), 0),
                    pricing.activations_per_winter,
                )?;
                writeln!(
                    document,
                    "- Summer availability: {} of winter",
                    locale.percentage(pricing.summer_factor),
                )?;
            }
            None => {
                writeln!(
                    document,
                    "- Flexibility model: scaled from {}",
                    self.constants.reference.name,
                )?;
            }
        }
        if self.parameters.include_solar {
            let solar = &self.parameters.solar;
            writeln!(
                document,
                "- Solar installation: {} kWp, {} kWh/kWp per year",
                locale.number(solar.capacity.get(), 0),
                locale.number(solar.specific_yield.get(), 0),
            )?;
        }
        if self.parameters.investment.is_positive() {
            writeln!(document, "- Investment: {}", locale.cost(self.parameters.investment))?;
        } else {
            writeln!(document, "- Investment: not given")?;
        }
        writeln!(
            document,
            "- Estimates: {}",
            if self.parameters.include_estimates { "included" } else { "excluded" },
        )?;
        writeln!(document)
    }

    fn write_tables(&self, document: &mut String) -> fmt::Result {
        let style = TableStyle::Markdown;

        writeln!(document, "## Annual value")?;
        writeln!(document)?;
        writeln!(document, "{}", build_streams_table(self.valuation, self.locale, style))?;
        writeln!(document)?;
        if self.parameters.include_estimates {
            writeln!(
                document,
                "Estimates rely on industry-typical rates and are not verified for this site.",
            )?;
            writeln!(document)?;
        }

        writeln!(document, "## Key figures")?;
        writeln!(document)?;
        writeln!(
            document,
            "{}",
            build_key_figures_table(self.valuation, self.constants.fee_rate, self.locale, style),
        )?;
        writeln!(document)?;

        writeln!(document, "## Flexibility income")?;
        writeln!(document)?;
        writeln!(
            document,
            "{}",
            build_flexibility_table(&self.valuation.flexibility, self.locale, style),
        )?;
        writeln!(document)
    }

    fn write_calculation_basis(&self, document: &mut String) -> fmt::Result {
        let locale = self.locale;
        let valuation = self.valuation;

        writeln!(document, "## Calculation basis")?;
        writeln!(document)?;
        match &valuation.flexibility {
            FlexibilityBreakdown::Parametric(breakdown) => {
                let power = locale.number(breakdown.power.get(), 3);
                let pricing = &breakdown.pricing;
                let schedule = &breakdown.schedule;
                writeln!(
                    document,
                    "- Committed capacity: {} kW = {power} MW",
                    locale.number(self.parameters.battery.power.get(), 0),
                )?;
                writeln!(
                    document,
                    "- Per hour: {} kr/MWh × {power} MW = {}",
                    locale.number(pricing.availability_price.get(), 0),
                    locale.cost(breakdown.price_per_hour),
                )?;
                writeln!(
                    document,
                    "- Per day: {} × {} h = {}",
                    locale.cost(breakdown.price_per_hour),
                    locale.number(pricing.hours_per_day.get(), 1),
                    locale.cost(breakdown.price_per_day),
                )?;
                writeln!(
                    document,
                    "- Per week: {} × {} business days = {}",
                    locale.cost(breakdown.price_per_day),
                    schedule.business_days_per_week,
                    locale.cost(breakdown.price_per_week),
                )?;
                writeln!(
                    document,
                    "- Per month: {} × {} weeks = {}",
                    locale.cost(breakdown.price_per_week),
                    schedule.weeks_per_month,
                    locale.cost(breakdown.price_per_month),
                )?;
                writeln!(
                    document,
                    "- Per winter: {} × {} months = {}",
                    locale.cost(breakdown.price_per_month),
                    schedule.winter_months,
                    locale.cost(breakdown.price_per_winter),
                )?;
                writeln!(
                    document,
                    "- Per summer: {} × {} = {}",
                    locale.cost(breakdown.price_per_winter),
                    locale.percentage(pricing.summer_factor),
                    locale.cost(breakdown.price_per_summer),
                )?;
                writeln!(
                    document,
                    "- Activations: {} kr/MWh × {power} MW × {} = {}",
                    locale.number(pricing.activation_price.get(), 0),
                    pricing.activations_per_winter,
                    locale.cost(breakdown.activation_sum),
                )?;
            }
            FlexibilityBreakdown::ReferenceScaled(scaling) => {
                let reference = &scaling.reference;
                writeln!(
                    document,
                    "- Flexibility: {} kW × {} kr/kW = {}",
                    locale.number(self.parameters.battery.power.get(), 0),
                    locale.number(scaling.rate.get(), 0),
                    locale.cost(scaling.income),
                )?;
                writeln!(
                    document,
                    "- Documented at {}: {} for {} kW",
                    reference.name,
                    locale.cost(reference.total_income()),
                    locale.number(reference.power.get(), 0),
                )?;
            }
        }

        if let Some(solar) = valuation.solar {
            let inputs = &self.parameters.solar;
            writeln!(
                document,
                "- Solar production: {} kWp × {} kWh/kWp = {} kWh",
                locale.number(inputs.capacity.get(), 0),
                locale.number(inputs.specific_yield.get(), 0),
                locale.number(solar.annual_production.get(), 0),
            )?;
            writeln!(
                document,
                "- Additional self-consumption: {} kWh × {} = {} kWh",
                locale.number(solar.annual_production.get(), 0),
                locale.percentage(solar.self_consumption_delta),
                locale.number(solar.additional_self_consumption.get(), 0),
            )?;
            writeln!(
                document,
                "- Solar value: {} kWh × {} kr/kWh = {}",
                locale.number(solar.additional_self_consumption.get(), 0),
                locale.number(inputs.spot_price.get(), 2),
                locale.cost(solar.value),
            )?;
        }

        if let Some(usable_energy) = valuation.usable_energy {
            writeln!(
                document,
                "- Peak shaving: {} kW × {} kr/kW = {}",
                locale.number(self.parameters.battery.power.get(), 0),
                locale.number(self.constants.peak_shaving_rate.get(), 1),
                locale.cost(valuation.peak_shaving_value),
            )?;
            writeln!(
                document,
                "- Spot arbitrage: {} kWh × {} kr/kWh = {}",
                locale.number(usable_energy.get(), 0),
                locale.number(self.constants.spot_arbitrage_rate.get(), 2),
                locale.cost(valuation.spot_arbitrage_value),
            )?;
        }

        writeln!(
            document,
            "- Operator fee: {} × {} = {}",
            locale.cost(valuation.gross_value),
            locale.ratio(self.constants.fee_rate),
            locale.cost(valuation.operator_fee),
        )?;
        writeln!(
            document,
            "- Net value: {} − {} = {}",
            locale.cost(valuation.gross_value),
            locale.cost(valuation.operator_fee),
            locale.cost(valuation.net_value),
        )?;
        writeln!(document)
    }

    fn write_assumptions(&self, document: &mut String) -> fmt::Result {
        let locale = self.locale;

        writeln!(document, "## User-supplied values and estimates")?;
        writeln!(document)?;
        if self.parameters.flexibility.pricing().is_some() {
            writeln!(
                document,
                "- Flexibility market prices and activation count are user-supplied.",
            )?;
        } else {
            writeln!(
                document,
                "- Flexibility income follows the documented yield of {}.",
                self.constants.reference.name,
            )?;
        }
        if self.parameters.include_solar {
            let solar = &self.parameters.solar;
            writeln!(
                document,
                "- Solar spot price {} kr/kWh and production {} kWh/kWp are user-supplied.",
                locale.number(solar.spot_price.get(), 2),
                locale.number(solar.specific_yield.get(), 0),
            )?;
            writeln!(
                document,
                "- Self-consumption is assumed at {} without and {} with the battery.",
                locale.percentage(solar.self_consumption_without_battery),
                locale.percentage(solar.self_consumption_with_battery),
            )?;
        }
        if self.parameters.include_estimates {
            writeln!(
                document,
                "- Peak shaving at {} kr/kW and spot arbitrage at {} kr/kWh per year are estimates.",
                locale.number(self.constants.peak_shaving_rate.get(), 1),
                locale.number(self.constants.spot_arbitrage_rate.get(), 2),
            )?;
        }
        writeln!(
            document,
            "- The operator fee is {} of the gross value.",
            locale.ratio(self.constants.fee_rate),
        )?;
        writeln!(document)
    }
}

fn write_limitations(document: &mut String) -> fmt::Result {
    writeln!(document, "## Limitations")?;
    writeln!(document)?;
    writeln!(
        document,
        "All figures describe a single year at today's prices. Market prices and activation \
         counts vary from year to year, and battery degradation, financing and taxes are not \
         taken into account.",
    )
}
