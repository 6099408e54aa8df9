use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use payback_engine::{
    RevenueStream,
    Valuation,
    flexibility::FlexibilityBreakdown,
    returns::Payback,
    solar::SolarBreakdown,
};
use payback_quantities::Cost;

use crate::fmt::Locale;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TableStyle {
    /// Colored tables with rounded corners.
    Terminal,

    /// Plain Markdown tables for the report document.
    Markdown,
}

impl TableStyle {
    fn new_table(self) -> Table {
        let mut table = Table::new();
        match self {
            Self::Terminal => {
                table
                    .load_preset(presets::UTF8_FULL_CONDENSED)
                    .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
                    .enforce_styling();
            }
            Self::Markdown => {
                table.load_preset(presets::ASCII_MARKDOWN).force_no_tty();
            }
        }
        table
    }
}

#[must_use]
pub const fn stream_label(stream: RevenueStream) -> &'static str {
    match stream {
        RevenueStream::Flexibility => "Flexibility market",
        RevenueStream::Solar => "Solar utilization",
        RevenueStream::PeakShaving => "Peak shaving (estimate)",
        RevenueStream::SpotArbitrage => "Spot arbitrage (estimate)",
    }
}

fn cost_cell(cost: Cost, locale: Locale) -> Cell {
    Cell::new(locale.cost(cost))
        .set_alignment(CellAlignment::Right)
        .fg(if cost < Cost::ZERO { Color::Red } else { Color::Reset })
}

/// Annual value by stream, only the streams that are switched on.
pub fn build_streams_table(valuation: &Valuation, locale: Locale, style: TableStyle) -> Table {
    let mut table = style.new_table();
    table.set_header(vec!["Stream", "Annual value", "Share"]);
    for value in valuation.included_streams() {
        let label = Cell::new(stream_label(value.stream));
        table.add_row(vec![
            if value.is_estimate { label.fg(Color::DarkYellow) } else { label },
            cost_cell(value.amount, locale),
            Cell::new(value.share.map_or_else(String::new, |share| locale.ratio(share)))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    let total_share =
        if valuation.gross_value == Cost::ZERO { String::new() } else { locale.ratio(1.0) };
    table.add_row(vec![
        Cell::new("Gross value").add_attribute(Attribute::Bold),
        cost_cell(valuation.gross_value, locale).add_attribute(Attribute::Bold),
        Cell::new(total_share).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_key_figures_table(
    valuation: &Valuation,
    fee_rate: f64,
    locale: Locale,
    style: TableStyle,
) -> Table {
    let mut table = style.new_table();
    table.set_header(vec!["Key figure", "Value"]);
    table.add_row(vec![Cell::new("Gross value"), cost_cell(valuation.gross_value, locale)]);
    table.add_row(vec![
        Cell::new(format!("Operator fee ({})", locale.ratio(fee_rate))),
        cost_cell(valuation.operator_fee, locale),
    ]);
    table.add_row(vec![
        Cell::new("Net value").add_attribute(Attribute::Bold),
        Cell::new(locale.cost(valuation.net_value))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(if valuation.net_value.is_positive() { Color::Green } else { Color::Red }),
    ]);
    table.add_row(vec![
        Cell::new("Payback"),
        Cell::new(locale.payback(valuation.payback)).set_alignment(CellAlignment::Right).fg(
            match valuation.payback {
                Payback::Years(_) => Color::Reset,
                Payback::NotApplicable => Color::DarkGrey,
                Payback::Never => Color::Red,
            },
        ),
    ]);
    table.add_row(vec![
        Cell::new("Return on investment"),
        Cell::new(if valuation.payback == Payback::NotApplicable {
            "n/a".to_owned()
        } else {
            locale.ratio(valuation.roi)
        })
        .set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_flexibility_table(
    breakdown: &FlexibilityBreakdown,
    locale: Locale,
    style: TableStyle,
) -> Table {
    let mut table = style.new_table();
    table.set_header(vec!["Flexibility income", "Amount"]);
    match breakdown {
        FlexibilityBreakdown::Parametric(breakdown) => {
            table.add_row(vec![
                Cell::new("Availability, winter"),
                cost_cell(breakdown.price_per_winter, locale),
            ]);
            table.add_row(vec![
                Cell::new(format!(
                    "Availability, summer ({} of winter)",
                    locale.percentage(breakdown.pricing.summer_factor),
                )),
                cost_cell(breakdown.price_per_summer, locale),
            ]);
            table.add_row(vec![
                Cell::new("Availability per year"),
                cost_cell(breakdown.availability_per_year, locale),
            ]);
            table.add_row(vec![
                Cell::new(format!(
                    "Activations ({} per winter)",
                    breakdown.pricing.activations_per_winter,
                )),
                cost_cell(breakdown.activation_sum, locale),
            ]);
        }
        FlexibilityBreakdown::ReferenceScaled(scaling) => {
            let reference = &scaling.reference;
            table.add_row(vec![
                Cell::new(format!(
                    "{}: availability ({} kW)",
                    reference.name,
                    locale.number(reference.power.get(), 0),
                )),
                cost_cell(reference.availability_income, locale),
            ]);
            table.add_row(vec![
                Cell::new(format!("{}: activations", reference.name)),
                cost_cell(reference.activation_income, locale),
            ]);
            table.add_row(vec![
                Cell::new(format!("{}: total", reference.name)),
                cost_cell(reference.total_income(), locale),
            ]);
            table.add_row(vec![
                Cell::new("Rate per kilowatt"),
                Cell::new(format!("{} kr/kW", locale.number(scaling.rate.get(), 0)))
                    .set_alignment(CellAlignment::Right),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        cost_cell(breakdown.income(), locale).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_solar_table(solar: &SolarBreakdown, locale: Locale, style: TableStyle) -> Table {
    let mut table = style.new_table();
    table.set_header(vec!["Solar utilization", "Amount"]);
    table.add_row(vec![
        Cell::new("Annual production"),
        Cell::new(format!("{} kWh", locale.number(solar.annual_production.get(), 0)))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Self-consumption gain"),
        Cell::new(locale.percentage(solar.self_consumption_delta))
            .set_alignment(CellAlignment::Right)
            .fg(if solar.self_consumption_delta.get() < 0.0 { Color::Red } else { Color::Reset }),
    ]);
    table.add_row(vec![
        Cell::new("Additional self-consumption"),
        Cell::new(format!("{} kWh", locale.number(solar.additional_self_consumption.get(), 0)))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Value").add_attribute(Attribute::Bold),
        cost_cell(solar.value, locale).add_attribute(Attribute::Bold),
    ]);
    table
}
