mod markdown;

use bon::Builder;
use chrono::NaiveDate;
use clap::ValueEnum;
use payback_engine::{Constants, Parameters, Valuation, valuation::StreamValue};
use serde::Serialize;

use crate::{fmt::Locale, prelude::*};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable document with Markdown tables.
    #[default]
    Markdown,

    /// Machine-readable export of the inputs and the full valuation.
    Json,
}

impl ReportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

/// Printable summary of a single evaluation.
#[must_use]
#[derive(Builder)]
pub struct Report<'a> {
    parameters: &'a Parameters,
    constants: &'a Constants,
    valuation: &'a Valuation,
    locale: Locale,

    /// Generation date, also a part of the file name.
    date: NaiveDate,
}

impl Report<'_> {
    #[must_use]
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!(
            "payback-report-{}kW-{}.{}",
            self.parameters.battery.power.get(),
            self.date.format("%Y-%m-%d"),
            format.extension(),
        )
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Markdown => self.to_markdown(),
            ReportFormat::Json => self.to_json(),
        }
    }

    fn to_json(&self) -> Result<String> {
        let document = JsonReport {
            generated_on: self.date,
            parameters: self.parameters,
            constants: self.constants,
            valuation: self.valuation,
            streams: self.valuation.streams().collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_on: NaiveDate,
    parameters: &'a Parameters,
    constants: &'a Constants,
    valuation: &'a Valuation,
    streams: Vec<StreamValue>,
}

#[cfg(test)]
mod tests {
    use payback_engine::{Engine, parameters::FlexibilityModel};
    use payback_quantities::{Cost, Kilowatts};

    use super::*;

    fn render(parameters: &Parameters, format: ReportFormat) -> String {
        let constants = Constants::default();
        let valuation = Engine::new(constants.clone()).evaluate(parameters);
        Report::builder()
            .parameters(parameters)
            .constants(&constants)
            .valuation(&valuation)
            .locale(Locale::EnUs)
            .date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
            .build()
            .render(format)
            .unwrap()
    }

    #[test]
    fn test_file_name() {
        let parameters = Parameters::default();
        let constants = Constants::default();
        let valuation = Engine::default().evaluate(&parameters);
        let report = Report::builder()
            .parameters(&parameters)
            .constants(&constants)
            .valuation(&valuation)
            .locale(Locale::NbNo)
            .date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
            .build();
        assert_eq!(report.file_name(ReportFormat::Markdown), "payback-report-250kW-2026-01-05.md");
        assert_eq!(report.file_name(ReportFormat::Json), "payback-report-250kW-2026-01-05.json");
    }

    #[test]
    fn test_markdown_sections_in_order() {
        let document = render(&Parameters::default(), ReportFormat::Markdown);
        let positions: Vec<usize> = [
            "# Battery payback report",
            "## System configuration",
            "## Annual value",
            "## Key figures",
            "## Flexibility income",
            "## Calculation basis",
            "## User-supplied values and estimates",
            "## Limitations",
        ]
        .iter()
        .map(|heading| document.find(heading).unwrap())
        .collect();
        assert!(positions.is_sorted());
        assert!(document.contains("Generated on 10/16/2026."));
        assert!(document.contains("Per winter: 2,000 kr × 6 months = 12,000 kr"));
        assert!(document.contains("Solar installation: 355 kWp"));
    }

    #[test]
    fn test_markdown_without_solar() {
        let parameters = Parameters { include_solar: false, ..Parameters::default() };
        let document = render(&parameters, ReportFormat::Markdown);
        assert!(!document.contains("Solar installation"));
        assert!(!document.contains("Solar utilization"));
        assert!(!document.contains("Solar production"));
    }

    #[test]
    fn test_markdown_reference_scaled() {
        let parameters =
            Parameters { flexibility: FlexibilityModel::ReferenceScaled, ..Parameters::default() };
        let document = render(&parameters, ReportFormat::Markdown);
        assert!(document.contains("Flexibility: 250 kW × 891 kr/kW = 222,750 kr"));
        assert!(!document.contains("Per winter"));
    }

    #[test]
    fn test_markdown_payback_not_applicable() {
        let parameters = Parameters { investment: Cost::ZERO, ..Parameters::default() };
        let document = render(&parameters, ReportFormat::Markdown);
        assert!(document.contains("Investment: not given"));
        assert!(document.contains("n/a"));
    }

    #[test]
    fn test_markdown_without_gross_value() {
        let parameters = Parameters {
            battery: payback_engine::parameters::Battery::builder().power(Kilowatts::ZERO).build(),
            include_solar: false,
            ..Parameters::default()
        };
        let document = render(&parameters, ReportFormat::Markdown);
        assert!(!document.contains("100.0%"));
        assert!(document.contains("never"));
    }

    #[test]
    fn test_json() {
        let document = render(&Parameters::default(), ReportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(value["generated_on"], "2026-10-16");
        assert_eq!(value["parameters"]["battery"]["power_kw"], 250.0);
        assert_eq!(value["valuation"]["flexibility"]["model"], "parametric");
        assert_eq!(value["valuation"]["payback"]["status"], "years");
        assert_eq!(value["streams"].as_array().unwrap().len(), 4);
        assert_eq!(value["streams"][2]["stream"], "peak-shaving");
        assert_eq!(value["streams"][2]["is_estimate"], true);
    }
}
