use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use payback_engine::{Constants, Engine};

use crate::{
    cli::scenario::ScenarioArgs,
    fmt::Locale,
    prelude::*,
    report::{Report, ReportFormat},
};

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(flatten)]
    scenario: ScenarioArgs,

    #[clap(long, env = "REPORT_FORMAT", default_value = "markdown")]
    format: ReportFormat,

    /// Directory to write the report into.
    #[clap(long, env = "REPORT_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

impl ReportArgs {
    #[instrument(skip_all)]
    pub fn run(&self, constants: &Constants, locale: Locale, date: NaiveDate) -> Result {
        let parameters = self.scenario.parameters()?;
        let valuation = Engine::new(constants.clone()).evaluate(&parameters);
        let report = Report::builder()
            .parameters(&parameters)
            .constants(constants)
            .valuation(&valuation)
            .locale(locale)
            .date(date)
            .build();

        let path = self.output_dir.join(report.file_name(self.format));
        fs::write(&path, report.render(self.format)?)
            .with_context(|| format!("failed to write the report to `{}`", path.display()))?;
        info!(path = %path.display(), "written the report");
        println!("{}", path.display());
        Ok(())
    }
}
