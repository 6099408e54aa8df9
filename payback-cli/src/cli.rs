mod evaluate;
mod report;
mod scenario;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use payback_engine::Constants;

pub use self::{evaluate::EvaluateArgs, report::ReportArgs};
use crate::{fmt::Locale, prelude::*};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// TOML file overriding the model constants.
    #[clap(long, env = "PAYBACK_CONSTANTS", global = true)]
    pub constants: Option<PathBuf>,

    /// Number formatting of the output.
    #[clap(long, env = "PAYBACK_LOCALE", default_value = "nb-no", global = true)]
    pub locale: Locale,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Effective model constants: the defaults, overridden by the constants file if any.
    pub fn constants(&self) -> Result<Constants> {
        match &self.constants {
            Some(path) => {
                info!(path = %path.display(), "loading the constants…");
                Constants::from_toml_file(path)
            }
            None => Ok(Constants::default()),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate the annual value and payback, and print them as tables.
    #[clap(name = "evaluate")]
    Evaluate(Box<EvaluateArgs>),

    /// Write the report document.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),

    /// Print the effective model constants as TOML.
    #[clap(name = "constants")]
    Constants,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_subcommands_parse() {
        let args = Args::try_parse_from(["payback", "evaluate", "--locale", "en-us"]).unwrap();
        assert_eq!(args.locale, Locale::EnUs);
        assert!(matches!(args.command, Command::Evaluate(_)));

        let args = Args::try_parse_from(["payback", "report", "--format", "json"]).unwrap();
        assert!(matches!(args.command, Command::Report(_)));

        let args = Args::try_parse_from(["payback", "constants"]).unwrap();
        assert!(matches!(args.command, Command::Constants));
    }
}
