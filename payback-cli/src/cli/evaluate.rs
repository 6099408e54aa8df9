use clap::Parser;
use payback_engine::{Constants, Engine};

use crate::{
    cli::scenario::ScenarioArgs,
    fmt::Locale,
    prelude::*,
    tables::{
        TableStyle,
        build_flexibility_table,
        build_key_figures_table,
        build_solar_table,
        build_streams_table,
    },
};

#[derive(Parser)]
pub struct EvaluateArgs {
    #[clap(flatten)]
    scenario: ScenarioArgs,
}

impl EvaluateArgs {
    #[instrument(skip_all)]
    pub fn run(&self, constants: Constants, locale: Locale) -> Result {
        let parameters = self.scenario.parameters()?;
        let engine = Engine::new(constants);
        let valuation = engine.evaluate(&parameters);
        let fee_rate = engine.constants().fee_rate;
        info!(gross_value = %valuation.gross_value, net_value = %valuation.net_value, "evaluated");

        let style = TableStyle::Terminal;
        println!("{}", build_streams_table(&valuation, locale, style));
        println!("{}", build_key_figures_table(&valuation, fee_rate, locale, style));
        println!("{}", build_flexibility_table(&valuation.flexibility, locale, style));
        if let Some(solar) = &valuation.solar {
            println!("{}", build_solar_table(solar, locale, style));
        }
        Ok(())
    }
}
