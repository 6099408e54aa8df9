#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

mod cli;
mod fmt;
mod prelude;
mod report;
mod tables;
mod validation;

use std::io;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let constants = args.constants()?;
    let locale = args.locale;

    match args.command {
        Command::Evaluate(args) => args.run(constants, locale),
        Command::Report(args) => args.run(&constants, locale, Local::now().date_naive()),
        Command::Constants => {
            print!("{}", constants.to_toml_string()?);
            Ok(())
        }
    }
}
