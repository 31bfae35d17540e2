//! Command-line front end for the qdwb evapotranspiration formulas.

mod cli;
mod config;
mod convert;
mod eto_cmd;
mod logging;
mod report;
mod solar_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Solar(args) => solar_cmd::run(args, &config),
        Command::Hargreaves(args) => eto_cmd::run_hargreaves(args, &config),
        Command::PenmanMonteith(args) => eto_cmd::run_penman_monteith(args, &config),
    }
}
