mod backend;
mod cli;
mod cluster_cmd;
mod config;
mod convert;
mod curve_cmd;
mod estimate_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Estimate(args) => estimate_cmd::run(args),
        Command::Curve(args) => curve_cmd::run(args),
        Command::ClusterConfig(args) => cluster_cmd::run(args),
    }
}
