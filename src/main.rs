// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use recipe_stats::args::Args;
use recipe_stats::config::RunConfig;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = RunConfig::from(args);

    match recipe_stats_core::run_with_config(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
