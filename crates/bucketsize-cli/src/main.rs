//! Bucketsize - excavator bucket sizing calculator
//!
//! A CLI tool that recommends the largest bucket an excavator can carry
//! within its safe working load and compares it against the current bucket.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
