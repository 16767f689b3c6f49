//! Claw CLI - Command-line interface for the claw contraption token solver

mod cli;
mod config;
mod error;
mod executor;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let report = executor::execute(&config)?;
    OutputFormatter::new(config.verbose).print_report(&report);
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default)
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
