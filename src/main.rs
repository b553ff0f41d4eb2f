//! # groupstat CLI
//!
//! Command-line interface for the groupstat library.

use std::io;
use std::process;

use clap::Parser as ClapParser;

use groupstat::GroupstatError;
use groupstat::capabilities::Capabilities;
use groupstat::cli::Args;
use groupstat::core::{Analyzer, write_report};
use groupstat::loader::load_inputs;
use groupstat::logging::init_logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), GroupstatError> {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    let config = args.to_config();
    config.validate()?;

    // Resolved before reading anything so degraded-mode warnings come first
    let capabilities = Capabilities::detect();
    tracing::debug!(?capabilities, "capabilities resolved");

    let mut inputs = load_inputs(&config)?;
    let analyzer = Analyzer::from_inputs(&config, &mut inputs, capabilities)?;
    let stats = analyzer.analyze_lines(&inputs.lines);

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &stats, &analyzer.report_options())?;

    Ok(())
}
