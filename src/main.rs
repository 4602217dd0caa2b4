//! Command-line entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the rendering
//! pipeline. The run is synchronous batch work: load, map, build, render,
//! export, exit.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use clap::Parser as _;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    csv2sankey::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)?;
    Ok(())
}
