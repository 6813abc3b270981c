//! hbr: HandBrakeCLI runner.
//!
//! This is the main entry point for the `hbr` CLI. It parses arguments,
//! sets up tracing, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
mod logging;

pub mod build;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod exit_codes;
pub mod global;
pub mod keyfile;
pub mod merge;
pub mod registry;
pub mod runner;
pub mod settings;
pub mod validate;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_tracing(cli.global.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
