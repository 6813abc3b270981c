//! Command implementations for hbr.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod encode;
mod validate_cmd;

use crate::cli::{Cli, Command};
use crate::error::Result;
use crate::global;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::cmd_encode(&cli.global, args),
        Command::Validate(args) => validate_cmd::cmd_validate(&cli.global, args),
        Command::DefaultConfig => cmd_default_config(),
    }
}

fn cmd_default_config() -> Result<()> {
    print!("{}", global::default_config_text());
    Ok(())
}
