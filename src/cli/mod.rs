//! CLI argument parsing for hbr.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// hbr: HandBrakeCLI runner.
///
/// Encodes are described in key files:
/// - a `[CONFIG]` group with HandBrakeCLI options shared by every output
/// - one `[OUTFILE<n>]` group per output, overriding `CONFIG`
/// - a global config (`~/.config/hbr/hbr.conf`) underneath both
#[derive(Parser, Debug)]
#[command(name = "hbr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// HandBrake version to validate against instead of asking HandBrakeCLI (e.g. 1.1.2).
    #[arg(short = 'H', long = "hbversion", value_name = "VER", global = true)]
    pub hbversion: Option<String>,

    /// Global config file to use instead of the one in the config directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Settings file to use instead of the one in the config directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Log internal debugging output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print configuration errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands for hbr.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode every outfile of an input file.
    ///
    /// Validates the input against the global config, then runs
    /// HandBrakeCLI once per outfile, logging its stderr next to the output.
    Encode(EncodeArgs),

    /// Validate input files without encoding.
    ///
    /// Reports every problem found; exits non-zero if any file is invalid.
    Validate(ValidateArgs),

    /// Print the default global config.
    DefaultConfig,
}

/// Arguments for the `encode` command.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input key file.
    pub input: PathBuf,

    /// Print HandBrakeCLI commands instead of running them.
    #[arg(short, long)]
    pub debug: bool,

    /// Only encode the outfile with this episode number.
    #[arg(short, long, value_name = "N")]
    pub episode: Option<i64>,

    /// Generate a preview thumbnail after each encode.
    #[arg(short, long)]
    pub preview: bool,

    /// Overwrite existing outputs without asking.
    #[arg(short = 'y', long)]
    pub overwrite: bool,

    /// Write every output under this directory (overrides output_basedir).
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Input key files.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Print diagnostics as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
