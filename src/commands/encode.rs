//! Implementation of the `hbr encode` command.
//!
//! # Steps
//!
//! 1. Check `-o DIR` before anything slow happens
//! 2. Resolve settings, HandBrake version, and the global config
//! 3. Validate the input file against the global `CONFIG`
//! 4. Run HandBrakeCLI for each merged outfile
//! 5. Fail with an execution error if any outfile was not encoded

use crate::cli::{EncodeArgs, GlobalArgs};
use crate::context::HbrContext;
use crate::error::{HbrError, Result};
use crate::runner::{Outcome, RunOptions, Runner, check_output_dir};
use crate::validate::load_input;
use std::io;

pub fn cmd_encode(global_args: &GlobalArgs, args: EncodeArgs) -> Result<()> {
    let output_dir = args.output.as_deref().map(check_output_dir).transpose()?;

    let ctx = HbrContext::resolve(global_args)?;
    ctx.print_notes();
    let global = ctx.global_config()?;

    let report = load_input(&ctx.registry, &args.input, global)?;
    report.diagnostics.print(ctx.threshold);
    if !report.is_valid() {
        return Err(HbrError::ValidationError(report.summary()));
    }

    let runner = Runner::new(&ctx.registry, &ctx.settings, ctx.cwd.clone())?;
    let options = RunOptions {
        debug: args.debug,
        preview: args.preview,
        overwrite: args.overwrite,
        episode: args.episode,
        output_dir,
    };

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let summary = runner.run(&report.units, &options, &mut input, &mut out)?;
    tracing::info!(
        encoded = summary.count(Outcome::Encoded),
        printed = summary.count(Outcome::Printed),
        skipped = summary.count(Outcome::Skipped),
        "encode finished"
    );

    let failed = summary.failed();
    if !failed.is_empty() {
        return Err(HbrError::ExecutionError(format!(
            "{} of {} outfile(s) were not encoded: {}",
            failed.len(),
            summary.outcomes.len(),
            failed.join(", ")
        )));
    }
    Ok(())
}
