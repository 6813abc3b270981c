//! Implementation of the `hbr validate` command.
//!
//! Validates the global config and every input file without running
//! anything. Text output goes to stderr in hbr's diagnostic format;
//! `--json` writes one document to stdout instead.

use crate::cli::{GlobalArgs, ValidateArgs};
use crate::context::HbrContext;
use crate::diagnostics::Diagnostic;
use crate::error::{HbrError, Result};
use crate::validate::{Report, load_input};
use anyhow::Context;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonOutput<'a> {
    handbrake_version: Option<String>,
    options_table: &'static str,
    notes: Vec<&'a Diagnostic>,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    valid: bool,
    outfiles: usize,
    diagnostics: Vec<&'a Diagnostic>,
}

impl<'a> JsonFile<'a> {
    fn new(report: &'a Report) -> Self {
        Self {
            path: &report.path,
            valid: report.is_valid(),
            outfiles: report.units.len(),
            diagnostics: report.diagnostics.iter().collect(),
        }
    }
}

pub fn cmd_validate(global_args: &GlobalArgs, args: ValidateArgs) -> Result<()> {
    let ctx = HbrContext::resolve(global_args)?;
    let global = ctx.global.is_valid().then_some(ctx.global.config.as_ref()).flatten();

    let mut reports = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        reports.push(load_input(&ctx.registry, input, global)?);
    }

    if args.json {
        write_json(&ctx, &reports)
            .map_err(|e| HbrError::UserError(format!("{:#}", e)))?;
    } else {
        ctx.print_notes();
        for report in &reports {
            report.diagnostics.print(ctx.threshold);
            if report.is_valid() {
                println!("{}: OK ({} outfile(s))", report.path, report.units.len());
            } else {
                println!("{}: {}", report.path, report.summary());
            }
        }
    }

    let checked = reports.len() + 1;
    let invalid = reports.iter().filter(|r| !r.is_valid()).count()
        + usize::from(!ctx.global.is_valid());
    if invalid > 0 {
        return Err(HbrError::ValidationError(format!(
            "{} of {} file(s) invalid",
            invalid, checked
        )));
    }
    Ok(())
}

fn write_json(ctx: &HbrContext, reports: &[Report]) -> anyhow::Result<()> {
    let output = JsonOutput {
        handbrake_version: ctx.version.map(|v| v.to_string()),
        options_table: ctx.registry.table_label(),
        notes: ctx.notes.iter().collect(),
        files: std::iter::once(&ctx.global)
            .chain(reports)
            .map(JsonFile::new)
            .collect(),
    };
    let json = serde_json::to_string_pretty(&output).context("failed to serialize diagnostics")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).context("failed to write diagnostics to stdout")?;
    Ok(())
}
