//! Encode loop: one HandBrakeCLI run per merged outfile.
//!
//! Units run in declared order (or exactly one with an episode filter).
//! A failing unit is reported and the loop moves on; the caller turns the
//! [`RunSummary`] into an exit status.

mod probe;
mod process;
mod prompt;

#[cfg(test)]
mod tests;

pub use probe::{probe_version, resolve_version};
pub use process::{
    log_path, make_thumbnail, run_logged, thumbnail_command, thumbnail_path,
};
pub use prompt::confirm_output;

use crate::build::build;
use crate::error::{HbrError, Result};
use crate::merge::OutfileUnit;
use crate::registry::Registry;
use crate::settings::Settings;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Switches from the `encode` command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Print commands instead of running them.
    pub debug: bool,
    /// Generate a thumbnail after each encode.
    pub preview: bool,
    /// Replace existing outputs without asking.
    pub overwrite: bool,
    /// Only encode the outfile with this `episode`.
    pub episode: Option<i64>,
    /// Replaces `output_basedir` for every outfile.
    pub output_dir: Option<PathBuf>,
}

/// What happened to one outfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Encoded,
    /// Debug mode: the command was printed.
    Printed,
    /// The user declined to overwrite.
    Skipped,
    Failed,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    /// `(OUTFILE<n>, outcome)` in run order.
    pub outcomes: Vec<(String, Outcome)>,
}

impl RunSummary {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == outcome).count()
    }

    /// Groups whose encode failed.
    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o == Outcome::Failed)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Units to run: all of them, or the first whose `episode` matches.
pub fn select_units(units: &[OutfileUnit], episode: Option<i64>) -> Result<Vec<&OutfileUnit>> {
    if units.is_empty() {
        return Err(HbrError::UserError(
            "No valid outfile sections found. Quitting.".to_string(),
        ));
    }
    let Some(episode) = episode else {
        return Ok(units.iter().collect());
    };
    units
        .iter()
        .find(|unit| unit.episode() == Some(episode))
        .map(|unit| vec![unit])
        .ok_or_else(|| {
            HbrError::UserError(format!("Could not find episode {}. Quitting.", episode))
        })
}

/// `-o DIR` must name an existing directory.
pub fn check_output_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        return Err(HbrError::UserError(format!(
            "Invalid output path: {}",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(HbrError::UserError(format!(
            "Output path is not a directory: {}",
            dir.display()
        )));
    }
    Ok(std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf()))
}

pub struct Runner<'a> {
    registry: &'a Registry,
    handbrake: Vec<String>,
    thumbnailer: Vec<String>,
    log_extension: String,
    cwd: PathBuf,
}

impl<'a> Runner<'a> {
    /// Runner using the programs named in `settings`. Relative paths in
    /// outfiles resolve against `cwd`.
    pub fn new(registry: &'a Registry, settings: &Settings, cwd: PathBuf) -> Result<Self> {
        Ok(Self::with_programs(
            registry,
            settings.handbrake_program()?,
            settings.thumbnail_program()?,
            &settings.log_extension,
            cwd,
        ))
    }

    pub fn with_programs(
        registry: &'a Registry,
        handbrake: Vec<String>,
        thumbnailer: Vec<String>,
        log_extension: &str,
        cwd: PathBuf,
    ) -> Self {
        Self {
            registry,
            handbrake,
            thumbnailer,
            log_extension: log_extension.to_string(),
            cwd,
        }
    }

    /// Run every selected unit. Progress goes to `out`; overwrite questions
    /// are answered from `input`.
    pub fn run<R: BufRead, W: Write>(
        &self,
        units: &[OutfileUnit],
        options: &RunOptions,
        input: &mut R,
        out: &mut W,
    ) -> Result<RunSummary> {
        let selected = select_units(units, options.episode)?;
        let total = selected.len();
        let mut summary = RunSummary::default();

        for (i, unit) in selected.into_iter().enumerate() {
            let outcome = match self.run_unit(i + 1, total, unit, options, input, out) {
                Ok(outcome) => outcome,
                Err(err) => {
                    eprintln!(
                        "{}: Handbrake call failed for outfile: {}: {}",
                        i + 1,
                        unit.name,
                        err
                    );
                    Outcome::Failed
                }
            };
            tracing::debug!(outfile = %unit.name, ?outcome, "outfile finished");
            summary.outcomes.push((unit.name.clone(), outcome));
        }
        Ok(summary)
    }

    fn run_unit<R: BufRead, W: Write>(
        &self,
        index: usize,
        total: usize,
        unit: &OutfileUnit,
        options: &RunOptions,
        input: &mut R,
        out: &mut W,
    ) -> Result<Outcome> {
        let mut section = unit.section.clone();
        if let Some(dir) = &options.output_dir {
            section.set("output_basedir", dir.to_string_lossy());
        }
        let invocation = build(self.registry, &section, &self.cwd)?;
        let debug = options.debug || section.get_bool("debug") == Some(true);
        let preview = options.preview || section.get_bool("preview") == Some(true);

        say(out, format_args!("Encoding: {}/{}: {}", index, total, invocation.filename))?;

        if debug {
            say(out, format_args!("{}", invocation.shell_command(&self.handbrake)))?;
            if preview {
                let command = thumbnail_command(&self.thumbnailer, &invocation.output);
                say(out, format_args!("{}", shell_words::join(command)))?;
            }
            return Ok(Outcome::Printed);
        }

        if !confirm_output(&invocation.output, options.overwrite, input, out)? {
            say(
                out,
                format_args!("{} was not encoded", invocation.output.display()),
            )?;
            return Ok(Outcome::Skipped);
        }

        if let Some(parent) = invocation.output.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HbrError::ExecutionError(format!(
                    "failed to create output directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let log = log_path(&invocation.output, &self.log_extension);
        tracing::info!(outfile = %unit.name, log = %log.display(), "running HandBrakeCLI");
        run_logged(&invocation.command_line(&self.handbrake), &log)?;

        if preview {
            say(
                out,
                format_args!(
                    "Generating preview: {}/{}: {}",
                    index,
                    total,
                    thumbnail_path(&invocation.output).display()
                ),
            )?;
            if let Err(e) = make_thumbnail(&self.thumbnailer, &invocation.output) {
                eprintln!("Warning: {}", e);
            }
        }
        Ok(Outcome::Encoded)
    }
}

fn say<W: Write>(out: &mut W, line: fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{}", line)
        .map_err(|e| HbrError::ExecutionError(format!("failed to write output: {}", e)))
}
