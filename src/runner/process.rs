//! Subprocess execution for encodes and thumbnails.

use crate::error::{HbrError, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// `<output>.<extension>`, next to the encoded file.
pub fn log_path(output: &Path, extension: &str) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// `<output>.png`.
pub fn thumbnail_path(output: &Path) -> PathBuf {
    log_path(output, "png")
}

/// Run `command_line` with stderr redirected to a fresh log at `log`.
///
/// The log starts with a timestamp and the quoted command. A non-zero exit
/// is an error; stdout is left attached to the terminal.
pub fn run_logged(command_line: &[String], log: &Path) -> Result<()> {
    let Some((program, args)) = command_line.split_first() else {
        return Err(HbrError::ExecutionError("empty command line".to_string()));
    };

    let mut log_file = File::create(log).map_err(|e| {
        HbrError::ExecutionError(format!("failed to create log '{}': {}", log.display(), e))
    })?;
    writeln!(
        log_file,
        "hbr: {}\n{}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S %z"),
        shell_words::join(command_line)
    )
    .map_err(|e| {
        HbrError::ExecutionError(format!("failed to write log '{}': {}", log.display(), e))
    })?;

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::from(log_file))
        .status()
        .map_err(|e| {
            HbrError::ExecutionError(format!(
                "failed to execute '{}': {}\n\
                 Fix: ensure the command is installed and in PATH.",
                program, e
            ))
        })?;

    if status.success() {
        Ok(())
    } else {
        let code = status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        Err(HbrError::ExecutionError(format!(
            "{} exited with status {} (see '{}')",
            program,
            code,
            log.display()
        )))
    }
}

/// Arguments for a preview thumbnail of `output`.
pub fn thumbnail_command(thumbnailer: &[String], output: &Path) -> Vec<String> {
    let mut command = thumbnailer.to_vec();
    command.extend([
        "-i".to_string(),
        output.to_string_lossy().into_owned(),
        "-o".to_string(),
        thumbnail_path(output).to_string_lossy().into_owned(),
        "-s0".to_string(),
        "-q10".to_string(),
    ]);
    command
}

/// Run the thumbnailer quietly; only the exit status matters.
pub fn make_thumbnail(thumbnailer: &[String], output: &Path) -> Result<()> {
    let command = thumbnail_command(thumbnailer, output);
    let Some((program, args)) = command.split_first() else {
        return Err(HbrError::ExecutionError("empty thumbnail command".to_string()));
    };
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| {
            HbrError::ExecutionError(format!("failed to execute '{}': {}", program, e))
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(HbrError::ExecutionError(format!(
            "thumbnail generation failed for '{}'",
            output.display()
        )))
    }
}
