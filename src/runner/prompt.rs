//! Decisions about existing output files.

use crate::error::{HbrError, Result};
use crate::validate::is_writable;
use std::io::{BufRead, Write};
use std::path::Path;

/// Whether to encode over `output`.
///
/// Missing outputs are always written. An existing output must be writable;
/// with `overwrite` it is replaced, otherwise the user is asked on `input`
/// until they answer y or n. Running out of input is an error.
pub fn confirm_output<R: BufRead, W: Write>(
    output: &Path,
    overwrite: bool,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    if !output.exists() {
        return Ok(true);
    }
    if !is_writable(output) {
        return Err(HbrError::ExecutionError(format!(
            "filename: \"{}\" is not writable",
            output.display()
        )));
    }
    if overwrite {
        return Ok(true);
    }

    let io_err = |e: std::io::Error| HbrError::ExecutionError(format!("failed to prompt: {}", e));
    writeln!(out, "File: \"{}\" already exists.", output.display()).map_err(io_err)?;
    writeln!(out, "Run hbr with '-y' option to automatically overwrite.").map_err(io_err)?;

    let mut line = String::new();
    loop {
        write!(out, "Do you want to overwrite? (y/n) ").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        line.clear();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Err(HbrError::ExecutionError(format!(
                "no overwrite decision for \"{}\"",
                output.display()
            )));
        }
        match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => {}
        }
    }
}
