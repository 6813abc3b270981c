//! HandBrake version detection.

use crate::error::{HbrError, Result};
use crate::registry::HandBrakeVersion;
use std::process::{Command, Stdio};

/// Flags tried, in order, to make HandBrakeCLI print its banner.
const PROBE_FLAGS: [&str; 2] = ["--version", "--update"];

/// Run `program` with each probe flag until one prints a version banner.
///
/// Spawn failures and unrecognised output both count as "unknown".
pub fn probe_version(program: &[String]) -> Option<HandBrakeVersion> {
    let (exe, args) = program.split_first()?;
    for flag in PROBE_FLAGS {
        let output = Command::new(exe)
            .args(args)
            .arg(flag)
            .stdin(Stdio::null())
            .output();
        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(program = %exe, error = %e, "version probe failed to start");
                return None;
            }
        };
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if let Some(version) =
            HandBrakeVersion::from_banner(&stdout).or_else(|| HandBrakeVersion::from_banner(&stderr))
        {
            tracing::debug!(%version, flag, "detected HandBrake version");
            return Some(version);
        }
    }
    None
}

/// The HandBrake version to validate against.
///
/// An explicit version (from `-H` or settings) wins and must parse.
/// Otherwise the executable is probed; `None` means the probe failed.
pub fn resolve_version(explicit: Option<&str>, program: &[String]) -> Result<Option<HandBrakeVersion>> {
    if let Some(version) = explicit {
        return version
            .parse::<HandBrakeVersion>()
            .map(Some)
            .map_err(HbrError::UserError);
    }
    Ok(probe_version(program))
}
