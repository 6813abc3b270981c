//! Filename and argument construction for one merged outfile.
//!
//! [`build`] is a pure function of the registry, the merged section and the
//! working directory. It assumes the section passed validation; anything it
//! cannot render is a [`BuildError`].

mod args;
mod filename;
mod rotate;

#[cfg(test)]
mod tests;

pub use args::build_args;
pub use filename::{
    MAX_BASENAME_LEN, MAX_EPISODE, MAX_SEASON, container_extension, extra_directory, input_path,
    output_filename, output_path,
};
pub use rotate::rotation_code;

use crate::keyfile::Section;
use crate::registry::Registry;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Missing key definition for \"{0}\"")]
    MissingKey(&'static str),

    #[error("{key} number {value} is outside range 0-{max}")]
    OutOfRange {
        key: &'static str,
        value: i64,
        max: i64,
    },

    #[error("Invalid value for \"{key}\": {value}")]
    InvalidValue { key: String, value: String },
}

/// Everything needed to run HandBrakeCLI for one outfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// `OUTFILE<n>` group the invocation was built from.
    pub group: String,
    pub filename: String,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Options followed by `-i <input> -o <output>`.
    pub args: Vec<String>,
}

impl Invocation {
    /// Full command line: `program` (which may carry its own arguments)
    /// followed by [`Invocation::args`].
    pub fn command_line(&self, program: &[String]) -> Vec<String> {
        program.iter().chain(self.args.iter()).cloned().collect()
    }

    /// The command line quoted for a POSIX shell.
    pub fn shell_command(&self, program: &[String]) -> String {
        shell_words::join(self.command_line(program))
    }
}

/// Build the filename, paths and argument list for a merged outfile.
pub fn build(registry: &Registry, section: &Section, cwd: &Path) -> Result<Invocation, BuildError> {
    let filename = output_filename(section)?;
    let input = input_path(section, cwd)?;
    let output = output_path(section, &filename, cwd)?;

    let mut args = build_args(registry, section);
    args.push("-i".to_string());
    args.push(input.to_string_lossy().into_owned());
    args.push("-o".to_string());
    args.push(output.to_string_lossy().into_owned());

    Ok(Invocation {
        group: section.name().to_string(),
        filename,
        input,
        output,
        args,
    })
}
