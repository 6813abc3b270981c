//! Error types for the hbr CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Lower layers (key file parsing, merging, building) have their own error
//! enums which convert into [`HbrError`] at the command boundary.

use crate::build::BuildError;
use crate::exit_codes;
use crate::keyfile::KeyFileError;
use crate::merge::MergeError;
use thiserror::Error;

/// Main error type for hbr operations.
#[derive(Error, Debug)]
pub enum HbrError {
    /// User provided invalid arguments or an unusable file.
    #[error("{0}")]
    UserError(String),

    /// One or more key files failed validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A key file could not be read or parsed.
    #[error(transparent)]
    KeyFile(#[from] KeyFileError),

    /// Two sections could not be merged.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// A command line could not be built from a merged section.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// HandBrakeCLI (or a helper program) failed.
    #[error("Execution failed: {0}")]
    ExecutionError(String),
}

impl HbrError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HbrError::UserError(_) => exit_codes::USER_ERROR,
            HbrError::KeyFile(KeyFileError::Io { .. }) => exit_codes::USER_ERROR,
            HbrError::KeyFile(_) => exit_codes::VALIDATION_FAILURE,
            HbrError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            HbrError::Merge(_) => exit_codes::VALIDATION_FAILURE,
            HbrError::Build(_) => exit_codes::VALIDATION_FAILURE,
            HbrError::ExecutionError(_) => exit_codes::EXECUTION_FAILURE,
        }
    }
}

/// Result type alias for hbr operations.
pub type Result<T> = std::result::Result<T, HbrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = HbrError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = HbrError::ValidationError("2 errors in show.conf".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn execution_error_has_correct_exit_code() {
        let err = HbrError::ExecutionError("1 outfile failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::EXECUTION_FAILURE);
    }

    #[test]
    fn unreadable_key_file_is_a_user_error() {
        let err: HbrError = KeyFileError::Io {
            path: "missing.conf".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn merge_error_is_a_validation_failure() {
        let err: HbrError = MergeError::MissingGroup("OUTFILE3".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = HbrError::ValidationError("3 errors".to_string());
        assert_eq!(err.to_string(), "Validation failed: 3 errors");

        let err = HbrError::ExecutionError("HandBrakeCLI not found".to_string());
        assert_eq!(err.to_string(), "Execution failed: HandBrakeCLI not found");
    }
}
