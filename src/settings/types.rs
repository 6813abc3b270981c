//! Settings enums and default value functions.

use crate::diagnostics::Severity;
use serde::{Deserialize, Serialize};

/// Lowest severity of configuration diagnostics that gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    /// Print everything, including merge notes.
    Info,
    /// Print warnings and errors (default).
    #[default]
    Warn,
    /// Print errors only.
    Error,
}

impl MessageLevel {
    /// Parse a message level from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// The diagnostic severity this level starts printing at.
    pub fn threshold(self) -> Severity {
        match self {
            Self::Info => Severity::Info,
            Self::Warn => Severity::Warning,
            Self::Error => Severity::Error,
        }
    }
}

pub(crate) fn default_handbrake_command() -> String {
    "HandBrakeCLI".to_string()
}

pub(crate) fn default_thumbnail_command() -> String {
    "ffmpegthumbnailer".to_string()
}

pub(crate) fn default_log_extension() -> String {
    "log".to_string()
}
