//! Settings struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for running HandBrakeCLI and its helpers.
///
/// This struct represents the contents of `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HandBrakeCLI command line, split like a shell would (e.g. `nice -n 19 HandBrakeCLI`).
    #[serde(default = "default_handbrake_command")]
    pub handbrake_command: String,

    /// Program used for preview thumbnails.
    #[serde(default = "default_thumbnail_command")]
    pub thumbnail_command: String,

    /// HandBrake version to assume instead of probing the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handbrake_version: Option<String>,

    #[serde(default)]
    pub message_level: MessageLevel,

    /// Extension (no leading dot) of the per-outfile HandBrakeCLI log.
    #[serde(default = "default_log_extension")]
    pub log_extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            handbrake_command: default_handbrake_command(),
            thumbnail_command: default_thumbnail_command(),
            handbrake_version: None,
            message_level: MessageLevel::default(),
            log_extension: default_log_extension(),
        }
    }
}
