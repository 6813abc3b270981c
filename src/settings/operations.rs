//! Settings loading, validation, and command splitting.

use super::model::Settings;
use crate::error::{HbrError, Result};
use crate::registry::HandBrakeVersion;
use std::path::{Path, PathBuf};

/// `$XDG_CONFIG_HOME/hbr/settings.yaml`, falling back to
/// `$HOME/.config/hbr/settings.yaml`.
pub fn default_settings_path() -> Option<PathBuf> {
    crate::global::config_dir().map(|dir| dir.join("settings.yaml"))
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// A missing file yields the defaults when `required` is false; an
    /// explicitly named file must exist.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let path = path.as_ref();

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            HbrError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string. An empty document gives the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = if yaml.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| HbrError::UserError(format!("failed to parse settings YAML: {}", e)))?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - both commands must split into at least one word
    /// - `handbrake_version`, when set, must look like `X.Y.Z`
    /// - `log_extension` must be non-empty and have no leading dot
    pub fn validate(&self) -> Result<()> {
        split_command("handbrake_command", &self.handbrake_command)?;
        split_command("thumbnail_command", &self.thumbnail_command)?;

        if let Some(version) = &self.handbrake_version
            && version.parse::<HandBrakeVersion>().is_err()
        {
            return Err(HbrError::UserError(format!(
                "settings validation failed: handbrake_version '{}' is not a version number",
                version
            )));
        }

        if self.log_extension.is_empty() {
            return Err(HbrError::UserError(
                "settings validation failed: log_extension must be non-empty".to_string(),
            ));
        }
        if self.log_extension.starts_with('.') {
            return Err(HbrError::UserError(format!(
                "settings validation failed: log_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.log_extension,
                self.log_extension.trim_start_matches('.')
            )));
        }

        Ok(())
    }

    /// HandBrakeCLI program and leading arguments.
    pub fn handbrake_program(&self) -> Result<Vec<String>> {
        split_command("handbrake_command", &self.handbrake_command)
    }

    /// Thumbnailer program and leading arguments.
    pub fn thumbnail_program(&self) -> Result<Vec<String>> {
        split_command("thumbnail_command", &self.thumbnail_command)
    }
}

fn split_command(field: &str, command: &str) -> Result<Vec<String>> {
    let words = shell_words::split(command).map_err(|e| {
        HbrError::UserError(format!(
            "settings validation failed: {} could not be parsed: {}",
            field, e
        ))
    })?;
    if words.is_empty() {
        return Err(HbrError::UserError(format!(
            "settings validation failed: {} must not be empty",
            field
        )));
    }
    Ok(words)
}
