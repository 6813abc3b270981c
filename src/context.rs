//! Run context resolution for hbr.
//!
//! Every command starts from the same environment: settings, the HandBrake
//! version (and with it the option registry), and the validated global
//! config. This module resolves them once from the global flags.

use crate::cli::GlobalArgs;
use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::error::{HbrError, Result};
use crate::global;
use crate::registry::{HandBrakeVersion, Registry};
use crate::runner::resolve_version;
use crate::settings::{Settings, default_settings_path};
use crate::validate::{Report, load_global};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved environment for one hbr invocation.
#[derive(Debug)]
pub struct HbrContext {
    /// Directory relative key file paths resolve against.
    pub cwd: PathBuf,

    pub settings: Settings,

    /// HandBrake version in use, if it could be determined.
    pub version: Option<HandBrakeVersion>,

    /// Options of the selected HandBrakeCLI release.
    pub registry: Registry,

    /// Lowest severity printed.
    pub threshold: Severity,

    /// Notes about the environment (version fallback, generated config).
    pub notes: Diagnostics,

    /// Validation of the global config.
    pub global: Report,
}

impl HbrContext {
    /// Resolve the context from the global command line flags.
    ///
    /// # Returns
    ///
    /// * `Ok(HbrContext)` - Settings, registry, and global report are loaded
    /// * `Err(HbrError::UserError)` - Unreadable settings, bad `-H` value,
    ///   or a global config that cannot be located or read
    pub fn resolve(args: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            HbrError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        let settings = load_settings(args.settings.as_deref())?;
        let threshold = if args.quiet {
            Severity::Error
        } else {
            settings.message_level.threshold()
        };

        let explicit = args
            .hbversion
            .as_deref()
            .or(settings.handbrake_version.as_deref());
        let version = resolve_version(explicit, &settings.handbrake_program()?)?;
        let (registry, fallback) = Registry::for_version(version);
        tracing::debug!(table = registry.table_label(), ?version, "selected option table");

        let mut notes = Diagnostics::new();
        if let Some(warning) = fallback {
            notes.push(Diagnostic::new(Severity::Warning, warning));
        }

        let config_path = global_config_path(args.config.as_deref())?;
        if global::ensure_config(&config_path)? {
            notes.push(
                Diagnostic::new(Severity::Info, "Generated default global config")
                    .with_path(config_path.display().to_string()),
            );
        }
        let global = load_global(&registry, &config_path)?;

        Ok(Self {
            cwd,
            settings,
            version,
            registry,
            threshold,
            notes,
            global,
        })
    }

    /// Print the environment notes and the global config's diagnostics.
    pub fn print_notes(&self) {
        self.notes.print(self.threshold);
        self.global.diagnostics.print(self.threshold);
    }

    /// The global `CONFIG`, or a validation error if the global config is
    /// invalid.
    pub fn global_config(&self) -> Result<Option<&crate::keyfile::Section>> {
        if !self.global.is_valid() {
            return Err(HbrError::ValidationError(self.global.summary()));
        }
        Ok(self.global.config.as_ref())
    }
}

/// Settings from `explicit` (which must exist) or the default location
/// (which may not).
fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => Settings::load(path, true),
        None => match default_settings_path() {
            Some(path) => Settings::load(path, false),
            None => Ok(Settings::default()),
        },
    }
}

/// `--config` must name an existing file; the default location is
/// generated on demand.
fn global_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(HbrError::UserError(format!(
                "global config '{}' does not exist",
                path.display()
            )));
        }
        return Ok(path.to_path_buf());
    }
    global::default_config_path().ok_or_else(|| {
        HbrError::UserError(
            "could not locate the config directory: set HOME or XDG_CONFIG_HOME, or pass --config"
                .to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &TempDir) -> GlobalArgs {
        GlobalArgs {
            hbversion: Some("1.3.0".to_string()),
            config: None,
            settings: Some(write(dir, "settings.yaml", "message_level: info\n")),
            verbose: false,
            quiet: false,
        }
    }

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_explicit_config_is_validated() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir);
        args.config = Some(write(&dir, "hbr.conf", "[CONFIG]\nformat=av_mkv\n"));

        let ctx = HbrContext::resolve(&args).unwrap();

        assert_eq!(ctx.registry.table_label(), "1.3.0");
        assert_eq!(ctx.version, Some(HandBrakeVersion::new(1, 3, 0)));
        assert_eq!(ctx.threshold, Severity::Info);
        assert!(ctx.notes.is_empty());
        let config = ctx.global_config().unwrap().unwrap();
        assert_eq!(config.get("format"), Some("av_mkv"));
    }

    #[test]
    fn test_invalid_global_config_is_a_validation_error() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir);
        args.config = Some(write(&dir, "hbr.conf", "[CONFIG]\nbogus=1\n"));

        let ctx = HbrContext::resolve(&args).unwrap();
        let err = ctx.global_config().unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn test_missing_explicit_config_is_a_user_error() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir);
        args.config = Some(dir.path().join("missing.conf"));

        let err = HbrContext::resolve(&args).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_quiet_and_version_fallback() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir);
        args.config = Some(write(&dir, "hbr.conf", "[CONFIG]\n"));
        args.hbversion = Some("2.0.0".to_string());
        args.quiet = true;

        let ctx = HbrContext::resolve(&args).unwrap();

        assert_eq!(ctx.threshold, Severity::Error);
        assert_eq!(ctx.registry.table_label(), "1.3.0");
        assert_eq!(ctx.notes.warning_count(), 1);
    }

    #[test]
    #[serial]
    fn test_default_config_is_generated() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir);
        let saved = env::var_os("XDG_CONFIG_HOME");
        // SAFETY: tests touching the environment are serialized.
        unsafe { env::set_var("XDG_CONFIG_HOME", dir.path()) };

        let ctx = HbrContext::resolve(&args);

        unsafe {
            match saved {
                Some(v) => env::set_var("XDG_CONFIG_HOME", v),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
        let ctx = ctx.unwrap();
        assert!(dir.path().join("hbr").join("hbr.conf").is_file());
        assert!(ctx.global.is_valid());
        assert_eq!(ctx.notes.len(), 1);
    }
}
