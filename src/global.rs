//! Global configuration file location and defaults.
//!
//! The global config is a key file holding a single `CONFIG` group that sits
//! underneath every input file's own `CONFIG`. It lives in the hbr config
//! directory and is generated on first use.

use crate::error::{HbrError, Result};
use crate::keyfile::{CONFIG_GROUP, KeyFile, Section};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the global config inside the config directory.
pub const GLOBAL_CONFIG_FILE: &str = "hbr.conf";

const DEFAULT_HEADER: &str = "hbr (handbrake runner) config file
Options follow the naming from HandBrakeCLI --help
Defaults are based on HandBrake's \"High Profile\" preset";

/// `$XDG_CONFIG_HOME/hbr`, or `$HOME/.config/hbr` when `XDG_CONFIG_HOME`
/// is unset or empty.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("hbr"));
    }
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join("hbr"))
}

/// Default location of the global config.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}

/// The generated global config: HandBrake's "High Profile" preset.
pub fn default_config() -> KeyFile {
    let mut config = Section::new(CONFIG_GROUP);
    for (key, value) in [
        ("encoder", "x264"),
        ("quality", "20.0"),
        ("audio", "1,1"),
        ("aencoder", "av_aac,copy:ac3"),
        ("ab", "160,160"),
        ("mixdown", "dpl2,none"),
        ("arate", "auto,auto"),
        ("audio-copy-mask", "copy:aac,copy:ac3,copy:dtshd,copy:dts,copy:mp3"),
        ("audio-fallback", "ac3"),
        ("format", "av_mp4"),
        ("decomb", "true"),
        ("loose-anamorphic", "true"),
        ("modulus", "2"),
        ("markers", "true"),
        ("encoder-preset", "medium"),
        ("encoder-profile", "high"),
        ("encoder-level", "4.1"),
    ] {
        config.set(key, value);
    }

    let mut file = KeyFile::new();
    file.insert(config);
    file
}

/// Text written when the global config is generated.
pub fn default_config_text() -> String {
    default_config().to_text(Some(DEFAULT_HEADER))
}

/// Make sure a global config exists at `path`, generating the default one
/// (and its directory) when it does not.
///
/// Returns `true` when the file was generated.
pub fn ensure_config(path: &Path) -> Result<bool> {
    if path.is_file() {
        return Ok(false);
    }
    if path.exists() {
        return Err(HbrError::UserError(format!(
            "global config '{}' is not a regular file",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            HbrError::UserError(format!(
                "failed to create config directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, default_config_text()).map_err(|e| {
        HbrError::UserError(format!(
            "failed to write default config '{}': {}",
            path.display(),
            e
        ))
    })?;
    tracing::info!(path = %path.display(), "generated default global config");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::registry::tables::V1_3_0;
    use crate::validate::check_global;
    use serial_test::serial;

    /// Run `f` with `XDG_CONFIG_HOME` and `HOME` set as given, restoring both.
    fn with_env<F: FnOnce()>(xdg: Option<&str>, home: Option<&str>, f: F) {
        let saved_xdg = env::var_os("XDG_CONFIG_HOME");
        let saved_home = env::var_os("HOME");
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            match xdg {
                Some(v) => env::set_var("XDG_CONFIG_HOME", v),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
            match home {
                Some(v) => env::set_var("HOME", v),
                None => env::remove_var("HOME"),
            }
        }
        f();
        unsafe {
            match saved_xdg {
                Some(v) => env::set_var("XDG_CONFIG_HOME", v),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
            match saved_home {
                Some(v) => env::set_var("HOME", v),
                None => env::remove_var("HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_prefers_xdg() {
        with_env(Some("/xdg"), Some("/home/user"), || {
            assert_eq!(config_dir(), Some(PathBuf::from("/xdg/hbr")));
            assert_eq!(
                default_config_path(),
                Some(PathBuf::from("/xdg/hbr/hbr.conf"))
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_falls_back_to_home() {
        with_env(None, Some("/home/user"), || {
            assert_eq!(config_dir(), Some(PathBuf::from("/home/user/.config/hbr")));
        });
        with_env(Some(""), Some("/home/user"), || {
            assert_eq!(config_dir(), Some(PathBuf::from("/home/user/.config/hbr")));
        });
        with_env(None, None, || {
            assert_eq!(config_dir(), None);
        });
    }

    #[test]
    fn test_default_config_passes_validation() {
        let registry = Registry::new(&V1_3_0);
        let report = check_global(&registry, &default_config_text(), "hbr.conf");
        assert!(
            report.is_valid(),
            "{:?}",
            report.diagnostics.iter().collect::<Vec<_>>()
        );
        assert!(report.diagnostics.is_empty());
        assert_eq!(
            report.config.as_ref().and_then(|c| c.get("encoder")),
            Some("x264")
        );
    }

    #[test]
    fn test_default_config_text_has_header() {
        let text = default_config_text();
        assert!(text.starts_with("# hbr (handbrake runner) config file\n"));
        assert!(text.contains("\n[CONFIG]\n"));
        assert!(text.contains("\nformat=av_mp4\n"));
    }

    #[test]
    fn test_ensure_config_generates_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hbr").join(GLOBAL_CONFIG_FILE);

        assert!(ensure_config(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), default_config_text());

        fs::write(&path, "[CONFIG]\nformat=av_mkv\n").unwrap();
        assert!(!ensure_config(&path).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[CONFIG]\nformat=av_mkv\n"
        );
    }

    #[test]
    fn test_ensure_config_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("is not a regular file"));
    }
}
