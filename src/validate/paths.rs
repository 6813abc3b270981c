//! Filesystem backed validators.

use super::KeyCheck;
use std::fs;
use std::path::Path;

/// Longest accepted filename component, in bytes.
const MAX_COMPONENT_LEN: usize = 4096;

pub(super) fn filename_component(c: &mut KeyCheck<'_>) -> bool {
    let len = c.value.len();
    if len < 1 || len >= MAX_COMPONENT_LEN {
        return c.error("Invalid component length");
    }
    if c.value.chars().any(char::is_control) {
        return c.error("Filename component contains control character");
    }
    if c.value.contains('/') {
        return c.error("Filename component contains path separator");
    }
    true
}

pub(super) fn readable_path(c: &mut KeyCheck<'_>) -> bool {
    if fs::read_dir(c.value).is_ok() {
        return true;
    }
    c.error("Could not read path specified by key")
}

/// The path or its nearest existing ancestor must be a writable directory.
pub(super) fn writable_path(c: &mut KeyCheck<'_>) -> bool {
    let mut current = Some(Path::new(c.value));
    while let Some(path) = current {
        if path.as_os_str().is_empty() {
            break;
        }
        if path.is_file() {
            return c.error("Regular file specified instead of path");
        }
        if path.is_dir() {
            if is_writable(path) {
                return true;
            }
            break;
        }
        current = path.parent();
    }
    c.error("Unwriteable path specified by key")
}

pub(crate) fn is_writable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| !m.permissions().readonly())
}

pub(super) fn file_exists(c: &mut KeyCheck<'_>) -> bool {
    if fs::File::open(c.value).is_ok() {
        return true;
    }
    c.error("Could not read file specified")
}

pub(super) fn file_list_exists(c: &mut KeyCheck<'_>) -> bool {
    let files = c.list();
    if files.is_empty() {
        return c.error("File not specified");
    }
    let mut valid = true;
    for file in files {
        if fs::File::open(file).is_err() {
            valid = c.error_item("Could not read file specified", file);
        }
    }
    valid
}

pub(super) fn file_does_not_exist(c: &mut KeyCheck<'_>) -> bool {
    if c.value.is_empty() {
        return c.error("File not specified");
    }
    if Path::new(c.value).exists() {
        return c.error("File already exists");
    }
    true
}

/// A file name or glob pattern whose directory is readable.
pub(super) fn filespec(c: &mut KeyCheck<'_>) -> bool {
    if c.value.is_empty() {
        return c.error("File not specified");
    }
    let has_glob = c.value.contains(['*', '?', '[']);
    let path = Path::new(c.value);
    let ok = if has_glob {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::read_dir(dir).is_ok()
    } else {
        fs::File::open(path).is_ok()
    };
    if ok {
        return true;
    }
    c.error("Could not read file specified")
}

/// Preset names may contain spaces but no control characters or separators.
pub(super) fn preset_name(c: &mut KeyCheck<'_>) -> bool {
    let name = c.value;
    if name.is_empty() || name.chars().any(char::is_control) || name.contains('/') {
        return c.error("Invalid preset name");
    }
    true
}
