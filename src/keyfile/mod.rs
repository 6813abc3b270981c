//! Reader and writer for hbr's `[GROUP]` / `key=value` configuration files.
//!
//! Sections keep their keys in declaration order. Source sections are never
//! mutated by the engine; merging produces fresh [`Section`] values.

mod parse;
mod values;
mod write;


pub use parse::{StructureProblem, scan_structure};
pub use values::{parse_bool, split_list};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the settings group present in every key file.
pub const CONFIG_GROUP: &str = "CONFIG";

/// Prefix of the per-output groups (`OUTFILE1`, `OUTFILE2`, ...).
pub const OUTFILE_PREFIX: &str = "OUTFILE";

/// Errors raised while reading a key file.
#[derive(Error, Debug)]
pub enum KeyFileError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{problem}")]
    Structure { problem: StructureProblem },
}

/// An ordered group of `key=value` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set `key`, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of `key` parsed as a strict boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(parse_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    /// Value of `key` split as a comma separated list.
    pub fn get_list(&self, key: &str) -> Option<Vec<&str>> {
        self.get(key).map(|v| split_list(v, ','))
    }
}

/// A parsed key file: an ordered list of uniquely named sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFile {
    sections: Vec<Section>,
}

impl KeyFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a key file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, KeyFileError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| KeyFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse key file text, failing on the first structural problem.
    pub fn parse(text: &str) -> Result<Self, KeyFileError> {
        if let Some(problem) = scan_structure(text).into_iter().next() {
            return Err(KeyFileError::Structure { problem });
        }
        Ok(parse::parse_sections(text))
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Append a section, replacing one with the same name.
    pub fn insert(&mut self, section: Section) {
        match self.sections.iter_mut().find(|s| s.name == section.name) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Outfile sections in declaration order.
    pub fn outfiles(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| is_outfile_group(&s.name))
    }
}

/// True for `OUTFILE` followed by one or more digits.
pub fn is_outfile_group(name: &str) -> bool {
    name.strip_prefix(OUTFILE_PREFIX)
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}
