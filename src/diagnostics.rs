//! Structured configuration diagnostics.
//!
//! Every problem found while validating a key file is recorded as a
//! [`Diagnostic`] carrying the file path, group, key, and value it refers to.
//! Validation never stops at the first problem; a [`Diagnostics`] collector
//! accumulates everything and the caller decides what to print.
//!
//! Printed form (stderr):
//!
//! ```text
//! hbr   ERROR: Value should be integer: (show.conf) [OUTFILE1] title=one
//! hbr WARNING: Audio track repeated: (show.conf) [CONFIG] audio=1,1
//! hbr    INFO: Removed conflicting key: (show.conf) [OUTFILE2] vb=2000
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic. Ordered so that `Error` is the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(format!(
                "invalid message level '{}': expected info, warn, or error",
                other
            )),
        }
    }
}

/// A single problem (or note) about a key file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            path: None,
            group: None,
            key: None,
            value: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Attach the key and (if defined) its value.
    pub fn with_key(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        self.key = Some(key.into());
        self.value = value.map(str::to_string);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hbr {:>7}: {}", self.severity.to_string(), self.message)?;
        if let Some(path) = &self.path {
            write!(f, ": ({})", path)?;
        }
        if let Some(group) = &self.group {
            write!(f, " [{}]", group)?;
        }
        if let Some(key) = &self.key {
            match &self.value {
                Some(value) => write!(f, " {}={}", key, value)?,
                None => write!(f, " {}= ", key)?,
            }
        }
        Ok(())
    }
}

/// Accumulates diagnostics for one validation run.
///
/// Identical diagnostics are recorded once. Composite checks run against
/// every merged outfile and would otherwise repeat the same finding.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if !self.items.contains(&diagnostic) {
            self.items.push(diagnostic);
        }
    }

    pub fn extend(&mut self, other: Diagnostics) {
        for d in other.items {
            self.push(d);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|d| d.severity == severity).count()
    }

    /// Print diagnostics at or above `threshold` to stderr.
    pub fn print(&self, threshold: Severity) {
        for d in self.items.iter().filter(|d| d.severity >= threshold) {
            eprintln!("{}", d);
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_matches_hbr_format() {
        let d = Diagnostic::new(Severity::Error, "Value should be integer")
            .with_path("show.conf")
            .with_group("OUTFILE1")
            .with_key("title", Some("one"));
        assert_eq!(
            d.to_string(),
            "hbr   ERROR: Value should be integer: (show.conf) [OUTFILE1] title=one"
        );
    }

    #[test]
    fn warning_and_info_labels_are_right_aligned() {
        let w = Diagnostic::new(Severity::Warning, "Audio track repeated");
        assert_eq!(w.to_string(), "hbr WARNING: Audio track repeated");

        let i = Diagnostic::new(Severity::Info, "note");
        assert_eq!(i.to_string(), "hbr    INFO: note");
    }

    #[test]
    fn missing_value_prints_trailing_space() {
        let d = Diagnostic::new(Severity::Error, "Missing value")
            .with_group("CONFIG")
            .with_key("crop", None);
        assert_eq!(d.to_string(), "hbr   ERROR: Missing value [CONFIG] crop= ");
    }

    #[test]
    fn duplicates_are_recorded_once() {
        let mut diags = Diagnostics::new();
        let d = Diagnostic::new(Severity::Error, "Invalid key").with_key("foo", Some("1"));
        diags.push(d.clone());
        diags.push(d);
        assert_eq!(diags.len(), 1);
        assert!(diags.has_errors());
    }

    #[test]
    fn counts_by_severity() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::new(Severity::Warning, "a"));
        diags.push(Diagnostic::new(Severity::Warning, "b"));
        diags.push(Diagnostic::new(Severity::Error, "c"));
        assert_eq!(diags.warning_count(), 2);
        assert_eq!(diags.error_count(), 1);
    }

    #[test]
    fn severity_parses_message_levels() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn serializes_without_empty_fields() {
        let d = Diagnostic::new(Severity::Error, "Keyfile missing [CONFIG] section")
            .with_path("a.conf");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(
            json,
            r#"{"severity":"error","message":"Keyfile missing [CONFIG] section","path":"a.conf"}"#
        );
    }
}
