//! Staged validation of global and input key files.
//!
//! A file moves through [`Stage`]s in order. A stage that finds problems
//! still lets the later stages run so every problem is reported at once;
//! only structural defects stop the pipeline, because the file cannot be
//! parsed into sections.

use super::check_option;
use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::keyfile::{
    CONFIG_GROUP, KeyFile, KeyFileError, Section, is_outfile_group, parse_bool, scan_structure,
};
use crate::merge::{OutfileUnit, Removal, merge_config, merge_outfile};
use crate::registry::Registry;
use std::path::Path;

/// Keys every merged outfile must define.
pub const REQUIRED_KEYS: [&str; 4] = ["type", "iso_filename", "name", "title"];

/// Validation stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Unchecked,
    StructurallyChecked,
    GroupShapeChecked,
    KeyTypesChecked,
    RequiresChecked,
    Ready,
}

/// Outcome of validating one key file.
#[derive(Debug)]
pub struct Report {
    pub path: String,
    /// Last stage the file reached.
    pub stage: Stage,
    pub file: Option<KeyFile>,
    /// Merged `CONFIG` (global under local, for input files).
    pub config: Option<Section>,
    /// One merged unit per `OUTFILE<n>` that merged cleanly.
    pub units: Vec<OutfileUnit>,
    pub diagnostics: Diagnostics,
}

impl Report {
    fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            stage: Stage::Unchecked,
            file: None,
            config: None,
            units: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.stage == Stage::Ready
    }

    /// One-line summary for the command boundary.
    pub fn summary(&self) -> String {
        format!(
            "{} error(s), {} warning(s) in {}",
            self.diagnostics.error_count(),
            self.diagnostics.warning_count(),
            self.path
        )
    }

    fn error(&self, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(Severity::Error, message).with_path(&self.path)
    }

    fn finish(&mut self) {
        if !self.diagnostics.has_errors() {
            self.stage = Stage::Ready;
        }
    }
}

/// Read and validate a global configuration file.
pub fn load_global(registry: &Registry, path: &Path) -> Result<Report, KeyFileError> {
    let text = read(path)?;
    Ok(check_global(registry, &text, &path.display().to_string()))
}

/// Read and validate an input file against an optional global `CONFIG`.
pub fn load_input(
    registry: &Registry,
    path: &Path,
    global: Option<&Section>,
) -> Result<Report, KeyFileError> {
    let text = read(path)?;
    Ok(check_input(
        registry,
        &text,
        &path.display().to_string(),
        global,
    ))
}

fn read(path: &Path) -> Result<String, KeyFileError> {
    std::fs::read_to_string(path).map_err(|source| KeyFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate global configuration text. Only `CONFIG` is allowed.
pub fn check_global(registry: &Registry, text: &str, path: &str) -> Report {
    let mut report = Report::new(path);
    let Some(file) = check_structure(&mut report, text) else {
        return report;
    };

    if file.section(CONFIG_GROUP).is_none() {
        let d = report.error("Keyfile missing [CONFIG] section");
        report.diagnostics.push(d);
    }
    for group in file.group_names().filter(|g| *g != CONFIG_GROUP) {
        let d = report.error("Invalid section in config file").with_group(group);
        report.diagnostics.push(d);
    }
    report.stage = Stage::GroupShapeChecked;

    for section in file.sections() {
        check_keys(registry, section, path, &mut report.diagnostics);
        check_same_scope_conflicts(registry, section, path, &mut report.diagnostics);
        check_global_composites(registry, section, path, &mut report.diagnostics);
    }
    report.stage = Stage::KeyTypesChecked;

    for section in file.sections() {
        check_requires(registry, section, path, &mut report.diagnostics);
    }
    report.stage = Stage::RequiresChecked;

    report.config = file.section(CONFIG_GROUP).cloned();
    report.file = Some(file);
    report.finish();
    report
}

/// Validate input file text: one `CONFIG` plus one or more `OUTFILE<n>`.
pub fn check_input(
    registry: &Registry,
    text: &str,
    path: &str,
    global: Option<&Section>,
) -> Report {
    let mut report = Report::new(path);
    let Some(file) = check_structure(&mut report, text) else {
        return report;
    };

    let has_config = file.section(CONFIG_GROUP).is_some();
    if !has_config {
        let d = report.error("Keyfile missing [CONFIG] section");
        report.diagnostics.push(d);
    }
    for group in file
        .group_names()
        .filter(|g| *g != CONFIG_GROUP && !is_outfile_group(g))
    {
        let d = report.error("Invalid section in config file").with_group(group);
        report.diagnostics.push(d);
    }
    if file.outfiles().next().is_none() {
        let d = report.error("No OUTFILE sections found");
        report.diagnostics.push(d);
    }
    report.stage = Stage::GroupShapeChecked;

    for section in file.sections() {
        check_keys(registry, section, path, &mut report.diagnostics);
        check_same_scope_conflicts(registry, section, path, &mut report.diagnostics);
    }

    if has_config {
        merge_units(registry, &file, global, &mut report);
    }
    for unit in &report.units {
        check_composites(registry, &unit.section, path, &mut report.diagnostics);
    }
    report.stage = Stage::KeyTypesChecked;

    for unit in &report.units {
        check_required_keys(&unit.section, path, &mut report.diagnostics);
        check_requires(registry, &unit.section, path, &mut report.diagnostics);
    }
    report.stage = Stage::RequiresChecked;

    report.file = Some(file);
    report.finish();
    report
}

fn check_structure(report: &mut Report, text: &str) -> Option<KeyFile> {
    let problems = scan_structure(text);
    for problem in &problems {
        let mut d = report.error(problem.to_string());
        if let Some(group) = problem.group() {
            d = d.with_group(group);
        }
        if let Some(key) = problem.key() {
            d = d.with_key(key, None);
        }
        report.diagnostics.push(d);
    }
    if !problems.is_empty() {
        return None;
    }
    match KeyFile::parse(text) {
        Ok(file) => {
            report.stage = Stage::StructurallyChecked;
            Some(file)
        }
        Err(e) => {
            let d = report.error(e.to_string());
            report.diagnostics.push(d);
            None
        }
    }
}

/// Unknown keys, then the validator of every known key that reads only
/// its own value. Composite validators run separately.
fn check_keys(registry: &Registry, section: &Section, path: &str, diagnostics: &mut Diagnostics) {
    for (key, value) in section.iter() {
        let Some(option) = registry.get(key) else {
            let message = match key.strip_prefix("no-") {
                Some(base) if registry.contains(base) => {
                    format!("Invalid key; use \"{}=false\" to negate", base)
                }
                _ => "Invalid key".to_string(),
            };
            diagnostics.push(
                Diagnostic::new(Severity::Error, message)
                    .with_path(path)
                    .with_group(section.name())
                    .with_key(key, Some(value)),
            );
            continue;
        };
        if !option.validator.is_composite() {
            check_option(option, section, path, diagnostics);
        }
    }
}

fn check_composites(
    registry: &Registry,
    section: &Section,
    path: &str,
    diagnostics: &mut Diagnostics,
) {
    for key in section.keys() {
        if let Some(option) = registry.get(key)
            && option.validator.is_composite()
        {
            check_option(option, section, path, diagnostics);
        }
    }
}

/// Composite checks on a global `CONFIG`. Without `audio` the track count
/// is unknown until an input file is merged, so checks against it wait for
/// the merged outfiles.
fn check_global_composites(
    registry: &Registry,
    section: &Section,
    path: &str,
    diagnostics: &mut Diagnostics,
) {
    let has_tracks = section.contains("audio");
    for key in section.keys() {
        if let Some(option) = registry.get(key)
            && option.validator.is_composite()
            && (has_tracks || !option.validator.counts_audio_tracks())
        {
            check_option(option, section, path, diagnostics);
        }
    }
}

/// Conflicts between keys of one section. Conflicts across scopes are
/// resolved by merging instead.
fn check_same_scope_conflicts(
    registry: &Registry,
    section: &Section,
    path: &str,
    diagnostics: &mut Diagnostics,
) {
    for (key, value) in section.iter() {
        for conflict in registry.conflicts_for(key) {
            if !conflict.triggered_by(value) {
                continue;
            }
            if let Some(other) = section.get(conflict.conflicting)
                && conflict.matches_conflicting(other)
            {
                diagnostics.push(
                    Diagnostic::new(
                        Severity::Error,
                        format!("Key \"{}\" conflicts with \"{}\"", key, conflict.conflicting),
                    )
                    .with_path(path)
                    .with_group(section.name())
                    .with_key(key, Some(value)),
                );
            }
        }
    }
}

fn merge_units(
    registry: &Registry,
    file: &KeyFile,
    global: Option<&Section>,
    report: &mut Report,
) {
    let config = match merge_config(registry, global, file) {
        Ok(merged) => {
            note_removals(report, CONFIG_GROUP, &merged.removed);
            merged.section
        }
        Err(e) => {
            let d = report.error(e.to_string()).with_group(CONFIG_GROUP);
            report.diagnostics.push(d);
            return;
        }
    };

    for outfile in file.outfiles() {
        match merge_outfile(registry, &config, outfile) {
            Ok(unit) => {
                note_removals(report, &unit.name, &unit.removed);
                report.units.push(unit);
            }
            Err(e) => {
                let d = report.error(e.to_string()).with_group(outfile.name());
                report.diagnostics.push(d);
            }
        }
    }
    report.config = Some(config);
}

fn note_removals(report: &mut Report, group: &str, removed: &[Removal]) {
    for r in removed {
        report.diagnostics.push(
            Diagnostic::new(
                Severity::Info,
                format!("Removed conflicting key; \"{}\" takes precedence", r.because_of),
            )
            .with_path(&report.path)
            .with_group(group)
            .with_key(&r.key, Some(&r.value)),
        );
    }
}

fn check_required_keys(section: &Section, path: &str, diagnostics: &mut Diagnostics) {
    for key in REQUIRED_KEYS {
        if !section.contains(key) {
            diagnostics.push(
                Diagnostic::new(
                    Severity::Error,
                    format!("Missing key definition for \"{}\"", key),
                )
                .with_path(path)
                .with_group(section.name()),
            );
        }
    }
}

/// Every requires relation of every key must hold. A negatable option
/// set to `false` is disabled and its own requirements do not apply.
fn check_requires(
    registry: &Registry,
    section: &Section,
    path: &str,
    diagnostics: &mut Diagnostics,
) {
    for (key, value) in section.iter() {
        if registry
            .get(key)
            .is_some_and(|o| o.negatable && parse_bool(value) == Some(false))
        {
            continue;
        }
        for require in registry.requires_for(key) {
            let message = match (section.get(require.required), require.value) {
                (None, _) => format!(
                    "Key \"{}\" requires \"{}\" but it is not set",
                    key, require.required
                ),
                (Some(actual), Some(wanted)) if !require.satisfied_by(actual) => format!(
                    "Key \"{}\" requires setting \"{}={}\"",
                    key, require.required, wanted
                ),
                _ => continue,
            };
            diagnostics.push(
                Diagnostic::new(Severity::Error, message)
                    .with_path(path)
                    .with_group(section.name())
                    .with_key(key, Some(value)),
            );
        }
    }
}
