//! Line-based key file scanning and parsing.

use super::{KeyFile, Section};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A structural defect found before the file is parsed into sections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureProblem {
    #[error("Duplicate group at line {line}")]
    DuplicateGroup { line: usize, group: String },

    #[error("Duplicate key definition at line {line}")]
    DuplicateKey {
        line: usize,
        group: String,
        key: String,
    },

    #[error("Key defined outside of a group at line {line}")]
    KeyOutsideGroup { line: usize, key: String },

    #[error("Malformed line {line}")]
    Malformed { line: usize, text: String },
}

impl StructureProblem {
    pub fn line(&self) -> usize {
        match self {
            StructureProblem::DuplicateGroup { line, .. }
            | StructureProblem::DuplicateKey { line, .. }
            | StructureProblem::KeyOutsideGroup { line, .. }
            | StructureProblem::Malformed { line, .. } => *line,
        }
    }

    pub fn group(&self) -> Option<&str> {
        match self {
            StructureProblem::DuplicateGroup { group, .. }
            | StructureProblem::DuplicateKey { group, .. } => Some(group),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            StructureProblem::DuplicateKey { key, .. }
            | StructureProblem::KeyOutsideGroup { key, .. } => Some(key),
            _ => None,
        }
    }
}

enum Line<'a> {
    Blank,
    Group(&'a str),
    Entry(&'a str, &'a str),
    Malformed,
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Blank;
    }
    if let Some(rest) = line.strip_prefix('[') {
        return match rest.strip_suffix(']') {
            Some(name) if !name.trim().is_empty() && !name.contains(['[', ']']) => {
                Line::Group(name.trim())
            }
            _ => Line::Malformed,
        };
    }
    match line.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Line::Entry(key.trim(), value.trim()),
        _ => Line::Malformed,
    }
}

/// Scan raw text for every structural problem. Line numbers are 1-based.
pub fn scan_structure(text: &str) -> Vec<StructureProblem> {
    let mut problems = Vec::new();
    let mut groups: HashSet<&str> = HashSet::new();
    let mut keys: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut current: Option<&str> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        match classify(raw) {
            Line::Blank => {}
            Line::Group(name) => {
                if !groups.insert(name) {
                    problems.push(StructureProblem::DuplicateGroup {
                        line,
                        group: name.to_string(),
                    });
                }
                current = Some(name);
            }
            Line::Entry(key, _) => match current {
                Some(group) => {
                    if !keys.entry(group).or_default().insert(key) {
                        problems.push(StructureProblem::DuplicateKey {
                            line,
                            group: group.to_string(),
                            key: key.to_string(),
                        });
                    }
                }
                None => problems.push(StructureProblem::KeyOutsideGroup {
                    line,
                    key: key.to_string(),
                }),
            },
            Line::Malformed => problems.push(StructureProblem::Malformed {
                line,
                text: raw.trim().to_string(),
            }),
        }
    }

    problems
}

/// Build sections from text that has already passed [`scan_structure`].
pub(super) fn parse_sections(text: &str) -> KeyFile {
    let mut file = KeyFile::new();
    let mut current: Option<Section> = None;

    for raw in text.lines() {
        match classify(raw) {
            Line::Group(name) => {
                if let Some(section) = current.take() {
                    file.insert(section);
                }
                current = Some(Section::new(name));
            }
            Line::Entry(key, value) => {
                if let Some(section) = current.as_mut() {
                    section.set(key, value);
                }
            }
            Line::Blank | Line::Malformed => {}
        }
    }
    if let Some(section) = current {
        file.insert(section);
    }

    file
}
