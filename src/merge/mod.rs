//! Right-biased merge of configuration sections.
//!
//! `merge(preferred, alternate)` starts from a copy of `alternate`, removes
//! every key of `alternate` that conflicts with a key set in `preferred`,
//! then writes all of `preferred` on top. Inputs are never modified.
//!
//! Scopes merge in a fixed order: global `CONFIG` under local `CONFIG`, then
//! the result under each `OUTFILE<n>`.

#[cfg(test)]
mod tests;

use crate::keyfile::{CONFIG_GROUP, KeyFile, Section};
use crate::registry::Registry;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("Missing group [{0}] needed for merge")]
    MissingGroup(String),

    #[error("Both groups are empty; nothing to merge into [{0}]")]
    BothEmpty(String),
}

/// A key deleted from the alternate side during a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub key: String,
    pub value: String,
    /// The preferred key that caused the removal.
    pub because_of: String,
}

/// Result of a merge: the new section and what was dropped to build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub section: Section,
    pub removed: Vec<Removal>,
}

/// Merge `preferred` over `alternate` into a new section called `name`.
pub fn merge(
    registry: &Registry,
    preferred: Option<&Section>,
    alternate: Option<&Section>,
    name: &str,
) -> Result<Merged, MergeError> {
    let preferred = preferred.ok_or_else(|| MergeError::MissingGroup(name.to_string()))?;
    let alternate =
        alternate.ok_or_else(|| MergeError::MissingGroup(CONFIG_GROUP.to_string()))?;
    if preferred.is_empty() && alternate.is_empty() {
        return Err(MergeError::BothEmpty(name.to_string()));
    }

    let mut working = alternate.clone();
    working.rename(name);
    let mut removed = Vec::new();

    for (key, value) in preferred.iter() {
        for conflict in registry.conflicts_for(key) {
            if !conflict.triggered_by(value) {
                continue;
            }
            // Match against the untouched alternate, not the working copy.
            let Some(alt_value) = alternate.get(conflict.conflicting) else {
                continue;
            };
            if !conflict.matches_conflicting(alt_value) {
                continue;
            }
            if working.remove(conflict.conflicting).is_some() {
                tracing::info!(
                    section = name,
                    removed = conflict.conflicting,
                    value = alt_value,
                    because_of = key,
                    "removed conflicting key during merge"
                );
                removed.push(Removal {
                    key: conflict.conflicting.to_string(),
                    value: alt_value.to_string(),
                    because_of: key.to_string(),
                });
            }
        }
    }

    for (key, value) in preferred.iter() {
        working.set(key, value);
    }

    Ok(Merged {
        section: working,
        removed,
    })
}

/// The fully merged configuration for one outfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfileUnit {
    /// `OUTFILE<n>` group name.
    pub name: String,
    pub section: Section,
    pub removed: Vec<Removal>,
}

impl OutfileUnit {
    pub fn episode(&self) -> Option<i64> {
        self.section.get_int("episode")
    }
}

/// Merge global `CONFIG` (if any) under the local file's `CONFIG`.
pub fn merge_config(
    registry: &Registry,
    global: Option<&Section>,
    local: &KeyFile,
) -> Result<Merged, MergeError> {
    let local_config = local.section(CONFIG_GROUP);
    match global {
        Some(global) => merge(registry, local_config, Some(global), CONFIG_GROUP),
        None => {
            let section = local_config
                .cloned()
                .ok_or_else(|| MergeError::MissingGroup(CONFIG_GROUP.to_string()))?;
            Ok(Merged {
                section,
                removed: Vec::new(),
            })
        }
    }
}

/// Merge `merged_config` under one outfile section.
pub fn merge_outfile(
    registry: &Registry,
    merged_config: &Section,
    outfile: &Section,
) -> Result<OutfileUnit, MergeError> {
    let merged = merge(registry, Some(outfile), Some(merged_config), outfile.name())?;
    Ok(OutfileUnit {
        name: outfile.name().to_string(),
        section: merged.section,
        removed: merged.removed,
    })
}
