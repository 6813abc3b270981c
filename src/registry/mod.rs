//! Option registry: every key hbr understands, for one HandBrake release.
//!
//! The registry is built once at startup from the selected versioned table
//! plus the hbr-only table, then passed by reference to validation, merging,
//! and argument building. It is immutable after construction.

mod index;
pub mod iso639;
pub mod tables;
pub mod types;
mod version;

pub use index::{Keyed, RelationIndex};
pub use types::{
    Arity, Category, Conflict, CustomKey, CustomKind, OptionDescriptor, OptionTable, Require,
    ValueType, Validator, Values,
};
pub use version::{HandBrakeVersion, KNOWN_TABLES, NEWEST_TESTED, TableSelection, select_table};

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Registry {
    table: &'static OptionTable,
    ordered: Vec<&'static OptionDescriptor>,
    by_name: HashMap<&'static str, &'static OptionDescriptor>,
    requires: RelationIndex<Require>,
    conflicts: RelationIndex<Conflict>,
}

impl Registry {
    /// Build a registry from a HandBrakeCLI table plus the hbr-only table.
    pub fn new(table: &'static OptionTable) -> Self {
        let ordered: Vec<&'static OptionDescriptor> = table
            .options
            .iter()
            .chain(tables::HBR.options.iter())
            .collect();
        let by_name = ordered.iter().map(|o| (o.name, *o)).collect();

        Self {
            table,
            ordered,
            by_name,
            requires: RelationIndex::build([table.requires, tables::HBR.requires]),
            conflicts: RelationIndex::build([table.conflicts, tables::HBR.conflicts]),
        }
    }

    /// Select a table for `version` and build the registry.
    ///
    /// Returns the fallback warning alongside, if any.
    pub fn for_version(version: Option<HandBrakeVersion>) -> (Self, Option<String>) {
        let selection = select_table(version);
        (Self::new(selection.table), selection.warning)
    }

    /// Registry for the newest supported release.
    pub fn newest() -> Self {
        Self::new(KNOWN_TABLES[KNOWN_TABLES.len() - 1].1)
    }

    /// Label of the HandBrakeCLI table in use (`1.3.0`, ...).
    pub fn table_label(&self) -> &'static str {
        self.table.label
    }

    pub fn get(&self, name: &str) -> Option<&'static OptionDescriptor> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All options in table order, HandBrakeCLI options first.
    pub fn options(&self) -> impl Iterator<Item = &'static OptionDescriptor> + '_ {
        self.ordered.iter().copied()
    }

    pub fn requires_for(&self, key: &str) -> &[&'static Require] {
        self.requires.get(key)
    }

    pub fn conflicts_for(&self, key: &str) -> &[&'static Conflict] {
        self.conflicts.get(key)
    }
}
