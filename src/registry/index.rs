//! Key-to-relations multimap used for requires and conflicts lookups.

use super::types::{Conflict, Require};
use std::collections::HashMap;

/// A relation indexed by the key that owns it.
pub trait Keyed {
    fn key(&self) -> &'static str;
}

impl Keyed for Require {
    fn key(&self) -> &'static str {
        self.key
    }
}

impl Keyed for Conflict {
    fn key(&self) -> &'static str {
        self.key
    }
}

/// Maps a key to every relation it owns, preserving insertion order per key.
#[derive(Debug, Clone)]
pub struct RelationIndex<T: 'static> {
    map: HashMap<&'static str, Vec<&'static T>>,
}

impl<T: Keyed + 'static> RelationIndex<T> {
    /// Index `relations` in the given order. Later slices append after earlier ones.
    pub fn build<I>(relations: I) -> Self
    where
        I: IntoIterator<Item = &'static [T]>,
    {
        let mut map: HashMap<&'static str, Vec<&'static T>> = HashMap::new();
        for slice in relations {
            for rel in slice {
                map.entry(rel.key()).or_default().push(rel);
            }
        }
        Self { map }
    }

    /// Relations owned by `key`, in insertion order.
    pub fn get(&self, key: &str) -> &[&'static T] {
        self.map.get(key).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::{conflicts, conflicts_value, requires};

    static FIRST: [Conflict; 2] = [conflicts("vb", "quality"), conflicts("ab", "aq")];
    static SECOND: [Conflict; 1] = [conflicts_value("vb", None, "two-pass", Some("false"))];

    #[test]
    fn keeps_insertion_order_per_key() {
        let index = RelationIndex::build([&FIRST[..], &SECOND[..]]);
        let vb: Vec<&str> = index.get("vb").iter().map(|c| c.conflicting).collect();
        assert_eq!(vb, vec!["quality", "two-pass"]);
        let ab: Vec<&str> = index.get("ab").iter().map(|c| c.conflicting).collect();
        assert_eq!(ab, vec!["aq"]);
    }

    #[test]
    fn unknown_key_has_no_relations() {
        static REQ: [Require; 1] = [requires("turbo", "two-pass")];
        let index = RelationIndex::build([&REQ[..]]);
        assert!(index.get("two-pass").is_empty());
        assert_eq!(index.get("turbo")[0].required, "two-pass");
    }
}
