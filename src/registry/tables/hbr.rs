//! Keys consumed by hbr itself. Appended to every HandBrakeCLI table.

use crate::registry::types::{
    Conflict, OptionDescriptor as O, OptionTable, Require, ValueType as T, Validator as V,
    conflicts_value, requires_value,
};

pub static HBR: OptionTable = OptionTable {
    label: "hbr",
    options: OPTIONS,
    requires: REQUIRES,
    conflicts: CONFLICTS,
};

/// Values accepted by `extra`.
pub const EXTRAS: &[&str] = &[
    "behindthescenes",
    "deleted",
    "featurette",
    "interview",
    "scene",
    "short",
    "trailer",
    "other",
];

const OPTIONS: &[O] = &[
    O::hbr("type", T::String, V::Type).strings(&["series", "movie"]),
    O::hbr("add_year", T::Boolean, V::Boolean),
    O::hbr("input_basedir", T::Path, V::ReadablePath),
    O::hbr("output_basedir", T::Path, V::WritablePath),
    O::hbr("iso_filename", T::String, V::FilenameComponent),
    O::hbr("name", T::String, V::FilenameComponent),
    O::hbr("year", T::Integer, V::PositiveInteger),
    O::hbr("season", T::Integer, V::Season),
    O::hbr("episode", T::Integer, V::Episode),
    O::hbr("specific_name", T::String, V::FilenameComponent),
    O::hbr("preview", T::Boolean, V::Boolean),
    O::hbr("extra", T::String, V::StringSet).strings(EXTRAS),
    O::hbr("debug", T::Boolean, V::Boolean),
    O::hbr("autocrop", T::Boolean, V::Boolean),
];

const REQUIRES: &[Require] = &[
    requires_value("extra", "type", "movie"),
    requires_value("year", "type", "movie"),
    requires_value("season", "type", "series"),
    requires_value("episode", "type", "series"),
];

const CONFLICTS: &[Conflict] = &[
    conflicts_value("add_year", Some("true"), "type", Some("series")),
    conflicts_value("type", Some("series"), "add_year", Some("true")),
];
