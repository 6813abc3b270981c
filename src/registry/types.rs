//! Option descriptor and relation types.
//!
//! Tables are plain `static` data built with the `const fn` helpers below, so
//! a table entry reads close to the HandBrakeCLI help text it describes.

/// How HandBrakeCLI takes the option's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Plain flag (`--markers`).
    None,
    /// Flag with an optional `=value` (`--decomb` or `--decomb=bob`).
    Optional,
    /// Always takes a value (`--title 1`).
    Required,
    /// Consumed by hbr itself and never passed to HandBrakeCLI.
    HbrOnly,
}

/// Storage type of the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Boolean,
    Integer,
    Double,
    String,
    StringList,
    IntegerList,
    DoubleList,
    Path,
    PathList,
}

impl ValueType {
    pub fn is_list(self) -> bool {
        matches!(
            self,
            ValueType::StringList
                | ValueType::IntegerList
                | ValueType::DoubleList
                | ValueType::PathList
        )
    }
}

/// Position of the option in the generated command line.
///
/// Variants are declared in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Container,
    Markers,
    Picture,
    Filters,
    Audio,
    Video,
    General,
    Source,
    AudioTracks,
    SubtitleTracks,
    Hbr,
}

impl Category {
    /// Categories emitted before `-i`/`-o`, in order.
    pub const EMITTED: [Category; 10] = [
        Category::Container,
        Category::Markers,
        Category::Picture,
        Category::Filters,
        Category::Audio,
        Category::Video,
        Category::General,
        Category::Source,
        Category::AudioTracks,
        Category::SubtitleTracks,
    ];
}

/// Semantic validator attached to an option.
///
/// Composite validators read sibling keys and only run against merged
/// outfile sections (see [`Validator::is_composite`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Boolean,
    Integer,
    PositiveInteger,
    IntegerSet,
    IntegerList,
    IntegerListSet,
    Double,
    DoubleList,
    PositiveDoubleList,
    String,
    StringSet,
    StringList,
    StringListSet,
    FilenameComponent,
    ReadablePath,
    WritablePath,
    FileExists,
    FileListExists,
    FileDoesNotExist,
    Filespec,
    PresetName,
    Iso639,
    Iso639List,
    Codeset,
    Chapters,
    Crop,
    PixelAspect,
    Previews,
    StartStop,
    Framerate,
    Filter,
    Rotate,
    Subtitle,
    SubtitleForced,
    SubtitleTrack,
    Encopts,
    Type,
    Season,
    Episode,
    Audio,
    AudioEncoder,
    AudioBitrate,
    AudioQuality,
    AudioCompression,
    Gain,
    Drc,
    Dither,
    Mixdown,
    VideoQuality,
    VideoBitrate,
    EncoderPreset,
    EncoderTune,
    EncoderProfile,
    EncoderLevel,
}

impl Validator {
    /// True if the validator consults other keys of the section.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Validator::Type
                | Validator::AudioEncoder
                | Validator::AudioBitrate
                | Validator::AudioQuality
                | Validator::AudioCompression
                | Validator::Gain
                | Validator::Drc
                | Validator::Dither
                | Validator::Mixdown
                | Validator::VideoQuality
                | Validator::EncoderPreset
                | Validator::EncoderTune
                | Validator::EncoderProfile
                | Validator::EncoderLevel
        )
    }

    /// True if the validator compares list lengths against the `audio` tracks.
    pub fn counts_audio_tracks(self) -> bool {
        matches!(
            self,
            Validator::AudioEncoder
                | Validator::AudioBitrate
                | Validator::Gain
                | Validator::Drc
                | Validator::Dither
                | Validator::Mixdown
        )
    }
}

/// Enumerated legal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Values {
    Any,
    Strings(&'static [&'static str]),
    Integers(&'static [i64]),
}

/// Type of a sub-key in a colon separated custom filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomKind {
    Integer,
    Double,
    Boolean,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomKey {
    pub name: &'static str,
    pub kind: CustomKind,
}

pub const fn int_key(name: &'static str) -> CustomKey {
    CustomKey {
        name,
        kind: CustomKind::Integer,
    }
}

pub const fn dbl_key(name: &'static str) -> CustomKey {
    CustomKey {
        name,
        kind: CustomKind::Double,
    }
}

pub const fn bool_key(name: &'static str) -> CustomKey {
    CustomKey {
        name,
        kind: CustomKind::Boolean,
    }
}

pub const fn str_key(name: &'static str) -> CustomKey {
    CustomKey {
        name,
        kind: CustomKind::String,
    }
}

/// Static description of one configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub arity: Arity,
    pub value_type: ValueType,
    /// A `false` value is emitted as `--no-<name>`.
    pub negatable: bool,
    pub validator: Validator,
    pub values: Values,
    pub custom: &'static [CustomKey],
    pub category: Category,
    pub short: Option<char>,
}

impl OptionDescriptor {
    const fn base(
        name: &'static str,
        arity: Arity,
        value_type: ValueType,
        validator: Validator,
        category: Category,
    ) -> Self {
        Self {
            name,
            arity,
            value_type,
            negatable: false,
            validator,
            values: Values::Any,
            custom: &[],
            category,
            short: None,
        }
    }

    /// A boolean flag without an argument.
    pub const fn flag(name: &'static str, category: Category) -> Self {
        Self::base(
            name,
            Arity::None,
            ValueType::Boolean,
            Validator::Boolean,
            category,
        )
    }

    pub const fn required(
        name: &'static str,
        value_type: ValueType,
        validator: Validator,
        category: Category,
    ) -> Self {
        Self::base(name, Arity::Required, value_type, validator, category)
    }

    pub const fn optional(
        name: &'static str,
        value_type: ValueType,
        validator: Validator,
        category: Category,
    ) -> Self {
        Self::base(name, Arity::Optional, value_type, validator, category)
    }

    pub const fn hbr(name: &'static str, value_type: ValueType, validator: Validator) -> Self {
        Self::base(name, Arity::HbrOnly, value_type, validator, Category::Hbr)
    }

    pub const fn negatable(self) -> Self {
        Self {
            negatable: true,
            ..self
        }
    }

    pub const fn short(self, flag: char) -> Self {
        Self {
            short: Some(flag),
            ..self
        }
    }

    pub const fn strings(self, values: &'static [&'static str]) -> Self {
        Self {
            values: Values::Strings(values),
            ..self
        }
    }

    pub const fn integers(self, values: &'static [i64]) -> Self {
        Self {
            values: Values::Integers(values),
            ..self
        }
    }

    pub const fn custom(self, keys: &'static [CustomKey]) -> Self {
        Self {
            custom: keys,
            ..self
        }
    }

    pub fn is_hbr_only(&self) -> bool {
        self.arity == Arity::HbrOnly
    }

    pub fn string_values(&self) -> &'static [&'static str] {
        match self.values {
            Values::Strings(v) => v,
            _ => &[],
        }
    }

    pub fn integer_values(&self) -> &'static [i64] {
        match self.values {
            Values::Integers(v) => v,
            _ => &[],
        }
    }

    pub fn custom_key(&self, name: &str) -> Option<&'static CustomKey> {
        self.custom.iter().find(|k| k.name == name)
    }
}

/// `key` is only valid if `required` is set (to `value`, when given).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Require {
    pub key: &'static str,
    pub required: &'static str,
    pub value: Option<&'static str>,
}

impl Require {
    /// True if `value` of `self.required` satisfies the relation.
    pub fn satisfied_by(&self, value: &str) -> bool {
        self.value
            .is_none_or(|wanted| same_setting(self.required, wanted, value.trim()))
    }
}

/// Container names compare without HandBrake's `av_` muxer prefix.
fn same_setting(key: &str, wanted: &str, actual: &str) -> bool {
    fn container(v: &str) -> &str {
        v.strip_prefix("av_").unwrap_or(v)
    }
    if key == "format" {
        container(wanted) == container(actual)
    } else {
        wanted == actual
    }
}

pub const fn requires(key: &'static str, required: &'static str) -> Require {
    Require {
        key,
        required,
        value: None,
    }
}

pub const fn requires_value(
    key: &'static str,
    required: &'static str,
    value: &'static str,
) -> Require {
    Require {
        key,
        required,
        value: Some(value),
    }
}

/// `key` (at `key_value`, when given) forbids `conflicting`
/// (at `conflicting_value`, when given).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub key: &'static str,
    pub key_value: Option<&'static str>,
    pub conflicting: &'static str,
    pub conflicting_value: Option<&'static str>,
}

impl Conflict {
    /// True if `value` of `self.key` triggers the relation.
    pub fn triggered_by(&self, value: &str) -> bool {
        self.key_value
            .is_none_or(|v| same_setting(self.key, v, value.trim()))
    }

    /// True if `value` of `self.conflicting` is affected by the relation.
    pub fn matches_conflicting(&self, value: &str) -> bool {
        self.conflicting_value
            .is_none_or(|v| same_setting(self.conflicting, v, value.trim()))
    }
}

pub const fn conflicts(key: &'static str, conflicting: &'static str) -> Conflict {
    Conflict {
        key,
        key_value: None,
        conflicting,
        conflicting_value: None,
    }
}

pub const fn conflicts_value(
    key: &'static str,
    key_value: Option<&'static str>,
    conflicting: &'static str,
    conflicting_value: Option<&'static str>,
) -> Conflict {
    Conflict {
        key,
        key_value,
        conflicting,
        conflicting_value,
    }
}

/// One versioned set of HandBrakeCLI options.
#[derive(Debug)]
pub struct OptionTable {
    pub label: &'static str,
    pub options: &'static [OptionDescriptor],
    pub requires: &'static [Require],
    pub conflicts: &'static [Conflict],
}
