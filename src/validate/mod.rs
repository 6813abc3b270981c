//! Validation of hbr key files.
//!
//! Every option carries a [`Validator`] kind; [`check_option`] dispatches on
//! it. The pipeline in [`pipeline`] drives the stages:
//!
//! - structure: duplicate groups/keys, malformed lines (fatal for the file)
//! - group shape: `CONFIG` present, only `OUTFILE<n>` groups besides it
//! - key types: unknown keys, then each key's validator
//! - requires: required keys and requires relations on merged outfiles
//!
//! Problems never stop the pipeline early (except structural ones); they
//! accumulate in a [`Diagnostics`] collector.

mod audio;
mod basic;
mod filters;
mod hbr;
mod paths;
pub mod pipeline;
mod video;


pub use pipeline::{Report, Stage, check_global, check_input, load_global, load_input};
pub(crate) use paths::is_writable;

use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::keyfile::{Section, parse_bool, split_list};
use crate::registry::{Arity, OptionDescriptor, Validator};

/// One key being validated: the option, its value, and where it lives.
pub(crate) struct KeyCheck<'a> {
    pub option: &'static OptionDescriptor,
    pub section: &'a Section,
    pub value: &'a str,
    path: &'a str,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> KeyCheck<'a> {
    pub fn name(&self) -> &'static str {
        self.option.name
    }

    /// Another key of the same section.
    pub fn sibling(&self, key: &str) -> Option<&'a str> {
        self.section.get(key)
    }

    fn push(&mut self, severity: Severity, message: String, value: Option<&str>) {
        self.diagnostics.push(
            Diagnostic::new(severity, message)
                .with_path(self.path)
                .with_group(self.section.name())
                .with_key(self.option.name, value),
        );
    }

    /// Record an error against the whole value. Always returns `false`.
    pub fn error(&mut self, message: impl Into<String>) -> bool {
        let value = self.value;
        self.push(Severity::Error, message.into(), Some(value));
        false
    }

    /// Record an error against one item of a list value.
    pub fn error_item(&mut self, message: impl Into<String>, item: &str) -> bool {
        self.push(Severity::Error, message.into(), Some(item));
        false
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let value = self.value;
        self.push(Severity::Warning, message.into(), Some(value));
    }

    /// Items of a comma separated value.
    pub fn list(&self) -> Vec<&'a str> {
        split_list(self.value, ',')
    }
}

/// Validate `option` in `section`, recording problems in `diagnostics`.
///
/// Returns `true` if the key is absent or valid. Options with an optional
/// argument accept a plain boolean in addition to their typed value.
pub fn check_option(
    option: &'static OptionDescriptor,
    section: &Section,
    path: &str,
    diagnostics: &mut Diagnostics,
) -> bool {
    let Some(value) = section.get(option.name) else {
        return true;
    };
    if option.arity == Arity::Optional && parse_bool(value).is_some() {
        return true;
    }

    let mut check = KeyCheck {
        option,
        section,
        value,
        path,
        diagnostics,
    };
    dispatch(&mut check)
}

fn dispatch(c: &mut KeyCheck<'_>) -> bool {
    match c.option.validator {
        Validator::Boolean => basic::boolean(c),
        Validator::Integer => basic::integer(c),
        Validator::PositiveInteger => basic::positive_integer(c),
        Validator::IntegerSet => basic::integer_set(c),
        Validator::IntegerList => basic::integer_list(c),
        Validator::IntegerListSet => basic::integer_list_set(c),
        Validator::Double => basic::double(c),
        Validator::DoubleList => basic::double_list(c),
        Validator::PositiveDoubleList => basic::positive_double_list(c),
        Validator::String => basic::string(c),
        Validator::StringSet => basic::string_set(c),
        Validator::StringList => basic::string_list(c),
        Validator::StringListSet => basic::string_list_set(c),
        Validator::FilenameComponent => paths::filename_component(c),
        Validator::ReadablePath => paths::readable_path(c),
        Validator::WritablePath => paths::writable_path(c),
        Validator::FileExists => paths::file_exists(c),
        Validator::FileListExists => paths::file_list_exists(c),
        Validator::FileDoesNotExist => paths::file_does_not_exist(c),
        Validator::Filespec => paths::filespec(c),
        Validator::PresetName => paths::preset_name(c),
        Validator::Iso639 => basic::iso_639(c),
        Validator::Iso639List => basic::iso_639_list(c),
        Validator::Codeset => basic::codeset(c),
        Validator::Chapters => basic::chapters(c),
        Validator::Crop => filters::crop(c),
        Validator::PixelAspect => filters::pixel_aspect(c),
        Validator::Previews => basic::previews(c),
        Validator::StartStop => basic::start_stop(c),
        Validator::Framerate => video::framerate(c),
        Validator::Filter => filters::filter(c),
        Validator::Rotate => filters::rotate(c),
        Validator::Subtitle => basic::subtitle(c),
        Validator::SubtitleForced => basic::subtitle_forced(c),
        Validator::SubtitleTrack => basic::subtitle_track(c),
        Validator::Encopts => video::encopts(c),
        Validator::Type => hbr::media_type(c),
        Validator::Season => hbr::season(c),
        Validator::Episode => hbr::episode(c),
        Validator::Audio => audio::tracks(c),
        Validator::AudioEncoder => audio::encoder(c),
        Validator::AudioBitrate => audio::bitrate(c),
        Validator::AudioQuality => audio::quality(c),
        Validator::AudioCompression => audio::compression(c),
        Validator::Gain => audio::gain(c),
        Validator::Drc => audio::drc(c),
        Validator::Dither => audio::dither(c),
        Validator::Mixdown => audio::mixdown(c),
        Validator::VideoQuality => video::quality(c),
        Validator::VideoBitrate => video::bitrate(c),
        Validator::EncoderPreset => video::encoder_preset(c),
        Validator::EncoderTune => video::encoder_tune(c),
        Validator::EncoderProfile => video::encoder_profile(c),
        Validator::EncoderLevel => video::encoder_level(c),
    }
}
