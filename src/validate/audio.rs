//! Audio validators. All but the track list read sibling keys and run
//! against merged outfile sections.

use super::KeyCheck;
use super::basic::{self, parse_double_list, parse_int_list};
use crate::keyfile::{Section, split_list};

/// Bitrates HandBrake accepts for bitrate based encoders, ascending.
const STANDARD_BITRATES: &[i64] = &[
    6, 12, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 448, 512, 576,
    640, 768, 960, 1152, 1344, 1536, 2304, 3072, 4608, 6144,
];

/// Encoders whose bitrate is ignored by HandBrake.
const PASSTHRU_ENCODERS: &[&str] = &[
    "none",
    "copy",
    "copy:aac",
    "copy:ac3",
    "copy:eac3",
    "copy:truehd",
    "copy:dts",
    "copy:dtshd",
    "copy:mp3",
    "copy:flac",
    "flac16",
    "flac24",
];

/// Number of tracks selected by `audio` (`none` and unset select zero).
pub(crate) fn audio_track_count(section: &Section) -> usize {
    match section.get("audio") {
        None | Some("none") => 0,
        Some(value) => split_list(value, ',').len(),
    }
}

fn bitrate_range(encoder: &str) -> Option<(i64, i64)> {
    match encoder {
        "av_aac" => Some((64, 512)),
        "ac3" => Some((96, 640)),
        "eac3" => Some((96, 6144)),
        "mp3" => Some((12, 320)),
        "vorbis" => Some((32, 448)),
        "opus" => Some((12, 512)),
        _ => None,
    }
}

fn quality_range(encoder: &str) -> Option<(f64, f64)> {
    match encoder {
        "mp3" => Some((0.0, 10.0)),
        "vorbis" => Some((-2.0, 10.0)),
        _ => None,
    }
}

fn compression_range(encoder: &str) -> Option<(f64, f64)> {
    match encoder {
        "flac16" | "flac24" => Some((0.0, 12.0)),
        "mp3" => Some((0.0, 9.0)),
        "opus" => Some((0.0, 10.0)),
        _ => None,
    }
}

/// Value for track `i` when one value applies to every track.
fn per_track<T: Copy>(values: &[T], i: usize) -> Option<T> {
    if values.len() == 1 {
        values.first().copied()
    } else {
        values.get(i).copied()
    }
}

/// Each value paired with its encoder. A single encoder or a single value
/// applies to every position of the other list.
fn paired<'a, T: Copy>(encoders: &[&'a str], values: &[T]) -> Vec<(&'a str, T)> {
    (0..encoders.len().max(values.len()))
        .filter_map(|i| Some((per_track(encoders, i)?, per_track(values, i)?)))
        .collect()
}

/// `none` or a comma separated list of track numbers. Repeats only warn.
pub(super) fn tracks(c: &mut KeyCheck<'_>) -> bool {
    if c.value == "none" {
        return true;
    }
    let Some(mut tracks) = parse_int_list(c.value) else {
        return c.error("Value should be integer");
    };
    if tracks.iter().any(|&t| t < 1) {
        return c.error("Audio track numbers start at 1");
    }
    tracks.sort_unstable();
    if tracks.windows(2).any(|w| w[0] == w[1]) {
        c.warn("Audio track repeated");
    }
    true
}

pub(super) fn encoder(c: &mut KeyCheck<'_>) -> bool {
    let count = c.list().len();
    let tracks = audio_track_count(c.section);
    let mut valid = true;
    if count != 1 && count != tracks {
        valid = c.error(format!(
            "Number of audio encoders ({}) specified does not match the number of audio tracks ({})",
            count, tracks
        ));
    }
    basic::string_list_set(c) && valid
}

pub(super) fn bitrate(c: &mut KeyCheck<'_>) -> bool {
    let Some(bitrates) = parse_int_list(c.value) else {
        return c.error("Value should be comma-separated integer list");
    };
    let Some(encoders) = c.sibling("aencoder") else {
        return c.error(
            "Could not verify audio track bitrates because audio encoders were not specified",
        );
    };
    let encoders = split_list(encoders, ',');

    let mut valid = true;
    let tracks = audio_track_count(c.section);
    if bitrates.len() != 1 && bitrates.len() != tracks {
        valid = c.error(format!(
            "Number of track bitrates ({}) specified does not match the number of audio tracks ({})",
            bitrates.len(),
            tracks
        ));
    }

    for (encoder, rate) in paired(&encoders, &bitrates) {
        if PASSTHRU_ENCODERS.contains(&encoder) {
            continue;
        }
        if let Some((low, high)) = bitrate_range(encoder)
            && !(low..=high).contains(&rate)
        {
            valid = c.error_item(
                format!(
                    "Bitrate outside range [{},{}] for encoder {}",
                    low, high, encoder
                ),
                &rate.to_string(),
            );
            continue;
        }
        if !STANDARD_BITRATES.contains(&rate) {
            valid = c.error_item("Invalid bitrate specified", &rate.to_string());
        }
    }
    valid
}

pub(super) fn quality(c: &mut KeyCheck<'_>) -> bool {
    let Some(qualities) = parse_double_list(c.value) else {
        return c.error("Value should be a comma separated double list");
    };
    let Some(encoders) = c.sibling("aencoder") else {
        return c.error(
            "Could not verify audio quality because audio encoders were not specified",
        );
    };
    let encoders = split_list(encoders, ',');
    if qualities.len() != 1 && qualities.len() != encoders.len() {
        return c.error(format!(
            "Number of quality values ({}) specified does not match the number of audio encoders ({})",
            qualities.len(),
            encoders.len()
        ));
    }

    let mut valid = true;
    for (encoder, q) in paired(&encoders, &qualities) {
        match quality_range(encoder) {
            Some((low, high)) if q < low || q > high => {
                valid = c.error_item(
                    format!("Quality value outside range for {} [{},{}]", encoder, low, high),
                    &q.to_string(),
                );
            }
            Some(_) => {}
            None => {
                valid = c.error_item(
                    format!("Quality value cannot apply to encoder {}", encoder),
                    &q.to_string(),
                );
            }
        }
    }
    valid
}

/// `-1` selects the encoder default and is always accepted.
pub(super) fn compression(c: &mut KeyCheck<'_>) -> bool {
    let Some(levels) = parse_double_list(c.value) else {
        return c.error("Value should be a comma separated double list");
    };
    let Some(encoders) = c.sibling("aencoder") else {
        return c.error("Encoder not specified. Unable to verify audio compression");
    };
    let encoders = split_list(encoders, ',');
    if levels.len() != 1 && levels.len() != encoders.len() {
        return c.error(format!(
            "Number of compression values ({}) specified does not match the number of audio encoders ({})",
            levels.len(),
            encoders.len()
        ));
    }

    let mut valid = true;
    for (encoder, level) in paired(&encoders, &levels) {
        if (level - -1.0).abs() < 0.001 {
            continue;
        }
        match compression_range(encoder) {
            Some((low, high)) if level < low || level > high => {
                valid = c.error_item(
                    format!(
                        "Compression value outside range for {} [{},{}]",
                        encoder, low, high
                    ),
                    &level.to_string(),
                );
            }
            Some(_) => {}
            None => {
                valid = c.error_item(
                    format!("Compression value cannot apply to encoder {}", encoder),
                    &level.to_string(),
                );
            }
        }
    }
    valid
}

pub(super) fn gain(c: &mut KeyCheck<'_>) -> bool {
    let Some(gains) = parse_double_list(c.value) else {
        return c.error("Value should be a comma separated double list");
    };
    for g in &gains {
        if !(-20.0..=20.0).contains(g) {
            c.warn("Gain value exceeds +-20dB");
        }
    }
    let tracks = audio_track_count(c.section);
    if gains.len() != 1 && gains.len() != tracks {
        return c.error(format!(
            "Number of audio tracks ({}) specified does not match the number of gain tracks ({})",
            tracks,
            gains.len()
        ));
    }
    true
}

pub(super) fn drc(c: &mut KeyCheck<'_>) -> bool {
    let Some(levels) = parse_double_list(c.value) else {
        return c.error("Value should be decimal number");
    };
    let mut valid = true;
    if levels.iter().any(|d| !(1.0..=4.0).contains(d)) {
        valid = c.error("DRC value is outside range 1.0 - 4.0");
    }
    let tracks = audio_track_count(c.section);
    if levels.len() > 1 && tracks > levels.len() {
        c.warn("DRC was not specified for all audio tracks");
    }
    if levels.len() > 1 && tracks < levels.len() {
        c.warn("More DRC values specified than audio tracks");
    }
    valid
}

pub(super) fn dither(c: &mut KeyCheck<'_>) -> bool {
    let valid = basic::string_list_set(c);
    let count = c.list().len();
    let tracks = audio_track_count(c.section);
    if count != 1 && count != tracks {
        return c.error(format!(
            "Number of audio tracks ({}) specified does not match the number of dither tracks ({})",
            tracks, count
        ));
    }
    valid
}

pub(super) fn mixdown(c: &mut KeyCheck<'_>) -> bool {
    let valid = basic::string_list_set(c);
    let count = c.list().len();
    let tracks = audio_track_count(c.section);
    if count != 1 && count != tracks {
        return c.error(format!(
            "Number of mixdowns ({}) specified does not match the number of audio tracks ({})",
            count, tracks
        ));
    }
    valid
}
