//! Video encoder validators. Preset, tune, profile, level and quality all
//! depend on the selected `encoder`.

use super::KeyCheck;
use super::basic::{parse_double, parse_int};
use crate::keyfile::split_list;

const X26X_PRESETS: &[&str] = &[
    "ultrafast",
    "superfast",
    "veryfast",
    "faster",
    "fast",
    "medium",
    "slow",
    "slower",
    "veryslow",
    "placebo",
];

const VPX_PRESETS: &[&str] = &[
    "veryfast", "faster", "fast", "medium", "slow", "slower", "veryslow",
];

const QSV_PRESETS: &[&str] = &["speed", "balanced", "quality"];

const X264_TUNES: &[&str] = &[
    "film",
    "animation",
    "grain",
    "stillimage",
    "psnr",
    "ssim",
    "fastdecode",
    "zerolatency",
];

const X265_TUNES: &[&str] = &[
    "psnr",
    "ssim",
    "grain",
    "fastdecode",
    "zerolatency",
    "animation",
];

const H264_LEVELS: &[&str] = &[
    "auto", "1.0", "1b", "1.1", "1.2", "1.3", "2.0", "2.1", "2.2", "3.0", "3.1", "3.2", "4.0",
    "4.1", "4.2", "5.0", "5.1", "5.2",
];

const H265_LEVELS: &[&str] = &[
    "auto", "1.0", "2.0", "2.1", "3.0", "3.1", "4.0", "4.1", "5.0", "5.1", "5.2", "6.0", "6.1",
    "6.2",
];

fn presets_for(encoder: &str) -> &'static [&'static str] {
    match encoder {
        "x264" | "x264_10bit" | "x265" | "x265_10bit" | "x265_12bit" | "x265_16bit" => {
            X26X_PRESETS
        }
        "VP8" | "VP9" => VPX_PRESETS,
        "qsv_h264" | "qsv_h265" | "qsv_h265_10bit" => QSV_PRESETS,
        _ => &[],
    }
}

fn tunes_for(encoder: &str) -> &'static [&'static str] {
    match encoder {
        "x264" | "x264_10bit" => X264_TUNES,
        "x265" | "x265_10bit" | "x265_12bit" | "x265_16bit" => X265_TUNES,
        _ => &[],
    }
}

fn profiles_for(encoder: &str) -> &'static [&'static str] {
    match encoder {
        "x264" => &["auto", "high", "main", "baseline"],
        "x264_10bit" => &["auto", "high10"],
        "x265" => &["auto", "main", "mainstillpicture"],
        "x265_10bit" => &["auto", "main10", "main10-intra"],
        "x265_12bit" => &["auto", "main12", "main12-intra"],
        "x265_16bit" => &["auto", "main16", "main16-intra"],
        "qsv_h264" => &["auto", "high", "main", "baseline"],
        "qsv_h265" => &["auto", "main"],
        "qsv_h265_10bit" => &["auto", "main10"],
        _ => &[],
    }
}

fn levels_for(encoder: &str) -> &'static [&'static str] {
    match encoder {
        "x264" | "x264_10bit" | "qsv_h264" => H264_LEVELS,
        "x265" | "x265_10bit" | "x265_12bit" | "x265_16bit" | "qsv_h265" | "qsv_h265_10bit" => {
            H265_LEVELS
        }
        _ => &[],
    }
}

/// Constant quality range for `encoder`. Higher bit depths extend the
/// lower bound by 6 per extra 2 bits.
fn quality_range(encoder: &str) -> Option<(f64, f64)> {
    match encoder {
        "x264" | "x265" => Some((0.0, 51.0)),
        "x264_10bit" | "x265_10bit" => Some((-12.0, 51.0)),
        "x265_12bit" => Some((-24.0, 51.0)),
        "x265_16bit" => Some((-48.0, 51.0)),
        "qsv_h264" | "qsv_h265" | "qsv_h265_10bit" => Some((1.0, 51.0)),
        "mpeg4" | "mpeg2" | "ffmpeg4" | "ffmpeg2" => Some((1.0, 31.0)),
        "VP8" | "VP9" | "theora" => Some((0.0, 63.0)),
        _ => None,
    }
}

/// Look up the sibling `encoder`, reporting `what` could not be checked.
fn encoder_for<'a>(c: &mut KeyCheck<'a>, what: &str) -> Option<&'a str> {
    let encoder = c.sibling("encoder");
    if encoder.is_none() {
        c.error(format!(
            "Could not verify {} because video encoder was not specified",
            what
        ));
    }
    encoder
}

pub(super) fn quality(c: &mut KeyCheck<'_>) -> bool {
    let Some(q) = parse_double(c.value) else {
        return c.error("Value should be floating point number");
    };
    let Some(encoder) = c.sibling("encoder") else {
        c.warn("Encoder not specified. Unable to verify video quality");
        return true;
    };
    match quality_range(encoder) {
        Some((low, high)) if q < low || q > high => c.error(format!(
            "Value outside range [{},{}] for encoder {}",
            low, high, encoder
        )),
        Some(_) => true,
        None => {
            c.warn(format!("Unable to verify video quality for encoder {}", encoder));
            true
        }
    }
}

pub(super) fn bitrate(c: &mut KeyCheck<'_>) -> bool {
    match parse_int(c.value) {
        Some(n) if (0..=1_000_000).contains(&n) => true,
        _ => c.error("Value should be integer in range [0,1000000]"),
    }
}

/// A standard rate from the table, or any rate between 1 and 1000 fps.
pub(super) fn framerate(c: &mut KeyCheck<'_>) -> bool {
    if c.option.string_values().contains(&c.value) {
        return true;
    }
    if parse_double(c.value).is_some_and(|fps| (1.0..=1000.0).contains(&fps)) {
        return true;
    }
    c.error("Invalid framerate; use a standard rate or a value between 1 and 1000")
}

/// Colon separated `key=value` encoder options.
pub(super) fn encopts(c: &mut KeyCheck<'_>) -> bool {
    let items = split_list(c.value, ':');
    if items.is_empty() {
        return c.error("Encoder options should be colon separated key=value pairs");
    }
    let mut valid = true;
    for item in items {
        let ok = item
            .split_once('=')
            .is_some_and(|(k, v)| !k.trim().is_empty() && !v.trim().is_empty());
        if !ok {
            valid = c.error_item(
                "Encoder options should be colon separated key=value pairs",
                item,
            );
        }
    }
    valid
}

pub(super) fn encoder_preset(c: &mut KeyCheck<'_>) -> bool {
    let Some(encoder) = encoder_for(c, "encoder preset") else {
        return false;
    };
    if presets_for(encoder).contains(&c.value) {
        return true;
    }
    c.error(format!("Invalid encoder preset for encoder ({})", encoder))
}

/// x264 accepts one psychovisual tune plus `fastdecode`/`zerolatency`.
pub(super) fn encoder_tune(c: &mut KeyCheck<'_>) -> bool {
    let Some(encoder) = encoder_for(c, "encoder tune") else {
        return false;
    };
    let legal = tunes_for(encoder);
    let tunes = c.list();
    if tunes.is_empty() {
        return c.error(format!("Invalid encoder tune for encoder ({})", encoder));
    }
    let mut valid = true;
    for tune in tunes {
        if !legal.contains(&tune) {
            valid = c.error_item(
                format!("Invalid encoder tune for encoder ({})", encoder),
                tune,
            );
        }
    }
    valid
}

pub(super) fn encoder_profile(c: &mut KeyCheck<'_>) -> bool {
    let Some(encoder) = encoder_for(c, "encoder profile") else {
        return false;
    };
    if profiles_for(encoder).contains(&c.value) {
        return true;
    }
    c.error(format!("Invalid encoder profile for encoder ({})", encoder))
}

pub(super) fn encoder_level(c: &mut KeyCheck<'_>) -> bool {
    let Some(encoder) = encoder_for(c, "encoder level") else {
        return false;
    };
    if levels_for(encoder).contains(&c.value) {
        return true;
    }
    c.error(format!("Invalid encoder level for encoder ({})", encoder))
}
