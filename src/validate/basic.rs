//! Scalar, list, and enumerated value validators.

use super::KeyCheck;
use crate::keyfile::{parse_bool, split_list};
use crate::registry::iso639::is_iso_639_2;

pub(super) fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub(super) fn parse_double(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Parse every item of a comma separated list, or `None` if any fails.
pub(super) fn parse_int_list(value: &str) -> Option<Vec<i64>> {
    let items = split_list(value, ',');
    if items.is_empty() {
        return None;
    }
    items.into_iter().map(parse_int).collect()
}

pub(super) fn parse_double_list(value: &str) -> Option<Vec<f64>> {
    let items = split_list(value, ',');
    if items.is_empty() {
        return None;
    }
    items.into_iter().map(parse_double).collect()
}

pub(super) fn boolean(c: &mut KeyCheck<'_>) -> bool {
    if parse_bool(c.value).is_some() {
        return true;
    }
    c.error("Invalid boolean value; Use 'true' or 'false'")
}

pub(super) fn integer(c: &mut KeyCheck<'_>) -> bool {
    if parse_int(c.value).is_some() {
        return true;
    }
    c.error("Value should be integer")
}

pub(super) fn positive_integer(c: &mut KeyCheck<'_>) -> bool {
    match parse_int(c.value) {
        Some(n) if n >= 0 => true,
        _ => c.error("Value should be a positive integer"),
    }
}

pub(super) fn integer_set(c: &mut KeyCheck<'_>) -> bool {
    match parse_int(c.value) {
        Some(n) if c.option.integer_values().contains(&n) => true,
        Some(_) => c.error("Invalid key value"),
        None => c.error("Value should be integer"),
    }
}

pub(super) fn integer_list(c: &mut KeyCheck<'_>) -> bool {
    if parse_int_list(c.value).is_some() {
        return true;
    }
    c.error("Value should be comma-separated integer list")
}

pub(super) fn integer_list_set(c: &mut KeyCheck<'_>) -> bool {
    let Some(values) = parse_int_list(c.value) else {
        return c.error("Value should be comma-separated integer list");
    };
    let legal = c.option.integer_values();
    let mut valid = true;
    for n in values {
        if !legal.contains(&n) {
            valid = c.error_item("Invalid key value", &n.to_string());
        }
    }
    valid
}

pub(super) fn double(c: &mut KeyCheck<'_>) -> bool {
    if parse_double(c.value).is_some() {
        return true;
    }
    c.error("Value should be floating point number")
}

pub(super) fn double_list(c: &mut KeyCheck<'_>) -> bool {
    if parse_double_list(c.value).is_some() {
        return true;
    }
    c.error("Value should be a comma separated double list")
}

pub(super) fn positive_double_list(c: &mut KeyCheck<'_>) -> bool {
    let Some(values) = parse_double_list(c.value) else {
        return c.error("Value should be a comma separated positive double list");
    };
    let mut valid = true;
    for d in values {
        if d < 0.0 {
            valid = c.error_item("Value is not a positive double", &d.to_string());
        }
    }
    valid
}

pub(super) fn string(c: &mut KeyCheck<'_>) -> bool {
    if c.value.is_empty() {
        return c.error("Value should not be empty");
    }
    if c.value.chars().any(char::is_control) {
        return c.error("Value contains control character");
    }
    true
}

pub(super) fn string_set(c: &mut KeyCheck<'_>) -> bool {
    if c.option.string_values().contains(&c.value) {
        return true;
    }
    c.error("Invalid key value")
}

pub(super) fn string_list(c: &mut KeyCheck<'_>) -> bool {
    let items = c.list();
    if items.is_empty() || items.iter().any(|s| s.is_empty()) {
        return c.error("Value should be a comma separated list");
    }
    true
}

pub(super) fn string_list_set(c: &mut KeyCheck<'_>) -> bool {
    let items = c.list();
    if items.is_empty() {
        return c.error("Invalid key value");
    }
    let legal = c.option.string_values();
    let mut valid = true;
    for item in items {
        if !legal.contains(&item) {
            valid = c.error_item("Invalid key value", item);
        }
    }
    valid
}

pub(super) fn iso_639(c: &mut KeyCheck<'_>) -> bool {
    if is_iso_639_2(c.value) {
        return true;
    }
    c.error("Value should be an ISO 639-2 code (three letter language code)")
}

/// Language lists also accept `any`.
pub(super) fn iso_639_list(c: &mut KeyCheck<'_>) -> bool {
    let items = c.list();
    if items.is_empty() {
        return c.error("Value should be a comma separated list of ISO 639-2 codes");
    }
    let mut valid = true;
    for item in items {
        if item != "any" && !is_iso_639_2(item) {
            valid = c.error_item(
                "Value should be an ISO 639-2 code (three letter language code)",
                item,
            );
        }
    }
    valid
}

/// Character set names as accepted by iconv (`UTF-8`, `ISO-8859-1`, ...).
pub(super) fn codeset(c: &mut KeyCheck<'_>) -> bool {
    let items = c.list();
    if items.is_empty() {
        return c.error("Invalid character set name");
    }
    let mut valid = true;
    for item in items {
        let ok = !item.is_empty()
            && item
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || "-_.:".contains(ch));
        if !ok {
            valid = c.error_item("Invalid character set name", item);
        }
    }
    valid
}

/// `N` or `N-M`, chapters numbered 1 to 100.
pub(super) fn chapters(c: &mut KeyCheck<'_>) -> bool {
    let parts = split_list(c.value, '-');
    let numbers: Option<Vec<i64>> = parts.iter().map(|p| parse_int(p)).collect();
    let numbers = match numbers {
        Some(n) if (1..=2).contains(&n.len()) => n,
        _ => {
            return c.error(
                "Value should be a chapter number or range of chapter numbers (e.g. 1-12)",
            );
        }
    };
    if numbers.iter().any(|n| !(1..=100).contains(n)) {
        return c.error("Chapter numbers should be in range 1-100");
    }
    if numbers.len() == 2 && numbers[0] > numbers[1] {
        return c.error("First chapter number should be smaller than second");
    }
    true
}

/// `N` or `N:0` / `N:1` (store previews to disk).
pub(super) fn previews(c: &mut KeyCheck<'_>) -> bool {
    let parts = split_list(c.value, ':');
    let ok = match parts.as_slice() {
        [count] => parse_int(count).is_some_and(|n| n > 0),
        [count, store] => {
            parse_int(count).is_some_and(|n| n > 0) && matches!(*store, "0" | "1")
        }
        _ => false,
    };
    if ok {
        return true;
    }
    c.error("Previews should be a count, optionally followed by :0 or :1 (e.g. 10:1)")
}

/// `duration:<seconds>`, `frame:<n>` or `pts:<n>`.
pub(super) fn start_stop(c: &mut KeyCheck<'_>) -> bool {
    let ok = match c.value.split_once(':') {
        Some(("duration", secs)) => parse_double(secs).is_some_and(|d| d >= 0.0),
        Some(("frame" | "pts", n)) => parse_int(n).is_some_and(|n| n >= 0),
        _ => false,
    };
    if ok {
        return true;
    }
    c.error("Value should be duration:<seconds>, frame:<number> or pts:<number>")
}

pub(super) fn subtitle(c: &mut KeyCheck<'_>) -> bool {
    if matches!(c.value, "scan" | "none" | "native") {
        return true;
    }
    if parse_int_list(c.value).is_some_and(|tracks| tracks.iter().all(|&t| t > 0)) {
        return true;
    }
    c.error("Invalid subtitle. Should be \"none\", \"scan\", or a comma-separated list of track numbers")
}

/// Track indexes into the `subtitle` list, or `scan`.
pub(super) fn subtitle_forced(c: &mut KeyCheck<'_>) -> bool {
    if c.value == "scan" {
        return true;
    }
    if parse_int_list(c.value).is_some_and(|tracks| tracks.iter().all(|&t| t > 0)) {
        return true;
    }
    c.error("Forced subtitles should be \"scan\" or a comma-separated list of subtitle indexes")
}

/// `--subtitle-burned` / `--subtitle-default`: a track index, `native`, or `none`.
pub(super) fn subtitle_track(c: &mut KeyCheck<'_>) -> bool {
    if matches!(c.value, "native" | "none") || parse_int(c.value).is_some_and(|n| n > 0) {
        return true;
    }
    c.error("Value should be a subtitle index, \"native\", or \"none\"")
}
