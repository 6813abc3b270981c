//! Picture filter validators.
//!
//! Filters accept a boolean, a named preset, or custom settings. Releases
//! with named sub-keys take `key=value:key=value`; older releases take
//! positional colon separated numbers.

use super::KeyCheck;
use super::basic::{parse_double, parse_int};
use crate::build::rotation_code;
use crate::keyfile::{parse_bool, split_list};
use crate::registry::{CustomKind, ValueType};

pub(super) fn filter(c: &mut KeyCheck<'_>) -> bool {
    if parse_bool(c.value).is_some() || c.option.string_values().contains(&c.value) {
        return true;
    }
    if c.option.custom.is_empty() {
        if !c.value.contains('=') && is_positional(c.value) {
            return true;
        }
    } else if c.value.contains('=') {
        return custom_settings(c);
    }
    let message = format!("Invalid {} option", c.name());
    c.error(message)
}

fn is_positional(value: &str) -> bool {
    let items = split_list(value, ':');
    !items.is_empty() && items.iter().all(|item| parse_double(item).is_some())
}

fn custom_settings(c: &mut KeyCheck<'_>) -> bool {
    let mut valid = true;
    for item in split_list(c.value, ':') {
        let Some((key, value)) = item.split_once('=') else {
            valid = c.error_item("Custom filter settings should be key=value", item);
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        let Some(spec) = c.option.custom_key(key) else {
            valid = c.error_item("Unsupported custom filter", item);
            continue;
        };
        let ok = match spec.kind {
            CustomKind::Integer => parse_int(value).is_some(),
            CustomKind::Double => parse_double(value).is_some(),
            CustomKind::Boolean => parse_bool(value).is_some() || matches!(value, "0" | "1"),
            CustomKind::String => !value.is_empty(),
        };
        if !ok {
            valid = c.error_item(format!("Invalid value for custom filter key {}", key), item);
        }
    }
    valid
}

/// Named tokens (`vflip`, `hflip`, `clockwise`, `none`, `default`), a code
/// from 0 to 7, or on newer releases `angle=`/`hflip=`/`disable=` settings.
pub(super) fn rotate(c: &mut KeyCheck<'_>) -> bool {
    if rotation_code(c.value).is_some() {
        return true;
    }
    if parse_int(c.value).is_some_and(|n| (0..=7).contains(&n)) {
        return true;
    }
    if c.option.value_type != ValueType::Integer && c.value.contains('=') && rotate_settings(c.value)
    {
        return true;
    }
    c.error("Invalid rotate option")
}

fn rotate_settings(value: &str) -> bool {
    split_list(value, ':').iter().all(|item| {
        match item.split_once('=').map(|(k, v)| (k.trim(), v.trim())) {
            Some(("angle", v)) => matches!(v, "0" | "90" | "180" | "270"),
            Some(("hflip" | "disable", v)) => matches!(v, "0" | "1"),
            _ => false,
        }
    })
}

/// Empty for autocrop, or `top:bottom:left:right`.
pub(super) fn crop(c: &mut KeyCheck<'_>) -> bool {
    if c.value.is_empty() {
        return true;
    }
    let sides: Option<Vec<i64>> = split_list(c.value, ':')
        .into_iter()
        .map(parse_int)
        .collect();
    if sides.is_some_and(|s| s.len() == 4 && s.iter().all(|&n| n >= 0)) {
        return true;
    }
    c.error(
        "Crop should be 4 colon separated positive integers (top:bottom:left:right), or empty for autocrop.",
    )
}

/// `PARX:PARY`.
pub(super) fn pixel_aspect(c: &mut KeyCheck<'_>) -> bool {
    let parts = split_list(c.value, ':');
    let ok = parts.len() == 2 && parts.iter().all(|p| parse_int(p).is_some_and(|n| n > 0));
    if ok {
        return true;
    }
    c.error("Pixel aspect should be two colon separated positive integers (PARX:PARY)")
}
