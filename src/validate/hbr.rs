//! Validators for keys consumed by hbr itself.

use super::KeyCheck;
use super::basic::{parse_int, string_set};
use crate::build::{MAX_EPISODE, MAX_SEASON};

/// `series` or `movie`. Warns when the keys used to name the output are
/// missing, since the filename falls back to the bare name.
pub(super) fn media_type(c: &mut KeyCheck<'_>) -> bool {
    if !string_set(c) {
        return false;
    }
    let has = |key: &str| c.section.contains(key);
    let (season, episode, year) = (has("season"), has("episode"), has("year"));
    match c.value {
        "series" if !season && !episode => c.warn("Season and episode number not specified"),
        "series" if !season => c.warn("Season number not specified"),
        "series" if !episode => c.warn("Episode number not specified"),
        "movie" if !year => c.warn("Year not specified"),
        _ => {}
    }
    true
}

fn bounded(c: &mut KeyCheck<'_>, max: i64, what: &str) -> bool {
    match parse_int(c.value) {
        Some(n) if (0..=max).contains(&n) => true,
        Some(_) => c.error(format!("{} number should be in range 0-{}", what, max)),
        None => c.error("Value should be a positive integer"),
    }
}

pub(super) fn season(c: &mut KeyCheck<'_>) -> bool {
    bounded(c, MAX_SEASON, "Season")
}

pub(super) fn episode(c: &mut KeyCheck<'_>) -> bool {
    bounded(c, MAX_EPISODE, "Episode")
}
