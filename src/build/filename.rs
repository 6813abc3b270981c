//! Output filename and path construction.

use super::BuildError;
use crate::keyfile::Section;
use std::path::{Path, PathBuf};

/// Largest season number that fits the two digit field.
pub const MAX_SEASON: i64 = 99;

/// Largest accepted episode number.
pub const MAX_EPISODE: i64 = 99;

/// Longest base name (without extension), in characters.
pub const MAX_BASENAME_LEN: usize = 249;

/// Generate the output filename for a merged outfile.
///
/// Format:
/// - series: `{name} - s{NN}e{NNN} - {specific_name}.{ext}`
/// - movie: `{name} ({year}) - {specific_name}.{ext}`
///
/// Every part after the name is optional. Example: `Show - s01e002.mkv`
pub fn output_filename(section: &Section) -> Result<String, BuildError> {
    let name = required(section, "name")?;
    let media_type = required(section, "type")?;

    let mut base = name.to_string();
    match media_type {
        "series" => {
            let season = bounded(section, "season", MAX_SEASON)?;
            let episode = bounded(section, "episode", MAX_EPISODE)?;
            if season.is_some() || episode.is_some() {
                base.push_str(" - ");
                if let Some(season) = season {
                    base.push_str(&format!("s{:02}", season));
                }
                if let Some(episode) = episode {
                    base.push_str(&format!("e{:03}", episode));
                }
            }
        }
        "movie" => {
            if let Some(year) = section.get("year") {
                base.push_str(&format!(" ({})", year));
            }
        }
        other => {
            return Err(BuildError::InvalidValue {
                key: "type".to_string(),
                value: other.to_string(),
            });
        }
    }
    if let Some(specific) = section.get("specific_name") {
        base.push_str(" - ");
        base.push_str(specific);
    }

    let base = truncate_chars(&base, MAX_BASENAME_LEN);
    Ok(format!("{}.{}", base, container_extension(section.get("format"))))
}

/// File extension for a `format` value. Defaults to `mkv`.
pub fn container_extension(format: Option<&str>) -> &'static str {
    match format {
        Some("mp4" | "av_mp4") => "mp4",
        _ => "mkv",
    }
}

/// Directory an `extra` value files into.
pub fn extra_directory(extra: &str) -> Option<&'static str> {
    match extra {
        "behindthescenes" => Some("Behind The Scenes"),
        "deleted" => Some("Deleted Scenes"),
        "featurette" => Some("Featurettes"),
        "interview" => Some("Interviews"),
        "scene" => Some("Scenes"),
        "short" => Some("Shorts"),
        "trailer" => Some("Trailers"),
        "other" => Some("Other"),
        _ => None,
    }
}

/// `input_basedir/iso_filename`. The base directory defaults to `cwd`.
pub fn input_path(section: &Section, cwd: &Path) -> Result<PathBuf, BuildError> {
    let iso = required(section, "iso_filename")?;
    let base = section.get("input_basedir").map_or(cwd, Path::new);
    Ok(base.join(iso))
}

/// Full output path for `filename`.
///
/// `output_basedir` [/ `{name} ({year})` for movies with `add_year`]
/// [/ extra directory] / filename. The base directory defaults to `cwd`.
pub fn output_path(section: &Section, filename: &str, cwd: &Path) -> Result<PathBuf, BuildError> {
    let mut path = section
        .get("output_basedir")
        .map_or_else(|| cwd.to_path_buf(), PathBuf::from);

    if section.get("type") == Some("movie") && section.get_bool("add_year") == Some(true) {
        let name = required(section, "name")?;
        match section.get("year") {
            Some(year) => path.push(format!("{} ({})", name, year)),
            None => path.push(name),
        }
    }

    if let Some(extra) = section.get("extra") {
        let dir = extra_directory(extra).ok_or_else(|| BuildError::InvalidValue {
            key: "extra".to_string(),
            value: extra.to_string(),
        })?;
        path.push(dir);
    }

    path.push(filename);
    Ok(path)
}

fn required<'a>(section: &'a Section, key: &'static str) -> Result<&'a str, BuildError> {
    section.get(key).ok_or(BuildError::MissingKey(key))
}

/// Integer key limited to `0..=max`. Out of range values are rejected.
fn bounded(section: &Section, key: &'static str, max: i64) -> Result<Option<i64>, BuildError> {
    let Some(raw) = section.get(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if (0..=max).contains(&n) => Ok(Some(n)),
        Ok(n) => Err(BuildError::OutOfRange { key, value: n, max }),
        Err(_) => Err(BuildError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
