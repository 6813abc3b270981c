//! Tests for section merging.

use super::*;
use crate::keyfile::KeyFile;

fn section(name: &str, pairs: &[(&str, &str)]) -> Section {
    let mut s = Section::new(name);
    for (k, v) in pairs {
        s.set(*k, *v);
    }
    s
}

#[test]
fn test_preferred_value_wins() {
    let registry = Registry::newest();
    let pref = section("OUTFILE1", &[("quality", "18.0"), ("title", "2")]);
    let alt = section("CONFIG", &[("quality", "20.0"), ("encoder", "x264")]);

    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();

    assert_eq!(merged.section.name(), "OUTFILE1");
    assert_eq!(merged.section.get("quality"), Some("18.0"));
    assert_eq!(merged.section.get("title"), Some("2"));
    assert_eq!(merged.section.get("encoder"), Some("x264"));
    assert!(merged.removed.is_empty());
}

#[test]
fn test_keys_from_either_side_survive() {
    let registry = Registry::newest();
    let pref = section("OUTFILE1", &[("name", "Show")]);
    let alt = section("CONFIG", &[("format", "mkv"), ("markers", "true")]);

    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();
    let keys: Vec<&str> = merged.section.keys().collect();
    assert_eq!(keys, vec!["format", "markers", "name"]);
}

#[test]
fn test_cross_scope_conflict_removes_alternate_key() {
    let registry = Registry::newest();
    let pref = section("OUTFILE1", &[("vb", "2000")]);
    let alt = section("CONFIG", &[("quality", "20.0"), ("encoder", "x264")]);

    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();

    assert_eq!(merged.section.get("vb"), Some("2000"));
    assert!(!merged.section.contains("quality"));
    assert_eq!(
        merged.removed,
        vec![Removal {
            key: "quality".to_string(),
            value: "20.0".to_string(),
            because_of: "vb".to_string(),
        }]
    );
}

#[test]
fn test_same_scope_conflict_is_left_for_validation() {
    let registry = Registry::newest();
    let pref = section("OUTFILE1", &[("vb", "2000"), ("quality", "20.0")]);
    let alt = section("CONFIG", &[("encoder", "x264")]);

    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();
    assert!(merged.section.contains("vb"));
    assert!(merged.section.contains("quality"));
    assert!(merged.removed.is_empty());
}

#[test]
fn test_sources_are_not_modified() {
    let registry = Registry::newest();
    let pref = section("OUTFILE1", &[("decomb", "true")]);
    let alt = section("CONFIG", &[("deinterlace", "fast")]);
    let pref_before = pref.clone();
    let alt_before = alt.clone();

    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();

    assert!(!merged.section.contains("deinterlace"));
    assert_eq!(pref, pref_before);
    assert_eq!(alt, alt_before);
}

#[test]
fn test_valued_conflict_only_matches_that_value() {
    let registry = Registry::newest();
    let movie = section("CONFIG", &[("add_year", "true")]);

    // type=movie does not trigger the type=series relation.
    let pref = section("OUTFILE1", &[("type", "movie")]);
    let merged = merge(&registry, Some(&pref), Some(&movie), "OUTFILE1").unwrap();
    assert_eq!(merged.section.get("add_year"), Some("true"));

    let pref = section("OUTFILE1", &[("type", "series")]);
    let merged = merge(&registry, Some(&pref), Some(&movie), "OUTFILE1").unwrap();
    assert!(!merged.section.contains("add_year"));

    // add_year=false never conflicts with a series.
    let series = section("CONFIG", &[("type", "series")]);
    let pref = section("OUTFILE1", &[("add_year", "false")]);
    let merged = merge(&registry, Some(&pref), Some(&series), "OUTFILE1").unwrap();
    assert_eq!(merged.section.get("type"), Some("series"));
}

#[test]
fn test_conflicting_value_must_match() {
    let registry = Registry::newest();
    let pref = section("OUTFILE1", &[("gain", "2.0")]);

    let alt = section("CONFIG", &[("aencoder", "av_aac")]);
    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();
    assert_eq!(merged.section.get("aencoder"), Some("av_aac"));

    let alt = section("CONFIG", &[("aencoder", "copy")]);
    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();
    assert!(!merged.section.contains("aencoder"));
}

#[test]
fn test_negated_boolean_overrides_without_removal() {
    let registry = Registry::newest();
    let pref = section("OUTFILE1", &[("markers", "false")]);
    let alt = section("CONFIG", &[("markers", "true")]);

    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();
    assert_eq!(merged.section.get("markers"), Some("false"));
}

#[test]
fn test_missing_group_fails() {
    let registry = Registry::newest();
    let alt = section("CONFIG", &[("format", "mkv")]);
    let err = merge(&registry, None, Some(&alt), "OUTFILE9").unwrap_err();
    assert_eq!(err, MergeError::MissingGroup("OUTFILE9".to_string()));

    let pref = section("OUTFILE1", &[("title", "1")]);
    assert!(merge(&registry, Some(&pref), None, "OUTFILE1").is_err());
}

#[test]
fn test_both_empty_fails() {
    let registry = Registry::newest();
    let pref = Section::new("OUTFILE1");
    let alt = Section::new("CONFIG");
    let err = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap_err();
    assert_eq!(err, MergeError::BothEmpty("OUTFILE1".to_string()));
}

#[test]
fn test_one_empty_side_is_a_copy() {
    let registry = Registry::newest();
    let pref = Section::new("OUTFILE1");
    let alt = section("CONFIG", &[("format", "mkv")]);
    let merged = merge(&registry, Some(&pref), Some(&alt), "OUTFILE1").unwrap();
    assert_eq!(merged.section.get("format"), Some("mkv"));
}

#[test]
fn test_three_scope_merge() {
    let registry = Registry::newest();
    let global = section("CONFIG", &[("format", "mp4"), ("quality", "20.0"), ("crop", "")]);
    let local = KeyFile::parse(
        "[CONFIG]\nformat=mkv\n\n[OUTFILE1]\nvb=1500\ncrop=0:0:8:8\nepisode=3\n",
    )
    .unwrap();

    let config = merge_config(&registry, Some(&global), &local).unwrap();
    assert_eq!(config.section.get("format"), Some("mkv"));
    assert_eq!(config.section.get("quality"), Some("20.0"));

    let outfile = local.section("OUTFILE1").unwrap();
    let unit = merge_outfile(&registry, &config.section, outfile).unwrap();
    assert_eq!(unit.name, "OUTFILE1");
    assert_eq!(unit.section.get("format"), Some("mkv"));
    assert_eq!(unit.section.get("crop"), Some("0:0:8:8"));
    assert!(!unit.section.contains("quality"));
    assert_eq!(unit.episode(), Some(3));
}

#[test]
fn test_merge_config_without_global_copies_local() {
    let registry = Registry::newest();
    let local = KeyFile::parse("[CONFIG]\nformat=mkv\n[OUTFILE1]\ntitle=1\n").unwrap();
    let config = merge_config(&registry, None, &local).unwrap();
    assert_eq!(config.section.name(), "CONFIG");
    assert_eq!(config.section.get("format"), Some("mkv"));
}
