//! Tests for argument building.

use super::*;
use crate::keyfile::KeyFile;
use crate::merge::{merge_config, merge_outfile};
use crate::registry::tables::V0_9_9;

fn section(pairs: &[(&str, &str)]) -> Section {
    let mut s = Section::new("OUTFILE1");
    for (k, v) in pairs {
        s.set(*k, *v);
    }
    s
}

fn args(pairs: &[(&str, &str)]) -> Vec<String> {
    build_args(&Registry::newest(), &section(pairs))
}

#[test]
fn test_series_outfile_end_to_end() {
    let text = "\
[CONFIG]
format=mkv

[OUTFILE1]
type=series
name=Show
season=1
episode=2
iso_filename=disc.iso
title=1
";
    let registry = Registry::newest();
    let file = KeyFile::parse(text).unwrap();
    let config = merge_config(&registry, None, &file).unwrap().section;
    let outfile = file.section("OUTFILE1").unwrap();
    let unit = merge_outfile(&registry, &config, outfile).unwrap();

    let invocation = build(&registry, &unit.section, Path::new("/work")).unwrap();

    assert_eq!(invocation.group, "OUTFILE1");
    assert_eq!(invocation.filename, "Show - s01e002.mkv");
    assert_eq!(invocation.input, PathBuf::from("/work/disc.iso"));
    assert_eq!(invocation.output, PathBuf::from("/work/Show - s01e002.mkv"));
    assert_eq!(
        invocation.args,
        vec![
            "-f",
            "av_mkv",
            "-t",
            "1",
            "-i",
            "/work/disc.iso",
            "-o",
            "/work/Show - s01e002.mkv"
        ]
    );
    assert_eq!(
        invocation.shell_command(&["HandBrakeCLI".to_string()]),
        "HandBrakeCLI -f av_mkv -t 1 -i /work/disc.iso -o '/work/Show - s01e002.mkv'"
    );
}

#[test]
fn test_categories_are_emitted_in_fixed_order() {
    let got = args(&[
        ("subtitle", "1"),
        ("audio", "1"),
        ("title", "2"),
        ("quality", "20.0"),
        ("encoder", "x264"),
        ("ab", "160"),
        ("aencoder", "av_aac"),
        ("decomb", "true"),
        ("crop", "0:0:8:8"),
        ("loose-anamorphic", "true"),
        ("markers", "true"),
        ("format", "mp4"),
    ]);
    assert_eq!(
        got,
        vec![
            "-f",
            "av_mp4",
            "-m",
            "--loose-anamorphic",
            "--crop=0:0:8:8",
            "--decomb",
            "-E",
            "av_aac",
            "-B",
            "160",
            "-e",
            "x264",
            "-q",
            "20.0",
            "-t",
            "2",
            "-a",
            "1",
            "-s",
            "1",
        ]
    );
}

#[test]
fn test_boolean_rendering() {
    assert_eq!(args(&[("markers", "false")]), vec!["--no-markers"]);
    assert_eq!(args(&[("two-pass", "true")]), vec!["-2"]);
    assert_eq!(args(&[("two-pass", "false")]), vec!["--no-two-pass"]);
    assert!(args(&[("loose-anamorphic", "false")]).is_empty());
    assert_eq!(args(&[("decomb", "false")]), vec!["--no-decomb"]);
}

#[test]
fn test_hbr_keys_are_never_emitted() {
    let got = args(&[
        ("type", "movie"),
        ("name", "Film"),
        ("year", "1999"),
        ("debug", "true"),
        ("preview", "true"),
        ("autocrop", "true"),
        ("input_basedir", "/media"),
    ]);
    assert!(got.is_empty(), "{:?}", got);
}

#[test]
fn test_values_use_long_form_without_short_flag() {
    assert_eq!(
        args(&[("encoder-preset", "slow")]),
        vec!["--encoder-preset=slow"]
    );
    assert_eq!(args(&[("deinterlace", "fast")]), vec!["--deinterlace=fast"]);
}

#[test]
fn test_lists_are_normalised() {
    assert_eq!(
        args(&[("aencoder", "av_aac, copy:ac3,")]),
        vec!["-E", "av_aac,copy:ac3"]
    );
    assert_eq!(
        args(&[("mixdown", "dpl2 ,none")]),
        vec!["--mixdown=dpl2,none"]
    );
    assert!(args(&[("mixdown", "")]).is_empty());
}

#[test]
fn test_track_lists_are_normalised() {
    assert_eq!(
        args(&[("audio", "1, 2,"), ("subtitle", "3 ,4")]),
        vec!["-a", "1,2", "-s", "3,4"]
    );
    assert_eq!(args(&[("subtitle", "scan")]), vec!["-s", "scan"]);
}

#[test]
fn test_autocrop_and_crop() {
    assert_eq!(args(&[("autocrop", "false")]), vec!["--crop=0:0:0:0"]);
    assert_eq!(
        args(&[("autocrop", "false"), ("crop", "2:2:0:0")]),
        vec!["--crop=2:2:0:0"]
    );
    assert!(args(&[("crop", "")]).is_empty());
    assert!(args(&[("autocrop", "true")]).is_empty());
}

#[test]
fn test_rotate_on_current_table() {
    assert_eq!(
        args(&[("rotate", "clockwise")]),
        vec!["--rotate=angle=90:hflip=0"]
    );
    assert_eq!(
        args(&[("rotate", "vflip")]),
        vec!["--rotate=angle=180:hflip=1"]
    );
    assert_eq!(
        args(&[("rotate", "default")]),
        vec!["--rotate=angle=180:hflip=0"]
    );
    assert_eq!(args(&[("rotate", "6")]), vec!["--rotate=angle=90:hflip=1"]);
    assert_eq!(
        args(&[("rotate", "angle=270:hflip=0")]),
        vec!["--rotate=angle=270:hflip=0"]
    );
    assert_eq!(args(&[("rotate", "true")]), vec!["--rotate"]);
    assert!(args(&[("rotate", "none")]).is_empty());
}

#[test]
fn test_oldest_table_uses_integer_rotation_and_short_formats() {
    let registry = Registry::new(&V0_9_9);
    let got = build_args(
        &registry,
        &section(&[("rotate", "vflip,hflip"), ("format", "av_mkv")]),
    );
    assert_eq!(got, vec!["-f", "mkv", "--rotate=3"]);
}

#[test]
fn test_movie_paths_with_output_basedir() {
    let s = section(&[
        ("type", "movie"),
        ("name", "Film"),
        ("year", "1999"),
        ("add_year", "true"),
        ("iso_filename", "film.iso"),
        ("input_basedir", "/media/discs"),
        ("output_basedir", "/media/movies"),
        ("format", "av_mp4"),
        ("title", "1"),
    ]);
    let invocation = build(&Registry::newest(), &s, Path::new("/work")).unwrap();

    assert_eq!(invocation.filename, "Film (1999).mp4");
    assert_eq!(invocation.input, PathBuf::from("/media/discs/film.iso"));
    assert_eq!(
        invocation.output,
        PathBuf::from("/media/movies/Film (1999)/Film (1999).mp4")
    );
    let tail: Vec<&str> = invocation.args.iter().rev().take(4).map(String::as_str).collect();
    assert_eq!(
        tail,
        vec![
            "/media/movies/Film (1999)/Film (1999).mp4",
            "-o",
            "/media/discs/film.iso",
            "-i"
        ]
    );
}

#[test]
fn test_build_reports_missing_iso_filename() {
    let s = section(&[("type", "series"), ("name", "Show")]);
    assert_eq!(
        build(&Registry::newest(), &s, Path::new("/work")),
        Err(BuildError::MissingKey("iso_filename"))
    );
}

#[test]
fn test_command_line_keeps_program_arguments() {
    let s = section(&[("type", "series"), ("name", "Show"), ("iso_filename", "d.iso")]);
    let invocation = build(&Registry::newest(), &s, Path::new("/w")).unwrap();
    let program = vec!["nice".to_string(), "HandBrakeCLI".to_string()];
    let line = invocation.command_line(&program);
    assert_eq!(&line[..2], &program[..]);
    assert_eq!(line.last().map(String::as_str), Some("/w/Show.mkv"));
}
