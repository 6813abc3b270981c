//! Tests for the encode loop, using real `true`/`false`/`sh` as HandBrakeCLI.

use super::*;
use crate::keyfile::Section;
use crate::registry::HandBrakeVersion;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn unit(name: &str, pairs: &[(&str, &str)]) -> OutfileUnit {
    let mut section = Section::new(name);
    for (k, v) in pairs {
        section.set(*k, *v);
    }
    OutfileUnit {
        name: name.to_string(),
        section,
        removed: Vec::new(),
    }
}

fn episode(name: &str, number: &str, out_dir: &Path) -> OutfileUnit {
    let dir = out_dir.to_string_lossy().to_string();
    unit(
        name,
        &[
            ("type", "series"),
            ("name", "Show"),
            ("episode", number),
            ("iso_filename", "disc.iso"),
            ("title", "1"),
            ("output_basedir", dir.as_str()),
        ],
    )
}

fn sh(script: &str) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), script.to_string()]
}

/// Writes a line to stderr and creates the file passed after `-o`.
const FAKE_ENCODER: &str =
    r#"for a; do last="$a"; done; echo "encoding to $last" >&2; : > "$last""#;

struct Fixture {
    registry: Registry,
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            registry: Registry::newest(),
            dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn runner(&self, handbrake: Vec<String>) -> Runner<'_> {
        Runner::with_programs(
            &self.registry,
            handbrake,
            sh(r#": > "$3""#),
            "log",
            self.path().to_path_buf(),
        )
    }

    fn run(
        &self,
        handbrake: Vec<String>,
        units: &[OutfileUnit],
        options: &RunOptions,
        answers: &str,
    ) -> (RunSummary, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        let summary = self
            .runner(handbrake)
            .run(units, options, &mut input, &mut out)
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }
}

#[test]
fn test_select_units_requires_outfiles() {
    let err = select_units(&[], None).unwrap_err();
    assert_eq!(err.to_string(), "No valid outfile sections found. Quitting.");
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn test_select_units_by_episode() {
    let dir = Path::new("/out");
    let units = vec![
        episode("OUTFILE1", "0", dir),
        episode("OUTFILE2", "3", dir),
        episode("OUTFILE3", "3", dir),
    ];

    assert_eq!(select_units(&units, None).unwrap().len(), 3);

    let picked = select_units(&units, Some(3)).unwrap();
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].name, "OUTFILE2");

    assert_eq!(select_units(&units, Some(0)).unwrap()[0].name, "OUTFILE1");

    let err = select_units(&units, Some(4)).unwrap_err();
    assert_eq!(err.to_string(), "Could not find episode 4. Quitting.");
}

#[test]
fn test_check_output_dir() {
    let temp = TempDir::new().unwrap();
    assert!(check_output_dir(temp.path()).unwrap().is_absolute());

    let missing = temp.path().join("missing");
    let err = check_output_dir(&missing).unwrap_err();
    assert!(err.to_string().starts_with("Invalid output path:"));

    let file = temp.path().join("file");
    fs::write(&file, "").unwrap();
    let err = check_output_dir(&file).unwrap_err();
    assert!(err.to_string().starts_with("Output path is not a directory:"));
}

#[test]
fn test_debug_prints_commands_without_running() {
    let fx = Fixture::new();
    let units = vec![
        episode("OUTFILE1", "1", fx.path()),
        episode("OUTFILE2", "2", fx.path()),
    ];
    let options = RunOptions {
        debug: true,
        ..Default::default()
    };

    let (summary, out) = fx.run(vec!["false".to_string()], &units, &options, "");

    assert_eq!(summary.count(Outcome::Printed), 2);
    assert!(out.contains("Encoding: 1/2: Show - e001.mkv\n"));
    assert!(out.contains("Encoding: 2/2: Show - e002.mkv\n"));
    assert!(out.contains("false -t 1 -i "));
    assert!(!fx.path().join("Show - e001.mkv.log").exists());
}

#[test]
fn test_debug_key_in_outfile() {
    let fx = Fixture::new();
    let mut u = episode("OUTFILE1", "1", fx.path());
    u.section.set("debug", "true");

    let (summary, _) = fx.run(vec!["false".to_string()], &[u], &RunOptions::default(), "");
    assert_eq!(summary.outcomes, vec![("OUTFILE1".to_string(), Outcome::Printed)]);
}

#[test]
fn test_successful_encode_writes_log_and_creates_directories() {
    let fx = Fixture::new();
    let out_dir = fx.path().join("shows").join("season1");
    let units = vec![episode("OUTFILE1", "1", &out_dir)];

    let (summary, out) = fx.run(sh(FAKE_ENCODER), &units, &RunOptions::default(), "");

    assert_eq!(summary.count(Outcome::Encoded), 1);
    assert!(summary.failed().is_empty());
    assert_eq!(out, "Encoding: 1/1: Show - e001.mkv\n");

    let output = out_dir.join("Show - e001.mkv");
    assert!(output.exists());
    let log = fs::read_to_string(log_path(&output, "log")).unwrap();
    assert!(log.starts_with("hbr: "));
    assert!(log.contains(" -t 1 -i "));
    assert!(log.contains(&format!("encoding to {}", output.display())));
}

#[test]
fn test_failures_are_reported_and_loop_continues() {
    let fx = Fixture::new();
    let units = vec![
        episode("OUTFILE1", "1", fx.path()),
        episode("OUTFILE2", "2", fx.path()),
    ];

    let (summary, out) = fx.run(vec!["false".to_string()], &units, &RunOptions::default(), "");

    assert_eq!(summary.failed(), vec!["OUTFILE1", "OUTFILE2"]);
    assert!(out.contains("Encoding: 2/2: "));
    assert!(fx.path().join("Show - e002.mkv.log").exists());
}

#[test]
fn test_missing_program_fails_the_outfile() {
    let fx = Fixture::new();
    let units = vec![episode("OUTFILE1", "1", fx.path())];

    let (summary, _) = fx.run(
        vec!["/nonexistent/HandBrakeCLI".to_string()],
        &units,
        &RunOptions::default(),
        "",
    );
    assert_eq!(summary.failed(), vec!["OUTFILE1"]);
}

#[test]
fn test_existing_output_prompts_until_answered() {
    let fx = Fixture::new();
    let units = vec![episode("OUTFILE1", "1", fx.path())];
    fs::write(fx.path().join("Show - e001.mkv"), "old").unwrap();

    let (summary, out) = fx.run(sh(FAKE_ENCODER), &units, &RunOptions::default(), "maybe\nY\n");

    assert_eq!(summary.count(Outcome::Encoded), 1);
    assert!(out.contains("already exists."));
    assert_eq!(out.matches("Do you want to overwrite? (y/n) ").count(), 2);
    assert_eq!(fs::read_to_string(fx.path().join("Show - e001.mkv")).unwrap(), "");
}

#[test]
fn test_declined_overwrite_skips() {
    let fx = Fixture::new();
    let units = vec![episode("OUTFILE1", "1", fx.path())];
    fs::write(fx.path().join("Show - e001.mkv"), "old").unwrap();

    let (summary, out) = fx.run(sh(FAKE_ENCODER), &units, &RunOptions::default(), "n\n");

    assert_eq!(summary.count(Outcome::Skipped), 1);
    assert!(summary.failed().is_empty());
    assert!(out.ends_with("was not encoded\n"));
    assert_eq!(fs::read_to_string(fx.path().join("Show - e001.mkv")).unwrap(), "old");
}

#[test]
fn test_no_overwrite_decision_is_a_failure() {
    let fx = Fixture::new();
    let units = vec![episode("OUTFILE1", "1", fx.path())];
    fs::write(fx.path().join("Show - e001.mkv"), "old").unwrap();

    let (summary, _) = fx.run(sh(FAKE_ENCODER), &units, &RunOptions::default(), "");
    assert_eq!(summary.failed(), vec!["OUTFILE1"]);
}

#[test]
fn test_overwrite_flag_skips_prompt() {
    let fx = Fixture::new();
    let units = vec![episode("OUTFILE1", "1", fx.path())];
    fs::write(fx.path().join("Show - e001.mkv"), "old").unwrap();
    let options = RunOptions {
        overwrite: true,
        ..Default::default()
    };

    let (summary, out) = fx.run(sh(FAKE_ENCODER), &units, &options, "");

    assert_eq!(summary.count(Outcome::Encoded), 1);
    assert!(!out.contains("overwrite?"));
}

#[test]
fn test_unwritable_output_is_an_error() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("locked.mkv");
    fs::write(&output, "old").unwrap();
    let mut perms = fs::metadata(&output).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&output, perms).unwrap();

    let mut input = Cursor::new(b"y\n".to_vec());
    let mut out = Vec::new();
    let err = confirm_output(&output, true, &mut input, &mut out).unwrap_err();

    assert!(err.to_string().contains("is not writable"));
    assert_eq!(err.exit_code(), crate::exit_codes::EXECUTION_FAILURE);
}

#[test]
fn test_preview_generates_thumbnail() {
    let fx = Fixture::new();
    let units = vec![episode("OUTFILE1", "1", fx.path())];
    let options = RunOptions {
        preview: true,
        ..Default::default()
    };

    let (_, out) = fx.run(sh(FAKE_ENCODER), &units, &options, "");

    let thumbnail = fx.path().join("Show - e001.mkv.png");
    assert!(thumbnail.exists());
    assert!(out.contains(&format!(
        "Generating preview: 1/1: {}",
        thumbnail.display()
    )));
}

#[test]
fn test_output_dir_overrides_basedir() {
    let fx = Fixture::new();
    let other = TempDir::new().unwrap();
    let units = vec![episode("OUTFILE1", "1", fx.path())];
    let options = RunOptions {
        output_dir: Some(other.path().to_path_buf()),
        ..Default::default()
    };

    let (summary, _) = fx.run(sh(FAKE_ENCODER), &units, &options, "");

    assert_eq!(summary.count(Outcome::Encoded), 1);
    assert!(other.path().join("Show - e001.mkv").exists());
    assert!(!fx.path().join("Show - e001.mkv").exists());
}

#[test]
fn test_log_and_thumbnail_paths() {
    let output = Path::new("/media/Show - e001.mkv");
    assert_eq!(
        log_path(output, "txt"),
        PathBuf::from("/media/Show - e001.mkv.txt")
    );
    assert_eq!(
        thumbnail_command(&["ffmpegthumbnailer".to_string()], output),
        vec![
            "ffmpegthumbnailer",
            "-i",
            "/media/Show - e001.mkv",
            "-o",
            "/media/Show - e001.mkv.png",
            "-s0",
            "-q10"
        ]
    );
}

#[test]
fn test_probe_reads_version_banner() {
    let program = sh("echo 'HandBrake 1.3.3 (2020050300)'");
    assert_eq!(probe_version(&program), Some(HandBrakeVersion::new(1, 3, 3)));
}

#[test]
fn test_probe_falls_back_to_update_on_stderr() {
    let program = sh(r#"if [ "$0" = "--update" ]; then echo "HandBrake 1.1.2 (2018)" >&2; fi"#);
    assert_eq!(probe_version(&program), Some(HandBrakeVersion::new(1, 1, 2)));
}

#[test]
fn test_probe_failures_are_unknown() {
    assert_eq!(probe_version(&["true".to_string()]), None);
    assert_eq!(probe_version(&["/nonexistent/HandBrakeCLI".to_string()]), None);
    assert_eq!(probe_version(&[]), None);
}

#[test]
fn test_explicit_version_wins() {
    let program = sh("echo 'HandBrake 1.3.3'");
    assert_eq!(
        resolve_version(Some("0.9.9"), &program).unwrap(),
        Some(HandBrakeVersion::new(0, 9, 9))
    );
    assert!(resolve_version(Some("new"), &program).is_err());
    assert_eq!(
        resolve_version(None, &program).unwrap(),
        Some(HandBrakeVersion::new(1, 3, 3))
    );
}
