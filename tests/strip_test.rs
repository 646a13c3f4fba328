//! Tests for the strip command against real file trees.
#![allow(clippy::unwrap_used)]

use deadbranch::commands::{run_strip, StripOptions};
use std::fs;
use tempfile::tempdir;

const DEMO_SOURCE: &str = "const app = express();\nif (false) {\n  res.json({ demo: true });\n} else {\n  res.json({ demo: false });\n}\n";
const DEMO_STRIPPED: &str = "const app = express();\nres.json({ demo: false });\n";

#[test]
fn test_strip_writes_file_back() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("server.ts");
    fs::write(&file, DEMO_SOURCE).unwrap();

    let mut buffer = Vec::new();
    let reports = run_strip(
        &[file.clone()],
        &StripOptions::default(),
        &mut buffer,
    )
    .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].collapsed, 1);
    assert_eq!(reports[0].removed, 0);
    assert_eq!(
        reports[0].bytes_saved,
        DEMO_SOURCE.len() - DEMO_STRIPPED.len()
    );

    assert_eq!(fs::read_to_string(&file).unwrap(), DEMO_STRIPPED);

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Stripped:"));
    assert!(output.contains("Dead branches removed successfully"));
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("server.ts");
    fs::write(&file, DEMO_SOURCE).unwrap();

    let options = StripOptions {
        dry_run: true,
        ..StripOptions::default()
    };

    let mut buffer = Vec::new();
    let reports = run_strip(&[file.clone()], &options, &mut buffer).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(fs::read_to_string(&file).unwrap(), DEMO_SOURCE);

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("[DRY-RUN]"));
    assert!(output.contains("Would strip"));
    assert!(!output.contains("Dead branches removed successfully"));
}

#[test]
fn test_backup_keeps_original() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("server.ts");
    fs::write(&file, DEMO_SOURCE).unwrap();

    let options = StripOptions {
        backup: true,
        ..StripOptions::default()
    };

    let mut buffer = Vec::new();
    run_strip(&[file.clone()], &options, &mut buffer).unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), DEMO_STRIPPED);
    let backup = dir.path().join("server.ts.bak");
    assert_eq!(fs::read_to_string(&backup).unwrap(), DEMO_SOURCE);
}

#[test]
fn test_clean_tree_reports_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("clean.ts"), "export const x = 1;\n").unwrap();

    let mut buffer = Vec::new();
    let reports = run_strip(
        &[dir.path().to_path_buf()],
        &StripOptions::default(),
        &mut buffer,
    )
    .unwrap();

    assert!(reports.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("clean.ts")).unwrap(),
        "export const x = 1;\n"
    );

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("No dead branches found."));
}

#[test]
fn test_extension_filter_skips_other_files() {
    let dir = tempdir().unwrap();
    let md = dir.path().join("notes.md");
    fs::write(&md, DEMO_SOURCE).unwrap();

    let mut buffer = Vec::new();
    let reports = run_strip(
        &[dir.path().to_path_buf()],
        &StripOptions::default(),
        &mut buffer,
    )
    .unwrap();

    assert!(reports.is_empty());
    assert_eq!(fs::read_to_string(&md).unwrap(), DEMO_SOURCE);
}

#[test]
fn test_directory_walk_handles_multiple_files() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("api");
    fs::create_dir(&sub).unwrap();
    fs::write(dir.path().join("a.ts"), DEMO_SOURCE).unwrap();
    fs::write(sub.join("b.ts"), "before if (false) { dead() } after\n").unwrap();
    fs::write(sub.join("c.ts"), "untouched\n").unwrap();

    let mut buffer = Vec::new();
    let reports = run_strip(
        &[dir.path().to_path_buf()],
        &StripOptions::default(),
        &mut buffer,
    )
    .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(
        fs::read_to_string(sub.join("b.ts")).unwrap(),
        "before  after\n"
    );
    assert_eq!(fs::read_to_string(sub.join("c.ts")).unwrap(), "untouched\n");

    // Two changed files get the summary table.
    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Bytes saved"));
}

#[test]
fn test_non_utf8_file_is_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.ts"), [0xff, 0xfe, 0x00, 0x41]).unwrap();
    fs::write(dir.path().join("good.ts"), DEMO_SOURCE).unwrap();

    let mut buffer = Vec::new();
    let reports = run_strip(
        &[dir.path().to_path_buf()],
        &StripOptions::default(),
        &mut buffer,
    )
    .unwrap();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].file.ends_with("good.ts"));

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Skip:"));
}

#[test]
fn test_quiet_suppresses_output() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("server.ts");
    fs::write(&file, DEMO_SOURCE).unwrap();

    let options = StripOptions {
        quiet: true,
        ..StripOptions::default()
    };

    let mut buffer = Vec::new();
    let reports = run_strip(&[file.clone()], &options, &mut buffer).unwrap();

    assert_eq!(reports.len(), 1);
    assert!(buffer.is_empty());
    assert_eq!(fs::read_to_string(&file).unwrap(), DEMO_STRIPPED);
}

#[test]
fn test_json_mode_emits_no_human_lines() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("server.ts");
    fs::write(&file, DEMO_SOURCE).unwrap();

    let options = StripOptions {
        json: true,
        ..StripOptions::default()
    };

    let mut buffer = Vec::new();
    let reports = run_strip(&[file], &options, &mut buffer).unwrap();

    assert_eq!(reports.len(), 1);
    assert!(buffer.is_empty());
}
