mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

/// Default run writes markdown reports to ./output.
#[test]
fn default_run_writes_markdown_to_output_dir() {
    let dir = tempdir().expect("tempdir");
    common::write_file(dir.path(), "family.ged", common::FAMILY);

    assert_cmd::cargo::cargo_bin_cmd!("anetavle")
        .current_dir(dir.path())
        .arg("family.ged")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing GEDCOM file: family.ged"))
        .stdout(predicate::str::contains("Found 4 individuals"))
        .stdout(predicate::str::contains("Generated ancestor trees in output/"));

    let output = dir.path().join("output");
    for n in [1, 2, 3, 6] {
        assert!(output.join(format!("{n}.md")).exists(), "missing {n}.md");
    }
    let root = fs::read_to_string(output.join("1.md")).expect("read 1.md");
    assert!(root.starts_with("# Anetavle for person 1"));
}

/// Word format with explicit output dir and depth.
#[test]
fn word_format_writes_docx_files() {
    let dir = tempdir().expect("tempdir");
    let ged = common::write_file(dir.path(), "family.ged", common::FAMILY);
    let out = dir.path().join("charts");

    assert_cmd::cargo::cargo_bin_cmd!("anetavle")
        .arg(&ged)
        .arg("--output-dir")
        .arg(&out)
        .arg("--format")
        .arg("word")
        .arg("--depth")
        .arg("3")
        .assert()
        .success();

    assert!(out.join("1.docx").exists());
    assert!(out.join("6.docx").exists());
    assert!(!out.join("1.md").exists());
}

/// A file with no individuals is reported and treated as success.
#[test]
fn empty_file_succeeds_without_output() {
    let dir = tempdir().expect("tempdir");
    let ged = common::write_file(dir.path(), "empty.ged", "0 HEAD\n0 TRLR\n");
    let out = dir.path().join("output");

    assert_cmd::cargo::cargo_bin_cmd!("anetavle")
        .arg(&ged)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No individuals found in the GEDCOM file"));

    assert!(!out.exists());
}

/// Unreadable input fails the run.
#[test]
fn missing_file_fails() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("anetavle")
        .arg(dir.path().join("absent.ged"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read GEDCOM file"));
}

/// clap rejects unknown formats.
#[test]
fn unknown_format_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let ged = common::write_file(dir.path(), "family.ged", common::FAMILY);

    assert_cmd::cargo::cargo_bin_cmd!("anetavle")
        .arg(&ged)
        .arg("--format")
        .arg("pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

/// --root-name picks the chart root, and a config file supplies the format.
#[test]
fn root_name_and_config_file() {
    let dir = tempdir().expect("tempdir");
    let ged = common::write_file(dir.path(), "family.ged", common::FAMILY);
    let config = common::write_file(dir.path(), "anetavle.json", r#"{"format":"markdown","depth":3}"#);
    let out = dir.path().join("anne");

    assert_cmd::cargo::cargo_bin_cmd!("anetavle")
        .arg(&ged)
        .arg("--config")
        .arg(&config)
        .arg("--root-name")
        .arg("anne hansen")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Root person: Anne Hansen (@I3@)"));

    let root = fs::read_to_string(out.join("1.md")).expect("read 1.md");
    assert!(root.contains("1. Anne Hansen"));
    assert!(out.join("2.md").exists());
    assert!(!out.join("3.md").exists());
}

/// --list --json prints individuals as JSON without writing reports.
#[test]
fn list_json_prints_individuals() {
    let dir = tempdir().expect("tempdir");
    let ged = common::write_file(dir.path(), "family.ged", common::FAMILY);

    let assert = assert_cmd::cargo::cargo_bin_cmd!("anetavle")
        .current_dir(dir.path())
        .arg(&ged)
        .arg("--list")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    let people = parsed.as_array().expect("array");
    assert_eq!(people.len(), 4);
    assert_eq!(people[0]["id"], "@I1@");
    assert_eq!(people[0]["father_id"], "@I2@");
    assert_eq!(people[3]["name"], "Per Hansen");
    assert!(!dir.path().join("output").exists());
}

/// --json without --list is a usage error.
#[test]
fn json_requires_list() {
    let dir = tempdir().expect("tempdir");
    let ged = common::write_file(dir.path(), "family.ged", common::FAMILY);

    assert_cmd::cargo::cargo_bin_cmd!("anetavle").arg(&ged).arg("--json").assert().failure();
}
