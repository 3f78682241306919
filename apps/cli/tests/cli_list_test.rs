//! Integration tests for the `list` command.

use std::path::PathBuf;

use assert_cmd::Command;
use plotvault_core::{Container, OpenMode};
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a container with three namespaces: tagged-with-empty-message,
/// commented-only, and completely bare.
fn fixture_container(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("_plots.db");
    let container = Container::open(&path, OpenMode::Append).unwrap();

    let first = container.ensure_namespace("2024-01-01_12-00-00").unwrap();
    container.write_object(first, "comment", "initial layout").unwrap();
    container.write_object(first, "tag", "").unwrap();

    let second = container.ensure_namespace("2024-01-02_09-00-00").unwrap();
    container.write_object(second, "comment", "tuned binning").unwrap();

    container.ensure_namespace("2024-01-03_17-00-00").unwrap();

    container.close().unwrap();
    path
}

fn pv() -> Command {
    Command::cargo_bin("pv").unwrap()
}

#[test]
fn test_list_shows_namespaces_in_write_order() {
    let dir = TempDir::new().unwrap();
    let path = fixture_container(&dir);

    let output = pv().arg("list").arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("2024-01-01_12-00-00").unwrap();
    let second = stdout.find("2024-01-02_09-00-00").unwrap();
    let third = stdout.find("2024-01-03_17-00-00").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_list_shows_comments_and_indexes() {
    let dir = TempDir::new().unwrap();
    let path = fixture_container(&dir);

    pv().arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("initial layout"))
        .stdout(predicate::str::contains("tuned binning"))
        .stdout(predicate::str::contains(" 1 "))
        .stdout(predicate::str::contains(" 3 "));
}

#[test]
fn test_empty_tag_still_marks_namespace_as_tagged() {
    let dir = TempDir::new().unwrap();
    let path = fixture_container(&dir);

    let output = pv().arg("list").arg(&path).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let tagged_line = stdout.lines().find(|l| l.contains("2024-01-01_12-00-00")).unwrap();
    assert!(tagged_line.contains('*'), "tagged namespace missing marker: {tagged_line}");

    let untagged_line = stdout.lines().find(|l| l.contains("2024-01-02_09-00-00")).unwrap();
    assert!(!untagged_line.contains('*'), "untagged namespace has marker: {untagged_line}");
}

#[test]
fn test_namespace_without_metadata_lists_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = fixture_container(&dir);

    // The bare namespace must show up without an error and with an empty
    // comment, not be skipped.
    pv().arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-03_17-00-00"));
}

#[test]
fn test_list_order_is_stable_across_invocations() {
    let dir = TempDir::new().unwrap();
    let path = fixture_container(&dir);

    let first = pv().arg("list").arg(&path).output().unwrap();
    let second = pv().arg("list").arg(&path).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_list_json_output() {
    let dir = TempDir::new().unwrap();
    let path = fixture_container(&dir);

    let output = pv().arg("list").arg(&path).arg("--json").output().unwrap();
    assert!(output.status.success());

    let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let summaries = summaries.as_array().unwrap();
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0]["index"], 1);
    assert_eq!(summaries[0]["key"], "2024-01-01_12-00-00");
    assert_eq!(summaries[0]["tag"], "");
    assert_eq!(summaries[1]["tag"], serde_json::Value::Null);
    assert_eq!(summaries[2]["comment"], "");
}

#[test]
fn test_list_fails_on_missing_container() {
    let dir = TempDir::new().unwrap();

    pv().arg("list")
        .arg(dir.path().join("absent.db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open container"));
}

#[test]
fn test_missing_command_prints_usage() {
    pv().assert().failure().stderr(predicate::str::contains("Usage"));
}
