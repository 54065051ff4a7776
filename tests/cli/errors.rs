use crate::cli::support::{rentmap, with_listings, write_data};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Exit codes and structured errors
// ============================================================================

#[test]
fn test_help_flag() {
    rentmap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rentmap"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("replay"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    rentmap()
        .assert()
        .success()
        .stdout(predicate::str::contains("rentmap"));
}

#[test]
fn test_missing_data_file_exits_3() {
    let dir = tempdir().unwrap();

    rentmap()
        .current_dir(dir.path())
        .args(["--data", "nope.json", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to load data"));
}

#[test]
fn test_malformed_data_file_exits_3() {
    let dir = tempdir().unwrap();
    let data = write_data(dir.path(), "{ not json");

    rentmap()
        .current_dir(dir.path())
        .arg("--data")
        .arg(data)
        .arg("list")
        .assert()
        .code(3);
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();

    let output = rentmap()
        .current_dir(dir.path())
        .args(["--format", "json", "--data", "nope.json", "groups"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["type"], "data_load_failure");
    assert_eq!(value["error"]["code"], 3);
}

#[test]
fn test_unknown_format_is_usage_error() {
    rentmap()
        .args(["--format", "yaml", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_bad_bbox_is_usage_error() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["list", "--bbox", "37.6,126.9,37.4"])
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    let output = rentmap()
        .args(["--format", "json", "list", "--area-max", "many"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    rentmap()
        .current_dir(dir.path())
        .args(["--quiet", "--data", "nope.json", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_rejected_records_are_reported() {
    let dir = tempdir().unwrap();
    let data = write_data(
        dir.path(),
        r#"[
          {"id": 1, "propertyId": "하이빌", "unit": "101", "address": "A"},
          {"id": 2, "propertyId": "무주소", "unit": "1"}
        ]"#,
    );

    rentmap()
        .current_dir(dir.path())
        .arg("--data")
        .arg(data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1건"))
        .stderr(predicate::str::contains(
            "warning: invalid record at index 1: missing address",
        ));
}
