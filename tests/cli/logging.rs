use crate::cli::support::with_listings;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_logging_is_quiet() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("RENTMAP_LOG")
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_level_debug() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("RENTMAP_LOG")
        .args(["--log-level", "debug", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("render_list"));
}

#[test]
fn test_log_json_lines() {
    let dir = tempdir().unwrap();

    let output = with_listings(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("RENTMAP_LOG")
        .args(["--log-json", "--log-level", "debug", "groups"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}

#[test]
fn test_verbose_reports_phases() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("RENTMAP_LOG")
        .args(["--verbose", "facets"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolve_paths"));
}
