use crate::cli::support::with_listings;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_groups_one_marker_per_address() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("서울 강북구 도봉로 1  2호실  @ 37.500000,127.000000"))
        .stdout(predicate::str::contains("서울 노원구 상계로 9  1호실  (no coordinate)"))
        .stdout(predicate::str::contains("3 addresses, 2 markers"));
}

#[test]
fn test_groups_follow_filters() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["groups", "--structure", "원룸"])
        .assert()
        .success()
        .stdout(predicate::str::contains("101호"))
        .stdout(predicate::str::contains("102호").not())
        .stdout(predicate::str::contains("2 addresses, 1 markers"));
}

#[test]
fn test_groups_json() {
    let dir = tempdir().unwrap();

    let output = with_listings(dir.path())
        .args(["--format", "json", "groups"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = value.as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["unitCount"], 2);
    assert!(groups[2]["marker"].is_null());
}

#[test]
fn test_groups_records() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["--format", "records", "groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=groups groups=3 markers=2 units=4"))
        .stdout(predicate::str::contains("U 1 101\nU 1 102"));
}
