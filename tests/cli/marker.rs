use crate::cli::support::with_listings;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_marker_activates_first_unit() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["marker", "서울 강북구 도봉로 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">   101호"))
        .stdout(predicate::str::contains("    102호"));
}

#[test]
fn test_marker_address_is_exact() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["marker", "서울 강북구  도봉로 1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("address not found"));
}

#[test]
fn test_marker_json() {
    let dir = tempdir().unwrap();

    let output = with_listings(dir.path())
        .args(["--format", "json", "marker", "서울 도봉구 마들로 5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["activation"]["outcome"], "focused");
    assert_eq!(value["activation"]["key"]["id"], "2");
    assert_eq!(value["infoWindow"]["title"], "도봉하우스");
}
