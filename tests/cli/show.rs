use crate::cli::support::with_listings;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Show command tests (list-row click)
// ============================================================================

#[test]
fn test_show_opens_info_window_for_address() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["show", "1", "102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("하이빌  서울 강북구 도봉로 1  (2호실)"))
        .stdout(predicate::str::contains("    101호"))
        .stdout(predicate::str::contains(">   102호"))
        .stdout(predicate::str::contains("map: 37.500000,127.000000 zoom 3"));
}

#[test]
fn test_show_without_coordinate_is_row_only() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["show", "3", "201"])
        .assert()
        .success()
        .stdout(predicate::str::contains("노원빌 201호"))
        .stdout(predicate::str::contains("(no coordinate, list row only)"));
}

#[test]
fn test_show_unknown_listing() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["show", "9", "999"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("listing not found"));
}

#[test]
fn test_show_filtered_out_listing_is_not_found() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["show", "2", "1", "--district", "강북구"])
        .assert()
        .code(3);
}

#[test]
fn test_show_json() {
    let dir = tempdir().unwrap();

    let output = with_listings(dir.path())
        .args(["--format", "json", "show", "1", "101"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["activation"]["outcome"], "focused");
    assert_eq!(value["infoWindow"]["unitCount"], 2);
    assert_eq!(value["map"]["zoom"], 3);
}

#[test]
fn test_show_records() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["--format", "records", "show", "1", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"A focused 1-101 "서울 강북구 도봉로 1" center=37.500000,127.000000 zoom=3"#,
        ))
        .stdout(predicate::str::contains("U 1-102 102 area=33㎡ deposit=1,000 rent=40"));
}
