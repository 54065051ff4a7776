use crate::cli::support::{rentmap, with_listings, write_data};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_all_listings() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("하이빌 101호 [여성]"))
        .stdout(predicate::str::contains("도봉하우스 1호"))
        .stdout(predicate::str::contains("노원빌 201호"))
        .stdout(predicate::str::contains("4건"));
}

#[test]
fn test_list_default_data_path() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("data")).unwrap();
    write_data(&dir.path().join("data"), crate::cli::support::LISTINGS);

    rentmap()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4건"));
}

#[test]
fn test_list_area_filter() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["list", "--area-max", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("하이빌 101호"))
        .stdout(predicate::str::contains("노원빌 201호"))
        .stdout(predicate::str::contains("102호").not())
        .stdout(predicate::str::contains("2건"));
}

#[test]
fn test_list_deposit_filter_in_manwon() {
    let dir = tempdir().unwrap();

    // 노원빌 has no deposit and fails a set bound
    with_listings(dir.path())
        .args(["list", "--deposit-max", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("하이빌 101호"))
        .stdout(predicate::str::contains("하이빌 102호"))
        .stdout(predicate::str::contains("노원빌").not())
        .stdout(predicate::str::contains("2건"));
}

#[test]
fn test_list_district_and_structure() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["list", "--district", "강북구", "--structure", "투룸"])
        .assert()
        .success()
        .stdout(predicate::str::contains("하이빌 102호"))
        .stdout(predicate::str::contains("1건"));
}

#[test]
fn test_list_search_highlights() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["list", "--search", "  마들로 "])
        .assert()
        .success()
        .stdout(predicate::str::contains("* 도봉하우스 1호"))
        .stdout(predicate::str::contains("1건"));
}

#[test]
fn test_list_bbox_keeps_listings_inside() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["list", "--bbox", "37.4,126.9,37.6,127.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("하이빌 101호"))
        .stdout(predicate::str::contains("도봉하우스").not())
        .stdout(predicate::str::contains("노원빌").not())
        .stdout(predicate::str::contains("2건"));
}

#[test]
fn test_list_no_results() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["list", "--search", "없는곳"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No listings found"));
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();

    let output = with_listings(dir.path())
        .args(["--format", "json", "list", "--gender", "무관"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    // 102 has an empty gender, 노원빌 none
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["unit"], "102");
    assert_eq!(rows[0]["depositLabel"], "1,000");
    assert_eq!(rows[0]["key"]["id"], "1");
}

#[test]
fn test_list_records() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["--format", "records", "list", "-s", "하이빌"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H rentmap=1 records=1"))
        .stdout(predicate::str::contains("mode=list rows=2"))
        .stdout(predicate::str::contains(
            r#"R 1 101 "하이빌" "서울 강북구 도봉로 1" district=강북구 area=25㎡ deposit=500 rent=30 structure=원룸 gender=여성 highlight=1"#,
        ));
}
