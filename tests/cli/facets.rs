use crate::cli::support::with_listings;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_facets_human() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .arg("facets")
        .assert()
        .success()
        .stdout(predicate::str::contains("district: "))
        .stdout(predicate::str::contains("강북구"))
        .stdout(predicate::str::contains("노원구"))
        .stdout(predicate::str::contains("supplyType: "));
}

#[test]
fn test_facets_json() {
    let dir = tempdir().unwrap();

    let output = with_listings(dir.path())
        .args(["--format", "json", "facets"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["district"].as_array().unwrap().len(), 3);
    assert_eq!(value["structure"].as_array().unwrap().len(), 2);
}

#[test]
fn test_facets_records() {
    let dir = tempdir().unwrap();

    with_listings(dir.path())
        .args(["--format", "records", "facets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=facets records=4"))
        .stdout(predicate::str::contains(r#"F structure "원룸""#));
}
