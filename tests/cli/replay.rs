use crate::cli::support::{rentmap, with_listings};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Replay command tests
// ============================================================================

const SCRIPT: &str = r#"[
  {"type": "filter_applied", "filter": {"areaMax": 40}},
  {"type": "marker_clicked", "address": "서울 강북구 도봉로 1"},
  {"type": "map_clicked"},
  {"type": "search_submitted", "keyword": "마들로"}
]"#;

#[test]
fn test_replay_prints_each_step() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("script.json"), SCRIPT).unwrap();

    with_listings(dir.path())
        .args(["replay", "script.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] start: ready records=4 rejected=0"))
        .stdout(predicate::str::contains("[1] filter_applied: recomputed"))
        .stdout(predicate::str::contains("view render_rows count=3"))
        .stdout(predicate::str::contains(r#"[2] marker_clicked: focused 1-101 "서울 강북구 도봉로 1""#))
        .stdout(predicate::str::contains(r#"map  show_info_window "서울 강북구 도봉로 1" units=2"#))
        .stdout(predicate::str::contains("[3] map_clicked: info_window_closed"))
        .stdout(predicate::str::contains("[4] search_submitted: searched results=0"))
        .stdout(predicate::str::contains("검색 결과가 없습니다"));
}

#[test]
fn test_replay_viewport_debounce() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("script.json"),
        r#"[
          {"type": "in_bounds_toggled", "on": true},
          {"moveTo": "37.4,126.9,37.6,127.1"},
          {"type": "viewport_changed", "atMs": 1000},
          {"type": "viewport_changed", "atMs": 1100},
          {"type": "tick", "nowMs": 1200},
          {"type": "tick", "nowMs": 1300}
        ]"#,
    )
    .unwrap();

    with_listings(dir.path())
        .args(["--format", "records", "replay", "script.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E 4 viewport_changed scheduled due_ms=1300"))
        .stdout(predicate::str::contains("E 5 tick idle"))
        .stdout(predicate::str::contains("E 6 tick recomputed"))
        .stdout(predicate::str::contains("V 6 render_rows count=2"));
}

#[test]
fn test_replay_missing_data_plays_out_as_notification() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("script.json"), r#"[{"type": "filter_reset"}]"#).unwrap();

    rentmap()
        .current_dir(dir.path())
        .args(["--data", "missing.json", "replay", "script.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] start: no_data failed=true"))
        .stdout(predicate::str::contains(r#"notify "데이터를 불러오는데 실패했습니다.""#))
        .stdout(predicate::str::contains("render_empty no_data"))
        .stdout(predicate::str::contains("[1] filter_reset: ignored phase=no_data"));
}

#[test]
fn test_replay_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("script.json"), r#"[{"type": "map_clicked"}]"#).unwrap();

    let output = with_listings(dir.path())
        .args(["--format", "json", "replay", "script.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let log: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let log = log.as_array().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0]["event"], "start");
    assert_eq!(log[0]["outcome"]["startup"], "ready");
    assert_eq!(log[0]["map"][0]["call"], "create_map");
    assert_eq!(log[1]["outcome"]["outcome"], "info_window_closed");
}

#[test]
fn test_replay_rejects_bad_script() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("script.json"), r#"[{"type": "teleport"}]"#).unwrap();

    with_listings(dir.path())
        .args(["replay", "script.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid event script"));
}
