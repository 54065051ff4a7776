//! Tests for `rentmap replay`

use super::*;
use rentmap_core::config::ViewerConfig;
use std::fs;
use tempfile::TempDir;

const DATA: &str = r#"[
    {"id": 1, "propertyId": "하이빌", "unit": "101", "address": "A", "district": "강북구",
     "exclusiveArea": 25, "lat": 37.5, "lng": 127.0},
    {"id": 1, "propertyId": "하이빌", "unit": "102", "address": "A", "district": "강북구",
     "exclusiveArea": 33, "lat": 37.5, "lng": 127.0},
    {"id": 2, "propertyId": "도봉하우스", "unit": "1", "address": "B", "district": "도봉구",
     "exclusiveArea": 50, "lat": 37.7, "lng": 127.2}
]"#;

fn session() -> (TempDir, Session) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("properties.json");
    fs::write(&path, DATA).unwrap();
    let session = Session::open_lenient(ViewerConfig::default(), &path);
    (dir, session)
}

#[test]
fn test_parse_script_mixes_moves_and_events() {
    let steps = parse_script(
        r#"[
            {"moveTo": "37.4,126.9,37.6,127.1"},
            {"type": "in_bounds_toggled", "on": true},
            {"type": "map_clicked"}
        ]"#,
    )
    .unwrap();
    assert!(matches!(steps[0], Step::Move { .. }));
    assert!(matches!(steps[1], Step::Event(Event::InBoundsToggled { on: true })));
    assert!(matches!(steps[2], Step::Event(Event::MapClicked)));
}

#[test]
fn test_parse_script_rejects_unknown_event() {
    let err = parse_script(r#"[{"type": "teleport"}]"#).unwrap_err();
    assert!(matches!(err, RentmapError::InvalidValue { .. }));
}

#[test]
fn test_replay_logs_calls_per_step() {
    let (_dir, mut session) = session();
    let steps = parse_script(
        r#"[
            {"type": "filter_applied", "filter": {"areaMax": 40}},
            {"type": "marker_clicked", "address": "A"}
        ]"#,
    )
    .unwrap();

    let log = replay(&mut session, steps).unwrap();

    assert_eq!(log.len(), 3);
    assert_eq!(log[0].event, "start");
    assert_eq!(describe_outcome(&log[0].outcome), "ready records=3 rejected=0");
    assert!(log[1].map.contains(&MapCall::AddMarkers { count: 1 }));
    assert!(log[1].view.contains(&ViewCall::RenderRows { count: 2 }));
    assert_eq!(
        describe_outcome(&log[2].outcome),
        "focused 1-101 \"A\""
    );
    assert!(log[2]
        .map
        .iter()
        .any(|c| describe_map_call(c) == "show_info_window \"A\" units=2"));
}

#[test]
fn test_replay_viewport_move_and_debounce() {
    let (_dir, mut session) = session();
    let steps = parse_script(
        r#"[
            {"type": "in_bounds_toggled", "on": true},
            {"moveTo": "37.4,126.9,37.6,127.1"},
            {"type": "viewport_changed", "atMs": 0},
            {"type": "tick", "nowMs": 200}
        ]"#,
    )
    .unwrap();

    let log = replay(&mut session, steps).unwrap();

    assert_eq!(describe_outcome(&log[3].outcome), "scheduled due_ms=200");
    assert!(describe_outcome(&log[4].outcome).contains("rows=2"));
}

#[test]
fn test_replay_without_data() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::open_lenient(ViewerConfig::default(), &dir.path().join("none.json"));
    let steps = parse_script(r#"[{"type": "filter_reset"}]"#).unwrap();

    let log = replay(&mut session, steps).unwrap();

    assert_eq!(describe_outcome(&log[0].outcome), "no_data failed=true");
    assert!(log[0]
        .view
        .iter()
        .any(|c| describe_view_call(c) == "notify \"데이터를 불러오는데 실패했습니다.\""));
    assert_eq!(describe_outcome(&log[1].outcome), "ignored phase=no_data");
}
