//! Viewer behavior through the public API

use rentmap_core::app::{Controller, Event, EventOutcome, Startup};
use rentmap_core::config::ViewerConfig;
use rentmap_core::group::group_by_address;
use rentmap_core::provider::recording::{RecordingMap, RecordingView};
use rentmap_core::query::{apply_attribute_filters, FilterCriteria, FilterInput, GenderCriterion};
use rentmap_core::record::{PropertyRecord, RecordKey};
use rentmap_core::search::{apply_search, matches, SearchQuery};
use rentmap_core::store::{LoadOutcome, RecordStore};
use rentmap_core::sync::Activation;

const LISTINGS: &str = r#"[
  {"id": 1, "propertyId": "하이빌", "unit": "102", "address": "A", "district": "강북구",
   "gender": "남성", "exclusiveArea": 33, "deposit": 10000000, "monthlyRent": 400000,
   "lat": 37.5, "lng": 127.0},
  {"id": 1, "propertyId": "하이빌", "unit": "101", "address": "A", "district": "강북구",
   "gender": "", "exclusiveArea": 25, "deposit": 5000000, "monthlyRent": 300000,
   "lat": 37.5, "lng": 127.0},
  {"id": 2, "propertyId": "도봉하우스", "unit": "1", "address": "B", "district": "도봉구",
   "gender": "여성", "exclusiveArea": 50, "deposit": 5000000, "monthlyRent": 300000,
   "lat": 37.7, "lng": 127.2}
]"#;

fn store() -> RecordStore {
    let (store, report) = RecordStore::parse(LISTINGS).unwrap();
    assert_eq!(report.rejected.len(), 0);
    store
}

fn started() -> (Controller, RecordingMap, RecordingView) {
    let mut controller = Controller::new(ViewerConfig::default());
    let mut map = RecordingMap::default();
    let mut view = RecordingView::default();
    let outcome = LoadOutcome {
        store: store(),
        failure: None,
        report: None,
    };
    let startup = controller.start(&mut map, &mut view, || outcome);
    assert!(matches!(startup, Startup::Ready { records: 3, .. }));
    (controller, map, view)
}

fn keys(records: &[&PropertyRecord]) -> Vec<RecordKey> {
    records.iter().map(|r| r.key()).collect()
}

#[test]
fn test_empty_criteria_is_identity() {
    let store = store();
    let kept = apply_attribute_filters(store.all(), &FilterCriteria::default());
    let all: Vec<_> = store.all().iter().collect();
    assert_eq!(keys(&kept), keys(&all));
}

fn merged_keys(store: &RecordStore, c1: &FilterCriteria, c2: &FilterCriteria) -> Vec<RecordKey> {
    match c1.merge(c2) {
        Some(merged) => keys(&apply_attribute_filters(store.all(), &merged)),
        None => Vec::new(),
    }
}

#[test]
fn test_merged_criteria_equal_intersection() {
    let store = store();
    let criteria = [
        FilterCriteria::new().with_area(None, Some(40.0)),
        FilterCriteria::new().with_area(None, Some(30.0)),
        FilterCriteria::new().with_area(None, Some(60.0)),
        FilterCriteria::new().with_district(Some("강북구")),
        FilterCriteria::new().with_district(Some("도봉구")),
        FilterCriteria::new().with_deposit(Some(6_000_000.0), None),
        FilterCriteria::new().with_gender(GenderCriterion::Only("남성".into())),
        FilterCriteria::new().with_gender(GenderCriterion::Only("여성".into())),
    ];

    for c1 in &criteria {
        for c2 in &criteria {
            let left = keys(&apply_attribute_filters(store.all(), c1));
            let right = keys(&apply_attribute_filters(store.all(), c2));
            let intersected: Vec<_> = left.into_iter().filter(|k| right.contains(k)).collect();
            assert_eq!(merged_keys(&store, c1, c2), intersected, "{c1:?} and {c2:?}");
            assert_eq!(merged_keys(&store, c1, c2), merged_keys(&store, c2, c1));
        }
    }
}

#[test]
fn test_grouping_partitions_records() {
    let store = store();
    let grouping = group_by_address(store.all());
    assert_eq!(grouping.record_count(), store.len());
    for group in &grouping {
        assert!(group.members().iter().all(|m| m.address == group.address()));
    }
}

#[test]
fn test_search_ignores_case_and_surrounding_whitespace() {
    let store = store();
    let record = &store.all()[2];
    assert_eq!(matches(record, "  도봉하우스  "), matches(record, "도봉하우스"));

    // All-whitespace keyword means search is off
    assert!(SearchQuery::parse("  ").is_none());
    assert_eq!(apply_search(store.all(), SearchQuery::parse("  ").as_ref()).len(), 3);
}

#[test]
fn test_gender_filter() {
    let store = store();
    let women = FilterCriteria::new().with_gender(GenderCriterion::Only("여성".to_string()));
    let genders: Vec<_> = apply_attribute_filters(store.all(), &women)
        .iter()
        .map(|r| r.gender.clone().unwrap_or_default())
        .collect();
    assert_eq!(genders, vec!["".to_string(), "여성".to_string()]);

    let unrestricted = FilterCriteria::new().with_gender(GenderCriterion::UnrestrictedOnly);
    let kept = apply_attribute_filters(store.all(), &unrestricted);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].unit, "101");
}

#[test]
fn test_area_filter_end_to_end() {
    let (mut controller, mut map, mut view) = started();

    controller.push(Event::FilterApplied {
        filter: FilterInput {
            area_max: Some(40.0),
            ..FilterInput::default()
        },
    });
    let outcomes = controller.run_pending(&mut map, &mut view);

    assert!(matches!(outcomes[0], EventOutcome::Recomputed(s) if s.rows == 2 && s.markers == 1));
    let units: Vec<_> = view.rows().iter().map(|r| r.unit.as_str()).collect();
    assert_eq!(units, vec!["102", "101"]);
    assert_eq!(map.markers().len(), 1);
    assert_eq!(map.markers()[0].address, "A");

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.grouping().len(), 1);
    assert_eq!(snapshot.grouping().groups()[0].len(), 2);
}

#[test]
fn test_single_active_selection_across_clicks() {
    let (mut controller, mut map, mut view) = started();

    for event in [
        Event::marker_clicked("A"),
        Event::list_row_clicked(&RecordKey::new("2", "1")),
        Event::list_row_clicked(&RecordKey::new("1", "102")),
        Event::marker_clicked("B"),
        Event::marker_clicked("nowhere"),
    ] {
        controller.push(event);
        controller.run_pending(&mut map, &mut view);
        assert!(view.active_rows().len() <= 1);
    }
    assert_eq!(view.active_rows(), vec![&RecordKey::new("2", "1")]);
}

#[test]
fn test_refilter_leaves_old_selection_unresolved() {
    let (mut controller, mut map, mut view) = started();
    let key = RecordKey::new("1", "101");

    controller.push(Event::list_row_clicked(&key));
    controller.push(Event::FilterApplied {
        filter: FilterInput {
            district: "도봉구".to_string(),
            ..FilterInput::default()
        },
    });
    controller.push(Event::list_row_clicked(&key));
    let outcomes = controller.run_pending(&mut map, &mut view);

    assert!(matches!(
        &outcomes[0],
        EventOutcome::Activated { activation: Activation::Focused { .. } }
    ));
    assert!(matches!(
        &outcomes[2],
        EventOutcome::Activated { activation: Activation::Unresolved }
    ));
    assert!(view.active_rows().is_empty());
    assert!(controller.active().is_none());
}
