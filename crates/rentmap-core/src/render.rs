//! List and marker rendering coordinators
//!
//! Both coordinators are idempotent: each call clears what is on screen and
//! replaces it in full.

use serde::Serialize;
use tracing::debug;

use crate::format::{format_area, format_price};
use crate::group::{AddressGroup, Grouping};
use crate::provider::{EmptyState, MapProvider, ViewLayer};
use crate::record::{PropertyRecord, RecordKey};
use crate::search::SearchQuery;
use crate::viewport::LatLng;

/// One list row per record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub key: RecordKey,
    pub property_id: String,
    pub unit: String,
    pub address: String,
    pub district: String,
    pub gender: Option<String>,
    pub structure: Option<String>,
    pub area_label: String,
    pub deposit_label: String,
    pub rent_label: String,
    /// Record matches the active search keyword
    pub highlighted: bool,
}

impl ListRow {
    pub fn from_record(record: &PropertyRecord, search: Option<&SearchQuery>) -> Self {
        Self {
            key: record.key(),
            property_id: record.property_id.clone(),
            unit: record.unit.clone(),
            address: record.address.clone(),
            district: record.district.clone(),
            gender: record.gender.clone().filter(|g| !g.is_empty()),
            structure: record.structure.clone(),
            area_label: format_area(record.exclusive_area),
            deposit_label: format_price(record.deposit),
            rent_label: format_price(record.monthly_rent),
            highlighted: search.is_some_and(|q| q.matches(record)),
        }
    }
}

/// One marker per address group with a coordinate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub address: String,
    pub position: LatLng,
    /// Hover title, e.g. `홍원하이빌 (3호실)`
    pub title: String,
    pub unit_count: usize,
}

impl MarkerSpec {
    /// `None` when the group's first member has no coordinate
    pub fn for_group(group: &AddressGroup) -> Option<Self> {
        let position = group.position()?;
        let first = group.first()?;
        Some(Self {
            address: group.address().to_string(),
            position,
            title: format!("{} ({}호실)", first.property_id, group.len()),
            unit_count: group.len(),
        })
    }
}

/// One unit entry inside an info window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitEntry {
    pub key: RecordKey,
    pub unit: String,
    pub structure: Option<String>,
    pub gender: Option<String>,
    pub area_label: String,
    pub deposit_label: String,
    pub rent_label: String,
}

/// Info window listing every unit at an address, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoWindowContent {
    pub title: String,
    pub address: String,
    pub unit_count: usize,
    pub units: Vec<UnitEntry>,
}

impl InfoWindowContent {
    pub fn for_group(group: &AddressGroup) -> Self {
        let title = group
            .first()
            .map(|r| r.property_id.clone())
            .unwrap_or_default();
        let units = group
            .members()
            .iter()
            .map(|r| UnitEntry {
                key: r.key(),
                unit: r.unit.clone(),
                structure: r.structure.clone(),
                gender: r.gender.clone().filter(|g| !g.is_empty()),
                area_label: format_area(r.exclusive_area),
                deposit_label: format_price(r.deposit),
                rent_label: format_price(r.monthly_rent),
            })
            .collect();

        Self {
            title,
            address: group.address().to_string(),
            unit_count: group.len(),
            units,
        }
    }
}

/// Build list rows in display-set order
pub fn list_rows(records: &[PropertyRecord], search: Option<&SearchQuery>) -> Vec<ListRow> {
    records
        .iter()
        .map(|r| ListRow::from_record(r, search))
        .collect()
}

/// Build marker specs for every placeable group
pub fn marker_specs(grouping: &Grouping) -> Vec<MarkerSpec> {
    grouping.iter().filter_map(MarkerSpec::for_group).collect()
}

/// Replace the list with `rows`, or show the no-results state
pub fn render_list<V: ViewLayer + ?Sized>(view: &mut V, rows: &[ListRow]) {
    view.set_result_count(rows.len());
    if rows.is_empty() {
        view.render_empty(EmptyState::NoResults);
    } else {
        view.render_rows(rows);
    }
    debug!(rows = rows.len(), "render_list");
}

/// Replace the cluster layer contents with `markers`
pub fn render_markers<M: MapProvider + ?Sized>(map: &mut M, markers: &[MarkerSpec]) {
    map.clear_markers();
    if !markers.is_empty() {
        map.add_markers(markers);
    }
    debug!(markers = markers.len(), "render_markers");
}
