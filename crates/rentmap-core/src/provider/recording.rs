//! Headless collaborators that record every call
//!
//! Used by tests and by the CLI `replay` command, which prints the call log.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{EmptyState, MapProvider, Notification, ViewLayer};
use crate::error::{RentmapError, Result};
use crate::record::RecordKey;
use crate::render::{InfoWindowContent, ListRow, MarkerSpec};
use crate::viewport::{Bounds, LatLng};

/// A call made on [`RecordingMap`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum MapCall {
    CreateMap { center: LatLng, zoom: u8 },
    ClearMarkers,
    AddMarkers { count: usize },
    PanTo { position: LatLng, zoom: Option<u8> },
    FitTo { count: usize },
    ShowInfoWindow { address: String, units: usize },
    CloseInfoWindow,
}

/// In-memory map that tracks camera, markers and the open info window
#[derive(Debug, Default)]
pub struct RecordingMap {
    fail_ready: Option<String>,
    center: Option<LatLng>,
    zoom: Option<u8>,
    bounds: Option<Bounds>,
    markers: Vec<MarkerSpec>,
    info_window: Option<InfoWindowContent>,
    calls: Vec<MapCall>,
}

impl RecordingMap {
    /// A map whose SDK never becomes ready
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_ready: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Simulate the user panning/zooming the map
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.center = Some(bounds.center());
        self.bounds = Some(bounds);
    }

    pub fn center(&self) -> Option<LatLng> {
        self.center
    }

    pub fn zoom(&self) -> Option<u8> {
        self.zoom
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn info_window(&self) -> Option<&InfoWindowContent> {
        self.info_window.as_ref()
    }

    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<MapCall> {
        std::mem::take(&mut self.calls)
    }
}

impl MapProvider for RecordingMap {
    fn ready(&mut self) -> Result<()> {
        match &self.fail_ready {
            Some(reason) => Err(RentmapError::InitializationFailure(reason.clone())),
            None => Ok(()),
        }
    }

    fn create_map(&mut self, center: LatLng, zoom: u8) {
        self.center = Some(center);
        self.zoom = Some(zoom);
        self.calls.push(MapCall::CreateMap { center, zoom });
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.calls.push(MapCall::ClearMarkers);
    }

    fn add_markers(&mut self, markers: &[MarkerSpec]) {
        self.markers.extend_from_slice(markers);
        self.calls.push(MapCall::AddMarkers {
            count: markers.len(),
        });
    }

    fn pan_to(&mut self, position: LatLng, zoom: Option<u8>) {
        // Keep the visible span, move its center
        if let (Some(bounds), Some(center)) = (self.bounds.as_mut(), self.center) {
            let dlat = position.lat - center.lat;
            let dlng = position.lng - center.lng;
            bounds.south_west = LatLng::new(bounds.south_west.lat + dlat, bounds.south_west.lng + dlng);
            bounds.north_east = LatLng::new(bounds.north_east.lat + dlat, bounds.north_east.lng + dlng);
        }
        self.center = Some(position);
        if zoom.is_some() {
            self.zoom = zoom;
        }
        self.calls.push(MapCall::PanTo { position, zoom });
    }

    fn current_bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn fit_to(&mut self, positions: &[LatLng]) {
        if let Some(bounds) = Bounds::from_points(positions) {
            self.center = Some(bounds.center());
            self.bounds = Some(bounds);
        }
        self.calls.push(MapCall::FitTo {
            count: positions.len(),
        });
    }

    fn show_info_window(&mut self, anchor: &MarkerSpec, content: &InfoWindowContent) {
        self.info_window = Some(content.clone());
        self.calls.push(MapCall::ShowInfoWindow {
            address: anchor.address.clone(),
            units: content.unit_count,
        });
    }

    fn close_info_window(&mut self) {
        if self.info_window.take().is_some() {
            self.calls.push(MapCall::CloseInfoWindow);
        }
    }
}

/// A call made on [`RecordingView`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum ViewCall {
    RenderRows { count: usize },
    RenderEmpty { state: EmptyState },
    ResultCount { count: usize },
    RowActive { key: RecordKey, active: bool },
    Notify { message: String },
    Loading { on: bool },
}

/// In-memory list view; tracks active rows like DOM class toggles
#[derive(Debug, Default)]
pub struct RecordingView {
    rows: Vec<ListRow>,
    empty: Option<EmptyState>,
    result_count: usize,
    active: BTreeSet<RecordKey>,
    notifications: Vec<Notification>,
    loading: bool,
    calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.empty
    }

    pub fn result_count(&self) -> usize {
        self.result_count
    }

    /// Rows currently carrying the active class
    pub fn active_rows(&self) -> Vec<&RecordKey> {
        self.active.iter().collect()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }
}

impl ViewLayer for RecordingView {
    fn render_rows(&mut self, rows: &[ListRow]) {
        self.rows = rows.to_vec();
        self.empty = None;
        self.active.clear();
        self.calls.push(ViewCall::RenderRows { count: rows.len() });
    }

    fn render_empty(&mut self, state: EmptyState) {
        self.rows.clear();
        self.empty = Some(state);
        self.active.clear();
        self.calls.push(ViewCall::RenderEmpty { state });
    }

    fn set_result_count(&mut self, count: usize) {
        self.result_count = count;
        self.calls.push(ViewCall::ResultCount { count });
    }

    fn set_row_active(&mut self, key: &RecordKey, active: bool) -> bool {
        if !self.rows.iter().any(|r| &r.key == key) {
            return false;
        }
        if active {
            self.active.insert(key.clone());
        } else {
            self.active.remove(key);
        }
        self.calls.push(ViewCall::RowActive {
            key: key.clone(),
            active,
        });
        true
    }

    fn notify(&mut self, notification: Notification) {
        self.calls.push(ViewCall::Notify {
            message: notification.message.clone(),
        });
        self.notifications.push(notification);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.calls.push(ViewCall::Loading { on: loading });
    }
}
