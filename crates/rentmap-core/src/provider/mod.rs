//! Collaborator seams: the map SDK and the view layer
//!
//! The core never draws. It asks a [`MapProvider`] to place markers and move
//! the camera, and a [`ViewLayer`] to replace list rows and toggle the
//! active row. Bounds/zoom/drag subscriptions are the host's job: it pushes
//! [`crate::app::Event::ViewportChanged`] into the controller.
//!
//! [`recording`] holds headless implementations that log every call.

pub mod recording;

use serde::Serialize;

use crate::config::NotificationConfig;
use crate::error::Result;
use crate::record::RecordKey;
use crate::render::{InfoWindowContent, ListRow, MarkerSpec};
use crate::viewport::{Bounds, LatLng};

/// Map SDK operations the core relies on
pub trait MapProvider {
    /// Resolve once the SDK is loaded; an error leaves the app degraded
    fn ready(&mut self) -> Result<()>;

    fn create_map(&mut self, center: LatLng, zoom: u8);

    /// Remove every marker from the clustering layer
    fn clear_markers(&mut self);

    fn add_markers(&mut self, markers: &[MarkerSpec]);

    fn pan_to(&mut self, position: LatLng, zoom: Option<u8>);

    /// Bounds of the visible area, `None` before the map has a size
    fn current_bounds(&self) -> Option<Bounds>;

    fn fit_to(&mut self, positions: &[LatLng]);

    /// Open the single info window anchored at `anchor`, replacing any other
    fn show_info_window(&mut self, anchor: &MarkerSpec, content: &InfoWindowContent);

    fn close_info_window(&mut self);
}

/// Empty-list states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Filters or search matched nothing
    NoResults,
    /// The data file was missing, unreadable or empty
    NoData,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoResults => "검색 결과가 없습니다",
            EmptyState::NoData => "데이터가 없습니다",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoResults => "필터 조건을 변경해보세요",
            EmptyState::NoData => "data/properties.json 파일을 확인해주세요",
        }
    }
}

/// A transient toast message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    /// Visible time before the exit animation starts
    pub duration_ms: u64,
    pub enter_delay_ms: u64,
    pub exit_delay_ms: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, timing: &NotificationConfig) -> Self {
        Self {
            message: message.into(),
            duration_ms: timing.duration_ms,
            enter_delay_ms: timing.enter_delay_ms,
            exit_delay_ms: timing.exit_delay_ms,
        }
    }
}

/// List/DOM operations the core relies on
pub trait ViewLayer {
    /// Replace every list row
    fn render_rows(&mut self, rows: &[ListRow]);

    /// Replace the list with an empty-state message
    fn render_empty(&mut self, state: EmptyState);

    fn set_result_count(&mut self, count: usize);

    /// Toggle the active class on one row. Returns `false` when no row with
    /// that key is on screen.
    fn set_row_active(&mut self, key: &RecordKey, active: bool) -> bool;

    /// Show a toast; a newer toast replaces the current one
    fn notify(&mut self, notification: Notification);

    fn set_loading(&mut self, loading: bool);
}
