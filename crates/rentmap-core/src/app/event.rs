//! Named events fed to the controller and what each one did

use serde::{Deserialize, Serialize};

use crate::query::FilterInput;
use crate::record::RecordKey;
use crate::sync::Activation;

/// An input from the host shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Event {
    /// The map reported a bounds/zoom/drag change at `at_ms`
    ViewportChanged { at_ms: u64 },
    /// The filter form was submitted
    FilterApplied {
        #[serde(default)]
        filter: FilterInput,
    },
    FilterReset,
    SearchSubmitted { keyword: String },
    InBoundsToggled { on: bool },
    /// A marker was clicked. `generation` is the grouping the marker was
    /// drawn from, when the host tracks it.
    MarkerClicked {
        address: String,
        #[serde(default)]
        generation: Option<u64>,
    },
    /// A list row (or an info-window unit entry) was clicked
    ListRowClicked {
        id: String,
        unit: String,
        #[serde(default)]
        generation: Option<u64>,
    },
    /// Click on the map background
    MapClicked,
    /// Logical clock advance, drives the viewport debounce
    Tick { now_ms: u64 },
}

impl Event {
    pub fn list_row_clicked(key: &RecordKey) -> Self {
        Event::ListRowClicked {
            id: key.id.clone(),
            unit: key.unit.clone(),
            generation: None,
        }
    }

    pub fn marker_clicked(address: impl Into<String>) -> Self {
        Event::MarkerClicked {
            address: address.into(),
            generation: None,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Event::ViewportChanged { .. } => "viewport_changed",
            Event::FilterApplied { .. } => "filter_applied",
            Event::FilterReset => "filter_reset",
            Event::SearchSubmitted { .. } => "search_submitted",
            Event::InBoundsToggled { .. } => "in_bounds_toggled",
            Event::MarkerClicked { .. } => "marker_clicked",
            Event::ListRowClicked { .. } => "list_row_clicked",
            Event::MapClicked => "map_clicked",
            Event::Tick { .. } => "tick",
        }
    }
}

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// `start` has not run
    Created,
    Ready,
    /// Loaded nothing; events are ignored
    NoData,
    /// The map never became ready; events are ignored
    Degraded,
}

/// Result of [`crate::app::Controller::start`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "startup", rename_all = "snake_case")]
pub enum Startup {
    Ready { records: usize, rejected: usize },
    /// The data set is empty; `failed` is set when the load itself failed
    NoData { failed: bool },
    Degraded { reason: String },
}

/// What a recompute put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecomputeSummary {
    pub generation: u64,
    pub rows: usize,
    pub markers: usize,
    /// The map was fitted to the markers
    pub fitted: bool,
}

/// Result of one handled event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    Recomputed(RecomputeSummary),
    Searched {
        #[serde(flatten)]
        summary: RecomputeSummary,
        results: usize,
    },
    Activated { activation: Activation },
    InfoWindowClosed,
    /// A viewport change is pending until `due_ms`
    Scheduled { due_ms: u64 },
    /// The debounce fired with the viewport filter off
    Skipped,
    /// Nothing was due
    Idle,
    /// Events are not handled in this phase
    Ignored { phase: Phase },
}
