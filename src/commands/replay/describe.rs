//! One-line descriptions of replay steps and collaborator calls

use rentmap_core::app::{EventOutcome, Phase, Startup};
use rentmap_core::provider::recording::{MapCall, ViewCall};
use rentmap_core::provider::EmptyState;
use rentmap_core::records::escape_quotes;
use rentmap_core::sync::Activation;

use super::StepOutcome;

pub fn describe_outcome(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Startup(startup) => describe_startup(startup),
        StepOutcome::Moved { bounds } => format!(
            "bounds={}..{}",
            bounds.south_west, bounds.north_east
        ),
        StepOutcome::Event(event) => describe_event(event),
    }
}

fn describe_startup(startup: &Startup) -> String {
    match startup {
        Startup::Ready { records, rejected } => {
            format!("ready records={records} rejected={rejected}")
        }
        Startup::NoData { failed } => format!("no_data failed={failed}"),
        Startup::Degraded { reason } => format!("degraded reason=\"{}\"", escape_quotes(reason)),
    }
}

fn describe_event(outcome: &EventOutcome) -> String {
    match outcome {
        EventOutcome::Recomputed(s) => format!(
            "recomputed generation={} rows={} markers={} fitted={}",
            s.generation, s.rows, s.markers, s.fitted
        ),
        EventOutcome::Searched { summary, results } => format!(
            "searched results={} generation={} markers={}",
            results, summary.generation, summary.markers
        ),
        EventOutcome::Activated { activation } => describe_activation(activation),
        EventOutcome::InfoWindowClosed => "info_window_closed".to_string(),
        EventOutcome::Scheduled { due_ms } => format!("scheduled due_ms={due_ms}"),
        EventOutcome::Skipped => "skipped".to_string(),
        EventOutcome::Idle => "idle".to_string(),
        EventOutcome::Ignored { phase } => format!("ignored phase={}", phase_name(*phase)),
    }
}

fn describe_activation(activation: &Activation) -> String {
    match activation {
        Activation::Focused { key, address } => {
            format!("focused {key} \"{}\"", escape_quotes(address))
        }
        Activation::RowOnly { key, address } => {
            format!("row_only {key} \"{}\"", escape_quotes(address))
        }
        Activation::Unresolved => "unresolved".to_string(),
        Activation::Stale { requested, current } => {
            format!("stale requested={requested} current={current}")
        }
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Created => "created",
        Phase::Ready => "ready",
        Phase::NoData => "no_data",
        Phase::Degraded => "degraded",
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

pub fn describe_map_call(call: &MapCall) -> String {
    match call {
        MapCall::CreateMap { center, zoom } => format!("create_map center={center} zoom={zoom}"),
        MapCall::ClearMarkers => "clear_markers".to_string(),
        MapCall::AddMarkers { count } => format!("add_markers count={count}"),
        MapCall::PanTo { position, zoom } => match zoom {
            Some(z) => format!("pan_to {position} zoom={z}"),
            None => format!("pan_to {position}"),
        },
        MapCall::FitTo { count } => format!("fit_to count={count}"),
        MapCall::ShowInfoWindow { address, units } => {
            format!("show_info_window \"{}\" units={units}", escape_quotes(address))
        }
        MapCall::CloseInfoWindow => "close_info_window".to_string(),
    }
}

pub fn describe_view_call(call: &ViewCall) -> String {
    match call {
        ViewCall::RenderRows { count } => format!("render_rows count={count}"),
        ViewCall::RenderEmpty { state } => format!(
            "render_empty {} \"{}\"",
            match state {
                EmptyState::NoResults => "no_results",
                EmptyState::NoData => "no_data",
            },
            state.title()
        ),
        ViewCall::ResultCount { count } => format!("result_count {count}"),
        ViewCall::RowActive { key, active } => format!("row_active {key} {}", on_off(*active)),
        ViewCall::Notify { message } => format!("notify \"{}\"", escape_quotes(message)),
        ViewCall::Loading { on } => format!("loading {}", on_off(*on)),
    }
}
