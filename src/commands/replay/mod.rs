//! `rentmap replay` command - run an event script through the viewer
//!
//! The script is a JSON array. Each element is either a viewer event
//! (`{"type": "filter_applied", "filter": {"areaMax": 40}}`) or a map move
//! (`{"moveTo": "south,west,north,east"}`) standing in for the user dragging
//! the map. Data load failures are not errors here: they play out as the
//! viewer's own notification and empty state.

mod describe;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::commands::dispatch::CommandContext;
use crate::commands::session::Session;
use crate::output_by_format_result;
use rentmap_core::app::{Event, EventOutcome, Startup};
use rentmap_core::error::{RentmapError, Result};
use rentmap_core::provider::recording::{MapCall, ViewCall};
use rentmap_core::viewport::Bounds;

use self::describe::{describe_map_call, describe_outcome, describe_view_call};

/// One script element
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Move {
        #[serde(rename = "moveTo")]
        move_to: String,
    },
    Event(Event),
}

/// What one step produced
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StepOutcome {
    Startup(Startup),
    Moved { bounds: Bounds },
    Event(EventOutcome),
}

/// A step with every collaborator call it caused
#[derive(Debug, Clone, Serialize)]
pub struct StepLog {
    pub step: usize,
    pub event: &'static str,
    pub outcome: StepOutcome,
    pub map: Vec<MapCall>,
    pub view: Vec<ViewCall>,
}

/// Execute the replay command
pub fn execute(ctx: &CommandContext, script: &Path) -> Result<()> {
    let script_path = ctx.root().join(script);
    let content = fs::read_to_string(&script_path)
        .map_err(|e| RentmapError::io_operation("read script", script_path.display(), e))?;
    let steps = parse_script(&content)?;

    let (config, data_path) = ctx.resolve()?;
    let mut session = Session::open_lenient(config, &data_path);
    let log = replay(&mut session, steps)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&log)?);
            Ok(())
        },
        human => { output_human(&log) },
        records => { output_records(&log) }
    )
}

pub fn parse_script(content: &str) -> Result<Vec<Step>> {
    serde_json::from_str(content).map_err(|e| RentmapError::invalid_value("event script", e))
}

/// Run `steps` against `session`, logging the calls each one made
pub fn replay(session: &mut Session, steps: Vec<Step>) -> Result<Vec<StepLog>> {
    let mut log = Vec::with_capacity(steps.len() + 1);
    let startup = session.startup().clone();
    log.push(take_log(session, 0, "start", StepOutcome::Startup(startup)));

    for (i, step) in steps.into_iter().enumerate() {
        let (event, outcome) = match step {
            Step::Move { move_to } => {
                let bounds: Bounds = move_to.parse()?;
                session.map_mut().set_bounds(bounds);
                ("move_to", StepOutcome::Moved { bounds })
            }
            Step::Event(event) => {
                let name = event.name();
                (name, StepOutcome::Event(session.run(event)))
            }
        };
        log.push(take_log(session, i + 1, event, outcome));
    }

    Ok(log)
}

fn take_log(session: &mut Session, step: usize, event: &'static str, outcome: StepOutcome) -> StepLog {
    StepLog {
        step,
        event,
        outcome,
        map: session.map_mut().take_calls(),
        view: session.view_mut().take_calls(),
    }
}

fn output_human(log: &[StepLog]) {
    for entry in log {
        println!("[{}] {}: {}", entry.step, entry.event, describe_outcome(&entry.outcome));
        for call in &entry.map {
            println!("      map  {}", describe_map_call(call));
        }
        for call in &entry.view {
            println!("      view {}", describe_view_call(call));
        }
    }
}

fn output_records(log: &[StepLog]) {
    println!("H rentmap=1 records=1 mode=replay steps={}", log.len());
    for entry in log {
        println!("E {} {} {}", entry.step, entry.event, describe_outcome(&entry.outcome));
        for call in &entry.map {
            println!("M {} {}", entry.step, describe_map_call(call));
        }
        for call in &entry.view {
            println!("V {} {}", entry.step, describe_view_call(call));
        }
    }
}

#[cfg(test)]
mod tests;
