//! Headless viewer session shared by the commands
//!
//! Runs the viewer controller against the recording map and list, so each
//! command sees exactly what a browser shell would have drawn.

use std::path::{Path, PathBuf};

use crate::cli::ViewArgs;
use rentmap_core::app::{Controller, Event, EventOutcome, Startup};
use rentmap_core::config::ViewerConfig;
use rentmap_core::error::Result;
use rentmap_core::provider::recording::{RecordingMap, RecordingView};
use rentmap_core::record::RecordKey;
use rentmap_core::store::{LoadOutcome, RecordStore, RejectedRecord};
use rentmap_core::sync::Activation;

pub struct Session {
    controller: Controller,
    map: RecordingMap,
    view: RecordingView,
    startup: Startup,
    data_path: PathBuf,
    rejected: Vec<RejectedRecord>,
}

impl Session {
    /// Start a session; a data file that cannot be read is an error
    pub fn open(config: ViewerConfig, data_path: &Path) -> Result<Self> {
        let (store, report) = RecordStore::load(data_path)?;
        let rejected = report.rejected.clone();
        let outcome = LoadOutcome {
            store,
            failure: None,
            report: Some(report),
        };
        let mut session = Self::start(config, data_path, || outcome);
        session.rejected = rejected;
        Ok(session)
    }

    /// Start a session the way the viewer does: load failures become a
    /// notification and an empty list
    pub fn open_lenient(config: ViewerConfig, data_path: &Path) -> Self {
        Self::start(config, data_path, || RecordStore::load_or_empty(data_path))
    }

    fn start(config: ViewerConfig, data_path: &Path, load: impl FnOnce() -> LoadOutcome) -> Self {
        let mut controller = Controller::new(config);
        let mut map = RecordingMap::default();
        let mut view = RecordingView::default();
        let startup = controller.start(&mut map, &mut view, load);
        Self {
            controller,
            map,
            view,
            startup,
            data_path: data_path.to_path_buf(),
            rejected: Vec::new(),
        }
    }

    /// Apply filters, then the viewport box, then the search keyword
    pub fn apply(&mut self, args: &ViewArgs) -> Vec<EventOutcome> {
        let mut outcomes = Vec::new();
        if !args.filter.is_empty() {
            outcomes.push(self.run(Event::FilterApplied {
                filter: args.filter.to_input(),
            }));
        }
        // After the filter: applying it refits the map
        if let Some(bounds) = args.bbox {
            self.map.set_bounds(bounds);
            outcomes.push(self.run(Event::InBoundsToggled { on: true }));
        }
        if let Some(keyword) = &args.search {
            outcomes.push(self.run(Event::SearchSubmitted {
                keyword: keyword.clone(),
            }));
        }
        outcomes
    }

    /// Push one event and handle it
    pub fn run(&mut self, event: Event) -> EventOutcome {
        self.controller.push(event);
        self.controller
            .run_pending(&mut self.map, &mut self.view)
            .pop()
            .unwrap_or(EventOutcome::Idle)
    }

    pub fn activate_by_key(&mut self, key: &RecordKey) -> Activation {
        self.controller
            .activate_by_key(key, &mut self.map, &mut self.view)
    }

    pub fn activate_by_address(&mut self, address: &str) -> Activation {
        self.controller
            .activate_by_address(address, &mut self.map, &mut self.view)
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn map(&self) -> &RecordingMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut RecordingMap {
        &mut self.map
    }

    pub fn view(&self) -> &RecordingView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut RecordingView {
        &mut self.view
    }

    pub fn startup(&self) -> &Startup {
        &self.startup
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Data-file elements skipped by a strict load
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }
}
