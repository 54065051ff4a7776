//! Application controller
//!
//! One [`Controller`] owns the record store, the current criteria, search
//! and viewport mode, the latest [`Snapshot`] and the [`Synchronizer`].
//! Hosts push [`Event`]s and drain them with [`Controller::run_pending`];
//! each event runs to completion before the next one starts.

mod debounce;
mod event;
mod snapshot;

pub use debounce::Debouncer;
pub use event::{Event, EventOutcome, Phase, RecomputeSummary, Startup};
pub use snapshot::Snapshot;

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::ViewerConfig;
use crate::provider::{EmptyState, MapProvider, Notification, ViewLayer};
use crate::query::{FilterCriteria, FilterInput};
use crate::record::RecordKey;
use crate::render::{render_list, render_markers};
use crate::search::SearchQuery;
use crate::store::{LoadOutcome, RecordStore};
use crate::sync::{Activation, Synchronizer, Ticket};
use crate::trace_time;

pub const MSG_INIT_FAILED: &str = "앱 초기화에 실패했습니다";
pub const MSG_LOAD_FAILED: &str = "데이터를 불러오는데 실패했습니다.";
pub const MSG_NO_SEARCH_RESULTS: &str = "검색 결과가 없습니다";

#[derive(Debug)]
pub struct Controller {
    config: ViewerConfig,
    phase: Phase,
    store: RecordStore,
    criteria: FilterCriteria,
    search: Option<SearchQuery>,
    in_bounds: bool,
    snapshot: Arc<Snapshot>,
    sync: Synchronizer,
    debouncer: Debouncer,
    queue: VecDeque<Event>,
}

impl Controller {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            sync: Synchronizer::new(config.map.focus_zoom),
            debouncer: Debouncer::new(config.debounce_ms),
            config,
            phase: Phase::Created,
            store: RecordStore::empty(),
            criteria: FilterCriteria::default(),
            search: None,
            in_bounds: false,
            snapshot: Arc::new(Snapshot::default()),
            queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search(&self) -> Option<&SearchQuery> {
        self.search.as_ref()
    }

    pub fn in_bounds(&self) -> bool {
        self.in_bounds
    }

    /// Latest recompute result
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn active(&self) -> Option<&RecordKey> {
        self.sync.active()
    }

    /// Ticket for the grouping currently on screen
    pub fn ticket(&self) -> Ticket {
        self.sync.ticket()
    }

    /// Due time of a pending viewport recompute
    pub fn pending_viewport(&self) -> Option<u64> {
        self.debouncer.pending()
    }

    /// Bring up the map, load the data set and render it.
    ///
    /// Never fails: a map that does not become ready leaves the controller
    /// [`Phase::Degraded`], an empty or failed load leaves it
    /// [`Phase::NoData`]. Either way the user is told and loading ends.
    pub fn start<M, V, F>(&mut self, map: &mut M, view: &mut V, load: F) -> Startup
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
        F: FnOnce() -> LoadOutcome,
    {
        view.set_loading(true);

        if let Err(err) = map.ready() {
            warn!(error = %err, "map initialization failed");
            view.set_loading(false);
            self.notify(view, MSG_INIT_FAILED);
            self.phase = Phase::Degraded;
            return Startup::Degraded {
                reason: err.to_string(),
            };
        }
        map.create_map(self.config.map.center, self.config.map.initial_zoom);

        let outcome = load();
        let failed = outcome.failure.is_some();
        if failed {
            self.notify(view, MSG_LOAD_FAILED);
        }
        let rejected = outcome.report.as_ref().map_or(0, |r| r.rejected.len());
        self.store = outcome.store;

        if self.store.is_empty() {
            view.set_loading(false);
            view.render_empty(EmptyState::NoData);
            self.phase = Phase::NoData;
            info!(failed, "no records to show");
            return Startup::NoData { failed };
        }

        self.phase = Phase::Ready;
        self.recompute(map, view, true);
        view.set_loading(false);
        info!(records = self.store.len(), rejected, "viewer ready");

        Startup::Ready {
            records: self.store.len(),
            rejected,
        }
    }

    /// [`Controller::start`] with the data set read from `path`
    pub fn start_from_path<M, V>(&mut self, map: &mut M, view: &mut V, path: &Path) -> Startup
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.start(map, view, || RecordStore::load_or_empty(path))
    }

    /// Queue an event for the next [`Controller::run_pending`]
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Handle every queued event in order
    pub fn run_pending<M, V>(&mut self, map: &mut M, view: &mut V) -> Vec<EventOutcome>
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop_front() {
            outcomes.push(self.dispatch(event, map, view));
        }
        outcomes
    }

    fn dispatch<M, V>(&mut self, event: Event, map: &mut M, view: &mut V) -> EventOutcome
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        if self.phase != Phase::Ready {
            debug!(event = event.name(), phase = ?self.phase, "event ignored");
            return EventOutcome::Ignored { phase: self.phase };
        }
        debug!(event = event.name(), "dispatch");

        match event {
            Event::FilterApplied { filter } => self.apply_filter(&filter, map, view),
            Event::FilterReset => self.reset_filter(map, view),
            Event::SearchSubmitted { keyword } => self.submit_search(&keyword, map, view),
            Event::InBoundsToggled { on } => {
                self.set_in_bounds(on);
                EventOutcome::Recomputed(self.recompute(map, view, false))
            }
            Event::ViewportChanged { at_ms } => EventOutcome::Scheduled {
                due_ms: self.debouncer.schedule(at_ms),
            },
            Event::Tick { now_ms } => self.tick(now_ms, map, view),
            Event::MarkerClicked {
                address,
                generation,
            } => {
                let ticket = generation.map_or_else(|| self.sync.ticket(), Ticket::at);
                let activation = self.sync.activate_by_address_at(ticket, &address, map, view);
                EventOutcome::Activated { activation }
            }
            Event::ListRowClicked {
                id,
                unit,
                generation,
            } => {
                let ticket = generation.map_or_else(|| self.sync.ticket(), Ticket::at);
                let key = RecordKey::new(id, unit);
                let activation = self.sync.activate_by_key_at(ticket, &key, map, view);
                EventOutcome::Activated { activation }
            }
            Event::MapClicked => {
                self.sync.close_info_window(map);
                EventOutcome::InfoWindowClosed
            }
        }
    }

    /// Filter form submit: the search box is cleared
    fn apply_filter<M, V>(&mut self, input: &FilterInput, map: &mut M, view: &mut V) -> EventOutcome
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.criteria = input.to_criteria(&self.config.filter);
        self.search = None;
        EventOutcome::Recomputed(self.recompute(map, view, true))
    }

    /// Back to the initial view: no criteria, no search, viewport filter off
    fn reset_filter<M, V>(&mut self, map: &mut M, view: &mut V) -> EventOutcome
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.criteria = FilterCriteria::default();
        self.search = None;
        self.set_in_bounds(false);
        EventOutcome::Recomputed(self.recompute(map, view, true))
    }

    /// A pending viewport recompute has nothing to do once the mode is off
    fn set_in_bounds(&mut self, on: bool) {
        self.in_bounds = on;
        if !on {
            self.debouncer.cancel();
        }
    }

    fn submit_search<M, V>(&mut self, keyword: &str, map: &mut M, view: &mut V) -> EventOutcome
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.search = SearchQuery::parse(keyword);
        if self.search.is_none() {
            return EventOutcome::Recomputed(self.recompute(map, view, true));
        }

        let summary = self.recompute(map, view, false);
        let results = summary.rows;
        if results == 0 {
            self.notify(view, MSG_NO_SEARCH_RESULTS);
        } else {
            self.notify(view, format!("{results}건의 검색 결과"));
            let first = self.snapshot.display().first().and_then(|r| r.position());
            if let Some(position) = first {
                map.pan_to(position, Some(self.config.map.search_zoom));
            }
        }

        EventOutcome::Searched { summary, results }
    }

    fn tick<M, V>(&mut self, now_ms: u64, map: &mut M, view: &mut V) -> EventOutcome
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        if !self.debouncer.fire(now_ms) {
            return EventOutcome::Idle;
        }
        if !self.in_bounds {
            return EventOutcome::Skipped;
        }
        EventOutcome::Recomputed(self.recompute(map, view, false))
    }

    /// Build a new snapshot from the current state, swap it in and redraw
    fn recompute<M, V>(&mut self, map: &mut M, view: &mut V, fit: bool) -> RecomputeSummary
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        let start = Instant::now();
        let bounds = if self.in_bounds {
            map.current_bounds()
        } else {
            None
        };

        let snapshot = Snapshot::compute(
            &self.store,
            &self.criteria,
            self.search.as_ref(),
            self.in_bounds,
            bounds,
        );
        let ticket = self.sync.rebuild(snapshot.grouping());
        let snapshot = Arc::new(snapshot.with_generation(ticket.generation()));

        map.close_info_window();
        render_markers(map, snapshot.markers());
        render_list(view, snapshot.rows());

        let fitted = fit && !self.in_bounds && !snapshot.markers().is_empty();
        if fitted {
            let positions: Vec<_> = snapshot.markers().iter().map(|m| m.position).collect();
            map.fit_to(&positions);
        }

        let summary = RecomputeSummary {
            generation: ticket.generation(),
            rows: snapshot.rows().len(),
            markers: snapshot.markers().len(),
            fitted,
        };
        self.snapshot = snapshot;
        trace_time!(start, "recompute", rows = summary.rows, markers = summary.markers);
        summary
    }

    fn notify<V: ViewLayer + ?Sized>(&self, view: &mut V, message: impl Into<String>) {
        view.notify(Notification::new(message, &self.config.notification));
    }

    /// Activate outside the event queue (CLI `show`)
    pub fn activate_by_key<M, V>(&mut self, key: &RecordKey, map: &mut M, view: &mut V) -> Activation
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.sync.activate_by_key(key, map, view)
    }

    /// Activate outside the event queue (CLI `marker`)
    pub fn activate_by_address<M, V>(&mut self, address: &str, map: &mut M, view: &mut V) -> Activation
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.sync.activate_by_address(address, map, view)
    }
}
