//! Selection/view synchronizer
//!
//! Keeps one active record and reconciles it between the list row and the
//! map's info window. Lookups go through a [`ReverseIndex`] rebuilt on every
//! regroup; requests carry a [`Ticket`] so one issued against an older
//! grouping is rejected instead of resolved against data that is gone.

mod index;
mod selection;

pub use index::ReverseIndex;
pub use selection::SelectionState;

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::group::{AddressGroup, Grouping};
use crate::provider::{MapProvider, ViewLayer};
use crate::record::RecordKey;
use crate::render::{InfoWindowContent, MarkerSpec};

/// Grouping generation a request was issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ticket(u64);

impl Ticket {
    pub fn at(generation: u64) -> Self {
        Ticket(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Result of an activation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Activation {
    /// Map panned to the group, info window open, row active
    Focused { key: RecordKey, address: String },
    /// The group has no coordinate; only the list row was activated
    RowOnly { key: RecordKey, address: String },
    /// No such key or address in the current grouping; nothing changed
    Unresolved,
    /// Request was issued against an older grouping; nothing changed
    Stale { requested: u64, current: u64 },
}

impl Activation {
    pub fn key(&self) -> Option<&RecordKey> {
        match self {
            Activation::Focused { key, .. } | Activation::RowOnly { key, .. } => Some(key),
            Activation::Unresolved | Activation::Stale { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.key().is_some()
    }
}

#[derive(Debug)]
pub struct Synchronizer {
    index: Arc<ReverseIndex>,
    selection: SelectionState,
    focus_zoom: u8,
}

impl Synchronizer {
    pub fn new(focus_zoom: u8) -> Self {
        Self {
            index: Arc::new(ReverseIndex::default()),
            selection: SelectionState::default(),
            focus_zoom,
        }
    }

    /// Replace the index with one built from `grouping` and drop the selection
    pub fn rebuild(&mut self, grouping: Arc<Grouping>) -> Ticket {
        let generation = self.index.generation() + 1;
        let index = ReverseIndex::build(grouping, generation);
        self.index = Arc::new(index);
        if let Some(previous) = self.selection.clear() {
            debug!(key = %previous, "selection cleared by regroup");
        }
        Ticket(generation)
    }

    /// Ticket for the current grouping
    pub fn ticket(&self) -> Ticket {
        Ticket(self.index.generation())
    }

    pub fn index(&self) -> Arc<ReverseIndex> {
        Arc::clone(&self.index)
    }

    pub fn active(&self) -> Option<&RecordKey> {
        self.selection.active()
    }

    /// Activate a record (list row click)
    pub fn activate_by_key<M, V>(&mut self, key: &RecordKey, map: &mut M, view: &mut V) -> Activation
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.activate_by_key_at(self.ticket(), key, map, view)
    }

    pub fn activate_by_key_at<M, V>(
        &mut self,
        ticket: Ticket,
        key: &RecordKey,
        map: &mut M,
        view: &mut V,
    ) -> Activation
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        if let Some(stale) = self.check_ticket(ticket) {
            return stale;
        }
        let index = Arc::clone(&self.index);
        let Some(group) = index.group_for_key(key) else {
            debug!(key = %key, "activation unresolved");
            return Activation::Unresolved;
        };
        self.focus(group, key.clone(), map, view)
    }

    /// Activate an address group (marker click); the first unit in display
    /// order becomes the active row
    pub fn activate_by_address<M, V>(&mut self, address: &str, map: &mut M, view: &mut V) -> Activation
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        self.activate_by_address_at(self.ticket(), address, map, view)
    }

    pub fn activate_by_address_at<M, V>(
        &mut self,
        ticket: Ticket,
        address: &str,
        map: &mut M,
        view: &mut V,
    ) -> Activation
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        if let Some(stale) = self.check_ticket(ticket) {
            return stale;
        }
        let index = Arc::clone(&self.index);
        let Some((group, first)) = index
            .group_for_address(address)
            .and_then(|g| g.first().map(|r| (g, r.key())))
        else {
            debug!(address, "activation unresolved");
            return Activation::Unresolved;
        };
        self.focus(group, first, map, view)
    }

    /// Map background click
    pub fn close_info_window<M: MapProvider + ?Sized>(&self, map: &mut M) {
        map.close_info_window();
    }

    fn check_ticket(&self, ticket: Ticket) -> Option<Activation> {
        let current = self.index.generation();
        if ticket.0 == current {
            return None;
        }
        debug!(requested = ticket.0, current, "stale activation rejected");
        Some(Activation::Stale {
            requested: ticket.0,
            current,
        })
    }

    fn focus<M, V>(&mut self, group: &AddressGroup, key: RecordKey, map: &mut M, view: &mut V) -> Activation
    where
        M: MapProvider + ?Sized,
        V: ViewLayer + ?Sized,
    {
        let address = group.address().to_string();
        let placed = match MarkerSpec::for_group(group) {
            Some(anchor) => {
                map.pan_to(anchor.position, Some(self.focus_zoom));
                map.show_info_window(&anchor, &InfoWindowContent::for_group(group));
                true
            }
            None => false,
        };

        self.mark_active(key.clone(), view);
        debug!(key = %key, address = %address, placed, "activated");

        if placed {
            Activation::Focused { key, address }
        } else {
            Activation::RowOnly { key, address }
        }
    }

    fn mark_active<V: ViewLayer + ?Sized>(&mut self, key: RecordKey, view: &mut V) {
        if let Some(previous) = self.selection.activate(key.clone()) {
            if previous != key {
                view.set_row_active(&previous, false);
            }
        }
        if !view.set_row_active(&key, true) {
            debug!(key = %key, "active row not on screen");
        }
    }
}
