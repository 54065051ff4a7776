//! Immutable result of one recompute

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::group::{group_by_address, Grouping};
use crate::query::{apply_attribute_filters, FilterCriteria};
use crate::record::PropertyRecord;
use crate::render::{list_rows, marker_specs, ListRow, MarkerSpec};
use crate::search::{apply_search, SearchQuery};
use crate::store::RecordStore;
use crate::trace_time;
use crate::viewport::{filter_in_bounds, Bounds};

/// Filtered, grouped and rendered state for one generation
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    generation: u64,
    criteria: FilterCriteria,
    search: Option<SearchQuery>,
    in_bounds: bool,
    bounds: Option<Bounds>,
    attribute_count: usize,
    display: Vec<PropertyRecord>,
    grouping: Arc<Grouping>,
    rows: Vec<ListRow>,
    markers: Vec<MarkerSpec>,
}

impl Snapshot {
    /// Run the pipeline: attribute filters, then viewport containment when
    /// `in_bounds` is on, then search.
    ///
    /// With `in_bounds` on but no `bounds` reported yet, containment is
    /// skipped.
    pub fn compute(
        store: &RecordStore,
        criteria: &FilterCriteria,
        search: Option<&SearchQuery>,
        in_bounds: bool,
        bounds: Option<Bounds>,
    ) -> Self {
        let start = Instant::now();

        let attribute = apply_attribute_filters(store.all(), criteria);
        let attribute_count = attribute.len();

        let contained = match (in_bounds, bounds.as_ref()) {
            (true, Some(b)) => filter_in_bounds(attribute, b),
            (true, None) => {
                debug!("map bounds unknown, viewport filter skipped");
                attribute
            }
            (false, _) => attribute,
        };

        let visible: Vec<PropertyRecord> = apply_search(contained, search)
            .into_iter()
            .cloned()
            .collect();
        let grouping = group_by_address(&visible);
        let rows = list_rows(&visible, search);
        let markers = marker_specs(&grouping);
        let shown = visible.len();
        let groups = grouping.len();

        trace_time!(
            start,
            "compute_snapshot",
            attribute = attribute_count,
            shown = shown,
            groups = groups
        );

        Self {
            generation: 0,
            criteria: criteria.clone(),
            search: search.cloned(),
            in_bounds,
            bounds: bounds.filter(|_| in_bounds),
            attribute_count,
            display: visible,
            grouping: Arc::new(grouping),
            rows,
            markers,
        }
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Grouping generation this snapshot was indexed under
    pub fn generation(&self) -> u64 {
        self.generation
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

    /// Bounds applied by the viewport filter, if it ran
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Records passing the attribute filters alone
    pub fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    /// Records shown in the list, in display order
    pub fn display(&self) -> &[PropertyRecord] {
        &self.display
    }

    pub fn grouping(&self) -> Arc<Grouping> {
        Arc::clone(&self.grouping)
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }
}
