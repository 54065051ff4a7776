//! Reverse lookups over one grouping pass

use std::collections::HashMap;
use std::sync::Arc;

use crate::group::{AddressGroup, Grouping};
use crate::record::RecordKey;

/// Address and record-key lookups into a [`Grouping`].
///
/// Built whole from a grouping and never mutated afterwards; a regroup
/// produces a new index that replaces this one.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    generation: u64,
    grouping: Arc<Grouping>,
    by_address: HashMap<String, usize>,
    by_key: HashMap<RecordKey, usize>,
}

impl ReverseIndex {
    pub fn build(grouping: Arc<Grouping>, generation: u64) -> Self {
        let mut by_address = HashMap::with_capacity(grouping.len());
        let mut by_key = HashMap::with_capacity(grouping.record_count());

        for (position, group) in grouping.iter().enumerate() {
            by_address.insert(group.address().to_string(), position);
            for member in group.members() {
                by_key.insert(member.key(), position);
            }
        }

        Self {
            generation,
            grouping,
            by_address,
            by_key,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grouping(&self) -> &Grouping {
        &self.grouping
    }

    pub fn group_for_address(&self, address: &str) -> Option<&AddressGroup> {
        let position = *self.by_address.get(address)?;
        self.grouping.groups().get(position)
    }

    pub fn group_for_key(&self, key: &RecordKey) -> Option<&AddressGroup> {
        let position = *self.by_key.get(key)?;
        self.grouping.groups().get(position)
    }

    pub fn contains_key(&self, key: &RecordKey) -> bool {
        self.by_key.contains_key(key)
    }
}
