use serde::Serialize;

use crate::record::RecordKey;

/// The single active record across the list and the map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    active: Option<RecordKey>,
}

impl SelectionState {
    pub fn active(&self) -> Option<&RecordKey> {
        self.active.as_ref()
    }

    /// Make `key` the active record, returning the one it replaced
    pub fn activate(&mut self, key: RecordKey) -> Option<RecordKey> {
        self.active.replace(key)
    }

    pub fn clear(&mut self) -> Option<RecordKey> {
        self.active.take()
    }
}
