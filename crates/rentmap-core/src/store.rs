//! Record store: the full, immutable listing set
//!
//! Loaded once at startup. A missing or unparseable data file is not fatal:
//! [`RecordStore::load_or_empty`] falls back to an empty store and hands the
//! failure back so the shell can tell the user.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{RentmapError, Result};
use crate::record::{PropertyRecord, RawRecord, RecordKey};
use crate::trace_time;

/// A data-file element that was rejected during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the element in the data file array
    pub index: usize,
    pub reason: String,
}

impl From<&RejectedRecord> for RentmapError {
    fn from(r: &RejectedRecord) -> Self {
        RentmapError::InvalidRecord {
            index: r.index,
            reason: r.reason.clone(),
        }
    }
}

/// Summary of a data load
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: Vec<RejectedRecord>,
    pub loaded_at: DateTime<Utc>,
}

/// Result of a load that never fails
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: RecordStore,
    /// `None` when the data file was read and parsed
    pub failure: Option<RentmapError>,
    pub report: Option<LoadReport>,
}

/// Holds the full record set; cloning shares the records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<[PropertyRecord]>,
}

impl RecordStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Read and validate a JSON data file
    pub fn load(path: &Path) -> Result<(Self, LoadReport)> {
        let start = Instant::now();
        let content =
            fs::read_to_string(path).map_err(|e| RentmapError::data_load(path, e))?;
        let (store, report) = Self::parse(&content).map_err(|e| match e {
            RentmapError::Json(err) => RentmapError::data_load(path, err),
            other => other,
        })?;
        trace_time!(start, "load_records", accepted = report.accepted);
        Ok((store, report))
    }

    /// Like [`RecordStore::load`], but a failure yields an empty store
    pub fn load_or_empty(path: &Path) -> LoadOutcome {
        match Self::load(path) {
            Ok((store, report)) => LoadOutcome {
                store,
                failure: None,
                report: Some(report),
            },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "data load failed");
                LoadOutcome {
                    store: Self::empty(),
                    failure: Some(err),
                    report: None,
                }
            }
        }
    }

    /// Parse data-file text. Elements that fail validation are skipped and
    /// reported; only a non-array document is an error.
    pub fn parse(content: &str) -> Result<(Self, LoadReport)> {
        let elements: Vec<serde_json::Value> = serde_json::from_str(content)?;

        let mut records = Vec::with_capacity(elements.len());
        let mut rejected = Vec::new();
        let mut seen: HashSet<RecordKey> = HashSet::with_capacity(elements.len());

        for (index, element) in elements.into_iter().enumerate() {
            let validated = serde_json::from_value::<RawRecord>(element)
                .map_err(|e| e.to_string())
                .and_then(RawRecord::validate);

            match validated {
                Ok(record) => {
                    if seen.insert(record.key()) {
                        records.push(record);
                    } else {
                        rejected.push(RejectedRecord {
                            index,
                            reason: format!("duplicate key {}", record.key()),
                        });
                    }
                }
                Err(reason) => rejected.push(RejectedRecord { index, reason }),
            }
        }

        for r in &rejected {
            debug!(index = r.index, reason = %r.reason, "rejected record");
        }
        if !rejected.is_empty() {
            warn!(count = rejected.len(), "some records were rejected");
        }

        let report = LoadReport {
            accepted: records.len(),
            rejected,
            loaded_at: Utc::now(),
        };
        Ok((Self::from_records(records), report))
    }

    pub fn all(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &RecordKey) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.has_key(key))
    }

    /// Distinct districts, sorted (select options)
    pub fn districts(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| Some(r.district.as_str())))
    }

    /// Distinct non-empty structures, sorted
    pub fn structures(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.structure.as_deref()))
    }

    /// Distinct non-empty genders, sorted
    pub fn genders(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.gender.as_deref()))
    }

    /// Distinct non-empty supply types, sorted
    pub fn supply_types(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.supply_type.as_deref()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
