//! Keyword search over listing records
//!
//! A case-insensitive substring test against the display code, address,
//! district and unit. Search narrows the attribute-filtered set; it never
//! replaces attribute filtering.

use std::fmt;

use crate::record::PropertyRecord;

/// A trimmed, lower-cased, non-empty search keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
}

impl SearchQuery {
    /// Parse raw input; blank input means no search is active
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            keyword: trimmed.to_lowercase(),
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        [
            record.property_id.as_str(),
            record.address.as_str(),
            record.district.as_str(),
            record.unit.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.keyword))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keyword)
    }
}

/// Test a record against raw keyword input
pub fn matches(record: &PropertyRecord, keyword: &str) -> bool {
    SearchQuery::parse(keyword).is_some_and(|q| q.matches(record))
}

/// Narrow `records` by `query`; `None` keeps everything
pub fn apply_search<'a, I>(records: I, query: Option<&SearchQuery>) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    match query {
        None => records.into_iter().collect(),
        Some(q) => records.into_iter().filter(|r| q.matches(r)).collect(),
    }
}
