//! Address grouping
//!
//! Records sharing an exact address string form one group, which is the
//! unit of marker placement. Addresses are not normalized: "A  St" and
//! "A St" are different groups.

use std::collections::HashMap;

use crate::record::PropertyRecord;
use crate::text::compare_units;
use crate::viewport::LatLng;

/// All records at one address, sorted by unit
#[derive(Debug, Clone, PartialEq)]
pub struct AddressGroup {
    address: String,
    members: Vec<PropertyRecord>,
}

impl AddressGroup {
    fn new(address: String, mut members: Vec<PropertyRecord>) -> Self {
        members.sort_by(|a, b| compare_units(&a.unit, &b.unit));
        Self { address, members }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Members in display order
    pub fn members(&self) -> &[PropertyRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// First member in display order
    pub fn first(&self) -> Option<&PropertyRecord> {
        self.members.first()
    }

    /// Marker position: the first member's coordinate, if it has one
    pub fn position(&self) -> Option<LatLng> {
        self.first().and_then(PropertyRecord::position)
    }
}

/// Result of one grouping pass, groups in first-appearance order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    groups: Vec<AddressGroup>,
}

impl Grouping {
    pub fn groups(&self) -> &[AddressGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, address: &str) -> Option<&AddressGroup> {
        self.groups.iter().find(|g| g.address == address)
    }

    /// Groups that can be drawn as markers
    pub fn placeable(&self) -> impl Iterator<Item = &AddressGroup> {
        self.groups.iter().filter(|g| g.position().is_some())
    }

    /// Total number of records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(AddressGroup::len).sum()
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a AddressGroup;
    type IntoIter = std::slice::Iter<'a, AddressGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition records by exact address
pub fn group_by_address<'a, I>(records: I) -> Grouping
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<&'a str, Vec<PropertyRecord>> = HashMap::new();

    for record in records {
        let bucket = buckets.entry(record.address.as_str()).or_insert_with(|| {
            order.push(record.address.clone());
            Vec::new()
        });
        bucket.push(record.clone());
    }

    let groups = order
        .into_iter()
        .filter_map(|address| {
            let members = buckets.remove(address.as_str())?;
            Some(AddressGroup::new(address, members))
        })
        .collect();

    Grouping { groups }
}
