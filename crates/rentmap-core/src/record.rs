//! Rental unit records and their load-time schema
//!
//! The data file is a JSON array of flat objects with camelCase keys. Each
//! element is deserialized into [`RawRecord`] and validated into a
//! [`PropertyRecord`]; elements that fail are rejected with a reason instead
//! of flowing through the filters with missing fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::viewport::LatLng;

/// Stable identity of a record: `(id, unit)` is unique across the data set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub id: String,
    pub unit: String,
}

impl RecordKey {
    pub fn new(id: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id, self.unit)
    }
}

/// One rental unit listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    /// Display code (building name in the source listing)
    pub property_id: String,
    pub unit: String,
    /// Grouping key, compared by exact string equality
    pub address: String,
    pub district: String,
    pub structure: Option<String>,
    /// `None` or empty means the unit has no gender restriction
    pub gender: Option<String>,
    pub supply_type: Option<String>,
    /// Exclusive area in m²
    pub exclusive_area: Option<f64>,
    /// Deposit in won
    pub deposit: Option<f64>,
    /// Monthly rent in won
    pub monthly_rent: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl PropertyRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.id, &self.unit)
    }

    pub fn has_key(&self, key: &RecordKey) -> bool {
        self.id == key.id && self.unit == key.unit
    }

    /// Map position, if the record can be placed on the map.
    ///
    /// Both coordinates must be present, finite and non-zero.
    pub fn position(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng))
                if lat.is_finite() && lng.is_finite() && lat != 0.0 && lng != 0.0 =>
            {
                Some(LatLng::new(lat, lng))
            }
            _ => None,
        }
    }

    pub fn is_gender_unrestricted(&self) -> bool {
        self.gender.as_deref().is_none_or(str::is_empty)
    }
}

/// Record id as it appears in the file: the source tool writes integers,
/// hand-edited files sometimes use strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Int(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

/// Loosely-typed record shape as stored in the data file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub id: Option<RawId>,
    pub property_id: Option<String>,
    pub unit: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub structure: Option<String>,
    pub gender: Option<String>,
    pub supply_type: Option<String>,
    pub exclusive_area: Option<f64>,
    pub deposit: Option<f64>,
    pub monthly_rent: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

fn required(field: &'static str, value: Option<String>) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(format!("empty {field}")),
        None => Err(format!("missing {field}")),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RawRecord {
    /// Validate into a [`PropertyRecord`], returning the reason on failure
    pub fn validate(self) -> Result<PropertyRecord, String> {
        let id = self
            .id
            .map(RawId::into_string)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "missing id".to_string())?;

        for (name, value) in [
            ("exclusiveArea", self.exclusive_area),
            ("deposit", self.deposit),
            ("monthlyRent", self.monthly_rent),
        ] {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                return Err(format!("invalid {name}"));
            }
        }

        Ok(PropertyRecord {
            id,
            property_id: required("propertyId", self.property_id)?,
            unit: required("unit", self.unit)?,
            address: required("address", self.address)?,
            district: self.district.unwrap_or_default(),
            structure: non_empty(self.structure),
            gender: self.gender,
            supply_type: non_empty(self.supply_type),
            exclusive_area: self.exclusive_area,
            deposit: self.deposit,
            monthly_rent: self.monthly_rent,
            lat: self.lat,
            lng: self.lng,
        })
    }
}
