//! Record filtering utilities
//!
//! A record passes when it satisfies every axis that is set. Unset axes are
//! no-ops, so [`FilterCriteria::default`] keeps every record.
//!
//! Missing fields: a set exact-match axis never matches a missing field, and
//! a missing number fails any bound that is set on its axis.

use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::record::PropertyRecord;

/// Inclusive numeric bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Range {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check a value against the bounds
    pub fn admits(&self, value: Option<f64>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(v) = value else {
            return false;
        };
        self.min.is_none_or(|min| v >= min) && self.max.is_none_or(|max| v <= max)
    }

    /// Intersection of two ranges. The result may be empty (min > max).
    fn intersect(self, other: Range) -> Range {
        Range {
            min: tighter(self.min, other.min, f64::max),
            max: tighter(self.max, other.max, f64::min),
        }
    }
}

fn tighter(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (a, b) => a.or(b),
    }
}

/// Gender axis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum GenderCriterion {
    #[default]
    Any,
    /// Units open to this gender: unrestricted units or an exact match
    Only(String),
    /// Units without a gender restriction
    UnrestrictedOnly,
}

impl GenderCriterion {
    /// Conjunction of two gender criteria.
    ///
    /// Two different genders only share the unrestricted units.
    fn intersect(&self, other: &GenderCriterion) -> GenderCriterion {
        use GenderCriterion::*;
        match (self, other) {
            (Any, g) | (g, Any) => g.clone(),
            (Only(a), Only(b)) if a == b => Only(a.clone()),
            _ => UnrestrictedOnly,
        }
    }

    fn admits(&self, record: &PropertyRecord) -> bool {
        match self {
            GenderCriterion::Any => true,
            GenderCriterion::Only(g) => {
                record.is_gender_unrestricted() || record.gender.as_deref() == Some(g.as_str())
            }
            GenderCriterion::UnrestrictedOnly => record.is_gender_unrestricted(),
        }
    }
}

/// Filter configuration for records, in stored units
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub district: Option<String>,
    pub area: Range,
    pub deposit: Range,
    pub rent: Range,
    pub structure: Option<String>,
    pub gender: GenderCriterion,
    pub supply_type: Option<String>,
}

impl FilterCriteria {
    /// Create a new filter that admits everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the district filter
    pub fn with_district(mut self, district: Option<impl Into<String>>) -> Self {
        self.district = district.map(Into::into);
        self
    }

    /// Set the exclusive-area bounds (m²)
    pub fn with_area(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.area = Range::new(min, max);
        self
    }

    /// Set the deposit bounds (won)
    pub fn with_deposit(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.deposit = Range::new(min, max);
        self
    }

    /// Set the monthly rent bounds (won)
    pub fn with_rent(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.rent = Range::new(min, max);
        self
    }

    /// Set the structure filter
    pub fn with_structure(mut self, structure: Option<impl Into<String>>) -> Self {
        self.structure = structure.map(Into::into);
        self
    }

    /// Set the gender filter
    pub fn with_gender(mut self, gender: GenderCriterion) -> Self {
        self.gender = gender;
        self
    }

    /// Set the supply type filter
    pub fn with_supply_type(mut self, supply_type: Option<impl Into<String>>) -> Self {
        self.supply_type = supply_type.map(Into::into);
        self
    }

    /// True when no axis is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combine two criteria into one that admits exactly the records both
    /// admit. Ranges are intersected.
    ///
    /// Returns `None` when two exact-match axes want different values, since
    /// no record can pass both.
    pub fn merge(&self, other: &FilterCriteria) -> Option<FilterCriteria> {
        Some(FilterCriteria {
            district: both(&self.district, &other.district)?,
            area: self.area.intersect(other.area),
            deposit: self.deposit.intersect(other.deposit),
            rent: self.rent.intersect(other.rent),
            structure: both(&self.structure, &other.structure)?,
            gender: self.gender.intersect(&other.gender),
            supply_type: both(&self.supply_type, &other.supply_type)?,
        })
    }

    /// Check if a record matches all configured filters
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.matches_district(record)
            && self.area.admits(record.exclusive_area)
            && self.deposit.admits(record.deposit)
            && self.rent.admits(record.monthly_rent)
            && self.matches_structure(record)
            && self.gender.admits(record)
            && self.matches_supply_type(record)
    }

    fn matches_district(&self, record: &PropertyRecord) -> bool {
        self.district
            .as_deref()
            .is_none_or(|d| record.district == d)
    }

    fn matches_structure(&self, record: &PropertyRecord) -> bool {
        exact(self.structure.as_deref(), record.structure.as_deref())
    }

    fn matches_supply_type(&self, record: &PropertyRecord) -> bool {
        exact(self.supply_type.as_deref(), record.supply_type.as_deref())
    }
}

/// Conjunction of two exact-match axes; `None` when they conflict
fn both(a: &Option<String>, b: &Option<String>) -> Option<Option<String>> {
    match (a, b) {
        (Some(a), Some(b)) if a != b => None,
        (a, b) => Some(a.clone().or_else(|| b.clone())),
    }
}

fn exact(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual == Some(w),
    }
}

/// Keep the records that satisfy `criteria`, preserving input order
pub fn apply_attribute_filters<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    records
        .into_iter()
        .filter(|r| criteria.matches(r))
        .collect()
}

/// Filter form values as the user entered them.
///
/// Select values are strings where `""` means "any". Deposit and rent are in
/// 만원 (10,000 won); area is in m².
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterInput {
    pub district: String,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub deposit_min: Option<f64>,
    pub deposit_max: Option<f64>,
    pub rent_min: Option<f64>,
    pub rent_max: Option<f64>,
    pub structure: String,
    pub gender: String,
    pub supply_type: String,
}

/// A blank or zero bound means "no bound"
fn bound(value: Option<f64>, scale: f64) -> Option<f64> {
    value
        .filter(|v| v.is_finite() && *v != 0.0)
        .map(|v| v * scale)
}

fn select(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

impl FilterInput {
    /// Convert form values into stored-unit criteria
    pub fn to_criteria(&self, config: &FilterConfig) -> FilterCriteria {
        let gender = match select(&self.gender) {
            None => GenderCriterion::Any,
            Some(g) if g == config.unrestricted_gender => GenderCriterion::UnrestrictedOnly,
            Some(g) => GenderCriterion::Only(g),
        };

        FilterCriteria::new()
            .with_district(select(&self.district))
            .with_area(bound(self.area_min, 1.0), bound(self.area_max, 1.0))
            .with_deposit(
                bound(self.deposit_min, config.price_unit),
                bound(self.deposit_max, config.price_unit),
            )
            .with_rent(
                bound(self.rent_min, config.price_unit),
                bound(self.rent_max, config.price_unit),
            )
            .with_structure(select(&self.structure))
            .with_gender(gender)
            .with_supply_type(select(&self.supply_type))
    }
}
