//! Map coordinates and viewport containment
//!
//! The map provider owns projection and rendering; this module only answers
//! which records fall inside the bounds the provider reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RentmapError;
use crate::record::PropertyRecord;

/// A WGS84 position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Rectangular viewport bounds, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds enclosing every point, `None` for an empty input
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds::new(*first, *first);
        for p in rest {
            bounds.extend(*p);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `point`
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Parses `south,west,north,east`
impl FromStr for Bounds {
    type Err = RentmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| RentmapError::invalid_value("bounds", s))?;

        match parts.as_slice() {
            [south, west, north, east]
                if parts.iter().all(|v| v.is_finite()) && south <= north && west <= east =>
            {
                Ok(Bounds::new(
                    LatLng::new(*south, *west),
                    LatLng::new(*north, *east),
                ))
            }
            _ => Err(RentmapError::invalid_value("bounds", s)),
        }
    }
}

/// Keep records whose coordinate lies inside `bounds`.
///
/// Records without a coordinate never pass.
pub fn filter_in_bounds<'a, I>(records: I, bounds: &Bounds) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    records
        .into_iter()
        .filter(|r| r.position().is_some_and(|p| bounds.contains(p)))
        .collect()
}
