//! Output format handling for rentmap
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and LLM context injection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RentmapError;
use crate::text::thousands;

/// Won per display unit (만원)
pub const MANWON: f64 = 10_000.0;

/// Output format for rentmap commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = RentmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(RentmapError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Format a won amount in 만원, floored, with thousands separators.
///
/// A missing amount renders as `-`.
pub fn format_price(won: Option<f64>) -> String {
    match won {
        Some(w) if w.is_finite() && w >= 0.0 => thousands((w / MANWON).floor() as u64),
        _ => "-".to_string(),
    }
}

/// Format an exclusive area in m², dropping a trailing `.0`
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a.is_finite() => {
            if a.fract() == 0.0 {
                format!("{}㎡", a as i64)
            } else {
                format!("{}㎡", a)
            }
        }
        _ => "-".to_string(),
    }
}
