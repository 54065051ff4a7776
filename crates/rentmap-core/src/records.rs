//! Utilities for records output format
//!
//! One line per item, a leading tag letter, space-separated `key=value`
//! fields and double-quoted free text:
//! - `H` header, `R` list row, `G` address group, `U` group member,
//!   `E` interaction event.

use crate::format::{format_area, format_price};
use crate::group::AddressGroup;
use crate::record::PropertyRecord;

/// Escape double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Format a list-row line
pub fn format_row_record(record: &PropertyRecord, highlighted: bool) -> String {
    let mut line = format!(
        "R {} {} \"{}\" \"{}\" district={} area={} deposit={} rent={} structure={} gender={}",
        record.id,
        record.unit,
        escape_quotes(&record.property_id),
        escape_quotes(&record.address),
        or_dash(Some(&record.district)),
        format_area(record.exclusive_area),
        format_price(record.deposit),
        format_price(record.monthly_rent),
        or_dash(record.structure.as_deref()),
        or_dash(record.gender.as_deref()),
    );
    if highlighted {
        line.push_str(" highlight=1");
    }
    line
}

/// Format a group line followed by one member line per unit
pub fn format_group_records(group: &AddressGroup) -> Vec<String> {
    let marker = group
        .position()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![format!(
        "G \"{}\" units={} marker={}",
        escape_quotes(group.address()),
        group.len(),
        marker
    )];
    lines.extend(
        group
            .members()
            .iter()
            .map(|m| format!("U {} {}", m.id, m.unit)),
    );
    lines
}
