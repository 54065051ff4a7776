//! Human-readable output formatting for list command

use crate::cli::Cli;
use rentmap_core::provider::EmptyState;
use rentmap_core::render::ListRow;

/// Output in human-readable format
pub fn output_human(cli: &Cli, rows: &[ListRow]) {
    if rows.is_empty() {
        if !cli.quiet {
            println!("No listings found");
            println!("{}", EmptyState::NoResults.hint());
        }
        return;
    }

    for row in rows {
        println!("{}", format_row(row));
    }

    if !cli.quiet {
        println!();
        println!("{}건", rows.len());
    }
}

/// Two lines per row, mirroring the list card
pub(crate) fn format_row(row: &ListRow) -> String {
    let mark = if row.highlighted { "*" } else { " " };
    let gender = row
        .gender
        .as_deref()
        .map(|g| format!(" [{g}]"))
        .unwrap_or_default();
    let structure = row.structure.as_deref().unwrap_or("-");

    format!(
        "{mark} {} {}호{gender}  {}\n    {}  {}  {}  보증금 {}만 / 월 {}만",
        row.property_id,
        row.unit,
        row.address,
        if row.district.is_empty() { "-" } else { row.district.as_str() },
        row.area_label,
        structure,
        row.deposit_label,
        row.rent_label,
    )
}
