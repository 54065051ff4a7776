//! `rentmap groups` command - address groups, one map marker each

use crate::cli::{Cli, ViewArgs};
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use rentmap_core::error::Result;
use rentmap_core::group::{AddressGroup, Grouping};
use rentmap_core::records::format_group_records;
use rentmap_core::render::{InfoWindowContent, MarkerSpec};

/// Execute the groups command
pub fn execute(ctx: &CommandContext, view: &ViewArgs) -> Result<()> {
    let session = ctx.open_view(view)?;
    let snapshot = session.controller().snapshot();
    let grouping = snapshot.grouping();

    output_by_format_result!(ctx.cli.format,
        json => output_json(&grouping),
        human => { output_human(ctx.cli, &grouping) },
        records => { output_records(&grouping) }
    )
}

fn output_json(grouping: &Grouping) -> Result<()> {
    let output: Vec<_> = grouping.iter().map(group_json).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn group_json(group: &AddressGroup) -> serde_json::Value {
    let marker = MarkerSpec::for_group(group);
    serde_json::json!({
        "address": group.address(),
        "unitCount": group.len(),
        "marker": marker.as_ref().map(|m| m.position),
        "title": marker.as_ref().map(|m| m.title.as_str()),
        "units": InfoWindowContent::for_group(group).units,
    })
}

fn output_human(cli: &Cli, grouping: &Grouping) {
    if grouping.is_empty() {
        if !cli.quiet {
            println!("No listings found");
        }
        return;
    }

    for group in grouping {
        let position = group
            .position()
            .map_or_else(|| "(no coordinate)".to_string(), |p| format!("@ {p}"));
        println!("{}  {}호실  {}", group.address(), group.len(), position);
        for unit in InfoWindowContent::for_group(group).units {
            println!(
                "    {}호  {}  {}  보증금 {}만 / 월 {}만",
                unit.unit,
                unit.area_label,
                unit.structure.as_deref().unwrap_or("-"),
                unit.deposit_label,
                unit.rent_label
            );
        }
    }

    if !cli.quiet {
        println!();
        println!(
            "{} addresses, {} markers",
            grouping.len(),
            grouping.placeable().count()
        );
    }
}

fn output_records(grouping: &Grouping) {
    println!(
        "H rentmap=1 records=1 mode=groups groups={} markers={} units={}",
        grouping.len(),
        grouping.placeable().count(),
        grouping.record_count()
    );
    for group in grouping {
        for line in format_group_records(group) {
            println!("{line}");
        }
    }
}
