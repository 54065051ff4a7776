//! `rentmap show` command - activate a listing as a list-row click would
//!
//! Pans to the listing's address, opens the info window with every unit
//! there, and marks the row active. A listing whose address has no
//! coordinate only gets the row.

use crate::cli::ViewArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::session::Session;
use crate::output_by_format_result;
use rentmap_core::error::{RentmapError, Result};
use rentmap_core::record::RecordKey;
use rentmap_core::records::escape_quotes;
use rentmap_core::sync::Activation;

/// Execute the show command
pub fn execute(ctx: &CommandContext, id: &str, unit: &str, view: &ViewArgs) -> Result<()> {
    let mut session = ctx.open_view(view)?;
    let key = RecordKey::new(id, unit);

    let activation = session.activate_by_key(&key);
    if !activation.is_resolved() {
        return Err(RentmapError::not_found("listing", &key));
    }
    output_activation(ctx, &session, &activation)
}

/// Print an activation and what it put on the map
pub(crate) fn output_activation(
    ctx: &CommandContext,
    session: &Session,
    activation: &Activation,
) -> Result<()> {
    let map = session.map();
    let window = map.info_window();

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "activation": activation,
                "infoWindow": window,
                "map": {
                    "center": map.center(),
                    "zoom": map.zoom(),
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            let active = activation.key();
            match window {
                Some(content) => {
                    println!("{}  {}  ({}호실)", content.title, content.address, content.unit_count);
                    for unit in &content.units {
                        let mark = if Some(&unit.key) == active { ">" } else { " " };
                        println!(
                            "{mark}   {}호  {}  {}  {}  보증금 {}만 / 월 {}만",
                            unit.unit,
                            unit.area_label,
                            unit.structure.as_deref().unwrap_or("-"),
                            unit.gender.as_deref().unwrap_or("-"),
                            unit.deposit_label,
                            unit.rent_label
                        );
                    }
                }
                None => {
                    if let Some(row) = session.view().rows().iter().find(|r| Some(&r.key) == active) {
                        println!("{} {}호  {}", row.property_id, row.unit, row.address);
                    }
                    if !ctx.cli.quiet {
                        println!("(no coordinate, list row only)");
                    }
                }
            }
            if window.is_some() && !ctx.cli.quiet {
                if let (Some(center), Some(zoom)) = (map.center(), map.zoom()) {
                    println!("map: {center} zoom {zoom}");
                }
            }
        },
        records => {
            output_activation_records(session, activation);
        }
    )
}

fn output_activation_records(session: &Session, activation: &Activation) {
    let map = session.map();
    let (outcome, key, address) = match activation {
        Activation::Focused { key, address } => ("focused", key.to_string(), address.as_str()),
        Activation::RowOnly { key, address } => ("row_only", key.to_string(), address.as_str()),
        Activation::Unresolved => ("unresolved", "-".to_string(), ""),
        Activation::Stale { .. } => ("stale", "-".to_string(), ""),
    };
    let center = map
        .center()
        .filter(|_| map.info_window().is_some())
        .map_or_else(|| "-".to_string(), |c| c.to_string());
    println!(
        "A {} {} \"{}\" center={} zoom={}",
        outcome,
        key,
        escape_quotes(address),
        center,
        map.zoom().map_or_else(|| "-".to_string(), |z| z.to_string())
    );
    if let Some(window) = map.info_window() {
        for unit in &window.units {
            println!(
                "U {} {} area={} deposit={} rent={}",
                unit.key,
                unit.unit,
                unit.area_label,
                unit.deposit_label,
                unit.rent_label
            );
        }
    }
}
