//! `rentmap list` command - listings after filters, viewport and search
//!
//! Rows come out in display order; rows matching the search keyword carry a
//! highlight flag.

pub mod format;

use crate::cli::{OutputFormat, ViewArgs};
use crate::commands::dispatch::CommandContext;
use rentmap_core::error::Result;

use self::format::{output_human, output_json, output_records};

/// Execute the list command
pub fn execute(ctx: &CommandContext, view: &ViewArgs) -> Result<()> {
    let session = ctx.open_view(view)?;
    let snapshot = session.controller().snapshot();

    match ctx.cli.format {
        OutputFormat::Json => output_json(snapshot.rows())?,
        OutputFormat::Human => output_human(ctx.cli, snapshot.rows()),
        OutputFormat::Records => output_records(session.data_path(), &snapshot),
    }

    Ok(())
}
