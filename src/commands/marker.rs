//! `rentmap marker` command - activate an address as a marker click would

use crate::cli::ViewArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::show::output_activation;
use rentmap_core::error::{RentmapError, Result};

/// Execute the marker command
pub fn execute(ctx: &CommandContext, address: &str, view: &ViewArgs) -> Result<()> {
    let mut session = ctx.open_view(view)?;

    let activation = session.activate_by_address(address);
    if !activation.is_resolved() {
        return Err(RentmapError::not_found("address", address));
    }
    output_activation(ctx, &session, &activation)
}
