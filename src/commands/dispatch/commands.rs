//! Command implementations for all rentmap commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{facets, groups, list, marker, replay, show};
use rentmap_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::List(view) => list::execute(ctx, view),
            Commands::Groups(view) => groups::execute(ctx, view),
            Commands::Facets => facets::execute(ctx),
            Commands::Show { id, unit, view } => show::execute(ctx, id, unit, view),
            Commands::Marker { address, view } => marker::execute(ctx, address, view),
            Commands::Replay { script } => replay::execute(ctx, script),
        }
    }
}
