//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::{load_viewer_config, resolve_data_path};
use crate::cli::{Cli, ViewArgs};
use crate::commands::session::Session;
use rentmap_core::config::ViewerConfig;
use rentmap_core::error::{RentmapError, Result};

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Viewer configuration and the resolved data file path
    pub fn resolve(&self) -> Result<(ViewerConfig, PathBuf)> {
        let data = self.cli.data.as_deref();
        let (config, config_dir) = load_viewer_config(self.root, self.cli.config.as_deref(), data)?;
        let data_path = resolve_data_path(self.root, data, &config, &config_dir)?;
        trace_command!(self.cli, self.start, "resolve_paths");
        Ok((config, data_path))
    }

    /// Load the data file strictly and apply `view`
    pub fn open_view(&self, view: &ViewArgs) -> Result<Session> {
        let (config, data_path) = self.resolve()?;
        let mut session = Session::open(config, &data_path)?;
        if !self.cli.quiet {
            for rejected in session.rejected() {
                eprintln!("warning: {}", RentmapError::from(rejected));
            }
        }
        trace_command!(self.cli, self.start, "open_session");
        session.apply(view);
        trace_command!(self.cli, self.start, "apply_view");
        Ok(session)
    }

    pub fn root(&self) -> &Path {
        self.root
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("rentmap {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A rental listing viewer: filter, search and group listings by address.");
        println!();
        println!("Run `rentmap --help` for usage information.");
        Ok(())
    }
}
