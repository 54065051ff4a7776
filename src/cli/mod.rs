//! CLI argument parsing for rentmap
//!
//! Global flags: --data, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{FilterArgs, ViewArgs};
pub use rentmap_core::format::OutputFormat;

use parse::parse_format;

/// Rentmap - rental listing viewer
#[derive(Parser, Debug)]
#[command(name = "rentmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Listing data file (JSON array of records)
    #[arg(long, global = true, env = "RENTMAP_DATA")]
    pub data: Option<PathBuf>,

    /// Viewer configuration file (default: rentmap.toml next to the data)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or filter directives
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List listings after filters, viewport and search
    List(ViewArgs),

    /// List address groups (one map marker each)
    Groups(ViewArgs),

    /// Show the distinct values offered by the filter selects
    Facets,

    /// Activate a listing by id and unit, as a list-row click would
    Show {
        /// Record id
        id: String,

        /// Unit designator
        unit: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Activate an address group, as a marker click would
    Marker {
        /// Exact address string
        address: String,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Feed an event script through the viewer and print what it did
    Replay {
        /// JSON array of events
        script: PathBuf,
    },
}
