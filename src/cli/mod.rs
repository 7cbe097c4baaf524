//! CLI argument parsing for netpath
//!
//! Supports global flags: --store, --format, --quiet, --verbose

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{PathArgs, SaveArgs, ServeArgs};
pub use netpath_core::format::OutputFormat;
use parse::parse_format;

/// Netpath - design weighted networks and query shortest paths
#[derive(Parser, Debug)]
#[command(name = "netpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding saved networks
    #[arg(long, global = true, env = "NETPATH_STORE")]
    pub store: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `info`, `netpath_core=trace`)
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
    /// Validate a network and save it under a name
    Save(SaveArgs),

    /// Print a saved network
    Load {
        /// Network name
        name: String,
    },

    /// List saved networks
    List,

    /// Find the shortest path between two nodes
    Path(PathArgs),

    /// Serve the HTTP API
    Serve(ServeArgs),
}
