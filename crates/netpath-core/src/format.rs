//! Output format handling for netpath
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON matching the HTTP API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetpathError;
use crate::graph::types::{Network, ShortestPath};

/// Output format for netpath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = NetpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(NetpathError::UsageError(format!(
                "unknown format: {} (expected: human or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// `A -> B -> C (distance 3, 2 hops)`
pub fn path_human(result: &ShortestPath) -> String {
    format!(
        "{} (distance {}, {} hop{})",
        result.path.join(" -> "),
        result.total_distance,
        result.hops(),
        if result.hops() == 1 { "" } else { "s" }
    )
}

/// Multi-line summary of a stored network
pub fn network_human(name: &str, network: &Network) -> String {
    let mut out = format!(
        "{}: {} nodes, {} edges\nnodes: {}",
        name,
        network.nodes.len(),
        network.edges.len(),
        network.nodes.join(", ")
    );
    for edge in &network.edges {
        out.push_str(&format!("\n  {} -- {} ({})", edge.from, edge.to, edge.weight));
    }
    out
}
