//! Shortest-path query entry point
//!
//! Resolves the network (inline or stored), builds the graph, runs the
//! search and turns an unreachable destination into `NoPathFound`.

use std::time::Instant;

use crate::error::{NetpathError, Result};
use crate::graph::types::{RawNetwork, ShortestPath};
use crate::graph::{shortest_path, Graph};
use crate::store::NetworkStore;
use crate::{bail_usage, trace_time};

/// Where the queried network comes from
#[derive(Debug, Clone)]
pub enum NetworkRef {
    /// Nodes and edges supplied with the request
    Inline(RawNetwork),
    /// Name of a network in the store
    Named(String),
}

/// A request for the shortest path between two nodes
#[derive(Debug, Clone)]
pub struct PathQuery {
    pub network: NetworkRef,
    pub source: String,
    pub destination: String,
}

impl PathQuery {
    pub fn inline(network: RawNetwork, source: impl Into<String>, destination: impl Into<String>) -> Self {
        PathQuery {
            network: NetworkRef::Inline(network),
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn named(name: impl Into<String>, source: impl Into<String>, destination: impl Into<String>) -> Self {
        PathQuery {
            network: NetworkRef::Named(name.into()),
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Run the query. The store is only consulted for named networks.
    #[tracing::instrument(skip(self, store), fields(source = %self.source, destination = %self.destination))]
    pub fn execute(&self, store: &dyn NetworkStore) -> Result<ShortestPath> {
        let start = Instant::now();

        if self.source.is_empty() {
            bail_usage!("missing source node");
        }
        if self.destination.is_empty() {
            bail_usage!("missing destination node");
        }

        let graph = match &self.network {
            NetworkRef::Inline(raw) => Graph::build(&raw.nodes, &raw.edges)?,
            NetworkRef::Named(name) => {
                let network = store.get(name)?;
                Graph::from_network(&network)?
            }
        };
        trace_time!(start, "build_graph");

        let result = shortest_path(&graph, &self.source, &self.destination)?;
        trace_time!(start, "search");

        result.ok_or_else(|| NetpathError::NoPathFound {
            from: self.source.clone(),
            to: self.destination.clone(),
        })
    }
}
