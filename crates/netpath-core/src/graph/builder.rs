//! Graph construction and input validation
//!
//! Turns a node list and an edge list into an adjacency structure. Nodes
//! are interned to dense indices so the search can use flat tables.
//!
//! Edges are checked in input order and the first violation is reported:
//! missing field, then unknown endpoint, then bad weight. Once every edge
//! passes, the sum of all weights must itself be finite; any simple path
//! then has a finite length.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{NetpathError, Result};
use crate::graph::types::{parse_number, Edge, Network, NodeId, RawEdge, RawNetwork, Weight};

/// One adjacency entry: the node on the other side and the edge weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: usize,
    pub weight: f64,
}

/// Adjacency-list view of a network, built fresh for each query
#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
    total_weight: f64,
}

/// An edge whose endpoints have been resolved to node indices
struct CheckedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl Graph {
    fn with_nodes(nodes: &[NodeId]) -> Result<Self> {
        if nodes.is_empty() {
            return Err(NetpathError::EmptyNetwork);
        }

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.clone(), i).is_some() {
                return Err(NetpathError::DuplicateNode { node: node.clone() });
            }
        }

        Ok(Graph {
            labels: nodes.to_vec(),
            index,
            adjacency: vec![Vec::new(); nodes.len()],
            edge_count: 0,
            total_weight: 0.0,
        })
    }

    /// Validate raw input and build the adjacency structure
    #[tracing::instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn build(nodes: &[NodeId], edges: &[RawEdge]) -> Result<Self> {
        let mut graph = Graph::with_nodes(nodes)?;
        for (i, raw) in edges.iter().enumerate() {
            let edge = graph.check_raw_edge(i, raw)?;
            graph.connect(edge);
        }
        check_total_weight(graph.total_weight)?;
        tracing::debug!(adjacency_entries = graph.edge_count * 2, "graph_built");
        Ok(graph)
    }

    /// Build from an already-typed network.
    ///
    /// Endpoints and weights are still checked: a stored network may have
    /// been edited by hand since it was saved.
    #[tracing::instrument(skip_all, fields(nodes = network.nodes.len(), edges = network.edges.len()))]
    pub fn from_network(network: &Network) -> Result<Self> {
        let mut graph = Graph::with_nodes(&network.nodes)?;
        for (i, edge) in network.edges.iter().enumerate() {
            let from = graph.resolve_endpoint(i, &edge.from)?;
            let to = graph.resolve_endpoint(i, &edge.to)?;
            let weight = check_weight(i, edge.weight.value(), || edge.weight.raw().to_string())?;
            graph.connect(CheckedEdge { from, to, weight });
        }
        check_total_weight(graph.total_weight)?;
        Ok(graph)
    }

    fn check_raw_edge(&self, i: usize, raw: &RawEdge) -> Result<CheckedEdge> {
        let (from, to, weight) = match (&raw.from, &raw.to, &raw.weight) {
            (Some(from), Some(to), Some(weight)) => (from, to, weight),
            (None, _, _) => return Err(malformed(i, "from")),
            (_, None, _) => return Err(malformed(i, "to")),
            (_, _, None) => return Err(malformed(i, "weight")),
        };

        let from = self.resolve_endpoint(i, from)?;
        let to = self.resolve_endpoint(i, to)?;
        let weight = parse_weight(i, weight)?;

        Ok(CheckedEdge { from, to, weight })
    }

    fn resolve_endpoint(&self, i: usize, node: &str) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| NetpathError::DanglingEdgeReference {
                index: i,
                node: node.to_string(),
            })
    }

    /// Insert an edge in both directions. Self-loops land twice in the
    /// same list, which the search tolerates.
    fn connect(&mut self, edge: CheckedEdge) {
        self.adjacency[edge.from].push(Neighbor {
            node: edge.to,
            weight: edge.weight,
        });
        self.adjacency[edge.to].push(Neighbor {
            node: edge.from,
            weight: edge.weight,
        });
        self.edge_count += 1;
        self.total_weight += edge.weight;
    }

    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, node: usize) -> &str {
        &self.labels[node]
    }

    pub fn neighbors(&self, node: usize) -> &[Neighbor] {
        &self.adjacency[node]
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl Network {
    /// Validate raw input into a network ready to be stored
    pub fn from_raw(raw: &RawNetwork) -> Result<Self> {
        let graph = Graph::with_nodes(&raw.nodes)?;
        let mut edges = Vec::with_capacity(raw.edges.len());
        let mut total_weight = 0.0;
        for (i, edge) in raw.edges.iter().enumerate() {
            let checked = graph.check_raw_edge(i, edge)?;
            total_weight += checked.weight;
            // check_raw_edge has already required the weight to be present
            let weight = Weight::from_json(edge.weight.clone().unwrap_or_default());
            edges.push(Edge {
                from: graph.label(checked.from).to_string(),
                to: graph.label(checked.to).to_string(),
                weight,
            });
        }
        check_total_weight(total_weight)?;

        Ok(Network {
            nodes: raw.nodes.clone(),
            edges,
        })
    }
}

fn malformed(index: usize, field: &'static str) -> NetpathError {
    NetpathError::MalformedEdge { index, field }
}

/// Accept JSON numbers and numeric strings
fn parse_weight(index: usize, value: &Value) -> Result<f64> {
    match parse_number(value) {
        Some(weight) => check_weight(index, weight, || value.to_string()),
        None => Err(NetpathError::InvalidWeight {
            index,
            value: value.to_string(),
        }),
    }
}

fn check_total_weight(total: f64) -> Result<()> {
    if total.is_finite() {
        Ok(())
    } else {
        Err(NetpathError::WeightOverflow)
    }
}

fn check_weight(index: usize, weight: f64, display: impl FnOnce() -> String) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(NetpathError::InvalidWeight {
            index,
            value: display(),
        })
    }
}
