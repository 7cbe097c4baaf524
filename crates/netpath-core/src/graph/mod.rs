//! Network graphs and shortest-path search
//!
//! - `types`: wire-level records (nodes, edges, networks, results)
//! - `builder`: validation and adjacency construction
//! - `algos`: search algorithms over a built [`Graph`]

pub mod algos;
pub mod builder;
pub mod types;

pub use algos::shortest_path;
pub use builder::{Graph, Neighbor};
pub use types::{Edge, Network, NodeId, RawEdge, RawNetwork, ShortestPath, Weight};
