//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted single-source shortest path

pub mod dijkstra;

pub use dijkstra::shortest_path;
