//! Netpath Core Library
//!
//! Core domain logic for netpath: network validation, adjacency
//! construction, Dijkstra shortest-path search and named network storage.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod query;
pub mod store;
