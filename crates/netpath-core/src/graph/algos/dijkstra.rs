use crate::error::{Endpoint, NetpathError, Result};
use crate::graph::builder::Graph;
use crate::graph::types::ShortestPath;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Frontier entry; wrapped in `Reverse` so `BinaryHeap` pops the lowest
/// accumulated cost first
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: usize,
    pub accumulated_cost: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Costs are finite and non-negative, so total_cmp agrees with <
        self.accumulated_cost.total_cmp(&other.accumulated_cost)
    }
}

/// Best-known distances and predecessors for one search
struct DijkstraState {
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(node_count: usize, source: usize) -> Self {
        let mut dist = vec![f64::INFINITY; node_count];
        dist[source] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            node: source,
            accumulated_cost: 0.0,
        }));
        Self {
            dist,
            prev: vec![None; node_count],
            heap,
        }
    }

    /// Record `cost` for `node` if it beats the current best
    fn relax(&mut self, from: usize, node: usize, cost: f64) {
        if cost < self.dist[node] {
            self.dist[node] = cost;
            self.prev[node] = Some(from);
            self.heap.push(Reverse(HeapEntry {
                node,
                accumulated_cost: cost,
            }));
        }
    }

    /// Walk the predecessor chain from target back to source
    fn reconstruct_path(&self, source: usize, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut current = target;
        while current != source {
            match self.prev[current] {
                Some(p) => {
                    path.push(p);
                    current = p;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Resolve both endpoints, source first
fn resolve_endpoints(graph: &Graph, source: &str, destination: &str) -> Result<(usize, usize)> {
    let src = graph
        .node_index(source)
        .ok_or_else(|| NetpathError::unknown_node(Endpoint::Source, source))?;
    let dst = graph
        .node_index(destination)
        .ok_or_else(|| NetpathError::unknown_node(Endpoint::Destination, destination))?;
    Ok((src, dst))
}

/// Find the minimum-weight path between two nodes.
///
/// Returns `Ok(None)` when the destination is unreachable; that is a normal
/// outcome, not an error. Stale frontier entries are skipped on pop rather
/// than updated in place.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_path(
    graph: &Graph,
    source: &str,
    destination: &str,
) -> Result<Option<ShortestPath>> {
    let (src, dst) = resolve_endpoints(graph, source, destination)?;

    if src == dst {
        return Ok(Some(ShortestPath {
            path: vec![source.to_string()],
            total_distance: 0.0,
        }));
    }

    let mut state = DijkstraState::new(graph.node_count(), src);
    let mut popped = 0usize;

    while let Some(Reverse(HeapEntry {
        node: current,
        accumulated_cost,
    })) = state.heap.pop()
    {
        popped += 1;

        if current == dst {
            break;
        }

        if accumulated_cost > state.dist[current] {
            continue;
        }

        for neighbor in graph.neighbors(current) {
            state.relax(current, neighbor.node, accumulated_cost + neighbor.weight);
        }
    }

    tracing::debug!(popped, remaining = state.heap.len(), "search_finished");

    let total_distance = state.dist[dst];
    if total_distance.is_infinite() {
        return Ok(None);
    }

    let path = state
        .reconstruct_path(src, dst)
        .into_iter()
        .map(|n| graph.label(n).to_string())
        .collect();

    Ok(Some(ShortestPath {
        path,
        total_distance,
    }))
}

#[cfg(test)]
mod tests;
