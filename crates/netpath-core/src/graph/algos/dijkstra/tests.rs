use super::*;
use crate::graph::types::{NodeId, RawEdge};

fn graph(nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let nodes: Vec<NodeId> = nodes.iter().map(|s| s.to_string()).collect();
    let edges: Vec<RawEdge> = edges
        .iter()
        .map(|(from, to, weight)| RawEdge {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            weight: Some(serde_json::Value::from(*weight)),
        })
        .collect();
    Graph::build(&nodes, &edges).unwrap()
}

fn distance(g: &Graph, from: &str, to: &str) -> Option<f64> {
    shortest_path(g, from, to)
        .unwrap()
        .map(|result| result.total_distance)
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node: 0,
        accumulated_cost: 1.0,
    };
    let entry2 = HeapEntry {
        node: 1,
        accumulated_cost: 2.0,
    };
    let entry3 = HeapEntry {
        node: 2,
        accumulated_cost: 1.0,
    };

    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);
    assert_eq!(entry1.cmp(&entry3), Ordering::Equal);

    // Reverse turns the max-heap into a min-heap
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry2));
    heap.push(Reverse(entry1));
    assert_eq!(heap.pop().map(|Reverse(e)| e.node), Some(0));
}

#[test]
fn test_linear_path() {
    let g = graph(&["A", "B", "C"], &[("A", "B", 1.0), ("B", "C", 2.0)]);
    let result = shortest_path(&g, "A", "C").unwrap().unwrap();

    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.total_distance, 3.0);
}

#[test]
fn test_isolated_destination_has_no_path() {
    let g = graph(&["A", "B", "C"], &[("A", "B", 1.0)]);
    assert!(shortest_path(&g, "A", "C").unwrap().is_none());
}

#[test]
fn test_cheaper_parallel_edge_wins() {
    let g = graph(&["A", "B"], &[("A", "B", 5.0), ("A", "B", 2.0)]);
    let result = shortest_path(&g, "A", "B").unwrap().unwrap();

    assert_eq!(result.path, vec!["A", "B"]);
    assert_eq!(result.total_distance, 2.0);
}

#[test]
fn test_source_equals_destination() {
    let g = graph(&["A"], &[]);
    let result = shortest_path(&g, "A", "A").unwrap().unwrap();

    assert_eq!(result.path, vec!["A"]);
    assert_eq!(result.total_distance, 0.0);
    assert_eq!(result.hops(), 0);
}

#[test]
fn test_unknown_source_reported_before_destination() {
    let g = graph(&["A", "B"], &[("A", "B", 1.0)]);

    match shortest_path(&g, "X", "Y").unwrap_err() {
        NetpathError::UnknownNode { role, node } => {
            assert_eq!(role, Endpoint::Source);
            assert_eq!(node, "X");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    match shortest_path(&g, "A", "Y").unwrap_err() {
        NetpathError::UnknownNode { role, node } => {
            assert_eq!(role, Endpoint::Destination);
            assert_eq!(node, "Y");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Indirect route beats the direct edge; the first frontier entry for C
/// becomes stale and must be skipped
#[test]
fn test_prefers_cheaper_multi_hop_route() {
    let g = graph(
        &["A", "B", "C", "D"],
        &[
            ("A", "C", 10.0),
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
        ],
    );
    let result = shortest_path(&g, "A", "D").unwrap().unwrap();

    assert_eq!(result.path, vec!["A", "B", "C", "D"]);
    assert_eq!(result.total_distance, 3.0);
}

#[test]
fn test_zero_weight_edges() {
    let g = graph(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 2.0),
            ("A", "C", 10.0),
            ("D", "B", 1.0),
            ("D", "E", 4.0),
            ("C", "E", 0.0),
        ],
    );
    let result = shortest_path(&g, "A", "E").unwrap().unwrap();

    assert_eq!(result.path, vec!["A", "B", "D", "E"]);
    assert_eq!(result.total_distance, 7.0);
    assert_eq!(distance(&g, "C", "E"), Some(0.0));
}

#[test]
fn test_self_loops_terminate() {
    let g = graph(
        &["A", "B"],
        &[("A", "A", 0.0), ("A", "A", 3.0), ("B", "B", 1.0)],
    );
    assert!(shortest_path(&g, "A", "B").unwrap().is_none());

    let g = graph(&["A", "B"], &[("A", "A", 0.0), ("A", "B", 4.0)]);
    assert_eq!(distance(&g, "A", "B"), Some(4.0));
}

#[test]
fn test_search_is_symmetric() {
    let g = graph(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 3.0),
            ("B", "C", 4.5),
            ("A", "D", 1.0),
            ("D", "C", 9.0),
            ("C", "E", 0.5),
            ("D", "E", 12.0),
        ],
    );
    let labels = ["A", "B", "C", "D", "E"];

    for from in labels {
        for to in labels {
            assert_eq!(
                distance(&g, from, to),
                distance(&g, to, from),
                "{from} <-> {to}"
            );
        }
    }
}

#[test]
fn test_distance_never_exceeds_direct_edge() {
    let edges = [
        ("A", "B", 7.0),
        ("B", "C", 1.0),
        ("A", "C", 2.0),
        ("C", "D", 0.25),
        ("B", "D", 5.0),
        ("A", "D", 3.0),
    ];
    let g = graph(&["A", "B", "C", "D"], &edges);

    for (from, to, weight) in edges {
        let d = distance(&g, from, to).unwrap();
        assert!(d <= weight, "{from}-{to}: {d} > {weight}");
    }
    assert_eq!(distance(&g, "A", "B"), Some(3.0));
}

#[test]
fn test_disconnected_components() {
    let g = graph(
        &["A", "B", "C", "D"],
        &[("A", "B", 1.0), ("C", "D", 1.0)],
    );
    assert!(shortest_path(&g, "A", "D").unwrap().is_none());
    assert!(shortest_path(&g, "D", "B").unwrap().is_none());
    assert_eq!(distance(&g, "C", "D"), Some(1.0));
}

#[test]
fn test_path_weights_sum_to_distance() {
    let g = graph(
        &["S", "A", "B", "C", "T"],
        &[
            ("S", "A", 1.5),
            ("A", "B", 2.25),
            ("S", "B", 4.0),
            ("B", "C", 0.5),
            ("C", "T", 1.0),
            ("A", "T", 6.0),
        ],
    );
    let result = shortest_path(&g, "S", "T").unwrap().unwrap();

    let summed: f64 = result
        .path
        .windows(2)
        .map(|pair| {
            let from = g.node_index(&pair[0]).unwrap();
            let to = g.node_index(&pair[1]).unwrap();
            g.neighbors(from)
                .iter()
                .filter(|n| n.node == to)
                .map(|n| n.weight)
                .fold(f64::INFINITY, f64::min)
        })
        .sum();

    assert_eq!(result.path, vec!["S", "A", "B", "C", "T"]);
    assert_eq!(result.total_distance, 5.25);
    assert_eq!(summed, result.total_distance);
}

#[test]
fn test_reaches_destination_near_f64_max() {
    // Relaxing back toward A from C overflows to infinity; the finite
    // route to C must still be found
    let g = graph(&["A", "B", "C"], &[("A", "B", 8e307), ("B", "C", 8e307)]);
    let result = shortest_path(&g, "A", "C").unwrap().unwrap();
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.total_distance, 1.6e308);
}
