//! Built-in inputs used when no input collaborator is attached.

use algotrace_engines::Item;
use algotrace_model::{Graph, Result};

/// Eight-node connected undirected weighted graph.
pub fn weighted_graph() -> Result<Graph> {
    Graph::from_edges(
        8,
        false,
        [
            (0, 1, 4),
            (0, 2, 3),
            (1, 2, 1),
            (1, 3, 2),
            (2, 3, 4),
            (3, 4, 2),
            (4, 5, 6),
            (3, 5, 5),
            (5, 6, 1),
            (4, 6, 3),
            (6, 7, 2),
            (5, 7, 7),
        ],
    )
}

/// Six-node directed graph with negative weights and no negative cycle.
pub fn signed_digraph() -> Result<Graph> {
    Graph::from_edges(
        6,
        true,
        [
            (0, 1, 6),
            (0, 2, 7),
            (1, 2, 8),
            (1, 3, 5),
            (1, 4, -4),
            (2, 3, -3),
            (2, 4, 9),
            (3, 1, -2),
            (4, 3, 7),
            (4, 5, 2),
            (3, 5, 4),
        ],
    )
}

/// Five-node directed graph for all-pairs paths.
pub fn small_digraph() -> Result<Graph> {
    Graph::from_edges(
        5,
        true,
        [
            (0, 1, 3),
            (0, 2, 8),
            (0, 4, -4),
            (1, 3, 1),
            (1, 4, 7),
            (2, 1, 4),
            (3, 0, 2),
            (3, 2, -5),
            (4, 3, 6),
        ],
    )
}

/// Knapsack items and capacity.
pub fn knapsack_items() -> (Vec<Item>, i64) {
    let items = [(2, 3), (3, 4), (4, 5), (5, 6)]
        .into_iter()
        .map(Item::from)
        .collect();
    (items, 5)
}

/// Unsorted non-negative values.
pub fn values() -> Vec<i64> {
    vec![38, 27, 43, 3, 9, 82, 10, 55, 1, 27]
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_model::NodeId;

    #[test]
    fn samples_are_valid() {
        let graph = weighted_graph().unwrap();
        assert!(graph.is_connected_from(NodeId(0)));
        assert!(!graph.is_directed());

        let signed = signed_digraph().unwrap();
        assert!(signed.edges().iter().any(|e| e.weight < 0));

        assert_eq!(small_digraph().unwrap().node_count(), 5);
        assert_eq!(knapsack_items().0.len(), 4);
        assert!(values().iter().all(|&v| v >= 0));
    }
}
