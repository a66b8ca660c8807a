//! Error types for algotrace-engines.
//!
//! Every variant is a precondition violation detected before the first
//! snapshot is recorded. Negative cycles are not errors; see
//! [`crate::bellman_ford`].

use algotrace_model::{NodeId, Weight};
use thiserror::Error;

/// Result type for engine entry points.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that reject an engine call at entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid model input.
    #[error(transparent)]
    Model(#[from] algotrace_model::Error),

    /// The start node lies outside `0..node_count`.
    #[error("start node {start} out of range for a graph with {node_count} nodes")]
    StartOutOfRange { start: NodeId, node_count: usize },

    /// Dijkstra requires non-negative weights.
    #[error("negative weight {weight} on edge {from}-{to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    /// The engine only accepts undirected graphs.
    #[error("{algorithm} requires an undirected graph")]
    DirectedGraph { algorithm: &'static str },

    /// The engine requires every node to be reachable from the start node.
    #[error("graph is disconnected: {reached} of {node_count} nodes reachable from {start}")]
    Disconnected {
        start: NodeId,
        reached: usize,
        node_count: usize,
    },

    /// Floyd–Warshall needs an `N x N` matrix.
    #[error("distance matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Knapsack capacity below zero.
    #[error("negative knapsack capacity {0}")]
    NegativeCapacity(i64),

    /// Knapsack item with a weight below zero.
    #[error("item {item} has negative weight {weight}")]
    NegativeItemWeight { item: usize, weight: i64 },

    /// Radix sort only handles non-negative integers.
    #[error("radix sort requires non-negative values, found {value} at index {index}")]
    NegativeValue { index: usize, value: i64 },
}

/// Reject a start node outside the graph.
pub(crate) fn check_start(graph: &algotrace_model::Graph, start: NodeId) -> Result<()> {
    if graph.contains(start) {
        Ok(())
    } else {
        Err(Error::StartOutOfRange {
            start,
            node_count: graph.node_count(),
        })
    }
}
