//! Error types for algotrace-model.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type for model construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Edges may not connect a node to itself.
    #[error("self-loop on node {node}")]
    SelfLoop { node: NodeId },

    /// An edge endpoint lies outside `0..node_count`.
    #[error("node {node} out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    /// Row-major data does not fill the requested shape.
    #[error("table of {rows}x{cols} cannot hold {len} values")]
    TableShape { rows: usize, cols: usize, len: usize },
}
