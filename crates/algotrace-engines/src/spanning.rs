//! Minimum spanning tree results shared by Prim and Kruskal.

use algotrace_model::{Edge, Weight};

/// Edges of a spanning tree in the order they were accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
}

impl SpanningTree {
    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
