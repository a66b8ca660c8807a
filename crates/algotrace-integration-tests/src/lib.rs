//! Shared generators for the cross-engine tests.

use std::ops::Range;

use algotrace_model::{Graph, Result};
use proptest::prelude::*;
use proptest::sample::Index;

/// Edge list for a graph in which every node is reachable from node 0.
#[derive(Debug, Clone)]
pub struct GraphSpec {
    pub nodes: usize,
    pub directed: bool,
    pub edges: Vec<(usize, usize, i64)>,
}

impl GraphSpec {
    pub fn graph(&self) -> Result<Graph> {
        Graph::from_edges(self.nodes, self.directed, self.edges.iter().copied())
    }

    /// Same edges, every weight 1.
    pub fn unit_weights(&self) -> Self {
        Self {
            edges: self.edges.iter().map(|&(a, b, _)| (a, b, 1)).collect(),
            ..self.clone()
        }
    }
}

/// Graphs of 2..=`max_nodes` nodes. A random tree hanging off node 0 comes
/// first, so later edges may only reweight it, never disconnect it.
pub fn connected_graph(
    max_nodes: usize,
    directed: bool,
    weights: Range<i64>,
) -> impl Strategy<Value = GraphSpec> {
    (2..=max_nodes.max(2))
        .prop_flat_map(move |nodes| {
            let tree = prop::collection::vec((any::<Index>(), weights.clone()), nodes - 1);
            let extra =
                prop::collection::vec((0..nodes, 0..nodes, weights.clone()), 0..=2 * nodes);
            (Just(nodes), tree, extra)
        })
        .prop_map(move |(nodes, tree, extra)| {
            let mut edges: Vec<(usize, usize, i64)> = tree
                .into_iter()
                .enumerate()
                .map(|(i, (parent, weight))| (parent.index(i + 1), i + 1, weight))
                .collect();
            edges.extend(extra.into_iter().filter(|&(a, b, _)| a != b));
            GraphSpec {
                nodes,
                directed,
                edges,
            }
        })
}

/// Whether `edges` over `nodes` nodes contain no cycle.
pub fn is_forest(nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> bool {
    let mut parent: Vec<usize> = (0..nodes).collect();
    fn root(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    for (a, b) in edges {
        let (ra, rb) = (root(&mut parent, a), root(&mut parent, b));
        if ra == rb {
            return false;
        }
        parent[ra] = rb;
    }
    true
}
