//! Kruskal's minimum spanning forest.
//!
//! Edges are stably sorted by weight, so equal weights keep their insertion
//! order. Every edge gets an `Examine` frame followed by `Decide(Accept)` when
//! it joins two components or `Decide(Reject)` when it would close a cycle.

use algotrace_model::{Edge, Graph, Weight};

use crate::error::{Error, Result};
use crate::event::{Decision, Entity, Event};
use crate::spanning::SpanningTree;
use crate::trace::{Outcome, Recorder};

/// State of a Kruskal run at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KruskalFrame {
    pub tree: Vec<Edge>,
    pub total_weight: Weight,
    /// Component representative per node.
    pub components: Vec<usize>,
    /// Sorted edges not yet examined.
    pub pending: Vec<Edge>,
}

/// Disjoint sets with path compression and union by rank.
#[derive(Debug, Clone)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. False if already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }

    /// Representative of every element, without compressing.
    fn labels(&self) -> Vec<usize> {
        (0..self.parent.len())
            .map(|mut x| {
                while self.parent[x] != x {
                    x = self.parent[x];
                }
                x
            })
            .collect()
    }
}

/// Minimum spanning forest of an undirected graph.
///
/// A connected `N`-node graph yields exactly `N-1` edges.
pub fn kruskal(graph: &Graph) -> Result<Outcome<SpanningTree, KruskalFrame>> {
    if graph.is_directed() {
        return Err(Error::DirectedGraph {
            algorithm: "kruskal",
        });
    }

    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let mut sets = UnionFind::new(graph.node_count());
    let mut tree = SpanningTree::default();
    let mut recorder = Recorder::new();
    let frame = |tree: &SpanningTree, sets: &UnionFind, pending: &[Edge]| KruskalFrame {
        tree: tree.edges.clone(),
        total_weight: tree.total_weight,
        components: sets.labels(),
        pending: pending.to_vec(),
    };

    recorder.record(
        Event::Init,
        frame(&tree, &sets, &sorted),
        format!("Sorted {} edges by weight", sorted.len()),
    );

    for (position, edge) in sorted.iter().enumerate() {
        let target = Entity::edge(edge.from, edge.to);
        let pending = &sorted[position + 1..];
        recorder.record(
            Event::examine(target, None),
            frame(&tree, &sets, &sorted[position..]),
            format!(
                "Checking edge {}-{} (weight {})",
                edge.from, edge.to, edge.weight
            ),
        );

        if sets.union(edge.from.index(), edge.to.index()) {
            tree.push(*edge);
            recorder.record(
                Event::decide(Decision::Accept, target),
                frame(&tree, &sets, pending),
                format!(
                    "Added edge {}-{} (weight {}), total weight {}",
                    edge.from, edge.to, edge.weight, tree.total_weight
                ),
            );
        } else {
            recorder.record(
                Event::decide(Decision::Reject, target),
                frame(&tree, &sets, pending),
                format!("Rejected edge {}-{} (would create cycle)", edge.from, edge.to),
            );
        }
    }

    recorder.record(
        Event::Complete,
        frame(&tree, &sets, &[]),
        format!("MST complete with total weight {}", tree.total_weight),
    );
    debug_assert_eq!(recorder.len(), 2 * sorted.len() + 2);
    tracing::debug!(
        algorithm = "kruskal",
        frames = recorder.len(),
        total_weight = tree.total_weight,
        edges = tree.len(),
        "spanning forest complete"
    );
    Ok(Outcome::new(tree, recorder.finish()))
}
