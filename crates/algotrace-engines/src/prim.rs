//! Prim's minimum spanning tree.
//!
//! The frontier holds `(weight, from, to)` entries in a [`StableMinQueue`],
//! so equal weights are selected in the order they were discovered. Each
//! selection is preceded by an `Examine` frame showing the live frontier
//! (edges with exactly one endpoint in the tree) and followed by a
//! `Decide(Accept)`. Entries whose far endpoint joined the tree after they
//! were pushed are dropped without a frame.

use algotrace_model::{Edge, Graph, NodeId, Weight};

use crate::error::{check_start, Error, Result};
use crate::event::{Decision, Entity, Event};
use crate::frontier::StableMinQueue;
use crate::spanning::SpanningTree;
use crate::trace::{Outcome, Recorder};

/// State of a Prim run at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimFrame {
    pub in_tree: Vec<bool>,
    pub tree: Vec<Edge>,
    pub total_weight: Weight,
    /// Live frontier in selection order.
    pub frontier: Vec<Edge>,
}

type Frontier = StableMinQueue<Weight, (NodeId, NodeId)>;

fn live_frontier(queue: &Frontier, in_tree: &[bool]) -> Vec<Edge> {
    queue
        .snapshot()
        .into_iter()
        .filter(|&(_, (_, to))| !in_tree[to.index()])
        .map(|(weight, (from, to))| Edge::new(from, to, weight))
        .collect()
}

fn expand(graph: &Graph, queue: &mut Frontier, in_tree: &[bool], node: NodeId) {
    for (neighbor, weight) in graph.neighbors(node) {
        if !in_tree[neighbor.index()] {
            queue.push(weight, (node, neighbor));
        }
    }
}

/// Minimum spanning tree of a connected undirected graph, grown from `start`.
pub fn prim(graph: &Graph, start: NodeId) -> Result<Outcome<SpanningTree, PrimFrame>> {
    check_start(graph, start)?;
    if graph.is_directed() {
        return Err(Error::DirectedGraph { algorithm: "prim" });
    }
    let reached = graph.reachable_count(start);
    if reached != graph.node_count() {
        return Err(Error::Disconnected {
            start,
            reached,
            node_count: graph.node_count(),
        });
    }

    let mut tree = SpanningTree::default();
    let mut in_tree = vec![false; graph.node_count()];
    let mut queue = Frontier::new();
    in_tree[start.index()] = true;
    expand(graph, &mut queue, &in_tree, start);

    let mut recorder = Recorder::new();
    let frame = |tree: &SpanningTree, in_tree: &[bool], queue: &Frontier| PrimFrame {
        in_tree: in_tree.to_vec(),
        tree: tree.edges.clone(),
        total_weight: tree.total_weight,
        frontier: live_frontier(queue, in_tree),
    };

    recorder.record(
        Event::Init,
        frame(&tree, &in_tree, &queue),
        format!("Starting Prim's algorithm from node {}", start),
    );

    loop {
        while queue
            .peek()
            .is_some_and(|(_, &(_, to))| in_tree[to.index()])
        {
            queue.pop();
        }
        let before = frame(&tree, &in_tree, &queue);
        let Some((weight, (from, to))) = queue.pop() else {
            break;
        };
        let edge = Entity::edge(from, to);
        let frontier_size = before.frontier.len();
        recorder.record(
            Event::examine(edge, None),
            before,
            format!(
                "Frontier has {} edges; minimum is {}-{} (weight {})",
                frontier_size, from, to, weight
            ),
        );

        in_tree[to.index()] = true;
        tree.push(Edge::new(from, to, weight));
        expand(graph, &mut queue, &in_tree, to);
        recorder.record(
            Event::decide(Decision::Accept, edge),
            frame(&tree, &in_tree, &queue),
            format!(
                "Added edge {}-{} (weight {}), total weight {}",
                from, to, weight, tree.total_weight
            ),
        );
    }

    recorder.record(
        Event::Complete,
        frame(&tree, &in_tree, &queue),
        format!("MST complete with total weight {}", tree.total_weight),
    );
    debug_assert_eq!(tree.len(), graph.node_count().saturating_sub(1));
    tracing::debug!(
        algorithm = "prim",
        frames = recorder.len(),
        total_weight = tree.total_weight,
        "spanning tree complete"
    );
    Ok(Outcome::new(tree, recorder.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn sample() -> Graph {
        Graph::from_edges(
            5,
            false,
            [
                (0, 1, 2),
                (0, 3, 6),
                (1, 2, 3),
                (1, 3, 8),
                (1, 4, 5),
                (2, 4, 7),
                (3, 4, 9),
            ],
        )
        .unwrap()
    }

    #[test]
    fn builds_minimum_tree() {
        let (tree, _) = prim(&sample(), NodeId(0)).unwrap().into_parts();

        assert_eq!(tree.total_weight, 16);
        let endpoints: Vec<_> = tree.edges.iter().map(|e| (e.from.0, e.to.0)).collect();
        assert_eq!(endpoints, vec![(0, 1), (1, 2), (1, 4), (0, 3)]);
    }

    #[test]
    fn every_accept_follows_a_frontier_frame() {
        let (_, trace) = prim(&sample(), NodeId(0)).unwrap().into_parts();

        assert_eq!(trace.len(), 2 + 2 * 4);
        for (k, snapshot) in trace.iter().enumerate() {
            if snapshot.kind() == EventKind::Decide {
                let before = &trace[k - 1];
                assert_eq!(before.kind(), EventKind::Examine);
                assert_eq!(before.event.entities(), snapshot.event.entities());
                if let Event::Decide {
                    target: Entity::Edge(from, to),
                    ..
                } = snapshot.event
                {
                    assert_eq!(before.state.frontier[0].endpoints(), (from, to));
                }
            }
        }
    }

    #[test]
    fn frontier_view_excludes_stale_entries() {
        let (_, trace) = prim(&sample(), NodeId(0)).unwrap().into_parts();
        for snapshot in &trace {
            for edge in &snapshot.state.frontier {
                assert!(snapshot.state.in_tree[edge.from.index()]);
            }
        }
        // After 0-1 is accepted, 0-3 and 1-3 both lead to 3; neither is stale yet.
        let first_accept = trace.iter().find(|s| s.kind() == EventKind::Decide).unwrap();
        let weights: Vec<_> = first_accept.state.frontier.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![3, 5, 6, 8]);
    }

    #[test]
    fn equal_weights_pick_first_discovered() {
        let graph = Graph::from_edges(3, false, [(0, 2, 1), (0, 1, 1)]).unwrap();
        let (tree, _) = prim(&graph, NodeId(0)).unwrap().into_parts();
        assert_eq!(tree.edges[0].to, NodeId(2));
    }

    #[test]
    fn rejects_directed_and_disconnected() {
        let directed = Graph::from_edges(2, true, [(0, 1, 1)]).unwrap();
        assert_eq!(
            prim(&directed, NodeId(0)).unwrap_err(),
            Error::DirectedGraph { algorithm: "prim" }
        );

        let split = Graph::from_edges(4, false, [(0, 1, 1), (2, 3, 1)]).unwrap();
        assert_eq!(
            prim(&split, NodeId(0)).unwrap_err(),
            Error::Disconnected {
                start: NodeId(0),
                reached: 2,
                node_count: 4
            }
        );
    }
}
