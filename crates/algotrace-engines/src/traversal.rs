//! Breadth-first and depth-first traversal.
//!
//! Both engines record, for every dequeue/pop, the full frontier container,
//! then one `Examine` per neighbor and a `Decide(Accept)` for every neighbor
//! added to the frontier.
//!
//! BFS marks nodes when they are enqueued, so a node at level `L` is only
//! enqueued after every level `L-1` node has been discovered. DFS runs on an
//! explicit stack: accepted neighbors are pushed in reverse enumeration order
//! so they pop in enumeration order. Popping a node that was visited through
//! another path records `Decide(Reject)`; a visited node with nothing left to
//! push records `Decide(Backtrack)`.

use std::collections::VecDeque;

use algotrace_model::{Graph, NodeId};

use crate::error::{check_start, Result};
use crate::event::{Decision, Entity, Event};
use crate::trace::{Outcome, Recorder};

/// State of a traversal at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalFrame {
    /// Queue front-to-back (BFS) or stack bottom-to-top (DFS).
    pub frontier: Vec<NodeId>,
    /// Nodes visited so far, in visitation order.
    pub visited: Vec<NodeId>,
    /// Tree edges `(parent, child)` found so far.
    pub tree_edges: Vec<(NodeId, NodeId)>,
    /// Node being expanded.
    pub current: Option<NodeId>,
}

/// Final answer of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalResult {
    pub start: NodeId,
    /// Visitation order.
    pub order: Vec<NodeId>,
    /// Spanning tree of the reached nodes, `(parent, child)`.
    pub tree_edges: Vec<(NodeId, NodeId)>,
    /// BFS level or DFS discovery depth per node; `None` if unreached.
    pub depth: Vec<Option<usize>>,
}

impl TraversalResult {
    /// Whether `node` was reached from the start.
    pub fn reached(&self, node: NodeId) -> bool {
        self.depth.get(node.index()).is_some_and(Option::is_some)
    }
}

/// Working state shared by both traversals.
struct Walk {
    visited: Vec<NodeId>,
    tree_edges: Vec<(NodeId, NodeId)>,
    depth: Vec<Option<usize>>,
    recorder: Recorder<TraversalFrame>,
}

impl Walk {
    fn new(graph: &Graph) -> Self {
        Self {
            visited: Vec::new(),
            tree_edges: Vec::new(),
            depth: vec![None; graph.node_count()],
            recorder: Recorder::new(),
        }
    }

    fn record<'a>(
        &mut self,
        event: Event,
        frontier: impl IntoIterator<Item = &'a NodeId>,
        current: Option<NodeId>,
        status: String,
    ) {
        let frame = TraversalFrame {
            frontier: frontier.into_iter().copied().collect(),
            visited: self.visited.clone(),
            tree_edges: self.tree_edges.clone(),
            current,
        };
        self.recorder.record(event, frame, status);
    }

    fn finish(self, start: NodeId) -> Outcome<TraversalResult, TraversalFrame> {
        let trace = self.recorder.finish();
        let result = TraversalResult {
            start,
            order: self.visited,
            tree_edges: self.tree_edges,
            depth: self.depth,
        };
        Outcome::new(result, trace)
    }
}

/// Breadth-first search from `start`.
pub fn bfs(graph: &Graph, start: NodeId) -> Result<Outcome<TraversalResult, TraversalFrame>> {
    check_start(graph, start)?;

    let mut walk = Walk::new(graph);
    let mut queue = VecDeque::from([start]);
    walk.depth[start.index()] = Some(0);
    walk.record(
        Event::Init,
        &queue,
        None,
        format!("Starting BFS from node {}", start),
    );

    while let Some(current) = queue.pop_front() {
        let level = walk.depth[current.index()].unwrap_or_default();
        walk.visited.push(current);
        walk.record(
            Event::visit(Entity::Node(current)),
            &queue,
            Some(current),
            format!("Processing node {} at level {}", current, level),
        );

        for (neighbor, _) in graph.neighbors(current) {
            let edge = Entity::edge(current, neighbor);
            walk.record(
                Event::examine(edge, None),
                &queue,
                Some(current),
                format!("Checking neighbor {} of node {}", neighbor, current),
            );
            if walk.depth[neighbor.index()].is_some() {
                continue;
            }

            walk.depth[neighbor.index()] = Some(level + 1);
            walk.tree_edges.push((current, neighbor));
            queue.push_back(neighbor);
            walk.record(
                Event::decide(Decision::Accept, edge),
                &queue,
                Some(current),
                format!("Added node {} to queue (level {})", neighbor, level + 1),
            );
        }
    }

    walk.record(Event::Complete, &[], None, "BFS completed".to_string());
    tracing::debug!(
        algorithm = "bfs",
        frames = walk.recorder.len(),
        reached = walk.visited.len(),
        "traversal complete"
    );
    Ok(walk.finish(start))
}

/// Depth-first search from `start` on an explicit stack.
pub fn dfs(graph: &Graph, start: NodeId) -> Result<Outcome<TraversalResult, TraversalFrame>> {
    check_start(graph, start)?;

    let mut walk = Walk::new(graph);
    // (node, node that pushed it)
    let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(start, None)];
    let mut seen = vec![false; graph.node_count()];
    let nodes = |stack: &[(NodeId, Option<NodeId>)]| -> Vec<NodeId> {
        stack.iter().map(|&(node, _)| node).collect()
    };

    walk.record(
        Event::Init,
        &nodes(&stack),
        None,
        format!("Starting DFS from node {}", start),
    );

    while let Some((current, parent)) = stack.pop() {
        if seen[current.index()] {
            walk.record(
                Event::decide(Decision::Reject, Entity::Node(current)),
                &nodes(&stack),
                Some(current),
                format!("Node {} already visited, skipping", current),
            );
            continue;
        }

        seen[current.index()] = true;
        let depth = parent
            .and_then(|p| walk.depth[p.index()])
            .map_or(0, |d| d + 1);
        walk.depth[current.index()] = Some(depth);
        walk.visited.push(current);
        if let Some(parent) = parent {
            walk.tree_edges.push((parent, current));
        }
        walk.record(
            Event::visit(Entity::Node(current)),
            &nodes(&stack),
            Some(current),
            format!("Visiting node {} at depth {}", current, depth),
        );

        let mut accepted = Vec::new();
        for (neighbor, _) in graph.neighbors(current) {
            walk.record(
                Event::examine(Entity::edge(current, neighbor), None),
                &nodes(&stack),
                Some(current),
                format!("Checking neighbor {} of node {}", neighbor, current),
            );
            if !seen[neighbor.index()] {
                accepted.push(neighbor);
            }
        }

        if accepted.is_empty() {
            walk.record(
                Event::decide(Decision::Backtrack, Entity::Node(current)),
                &nodes(&stack),
                Some(current),
                format!("Dead end at node {}, backtracking", current),
            );
            continue;
        }

        for &neighbor in accepted.iter().rev() {
            stack.push((neighbor, Some(current)));
            walk.record(
                Event::decide(Decision::Accept, Entity::edge(current, neighbor)),
                &nodes(&stack),
                Some(current),
                format!("Pushed node {} onto stack", neighbor),
            );
        }
    }

    walk.record(Event::Complete, &[], None, "DFS completed".to_string());
    tracing::debug!(
        algorithm = "dfs",
        frames = walk.recorder.len(),
        reached = walk.visited.len(),
        "traversal complete"
    );
    Ok(walk.finish(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::Error;

    fn n(ids: &[usize]) -> Vec<NodeId> {
        ids.iter().copied().map(NodeId).collect()
    }

    /// 0 - 1 - 3
    /// |   |
    /// 2 - 4      5 (isolated)
    fn sample() -> Graph {
        Graph::from_edges(6, false, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (1, 4, 1), (2, 4, 1)]).unwrap()
    }

    #[test]
    fn bfs_visits_in_level_order() {
        let (result, _) = bfs(&sample(), NodeId(0)).unwrap().into_parts();

        assert_eq!(result.order, n(&[0, 1, 2, 3, 4]));
        assert_eq!(result.depth[3], Some(2));
        assert_eq!(result.depth[4], Some(2));
        assert_eq!(result.depth[5], None);
        assert!(!result.reached(NodeId(5)));
        assert_eq!(
            result.tree_edges,
            vec![
                (NodeId(0), NodeId(1)),
                (NodeId(0), NodeId(2)),
                (NodeId(1), NodeId(3)),
                (NodeId(1), NodeId(4)),
            ]
        );
    }

    #[test]
    fn bfs_records_queue_on_every_dequeue() {
        let (_, trace) = bfs(&sample(), NodeId(0)).unwrap().into_parts();

        assert_eq!(trace[0].kind(), EventKind::Init);
        assert_eq!(trace.last().map(|s| s.kind()), Some(EventKind::Complete));
        assert_eq!(trace.count(EventKind::Visit), 5);
        // Sum of degrees over reached nodes.
        assert_eq!(trace.count(EventKind::Examine), 10);
        assert_eq!(trace.count(EventKind::Decide), 4);

        let first_visit = trace.iter().find(|s| s.kind() == EventKind::Visit).unwrap();
        assert!(first_visit.state.frontier.is_empty());
        assert_eq!(first_visit.state.current, Some(NodeId(0)));

        let first_accept = trace.iter().find(|s| s.kind() == EventKind::Decide).unwrap();
        assert_eq!(first_accept.state.frontier, n(&[1]));
    }

    #[test]
    fn dfs_pops_in_enumeration_order() {
        let (result, _) = dfs(&sample(), NodeId(0)).unwrap().into_parts();

        assert_eq!(result.order, n(&[0, 1, 3, 4, 2]));
        assert_eq!(
            result.tree_edges,
            vec![
                (NodeId(0), NodeId(1)),
                (NodeId(1), NodeId(3)),
                (NodeId(1), NodeId(4)),
                (NodeId(4), NodeId(2)),
            ]
        );
        assert_eq!(result.depth[2], Some(3));
    }

    #[test]
    fn dfs_pushes_reverse_and_records_backtracks() {
        let (_, trace) = dfs(&sample(), NodeId(0)).unwrap().into_parts();

        // First two accepts push 2 then 1, so 1 sits on top.
        let pushes: Vec<_> = trace
            .iter()
            .filter(|s| s.event.decision() == Some(Decision::Accept))
            .take(2)
            .map(|s| s.state.frontier.clone())
            .collect();
        assert_eq!(pushes, vec![n(&[2]), n(&[2, 1])]);

        let backtracks = trace
            .iter()
            .filter(|s| s.event.decision() == Some(Decision::Backtrack))
            .count();
        assert!(backtracks >= 1);

        // Node 2 is pushed by 0 and again by 4; the stale copy is rejected.
        let rejects = trace
            .iter()
            .filter(|s| s.event.decision() == Some(Decision::Reject))
            .count();
        assert_eq!(rejects, 1);
    }

    #[test]
    fn long_path_is_walked_iteratively() {
        let edges: Vec<_> = (0..999).map(|i| (i, i + 1, 1)).collect();
        let graph = Graph::from_edges(1_000, false, edges).unwrap();
        let (result, _) = dfs(&graph, NodeId(0)).unwrap().into_parts();
        assert_eq!(result.order.len(), 1_000);
        assert_eq!(result.depth[999], Some(999));
    }

    #[test]
    fn start_out_of_range_rejected() {
        let err = bfs(&sample(), NodeId(6)).unwrap_err();
        assert_eq!(
            err,
            Error::StartOutOfRange {
                start: NodeId(6),
                node_count: 6
            }
        );
        assert!(dfs(&sample(), NodeId(42)).is_err());
    }
}
