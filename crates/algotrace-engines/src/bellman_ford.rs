//! Bellman–Ford shortest paths with negative-cycle detection.
//!
//! Up to `N-1` relaxation passes run over every arc; a pass that changes
//! nothing ends the loop early. A final check pass then examines every arc
//! again, and each arc that would still relax is reported as evidence of a
//! negative cycle reachable from the start. Finding one is a normal result,
//! not an error.

use algotrace_model::{Distance, Edge, Graph, NodeId};

use crate::error::{check_start, Result};
use crate::event::{Decision, Entity, Event};
use crate::paths::ShortestPaths;
use crate::trace::{Outcome, Recorder};

/// Which part of the run a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Relaxation pass, numbered from 1.
    Relax(usize),
    /// The extra pass looking for arcs that still relax.
    Check,
    Done,
}

/// State of a Bellman–Ford run at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BellmanFordFrame {
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<NodeId>>,
    pub phase: Phase,
    /// Arcs found to relax during the check pass so far.
    pub negative_edges: Vec<Edge>,
}

/// Final answer of a Bellman–Ford run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BellmanFordResult {
    pub paths: ShortestPaths,
    /// Arcs that still relaxed after the last pass. Empty when no negative
    /// cycle is reachable.
    pub negative_cycle: Vec<Edge>,
    /// Relaxation passes actually run.
    pub passes: usize,
}

impl BellmanFordResult {
    #[inline]
    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle.is_empty()
    }
}

/// Shortest paths from `start`, allowing negative weights.
///
/// Undirected edges are relaxed in both directions, so a single negative
/// undirected edge reachable from `start` is reported as a negative cycle.
pub fn bellman_ford(
    graph: &Graph,
    start: NodeId,
) -> Result<Outcome<BellmanFordResult, BellmanFordFrame>> {
    check_start(graph, start)?;

    let arcs: Vec<Edge> = graph.arcs().collect();
    let mut paths = ShortestPaths::new(start, graph.node_count());
    let mut negative_edges = Vec::new();
    let mut recorder = Recorder::new();
    let frame = |paths: &ShortestPaths, phase: Phase, negative_edges: &[Edge]| BellmanFordFrame {
        distances: paths.distances.clone(),
        predecessors: paths.predecessors.clone(),
        phase,
        negative_edges: negative_edges.to_vec(),
    };

    recorder.record(
        Event::Init,
        frame(&paths, Phase::Relax(0), &negative_edges),
        format!("Starting Bellman-Ford from node {}", start),
    );

    let max_passes = graph.node_count().saturating_sub(1);
    let mut passes = 0;
    for pass in 1..=max_passes {
        passes = pass;
        let mut changed = false;

        for arc in &arcs {
            let candidate = paths.distances[arc.from.index()].add_weight(arc.weight);
            let edge = Entity::edge(arc.from, arc.to);
            recorder.record(
                Event::examine(edge, None),
                frame(&paths, Phase::Relax(pass), &negative_edges),
                format!(
                    "Pass {}: checking edge {}→{} (candidate {} vs {})",
                    pass,
                    arc.from,
                    arc.to,
                    candidate,
                    paths.distances[arc.to.index()]
                ),
            );

            if paths.relax(arc.from, arc.to, candidate) {
                changed = true;
                recorder.record(
                    Event::update(Entity::Node(arc.to), Some(edge)),
                    frame(&paths, Phase::Relax(pass), &negative_edges),
                    format!("Pass {}: updated distance to {}: {}", pass, arc.to, candidate),
                );
            }
        }

        let status = if changed {
            format!("Pass {} complete", pass)
        } else {
            format!("Pass {} complete with no updates, stopping early", pass)
        };
        recorder.record(
            Event::Boundary { pass },
            frame(&paths, Phase::Relax(pass), &negative_edges),
            status,
        );
        if !changed {
            tracing::debug!(pass, max_passes, "bellman-ford converged early");
            break;
        }
    }

    for arc in &arcs {
        let edge = Entity::edge(arc.from, arc.to);
        recorder.record(
            Event::examine(edge, None),
            frame(&paths, Phase::Check, &negative_edges),
            format!("Checking edge {}→{} for negative cycles", arc.from, arc.to),
        );

        let candidate = paths.distances[arc.from.index()].add_weight(arc.weight);
        if candidate.improves_on(&paths.distances[arc.to.index()]) {
            negative_edges.push(*arc);
            recorder.record(
                Event::decide(Decision::NegativeCycle, edge),
                frame(&paths, Phase::Check, &negative_edges),
                format!("Negative cycle detected at edge {}→{}", arc.from, arc.to),
            );
        }
    }

    let status = if negative_edges.is_empty() {
        "Bellman-Ford completed"
    } else {
        "Bellman-Ford completed: negative cycle reachable from start"
    };
    recorder.record(
        Event::Complete,
        frame(&paths, Phase::Done, &negative_edges),
        status,
    );
    tracing::debug!(
        algorithm = "bellman-ford",
        frames = recorder.len(),
        passes,
        negative_cycle = !negative_edges.is_empty(),
        "shortest paths complete"
    );

    let result = BellmanFordResult {
        paths,
        negative_cycle: negative_edges,
        passes,
    };
    Ok(Outcome::new(result, recorder.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn d(values: &[Option<i64>]) -> Vec<Distance> {
        values
            .iter()
            .map(|v| v.map_or(Distance::Infinite, Distance::Finite))
            .collect()
    }

    #[test]
    fn handles_negative_edges_without_cycle() {
        let graph = Graph::from_edges(
            4,
            true,
            [(0, 1, 4), (0, 2, 5), (1, 3, 3), (2, 1, -2), (3, 2, 4)],
        )
        .unwrap();
        let (result, _) = bellman_ford(&graph, NodeId(0)).unwrap().into_parts();

        assert!(!result.has_negative_cycle());
        assert_eq!(
            result.paths.distances,
            d(&[Some(0), Some(3), Some(5), Some(6)])
        );
        assert_eq!(
            result.paths.path_to(NodeId(3)),
            Some(vec![NodeId(0), NodeId(2), NodeId(1), NodeId(3)])
        );
    }

    #[test]
    fn stops_after_a_quiet_pass() {
        // Arc order already topological: everything settles in pass 1.
        let graph = Graph::from_edges(4, true, [(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
        let (result, trace) = bellman_ford(&graph, NodeId(0)).unwrap().into_parts();

        assert_eq!(result.passes, 2);
        assert_eq!(trace.count(EventKind::Boundary), 2);
        // Two relaxation passes plus the check pass.
        assert_eq!(trace.count(EventKind::Examine), 3 * 3);
        assert_eq!(trace.kinds().first(), Some(&EventKind::Init));
        assert_eq!(trace.kinds().last(), Some(&EventKind::Complete));
    }

    #[test]
    fn reports_negative_cycle_edges() {
        let graph = Graph::from_edges(
            4,
            true,
            [(0, 1, 1), (1, 2, -1), (2, 3, -1), (3, 1, -1)],
        )
        .unwrap();
        let (result, trace) = bellman_ford(&graph, NodeId(0)).unwrap().into_parts();

        assert!(result.has_negative_cycle());
        assert_eq!(result.passes, 3);
        let flagged = trace
            .iter()
            .filter(|s| s.event.decision() == Some(Decision::NegativeCycle))
            .count();
        assert_eq!(flagged, result.negative_cycle.len());
        assert!(result
            .negative_cycle
            .iter()
            .all(|e| e.from != NodeId(0)));
        assert_eq!(
            trace.last().map(|s| s.state.phase),
            Some(Phase::Done)
        );
    }

    #[test]
    fn unreachable_cycle_is_not_reported() {
        let graph = Graph::from_edges(4, true, [(0, 1, 2), (2, 3, -5), (3, 2, 1)]).unwrap();
        let (result, _) = bellman_ford(&graph, NodeId(0)).unwrap().into_parts();

        assert!(!result.has_negative_cycle());
        assert_eq!(result.paths.distance(NodeId(2)), Distance::Infinite);
    }

    #[test]
    fn undirected_negative_edge_is_a_cycle() {
        let graph = Graph::from_edges(2, false, [(0, 1, -1)]).unwrap();
        let (result, _) = bellman_ford(&graph, NodeId(0)).unwrap().into_parts();
        assert!(result.has_negative_cycle());
    }

    #[test]
    fn single_node_runs_only_the_check() {
        let graph = Graph::new(1, true);
        let (result, trace) = bellman_ford(&graph, NodeId(0)).unwrap().into_parts();
        assert_eq!(result.passes, 0);
        assert_eq!(trace.len(), 2);
    }
}
