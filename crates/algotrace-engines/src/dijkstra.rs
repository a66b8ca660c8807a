//! Dijkstra's single-source shortest paths.
//!
//! The frontier is a [`StableMinQueue`] keyed by tentative distance, so
//! equal distances are extracted in the order they were pushed. Entries made
//! stale by a later improvement are dropped on pop without a snapshot.

use algotrace_model::{Distance, Graph, NodeId};

use crate::error::{check_start, Error, Result};
use crate::event::{Entity, Event};
use crate::frontier::StableMinQueue;
use crate::paths::ShortestPaths;
use crate::trace::{Outcome, Recorder};

/// State of a Dijkstra run at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraFrame {
    pub distances: Vec<Distance>,
    pub predecessors: Vec<Option<NodeId>>,
    /// Nodes whose distance is final.
    pub settled: Vec<bool>,
    /// Queue contents in extraction order, stale entries included.
    pub frontier: Vec<(Distance, NodeId)>,
    /// Node being expanded.
    pub current: Option<NodeId>,
}

/// Shortest paths from `start` over non-negative weights.
pub fn dijkstra(graph: &Graph, start: NodeId) -> Result<Outcome<ShortestPaths, DijkstraFrame>> {
    check_start(graph, start)?;
    if let Some(edge) = graph.edges().iter().find(|edge| edge.weight < 0) {
        return Err(Error::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let mut paths = ShortestPaths::new(start, graph.node_count());
    let mut settled = vec![false; graph.node_count()];
    let mut queue = StableMinQueue::new();
    queue.push(Distance::ZERO, start);

    let mut recorder = Recorder::new();
    let frame = |paths: &ShortestPaths,
                 settled: &[bool],
                 queue: &StableMinQueue<Distance, NodeId>,
                 current: Option<NodeId>| DijkstraFrame {
        distances: paths.distances.clone(),
        predecessors: paths.predecessors.clone(),
        settled: settled.to_vec(),
        frontier: queue.snapshot(),
        current,
    };

    recorder.record(
        Event::Init,
        frame(&paths, &settled, &queue, None),
        format!("Starting Dijkstra from node {}", start),
    );

    while let Some((distance, current)) = queue.pop() {
        if settled[current.index()] || distance != paths.distances[current.index()] {
            continue;
        }
        settled[current.index()] = true;
        recorder.record(
            Event::visit(Entity::Node(current)),
            frame(&paths, &settled, &queue, Some(current)),
            format!("Processing node {} (distance: {})", current, distance),
        );

        for (neighbor, weight) in graph.neighbors(current) {
            if settled[neighbor.index()] {
                continue;
            }
            let candidate = distance.add_weight(weight);
            let edge = Entity::edge(current, neighbor);
            recorder.record(
                Event::examine(edge, None),
                frame(&paths, &settled, &queue, Some(current)),
                format!(
                    "Checking edge {}→{}: {} + {} = {} vs {}",
                    current,
                    neighbor,
                    distance,
                    weight,
                    candidate,
                    paths.distances[neighbor.index()]
                ),
            );

            if paths.relax(current, neighbor, candidate) {
                queue.push(candidate, neighbor);
                recorder.record(
                    Event::update(Entity::Node(neighbor), Some(edge)),
                    frame(&paths, &settled, &queue, Some(current)),
                    format!("Updated distance to {}: {}", neighbor, candidate),
                );
            }
        }
    }

    recorder.record(
        Event::Complete,
        frame(&paths, &settled, &queue, None),
        "Dijkstra's algorithm completed",
    );
    tracing::debug!(
        algorithm = "dijkstra",
        frames = recorder.len(),
        settled = settled.iter().filter(|&&s| s).count(),
        "shortest paths complete"
    );
    Ok(Outcome::new(paths, recorder.finish()))
}
