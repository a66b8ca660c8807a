//! Floyd–Warshall all-pairs shortest paths.
//!
//! Every `(k, i, j)` triple produces exactly one snapshot: `Update` when the
//! route through `k` is strictly shorter, `Examine` otherwise. An `Update`
//! frame stands in for that triple's examination, so `Examine` plus `Update`
//! frames always total `N³`. With the surrounding `Init` and `Complete`, an
//! `N`-node run records `N³ + 2` frames. Sums involving an infinite operand stay infinite, so an
//! unreachable intermediate never improves a cell.

use algotrace_model::{Distance, DistanceMatrix, Graph, NodeId};

use crate::error::{Error, Result};
use crate::event::{Entity, Event};
use crate::trace::{Outcome, Recorder};

/// State of a Floyd–Warshall run at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloydWarshallFrame {
    pub matrix: DistanceMatrix,
    /// Intermediate node of the current round.
    pub k: Option<usize>,
    /// `D[i][k] + D[k][j]` for the examined cell.
    pub candidate: Option<Distance>,
}

/// All-pairs distances.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllPairs {
    pub distances: DistanceMatrix,
}

impl AllPairs {
    /// Distance from `from` to `to`; infinite when out of range.
    pub fn distance(&self, from: NodeId, to: NodeId) -> Distance {
        self.distances
            .get(from.index(), to.index())
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// Distances from `from` to every node.
    pub fn row(&self, from: NodeId) -> &[Distance] {
        self.distances.row(from.index())
    }

    /// A negative diagonal entry means a negative cycle through that node.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.distances.rows()).any(|i| self.distances[(i, i)] < Distance::ZERO)
    }
}

/// Run Floyd–Warshall over an `N x N` matrix: infinite where no direct
/// edge, zero on the diagonal.
pub fn floyd_warshall(matrix: &DistanceMatrix) -> Result<Outcome<AllPairs, FloydWarshallFrame>> {
    if !matrix.is_square() {
        return Err(Error::NotSquare {
            rows: matrix.rows(),
            cols: matrix.cols(),
        });
    }

    let n = matrix.rows();
    let mut dist = matrix.clone();
    let mut recorder = Recorder::new();
    recorder.record(
        Event::Init,
        FloydWarshallFrame {
            matrix: dist.clone(),
            k: None,
            candidate: None,
        },
        "Initial distance matrix",
    );

    for k in 0..n {
        let via = Entity::Node(NodeId(k));
        for i in 0..n {
            for j in 0..n {
                let current = dist[(i, j)];
                let candidate = dist[(i, k)] + dist[(k, j)];
                let cell = Entity::Cell(i, j);

                let (event, status) = if candidate.improves_on(&current) {
                    dist.set(i, j, candidate);
                    (
                        Event::update(cell, Some(via)),
                        format!(
                            "k={}: updated dist[{}][{}] from {} to {}",
                            k, i, j, current, candidate
                        ),
                    )
                } else {
                    (
                        Event::examine(cell, Some(via)),
                        format!(
                            "k={}: dist[{}][{}] = {} <= {} via {}",
                            k, i, j, current, candidate, k
                        ),
                    )
                };
                recorder.record(
                    event,
                    FloydWarshallFrame {
                        matrix: dist.clone(),
                        k: Some(k),
                        candidate: Some(candidate),
                    },
                    status,
                );
            }
        }
    }

    recorder.record(
        Event::Complete,
        FloydWarshallFrame {
            matrix: dist.clone(),
            k: None,
            candidate: None,
        },
        "Floyd-Warshall completed",
    );
    debug_assert_eq!(recorder.len(), n * n * n + 2);
    tracing::debug!(
        algorithm = "floyd-warshall",
        frames = recorder.len(),
        nodes = n,
        "all-pairs shortest paths complete"
    );
    Ok(Outcome::new(AllPairs { distances: dist }, recorder.finish()))
}

/// Floyd–Warshall over a graph's [`Graph::distance_matrix`].
pub fn floyd_warshall_graph(graph: &Graph) -> Result<Outcome<AllPairs, FloydWarshallFrame>> {
    floyd_warshall(&graph.distance_matrix())
}
