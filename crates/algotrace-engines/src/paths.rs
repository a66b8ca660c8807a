//! Single-source shortest-path results.

use algotrace_model::{Distance, NodeId};

/// Distances and predecessors from one start node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPaths {
    pub start: NodeId,
    /// Best known distance per node; [`Distance::Infinite`] when unreached.
    pub distances: Vec<Distance>,
    /// Node preceding each node on its best path.
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub(crate) fn new(start: NodeId, node_count: usize) -> Self {
        let mut distances = vec![Distance::Infinite; node_count];
        distances[start.index()] = Distance::ZERO;
        Self {
            start,
            distances,
            predecessors: vec![None; node_count],
        }
    }

    /// Distance to `node`, infinite when out of range or unreached.
    pub fn distance(&self, node: NodeId) -> Distance {
        self.distances
            .get(node.index())
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// Nodes on the best path from the start to `target`, inclusive.
    ///
    /// Returns `None` if `target` is unreached, or if the predecessor chain
    /// loops (possible after a negative cycle).
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(target).is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut node = target;
        while node != self.start {
            node = self.predecessors[node.index()]?;
            path.push(node);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Try to shorten `to` through `from`; true on strict improvement.
    pub(crate) fn relax(&mut self, from: NodeId, to: NodeId, candidate: Distance) -> bool {
        if candidate.improves_on(&self.distances[to.index()]) {
            self.distances[to.index()] = candidate;
            self.predecessors[to.index()] = Some(from);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_predecessors() {
        let mut paths = ShortestPaths::new(NodeId(0), 4);
        assert!(paths.relax(NodeId(0), NodeId(1), Distance::Finite(2)));
        assert!(paths.relax(NodeId(1), NodeId(2), Distance::Finite(5)));
        assert!(!paths.relax(NodeId(0), NodeId(2), Distance::Finite(5)));

        assert_eq!(
            paths.path_to(NodeId(2)),
            Some(vec![NodeId(0), NodeId(1), NodeId(2)])
        );
        assert_eq!(paths.path_to(NodeId(0)), Some(vec![NodeId(0)]));
        assert_eq!(paths.path_to(NodeId(3)), None);
        assert_eq!(paths.distance(NodeId(9)), Distance::Infinite);
    }

    #[test]
    fn looping_predecessors_yield_no_path() {
        let mut paths = ShortestPaths::new(NodeId(0), 3);
        paths.relax(NodeId(2), NodeId(1), Distance::Finite(-1));
        paths.relax(NodeId(1), NodeId(2), Distance::Finite(-2));
        assert_eq!(paths.path_to(NodeId(2)), None);
    }
}
