//! Weighted graph over a dense node range.
//!
//! A [`Graph`] owns its edge list in insertion order and an adjacency index
//! pointing back into that list. Neighbor enumeration, edge enumeration and
//! arc enumeration all follow insertion order, so every engine sees the same
//! deterministic ordering for a given input.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::table::DistanceMatrix;

/// Edge weight. Signed so Bellman–Ford can see negative edges.
pub type Weight = i64;

/// A node identifier in the dense range `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// Position of this node in per-node vectors.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weighted edge.
///
/// For undirected graphs `from < to` always holds (canonical key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    /// Create an edge.
    pub const fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// The same edge traversed in the opposite direction.
    pub const fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// Endpoint pair without the weight.
    pub const fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} (w={})", self.from, self.to, self.weight)
    }
}

/// A directed or undirected weighted graph with nodes `0..node_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GraphParts", into = "GraphParts")
)]
pub struct Graph {
    node_count: usize,
    directed: bool,
    /// Edges in first-insertion order.
    edges: Vec<Edge>,
    /// Canonical endpoint key -> position in `edges`.
    lookup: HashMap<(NodeId, NodeId), usize>,
    /// Per-node outgoing (or incident) edges as positions in `edges`.
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize, directed: bool) -> Self {
        Self {
            node_count,
            directed,
            edges: Vec::new(),
            lookup: HashMap::new(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Build a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(node_count: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let mut graph = Self::new(node_count, directed);
        for (from, to, weight) in edges {
            graph.add_edge(NodeId(from), NodeId(to), weight)?;
        }
        Ok(graph)
    }

    /// Insert an edge.
    ///
    /// Re-adding an existing key overwrites its weight but keeps the edge at
    /// its original position, so enumeration order is unchanged.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(Error::SelfLoop { node: from });
        }

        let key = self.key(from, to);
        if let Some(&position) = self.lookup.get(&key) {
            self.edges[position].weight = weight;
            return Ok(());
        }

        let position = self.edges.len();
        self.edges.push(Edge::new(key.0, key.1, weight));
        self.lookup.insert(key, position);
        self.adjacency[key.0.index()].push(position);
        if !self.directed {
            self.adjacency[key.1.index()].push(position);
        }
        Ok(())
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether edges are ordered pairs.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `node` is in `0..node_count`.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count).map(NodeId)
    }

    /// Edges in insertion order (canonical orientation for undirected graphs).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `node` with edge weights, in edge insertion order.
    ///
    /// For directed graphs these are out-neighbors only.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency
            .get(node.index())
            .into_iter()
            .flatten()
            .map(move |&position| {
                let edge = &self.edges[position];
                let other = if edge.from == node { edge.to } else { edge.from };
                (other, edge.weight)
            })
    }

    /// Weight of the edge between `from` and `to`, if present.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.lookup
            .get(&self.key(from, to))
            .map(|&position| self.edges[position].weight)
    }

    /// Every edge as a directed arc.
    ///
    /// Undirected edges yield both orientations, forward first.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.directed;
        self.edges.iter().flat_map(move |edge| {
            let reverse = if directed { None } else { Some(edge.reversed()) };
            std::iter::once(*edge).chain(reverse)
        })
    }

    /// Number of nodes reachable from `start`, including `start`.
    pub fn reachable_count(&self, start: NodeId) -> usize {
        if !self.contains(start) {
            return 0;
        }
        let mut seen = vec![false; self.node_count];
        let mut queue = VecDeque::from([start]);
        seen[start.index()] = true;
        let mut count = 0;

        while let Some(node) = queue.pop_front() {
            count += 1;
            for (next, _) in self.neighbors(node) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    /// Whether every node is reachable from `start`.
    pub fn is_connected_from(&self, start: NodeId) -> bool {
        self.reachable_count(start) == self.node_count
    }

    /// Direct-edge distance matrix: 0 on the diagonal, edge weight where an
    /// edge exists, infinite elsewhere.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        let n = self.node_count;
        let mut matrix = DistanceMatrix::filled(n, n, Distance::Infinite);
        for i in 0..n {
            matrix.set(i, i, Distance::ZERO);
        }
        for arc in self.arcs() {
            matrix.set(arc.from.index(), arc.to.index(), Distance::Finite(arc.weight));
        }
        matrix
    }

    fn key(&self, from: NodeId, to: NodeId) -> (NodeId, NodeId) {
        if self.directed || from < to {
            (from, to)
        } else {
            (to, from)
        }
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node,
                node_count: self.node_count,
            })
        }
    }
}

/// Serialized form of a [`Graph`]; the indexes are rebuilt on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphParts {
    node_count: usize,
    directed: bool,
    edges: Vec<Edge>,
}

#[cfg(feature = "serde")]
impl From<Graph> for GraphParts {
    fn from(graph: Graph) -> Self {
        Self {
            node_count: graph.node_count,
            directed: graph.directed,
            edges: graph.edges,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GraphParts> for Graph {
    type Error = Error;

    fn try_from(parts: GraphParts) -> Result<Self> {
        let mut graph = Graph::new(parts.node_count, parts.directed);
        for edge in parts.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }
}
