//! Algotrace Engines
//!
//! Each engine is a pure function from an input model to an [`Outcome`]: the
//! algorithm's normal result plus a [`Trace`] recording every intermediate
//! step.
//!
//! # Snapshots
//!
//! A [`Snapshot`] holds an [`Event`] (what happened and which entities it
//! concerns), an owned copy of the engine's frame at that instant, and a
//! status line. Frames are built fresh for every snapshot, so nothing an
//! engine does after recording can change a recorded frame.
//!
//! # Determinism
//!
//! Trace length and content depend only on the input. Priority queues break
//! ties by insertion order ([`StableMinQueue`]); graph neighbors and edges are
//! enumerated in insertion order.
//!
//! # Engines
//!
//! | Engine | Input | Result |
//! |---|---|---|
//! | [`bfs`], [`dfs`] | graph, start | [`TraversalResult`] |
//! | [`dijkstra`] | graph, start | [`ShortestPaths`] |
//! | [`bellman_ford`] | graph, start | [`BellmanFordResult`] |
//! | [`floyd_warshall`] | distance matrix | [`AllPairs`] |
//! | [`prim`] | graph, start | [`SpanningTree`] |
//! | [`kruskal`] | graph | [`SpanningTree`] |
//! | [`knapsack`] | items, capacity | [`KnapsackResult`] |
//! | [`bubble_sort`] .. [`radix_sort`] | `&[i64]` | sorted `Vec<i64>` |
//!
//! Precondition violations are rejected with [`Error`] before the first
//! snapshot. A negative cycle found by Bellman–Ford is a result, not an error.

mod bellman_ford;
mod dijkstra;
mod error;
mod event;
mod floyd_warshall;
mod frontier;
mod knapsack;
mod kruskal;
mod paths;
mod prim;
mod sorting;
mod spanning;
mod trace;
mod traversal;

pub use bellman_ford::{bellman_ford, BellmanFordFrame, BellmanFordResult, Phase};
pub use dijkstra::{dijkstra, DijkstraFrame};
pub use error::{Error, Result};
pub use event::{Decision, Entity, Event, EventKind};
pub use floyd_warshall::{floyd_warshall, floyd_warshall_graph, AllPairs, FloydWarshallFrame};
pub use frontier::StableMinQueue;
pub use knapsack::{knapsack, Item, KnapsackFrame, KnapsackResult};
pub use kruskal::{kruskal, KruskalFrame};
pub use paths::ShortestPaths;
pub use prim::{prim, PrimFrame};
pub use sorting::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
    ArrayFrame, SortOutcome,
};
pub use spanning::SpanningTree;
pub use trace::{Outcome, Recorder, Snapshot, Trace};
pub use traversal::{bfs, dfs, TraversalFrame, TraversalResult};

pub use algotrace_model as model;
