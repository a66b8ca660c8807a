//! Every engine by name, run on the built-in samples.

use std::fmt;
use std::str::FromStr;

use algotrace_engines::{
    AllPairs, BellmanFordFrame, BellmanFordResult, DijkstraFrame, EventKind, FloydWarshallFrame,
    KnapsackFrame, KnapsackResult, KruskalFrame, Outcome, PrimFrame, Recorder, ShortestPaths,
    SortOutcome, SpanningTree, Trace, TraversalFrame, TraversalResult,
};
use algotrace_model::NodeId;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::samples;

/// An engine the catalog can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Prim,
    Kruskal,
    Knapsack,
    Bubble,
    Insertion,
    Selection,
    Heap,
    Quick,
    Merge,
    Radix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 15] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::FloydWarshall,
        Algorithm::Prim,
        Algorithm::Kruskal,
        Algorithm::Knapsack,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Radix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::FloydWarshall => "floyd-warshall",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Knapsack => "knapsack",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Radix => "radix",
        }
    }

    /// Whether the engine takes a start node.
    pub fn uses_start(&self) -> bool {
        matches!(
            self,
            Algorithm::Bfs
                | Algorithm::Dfs
                | Algorithm::Dijkstra
                | Algorithm::BellmanFord
                | Algorithm::Prim
        )
    }

    /// Run the engine on its built-in sample input.
    pub fn run(&self, start: NodeId) -> Result<Run> {
        use algotrace_engines as engines;

        let run = match self {
            Algorithm::Bfs => Run::Traversal(engines::bfs(
                &samples::weighted_graph().map_err(engines::Error::from)?,
                start,
            )?),
            Algorithm::Dfs => Run::Traversal(engines::dfs(
                &samples::weighted_graph().map_err(engines::Error::from)?,
                start,
            )?),
            Algorithm::Dijkstra => Run::Dijkstra(engines::dijkstra(
                &samples::weighted_graph().map_err(engines::Error::from)?,
                start,
            )?),
            Algorithm::BellmanFord => Run::BellmanFord(engines::bellman_ford(
                &samples::signed_digraph().map_err(engines::Error::from)?,
                start,
            )?),
            Algorithm::FloydWarshall => Run::FloydWarshall(engines::floyd_warshall_graph(
                &samples::small_digraph().map_err(engines::Error::from)?,
            )?),
            Algorithm::Prim => Run::Prim(engines::prim(
                &samples::weighted_graph().map_err(engines::Error::from)?,
                start,
            )?),
            Algorithm::Kruskal => Run::Kruskal(engines::kruskal(
                &samples::weighted_graph().map_err(engines::Error::from)?,
            )?),
            Algorithm::Knapsack => {
                let (items, capacity) = samples::knapsack_items();
                Run::Knapsack(engines::knapsack(&items, capacity)?)
            }
            Algorithm::Bubble => Run::Sort(engines::bubble_sort(&samples::values())),
            Algorithm::Insertion => Run::Sort(engines::insertion_sort(&samples::values())),
            Algorithm::Selection => Run::Sort(engines::selection_sort(&samples::values())),
            Algorithm::Heap => Run::Sort(engines::heap_sort(&samples::values())),
            Algorithm::Quick => Run::Sort(engines::quick_sort(&samples::values())),
            Algorithm::Merge => Run::Sort(engines::merge_sort(&samples::values())),
            Algorithm::Radix => Run::Sort(engines::radix_sort(&samples::values())?),
        };
        tracing::info!(
            algorithm = self.name(),
            frames = run.frames(),
            "engine run complete"
        );
        Ok(run)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// The outcome of any engine.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "engine", content = "outcome", rename_all = "snake_case")]
pub enum Run {
    Traversal(Outcome<TraversalResult, TraversalFrame>),
    Dijkstra(Outcome<ShortestPaths, DijkstraFrame>),
    BellmanFord(Outcome<BellmanFordResult, BellmanFordFrame>),
    FloydWarshall(Outcome<AllPairs, FloydWarshallFrame>),
    Prim(Outcome<SpanningTree, PrimFrame>),
    Kruskal(Outcome<SpanningTree, KruskalFrame>),
    Knapsack(Outcome<KnapsackResult, KnapsackFrame>),
    Sort(SortOutcome),
}

/// Copy a trace, replacing each frame with its JSON form.
fn erase<R, S: Serialize>(outcome: &Outcome<R, S>) -> Result<Trace<serde_json::Value>> {
    let mut recorder = Recorder::new();
    for snapshot in &outcome.trace {
        recorder.record(
            snapshot.event,
            serde_json::to_value(&snapshot.state)?,
            snapshot.status.clone(),
        );
    }
    Ok(recorder.finish())
}

macro_rules! each_outcome {
    ($run:expr, $outcome:ident => $body:expr) => {
        match $run {
            Run::Traversal($outcome) => $body,
            Run::Dijkstra($outcome) => $body,
            Run::BellmanFord($outcome) => $body,
            Run::FloydWarshall($outcome) => $body,
            Run::Prim($outcome) => $body,
            Run::Kruskal($outcome) => $body,
            Run::Knapsack($outcome) => $body,
            Run::Sort($outcome) => $body,
        }
    };
}

impl Run {
    /// Number of recorded frames.
    pub fn frames(&self) -> usize {
        each_outcome!(self, outcome => outcome.trace.len())
    }

    /// Event tags in recording order.
    pub fn kinds(&self) -> Vec<EventKind> {
        each_outcome!(self, outcome => outcome.trace.kinds())
    }

    /// Status line of every frame.
    pub fn statuses(&self) -> Vec<&str> {
        each_outcome!(self, outcome => outcome.trace.iter().map(|s| s.status.as_str()).collect())
    }

    /// The trace with frames as JSON values, for a frame-type-agnostic player.
    pub fn erased_trace(&self) -> Result<Trace<serde_json::Value>> {
        each_outcome!(self, outcome => erase(outcome))
    }

    /// The engine result alone, as JSON.
    pub fn result_json(&self) -> Result<serde_json::Value> {
        Ok(each_outcome!(self, outcome => serde_json::to_value(&outcome.result)?))
    }
}
