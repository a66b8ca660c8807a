//! Algotrace Input Models
//!
//! Pure data consumed by the trace-producing engines. Nothing here runs an
//! algorithm; engines only read these values.
//!
//! # Graph Model
//!
//! Nodes are the dense range `0..N`. Edges map a node pair to a signed integer
//! weight:
//! - **Directed**: the key is the ordered pair `(from, to)`
//! - **Undirected**: the key is canonicalized to `(min, max)` and the weight is
//!   symmetric
//!
//! Self-loops are rejected. Neighbor enumeration follows edge insertion order,
//! which is what every engine uses to break ties.
//!
//! # Sequence/Table Model
//!
//! Sorting engines take a plain `&[i64]`. Dynamic programming and all-pairs
//! shortest paths use [`Table`], a row-major 2-D table.
//!
//! # Distances
//!
//! [`Distance`] is either finite or infinite. Adding a weight to an infinite
//! distance stays infinite, so an unreachable intermediate can never produce
//! a spurious improvement.

mod distance;
mod error;
mod graph;
mod table;

pub use distance::Distance;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, NodeId, Weight};
pub use table::{DistanceMatrix, DpTable, Table};
