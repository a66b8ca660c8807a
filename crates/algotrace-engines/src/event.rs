//! Events recorded at each step of an engine run.

use std::fmt;

use algotrace_model::NodeId;

/// Something an event points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "entity", content = "at"))]
pub enum Entity {
    /// A graph node.
    Node(NodeId),
    /// A graph edge or arc, `(from, to)`.
    Edge(NodeId, NodeId),
    /// A position in the array being sorted.
    Index(usize),
    /// A position in a sort's auxiliary buffer.
    Buffer(usize),
    /// A table cell, `(row, col)`.
    Cell(usize, usize),
    /// An inclusive array range, `(lo, hi)`.
    Range(usize, usize),
    /// A knapsack item by input position.
    Item(usize),
}

impl Entity {
    /// Edge entity from two node ids.
    pub fn edge(from: NodeId, to: NodeId) -> Self {
        Self::Edge(from, to)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Node(node) => write!(f, "node {}", node),
            Entity::Edge(from, to) => write!(f, "edge {}-{}", from, to),
            Entity::Index(index) => write!(f, "[{}]", index),
            Entity::Buffer(index) => write!(f, "buffer[{}]", index),
            Entity::Cell(row, col) => write!(f, "cell ({}, {})", row, col),
            Entity::Range(lo, hi) => write!(f, "[{}..={}]", lo, hi),
            Entity::Item(item) => write!(f, "item {}", item),
        }
    }
}

/// Outcome of a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Knapsack item taken.
    Include,
    /// Knapsack item left out.
    Exclude,
    /// Edge or neighbor taken.
    Accept,
    /// Edge closes a cycle, or a stale frontier entry.
    Reject,
    /// Quicksort pivot chosen.
    Pivot,
    /// Merge sort run boundary closed.
    Merge,
    /// Depth-first search dead end.
    Backtrack,
    /// Edge still relaxes after the last Bellman–Ford pass.
    NegativeCycle,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Decision::Include => "include",
            Decision::Exclude => "exclude",
            Decision::Accept => "accept",
            Decision::Reject => "reject",
            Decision::Pivot => "pivot",
            Decision::Merge => "merge",
            Decision::Backtrack => "backtrack",
            Decision::NegativeCycle => "negative cycle",
        };
        f.write_str(name)
    }
}

/// What happened at one instant of an engine run.
///
/// Each variant carries only the entities relevant to its kind (zero to two).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Event {
    /// Initial state before any work.
    Init,
    /// A node was dequeued, popped or settled.
    Visit { target: Entity },
    /// A comparison or relaxation attempt.
    Examine {
        target: Entity,
        against: Option<Entity>,
    },
    /// A value was written (distance relaxed, cell committed, element copied).
    Update {
        target: Entity,
        source: Option<Entity>,
    },
    /// Two array elements were exchanged.
    Swap { a: Entity, b: Entity },
    /// A decision point resolved.
    Decide { decision: Decision, target: Entity },
    /// A full pass finished (Bellman–Ford round, radix digit).
    Boundary { pass: usize },
    /// Final state.
    Complete,
}

/// The tag of an [`Event`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Init,
    Visit,
    Examine,
    Update,
    Swap,
    Decide,
    Boundary,
    Complete,
}

impl Event {
    /// The tag of this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Init => EventKind::Init,
            Event::Visit { .. } => EventKind::Visit,
            Event::Examine { .. } => EventKind::Examine,
            Event::Update { .. } => EventKind::Update,
            Event::Swap { .. } => EventKind::Swap,
            Event::Decide { .. } => EventKind::Decide,
            Event::Boundary { .. } => EventKind::Boundary,
            Event::Complete => EventKind::Complete,
        }
    }

    /// Entities this event highlights, in order.
    pub fn entities(&self) -> Vec<Entity> {
        match *self {
            Event::Init | Event::Complete | Event::Boundary { .. } => Vec::new(),
            Event::Visit { target } | Event::Decide { target, .. } => vec![target],
            Event::Examine { target, against } => std::iter::once(target).chain(against).collect(),
            Event::Update { target, source } => std::iter::once(target).chain(source).collect(),
            Event::Swap { a, b } => vec![a, b],
        }
    }

    /// The decision, for [`Event::Decide`].
    pub const fn decision(&self) -> Option<Decision> {
        match self {
            Event::Decide { decision, .. } => Some(*decision),
            _ => None,
        }
    }

    /// Whether this event moved data (update or swap).
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Event::Update { .. } | Event::Swap { .. })
    }

    pub(crate) fn visit(target: Entity) -> Self {
        Event::Visit { target }
    }

    pub(crate) fn examine(target: Entity, against: Option<Entity>) -> Self {
        Event::Examine { target, against }
    }

    pub(crate) fn update(target: Entity, source: Option<Entity>) -> Self {
        Event::Update { target, source }
    }

    pub(crate) fn swap(a: Entity, b: Entity) -> Self {
        Event::Swap { a, b }
    }

    pub(crate) fn decide(decision: Decision, target: Entity) -> Self {
        Event::Decide { decision, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Event::Init.kind(), EventKind::Init);
        assert_eq!(Event::examine(Entity::Index(0), None).kind(), EventKind::Examine);
        assert_eq!(
            Event::decide(Decision::Accept, Entity::Node(NodeId(1))).kind(),
            EventKind::Decide
        );
        assert_eq!(Event::Boundary { pass: 2 }.kind(), EventKind::Boundary);
    }

    #[test]
    fn entities_carry_zero_to_two() {
        assert!(Event::Init.entities().is_empty());
        assert_eq!(Event::visit(Entity::Node(NodeId(3))).entities().len(), 1);
        assert_eq!(
            Event::examine(Entity::Index(1), Some(Entity::Index(2))).entities(),
            vec![Entity::Index(1), Entity::Index(2)]
        );
        assert_eq!(Event::update(Entity::Cell(1, 1), None).entities(), vec![Entity::Cell(1, 1)]);
    }

    #[test]
    fn mutations() {
        assert!(Event::swap(Entity::Index(0), Entity::Index(1)).is_mutation());
        assert!(Event::update(Entity::Index(0), None).is_mutation());
        assert!(!Event::examine(Entity::Index(0), None).is_mutation());
    }

    #[test]
    fn entity_display() {
        assert_eq!(Entity::edge(NodeId(1), NodeId(4)).to_string(), "edge 1-4");
        assert_eq!(Entity::Range(2, 5).to_string(), "[2..=5]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn event_serialization_is_tagged() {
        let event = Event::decide(Decision::Reject, Entity::edge(NodeId(0), NodeId(2)));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Decide\""));
        assert!(json.contains("Reject"));

        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
