//! Tentative shortest-path distances.

use std::cmp::Ordering;
use std::fmt;

use crate::graph::Weight;

/// A path length that may be unreachable.
///
/// Ordering places every finite value below [`Distance::Infinite`], so the
/// derived `Ord` gives the comparison every shortest-path engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    /// A known path length.
    Finite(Weight),
    /// No path discovered (yet).
    Infinite,
}

impl Distance {
    /// The zero distance of a start node.
    pub const ZERO: Self = Self::Finite(0);

    /// Whether a path is known.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The finite value, if any.
    #[inline]
    pub const fn finite(&self) -> Option<Weight> {
        match self {
            Self::Finite(value) => Some(*value),
            Self::Infinite => None,
        }
    }

    /// Extend this distance by an edge weight. Infinite stays infinite.
    #[inline]
    pub fn add_weight(self, weight: Weight) -> Self {
        self + Distance::Finite(weight)
    }

    /// Whether `self` is strictly shorter than `other`.
    #[inline]
    pub fn improves_on(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::Infinite
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Self::Finite(value)
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    /// "infinite + finite" and "infinite + infinite" are both infinite.
    #[inline]
    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.saturating_add(b)),
            _ => Self::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{}", value),
            Self::Infinite => write!(f, "∞"),
        }
    }
}
