//! Path lengths which may be infinite.
use crate::Weight;
use std::fmt;
use std::ops;

/// Length of a path, or [`Distance::Infinite`] when no path is known.
///
/// Distances are totally ordered, with `Infinite` greater than every finite value, and addition
/// saturates to `Infinite`.
///
/// ```
/// use algobench_graph::Distance;
///
/// assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
/// assert_eq!(Distance::Infinite, Distance::Finite(3) + Distance::Infinite);
/// assert_eq!(Distance::Finite(5), Distance::Finite(3) + 2);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub enum Distance {
    /// A known path length.
    Finite(Weight),
    /// No path.
    #[default]
    Infinite,
}

impl Distance {
    /// Distance from a node to itself.
    pub const ZERO: Self = Self::Finite(0);

    /// Returns true if this is a known path length.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the path length, if finite.
    pub fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Infinite => None,
        }
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Self::Finite(value)
    }
}

impl From<Option<Weight>> for Distance {
    fn from(value: Option<Weight>) -> Self {
        value.map_or(Self::Infinite, Self::Finite)
    }
}

impl ops::Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => a.checked_add(b).into(),
            _ => Self::Infinite,
        }
    }
}

impl ops::Add<Weight> for Distance {
    type Output = Self;

    fn add(self, rhs: Weight) -> Self::Output {
        self + Self::Finite(rhs)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinite => f.write_str("∞"),
        }
    }
}
