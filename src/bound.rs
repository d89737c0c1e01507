//! Upper bounds on occurrence counts.
//!
//! A count bound is either a finite number or `+∞`. The infinite bound is a
//! distinguished value, not a large number: it absorbs addition and dominates
//! every finite bound.

use std::cmp::Ordering;
use std::fmt;

/// Bound of a count: finite value or +∞.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Finite(u64),
    Infinite,
}

impl Bound {
    pub fn as_finite(&self) -> Option<u64> {
        match self {
            Bound::Finite(n) => Some(*n),
            Bound::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Bound::Infinite)
    }

    /// Sum of two bounds, with `+∞` absorbing.
    ///
    /// Finite sums saturate at `u64::MAX` rather than wrap.
    pub fn add(&self, other: &Bound) -> Bound {
        match (self, other) {
            (Bound::Finite(a), Bound::Finite(b)) => Bound::Finite(a.saturating_add(*b)),
            _ => Bound::Infinite,
        }
    }

    /// The larger of two bounds (`+∞` dominates).
    pub fn join(&self, other: &Bound) -> Bound {
        std::cmp::max(*self, *other)
    }

    /// Returns `true` if `value` does not exceed this bound.
    pub fn admits(&self, value: u64) -> bool {
        match self {
            Bound::Finite(n) => value <= *n,
            Bound::Infinite => true,
        }
    }
}

impl From<u64> for Bound {
    fn from(value: u64) -> Self {
        Bound::Finite(value)
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
            (Bound::Finite(_), Bound::Infinite) => Ordering::Less,
            (Bound::Infinite, Bound::Finite(_)) => Ordering::Greater,
            (Bound::Infinite, Bound::Infinite) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite(n) => write!(f, "{}", n),
            Bound::Infinite => write!(f, "+∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_order() {
        assert!(Bound::Finite(0) < Bound::Finite(1));
        assert!(Bound::Finite(u64::MAX) < Bound::Infinite);
        assert_eq!(Bound::Infinite.cmp(&Bound::Infinite), Ordering::Equal);
    }

    #[test]
    fn test_bound_add() {
        assert_eq!(Bound::Finite(2).add(&Bound::Finite(3)), Bound::Finite(5));
        assert_eq!(Bound::Finite(2).add(&Bound::Infinite), Bound::Infinite);
        assert_eq!(Bound::Infinite.add(&Bound::Finite(7)), Bound::Infinite);
        // Saturates instead of wrapping around
        assert_eq!(Bound::Finite(u64::MAX).add(&Bound::Finite(1)), Bound::Finite(u64::MAX));
    }

    #[test]
    fn test_bound_join() {
        assert_eq!(Bound::Finite(2).join(&Bound::Finite(9)), Bound::Finite(9));
        assert_eq!(Bound::Finite(2).join(&Bound::Infinite), Bound::Infinite);
    }

    #[test]
    fn test_bound_admits() {
        assert!(Bound::Finite(3).admits(3));
        assert!(!Bound::Finite(3).admits(4));
        assert!(Bound::Infinite.admits(u64::MAX));
    }

    #[test]
    fn test_bound_display() {
        assert_eq!(Bound::Finite(42).to_string(), "42");
        assert_eq!(Bound::Infinite.to_string(), "+∞");
    }
}
