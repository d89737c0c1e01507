//! Count summaries.
//!
//! A [`CountSummary`] approximates the set of occurrence counts of the tracked
//! symbol over all strings matched by a sub-expression. It is a quadruple:
//!
//! - `zero_reachable`: zero occurrences can be produced through a branch that
//!   explicitly contributes zero (the empty literal, a star, or a union/concatenation
//!   of such branches);
//! - `min_count`: the smallest achievable count;
//! - `max_count`: the largest achievable count, possibly `+∞`;
//! - `period`: step of the progression `min_count + i·period`; `0` means the
//!   progression does not constrain the counts between the bounds.
//!
//! The summaries form an over-approximation. Union takes the hull of both
//! sides, concatenation adds counts, and star follows a fixed heuristic rule
//! rather than the exact closure.

use std::fmt;

use num_integer::Integer;

use crate::bound::Bound;

/// Summary of achievable occurrence counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountSummary {
    pub zero_reachable: bool,
    pub min_count: u64,
    pub max_count: Bound,
    pub period: u64,
}

impl CountSummary {
    pub fn new(zero_reachable: bool, min_count: u64, max_count: Bound, period: u64) -> Self {
        debug_assert!(Bound::Finite(min_count) <= max_count, "min_count must not exceed max_count");
        Self {
            zero_reachable,
            min_count,
            max_count,
            period,
        }
    }

    /// Summary of the empty-string literal.
    pub fn empty() -> Self {
        Self::new(true, 0, Bound::Finite(0), 0)
    }

    /// Summary of a single occurrence of the tracked symbol.
    pub fn tracked() -> Self {
        Self::new(false, 1, Bound::Finite(1), 1)
    }

    /// Summary of a single character other than the tracked symbol.
    ///
    /// Note that `zero_reachable` is `false` here even though the count is 0.
    pub fn other() -> Self {
        Self::new(false, 0, Bound::Finite(0), 0)
    }

    /// Alternation `self | other`.
    pub fn union(&self, other: &CountSummary) -> CountSummary {
        CountSummary {
            zero_reachable: self.zero_reachable || other.zero_reachable,
            min_count: self.min_count.min(other.min_count),
            max_count: self.max_count.join(&other.max_count),
            period: self.period.gcd(&other.period),
        }
    }

    /// Concatenation `self · other`.
    pub fn concat(&self, other: &CountSummary) -> CountSummary {
        let period = match (self.period, other.period) {
            (0, 0) => 0,
            (0, p) | (p, 0) => p,
            (p, q) => p.gcd(&q),
        };
        CountSummary {
            zero_reachable: self.zero_reachable && other.zero_reachable,
            min_count: self.min_count.saturating_add(other.min_count),
            max_count: self.max_count.add(&other.max_count),
            period,
        }
    }

    /// Kleene star `self*`.
    ///
    /// If the operand is zero-reachable with a zero minimum, the star is pinned
    /// to exactly zero; otherwise it is unbounded.
    pub fn star(&self) -> CountSummary {
        let max_count = if self.zero_reachable && self.min_count == 0 {
            Bound::Finite(0)
        } else {
            Bound::Infinite
        };
        let period = if self.zero_reachable { 0 } else { self.period };
        CountSummary {
            zero_reachable: true,
            min_count: 0,
            max_count,
            period,
        }
    }

    /// Membership test: is `k` an admissible count?
    ///
    /// With `period == 0`, every `k` between the bounds is admitted.
    pub fn contains(&self, k: u64) -> bool {
        if k < self.min_count {
            return false;
        }
        if !self.max_count.admits(k) {
            return false;
        }
        if self.period == 0 {
            return true;
        }
        (k - self.min_count) % self.period == 0
    }
}

impl fmt::Display for CountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{zero: {}, min: {}, max: {}, period: {}}}",
            self.zero_reachable, self.min_count, self.max_count, self.period
        )
    }
}
