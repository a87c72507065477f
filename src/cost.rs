// src/cost.rs
//! Tagged cost values for distance-table cells.

use std::fmt;

/// A distance-table cell value.
///
/// `Unset` means "no information" and `Infinite` means "known
/// unreachable" -- distinct states, never conflated. Relaxation skips
/// `Unset` cells entirely; `Infinite` cells keep being recomputed but
/// are never selected as a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cost {
    /// No via path considered yet (input sentinel `-1`).
    Unset,
    /// Known unreachable.
    Infinite,
    /// A concrete route cost.
    Finite(u32),
}

impl Cost {
    #[must_use]
    pub fn is_unset(self) -> bool {
        matches!(self, Cost::Unset)
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub fn finite(self) -> Option<u32> {
        match self {
            Cost::Finite(c) => Some(c),
            Cost::Unset | Cost::Infinite => None,
        }
    }
}

impl fmt::Display for Cost {
    /// Renders as a table cell: `-` for no information, `INF` for
    /// unreachable, the integer otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Unset => write!(f, "-"),
            Cost::Infinite => write!(f, "INF"),
            Cost::Finite(c) => write!(f, "{c}"),
        }
    }
}
