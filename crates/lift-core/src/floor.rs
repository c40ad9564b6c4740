//! Building floors and travel directions.

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A building floor index.  Floor 0 is the ground floor; valid floors for a
/// run are `0..num_floors` per [`SimConfig`][crate::SimConfig].
///
/// Signed so that distance and direction arithmetic never needs casts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Direction of travel from `self` toward `other`
    /// ([`Direction::Idle`] when equal).
    #[inline]
    pub fn direction_to(self, other: Floor) -> Direction {
        match self.0.cmp(&other.0) {
            std::cmp::Ordering::Less => Direction::Up,
            std::cmp::Ordering::Equal => Direction::Idle,
            std::cmp::Ordering::Greater => Direction::Down,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Direction an elevator is committed to, or a passenger wants to travel in.
///
/// `Idle` is only meaningful for elevators (parked / undecided); a passenger's
/// direction is always `Up` or `Down` because origin and destination are
/// distinct by construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

impl Direction {
    /// `true` for `Up` and `Down`, `false` for `Idle`.
    #[inline]
    pub fn is_directed(self) -> bool {
        self != Direction::Idle
    }

    /// The conventional −1 / 0 / +1 encoding.
    #[inline]
    pub fn as_i32(self) -> i32 {
        match self {
            Direction::Down => -1,
            Direction::Idle => 0,
            Direction::Up => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Down => "down",
            Direction::Idle => "idle",
            Direction::Up => "up",
        };
        f.write_str(s)
    }
}
