//! Travel direction, motion state, and the car's sensor record.

use std::fmt;

use crate::Floor;

// ── Direction ─────────────────────────────────────────────────────────────────

/// The car's travel direction.  There is no "idle" variant: a stationary car
/// keeps its last direction, which the direction policy uses as the default
/// when no rule fires.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The signed floor delta for one leg in this direction.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Whether the car is currently between floors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    Stopped,
    Moving,
}

// ── CarState ──────────────────────────────────────────────────────────────────

/// The car's sensor record: floors, direction, motion, and load.
///
/// A pure data container with no behavior of its own.  Exclusively owned and
/// mutated by the motor; the scheduler and the policies only ever read it.
/// `Copy` so callers can take cheap snapshots without holding any lock.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarState {
    /// The floor the car is at (or last departed while moving).
    pub current_floor: Floor,
    /// The floor the car is heading to.  Equals `current_floor` while the car
    /// has never moved.
    pub next_floor: Floor,
    pub direction: Direction,
    pub motion: Motion,
    /// Current load in mass units.
    pub weight: u32,
    /// Load at or above which outside calls are skipped.
    pub weight_limit: u32,
}

impl CarState {
    /// A stationary, empty car at `initial_floor`.
    pub fn new(initial_floor: Floor, weight_limit: u32) -> Self {
        Self {
            current_floor: initial_floor,
            next_floor: initial_floor,
            direction: Direction::Up,
            motion: Motion::Stopped,
            weight: 0,
            weight_limit,
        }
    }

    /// `true` when the car is at or above its weight limit.
    #[inline]
    pub fn is_overloaded(&self) -> bool {
        self.weight >= self.weight_limit
    }
}
