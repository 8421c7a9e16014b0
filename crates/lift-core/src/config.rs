//! Car configuration constants.

use std::time::Duration;

use crate::Floor;

/// Tunable constants for one car.
///
/// Typically constructed via `Default` and adjusted field-by-field; an
/// application crate may also load it from a TOML/JSON file with the `serde`
/// feature enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarConfig {
    /// Time to travel between two adjacent floors.
    pub floor_transit_ms: u64,
    /// Dwell time at a stop (doors + passenger transfer).
    pub stop_dwell_ms: u64,
    /// Load (mass units) at or above which outside calls are skipped.
    pub weight_limit: u32,
    /// Lowest serviced floor, inclusive.
    pub min_floor: Floor,
    /// Highest serviced floor, inclusive.
    pub max_floor: Floor,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            floor_transit_ms: 3_000,
            stop_dwell_ms: 1_000,
            weight_limit: 2_500,
            min_floor: Floor(1),
            max_floor: Floor(10),
        }
    }
}

impl CarConfig {
    /// Whether `floor` is inside the serviced range.
    #[inline]
    pub fn serves(&self, floor: Floor) -> bool {
        self.min_floor <= floor && floor <= self.max_floor
    }

    #[inline]
    pub fn floor_transit(&self) -> Duration {
        Duration::from_millis(self.floor_transit_ms)
    }

    #[inline]
    pub fn stop_dwell(&self) -> Duration {
        Duration::from_millis(self.stop_dwell_ms)
    }
}
