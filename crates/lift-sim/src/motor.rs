//! The motor: a synchronous state machine over the car's sensor record.
//!
//! Timing lives in the scheduler (which owns the [`Clock`][lift_core::Clock])
//! so the motor's transitions stay pure and testable: `begin_transit` /
//! `finish_transit` bracket one floor traversal, `stop_at` ends a leg.

use lift_core::{CarState, Direction, Floor, Motion};

/// Drives the car between adjacent floors.  Sole owner of the sensor state;
/// everything else reads it through [`state`][Motor::state].
#[derive(Debug)]
pub struct Motor {
    state: CarState,
}

impl Motor {
    pub fn new(initial_floor: Floor, weight_limit: u32) -> Self {
        Self {
            state: CarState::new(initial_floor, weight_limit),
        }
    }

    /// Read-only view of the sensor record.
    #[inline]
    pub fn state(&self) -> &CarState {
        &self.state
    }

    /// Commit to traversing from `from` to the adjacent floor `to`.
    ///
    /// Direction is derived from the sign of the move; the car is Moving and
    /// `next_floor` points at `to` until [`finish_transit`][Self::finish_transit].
    pub fn begin_transit(&mut self, from: Floor, to: Floor) {
        let direction = if to > from {
            Direction::Up
        } else {
            Direction::Down
        };
        self.state.current_floor = from;
        self.state.next_floor = to;
        self.state.direction = direction;
        self.state.motion = Motion::Moving;
    }

    /// Arrive at the floor committed to by `begin_transit`: the car is now
    /// there and `next_floor` advances one step further in the same
    /// direction.  Motion stays Moving until the scheduler decides to stop.
    pub fn finish_transit(&mut self) {
        self.state.current_floor = self.state.next_floor;
        self.state.next_floor = self.state.current_floor + self.state.direction.step();
    }

    /// Halt at `floor`.
    pub fn stop_at(&mut self, floor: Floor) {
        self.state.current_floor = floor;
        self.state.motion = Motion::Stopped;
    }

    /// Update the measured car load.
    pub fn set_weight(&mut self, weight: u32) {
        self.state.weight = weight;
    }
}
