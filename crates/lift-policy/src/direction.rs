//! Direction selection.

use lift_core::{CallRequest, CarState, Direction};

/// Pluggable direction selection.
///
/// Called by the scheduler after every submission and after every completed
/// stop.  Implementations must be pure: same inputs, same answer.
pub trait DirectionPolicy: Send + Sync {
    /// Choose the car's next travel direction.
    ///
    /// `stopped_queue` holds the requests received since the car last became
    /// stationary, in submission order — an advisory tie-break signal, never
    /// authoritative.
    fn next_direction(
        &self,
        state: &CarState,
        stopped_queue: &[CallRequest],
        upward: &[CallRequest],
        downward: &[CallRequest],
    ) -> Direction;
}

/// Finish one direction before reversing.
///
/// - A single non-empty route wins outright.
/// - Mid-route (the combined routes have outgrown the stationary queue) the
///   current direction is kept — no reversing halfway through a leg.
/// - Freshly stopped with work on both sides: head toward the nearer
///   request; on an exact distance tie, toward the first-submitted one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SweepDirection;

impl DirectionPolicy for SweepDirection {
    fn next_direction(
        &self,
        state: &CarState,
        stopped_queue: &[CallRequest],
        upward: &[CallRequest],
        downward: &[CallRequest],
    ) -> Direction {
        if !upward.is_empty() && downward.is_empty() {
            return Direction::Up;
        }
        if !downward.is_empty() && upward.is_empty() {
            return Direction::Down;
        }

        if !stopped_queue.is_empty() {
            // Already committed to a leg: the routes have accumulated more
            // requests than arrived during this stop.
            if upward.len() + downward.len() > stopped_queue.len() {
                return state.direction;
            }

            if let (Some(up_next), Some(down_next)) = (upward.first(), downward.last()) {
                let up_dist = up_next.floor - state.current_floor;
                let down_dist = state.current_floor - down_next.floor;
                if up_dist == down_dist {
                    // First-submitted request wins the tie.
                    return if stopped_queue[0].floor > state.current_floor {
                        Direction::Up
                    } else {
                        Direction::Down
                    };
                }
                return if up_dist > down_dist {
                    Direction::Down
                } else {
                    Direction::Up
                };
            }
        }

        // Nothing pending (or no signal to go on): keep the last direction.
        state.direction
    }
}
