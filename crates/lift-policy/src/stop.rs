//! Per-floor stop/skip decision.

use lift_core::{CallOrigin, CallRequest, CarState, Direction};

/// The verdict for the floor the car is approaching.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StopDecision {
    /// Serve the request at the upcoming floor.
    Stop,
    /// No request for the upcoming floor; keep moving.
    NoStop,
    /// A request exists but cannot be honored; re-route it and keep moving.
    Skip,
}

/// Pluggable stop decision, evaluated once per traversal as the car commits
/// to a leg.  Implementations must be pure.
pub trait StopPolicy: Send + Sync {
    fn decide(
        &self,
        state: &CarState,
        upward: &[CallRequest],
        downward: &[CallRequest],
    ) -> StopDecision;
}

/// Stop for the next request in the direction of travel, unless the car is
/// at or over its weight limit and the request came from a landing — an
/// overloaded car favors letting its occupants off, so inside requests are
/// always honored and outside ones are skipped until the load clears.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightLimitedStop;

impl StopPolicy for WeightLimitedStop {
    fn decide(
        &self,
        state: &CarState,
        upward: &[CallRequest],
        downward: &[CallRequest],
    ) -> StopDecision {
        let candidate = match state.direction {
            Direction::Up => upward.first().filter(|r| r.floor == state.next_floor),
            Direction::Down => downward.last().filter(|r| r.floor == state.next_floor),
        };

        let Some(request) = candidate else {
            return StopDecision::NoStop;
        };

        if state.is_overloaded() && request.origin == CallOrigin::Outside {
            return StopDecision::Skip;
        }

        StopDecision::Stop
    }
}
