//! Car observer trait for activity reporting.

use std::time::SystemTime;

use lift_core::{Direction, Floor};

/// Fired once per floor the car enters during transit, at the moment the car
/// commits to leaving `floor` (the start of the traversal).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PassedFloor {
    /// The floor being left behind.
    pub floor: Floor,
    pub direction: Direction,
    pub at: SystemTime,
}

/// Fired once per completed stop, after the served request has been removed
/// from its route queue and before the dwell wait begins.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct StoppedAtFloor {
    pub floor: Floor,
    pub at: SystemTime,
}

/// Callbacks invoked synchronously by [`Car`][crate::Car] at the two
/// notification points of the movement loop.
///
/// Both methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks run outside the car's state
/// lock, so an observer may call [`submit`][crate::Car::submit],
/// [`set_weight`][crate::Car::set_weight], or even
/// [`execute_route`][crate::Car::execute_route] (a no-op while executing),
/// but never [`subscribe`][crate::Car::subscribe], which would deadlock on
/// the observer list.
///
/// # Example — stop recorder
///
/// ```rust,ignore
/// struct StopRecorder(Arc<Mutex<Vec<Floor>>>);
///
/// impl CarObserver for StopRecorder {
///     fn on_stopped_at_floor(&mut self, event: &StoppedAtFloor) {
///         self.0.lock().unwrap().push(event.floor);
///     }
/// }
/// ```
pub trait CarObserver: Send {
    fn on_passed_floor(&mut self, _event: &PassedFloor) {}

    fn on_stopped_at_floor(&mut self, _event: &StoppedAtFloor) {}
}

/// A [`CarObserver`] that does nothing.
pub struct NoopObserver;

impl CarObserver for NoopObserver {}
