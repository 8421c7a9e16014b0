//! The `Car` scheduler and its movement loop.

use std::sync::{Mutex, MutexGuard};

use lift_core::{CallRequest, CarConfig, CarState, Clock, Direction, Floor, LiftError, LiftResult};
use lift_policy::{DirectionPolicy, StopDecision, StopPolicy};
use lift_route::RouteStore;

use crate::motor::Motor;
use crate::observer::{CarObserver, PassedFloor, StoppedAtFloor};

/// Everything the movement loop and submitters contend for.  Guarded by one
/// mutex; the loop never holds it across a clock wait, so a submission
/// arriving mid-transit is fully applied before the loop re-reads the queues.
struct CarInner {
    motor: Motor,
    route: RouteStore,
    /// The scheduler's cached travel direction, re-derived by the direction
    /// policy after every submission and every completed stop.
    direction: Direction,
    /// Guards `execute_route` re-entrancy.  Set under the lock before the
    /// first suspension point, so two near-simultaneous callers cannot both
    /// observe an idle car.
    executing: bool,
}

/// One leg of travel, fixed at commit time.
#[derive(Copy, Clone)]
struct TransitStep {
    from: Floor,
    to: Floor,
    direction: Direction,
    decision: StopDecision,
}

/// A single elevator car: route queues, policies, motor, and the movement
/// loop that drives them.
///
/// `Car<D, S, C>` is parameterized over the two decision policies and the
/// clock; create one via [`CarBuilder`][crate::CarBuilder], which defaults to
/// `SweepDirection` / `WeightLimitedStop` / `WallClock`.
///
/// All methods take `&self`: share the car behind an `Arc` to submit requests
/// from other threads or from observer callbacks while a route executes.
pub struct Car<D: DirectionPolicy, S: StopPolicy, C: Clock> {
    config: CarConfig,
    direction_policy: D,
    stop_policy: S,
    clock: C,
    inner: Mutex<CarInner>,
    observers: Mutex<Vec<Box<dyn CarObserver>>>,
}

impl<D: DirectionPolicy, S: StopPolicy, C: Clock> Car<D, S, C> {
    pub(crate) fn new(
        config: CarConfig,
        direction_policy: D,
        stop_policy: S,
        clock: C,
        initial_floor: Floor,
        initial_weight: u32,
    ) -> Self {
        let mut motor = Motor::new(initial_floor, config.weight_limit);
        motor.set_weight(initial_weight);
        Self {
            config,
            direction_policy,
            stop_policy,
            clock,
            inner: Mutex::new(CarInner {
                motor,
                route: RouteStore::new(),
                direction: Direction::Up,
                executing: false,
            }),
            observers: Mutex::new(Vec::new()),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn config(&self) -> &CarConfig {
        &self.config
    }

    /// Snapshot of the sensor record.
    pub fn state(&self) -> CarState {
        *self.lock().motor.state()
    }

    pub fn current_floor(&self) -> Floor {
        self.lock().motor.state().current_floor
    }

    /// Whether a movement loop is currently running.
    pub fn is_executing(&self) -> bool {
        self.lock().executing
    }

    /// Requests waiting in the two route queues.
    pub fn pending_count(&self) -> usize {
        self.lock().route.pending_count()
    }

    /// Update the measured car load (e.g. from a load sensor).
    pub fn set_weight(&self, weight: u32) {
        self.lock().motor.set_weight(weight);
    }

    /// Register an observer for passed-floor and stopped notifications.
    ///
    /// Must not be called from inside an observer callback.
    pub fn subscribe(&self, observer: Box<dyn CarObserver>) {
        self.observers
            .lock()
            .expect("observer list lock poisoned")
            .push(observer);
    }

    /// Submit a floor request.
    ///
    /// Rejects floors outside the serviced range with
    /// [`LiftError::FloorOutOfRange`] before they reach the route store.  A
    /// request for the car's current floor is a no-op and silently
    /// discarded.  Otherwise the request is classified into a route queue
    /// and the travel direction is re-derived.
    ///
    /// Safe to call concurrently with an executing route; the request is
    /// folded into the route live.
    pub fn submit(&self, request: CallRequest) -> LiftResult<()> {
        if !self.config.serves(request.floor) {
            return Err(LiftError::FloorOutOfRange {
                floor: request.floor,
                min: self.config.min_floor,
                max: self.config.max_floor,
            });
        }

        let mut inner = self.lock();
        if request.floor == inner.motor.state().current_floor {
            return Ok(()); // the car is already here
        }

        let CarInner {
            motor,
            route,
            direction,
            ..
        } = &mut *inner;
        route.add_stop(request, motor.state());
        *direction = self.direction_policy.next_direction(
            motor.state(),
            route.stopped_queue(),
            route.upward(),
            route.downward(),
        );
        Ok(())
    }

    /// Run the movement loop until both route queues are empty.
    ///
    /// Idempotent: returns immediately if a loop is already executing, so
    /// callers may invoke it whenever they believe the car might be idle.
    /// Blocks the calling thread for the duration of the route.
    pub fn execute_route(&self) {
        {
            let mut inner = self.lock();
            if inner.executing {
                return;
            }
            inner.executing = true;
        }

        loop {
            // ── ① Commit to the next leg ──────────────────────────────────
            let step = {
                let mut inner = self.lock();
                if !inner.route.has_pending() {
                    inner.executing = false;
                    return;
                }

                let direction = inner.direction;
                let from = inner.motor.state().current_floor;
                let to = from + direction.step();
                inner.motor.begin_transit(from, to);
                inner.route.clear_stopped_queue();

                // The verdict for `to` is fixed now; requests submitted
                // during the transit cannot retroactively change it.
                let CarInner { motor, route, .. } = &mut *inner;
                let decision =
                    self.stop_policy
                        .decide(motor.state(), route.upward(), route.downward());
                if decision == StopDecision::Skip {
                    route.handle_skipped_request(motor.state());
                }

                TransitStep {
                    from,
                    to,
                    direction,
                    decision,
                }
            };

            // ── ② Passed-floor notification, ③ transit ────────────────────
            self.notify_passed_floor(PassedFloor {
                floor: step.from,
                direction: step.direction,
                at: self.clock.now(),
            });
            self.clock.wait(self.config.floor_transit());
            self.lock().motor.finish_transit();

            // ── ④ Stop ────────────────────────────────────────────────────
            if step.decision == StopDecision::Stop {
                {
                    let mut inner = self.lock();
                    let CarInner { motor, route, .. } = &mut *inner;
                    motor.stop_at(step.to);
                    route.complete_request(step.direction);
                }
                self.notify_stopped_at_floor(StoppedAtFloor {
                    floor: step.to,
                    at: self.clock.now(),
                });
                self.clock.wait(self.config.stop_dwell());

                let mut inner = self.lock();
                let CarInner {
                    motor,
                    route,
                    direction,
                    ..
                } = &mut *inner;
                *direction = self.direction_policy.next_direction(
                    motor.state(),
                    route.stopped_queue(),
                    route.upward(),
                    route.downward(),
                );
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn lock(&self) -> MutexGuard<'_, CarInner> {
        self.inner.lock().expect("car state lock poisoned")
    }

    fn notify_passed_floor(&self, event: PassedFloor) {
        let mut observers = self.observers.lock().expect("observer list lock poisoned");
        for observer in observers.iter_mut() {
            observer.on_passed_floor(&event);
        }
    }

    fn notify_stopped_at_floor(&self, event: StoppedAtFloor) {
        let mut observers = self.observers.lock().expect("observer list lock poisoned");
        for observer in observers.iter_mut() {
            observer.on_stopped_at_floor(&event);
        }
    }
}
