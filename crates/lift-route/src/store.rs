//! `RouteStore` — classification, completion, and skip re-routing.

use std::cmp::Ordering;

use lift_core::{CallRequest, CarState, Direction, Motion};

/// The car's pending requests, partitioned by service direction.
///
/// # Invariants
///
/// - A request lives in exactly one of the two route queues, never both.
/// - Both queues stay sorted ascending by floor (binary-search insertion).
/// - No request for the car's current floor is ever queued.
/// - The stationary queue is a subset of the union of the two routes at the
///   moment it was populated; it is advisory only.
#[derive(Debug, Default)]
pub struct RouteStore {
    upward: Vec<CallRequest>,
    downward: Vec<CallRequest>,
    stopped_queue: Vec<CallRequest>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Requests served while travelling up, sorted ascending by floor.
    pub fn upward(&self) -> &[CallRequest] {
        &self.upward
    }

    /// Requests served while travelling down, sorted ascending by floor.
    /// The *last* element is the next one served.
    pub fn downward(&self) -> &[CallRequest] {
        &self.downward
    }

    /// Requests received since the car last became stationary, in submission
    /// order.  Tie-break signal for the direction policy, nothing more.
    pub fn stopped_queue(&self) -> &[CallRequest] {
        &self.stopped_queue
    }

    pub fn has_pending(&self) -> bool {
        !self.upward.is_empty() || !self.downward.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.upward.len() + self.downward.len()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Classify `request` into a route queue based on the car's state.
    ///
    /// Stationary car: the request also joins the stationary queue, then
    /// routes by simple floor comparison; a request for the current floor is
    /// a no-op and discarded.
    ///
    /// Moving car: routes by direction with a one-floor buffer — a request
    /// for the floor immediately ahead cannot be honored on this leg (the
    /// stop decision for it is already made), so it is deferred to the
    /// return trip by queueing it in the opposite direction.
    pub fn add_stop(&mut self, request: CallRequest, state: &CarState) {
        match state.motion {
            Motion::Stopped => match request.floor.cmp(&state.current_floor) {
                Ordering::Greater => {
                    self.stopped_queue.push(request);
                    insert_sorted(&mut self.upward, request);
                }
                Ordering::Less => {
                    self.stopped_queue.push(request);
                    insert_sorted(&mut self.downward, request);
                }
                Ordering::Equal => {} // the car is already here
            },
            Motion::Moving => match state.direction {
                Direction::Up => {
                    if request.floor - state.current_floor > 1 {
                        insert_sorted(&mut self.upward, request);
                    } else {
                        insert_sorted(&mut self.downward, request);
                    }
                }
                Direction::Down => {
                    if state.current_floor - request.floor > 1 {
                        insert_sorted(&mut self.downward, request);
                    } else {
                        insert_sorted(&mut self.upward, request);
                    }
                }
            },
        }
    }

    /// Pop and return the request served next in `direction`: the front of
    /// the upward queue, or the back of the downward queue.
    ///
    /// # Panics
    ///
    /// Panics if that queue is empty.  The scheduler only completes a request
    /// after the stop policy matched one, so an empty queue here means the
    /// policies and the store have desynchronized — a fatal logic error, not
    /// a recoverable condition.
    pub fn complete_request(&mut self, direction: Direction) -> CallRequest {
        match direction {
            Direction::Up => {
                assert!(
                    !self.upward.is_empty(),
                    "completed a request on an empty upward route"
                );
                self.upward.remove(0)
            }
            Direction::Down => self
                .downward
                .pop()
                .expect("completed a request on an empty downward route"),
        }
    }

    /// Re-route the request the car is about to skip: pop it as if completed
    /// in `state.direction` and re-insert it, sorted, into the opposite
    /// queue so it is served on the return trip.
    ///
    /// # Panics
    ///
    /// Panics if the queue for `state.direction` is empty, as in
    /// [`complete_request`][Self::complete_request].
    pub fn handle_skipped_request(&mut self, state: &CarState) {
        let request = self.complete_request(state.direction);
        match state.direction {
            Direction::Up => insert_sorted(&mut self.downward, request),
            Direction::Down => insert_sorted(&mut self.upward, request),
        }
    }

    /// Forget the stationary-queue contents.  Called on every departure.
    pub fn clear_stopped_queue(&mut self) {
        self.stopped_queue.clear();
    }
}

/// Order-preserving insert by floor.  O(log n) search + O(n) shift, which is
/// fine for a queue bounded by the building's floor count.
fn insert_sorted(route: &mut Vec<CallRequest>, request: CallRequest) {
    let index = match route.binary_search_by_key(&request.floor, |r| r.floor) {
        Ok(i) | Err(i) => i,
    };
    route.insert(index, request);
}
