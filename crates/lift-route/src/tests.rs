//! Unit tests for the route store.

use lift_core::{CallRequest, CarState, Direction, Floor, Motion};

use crate::RouteStore;

fn stopped_at(floor: i32) -> CarState {
    CarState::new(Floor(floor), 2_500)
}

fn moving(floor: i32, direction: Direction) -> CarState {
    let mut state = CarState::new(Floor(floor), 2_500);
    state.direction = direction;
    state.motion = Motion::Moving;
    state.next_floor = Floor(floor) + direction.step();
    state
}

fn floors(route: &[CallRequest]) -> Vec<i32> {
    route.iter().map(|r| r.floor.0).collect()
}

#[cfg(test)]
mod stationary_classification {
    use super::*;

    #[test]
    fn above_goes_upward_below_goes_downward() {
        let mut store = RouteStore::new();
        let state = stopped_at(5);
        store.add_stop(CallRequest::inside(Floor(8)), &state);
        store.add_stop(CallRequest::inside(Floor(2)), &state);
        assert_eq!(floors(store.upward()), [8]);
        assert_eq!(floors(store.downward()), [2]);
    }

    #[test]
    fn current_floor_is_discarded() {
        let mut store = RouteStore::new();
        store.add_stop(CallRequest::inside(Floor(5)), &stopped_at(5));
        assert!(!store.has_pending());
        assert!(store.stopped_queue().is_empty());
    }

    #[test]
    fn stationary_queue_records_submission_order() {
        let mut store = RouteStore::new();
        let state = stopped_at(5);
        store.add_stop(CallRequest::inside(Floor(6)), &state);
        store.add_stop(CallRequest::inside(Floor(1)), &state);
        store.add_stop(CallRequest::inside(Floor(2)), &state);
        assert_eq!(floors(store.stopped_queue()), [6, 1, 2]);
        // routes stay sorted regardless
        assert_eq!(floors(store.downward()), [1, 2]);
    }
}

#[cfg(test)]
mod moving_classification {
    use super::*;

    #[test]
    fn ahead_with_buffer_stays_in_direction() {
        let mut store = RouteStore::new();
        store.add_stop(CallRequest::inside(Floor(7)), &moving(5, Direction::Up));
        assert_eq!(floors(store.upward()), [7]);

        store.add_stop(CallRequest::inside(Floor(3)), &moving(5, Direction::Down));
        assert_eq!(floors(store.downward()), [3]);
    }

    #[test]
    fn floor_immediately_ahead_is_deferred_to_return_trip() {
        // Travelling up at 5, a call for 6 cannot be honored on this leg.
        let mut store = RouteStore::new();
        store.add_stop(CallRequest::inside(Floor(6)), &moving(5, Direction::Up));
        assert_eq!(floors(store.downward()), [6]);

        let mut store = RouteStore::new();
        store.add_stop(CallRequest::inside(Floor(4)), &moving(5, Direction::Down));
        assert_eq!(floors(store.upward()), [4]);
    }

    #[test]
    fn behind_the_car_goes_to_opposite_queue() {
        let mut store = RouteStore::new();
        store.add_stop(CallRequest::inside(Floor(1)), &moving(6, Direction::Up));
        assert_eq!(floors(store.downward()), [1]);
    }

    #[test]
    fn moving_submissions_do_not_touch_stationary_queue() {
        let mut store = RouteStore::new();
        store.add_stop(CallRequest::inside(Floor(9)), &moving(5, Direction::Up));
        assert!(store.stopped_queue().is_empty());
    }
}

#[cfg(test)]
mod sorted_insertion {
    use super::*;

    #[test]
    fn routes_stay_sorted_under_arbitrary_insertion() {
        let mut store = RouteStore::new();
        let state = stopped_at(5);
        for floor in [9, 6, 10, 8, 7] {
            store.add_stop(CallRequest::inside(Floor(floor)), &state);
        }
        assert_eq!(floors(store.upward()), [6, 7, 8, 9, 10]);

        for floor in [2, 4, 1, 3] {
            store.add_stop(CallRequest::inside(Floor(floor)), &state);
        }
        assert_eq!(floors(store.downward()), [1, 2, 3, 4]);
    }

    #[test]
    fn duplicate_floors_coexist() {
        // Inside + outside call for the same floor are distinct requests.
        let mut store = RouteStore::new();
        let state = stopped_at(1);
        store.add_stop(CallRequest::inside(Floor(5)), &state);
        store.add_stop(CallRequest::outside(Floor(5)), &state);
        assert_eq!(floors(store.upward()), [5, 5]);
    }
}

#[cfg(test)]
mod completion {
    use super::*;

    #[test]
    fn upward_pops_front_downward_pops_back() {
        let mut store = RouteStore::new();
        let state = stopped_at(5);
        for floor in [6, 9, 8] {
            store.add_stop(CallRequest::inside(Floor(floor)), &state);
        }
        for floor in [2, 4, 1] {
            store.add_stop(CallRequest::inside(Floor(floor)), &state);
        }

        assert_eq!(store.complete_request(Direction::Up).floor, Floor(6));
        assert_eq!(store.complete_request(Direction::Down).floor, Floor(4));
        assert_eq!(floors(store.upward()), [8, 9]);
        assert_eq!(floors(store.downward()), [1, 2]);
    }

    #[test]
    #[should_panic(expected = "empty upward route")]
    fn completing_empty_upward_route_is_fatal() {
        RouteStore::new().complete_request(Direction::Up);
    }

    #[test]
    #[should_panic(expected = "empty downward route")]
    fn completing_empty_downward_route_is_fatal() {
        RouteStore::new().complete_request(Direction::Down);
    }
}

#[cfg(test)]
mod skip_rerouting {
    use super::*;

    #[test]
    fn skipped_upward_request_moves_to_downward_queue() {
        let mut store = RouteStore::new();
        store.add_stop(CallRequest::outside(Floor(6)), &stopped_at(2));
        store.add_stop(CallRequest::inside(Floor(9)), &stopped_at(2));

        store.handle_skipped_request(&moving(5, Direction::Up));

        assert_eq!(floors(store.upward()), [9]);
        assert_eq!(floors(store.downward()), [6]);
        assert_eq!(store.pending_count(), 2);
    }

    #[test]
    fn skipped_downward_request_moves_to_upward_queue_sorted() {
        let mut store = RouteStore::new();
        let state = stopped_at(5);
        store.add_stop(CallRequest::outside(Floor(4)), &state);
        store.add_stop(CallRequest::inside(Floor(2)), &state);
        store.add_stop(CallRequest::inside(Floor(10)), &state);

        // Next-down is 4; skipping it must land between nothing and 10.
        store.handle_skipped_request(&moving(5, Direction::Down));

        assert_eq!(floors(store.downward()), [2]);
        assert_eq!(floors(store.upward()), [4, 10]);
    }
}

#[cfg(test)]
mod stationary_queue_lifecycle {
    use super::*;

    #[test]
    fn clear_empties_only_the_stationary_queue() {
        let mut store = RouteStore::new();
        let state = stopped_at(5);
        store.add_stop(CallRequest::inside(Floor(7)), &state);
        store.add_stop(CallRequest::inside(Floor(3)), &state);

        store.clear_stopped_queue();

        assert!(store.stopped_queue().is_empty());
        assert_eq!(store.pending_count(), 2);
    }
}
