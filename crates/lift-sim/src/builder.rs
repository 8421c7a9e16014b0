//! Fluent builder for constructing a [`Car`].

use lift_core::{CarConfig, Clock, Floor, LiftError, LiftResult, WallClock};
use lift_policy::{DirectionPolicy, StopPolicy, SweepDirection, WeightLimitedStop};

use crate::Car;

/// Fluent builder for [`Car<D, S, C>`].
///
/// # Required inputs
///
/// - [`CarConfig`] — durations, weight limit, serviced floor range.
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default             |
/// |-----------------------|---------------------|
/// | `.direction_policy(p)`| `SweepDirection`    |
/// | `.stop_policy(p)`     | `WeightLimitedStop` |
/// | `.clock(c)`           | `WallClock`         |
/// | `.initial_floor(f)`   | `config.min_floor`  |
/// | `.initial_weight(w)`  | `0`                 |
///
/// # Example
///
/// ```rust,ignore
/// let car = CarBuilder::new(CarConfig::default())
///     .initial_floor(Floor(5))
///     .clock(ManualClock::new())
///     .build()?;
/// ```
pub struct CarBuilder<D = SweepDirection, S = WeightLimitedStop, C = WallClock>
where
    D: DirectionPolicy,
    S: StopPolicy,
    C: Clock,
{
    config: CarConfig,
    direction_policy: D,
    stop_policy: S,
    clock: C,
    initial_floor: Option<Floor>,
    initial_weight: u32,
}

impl CarBuilder {
    /// Create a builder with the default policies and the wall clock.
    pub fn new(config: CarConfig) -> Self {
        Self {
            config,
            direction_policy: SweepDirection,
            stop_policy: WeightLimitedStop,
            clock: WallClock,
            initial_floor: None,
            initial_weight: 0,
        }
    }
}

impl<D: DirectionPolicy, S: StopPolicy, C: Clock> CarBuilder<D, S, C> {
    /// Swap in a different direction-selection policy.
    pub fn direction_policy<D2: DirectionPolicy>(self, policy: D2) -> CarBuilder<D2, S, C> {
        CarBuilder {
            config: self.config,
            direction_policy: policy,
            stop_policy: self.stop_policy,
            clock: self.clock,
            initial_floor: self.initial_floor,
            initial_weight: self.initial_weight,
        }
    }

    /// Swap in a different stop/skip policy.
    pub fn stop_policy<S2: StopPolicy>(self, policy: S2) -> CarBuilder<D, S2, C> {
        CarBuilder {
            config: self.config,
            direction_policy: self.direction_policy,
            stop_policy: policy,
            clock: self.clock,
            initial_floor: self.initial_floor,
            initial_weight: self.initial_weight,
        }
    }

    /// Swap in a different time source (e.g. `ManualClock` in tests).
    pub fn clock<C2: Clock>(self, clock: C2) -> CarBuilder<D, S, C2> {
        CarBuilder {
            config: self.config,
            direction_policy: self.direction_policy,
            stop_policy: self.stop_policy,
            clock,
            initial_floor: self.initial_floor,
            initial_weight: self.initial_weight,
        }
    }

    /// Where the car starts.  Defaults to the bottom of the serviced range.
    pub fn initial_floor(mut self, floor: Floor) -> Self {
        self.initial_floor = Some(floor);
        self
    }

    /// The car's starting load.  May exceed the weight limit (an already
    /// overloaded car is a legitimate starting condition).
    pub fn initial_weight(mut self, weight: u32) -> Self {
        self.initial_weight = weight;
        self
    }

    /// Validate the configuration and construct the car.
    pub fn build(self) -> LiftResult<Car<D, S, C>> {
        let config = &self.config;
        if config.min_floor >= config.max_floor {
            return Err(LiftError::Config(format!(
                "floor range {}..={} is empty",
                config.min_floor, config.max_floor
            )));
        }
        if config.floor_transit_ms == 0 || config.stop_dwell_ms == 0 {
            return Err(LiftError::Config(
                "transit and dwell durations must be non-zero".into(),
            ));
        }

        let initial_floor = self.initial_floor.unwrap_or(config.min_floor);
        if !config.serves(initial_floor) {
            return Err(LiftError::FloorOutOfRange {
                floor: initial_floor,
                min: config.min_floor,
                max: config.max_floor,
            });
        }

        Ok(Car::new(
            self.config,
            self.direction_policy,
            self.stop_policy,
            self.clock,
            initial_floor,
            self.initial_weight,
        ))
    }
}
