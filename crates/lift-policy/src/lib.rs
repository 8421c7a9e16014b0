//! `lift-policy` — the two pure decision points of the scheduler.
//!
//! Both policies are stateless strategy traits so alternative scheduling
//! behaviors can be swapped in at compile time with no runtime overhead:
//!
//! | Trait               | Default impl        | Decides                      |
//! |---------------------|---------------------|------------------------------|
//! | [`DirectionPolicy`] | [`SweepDirection`]  | which way to travel next     |
//! | [`StopPolicy`]      | [`WeightLimitedStop`] | stop / skip / keep going   |
//!
//! Policies only ever *read* the sensor state and the route queues; all
//! mutation stays in `lift-route` and the scheduler.

pub mod direction;
pub mod stop;


pub use direction::{DirectionPolicy, SweepDirection};
pub use stop::{StopDecision, StopPolicy, WeightLimitedStop};
