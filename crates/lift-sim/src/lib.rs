//! `lift-sim` — the car's motor and movement loop.
//!
//! # Movement loop (one leg per iteration)
//!
//! ```text
//! while a route queue is non-empty:
//!   ① Commit   — motor enters transit toward the adjacent floor; the
//!                stationary queue is cleared and the stop policy fixes the
//!                verdict for the upcoming floor (on Skip the request is
//!                re-routed to the opposite queue immediately).
//!   ② Passed   — observers are notified the car left its floor.
//!   ③ Transit  — the clock waits one floor-transit; the motor arrives.
//!   ④ Stop     — on a Stop verdict: the motor halts, the request is
//!                completed, observers are notified, the clock waits one
//!                dwell, and the direction policy re-runs.
//! ```
//!
//! The loop never holds the state lock across a wait, so submissions from
//! other threads (or from observer callbacks) land between legs and are
//! folded into the route live.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{CallRequest, CarConfig, Floor};
//! use lift_sim::CarBuilder;
//!
//! let car = CarBuilder::new(CarConfig::default()).build()?;
//! car.submit(CallRequest::inside(Floor(5)))?;
//! car.execute_route();
//! ```

pub mod builder;
pub mod car;
pub mod motor;
pub mod observer;


pub use builder::CarBuilder;
pub use car::Car;
pub use motor::Motor;
pub use observer::{CarObserver, NoopObserver, PassedFloor, StoppedAtFloor};
