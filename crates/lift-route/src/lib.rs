//! `lift-route` — the car's pending-request queues.
//!
//! # Route model (summary)
//!
//! Pending [`CallRequest`][lift_core::CallRequest]s are partitioned into two
//! always-sorted queues:
//!
//! ```text
//! upward    [3, 5, 9]   served front-first while travelling up
//! downward  [2, 4, 7]   served back-first (nearest-from-above) going down
//! ```
//!
//! A third, transient queue records requests received while the car is
//! stationary; the direction policy uses it as a tie-break signal and it is
//! cleared every time the car departs a floor.

pub mod store;

#[cfg(test)]
mod tests;

pub use store::RouteStore;
