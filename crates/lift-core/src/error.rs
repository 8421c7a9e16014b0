//! Common error type.
//!
//! Sub-crates may define their own error enums or reuse `LiftError` directly;
//! prefer whichever keeps error sites clean.  Invariant violations inside the
//! route queues are *not* represented here — they are programming errors and
//! panic (see `lift-route`).

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor {floor} is outside the serviced range {min}..={max}")]
    FloorOutOfRange {
        floor: Floor,
        min: Floor,
        max: Floor,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
