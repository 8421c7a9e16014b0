//! `lift-core` — foundational types for the `liftsim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`floor`]   | `Floor` — absolute floor number with arithmetic     |
//! | [`call`]    | `CallOrigin`, `CallRequest`                         |
//! | [`state`]   | `Direction`, `Motion`, `CarState`                   |
//! | [`config`]  | `CarConfig` — durations, weight limit, floor range  |
//! | [`time`]    | `Clock` trait, `WallClock`, `ManualClock`           |
//! | [`error`]   | `LiftError`, `LiftResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod call;
pub mod config;
pub mod error;
pub mod floor;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::{CallOrigin, CallRequest};
pub use config::CarConfig;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use state::{CarState, Direction, Motion};
pub use time::{Clock, ManualClock, WallClock};
