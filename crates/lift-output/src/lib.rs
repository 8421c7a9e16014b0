//! `lift-output` — CSV activity logging for a running car.
//!
//! [`ActivityLogger`] implements `lift_sim::CarObserver` and appends one row
//! per movement event to a CSV file:
//!
//! | Column         | Content                                     |
//! |----------------|---------------------------------------------|
//! | `unix_time_ms` | Event time, milliseconds since the epoch    |
//! | `event`        | `passed` or `stopped`                       |
//! | `floor`        | The floor the event refers to               |
//! | `direction`    | `up`/`down` for `passed`, empty otherwise   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::ActivityLogger;
//!
//! let logger = ActivityLogger::create(Path::new("activity.csv"))?;
//! car.subscribe(Box::new(logger));
//! ```
//!
//! Write errors are stored internally because observer callbacks have no
//! return value; retrieve the first one with
//! [`take_error`][ActivityLogger::take_error] while the logger is still
//! owned, or accept that logging degrades silently once subscribed.

pub mod error;
pub mod logger;


pub use error::{OutputError, OutputResult};
pub use logger::ActivityLogger;
