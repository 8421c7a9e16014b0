//! Time abstraction.
//!
//! The simulation has exactly two time sinks — the floor-transit wait and the
//! stop-dwell wait — plus event timestamping.  Both go through the [`Clock`]
//! trait so the whole movement loop can run against virtual time in tests:
//! [`WallClock`] sleeps for real, [`ManualClock`] advances an atomic counter
//! and returns instantly, keeping the test suite fast and deterministic.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of timestamps and timed waits.
///
/// `&self` methods so a clock can be shared across the movement loop and
/// concurrent submitters without locking.
pub trait Clock: Send + Sync {
    /// Current time, used to timestamp notifications.
    fn now(&self) -> SystemTime;

    /// Suspend the caller for `duration`.
    fn wait(&self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> SystemTime {
        (**self).now()
    }

    fn wait(&self, duration: Duration) {
        (**self).wait(duration);
    }
}

/// Real time: `SystemTime::now` and `thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn wait(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Virtual time for tests: `wait` advances an internal counter and returns
/// immediately, `now` reports the epoch plus everything waited so far.
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed_ms: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time waited since construction.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::Relaxed))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        UNIX_EPOCH + self.elapsed()
    }

    fn wait(&self, duration: Duration) {
        self.elapsed_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }
}
