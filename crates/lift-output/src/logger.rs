//! `ActivityLogger` — a `CarObserver` that appends movement events to CSV.

use std::fs::File;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use csv::Writer;
use lift_sim::{CarObserver, PassedFloor, StoppedAtFloor};

use crate::{OutputError, OutputResult};

/// Logs every passed floor and completed stop to a CSV file.
///
/// Each record is flushed as it is written, so the log is complete even if
/// the logger is never dropped cleanly.  Errors from the writer are stored
/// internally because observer callbacks have no return value; the first one
/// can be retrieved with [`take_error`][Self::take_error].
pub struct ActivityLogger {
    writer:     Writer<File>,
    last_error: Option<OutputError>,
}

impl ActivityLogger {
    /// Create (or truncate) the CSV file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["unix_time_ms", "event", "floor", "direction"])?;
        writer.flush()?;
        Ok(Self { writer, last_error: None })
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn write(&mut self, at: SystemTime, event: &str, floor: String, direction: &str) -> OutputResult<()> {
        let unix_ms = at
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        self.writer
            .write_record([unix_ms.to_string().as_str(), event, floor.as_str(), direction])?;
        self.writer.flush()?;
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl CarObserver for ActivityLogger {
    fn on_passed_floor(&mut self, event: &PassedFloor) {
        let result = self.write(
            event.at,
            "passed",
            event.floor.0.to_string(),
            &event.direction.to_string(),
        );
        self.store_err(result);
    }

    fn on_stopped_at_floor(&mut self, event: &StoppedAtFloor) {
        let result = self.write(event.at, "stopped", event.floor.0.to_string(), "");
        self.store_err(result);
    }
}
