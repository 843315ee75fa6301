//! The `LogWriter` trait implemented by all backend writers.

use hos_core::DayLog;

use crate::OutputResult;

/// Trait implemented by the CSV and JSON duty-log writers.
///
/// `write_days` may be called repeatedly — backends either stream rows as
/// they arrive (CSV) or buffer until `finish` (JSON, which owns a single
/// top-level array).
pub trait LogWriter {
    /// Write a batch of consecutive days.  Day indices continue across
    /// calls.
    fn write_days(&mut self, days: &[DayLog]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
