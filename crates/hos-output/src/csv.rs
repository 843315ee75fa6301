//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `duty_segments.csv` — one row per duty-status segment
//! - `day_summaries.csv` — one row per day with drive/duty totals

use std::fs::File;
use std::path::Path;

use csv::Writer;

use hos_core::DayLog;

use crate::row::{day_summary_rows, segment_rows};
use crate::writer::LogWriter;
use crate::OutputResult;

/// Writes duty logs to two CSV files.
pub struct CsvLogWriter {
    segments:  Writer<File>,
    summaries: Writer<File>,
    /// Days written so far — keeps day indices monotonic across batches.
    days_written: u32,
    finished:     bool,
}

impl CsvLogWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut segments = Writer::from_path(dir.join("duty_segments.csv"))?;
        segments.write_record(["day_index", "start_hour", "end_hour", "status_code"])?;

        let mut summaries = Writer::from_path(dir.join("day_summaries.csv"))?;
        summaries.write_record(["day_index", "drive_hours", "duty_hours", "is_reset", "note"])?;

        Ok(Self {
            segments,
            summaries,
            days_written: 0,
            finished: false,
        })
    }
}

impl LogWriter for CsvLogWriter {
    fn write_days(&mut self, days: &[DayLog]) -> OutputResult<()> {
        let base = self.days_written;

        for row in segment_rows(days) {
            self.segments.write_record(&[
                (base + row.day_index).to_string(),
                row.start_hour.to_string(),
                row.end_hour.to_string(),
                row.status_code.to_string(),
            ])?;
        }

        for row in day_summary_rows(days) {
            self.summaries.write_record(&[
                (base + row.day_index).to_string(),
                row.drive_hours.to_string(),
                row.duty_hours.to_string(),
                (row.is_reset as u8).to_string(),
                row.note.unwrap_or_default(),
            ])?;
        }

        self.days_written = base + days.len() as u32;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.segments.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
