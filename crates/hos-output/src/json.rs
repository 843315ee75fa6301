//! Contract-JSON output backend.
//!
//! Serializes the schedule in the boundary shape every downstream consumer
//! expects:
//!
//! ```json
//! { "days": [ { "segments": [ { "start": 0.0, "end": 0.5, "status": 4 }, … ],
//!               "note": "…" }, … ] }
//! ```
//!
//! Statuses travel as their fixed integer codes and the `note` field is
//! absent on non-reset days (see `hos-core`'s wire impls).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hos_core::DayLog;
use serde_json::json;

use crate::writer::LogWriter;
use crate::OutputResult;

/// The contract shape as an in-memory JSON value.
pub fn contract_json(days: &[DayLog]) -> serde_json::Value {
    json!({ "days": days })
}

/// Buffers days and writes one `days.json` in the contract shape on finish.
pub struct JsonLogWriter {
    path:     PathBuf,
    days:     Vec<DayLog>,
    finished: bool,
}

impl JsonLogWriter {
    /// Writer for `<dir>/days.json`.  Nothing touches the filesystem until
    /// [`finish`][LogWriter::finish] — the JSON document owns a single
    /// top-level object, so days are buffered.
    pub fn new(dir: &Path) -> Self {
        Self::to_path(dir.join("days.json"))
    }

    /// Writer for an explicit file path.
    pub fn to_path(path: PathBuf) -> Self {
        Self { path, days: Vec::new(), finished: false }
    }
}

impl LogWriter for JsonLogWriter {
    fn write_days(&mut self, days: &[DayLog]) -> OutputResult<()> {
        self.days.extend_from_slice(days);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &contract_json(&self.days))?;
        out.flush()?;
        Ok(())
    }
}
