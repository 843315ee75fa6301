//! `hos-output` — duty-log output writers for the rust_hos toolkit.
//!
//! Two backends, both implementing [`LogWriter`]:
//!
//! | Backend         | Files created                               |
//! |-----------------|---------------------------------------------|
//! | [`CsvLogWriter`]  | `duty_segments.csv`, `day_summaries.csv`  |
//! | [`JsonLogWriter`] | `days.json` (the boundary contract shape) |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_output::{CsvLogWriter, LogWriter};
//!
//! let days = sim.simulate(total_drive_seconds, cycle_hours_used);
//! let mut writer = CsvLogWriter::new(Path::new("./output"))?;
//! writer.write_days(&days)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;


pub use csv::CsvLogWriter;
pub use error::{OutputError, OutputResult};
pub use json::{JsonLogWriter, contract_json};
pub use row::{DaySummaryRow, SegmentRow, day_summary_rows, segment_rows};
pub use writer::LogWriter;
