//! Plain data row types written by output backends.

use hos_core::DayLog;

/// One duty-status segment, flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRow {
    /// 0-based position of the day within the simulated schedule.
    pub day_index:   u32,
    pub start_hour:  f64,
    pub end_hour:    f64,
    /// Wire status code, 1–4.
    pub status_code: u8,
}

/// Per-day totals for one simulated day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummaryRow {
    pub day_index:   u32,
    pub drive_hours: f64,
    pub duty_hours:  f64,
    pub is_reset:    bool,
    pub note:        Option<String>,
}

/// Flatten a schedule into one row per segment, in chronological order.
pub fn segment_rows(days: &[DayLog]) -> Vec<SegmentRow> {
    days.iter()
        .enumerate()
        .flat_map(|(i, day)| {
            day.segments().iter().map(move |s| SegmentRow {
                day_index:   i as u32,
                start_hour:  s.start_hour,
                end_hour:    s.end_hour,
                status_code: s.status.code(),
            })
        })
        .collect()
}

/// One summary row per day.
pub fn day_summary_rows(days: &[DayLog]) -> Vec<DaySummaryRow> {
    days.iter()
        .enumerate()
        .map(|(i, day)| DaySummaryRow {
            day_index:   i as u32,
            drive_hours: day.drive_hours(),
            duty_hours:  day.duty_hours(),
            is_reset:    day.is_reset(),
            note:        day.note.clone(),
        })
        .collect()
}
