//! Daily log types: `Segment` and `DayLog`.
//!
//! # Day model
//!
//! A day is the 24-hour span from midnight to midnight, measured in
//! fractional hours.  A `DayLog` covers the whole span with an ordered,
//! gap-free list of segments:
//!
//! ```text
//! segments[0].start_hour == 0
//! segments[i+1].start_hour == segments[i].end_hour
//! segments[last].end_hour == 24
//! ```
//!
//! Both types are immutable once produced — a `DayLog` is a pure function of
//! the drive hours allocated to its day, so results are reproducible and safe
//! to share across threads.

use crate::DutyStatus;

/// Span of a day, hours since midnight.
pub const HOURS_PER_DAY: f64 = 24.0;

// ── Segment ───────────────────────────────────────────────────────────────────

/// One contiguous block of a single duty status within a day.
///
/// `start_hour`/`end_hour` are hours since midnight, `0 ≤ start < end ≤ 24`.
/// The serialized field names are `start` and `end` (wire compatibility with
/// the historical log-sheet format).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    #[cfg_attr(feature = "serde", serde(rename = "start"))]
    pub start_hour: f64,

    #[cfg_attr(feature = "serde", serde(rename = "end"))]
    pub end_hour: f64,

    pub status: DutyStatus,
}

impl Segment {
    #[inline]
    pub fn new(start_hour: f64, end_hour: f64, status: DutyStatus) -> Self {
        debug_assert!(
            start_hour < end_hour,
            "zero or negative-length segment: {start_hour}..{end_hour}"
        );
        Self { start_hour, end_hour, status }
    }

    /// Length of this segment in hours.
    #[inline]
    pub fn duration_h(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

// ── DayLog ────────────────────────────────────────────────────────────────────

/// One simulated day: a gap-free segment list plus an optional note.
///
/// The note is set only on mandatory 34-hour reset days; regular days carry
/// `None` and the field is absent from serialized output.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayLog {
    segments: Vec<Segment>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub note: Option<String>,
}

impl DayLog {
    /// Construct a day from its segment list.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the segments do not tile the 0–24 span
    /// contiguously.
    pub fn new(segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty(), "a DayLog must cover the full day");
        debug_assert_eq!(segments[0].start_hour, 0.0, "first segment must start at 0");
        debug_assert_eq!(
            segments[segments.len() - 1].end_hour,
            HOURS_PER_DAY,
            "last segment must end at 24"
        );
        debug_assert!(
            segments.windows(2).all(|w| w[0].end_hour == w[1].start_hour),
            "segments must be contiguous"
        );
        Self { segments, note: None }
    }

    /// Construct a day with an attached note (reset days).
    pub fn with_note(segments: Vec<Segment>, note: impl Into<String>) -> Self {
        let mut log = Self::new(segments);
        log.note = Some(note.into());
        log
    }

    /// Read-only slice of the day's segments, in chronological order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total hours spent in `Driving` status.
    pub fn drive_hours(&self) -> f64 {
        self.status_hours(DutyStatus::Driving)
    }

    /// Total hours in any on-duty status (driving or not).
    pub fn duty_hours(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.status.is_on_duty())
            .map(Segment::duration_h)
            .sum()
    }

    /// Total hours spent in `status`.
    pub fn status_hours(&self, status: DutyStatus) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.status == status)
            .map(Segment::duration_h)
            .sum()
    }

    /// `true` for a mandatory-reset day (note attached, no driving).
    pub fn is_reset(&self) -> bool {
        self.note.is_some()
    }
}
