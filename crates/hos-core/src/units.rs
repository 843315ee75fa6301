//! Unit conversions shared by the simulator and planner.
//!
//! Route providers report distance in meters and duration in seconds; all
//! HOS arithmetic happens in fractional hours and statute miles.  The
//! conversions are kept here so the constants appear exactly once.

/// Meters per statute mile.
pub const METERS_PER_MILE: f64 = 1_609.34;

/// Seconds per hour.
pub const SECS_PER_HOUR: f64 = 3_600.0;

/// Tolerance for "no driving left" comparisons in fractional-hour
/// arithmetic.  Anything below this is treated as zero.
pub const HOURS_EPSILON: f64 = 1e-4;

/// Convert seconds to fractional hours.
#[inline]
pub fn secs_to_hours(secs: f64) -> f64 {
    secs / SECS_PER_HOUR
}

/// Convert fractional hours to seconds.
#[inline]
pub fn hours_to_secs(hours: f64) -> f64 {
    hours * SECS_PER_HOUR
}

/// Convert meters to statute miles.
#[inline]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}
