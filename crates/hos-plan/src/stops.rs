//! The stop planner.
//!
//! Converts a route's aggregate distance and duration into coarse advisory
//! counts: fueling stops, estimated days, and required breaks.  These are
//! independent of the duty-timeline simulator — nothing here feeds back into
//! the cycle scheduler — but the day and break estimates reuse the same rule
//! profile so the two components can never disagree on the limits.

use hos_core::{HosRules, meters_to_miles, secs_to_hours};
use serde::{Deserialize, Serialize};

/// Truck range between fuel stops, statute miles.
pub const FUEL_INTERVAL_MILES: f64 = 1_000.0;

/// Advisory planning counts for one route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopPlan {
    /// One stop per full fueling interval driven.
    pub fueling_stops: u32,
    /// Calendar days the trip needs at the daily driving limit, at least 1.
    pub estimated_days: u32,
    /// One break per full break-trigger interval of driving.
    pub required_breaks: u32,
}

/// Compute the stop plan for a route of `distance_m` meters taking
/// `duration_s` seconds.
///
/// `estimated_days` is a ceiling division of hours by the daily driving
/// limit, floored at one day; the other two counts are floor divisions.
pub fn plan_stops(rules: &HosRules, distance_m: f64, duration_s: f64) -> StopPlan {
    let miles = meters_to_miles(distance_m);
    let hours = secs_to_hours(duration_s);

    let days = (hours / rules.max_daily_drive_h).ceil() as u32;

    StopPlan {
        fueling_stops: (miles / FUEL_INTERVAL_MILES).floor() as u32,
        estimated_days: days.max(1),
        required_breaks: (hours / rules.break_trigger_h).floor() as u32,
    }
}
