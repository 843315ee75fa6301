//! Trip-level summary built on top of a routed leg.
//!
//! The routing provider (external to this workspace) resolves the three trip
//! points — current position, pickup, drop-off — into one aggregate distance
//! and duration.  This module consumes only those two scalars, adds the
//! fixed service time spent at the pickup and drop-off docks, and derives
//! the advisory stop plan from the adjusted duration.

use hos_core::{HosRules, hours_to_secs};
use serde::{Deserialize, Serialize};

use crate::stops::{StopPlan, plan_stops};

/// Dock time at the pickup, hours.
pub const PICKUP_SERVICE_H: f64 = 1.0;

/// Dock time at the drop-off, hours.
pub const DROPOFF_SERVICE_H: f64 = 1.0;

/// What the routing provider yields for a completed route: aggregate
/// distance and drive duration.  Path geometry stays with the routing layer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_m: f64,
    pub duration_s: f64,
}

/// A planned trip: the routed leg plus service time and stop counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub distance_m: f64,
    /// Route duration plus pickup and drop-off service time.
    pub duration_s: f64,
    pub stops: StopPlan,
}

impl TripPlan {
    /// Plan a trip from a routed leg.
    ///
    /// Service time extends the trip's overall duration (and therefore the
    /// stop plan) but not its distance — the truck is parked at the dock.
    pub fn from_route(rules: &HosRules, route: RouteSummary) -> Self {
        let duration_s =
            route.duration_s + hours_to_secs(PICKUP_SERVICE_H + DROPOFF_SERVICE_H);
        Self {
            distance_m: route.distance_m,
            duration_s,
            stops: plan_stops(rules, route.distance_m, duration_s),
        }
    }
}
