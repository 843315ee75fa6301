//! `hos-plan` — coarse trip planning for the `rust_hos` toolkit.
//!
//! Two small pieces, both pure arithmetic over a route's aggregate distance
//! and duration:
//!
//! * [`stops`] — fueling-stop, day, and break counts for a route.
//! * [`trip`]  — the routed-leg summary plus pickup/drop-off service time.
//!
//! Neither interacts with the duty-timeline simulator in `hos-sim`; the stop
//! counts are advisory and are not fed back into the cycle scheduler.

pub mod stops;
pub mod trip;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use stops::{FUEL_INTERVAL_MILES, StopPlan, plan_stops};
pub use trip::{DROPOFF_SERVICE_H, PICKUP_SERVICE_H, RouteSummary, TripPlan};
