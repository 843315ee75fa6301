//! Unit tests for hos-plan.

use hos_core::HosRules;

use crate::{RouteSummary, StopPlan, TripPlan, plan_stops};

fn rules() -> HosRules {
    HosRules::PROPERTY_CARRYING
}

#[cfg(test)]
mod stop_planner {
    use hos_core::METERS_PER_MILE;

    use super::*;

    #[test]
    fn short_route_has_no_stops() {
        // 100 miles, 2 hours.
        let plan = plan_stops(&rules(), 100.0 * METERS_PER_MILE, 7_200.0);
        assert_eq!(
            plan,
            StopPlan { fueling_stops: 0, estimated_days: 1, required_breaks: 0 }
        );
    }

    #[test]
    fn fueling_stops_per_thousand_miles() {
        let per_mile = METERS_PER_MILE;
        assert_eq!(plan_stops(&rules(), 999.0 * per_mile, 0.0).fueling_stops, 0);
        assert_eq!(plan_stops(&rules(), 1_000.5 * per_mile, 0.0).fueling_stops, 1);
        assert_eq!(plan_stops(&rules(), 2_500.0 * per_mile, 0.0).fueling_stops, 2);
    }

    #[test]
    fn estimated_days_round_up_at_the_daily_limit() {
        // 11 h → 1 day, 11.5 h → 2 days, 22 h → 2 days, 23 h → 3 days.
        assert_eq!(plan_stops(&rules(), 0.0, 11.0 * 3_600.0).estimated_days, 1);
        assert_eq!(plan_stops(&rules(), 0.0, 11.5 * 3_600.0).estimated_days, 2);
        assert_eq!(plan_stops(&rules(), 0.0, 22.0 * 3_600.0).estimated_days, 2);
        assert_eq!(plan_stops(&rules(), 0.0, 23.0 * 3_600.0).estimated_days, 3);
    }

    #[test]
    fn estimated_days_floor_at_one() {
        assert_eq!(plan_stops(&rules(), 0.0, 0.0).estimated_days, 1);
        assert_eq!(plan_stops(&rules(), 1_000.0, 60.0).estimated_days, 1);
    }

    #[test]
    fn breaks_per_eight_driving_hours() {
        assert_eq!(plan_stops(&rules(), 0.0, 7.9 * 3_600.0).required_breaks, 0);
        assert_eq!(plan_stops(&rules(), 0.0, 8.0 * 3_600.0).required_breaks, 1);
        assert_eq!(plan_stops(&rules(), 0.0, 16.5 * 3_600.0).required_breaks, 2);
    }

    #[test]
    fn wire_shape() {
        let plan = plan_stops(&rules(), 2_500.0 * METERS_PER_MILE, 23.0 * 3_600.0);
        let value = serde_json::to_value(plan).unwrap();
        assert_eq!(value["fueling_stops"], 2);
        assert_eq!(value["estimated_days"], 3);
        assert_eq!(value["required_breaks"], 2);
    }
}

#[cfg(test)]
mod trip_plan {
    use super::*;

    #[test]
    fn service_time_extends_duration_not_distance() {
        let route = RouteSummary { distance_m: 500_000.0, duration_s: 18_000.0 };
        let trip = TripPlan::from_route(&rules(), route);
        assert_eq!(trip.distance_m, 500_000.0);
        // 5 h of driving + 1 h pickup + 1 h drop-off.
        assert_eq!(trip.duration_s, 25_200.0);
    }

    #[test]
    fn stop_plan_uses_the_adjusted_duration() {
        // 10 h route + 2 h service crosses the one-day / one-break lines.
        let route = RouteSummary { distance_m: 0.0, duration_s: 10.0 * 3_600.0 };
        let trip = TripPlan::from_route(&rules(), route);
        assert_eq!(trip.stops.estimated_days, 2);
        assert_eq!(trip.stops.required_breaks, 1);
    }
}
