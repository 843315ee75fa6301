//! Multi-day cycle scheduler.
//!
//! Allocates a total driving-time requirement across days, enforcing the
//! rolling 70-hour cycle cap on top of the per-day limits applied by
//! [`build_day`][crate::build_day].  When accumulated driving since the last
//! reset would reach the cap with driving still outstanding, a 34-hour reset
//! day (one full off-duty day with a note) is inserted *ahead of* the day
//! that would otherwise breach the cap, and the cycle budget starts over.
//!
//! The scheduler is an explicit state machine over three named accumulators,
//! each updated once per iteration:
//!
//! | Accumulator             | Meaning                                      |
//! |-------------------------|----------------------------------------------|
//! | `remaining_hours`       | driving still owed overall                   |
//! | `cycle_hours_remaining` | budget left in the current cycle             |
//! | `cumulative_drive_hours`| driving done since the last reset            |
//!
//! No re-scanning of prior output, no randomness, no external state: the
//! presence and placement of reset days is a reproducible function of the
//! two numeric inputs.

use hos_core::{DayLog, HOURS_EPSILON, HosRules, secs_to_hours};

use crate::day::{build_day, build_day_segments};

/// Note attached to a reset day inserted mid-schedule.
pub const RESET_NOTE: &str = "34-hour reset required after 70-hour cycle";

/// Note attached when the cycle budget is exhausted with driving still owed.
pub const CYCLE_EXHAUSTED_NOTE: &str = "34-hour reset required - 70-hour cycle limit reached";

/// The multi-day HOS schedule simulator.
///
/// Holds only the rule profile; every [`simulate`][CycleSimulator::simulate]
/// call is an independent pure computation, so one simulator may be shared
/// freely across threads.
#[derive(Clone, Debug, Default)]
pub struct CycleSimulator {
    rules: HosRules,
}

impl CycleSimulator {
    pub fn new(rules: HosRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Produce the day-by-day duty timeline for a trip.
    ///
    /// `total_drive_seconds` is the driving the trip requires;
    /// `current_cycle_hours_used` is how much of the 70-hour cycle the driver
    /// has already consumed.  Negative inputs clamp to zero.  The result is
    /// never empty: a zero requirement yields a single all-off-duty day.
    pub fn simulate(&self, total_drive_seconds: f64, current_cycle_hours_used: f64) -> Vec<DayLog> {
        let rules = &self.rules;

        let mut remaining_hours = secs_to_hours(total_drive_seconds).max(0.0);
        let mut cycle_hours_remaining = (rules.cycle_cap_h - current_cycle_hours_used.max(0.0)).max(0.0);
        let mut cumulative_drive_hours = 0.0;

        let mut days: Vec<DayLog> = Vec::new();

        // Hard ceiling on emitted days.  Each iteration either allocates a
        // full day slice or triggers a reset that restores the whole cycle
        // budget, so the true count is bounded by remaining/11 plus a few
        // days per 70-hour cycle.  The ceiling only trips if that progress
        // invariant is broken.
        let max_days = day_count_ceiling(rules, remaining_hours);

        while remaining_hours > HOURS_EPSILON && cumulative_drive_hours < cycle_hours_remaining {
            if days.len() >= max_days {
                debug_assert!(false, "scheduler exceeded {max_days} days without finishing");
                break;
            }

            let available_today = rules
                .max_daily_drive_h
                .min(cycle_hours_remaining - cumulative_drive_hours);
            let day_drive = remaining_hours.min(available_today);

            // Reset ahead of the day that would reach the cap, as long as
            // there is still driving to schedule.
            if cumulative_drive_hours + day_drive >= cycle_hours_remaining
                && remaining_hours > HOURS_EPSILON
            {
                days.push(reset_day(rules, RESET_NOTE));
                cycle_hours_remaining = rules.cycle_cap_h;
                cumulative_drive_hours = 0.0;
            }

            days.push(build_day(rules, day_drive));
            remaining_hours -= day_drive;
            cumulative_drive_hours += day_drive;
        }

        // The loop can stop with driving still owed only when the cycle
        // budget was exhausted before it began (cycle_hours_remaining == 0).
        // Surface that as a trailing reset day rather than an error.
        if remaining_hours > HOURS_EPSILON {
            days.push(reset_day(rules, CYCLE_EXHAUSTED_NOTE));
        }

        // A zero requirement still produces one (all off-duty) day.
        if days.is_empty() {
            days.push(build_day(rules, 0.0));
        }

        days
    }
}

/// One full off-duty day flagged as a mandatory reset.
fn reset_day(rules: &HosRules, note: &str) -> DayLog {
    DayLog::with_note(build_day_segments(rules, 0.0), note)
}

/// Upper bound on days any well-formed schedule can need.
fn day_count_ceiling(rules: &HosRules, remaining_hours: f64) -> usize {
    let drive_days = (remaining_hours / rules.max_daily_drive_h).ceil() as usize;
    // Up to one reset day plus one short cap-boundary day per cycle.
    let cycles = (remaining_hours / rules.cycle_cap_h).ceil() as usize;
    drive_days + 2 * (cycles + 1) + 2
}
