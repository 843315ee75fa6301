//! Unit tests for the day builder and cycle scheduler.

use hos_core::{DayLog, DutyStatus, HOURS_EPSILON, HosRules, Segment};

use crate::{CYCLE_EXHAUSTED_NOTE, CycleSimulator, RESET_NOTE, build_day, build_day_segments};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rules() -> HosRules {
    HosRules::PROPERTY_CARRYING
}

/// Assert a day's segments tile the 0–24 span with no gaps or overlaps.
fn assert_tiles(day: &DayLog) {
    let segs = day.segments();
    assert!(!segs.is_empty());
    assert_eq!(segs[0].start_hour, 0.0);
    assert_eq!(segs[segs.len() - 1].end_hour, 24.0);
    for pair in segs.windows(2) {
        assert_eq!(pair[0].end_hour, pair[1].start_hour, "gap or overlap in {segs:?}");
    }
    for s in segs {
        assert!(s.start_hour < s.end_hour, "zero-length segment in {segs:?}");
    }
}

/// End of the last on-duty segment, i.e. the span of duty activity.
fn duty_span_end(day: &DayLog) -> f64 {
    day.segments()
        .iter()
        .filter(|s| s.status.is_on_duty())
        .map(|s| s.end_hour)
        .fold(0.0, f64::max)
}

fn statuses(segs: &[Segment]) -> Vec<DutyStatus> {
    segs.iter().map(|s| s.status).collect()
}

// ── Day builder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_builder {
    use super::*;

    #[test]
    fn zero_drive_is_one_off_duty_segment() {
        let segs = build_day_segments(&rules(), 0.0);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0], Segment::new(0.0, 24.0, DutyStatus::OffDuty));
    }

    #[test]
    fn negative_drive_clamps_to_zero() {
        let segs = build_day_segments(&rules(), -3.0);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].status, DutyStatus::OffDuty);
    }

    #[test]
    fn one_hour_day_layout() {
        // Pre-trip 0.5, drive 1 h, post-trip 0.5, off duty to midnight.
        let segs = build_day_segments(&rules(), 1.0);
        assert_eq!(
            statuses(&segs),
            vec![
                DutyStatus::OnDutyNotDriving,
                DutyStatus::Driving,
                DutyStatus::OnDutyNotDriving,
                DutyStatus::OffDuty,
            ]
        );
        assert_eq!(segs[1].start_hour, 0.5);
        assert_eq!(segs[1].end_hour, 1.5);
        assert_eq!(segs[2].end_hour, 2.0);
        assert_eq!(segs[3].end_hour, 24.0);
    }

    #[test]
    fn ten_hour_day_splits_driving_at_the_eight_hour_mark() {
        let day = build_day(&rules(), 10.0);
        let segs = day.segments();
        // Driving runs 0.5–8.0 then resumes 8.0–10.5; the cursor sits exactly
        // on the break trigger, so no break segment is emitted.
        assert_eq!(
            statuses(segs),
            vec![
                DutyStatus::OnDutyNotDriving,
                DutyStatus::Driving,
                DutyStatus::Driving,
                DutyStatus::OnDutyNotDriving,
                DutyStatus::OffDuty,
            ]
        );
        assert_eq!(segs[1].end_hour, 8.0);
        assert_eq!(segs[2].end_hour, 10.5);
        assert!((day.drive_hours() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn short_day_has_no_break_and_no_second_drive() {
        let day = build_day(&rules(), 5.0);
        assert_eq!(
            statuses(day.segments()),
            vec![
                DutyStatus::OnDutyNotDriving,
                DutyStatus::Driving,
                DutyStatus::OnDutyNotDriving,
                DutyStatus::OffDuty,
            ]
        );
        assert!((day.drive_hours() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn drive_budget_caps_at_daily_maximum() {
        // 20 h owed, only 11 fit in a day.
        let day = build_day(&rules(), 20.0);
        assert!((day.drive_hours() - 11.0).abs() < 1e-9);
        assert_tiles(&day);
    }

    #[test]
    fn full_day_duty_stays_inside_the_window() {
        // 11 h of driving: pre-trip to 0.5, drive to 8, drive to 11.5,
        // post-trip to 12, off duty to midnight.
        let day = build_day(&rules(), 11.0);
        assert_eq!(duty_span_end(&day), 12.0);
        assert!((day.duty_hours() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn sleeper_berth_never_emitted() {
        for tenths in 0..=120 {
            let day = build_day(&rules(), tenths as f64 / 10.0);
            assert_eq!(day.status_hours(DutyStatus::SleeperBerth), 0.0);
        }
    }

    #[test]
    fn all_inputs_tile_the_day() {
        for tenths in 0..=150 {
            let hours = tenths as f64 / 10.0;
            let day = build_day(&rules(), hours);
            assert_tiles(&day);
            assert!(day.drive_hours() <= 11.0 + 1e-9, "drive cap broken at {hours}");
            assert!(duty_span_end(&day) <= 14.0 + 1e-9, "duty window broken at {hours}");
            // The day absorbs exactly min(hours, 11).
            assert!((day.drive_hours() - hours.min(11.0)).abs() < 1e-9);
        }
    }
}

// ── Cycle scheduler ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use super::*;

    fn simulate(total_drive_seconds: f64, cycle_used: f64) -> Vec<DayLog> {
        CycleSimulator::default().simulate(total_drive_seconds, cycle_used)
    }

    fn total_drive(days: &[DayLog]) -> f64 {
        days.iter().map(DayLog::drive_hours).sum()
    }

    #[test]
    fn ten_hours_fits_one_day() {
        let days = simulate(36_000.0, 0.0);
        assert_eq!(days.len(), 1);
        assert!((days[0].drive_hours() - 10.0).abs() < 1e-9);
        assert!(days[0].note.is_none());
    }

    #[test]
    fn twenty_three_hours_spread_over_three_days() {
        let days = simulate(82_800.0, 0.0);
        assert_eq!(days.len(), 3);
        assert!((days[0].drive_hours() - 11.0).abs() < 1e-9);
        assert!((days[1].drive_hours() - 11.0).abs() < 1e-9);
        assert!((days[2].drive_hours() - 1.0).abs() < 1e-9);
        assert!(days.iter().all(|d| d.note.is_none()));
    }

    #[test]
    fn zero_driving_yields_one_off_duty_day() {
        let days = simulate(0.0, 0.0);
        assert_eq!(days.len(), 1);
        let segs = days[0].segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0], Segment::new(0.0, 24.0, DutyStatus::OffDuty));
        assert!(!days[0].is_reset());
    }

    #[test]
    fn near_exhausted_cycle_resets_then_resumes() {
        // 68 of 70 cycle hours used, 10 h to drive: the 2 h that remain in
        // the cycle would reach the cap, so a reset day comes first, then
        // driving resumes against a fresh 70 h budget.
        let days = simulate(36_000.0, 68.0);
        assert_eq!(days.len(), 3);
        assert!(days[0].is_reset());
        assert_eq!(days[0].note.as_deref(), Some(RESET_NOTE));
        assert_eq!(days[0].drive_hours(), 0.0);
        assert!((days[1].drive_hours() - 2.0).abs() < 1e-9);
        assert!((days[2].drive_hours() - 8.0).abs() < 1e-9);
        assert!((total_drive(&days) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn one_hour_trip_layout() {
        let days = simulate(3_600.0, 0.0);
        assert_eq!(days.len(), 1);
        assert_eq!(
            statuses(days[0].segments()),
            vec![
                DutyStatus::OnDutyNotDriving,
                DutyStatus::Driving,
                DutyStatus::OnDutyNotDriving,
                DutyStatus::OffDuty,
            ]
        );
    }

    #[test]
    fn exhausted_cycle_yields_single_reset_day() {
        // No budget at all: the schedule is one reset day, driving deferred.
        for used in [70.0, 75.0, 120.0] {
            let days = simulate(36_000.0, used);
            assert_eq!(days.len(), 1, "cycle_used = {used}");
            assert_eq!(days[0].note.as_deref(), Some(CYCLE_EXHAUSTED_NOTE));
            assert_eq!(days[0].drive_hours(), 0.0);
        }
    }

    #[test]
    fn reset_precedes_the_day_that_reaches_the_cap() {
        // 59 used + 11 owed reaches the cap exactly; the reset is inserted
        // ahead of that day and the full 11 h still get driven.
        let days = simulate(39_600.0, 59.0);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].note.as_deref(), Some(RESET_NOTE));
        assert!((days[1].drive_hours() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let days = simulate(-100.0, -5.0);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].segments().len(), 1);
        assert_eq!(days[0].segments()[0].status, DutyStatus::OffDuty);
    }

    #[test]
    fn sub_epsilon_requirement_treated_as_zero() {
        // 0.3 s of driving is below the scheduler's tolerance.
        let days = simulate(0.3, 0.0);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].drive_hours(), 0.0);
    }

    #[test]
    fn long_haul_preserves_total_driving_across_resets() {
        // 700 h of driving forces many 70-hour cycles.
        let days = simulate(700.0 * 3_600.0, 0.0);
        assert!((total_drive(&days) - 700.0).abs() < 1e-6);
        assert!(days.iter().any(|d| d.note.as_deref() == Some(RESET_NOTE)));
        assert!(days.iter().all(|d| d.drive_hours() <= 11.0 + 1e-9));
        // Reset days never contain driving.
        assert!(days.iter().filter(|d| d.is_reset()).all(|d| d.drive_hours() == 0.0));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let sim = CycleSimulator::default();
        let a = sim.simulate(123_456.0, 17.25);
        let b = sim.simulate(123_456.0, 17.25);
        assert_eq!(a, b);
    }
}

// ── Cross-cutting properties ──────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn every_result_is_valid_for_a_grid_of_inputs() {
        let sim = CycleSimulator::default();
        for drive_h in [0.0, 0.5, 1.0, 7.5, 10.0, 11.0, 23.0, 69.0, 70.0, 140.0, 333.5] {
            for used in [0.0, 5.0, 34.0, 68.0, 69.99, 70.0] {
                let days = sim.simulate(drive_h * 3_600.0, used);
                assert!(!days.is_empty(), "empty result for {drive_h}h/{used}used");

                let mut total = 0.0;
                for day in &days {
                    assert_tiles(day);
                    assert!(day.drive_hours() <= 11.0 + 1e-9);
                    assert!(duty_span_end(day) <= 14.0 + 1e-9);
                    total += day.drive_hours();
                }

                // Either all driving was scheduled, or the cycle budget ran
                // out and the truncation is flagged with a reset note.
                let truncated = days
                    .iter()
                    .any(|d| d.note.as_deref() == Some(CYCLE_EXHAUSTED_NOTE));
                assert!(
                    (total - drive_h).abs() < 1e-6 || truncated,
                    "lost driving time for {drive_h}h/{used}used: scheduled {total}"
                );
            }
        }
    }

    #[test]
    fn scheduler_terminates_even_at_cap_boundaries() {
        // Inputs chosen to sit right on the cap where a careless loop could
        // allocate zero hours forever.
        let sim = CycleSimulator::default();
        for used in [69.999, 70.0 - HOURS_EPSILON, 70.0, 70.0 + HOURS_EPSILON] {
            let days = sim.simulate(500.0 * 3_600.0, used);
            assert!(!days.is_empty());
        }
    }
}
