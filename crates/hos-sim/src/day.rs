//! Single-day duty timeline builder.
//!
//! # Day template
//!
//! Every driving day follows one fixed template, laid out by advancing a
//! cursor `t` from midnight:
//!
//! 1. Pre-trip inspection — on duty (not driving), 0.5 h.
//! 2. Driving until the 8-hour mark or until the day's drive budget runs
//!    out, whichever comes first.
//! 3. The mandatory 30-minute break (off duty), only if the cursor is still
//!    before the 8-hour mark and driving remains beyond what was just driven.
//! 4. Driving for the rest of the budget, capped so the last half hour of
//!    the 14-hour duty window stays free for post-trip duty.
//! 5. Post-trip duty, 0.5 h, only if the cursor is still inside the window.
//! 6. Off duty to midnight.
//!
//! Steps whose computed duration is ≤ 0 are skipped; no zero-length segments
//! are emitted.  A zero drive budget short-circuits to a single off-duty
//! segment covering the whole day.
//!
//! The builder is a pure function: no errors, no I/O, no state between
//! calls.  Day totals never exceed the profile's 11 h driving / 14 h duty
//! window limits.

use hos_core::{DayLog, DutyStatus, HOURS_PER_DAY, HosRules, Segment};

/// Clamp `hours_remaining` into `[0, max_hours]`.
#[inline]
fn clip(hours_remaining: f64, max_hours: f64) -> f64 {
    if hours_remaining <= 0.0 {
        0.0
    } else {
        hours_remaining.min(max_hours)
    }
}

/// Build the segment list for exactly one day.
///
/// `remaining_drive_hours` is the driving still owed overall; it may exceed
/// what fits in one day, in which case the day absorbs at most
/// `rules.max_daily_drive_h` of it.
pub fn build_day_segments(rules: &HosRules, remaining_drive_hours: f64) -> Vec<Segment> {
    let max_drive_today = clip(remaining_drive_hours, rules.max_daily_drive_h);
    if max_drive_today == 0.0 {
        return vec![Segment::new(0.0, HOURS_PER_DAY, DutyStatus::OffDuty)];
    }

    let mut segments = Vec::with_capacity(6);
    let mut t = 0.0;

    // Pre-trip inspection.
    segments.push(Segment::new(t, t + rules.pre_trip_h, DutyStatus::OnDutyNotDriving));
    t += rules.pre_trip_h;

    // Drive until the break trigger or until the budget is exhausted.
    let drive_before_break = clip(max_drive_today, rules.break_trigger_h - t);
    if drive_before_break > 0.0 {
        segments.push(Segment::new(t, t + drive_before_break, DutyStatus::Driving));
        t += drive_before_break;
    }

    // Mandatory break, only when still before the trigger mark with driving
    // left to do.
    if t < rules.break_trigger_h && max_drive_today > drive_before_break {
        let break_len = rules.break_h.min(rules.break_trigger_h - t);
        segments.push(Segment::new(t, t + break_len, DutyStatus::OffDuty));
        t += break_len;
    }

    // Resume driving, reserving the last half hour of the duty window for
    // post-trip duty.
    let remaining_drive_today = max_drive_today - drive_before_break;
    let duty_left_before_post = (rules.duty_window_h - rules.post_trip_h - t).max(0.0);
    let drive_after_break = clip(remaining_drive_today, duty_left_before_post);
    if drive_after_break > 0.0 {
        segments.push(Segment::new(t, t + drive_after_break, DutyStatus::Driving));
        t += drive_after_break;
    }

    // Post-trip duty, clipped to the duty window.
    if t < rules.duty_window_h {
        let end = rules.duty_window_h.min(t + rules.post_trip_h);
        segments.push(Segment::new(t, end, DutyStatus::OnDutyNotDriving));
        t = end;
    }

    // Off duty to midnight.
    if t < HOURS_PER_DAY {
        segments.push(Segment::new(t, HOURS_PER_DAY, DutyStatus::OffDuty));
    }

    segments
}

/// Build one day's [`DayLog`] for the given outstanding drive hours.
pub fn build_day(rules: &HosRules, remaining_drive_hours: f64) -> DayLog {
    DayLog::new(build_day_segments(rules, remaining_drive_hours))
}
