//! The HOS rule profile.
//!
//! All limits the simulator and planner apply live in one plain config
//! struct so the numbers are named at their point of use instead of being
//! scattered as literals.  The only profile currently shipped is the
//! simplified property-carrying driver profile; jurisdiction variants are a
//! non-goal.

/// Limits for one Hours-of-Service rule profile, all in fractional hours.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HosRules {
    /// Daily duty window measured from start of duty.
    pub duty_window_h: f64,

    /// Maximum driving time in one day.
    pub max_daily_drive_h: f64,

    /// Cursor position (hours into the day) at which the mandatory
    /// 30-minute break is placed, if driving remains.
    pub break_trigger_h: f64,

    /// Length of the mandatory break.
    pub break_h: f64,

    /// Pre-trip inspection, on duty not driving, at the start of the day.
    pub pre_trip_h: f64,

    /// Post-trip duty reserved at the end of the duty window.
    pub post_trip_h: f64,

    /// Rolling multi-day cycle cap (70 h / 8 days, property-carrying).
    pub cycle_cap_h: f64,

    /// Length of the off-duty period that restores the full cycle budget.
    /// Informational — a reset is logged as one full off-duty day.
    pub reset_h: f64,
}

impl HosRules {
    /// The simplified profile for a property-carrying driver.
    pub const PROPERTY_CARRYING: HosRules = HosRules {
        duty_window_h:     14.0,
        max_daily_drive_h: 11.0,
        break_trigger_h:   8.0,
        break_h:           0.5,
        pre_trip_h:        0.5,
        post_trip_h:       0.5,
        cycle_cap_h:       70.0,
        reset_h:           34.0,
    };
}

impl Default for HosRules {
    fn default() -> Self {
        HosRules::PROPERTY_CARRYING
    }
}
