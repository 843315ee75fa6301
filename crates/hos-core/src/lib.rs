//! `hos-core` — foundational types for the `rust_hos` HOS compliance toolkit.
//!
//! This crate is a dependency of every other `hos-*` crate.  It intentionally
//! has no `hos-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`duty`]      | `DutyStatus` enum and its fixed wire codes (1–4)    |
//! | [`segment`]   | `Segment`, `DayLog`                                 |
//! | [`rules`]     | `HosRules` — the property-carrying rule profile     |
//! | [`units`]     | meters/miles, seconds/hours, `HOURS_EPSILON`        |
//! | [`error`]     | `HosError`, `HosResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds wire-format serde impls to all public types (statuses |
//!           | as bare integer codes, segment fields as `start`/`end`).   |

pub mod duty;
pub mod error;
pub mod rules;
pub mod segment;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use duty::DutyStatus;
pub use error::{HosError, HosResult};
pub use rules::HosRules;
pub use segment::{DayLog, HOURS_PER_DAY, Segment};
pub use units::{
    HOURS_EPSILON, METERS_PER_MILE, SECS_PER_HOUR, hours_to_secs, meters_to_miles, secs_to_hours,
};
