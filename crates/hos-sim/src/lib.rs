//! `hos-sim` — the Hours-of-Service compliance simulator.
//!
//! Two pure components over scalar inputs, no shared mutable state:
//!
//! * [`day`] — builds one day's ordered duty-status timeline given how much
//!   driving must occur that day.
//! * [`cycle`] — drives the day builder across as many days as needed to
//!   exhaust the total required driving time, enforcing the 70-hour cycle
//!   cap and injecting 34-hour reset days.
//!
//! Everything here is synchronous, infallible, and deterministic: identical
//! inputs yield identical output, and independent calls may run concurrently
//! with no coordination.
//!
//! ```
//! use hos_sim::CycleSimulator;
//!
//! let sim = CycleSimulator::default();
//! let days = sim.simulate(36_000.0, 0.0); // 10 h of driving, fresh cycle
//! assert_eq!(days.len(), 1);
//! assert!((days[0].drive_hours() - 10.0).abs() < 1e-9);
//! ```

pub mod cycle;
pub mod day;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cycle::{CYCLE_EXHAUSTED_NOTE, CycleSimulator, RESET_NOTE};
pub use day::{build_day, build_day_segments};

/// The chronological day-by-day output of one simulation, never empty.
pub type SimulationResult = Vec<hos_core::DayLog>;
