//! batch — smallest end-to-end demo for the rust_hos toolkit.
//!
//! Reads trip scenarios from a CSV (or an embedded default set), simulates
//! every scenario's duty timeline in parallel — legal because the simulator
//! is a pure function of its two scalar inputs — and writes per-scenario
//! contract JSON and CSV logs plus one batch summary.
//!
//! ```text
//! batch [scenarios.csv] [output_dir]
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Deserialize;

use hos_core::HosRules;
use hos_output::{CsvLogWriter, JsonLogWriter, LogWriter};
use hos_plan::{RouteSummary, TripPlan};
use hos_sim::CycleSimulator;

// ── Default scenarios ─────────────────────────────────────────────────────────

// Distances are rough interstate figures for the named hauls; the simulator
// only consumes drive seconds, the planner consumes both columns.
const DEFAULT_SCENARIOS: &str = "\
scenario_id,total_drive_seconds,current_cycle_hours_used,distance_m,duration_s\n\
short_hop,3600,0,80467,3600\n\
regional_day,36000,0,965604,36000\n\
two_day_run,82800,0,2092142,82800\n\
tired_driver,36000,68,965604,36000\n\
exhausted_cycle,36000,70,965604,36000\n\
coast_to_coast,180000,12,4506152,180000\n\
";

// ── Scenario CSV ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioRecord {
    scenario_id:              String,
    total_drive_seconds:      f64,
    current_cycle_hours_used: f64,
    distance_m:               f64,
    duration_s:               f64,
}

fn load_scenarios(path: Option<&Path>) -> Result<Vec<ScenarioRecord>> {
    let raw = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("reading scenarios from {}", p.display()))?,
        None => DEFAULT_SCENARIOS.to_string(),
    };

    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let mut scenarios = Vec::new();
    for record in reader.deserialize::<ScenarioRecord>() {
        scenarios.push(record.context("parsing scenario row")?);
    }
    Ok(scenarios)
}

// ── Per-scenario result ───────────────────────────────────────────────────────

struct ScenarioSummary {
    scenario_id: String,
    day_count:   usize,
    reset_count: usize,
    drive_hours: f64,
    trip:        TripPlan,
}

fn run_scenario(
    sim: &CycleSimulator,
    rules: &HosRules,
    out_root: &Path,
    scenario: &ScenarioRecord,
) -> Result<ScenarioSummary> {
    let days = sim.simulate(scenario.total_drive_seconds, scenario.current_cycle_hours_used);
    let trip = TripPlan::from_route(
        rules,
        RouteSummary { distance_m: scenario.distance_m, duration_s: scenario.duration_s },
    );

    let dir = out_root.join(&scenario.scenario_id);
    fs::create_dir_all(&dir)
        .with_context(|| format!("creating output dir {}", dir.display()))?;

    let mut json = JsonLogWriter::new(&dir);
    json.write_days(&days)?;
    json.finish()?;

    let mut csv_logs = CsvLogWriter::new(&dir)?;
    csv_logs.write_days(&days)?;
    csv_logs.finish()?;

    Ok(ScenarioSummary {
        scenario_id: scenario.scenario_id.clone(),
        day_count:   days.len(),
        reset_count: days.iter().filter(|d| d.is_reset()).count(),
        drive_hours: days.iter().map(|d| d.drive_hours()).sum(),
        trip,
    })
}

fn write_summary(out_root: &Path, summaries: &[ScenarioSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(out_root.join("batch_summary.csv"))?;
    writer.write_record([
        "scenario_id",
        "days",
        "resets",
        "drive_hours",
        "fueling_stops",
        "estimated_days",
        "required_breaks",
    ])?;
    for s in summaries {
        writer.write_record(&[
            s.scenario_id.clone(),
            s.day_count.to_string(),
            s.reset_count.to_string(),
            format!("{:.2}", s.drive_hours),
            s.trip.stops.fueling_stops.to_string(),
            s.trip.stops.estimated_days.to_string(),
            s.trip.stops.required_breaks.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let scenarios_path = args.get(1).map(PathBuf::from);
    let out_root = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./output"));

    let scenarios = load_scenarios(scenarios_path.as_deref())?;
    fs::create_dir_all(&out_root)
        .with_context(|| format!("creating output dir {}", out_root.display()))?;

    println!(
        "batch: simulating {} scenario(s) into {}",
        scenarios.len(),
        out_root.display()
    );

    let rules = HosRules::PROPERTY_CARRYING;
    let sim = CycleSimulator::new(rules.clone());
    let started = Instant::now();

    let mut summaries: Vec<ScenarioSummary> = scenarios
        .par_iter()
        .map(|scenario| run_scenario(&sim, &rules, &out_root, scenario))
        .collect::<Result<_>>()?;
    // Summary rows sorted by id; output order must not depend on scheduling.
    summaries.sort_by(|a, b| a.scenario_id.cmp(&b.scenario_id));

    write_summary(&out_root, &summaries)?;

    for s in &summaries {
        println!(
            "  {:<16} {:>3} day(s), {} reset(s), {:>6.2} h driven, stops: {}F/{}B",
            s.scenario_id,
            s.day_count,
            s.reset_count,
            s.drive_hours,
            s.trip.stops.fueling_stops,
            s.trip.stops.required_breaks,
        );
    }
    println!("batch: done in {:.2?}", started.elapsed());

    Ok(())
}
