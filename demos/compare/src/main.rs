//! compare — head-to-head run of the two dispatch policies.
//!
//! Runs the default building (3 elevators, 10 floors) under algorithm A
//! (nearest car) and algorithm B (cost-based) with the same seed and horizon,
//! prints the comparison table, and writes per-run CSVs under
//! `output/compare/A/` and `output/compare/B/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_core::SimConfig;
use lift_dispatch::Algorithm;
use lift_output::{CsvWriter, JourneyOutputObserver};
use lift_sim::{SimulationBuilder, SimulationResult};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:    u64 = 42;
const HORIZON: f64 = 500.0;

// ── One run ───────────────────────────────────────────────────────────────────

fn run_one(algorithm: Algorithm, config: &SimConfig) -> Result<SimulationResult> {
    let dir = format!("output/compare/{algorithm}");
    std::fs::create_dir_all(&dir)?;
    let writer = CsvWriter::new(Path::new(&dir))?;
    let mut obs = JourneyOutputObserver::new(writer);

    let mut sim = SimulationBuilder::new(config.clone())
        .algorithm(algorithm)
        .seed(SEED)
        .build()?;

    let t0 = Instant::now();
    let result = sim.run(HORIZON, &mut obs)?;
    let elapsed = t0.elapsed();

    obs.finish_run(&result);
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "Algorithm {algorithm}: {} people served, {:.3} s wall time, CSVs in {dir}/",
        result.total_served,
        elapsed.as_secs_f64()
    );
    Ok(result)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig::default();

    println!("=== compare — elevator dispatch policies ===");
    println!(
        "Elevators: {}  |  Floors: {}  |  Capacity: {}  |  Horizon: {HORIZON}  |  Seed: {SEED}",
        config.num_elevators, config.num_floors, config.capacity
    );
    println!();

    let a = run_one(Algorithm::Nearest, &config)?;
    let b = run_one(Algorithm::CostBased, &config)?;
    println!();

    println!("{:<22} {:>10} {:>10}", "Metric", "A", "B");
    println!("{}", "-".repeat(44));
    println!("{:<22} {:>10.3} {:>10.3}", "Avg wait", a.avg_wait, b.avg_wait);
    println!("{:<22} {:>10.3} {:>10.3}", "Avg trip", a.avg_trip, b.avg_trip);
    println!(
        "{:<22} {:>10} {:>10}",
        "People served", a.total_served, b.total_served
    );
    println!(
        "{:<22} {:>10.1} {:>10.1}",
        "Total movement", a.total_movement, b.total_movement
    );
    println!();

    for result in [&a, &b] {
        println!("Per-elevator, algorithm {}:", result.algorithm);
        for record in &result.per_elevator {
            println!(
                "  {}  moved {:>6.1} time units over {:>4} floors",
                record.id, record.total_movement_time, record.floors_traveled
            );
        }
    }

    Ok(())
}
