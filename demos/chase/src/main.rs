//! chase — headless run of the stock rust_flock scenario.
//!
//! 30 prey flock on a 1200×600 wrapped plane while one predator hunts them.
//! Positions are streamed to CSV so the run can be replayed or plotted by
//! any external tool.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use flock_core::{PredatorId, PreyId, SimConfig, Tick, Vec2};
use flock_output::{CsvWriter, SimOutputObserver};
use flock_sim::{Flock, PredatorGroup, SimObserver, SimulationBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const PREY_COUNT:              usize = 30;
const PREDATOR_COUNT:          usize = 1;
const SEED:                    u64   = 42;
const TOTAL_TICKS:             u64   = 1_800; // ~30 s at 60 ticks per second
const SNAPSHOT_INTERVAL_TICKS: u64   = 10;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: flock_output::writer::OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    removals:      usize,
}

impl<W: flock_output::writer::OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, removals: 0 }
    }
}

impl<W: flock_output::writer::OutputWriter> SimObserver for CountingObserver<W> {
    fn on_prey_eaten(&mut self, tick: Tick, prey: PreyId, position: Vec2, by: PredatorId) {
        self.removals += 1;
        println!("  {tick}: {prey} eaten by {by} at {position}");
        self.inner.on_prey_eaten(tick, prey, position, by);
    }

    fn on_snapshot(&mut self, tick: Tick, flock: &Flock, predators: &PredatorGroup) {
        self.snapshot_rows += flock.len() + predators.len();
        self.inner.on_snapshot(tick, flock, predators);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== chase — rust_flock predator-prey simulation ===");
    println!("Prey: {PREY_COUNT}  |  Predators: {PREDATOR_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Sim config — stock tuning, snapshots every 10 ticks.
    let config = SimConfig {
        prey_count:              PREY_COUNT,
        predator_count:          PREDATOR_COUNT,
        seed:                    SEED,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
        ..SimConfig::default()
    };
    println!(
        "World: {}×{}  |  Ticks: {TOTAL_TICKS}  |  snapshot every {SNAPSHOT_INTERVAL_TICKS} ticks",
        config.world.width, config.world.height
    );
    println!();

    // 2. Build sim.
    let mut sim = SimulationBuilder::new(config).build()?;

    // 3. Set up output.
    std::fs::create_dir_all("output/chase")?;
    let writer = CsvWriter::new(Path::new("output/chase"))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run_ticks(TOTAL_TICKS, &mut obs);
    let elapsed = t0.elapsed();

    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  removals.csv        : {} rows", obs.removals);
    println!(
        "  prey alive          : {} of {PREY_COUNT}",
        sim.flock.len()
    );
    println!();

    // 6. Final predator positions table.
    println!("{:<16} {:<20}", "Predator", "Position");
    println!("{}", "-".repeat(36));
    for (id, body) in sim.predators.iter() {
        println!("{:<16} {:<20}", id.to_string(), body.position.to_string());
    }

    Ok(())
}
