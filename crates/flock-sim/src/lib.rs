//! `flock-sim` — tick loop orchestrator for the rust_flock simulation.
//!
//! # One tick, fixed order
//!
//! ```text
//! ① Refresh   — flock recomputes its average-position center (skipped when
//!               empty) and rebuilds the spatial grid from current positions.
//! ② Predators — each predator steers toward its nearest prey and integrates.
//! ③ Prey      — each prey, in list order, runs flocking + avoidance against
//!               the already-updated predators and the pre-tick grid, then
//!               integrates and is tested for predation.
//! ④ Compact   — prey marked eaten during ③ are removed in one pass after
//!               the traversal (never mid-iteration), with one observer
//!               notification per removal.
//! ```
//!
//! There is no terminal state: the driver keeps calling
//! [`Simulation::tick`] (or [`Simulation::run_ticks`]) until it stops.
//! Everything is single-threaded by design — each phase interleaves
//! per-agent compute-then-mutate, so ticks are deterministic without any
//! synchronisation.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::SimConfig;
//! use flock_sim::{NoopObserver, SimulationBuilder};
//!
//! let mut sim = SimulationBuilder::new(SimConfig::default()).build()?;
//! sim.run_ticks(1_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod flock;
pub mod observer;
pub mod predators;
pub mod sim;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use flock::Flock;
pub use observer::{NoopObserver, SimObserver};
pub use predators::PredatorGroup;
pub use sim::Simulation;
