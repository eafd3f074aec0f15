//! Simulation observer trait — the renderer's seam into the core.
//!
//! The core never draws anything.  A renderer (or recorder, or test probe)
//! implements [`SimObserver`], reads live agents through the population
//! views it is handed, and learns about removals through
//! [`on_prey_eaten`][SimObserver::on_prey_eaten] so it can release whatever
//! drawing resource it attached to that agent.

use flock_core::{PredatorId, PreyId, Tick, Vec2};

use crate::{Flock, PredatorGroup};

/// Callbacks invoked by [`Simulation::tick`][crate::Simulation::tick] at key
/// points in the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console eat log
///
/// ```rust,ignore
/// struct EatLog;
///
/// impl SimObserver for EatLog {
///     fn on_prey_eaten(&mut self, tick: Tick, prey: PreyId, pos: Vec2, by: PredatorId) {
///         println!("{tick}: {by} ate {prey} at {pos}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per prey removed this tick, after the traversal, with the
    /// prey's final position and the predator that ate it.
    fn on_prey_eaten(&mut self, _tick: Tick, _prey: PreyId, _position: Vec2, _by: PredatorId) {}

    /// Called at the end of each tick; `prey_alive` is the post-predation
    /// population size.
    fn on_tick_end(&mut self, _tick: Tick, _prey_alive: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks) with read-only views of both populations, so recorders can
    /// capture positions without the sim knowing any output format.
    fn on_snapshot(&mut self, _tick: Tick, _flock: &Flock, _predators: &PredatorGroup) {}
}

/// A [`SimObserver`] that does nothing.  Use when driving the sim without
/// callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
