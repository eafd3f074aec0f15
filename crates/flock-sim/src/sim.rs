//! The `Simulation` struct and its tick loop.

use flock_agent::edge;
use flock_behavior::{
    apply_avoidance, avoidance_force, flocking_forces, is_eating, pursuit_force, target_force,
};
use flock_core::{SimConfig, Tick, Vec2};

use crate::{Flock, PredatorGroup, SimObserver};

/// The complete simulation context: config, both populations, the current
/// tick, and the optional external steering target.
///
/// There is exactly one way to obtain a `Simulation` — through
/// [`SimulationBuilder`][crate::SimulationBuilder] — and no global state
/// anywhere; everything a tick touches is owned right here.
pub struct Simulation {
    /// Global configuration, validated at build time.
    pub config: SimConfig,

    /// The prey population, its grid, and its center.
    pub flock: Flock,

    /// The predator population.
    pub predators: PredatorGroup,

    tick:   Tick,
    target: Option<Vec2>,
}

impl Simulation {
    pub(crate) fn new(config: SimConfig, flock: Flock, predators: PredatorGroup) -> Self {
        Self {
            config,
            flock,
            predators,
            tick:   Tick::ZERO,
            target: None,
        }
    }

    /// The tick about to be (or being) processed.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Supply or clear the external steering target (e.g. a pointer click).
    ///
    /// Prey seek the stored point scaled by `rules.target_weight`; with the
    /// default weight of zero the target is stored but steers nothing.
    pub fn set_target(&mut self, target: Option<Vec2>) {
        self.target = target;
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Run `n` ticks, invoking observer hooks at every boundary.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// Returns the number of prey eaten this tick.  Population size is
    /// non-increasing across a tick; a prey removed here never appears in
    /// the next tick's grid or neighbor queries.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: refresh center + grid from current prey positions ────
        //
        // The grid built here is THE grid for this tick: prey updated later
        // in the traversal still query pre-tick positions, and prey eaten
        // mid-tick stay visible in it until the next refresh.
        self.flock.refresh();

        // ── Phase 2: predators hunt ───────────────────────────────────────
        //
        // Predators move first so that prey avoidance reacts to current
        // predator positions rather than last tick's.
        for slot in 0..self.predators.len() {
            let snapshot = self.predators.bodies()[slot];
            let force = pursuit_force(&snapshot, self.flock.bodies());
            let body = self.predators.body_mut(slot);
            body.apply_force(force);
            edge::before_integrate(body, &self.config.world, self.config.edge);
            body.integrate();
            edge::after_integrate(body, &self.config.world, self.config.edge);
        }

        // ── Phase 3: prey flock, flee, and get eaten ──────────────────────
        //
        // Eaten prey are only marked here; the list itself is never mutated
        // during its own traversal.
        let mut eaten = vec![false; self.flock.len()];
        let mut removals = Vec::new();

        for slot in 0..self.flock.len() {
            let mut body = self.flock.bodies()[slot];

            let neighbors = self.flock.grid().neighbors_of(body.position);
            let forces = flocking_forces(
                &body,
                self.flock.bodies(),
                &neighbors,
                slot as u32,
                self.flock.center(),
                &self.config.rules,
            );
            forces.apply(&mut body);

            if let Some(force) = target_force(&body, self.target, &self.config.rules) {
                body.apply_force(force);
            }

            let avoidance = avoidance_force(&body, self.predators.bodies(), &self.config.rules);
            apply_avoidance(&mut body, &avoidance, self.config.avoidance);

            edge::before_integrate(&mut body, &self.config.world, self.config.edge);
            body.integrate();
            edge::after_integrate(&mut body, &self.config.world, self.config.edge);

            // First predator whose radii overlap this prey eats it; the
            // remaining predators are not checked.
            for (pred_slot, predator) in self.predators.bodies().iter().enumerate() {
                if is_eating(predator, &body) {
                    eaten[slot] = true;
                    removals.push((self.flock.ids()[slot], body.position, self.predators.ids()[pred_slot]));
                    break;
                }
            }

            *self.flock.body_mut(slot) = body;
        }

        // ── Phase 4: compact the flock and report removals ────────────────
        let eaten_count = removals.len();
        for (prey, position, by) in removals {
            observer.on_prey_eaten(now, prey, position, by);
        }
        if eaten_count > 0 {
            self.flock.compact(&eaten);
        }

        observer.on_tick_end(now, self.flock.len());
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.flock, &self.predators);
        }

        self.tick = now + 1;
        eaten_count
    }
}
