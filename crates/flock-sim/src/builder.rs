//! Fluent builder for constructing a [`Simulation`].

use flock_core::{SimConfig, SimRng, Vec2};

use crate::{Flock, PredatorGroup, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required input
///
/// - [`SimConfig`] — world geometry, species constants, rule tuning,
///   policies, population counts, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                    |
/// |---------------------------|--------------------------------------------|
/// | `.prey_positions(v)`      | `prey_count` uniform-random placements     |
/// | `.predator_positions(v)`  | `predator_count` uniform-random placements |
///
/// Explicit positions exist for scripted scenarios and tests; their lengths
/// must match the configured counts.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(SimConfig::default()).build()?;
/// sim.run_ticks(600, &mut NoopObserver);
/// ```
pub struct SimulationBuilder {
    config:             SimConfig,
    prey_positions:     Option<Vec<Vec2>>,
    predator_positions: Option<Vec<Vec2>>,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            prey_positions:     None,
            predator_positions: None,
        }
    }

    /// Place prey at exactly these positions instead of random ones.
    pub fn prey_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.prey_positions = Some(positions);
        self
    }

    /// Place predators at exactly these positions instead of random ones.
    pub fn predator_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.predator_positions = Some(positions);
        self
    }

    /// Validate the config, spawn both populations, and return a
    /// ready-to-tick [`Simulation`].
    ///
    /// Fails fast: any configuration error leaves nothing allocated.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);

        let prey_positions = resolve_positions(
            self.prey_positions,
            self.config.prey_count,
            "prey positions",
            &self.config,
            &mut rng,
        )?;
        let predator_positions = resolve_positions(
            self.predator_positions,
            self.config.predator_count,
            "predator positions",
            &self.config,
            &mut rng,
        )?;

        let mut flock = Flock::new(&self.config.world)?;
        for position in prey_positions {
            flock.spawn(position, &self.config.prey);
        }

        let mut predators = PredatorGroup::new();
        for position in predator_positions {
            predators.spawn(position, &self.config.predator);
        }

        Ok(Simulation::new(self.config, flock, predators))
    }
}

/// Explicit positions when supplied (length-checked), uniform-random
/// placements otherwise.
fn resolve_positions(
    explicit: Option<Vec<Vec2>>,
    count:    usize,
    what:     &'static str,
    config:   &SimConfig,
    rng:      &mut SimRng,
) -> SimResult<Vec<Vec2>> {
    match explicit {
        Some(positions) => {
            if positions.len() != count {
                return Err(SimError::CountMismatch {
                    expected: count,
                    got:      positions.len(),
                    what,
                });
            }
            Ok(positions)
        }
        None => Ok((0..count)
            .map(|_| {
                Vec2::new(
                    rng.gen_range(0.0..config.world.width),
                    rng.gen_range(0.0..config.world.height),
                )
            })
            .collect()),
    }
}
