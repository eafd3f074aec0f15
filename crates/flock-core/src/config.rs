//! Simulation configuration.
//!
//! Everything tunable lives in one explicit [`SimConfig`] value: world
//! geometry, per-species physics constants, prey rule radii and weights,
//! the edge and avoidance policy selectors, population counts, and the RNG
//! seed.  There are no ambient globals — the config is handed to the
//! builder once and owned by the simulation from then on.
//!
//! Validation is fail-fast: [`SimConfig::validate`] rejects degenerate
//! geometry before anything is allocated, so a simulation is never partially
//! initialized.

use crate::{CoreError, CoreResult};

/// Speed/steer multiplier the default constants are expressed through, kept
/// from the reference tuning so the stock parameter set feels identical.
pub const VELOCITY_SCALE: f32 = 1.3;

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// The rectangular simulation plane and its spatial-grid cell size.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Plane width in world units.  Must be positive and finite.
    pub width: f32,
    /// Plane height in world units.  Must be positive and finite.
    pub height: f32,
    /// Side length of one uniform-grid cell.  Must be positive and finite.
    /// Neighbor queries only see the von Neumann cell footprint, so this
    /// should be at least the largest behavior radius for good fidelity.
    pub cell_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width:     1200.0,
            height:    600.0,
            cell_size: 100.0,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> CoreResult<()> {
        ensure_positive("world.width", self.width)?;
        ensure_positive("world.height", self.height)?;
        ensure_positive("world.cell_size", self.cell_size)?;
        Ok(())
    }
}

// ── SpeciesConfig ─────────────────────────────────────────────────────────────

/// Physics constants shared by every agent of one species.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesConfig {
    /// Magnitude every desired velocity is normalized to when steering.
    pub max_speed: f32,
    /// Upper bound on the magnitude of any single steering force.
    pub max_steer: f32,
    /// Divides applied forces before they reach the acceleration accumulator.
    pub mass: f32,
    /// Body radius, used for the eating-distance test (and by renderers).
    pub radius: f32,
}

impl SpeciesConfig {
    /// Stock prey tuning: quick but with a shallow turn rate.
    pub fn prey() -> Self {
        Self {
            max_speed: 6.0 * VELOCITY_SCALE,
            max_steer: 0.2 * VELOCITY_SCALE,
            mass:      1.0,
            radius:    3.0,
        }
    }

    /// Stock predator tuning: faster and heavier-turning than prey.
    pub fn predator() -> Self {
        Self {
            max_speed: 8.0 * VELOCITY_SCALE,
            max_steer: 0.4 * VELOCITY_SCALE,
            mass:      1.0,
            radius:    7.0,
        }
    }

    pub fn validate(&self, species: &'static str) -> CoreResult<()> {
        for (field, value) in [
            ("max_speed", self.max_speed),
            ("max_steer", self.max_steer),
            ("mass", self.mass),
            ("radius", self.radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::Config(format!(
                    "{species}.{field} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ── PreyRules ─────────────────────────────────────────────────────────────────

/// Radii and weights for the prey's competing behavioral rules.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreyRules {
    /// Alignment (and general neighborhood) radius.
    pub flock_radius: f32,
    /// Radius inside which neighbors repel; smaller than `flock_radius`.
    pub separation_radius: f32,
    /// Scale on the steer-toward-flock-center force.
    pub cohesion_weight: f32,
    /// Scale on the match-neighbor-velocity force.
    pub alignment_weight: f32,
    /// Scale on the repel-from-close-neighbors force.
    pub separation_weight: f32,
    /// Optional hard cap on the separation force magnitude, applied after
    /// weighting.  `None` leaves the steer clamp as the only bound.
    pub separation_cap: Option<f32>,
    /// Predator detection radius for the avoidance rule.
    pub flee_radius: f32,
    /// Each individual flee force is normalized to this magnitude.
    pub flee_magnitude: f32,
    /// Scale on the seek force toward the externally supplied steering
    /// target.  Zero (the default) disables the behavior entirely.
    pub target_weight: f32,
}

impl Default for PreyRules {
    fn default() -> Self {
        Self {
            flock_radius:      100.0,
            separation_radius: 50.0,
            cohesion_weight:   0.75,
            alignment_weight:  1.5,
            separation_weight: 1.0,
            separation_cap:    None,
            flee_radius:       100.0,
            flee_magnitude:    5.0,
            target_weight:     0.0,
        }
    }
}

impl PreyRules {
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("flock_radius", self.flock_radius),
            ("separation_radius", self.separation_radius),
            ("flee_radius", self.flee_radius),
            ("flee_magnitude", self.flee_magnitude),
        ] {
            ensure_positive(field, value)?;
        }
        for (field, value) in [
            ("cohesion_weight", self.cohesion_weight),
            ("alignment_weight", self.alignment_weight),
            ("separation_weight", self.separation_weight),
            ("target_weight", self.target_weight),
        ] {
            if !value.is_finite() {
                return Err(CoreError::Config(format!(
                    "prey rule {field} must be finite, got {value}"
                )));
            }
        }
        if let Some(cap) = self.separation_cap {
            ensure_positive("separation_cap", cap)?;
        }
        Ok(())
    }
}

// ── Policy selectors ──────────────────────────────────────────────────────────

/// What happens when an agent reaches the plane boundary.
///
/// Both variants appear in deployed tunings of this simulation, so the
/// choice is configuration, not code.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgePolicy {
    /// Teleport to the opposite edge (toroidal plane).  Applied to the
    /// position after integration.
    Wrap,
    /// Within `margin` of any edge, discard all accumulated acceleration and
    /// apply a single inward steering force of the given magnitude — wall
    /// avoidance is always the last, dominant rule.
    Repel { margin: f32, magnitude: f32 },
}

impl EdgePolicy {
    pub fn validate(&self) -> CoreResult<()> {
        if let EdgePolicy::Repel { margin, magnitude } = *self {
            ensure_positive("edge.margin", margin)?;
            ensure_positive("edge.magnitude", magnitude)?;
        }
        Ok(())
    }
}

/// When predator avoidance zeroes the acceleration accumulated by the
/// flocking rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AvoidancePolicy {
    /// Zero only when the summed flee force is nonzero.
    #[default]
    IfFleeing,
    /// Zero whenever any predator is inside the detection radius, even if
    /// the flee forces cancel out.
    Always,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration — the single source of every tunable.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    pub world: WorldConfig,

    /// Prey physics constants.
    pub prey: SpeciesConfig,

    /// Predator physics constants.
    pub predator: SpeciesConfig,

    /// Prey behavioral rule tuning.
    pub rules: PreyRules,

    /// Boundary handling, shared by both species.
    pub edge: EdgePolicy,

    /// Avoidance dominance policy.
    pub avoidance: AvoidancePolicy,

    /// Prey spawned at init.  Zero is legal — predation can empty the flock
    /// at any time regardless.
    pub prey_count: usize,

    /// Predators spawned at init.  Zero is legal; prey then reduce to pure
    /// flocking.
    pub predator_count: usize,

    /// Master RNG seed for initial placement.  The same seed always produces
    /// identical runs.
    pub seed: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    /// The stock scenario: 30 prey and 1 predator on a 1200×600 wrapped plane.
    fn default() -> Self {
        Self {
            world:                   WorldConfig::default(),
            prey:                    SpeciesConfig::prey(),
            predator:                SpeciesConfig::predator(),
            rules:                   PreyRules::default(),
            edge:                    EdgePolicy::Wrap,
            avoidance:               AvoidancePolicy::IfFleeing,
            prey_count:              30,
            predator_count:          1,
            seed:                    42,
            snapshot_interval_ticks: 0,
        }
    }
}

impl SimConfig {
    /// Check every field group; an `Err` means nothing may be built from
    /// this config.
    pub fn validate(&self) -> CoreResult<()> {
        self.world.validate()?;
        self.prey.validate("prey")?;
        self.predator.validate("predator")?;
        self.rules.validate()?;
        self.edge.validate()?;
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ensure_positive(field: &'static str, value: f32) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!(
            "{field} must be positive and finite, got {value}"
        )))
    }
}
