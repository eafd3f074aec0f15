//! The `Body` physics state and the Reynolds steering primitive.

use flock_core::{SpeciesConfig, Vec2};

/// Which species a body belongs to.  Behavioral differences live entirely in
/// configuration and in which rule functions the tick loop calls; the tag
/// exists for observers and output rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Species {
    Prey,
    Predator,
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Prey => write!(f, "prey"),
            Species::Predator => write!(f, "predator"),
        }
    }
}

/// Common physics state for one agent.
///
/// Forces accumulate additively into `acceleration` over a tick — that
/// accumulation is the composition mechanism for competing behavioral rules
/// — and are consumed by exactly one [`integrate`][Body::integrate] call at
/// the end of the tick.
#[derive(Copy, Clone, Debug)]
pub struct Body {
    /// Current location; mutated once per tick by integration.
    pub position: Vec2,
    /// Bounded implicitly through the steering math, never clamped directly.
    pub velocity: Vec2,
    /// Per-tick force accumulator, reset to zero by integration.
    pub acceleration: Vec2,
    pub max_speed: f32,
    pub max_steer: f32,
    pub mass: f32,
    /// Body radius, used for the eating-distance test.
    pub radius: f32,
}

impl Body {
    /// Create a body at rest at `position` with the given species constants.
    pub fn spawn(position: Vec2, species: &SpeciesConfig) -> Self {
        Self {
            position,
            velocity:     Vec2::ZERO,
            acceleration: Vec2::ZERO,
            max_speed:    species.max_speed,
            max_steer:    species.max_steer,
            mass:         species.mass,
            radius:       species.radius,
        }
    }

    /// Accumulate a force: `a += f / mass`.
    ///
    /// May be called any number of times per tick by different rules before
    /// integration.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    /// Discard everything accumulated so far this tick.  Used by the
    /// dominant rules (predator avoidance, wall repulsion) that preempt the
    /// ordinary force mix.
    #[inline]
    pub fn clear_acceleration(&mut self) {
        self.acceleration = Vec2::ZERO;
    }

    /// Advance one tick: `v += a; p += v; a = 0`.
    ///
    /// Must run exactly once per tick, after all force accumulation.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    /// Reynolds steering: `desired.normalize_to(max_speed) - velocity`,
    /// with the result's magnitude clamped to `max_steer`.
    ///
    /// Returns the force; the caller decides whether and how to apply it.
    pub fn steer(&self, desired: Vec2) -> Vec2 {
        let mut force = desired.normalize_to(self.max_speed) - self.velocity;
        if force.length() > self.max_steer {
            force = force.normalize_to(self.max_steer);
        }
        force
    }

    /// Steering force toward `target`.
    #[inline]
    pub fn seek(&self, target: Vec2) -> Vec2 {
        self.steer(target - self.position)
    }

    /// Steering force directly away from `target`.
    #[inline]
    pub fn flee(&self, target: Vec2) -> Vec2 {
        self.steer(self.position - target)
    }

    /// Strict (boundary-exclusive) Euclidean distance test.
    #[inline]
    pub fn within_distance(&self, other: Vec2, margin: f32) -> bool {
        self.position.distance(other) < margin
    }
}
