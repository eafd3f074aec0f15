//! Prey rules: separation, alignment, cohesion, and predator avoidance.
//!
//! The flocking rules each produce at most one steering force per tick,
//! computed over the neighbor set the spatial grid returned for this prey.
//! Avoidance is the dominant rule: when it fires (per the configured
//! policy) it discards everything the flocking rules accumulated.

use flock_agent::Body;
use flock_core::{AvoidancePolicy, PreyRules, Vec2};

// ── Flocking ──────────────────────────────────────────────────────────────────

/// The per-rule forces one prey computed this tick.  `None` means the rule
/// had no qualifying neighbors and contributes nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct FlockingForces {
    pub cohesion:   Option<Vec2>,
    pub alignment:  Option<Vec2>,
    pub separation: Option<Vec2>,
}

impl FlockingForces {
    /// Apply every present force to `body`'s accumulator.
    pub fn apply(&self, body: &mut Body) {
        for force in [self.cohesion, self.alignment, self.separation].into_iter().flatten() {
            body.apply_force(force);
        }
    }
}

/// Compute the three flocking forces for one prey.
///
/// `neighbor_slots` is the grid query result (slot indices into `bodies`);
/// `self_slot` and zero-distance duplicates are excluded from every rule.
/// `center` is the flock's average position, maintained by the flock
/// container.
///
/// - *Cohesion*: steer toward `center`, applied once if any neighbor exists,
///   scaled by `cohesion_weight`.
/// - *Alignment*: steer toward the average velocity of neighbors within
///   `flock_radius`, scaled by `alignment_weight`.
/// - *Separation*: inverse-distance-weighted repulsion from neighbors within
///   `separation_radius`, averaged, steered, scaled by `separation_weight`
///   and optionally capped to `separation_cap`.
pub fn flocking_forces(
    body:           &Body,
    bodies:         &[Body],
    neighbor_slots: &[u32],
    self_slot:      u32,
    center:         Vec2,
    rules:          &PreyRules,
) -> FlockingForces {
    let mut velocities = Vec2::ZERO;
    let mut align_count = 0u32;
    let mut separate = Vec2::ZERO;
    let mut sep_count = 0u32;
    let mut saw_neighbor = false;

    for &slot in neighbor_slots {
        if slot == self_slot {
            continue;
        }
        let other = &bodies[slot as usize];
        let dist = body.position.distance(other.position);
        if dist <= 0.0 {
            continue;
        }
        saw_neighbor = true;

        if dist < rules.flock_radius {
            velocities += other.velocity;
            align_count += 1;
        }
        if dist < rules.separation_radius {
            // Repulsion inversely weighted by distance.
            separate += (body.position - other.position).normalized() / dist;
            sep_count += 1;
        }
    }

    let cohesion = saw_neighbor.then(|| body.seek(center) * rules.cohesion_weight);

    let alignment = (align_count > 0).then(|| {
        let average = velocities / align_count as f32;
        body.steer(average) * rules.alignment_weight
    });

    let separation = (sep_count > 0).then(|| {
        let average = separate / sep_count as f32;
        let mut force = body.steer(average) * rules.separation_weight;
        if let Some(cap) = rules.separation_cap
            && force.length() > cap
        {
            force = force.normalize_to(cap);
        }
        force
    });

    FlockingForces { cohesion, alignment, separation }
}

// ── Predator avoidance ────────────────────────────────────────────────────────

/// Result of the avoidance scan: the summed flee force and whether any
/// predator was inside the detection radius at all (the two facts differ
/// when opposing flee forces cancel).
#[derive(Copy, Clone, Debug, Default)]
pub struct Avoidance {
    pub force: Vec2,
    pub predator_in_range: bool,
}

/// Sum a flee force, normalized to `flee_magnitude`, for every predator
/// strictly within `flee_radius` of `body`.
pub fn avoidance_force(body: &Body, predators: &[Body], rules: &PreyRules) -> Avoidance {
    let mut avoidance = Avoidance::default();
    for predator in predators {
        if body.within_distance(predator.position, rules.flee_radius) {
            avoidance.predator_in_range = true;
            avoidance.force += body.flee(predator.position).normalize_to(rules.flee_magnitude);
        }
    }
    avoidance
}

/// Let avoidance preempt the flocking mix according to `policy`.
///
/// When it fires, all acceleration accumulated this tick is discarded and
/// the flee force becomes the only surviving rule.
pub fn apply_avoidance(body: &mut Body, avoidance: &Avoidance, policy: AvoidancePolicy) {
    let fires = match policy {
        AvoidancePolicy::IfFleeing => avoidance.force != Vec2::ZERO,
        AvoidancePolicy::Always => avoidance.predator_in_range,
    };
    if fires {
        body.clear_acceleration();
        body.apply_force(avoidance.force);
    }
}

// ── External steering target ──────────────────────────────────────────────────

/// Seek force toward the externally supplied steering target, or `None` when
/// no target is set or `target_weight` is zero.
pub fn target_force(body: &Body, target: Option<Vec2>, rules: &PreyRules) -> Option<Vec2> {
    if rules.target_weight == 0.0 {
        return None;
    }
    target.map(|point| body.seek(point) * rules.target_weight)
}
