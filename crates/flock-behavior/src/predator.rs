//! Predator rules: nearest-prey pursuit and the eating test.

use flock_agent::Body;
use flock_core::Vec2;

/// Slot index of the prey nearest to `body`, by linear scan.
///
/// Deliberately not grid-accelerated: predator counts are tiny and the scan
/// must consider the entire flock, not just one cell neighborhood.
pub fn nearest_prey(body: &Body, prey: &[Body]) -> Option<usize> {
    let mut nearest: Option<(usize, f32)> = None;
    for (slot, other) in prey.iter().enumerate() {
        let dist = body.position.distance(other.position);
        match nearest {
            Some((_, best)) if dist >= best => {}
            _ => nearest = Some((slot, dist)),
        }
    }
    nearest.map(|(slot, _)| slot)
}

/// Steering force toward the nearest prey.
///
/// An empty flock yields the zero force — "no target" is an ordinary
/// outcome, never an error.
pub fn pursuit_force(body: &Body, prey: &[Body]) -> Vec2 {
    match nearest_prey(body, prey) {
        Some(slot) => body.seek(prey[slot].position),
        None => Vec2::ZERO,
    }
}

/// `true` iff the center distance is strictly less than the sum of the two
/// body radii.
#[inline]
pub fn is_eating(predator: &Body, prey: &Body) -> bool {
    predator.within_distance(prey.position, predator.radius + prey.radius)
}
