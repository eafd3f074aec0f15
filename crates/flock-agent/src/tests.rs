//! Unit tests for the body physics and edge policies.

use flock_core::{EdgePolicy, SpeciesConfig, Vec2, WorldConfig};

use crate::{Body, after_integrate, before_integrate, repel_force, wrap};

const EPS: f32 = 1e-4;

fn test_species() -> SpeciesConfig {
    SpeciesConfig {
        max_speed: 4.0,
        max_steer: 0.5,
        mass:      2.0,
        radius:    3.0,
    }
}

fn body_at(x: f32, y: f32) -> Body {
    Body::spawn(Vec2::new(x, y), &test_species())
}

#[cfg(test)]
mod physics {
    use super::*;

    #[test]
    fn integrate_applies_summed_forces_over_mass() {
        let mut b = body_at(10.0, 10.0);
        b.velocity = Vec2::new(1.0, 0.0);

        b.apply_force(Vec2::new(2.0, 0.0));
        b.apply_force(Vec2::new(0.0, 4.0));
        b.integrate();

        // v' = v + (F1 + F2) / m = (1,0) + (2,4)/2 = (2,2)
        assert!((b.velocity.x - 2.0).abs() < EPS);
        assert!((b.velocity.y - 2.0).abs() < EPS);
        // p' = p + v'
        assert!((b.position.x - 12.0).abs() < EPS);
        assert!((b.position.y - 12.0).abs() < EPS);
        // accumulator reset
        assert_eq!(b.acceleration, Vec2::ZERO);
    }

    #[test]
    fn forces_accumulate_until_cleared() {
        let mut b = body_at(0.0, 0.0);
        b.apply_force(Vec2::new(2.0, 2.0));
        b.clear_acceleration();
        b.apply_force(Vec2::new(4.0, 0.0));
        b.integrate();
        assert!((b.velocity.x - 2.0).abs() < EPS);
        assert_eq!(b.velocity.y, 0.0);
    }

    #[test]
    fn within_distance_is_strict() {
        let b = body_at(0.0, 0.0);
        assert!(b.within_distance(Vec2::new(3.0, 4.0), 5.01));
        assert!(!b.within_distance(Vec2::new(3.0, 4.0), 5.0));
    }
}

#[cfg(test)]
mod steering {
    use super::*;

    #[test]
    fn steer_clamps_to_max_steer() {
        let mut b = body_at(0.0, 0.0);
        b.velocity = Vec2::new(-4.0, 0.0);
        // Desired points the opposite way, so the raw steer is far larger
        // than max_steer and must be renormalized.
        let force = b.steer(Vec2::new(1.0, 0.0));
        assert!((force.length() - b.max_steer).abs() < EPS);
        assert!(force.x > 0.0);
    }

    #[test]
    fn small_corrections_pass_unclamped() {
        let mut b = body_at(0.0, 0.0);
        b.velocity = Vec2::new(3.9, 0.0);
        let force = b.steer(Vec2::new(1.0, 0.0));
        // desired = (4,0); steer = (0.1, 0) — under the clamp.
        assert!(force.length() < b.max_steer);
        assert!((force.x - 0.1).abs() < EPS);
    }

    #[test]
    fn seek_points_toward_target() {
        let b = body_at(0.0, 0.0);
        let force = b.seek(Vec2::new(10.0, 0.0));
        assert!(force.x > 0.0);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn flee_points_away_from_target() {
        let b = body_at(0.0, 0.0);
        let force = b.flee(Vec2::new(10.0, 0.0));
        assert!(force.x < 0.0);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn steer_with_degenerate_desired_opposes_velocity() {
        let mut b = body_at(0.0, 0.0);
        b.velocity = Vec2::new(0.2, 0.0);
        // Zero desired → normalize recovers zero → steer = -velocity.
        let force = b.steer(Vec2::ZERO);
        assert!((force.x + 0.2).abs() < EPS);
    }
}

#[cfg(test)]
mod edges {
    use super::*;

    fn test_world() -> WorldConfig {
        WorldConfig { width: 100.0, height: 50.0, cell_size: 10.0 }
    }

    #[test]
    fn wrap_teleports_across_both_axes() {
        let world = test_world();

        let mut b = body_at(-1.0, 25.0);
        wrap(&mut b, &world);
        assert_eq!(b.position.x, 100.0);

        let mut b = body_at(101.0, 25.0);
        wrap(&mut b, &world);
        assert_eq!(b.position.x, 0.0);

        let mut b = body_at(50.0, 51.0);
        wrap(&mut b, &world);
        assert_eq!(b.position.y, 0.0);
    }

    #[test]
    fn wrap_leaves_interior_untouched() {
        let world = test_world();
        let mut b = body_at(50.0, 25.0);
        wrap(&mut b, &world);
        assert_eq!(b.position, Vec2::new(50.0, 25.0));
    }

    #[test]
    fn repel_force_pushes_inward() {
        let world = test_world();

        let near_left = body_at(5.0, 25.0);
        let f = repel_force(&near_left, &world, 10.0, 2.0).unwrap();
        assert!(f.x > 0.0);
        assert_eq!(f.y, 0.0);
        assert!((f.length() - 2.0).abs() < EPS);

        let near_corner = body_at(95.0, 45.0);
        let f = repel_force(&near_corner, &world, 10.0, 2.0).unwrap();
        assert!(f.x < 0.0 && f.y < 0.0);

        let interior = body_at(50.0, 25.0);
        assert!(repel_force(&interior, &world, 10.0, 2.0).is_none());
    }

    #[test]
    fn repel_overrides_accumulated_acceleration() {
        let world = test_world();
        let policy = EdgePolicy::Repel { margin: 10.0, magnitude: 2.0 };

        let mut b = body_at(5.0, 25.0);
        b.apply_force(Vec2::new(-100.0, 100.0));
        before_integrate(&mut b, &world, policy);

        // Only the inward force survives: a = repel / mass = (1, 0).
        assert!((b.acceleration.x - 1.0).abs() < EPS);
        assert!(b.acceleration.y.abs() < EPS);
    }

    #[test]
    fn repel_policy_does_not_wrap() {
        let world = test_world();
        let policy = EdgePolicy::Repel { margin: 10.0, magnitude: 2.0 };
        let mut b = body_at(101.0, 25.0);
        after_integrate(&mut b, &world, policy);
        assert_eq!(b.position.x, 101.0);
    }

    #[test]
    fn wrap_policy_ignores_pre_integration_hook() {
        let world = test_world();
        let mut b = body_at(5.0, 25.0);
        b.apply_force(Vec2::new(-3.0, 0.0));
        before_integrate(&mut b, &world, EdgePolicy::Wrap);
        assert!((b.acceleration.x + 1.5).abs() < EPS); // untouched (mass 2)
    }
}
