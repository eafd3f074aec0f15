//! Boundary handling — both configured variants.
//!
//! `Wrap` is a position fix-up applied after integration (toroidal plane).
//! `Repel` is a steering rule applied before integration: inside the margin
//! it discards every force accumulated so far and substitutes one inward
//! push, making wall avoidance the last, dominant rule of the tick.

use flock_core::{EdgePolicy, Vec2, WorldConfig};

use crate::Body;

/// Wrap `body.position` toroidally at the plane boundary.
pub fn wrap(body: &mut Body, world: &WorldConfig) {
    if body.position.x < 0.0 {
        body.position.x = world.width;
    } else if body.position.x > world.width {
        body.position.x = 0.0;
    }
    if body.position.y < 0.0 {
        body.position.y = world.height;
    } else if body.position.y > world.height {
        body.position.y = 0.0;
    }
}

/// Inward repulsion force when `body` is within `margin` of any edge.
///
/// The force points away from every nearby edge at once (a corner pushes
/// diagonally inward) and is normalized to `magnitude`.  `None` outside the
/// margin band.
pub fn repel_force(body: &Body, world: &WorldConfig, margin: f32, magnitude: f32) -> Option<Vec2> {
    let mut dir = Vec2::ZERO;
    if body.position.x < margin {
        dir.x += 1.0;
    } else if body.position.x > world.width - margin {
        dir.x -= 1.0;
    }
    if body.position.y < margin {
        dir.y += 1.0;
    } else if body.position.y > world.height - margin {
        dir.y -= 1.0;
    }
    if dir == Vec2::ZERO {
        None
    } else {
        Some(dir.normalize_to(magnitude))
    }
}

/// Apply the pre-integration half of `policy`.
///
/// Under `Repel`, an active repulsion zeroes all accumulated acceleration
/// before the inward force is applied.  Under `Wrap` this is a no-op.
pub fn before_integrate(body: &mut Body, world: &WorldConfig, policy: EdgePolicy) {
    if let EdgePolicy::Repel { margin, magnitude } = policy
        && let Some(force) = repel_force(body, world, margin, magnitude)
    {
        body.clear_acceleration();
        body.apply_force(force);
    }
}

/// Apply the post-integration half of `policy` (the toroidal wrap).
pub fn after_integrate(body: &mut Body, world: &WorldConfig, policy: EdgePolicy) {
    if policy == EdgePolicy::Wrap {
        wrap(body, world);
    }
}
