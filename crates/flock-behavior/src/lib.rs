//! `flock-behavior` — the steering rules of both species, as pure functions.
//!
//! Nothing in this crate owns agents or drives ticks.  Each function reads
//! body state and returns forces (or verdicts); the tick loop in `flock-sim`
//! decides when to compute them and how the dominance policies combine them.
//! Keeping the rules side-effect-free is what makes them testable in
//! isolation with hand-placed bodies.

pub mod predator;
pub mod prey;


pub use predator::{is_eating, nearest_prey, pursuit_force};
pub use prey::{Avoidance, FlockingForces, apply_avoidance, avoidance_force, flocking_forces, target_force};
