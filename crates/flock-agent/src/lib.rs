//! `flock-agent` — the physics and steering layer shared by both species.
//!
//! Prey and predators differ only in parameters and in which rule functions
//! drive them; the physics state and the steering primitive are identical.
//! [`Body`] is that shared composition struct — a plain value, no dynamic
//! dispatch, since the set of species is closed and small.

pub mod body;
pub mod edge;

#[cfg(test)]
mod tests;

pub use body::{Body, Species};
pub use edge::{after_integrate, before_integrate, repel_force, wrap};
