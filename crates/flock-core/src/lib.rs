//! `flock-core` — foundational types for the `rust_flock` predator-prey
//! simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It
//! intentionally has no `flock-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`vec2`]     | `Vec2` 2D point/vector value type                     |
//! | [`ids`]      | `PreyId`, `PredatorId`                                |
//! | [`time`]     | `Tick`                                                |
//! | [`config`]   | `SimConfig`, `WorldConfig`, `SpeciesConfig`, policies |
//! | [`rng`]      | `SimRng` (deterministic placement RNG)                |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AvoidancePolicy, EdgePolicy, PreyRules, SimConfig, SpeciesConfig, WorldConfig,
};
pub use error::{CoreError, CoreResult};
pub use ids::{PredatorId, PreyId};
pub use rng::SimRng;
pub use time::Tick;
pub use vec2::Vec2;
