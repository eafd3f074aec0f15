//! Plain data row types written by output backends.

use flock_agent::Species;

/// One agent's position at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub species:  Species,
    /// Stable ID within the species (prey and predator ID spaces are
    /// independent).
    pub agent_id: u32,
    pub x:        f32,
    pub y:        f32,
    /// Body radius, so plots can draw agents at scale.
    pub radius:   f32,
}

/// One prey removed by predation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemovalRow {
    pub tick:        u64,
    pub prey_id:     u32,
    pub predator_id: u32,
    /// Where the prey was when it was eaten.
    pub x:           f32,
    pub y:           f32,
}
