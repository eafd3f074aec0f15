//! The predator population container.

use flock_agent::Body;
use flock_core::{PredatorId, SpeciesConfig, Vec2};

/// Owns the predator list.  Predators are never removed, so slots and IDs
/// coincide for the lifetime of a run; the parallel ID vector exists for
/// symmetry with [`Flock`][crate::Flock] and for observer reporting.
pub struct PredatorGroup {
    bodies: Vec<Body>,
    ids:    Vec<PredatorId>,
}

impl PredatorGroup {
    pub fn new() -> Self {
        Self { bodies: Vec::new(), ids: Vec::new() }
    }

    /// Add one predator at rest at `position`; returns its stable ID.
    pub fn spawn(&mut self, position: Vec2, species: &SpeciesConfig) -> PredatorId {
        let id = PredatorId(self.bodies.len() as u32);
        self.bodies.push(Body::spawn(position, species));
        self.ids.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn ids(&self) -> &[PredatorId] {
        &self.ids
    }

    /// Read-only iteration over live predators — the renderer interface.
    pub fn iter(&self) -> impl Iterator<Item = (PredatorId, &Body)> + '_ {
        self.ids.iter().copied().zip(self.bodies.iter())
    }

    pub(crate) fn body_mut(&mut self, slot: usize) -> &mut Body {
        &mut self.bodies[slot]
    }
}

impl Default for PredatorGroup {
    fn default() -> Self {
        Self::new()
    }
}
