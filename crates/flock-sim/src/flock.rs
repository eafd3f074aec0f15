//! The prey population container.

use flock_agent::Body;
use flock_core::{PreyId, SpeciesConfig, Vec2, WorldConfig};
use flock_spatial::{GridResult, SpatialGrid};

/// Owns the prey list, the spatial grid built from it, and the population's
/// average position.
///
/// Storage is two parallel vectors: `bodies[slot]` carries the physics state
/// and `ids[slot]` the stable identity.  Slots shift on removal (the compact
/// pass), IDs never do.  The grid indexes by slot and is only valid between
/// one [`refresh`][Flock::refresh] and the next compact.
pub struct Flock {
    bodies:  Vec<Body>,
    ids:     Vec<PreyId>,
    next_id: u32,
    /// Average prey position, recomputed each tick before the grid rebuild.
    /// Retains its previous value while the flock is empty.
    center: Vec2,
    grid:   SpatialGrid,
}

impl Flock {
    /// An empty flock over `world`.  Fails only on degenerate grid geometry.
    pub fn new(world: &WorldConfig) -> GridResult<Self> {
        Ok(Self {
            bodies:  Vec::new(),
            ids:     Vec::new(),
            next_id: 0,
            center:  Vec2::ZERO,
            grid:    SpatialGrid::new(world)?,
        })
    }

    /// Add one prey at rest at `position`; returns its stable ID.
    pub fn spawn(&mut self, position: Vec2, species: &SpeciesConfig) -> PreyId {
        let id = PreyId(self.next_id);
        self.next_id += 1;
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

    /// The population's average position as of the last refresh.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn ids(&self) -> &[PreyId] {
        &self.ids
    }

    /// Read-only iteration over live prey — the renderer interface.
    pub fn iter(&self) -> impl Iterator<Item = (PreyId, &Body)> + '_ {
        self.ids.iter().copied().zip(self.bodies.iter())
    }

    pub(crate) fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub(crate) fn body_mut(&mut self, slot: usize) -> &mut Body {
        &mut self.bodies[slot]
    }

    /// Recompute the center and rebuild the grid from current positions.
    ///
    /// An empty flock keeps its previous center (there is no meaningful
    /// average) and yields an all-empty grid.
    pub(crate) fn refresh(&mut self) {
        if !self.bodies.is_empty() {
            let sum = self
                .bodies
                .iter()
                .fold(Vec2::ZERO, |acc, b| acc + b.position);
            self.center = sum / self.bodies.len() as f32;
        }

        let positions: Vec<Vec2> = self.bodies.iter().map(|b| b.position).collect();
        self.grid.rebuild(&positions);
    }

    /// Remove every slot marked `true` in one pass, preserving the order of
    /// survivors.  Called once per tick after the prey traversal; `eaten`
    /// must be as long as the population.
    pub(crate) fn compact(&mut self, eaten: &[bool]) {
        debug_assert_eq!(eaten.len(), self.bodies.len());
        let mut slot = 0;
        self.bodies.retain(|_| {
            let keep = !eaten[slot];
            slot += 1;
            keep
        });
        let mut slot = 0;
        self.ids.retain(|_| {
            let keep = !eaten[slot];
            slot += 1;
            keep
        });
    }
}
