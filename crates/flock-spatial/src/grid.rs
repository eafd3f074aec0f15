//! The uniform grid and its neighborhood query.

use flock_core::{Vec2, WorldConfig};

use crate::{GridError, GridResult};

/// Offsets of the four axis-adjacent cells (von Neumann neighborhood).
const NEIGHBORHOOD: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A uniform grid over the simulation plane.
///
/// Cells hold `u32` slot indices into whatever position list the grid was
/// last rebuilt from.  Dimensions are `ceil(width / cell_size) ×
/// ceil(height / cell_size)`; positions outside the plane are clamped into
/// the border cells, so insertion is total.
///
/// # Query footprint
///
/// [`neighbors_of`][SpatialGrid::neighbors_of] returns the contents of the
/// query cell plus its four axis-adjacent cells — deliberately *not* the
/// 8-connected Moore neighborhood.  Diagonal cells are never considered,
/// even when their occupants are geometrically within a behavior's search
/// radius.  This is an accepted approximation: it keeps the query at five
/// cell reads and the resulting flocks are visually indistinguishable.
pub struct SpatialGrid {
    cell_size: f32,
    cols:      usize,
    rows:      usize,
    /// Row-major cell storage; `cells[row * cols + col]`.
    cells: Vec<Vec<u32>>,
}

impl SpatialGrid {
    /// Build an all-empty grid for `world`.
    ///
    /// Fails fast on degenerate geometry — a grid is never partially
    /// initialized.
    pub fn new(world: &WorldConfig) -> GridResult<Self> {
        if !(world.cell_size.is_finite() && world.cell_size > 0.0) {
            return Err(GridError::CellSize(world.cell_size));
        }
        if !(world.width.is_finite() && world.width > 0.0)
            || !(world.height.is_finite() && world.height > 0.0)
        {
            return Err(GridError::WorldDims {
                width:  world.width,
                height: world.height,
            });
        }

        let cols = (world.width / world.cell_size).ceil() as usize;
        let rows = (world.height / world.cell_size).ceil() as usize;
        Ok(Self {
            cell_size: world.cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); cols * rows],
        })
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Clear and refill every cell from `positions`; the slot index of each
    /// position becomes its entry in the grid.
    ///
    /// O(population).  Idempotent: rebuilding twice from the same slice
    /// yields identical cell contents.  An empty slice yields an all-empty
    /// grid.
    pub fn rebuild(&mut self, positions: &[Vec2]) {
        for cell in &mut self.cells {
            cell.clear();
        }
        for (slot, &pos) in positions.iter().enumerate() {
            let (col, row) = self.cell_of(pos);
            self.cells[row * self.cols + col].push(slot as u32);
        }
    }

    /// Clamped cell coordinates of `pos`.
    #[inline]
    pub fn cell_of(&self, pos: Vec2) -> (usize, usize) {
        let col = ((pos.x / self.cell_size) as isize).clamp(0, self.cols as isize - 1) as usize;
        let row = ((pos.y / self.cell_size) as isize).clamp(0, self.rows as isize - 1) as usize;
        debug_assert!(row * self.cols + col < self.cells.len());
        (col, row)
    }

    /// Slot indices in the cell containing `pos` plus its four axis-adjacent
    /// cells.  Cells outside the grid bounds are skipped silently.
    ///
    /// Returns a fresh list each call; ordering is cell-then-append order
    /// only.  Cost: O(average cell occupancy × 5).
    pub fn neighbors_of(&self, pos: Vec2) -> Vec<u32> {
        let (col, row) = self.cell_of(pos);

        let mut result = self.cells[row * self.cols + col].clone();
        for (dc, dr) in NEIGHBORHOOD {
            let c = col as isize + dc;
            let r = row as isize + dr;
            if c < 0 || c >= self.cols as isize || r < 0 || r >= self.rows as isize {
                continue;
            }
            result.extend_from_slice(&self.cells[r as usize * self.cols + c as usize]);
        }
        result
    }

    /// Read-only view of one cell, mainly for tests and debug overlays.
    pub fn cell(&self, col: usize, row: usize) -> &[u32] {
        &self.cells[row * self.cols + col]
    }

    /// Total entries across all cells.
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}
