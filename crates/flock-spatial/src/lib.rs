//! `flock-spatial` — uniform-grid spatial index.
//!
//! Partitions the simulation plane into fixed-size square cells so that
//! neighbor lookups touch a handful of cells instead of the whole
//! population.  The grid is rebuilt wholesale once per tick and holds only
//! slot indices into the population it was built from — it never owns
//! agents and never outlives one tick's rebuild.

pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::SpatialGrid;
