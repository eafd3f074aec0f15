//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `flock-spatial`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid cell size must be positive and finite, got {0}")]
    CellSize(f32),

    #[error("world dimensions must be positive and finite, got {width}×{height}")]
    WorldDims { width: f32, height: f32 },
}

pub type GridResult<T> = Result<T, GridError>;
