//! Unit tests for the uniform grid.

use flock_core::{Vec2, WorldConfig};

use crate::{GridError, SpatialGrid};

fn world(width: f32, height: f32, cell_size: f32) -> WorldConfig {
    WorldConfig { width, height, cell_size }
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn dimensions_round_up() {
        let grid = SpatialGrid::new(&world(1200.0, 600.0, 100.0)).unwrap();
        assert_eq!(grid.cols(), 12);
        assert_eq!(grid.rows(), 6);

        // 250 / 100 → 3 columns, not 2.
        let grid = SpatialGrid::new(&world(250.0, 100.0, 100.0)).unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 1);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert!(matches!(
            SpatialGrid::new(&world(100.0, 100.0, 0.0)),
            Err(GridError::CellSize(_))
        ));
        assert!(matches!(
            SpatialGrid::new(&world(0.0, 100.0, 10.0)),
            Err(GridError::WorldDims { .. })
        ));
        assert!(SpatialGrid::new(&world(100.0, 100.0, f32::NAN)).is_err());
    }

    #[test]
    fn starts_empty() {
        let grid = SpatialGrid::new(&world(100.0, 100.0, 10.0)).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);
    }
}

#[cfg(test)]
mod rebuild {
    use super::*;

    #[test]
    fn every_position_lands_in_exactly_one_cell() {
        let mut grid = SpatialGrid::new(&world(300.0, 300.0, 100.0)).unwrap();
        let positions = vec![
            Vec2::new(50.0, 50.0),
            Vec2::new(150.0, 50.0),
            Vec2::new(250.0, 250.0),
            Vec2::new(250.0, 250.0), // duplicate position is fine
        ];
        grid.rebuild(&positions);
        assert_eq!(grid.len(), positions.len());
        assert_eq!(grid.cell(0, 0), &[0]);
        assert_eq!(grid.cell(1, 0), &[1]);
        assert_eq!(grid.cell(2, 2), &[2, 3]);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut grid = SpatialGrid::new(&world(300.0, 300.0, 100.0)).unwrap();
        let positions: Vec<Vec2> = (0..20)
            .map(|i| Vec2::new((i * 17 % 300) as f32, (i * 29 % 300) as f32))
            .collect();

        grid.rebuild(&positions);
        let first: Vec<Vec<u32>> = (0..3)
            .flat_map(|r| (0..3).map(move |c| (c, r)))
            .map(|(c, r)| grid.cell(c, r).to_vec())
            .collect();

        grid.rebuild(&positions);
        let second: Vec<Vec<u32>> = (0..3)
            .flat_map(|r| (0..3).map(move |c| (c, r)))
            .map(|(c, r)| grid.cell(c, r).to_vec())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_population_yields_empty_grid() {
        let mut grid = SpatialGrid::new(&world(300.0, 300.0, 100.0)).unwrap();
        grid.rebuild(&[Vec2::new(10.0, 10.0)]);
        grid.rebuild(&[]);
        assert!(grid.is_empty());
    }

    #[test]
    fn out_of_bounds_positions_clamp_to_border_cells() {
        let mut grid = SpatialGrid::new(&world(300.0, 300.0, 100.0)).unwrap();
        grid.rebuild(&[Vec2::new(-50.0, -50.0), Vec2::new(1000.0, 1000.0)]);
        assert_eq!(grid.cell(0, 0), &[0]);
        assert_eq!(grid.cell(2, 2), &[1]);
    }
}

#[cfg(test)]
mod neighbors {
    use super::*;

    #[test]
    fn von_neumann_footprint_only() {
        // 3×3 grid; occupant in every cell.  The center query must see the
        // center plus the four orthogonal cells — never the corners.
        let mut grid = SpatialGrid::new(&world(300.0, 300.0, 100.0)).unwrap();
        let positions: Vec<Vec2> = (0..3)
            .flat_map(|r| (0..3).map(move |c| Vec2::new(c as f32 * 100.0 + 50.0, r as f32 * 100.0 + 50.0)))
            .collect();
        grid.rebuild(&positions);

        let mut got = grid.neighbors_of(Vec2::new(150.0, 150.0));
        got.sort_unstable();
        // Slots laid out row-major: corners are 0, 2, 6, 8.
        assert_eq!(got, vec![1, 3, 4, 5, 7]);
    }

    #[test]
    fn corner_query_never_sees_diagonal_cell() {
        // Occupant diagonally adjacent to the corner cell, geometrically
        // closer than an occupant two orthogonal cells away — still excluded.
        let mut grid = SpatialGrid::new(&world(300.0, 300.0, 100.0)).unwrap();
        let positions = vec![
            Vec2::new(10.0, 10.0),   // corner cell (0,0)
            Vec2::new(110.0, 110.0), // diagonal cell (1,1), ~140 units away
            Vec2::new(150.0, 10.0),  // orthogonal cell (1,0), same row
        ];
        grid.rebuild(&positions);

        let got = grid.neighbors_of(Vec2::new(10.0, 10.0));
        assert!(got.contains(&0));
        assert!(got.contains(&2));
        assert!(!got.contains(&1), "diagonal occupant leaked into the query");
    }

    #[test]
    fn out_of_bounds_cells_skipped_silently() {
        let mut grid = SpatialGrid::new(&world(100.0, 100.0, 100.0)).unwrap();
        grid.rebuild(&[Vec2::new(50.0, 50.0)]);
        // Single-cell grid: all four adjacent cells are out of bounds.
        assert_eq!(grid.neighbors_of(Vec2::new(50.0, 50.0)), vec![0]);
    }

    #[test]
    fn returns_fresh_list_each_call() {
        let mut grid = SpatialGrid::new(&world(200.0, 200.0, 100.0)).unwrap();
        grid.rebuild(&[Vec2::new(50.0, 50.0)]);
        let a = grid.neighbors_of(Vec2::new(50.0, 50.0));
        let b = grid.neighbors_of(Vec2::new(50.0, 50.0));
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }
}
