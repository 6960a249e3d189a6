//! Axis-aligned box queries against the block grid

use super::grid::GridWorld;

/// Inclusive range of cell indices covered by a span starting at `start`
/// with the given length
///
/// The last covered cell is `floor((start + len - 1) / cell)`, so a span
/// that ends exactly on a cell boundary does not reach into the next cell.
#[inline]
pub fn cell_span(start: f32, len: f32, cell_size: f32) -> (i32, i32) {
    let first = (start / cell_size).floor() as i32;
    let last = ((start + len - 1.0) / cell_size).floor() as i32;
    (first, last)
}

/// Stateless box-vs-grid collision queries shared by every entity
pub struct CollisionQueries;

impl CollisionQueries {
    /// True when any cell covered by the box is solid or out of bounds
    pub fn box_collides(grid: &GridWorld, cell_size: f32, x: f32, y: f32, w: f32, h: f32) -> bool {
        let (x0, x1) = cell_span(x, w, cell_size);
        let (y0, y1) = cell_span(y, h, cell_size);
        (y0..=y1).any(|cy| (x0..=x1).any(|cx| grid.is_solid_at(cx, cy)))
    }

    /// True when any in-bounds cell covered by the box is liquid
    pub fn box_in_liquid(grid: &GridWorld, cell_size: f32, x: f32, y: f32, w: f32, h: f32) -> bool {
        let (x0, x1) = cell_span(x, w, cell_size);
        let (y0, y1) = cell_span(y, h, cell_size);
        (y0..=y1).any(|cy| (x0..=x1).any(|cx| grid.is_liquid_at(cx, cy)))
    }

    /// Grid cell containing a world-space point
    #[inline]
    pub fn cell_at(cell_size: f32, x: f32, y: f32) -> (i32, i32) {
        ((x / cell_size).floor() as i32, (y / cell_size).floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block::Block;

    const CELL: f32 = 32.0;

    fn open_grid() -> GridWorld {
        GridWorld::new(10, 10)
    }

    #[test]
    fn test_cell_span_boundaries() {
        assert_eq!(cell_span(0.0, 32.0, CELL), (0, 0));
        assert_eq!(cell_span(0.0, 33.0, CELL), (0, 1));
        assert_eq!(cell_span(31.0, 2.0, CELL), (0, 1));
        assert_eq!(cell_span(-1.0, 2.0, CELL), (-1, 0));
    }

    #[test]
    fn test_empty_grid_interior_is_free() {
        let grid = open_grid();
        assert!(!CollisionQueries::box_collides(&grid, CELL, 40.0, 40.0, 16.0, 32.0));
        assert!(!CollisionQueries::box_in_liquid(&grid, CELL, 40.0, 40.0, 16.0, 32.0));
    }

    #[test]
    fn test_out_of_bounds_always_collides() {
        let grid = open_grid();
        let edge = 10.0 * CELL;
        for (x, y) in [(-5.0, 40.0), (40.0, -5.0), (edge - 4.0, 40.0), (40.0, edge - 4.0)] {
            assert!(
                CollisionQueries::box_collides(&grid, CELL, x, y, 8.0, 8.0),
                "box at ({}, {}) should hit the boundary",
                x,
                y
            );
        }
    }

    #[test]
    fn test_solid_cell_collides() {
        let mut grid = open_grid();
        grid.set(3, 3, Block::Dirt);
        // Box touching the cell's left edge from outside does not overlap it
        assert!(!CollisionQueries::box_collides(&grid, CELL, 80.0, 96.0, 16.0, 16.0));
        assert!(CollisionQueries::box_collides(&grid, CELL, 81.0, 96.0, 16.0, 16.0));
    }

    #[test]
    fn test_water_is_liquid_not_solid() {
        let mut grid = open_grid();
        grid.set(2, 2, Block::Water);
        assert!(!CollisionQueries::box_collides(&grid, CELL, 64.0, 64.0, 12.0, 12.0));
        assert!(CollisionQueries::box_in_liquid(&grid, CELL, 64.0, 64.0, 12.0, 12.0));
    }

    #[test]
    fn test_out_of_bounds_is_never_liquid() {
        let grid = open_grid();
        assert!(!CollisionQueries::box_in_liquid(&grid, CELL, -40.0, -40.0, 12.0, 12.0));
    }

    #[test]
    fn test_degenerate_box() {
        let mut grid = open_grid();
        grid.set(1, 1, Block::Stone);
        // Zero-size box at a cell's origin resolves to the cell before it
        assert!(!CollisionQueries::box_collides(&grid, CELL, 64.0, 64.0, 0.0, 0.0));
        assert!(CollisionQueries::box_collides(&grid, CELL, 33.0, 33.0, 0.0, 0.0));
    }

    #[test]
    fn test_cell_at() {
        assert_eq!(CollisionQueries::cell_at(CELL, 0.0, 0.0), (0, 0));
        assert_eq!(CollisionQueries::cell_at(CELL, 63.9, 64.0), (1, 2));
        assert_eq!(CollisionQueries::cell_at(CELL, -0.5, 10.0), (-1, 0));
    }
}
