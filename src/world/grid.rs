//! Fixed-size block grid
//!
//! Row 0 is the top of the world and rows grow downward. Coordinates are
//! signed so that callers can query outside the grid; anything outside
//! `[0, width) x [0, height)` reads as the boundary wall.

use super::block::Block;

/// Block reported for every out-of-bounds coordinate
pub const BOUNDARY_BLOCK: Block = Block::Stone;

/// Bounded 2D array of blocks, allocated once
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridWorld {
    width: i32,
    height: i32,
    cells: Vec<Block>,
}

impl GridWorld {
    /// Create a grid filled with Air
    ///
    /// Non-positive dimensions yield an empty grid where every query is
    /// out of bounds.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Block::Air; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Read a cell, or `None` outside the grid
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32) -> Option<Block> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Read a cell; out-of-bounds coordinates report [`BOUNDARY_BLOCK`]
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Block {
        self.get_checked(x, y).unwrap_or(BOUNDARY_BLOCK)
    }

    /// Overwrite a cell. Returns false (and does nothing) out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, block: Block) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = block;
        true
    }

    /// True for every tag except Air and Water
    #[inline]
    pub fn is_solid(block: Block) -> bool {
        block.is_solid()
    }

    /// True only for Water
    #[inline]
    pub fn is_liquid(block: Block) -> bool {
        block.is_liquid()
    }

    /// Solid cell or outside the grid
    #[inline]
    pub fn is_solid_at(&self, x: i32, y: i32) -> bool {
        self.get_checked(x, y).map_or(true, Block::is_solid)
    }

    /// Liquid cell inside the grid
    #[inline]
    pub fn is_liquid_at(&self, x: i32, y: i32) -> bool {
        self.get_checked(x, y).is_some_and(Block::is_liquid)
    }

    pub fn fill(&mut self, block: Block) {
        self.cells.fill(block);
    }

    /// First row from the top of column `x` that is not Air
    pub fn first_non_air_row(&self, x: i32) -> Option<i32> {
        (0..self.height).find(|&y| self.get_checked(x, y).is_some_and(|b| b != Block::Air))
    }

    /// First row from the top of column `x` that is neither Air nor Water
    pub fn first_ground_row(&self, x: i32) -> Option<i32> {
        (0..self.height).find(|&y| {
            self.get_checked(x, y)
                .is_some_and(|b| b != Block::Air && b != Block::Water)
        })
    }

    /// Number of cells holding `block`
    pub fn count(&self, block: Block) -> usize {
        self.cells.iter().filter(|&&b| b == block).count()
    }

    /// Per-tag cell counts, indexed by block id
    pub fn histogram(&self) -> [usize; Block::COUNT] {
        let mut counts = [0usize; Block::COUNT];
        for &block in &self.cells {
            counts[block as usize] += 1;
        }
        counts
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Block] {
        &self.cells
    }

    /// One line of glyphs per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|b| b.glyph()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_air() {
        let grid = GridWorld::new(10, 5);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.count(Block::Air), 50);
    }

    #[test]
    fn test_out_of_bounds_reads_as_solid() {
        let grid = GridWorld::new(4, 4);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MIN, i32::MAX)] {
            assert_eq!(grid.get_checked(x, y), None);
            assert_eq!(grid.get(x, y), BOUNDARY_BLOCK);
            assert!(grid.is_solid_at(x, y));
            assert!(!grid.is_liquid_at(x, y));
        }
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut grid = GridWorld::new(4, 4);
        assert!(!grid.set(-1, 2, Block::Stone));
        assert!(!grid.set(4, 2, Block::Stone));
        assert_eq!(grid.count(Block::Air), 16);

        assert!(grid.set(3, 3, Block::Water));
        assert_eq!(grid.get(3, 3), Block::Water);
        assert!(grid.is_liquid_at(3, 3));
        assert!(!grid.is_solid_at(3, 3));
    }

    #[test]
    fn test_set_overwrites_any_block() {
        let mut grid = GridWorld::new(2, 2);
        grid.set(0, 0, Block::DiamondOre);
        grid.set(0, 0, Block::Leaves);
        assert_eq!(grid.get(0, 0), Block::Leaves);
    }

    #[test]
    fn test_column_queries() {
        let mut grid = GridWorld::new(3, 6);
        grid.set(1, 2, Block::Water);
        grid.set(1, 4, Block::Dirt);
        assert_eq!(grid.first_non_air_row(1), Some(2));
        assert_eq!(grid.first_ground_row(1), Some(4));
        assert_eq!(grid.first_ground_row(0), None);
    }

    #[test]
    fn test_ascii_dump() {
        let mut grid = GridWorld::new(3, 2);
        grid.set(0, 1, Block::Stone);
        grid.set(2, 1, Block::Water);
        assert_eq!(grid.to_ascii(), "   \n# ~\n");
    }

    #[test]
    fn test_histogram_totals() {
        let mut grid = GridWorld::new(5, 5);
        grid.fill(Block::Stone);
        grid.set(0, 0, Block::Air);
        let counts = grid.histogram();
        assert_eq!(counts[Block::Stone as usize], 24);
        assert_eq!(counts.iter().sum::<usize>(), 25);
    }

    #[test]
    fn test_empty_grid() {
        let grid = GridWorld::new(0, -3);
        assert_eq!(grid.cells().len(), 0);
        assert!(grid.is_solid_at(0, 0));
        assert_eq!(grid.to_ascii(), "");
    }
}
