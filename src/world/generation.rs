//! Procedural world generation
//!
//! Generation is a fixed sequence of overwrite-tolerant passes over a
//! [`GridWorld`]: heightmap, strata, caves, lakes, rivers, trees, surface
//! decoration and ore veins. Later passes may destroy earlier structure.
//! Every write goes through [`GridWorld::set`], so no parameter set can
//! write outside the grid.

use std::ops::RangeInclusive;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::block::Block;
use super::grid::GridWorld;
use super::noise::NoiseField;
use super::rng_trait::WorldRng;
use super::worldgen_config::{
    CaveParams, DecorationParams, LakeParams, OreParams, RiverParams, TerrainParams, TreeParams,
    WorldGenConfig,
};

/// Summary of one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Grass row of every column, as computed by the heightmap pass
    pub surface_heights: Vec<i32>,
    pub caves: u32,
    pub lakes: u32,
    pub rivers: u32,
    pub trees: u32,
    pub tufts: u32,
    pub ore_cells: u32,
}

/// Seeded world generator
///
/// The same seed and config always produce the same grid.
pub struct WorldGenerator {
    pub seed: u64,
    config: WorldGenConfig,
    noise: NoiseField,
}

impl WorldGenerator {
    /// Create a generator with the default configuration
    pub fn new(seed: u64) -> Self {
        Self::from_config(seed, WorldGenConfig::default())
    }

    pub fn from_config(seed: u64, config: WorldGenConfig) -> Self {
        let noise = if config.terrain.seeded_heightmap {
            NoiseField::from_seed(seed)
        } else {
            NoiseField::new()
        };
        Self {
            seed,
            config,
            noise,
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Allocate a grid and run every pass over it
    pub fn generate(&self, width: i32, height: i32) -> (GridWorld, GenerationReport) {
        let mut grid = GridWorld::new(width, height);
        let report = self.generate_into(&mut grid);
        (grid, report)
    }

    /// Run every pass over an existing grid, replacing its contents
    pub fn generate_into(&self, grid: &mut GridWorld) -> GenerationReport {
        let mut rng = Xoshiro256StarStar::seed_from_u64(self.seed);
        let cfg = &self.config;

        let surface_heights = compute_heightmap(&self.noise, &cfg.terrain, grid.width());
        fill_strata(grid, &surface_heights, &cfg.terrain);

        let caves = carve_caves(grid, &mut rng, &cfg.caves);
        let lakes = place_lakes(grid, &mut rng, &cfg.lakes, &surface_heights);
        let rivers = place_rivers(grid, &mut rng, &cfg.rivers, &surface_heights);
        let trees = plant_trees(grid, &mut rng, &cfg.trees);
        let tufts = decorate_surface(grid, &mut rng, &cfg.decoration, &surface_heights);
        let ore_cells = place_ores(grid, &mut rng, &cfg.ores);

        let report = GenerationReport {
            surface_heights,
            caves,
            lakes,
            rivers,
            trees,
            tufts,
            ore_cells,
        };

        log::info!(
            "[WORLDGEN] Generated {}x{} world '{}' (seed {}): {} caves, {} lakes, {} rivers, {} trees, {} ore cells",
            grid.width(),
            grid.height(),
            cfg.name,
            self.seed,
            report.caves,
            report.lakes,
            report.rivers,
            report.trees,
            report.ore_cells
        );

        report
    }
}

/// Grass row of each column from the noise field
pub fn compute_heightmap(noise: &NoiseField, params: &TerrainParams, width: i32) -> Vec<i32> {
    (0..width.max(0))
        .map(|x| {
            let n = noise.sample(x as f32 * params.noise_scale, 0.0) * 0.5 + 0.5;
            ((n * params.amplitude) as i32).saturating_add(params.baseline)
        })
        .collect()
}

/// Air above the surface, then grass, dirt and stone
pub fn fill_strata(grid: &mut GridWorld, surface_heights: &[i32], params: &TerrainParams) {
    for (x, &surface) in surface_heights.iter().enumerate() {
        let x = x as i32;
        for y in 0..grid.height() {
            grid.set(x, y, stratum_at(y, surface, params.dirt_depth));
        }
    }
}

/// Block the strata pass places at row `y` of a column whose grass row is `surface`
pub fn stratum_at(y: i32, surface: i32, dirt_depth: i32) -> Block {
    if y > surface.saturating_add(dirt_depth) {
        Block::Stone
    } else if y > surface {
        Block::Dirt
    } else if y == surface {
        Block::Grass
    } else {
        Block::Air
    }
}

/// Offsets `d` in `[-before, after]` that keep `origin + d` inside `[0, len)`
fn offsets_within(origin: i32, before: i32, after: i32, len: i32) -> RangeInclusive<i32> {
    let lo = (-(before as i64)).max(-(origin as i64));
    let hi = (after as i64).min(len as i64 - 1 - origin as i64);
    if lo > hi {
        return 1..=0;
    }
    lo as i32..=hi as i32
}

fn squared_distance(dx: i32, dy: i32) -> i64 {
    let (dx, dy) = (dx as i64, dy as i64);
    (dx * dx).saturating_add(dy * dy)
}

fn carve_caves<R: WorldRng>(grid: &mut GridWorld, rng: &mut R, params: &CaveParams) -> u32 {
    for _ in 0..params.count {
        let cx = rng.roll(params.edge_margin, grid.width().saturating_sub(params.edge_margin));
        let cy = rng.roll(params.min_row, grid.height().saturating_sub(params.bottom_margin));
        let radius = rng.roll(params.min_radius, params.max_radius);
        let reach = squared_distance(radius, 0);

        for dx in offsets_within(cx, radius, radius, grid.width()) {
            for dy in offsets_within(cy, radius, radius, grid.height()) {
                if squared_distance(dx, dy) <= reach {
                    grid.set(cx + dx, cy + dy, Block::Air);
                }
            }
        }
        log::debug!("[WORLDGEN] cave at ({}, {}) r={}", cx, cy, radius);
    }
    params.count
}

fn place_lakes<R: WorldRng>(
    grid: &mut GridWorld,
    rng: &mut R,
    params: &LakeParams,
    surface_heights: &[i32],
) -> u32 {
    let mut placed = 0;
    for _ in 0..params.count {
        let cx = rng.roll(params.edge_margin, grid.width().saturating_sub(params.edge_margin));
        let width = rng.roll(params.min_width, params.max_width).max(1);
        let depth = rng.roll(params.min_depth, params.max_depth);
        let Some(&top) = surface_heights.get(cx as usize) else {
            continue;
        };

        for dy in offsets_within(top, 0, depth.saturating_sub(1), grid.height()) {
            for dx in offsets_within(cx, width / 2, width / 2, grid.width()) {
                let (x, y) = (cx + dx, top + dy);
                let dist = (squared_distance(dx, dy.saturating_mul(2)) as f32).sqrt() / width as f32;
                if dist <= 1.0 && grid.get_checked(x, y).is_some_and(|b| b != Block::Stone) {
                    grid.set(x, y, Block::Water);
                }
            }
        }
        placed += 1;
        log::debug!("[WORLDGEN] lake at x={} (top row {}) {}x{}", cx, top, width, depth);
    }
    placed
}

fn place_rivers<R: WorldRng>(
    grid: &mut GridWorld,
    rng: &mut R,
    params: &RiverParams,
    surface_heights: &[i32],
) -> u32 {
    let w = grid.width();
    for _ in 0..params.count {
        let mut start = rng.roll(params.edge_margin, w / 3);
        let mut end = rng.roll((2 * w as i64 / 3) as i32, w.saturating_sub(params.edge_margin));
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        let width = rng.roll(params.min_width, params.max_width);
        let depth = rng.roll(params.min_depth, params.max_depth);

        for x in start.max(0)..=end.min(w - 1) {
            let Some(&top) = surface_heights.get(x as usize) else {
                continue;
            };
            for dy in offsets_within(top, 0, depth.saturating_sub(1), grid.height()) {
                let bed = dy == depth - 1;
                for dx in offsets_within(x, width / 2, width / 2, w) {
                    let (rx, ry) = (x + dx, top + dy);
                    // Stone in the deepest row stays as the riverbed
                    if bed && grid.get_checked(rx, ry) == Some(Block::Stone) {
                        continue;
                    }
                    grid.set(rx, ry, Block::Water);
                }
            }
        }
        log::debug!(
            "[WORLDGEN] river from x={} to x={} ({} wide, {} deep)",
            start,
            end,
            width,
            depth
        );
    }
    params.count
}

/// Row above the first non-air cell of the column (the tree base)
fn tree_base_row(grid: &GridWorld, x: i32) -> i32 {
    grid.first_non_air_row(x)
        .map_or(grid.height() - 1, |row| row - 1)
}

fn has_tree_clearance(grid: &GridWorld, x: i32, base: i32, params: &TreeParams) -> bool {
    let half = params.clearance_half_width;
    for dx in offsets_within(x, half, half, grid.width()) {
        for dy in offsets_within(base, params.clearance_height, 0, grid.height()) {
            let blocked = grid.get(x + dx, base + dy) != Block::Air;
            if blocked && dy < 0 && dx.abs() <= params.trunk_half_width {
                return false;
            }
        }
    }
    true
}

fn plant_trees<R: WorldRng>(grid: &mut GridWorld, rng: &mut R, params: &TreeParams) -> u32 {
    let mut planted = 0;
    for _ in 0..params.attempts {
        let x = rng.roll(params.edge_margin, grid.width().saturating_sub(params.edge_margin));
        let base = tree_base_row(grid, x);

        let site_ok = base > 0
            && base < params.max_surface_row
            && grid.get_checked(x, base) == Some(Block::Air)
            && grid.get_checked(x, base + 1) == Some(Block::Grass);
        if !site_ok || !has_tree_clearance(grid, x, base, params) {
            continue;
        }

        grow_tree(grid, rng, x, base, params);
        planted += 1;
    }
    planted
}

fn grow_tree<R: WorldRng>(grid: &mut GridWorld, rng: &mut R, x: i32, base: i32, params: &TreeParams) {
    let height = rng.roll(params.min_height, params.max_height);
    for h in 0..height.min(base + 1) {
        grid.set(x, base - h, Block::Wood);
    }

    let r = params.canopy_radius;
    let canopy_y = base.saturating_sub(height).saturating_add(2);
    for dy in offsets_within(canopy_y, r, 1, grid.height()) {
        for dx in offsets_within(x, r, r, grid.width()) {
            let (lx, ly) = (x + dx, canopy_y + dy);
            if grid.get(lx, ly) != Block::Air {
                continue;
            }
            let dist = (squared_distance(dx, dy) as f32).sqrt();
            if dist <= r as f32 && rng.chance_percent(params.canopy_fill) {
                grid.set(lx, ly, Block::Leaves);
            }
        }
    }
    log::debug!("[WORLDGEN] tree at x={} base={} height={}", x, base, height);
}

fn decorate_surface<R: WorldRng>(
    grid: &mut GridWorld,
    rng: &mut R,
    params: &DecorationParams,
    surface_heights: &[i32],
) -> u32 {
    let mut tufts = 0;
    for (x, &surface) in surface_heights.iter().enumerate() {
        let x = x as i32;
        if !rng.chance_percent(params.chance) {
            continue;
        }
        if surface <= 0 || grid.get_checked(x, surface - 1) != Some(Block::Air) {
            continue;
        }
        let height = rng.roll(params.min_height, params.max_height);
        for h in 0..height.min(surface) {
            let y = surface - 1 - h;
            if grid.get_checked(x, y) == Some(Block::Air) {
                grid.set(x, y, Block::Leaves);
            }
        }
        tufts += 1;
    }
    tufts
}

fn place_ores<R: WorldRng>(grid: &mut GridWorld, rng: &mut R, params: &OreParams) -> u32 {
    if !params.enabled {
        return 0;
    }
    let mut placed = 0;
    for y in params.min_row.saturating_add(1).max(0)..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y) != Block::Stone {
                continue;
            }
            let hit = params
                .bands
                .iter()
                .find(|band| band.contains(y) && rng.chance_per_mille(band.odds));
            if let Some(band) = hit {
                grid.set(x, y, band.block);
                placed += 1;
            }
        }
    }
    placed
}
