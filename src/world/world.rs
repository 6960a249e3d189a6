//! World - owns the grid, the player and the animal population

use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::block::Block;
use super::generation::{GenerationReport, WorldGenerator};
use super::grid::GridWorld;
use super::mining_system::{InteractionOutcome, MiningSystem};
use super::player_physics::PlayerPhysicsSystem;
use super::render_data::{AnimalRenderData, MiningRenderData, PlayerRenderData};
use crate::config::SimConfig;
use crate::creature::CreatureManager;
use crate::entity::{CraftOutcome, CraftingSystem, InputState, Player};

/// Mixed into the world seed for the simulation stream so that AI and
/// spawning rolls never replay the generation sequence
const SIM_STREAM_SALT: u64 = 0x5EED_A11E_7E57_0001;

/// Everything that happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub interaction: InteractionOutcome,
    pub crafted: Option<CraftOutcome>,
    pub animals_removed: usize,
}

/// The simulated world
pub struct World {
    grid: GridWorld,
    cell_size: f32,
    seed: u64,
    config: SimConfig,
    generation: GenerationReport,

    pub player: Player,
    pub creatures: CreatureManager,

    /// Shared stream for AI, animal physics and spawning
    rng: Xoshiro256StarStar,

    /// Simulated seconds since creation
    time: f64,
    ticks: u64,
}

impl World {
    /// Generate a world from `seed` and populate it
    pub fn generate(config: SimConfig, seed: u64) -> Self {
        let generator = WorldGenerator::from_config(seed, config.worldgen.clone());
        let (grid, report) = generator.generate(config.width, config.height);
        Self::assemble(config, seed, grid, report)
    }

    /// Wrap an existing grid, populating it with the configured animals
    pub fn from_grid(config: SimConfig, seed: u64, grid: GridWorld) -> Self {
        Self::assemble(config, seed, grid, GenerationReport::default())
    }

    fn assemble(mut config: SimConfig, seed: u64, grid: GridWorld, generation: GenerationReport) -> Self {
        config.width = grid.width();
        config.height = grid.height();
        let cell_size = config.cell_size;

        let mut rng = Xoshiro256StarStar::seed_from_u64(seed ^ SIM_STREAM_SALT);
        let mut creatures = CreatureManager::new(config.animals.clone());
        creatures.spawn_initial(&grid, cell_size, &mut rng);

        let player = Player::spawn(grid.width(), cell_size);
        log::info!(
            "World ready: {}x{} cells, seed {}, {} animals",
            grid.width(),
            grid.height(),
            seed,
            creatures.count()
        );

        Self {
            grid,
            cell_size,
            seed,
            config,
            generation,
            player,
            creatures,
            rng,
            time: 0.0,
            ticks: 0,
        }
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    /// Mutable grid access for editing tools and scripted scenarios
    pub fn grid_mut(&mut self) -> &mut GridWorld {
        &mut self.grid
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn generation_report(&self) -> &GenerationReport {
        &self.generation
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Block at a grid cell; out-of-bounds reads as the boundary block
    pub fn block_at(&self, x: i32, y: i32) -> Block {
        self.grid.get(x, y)
    }

    /// World-space size of the grid
    pub fn extent(&self) -> Vec2 {
        Vec2::new(
            self.grid.width() as f32 * self.cell_size,
            self.grid.height() as f32 * self.cell_size,
        )
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Order: panel toggles and inventory input, crafting, player physics,
    /// animals, then mining and placing.
    pub fn tick(&mut self, input: &InputState, dt: f32) -> TickReport {
        let mut report = TickReport::default();

        self.handle_inventory_input(input);

        if let Some(kind) = input.craft {
            if self.player.crafting_open {
                report.crafted = Some(CraftingSystem::craft(&mut self.player.inventory, kind));
            }
        }

        PlayerPhysicsSystem::update(
            &mut self.player,
            input,
            &self.grid,
            self.cell_size,
            &self.config.player,
            dt,
        );

        report.animals_removed = self.creatures.update(
            &self.grid,
            self.cell_size,
            self.player.position(),
            &mut self.rng,
            dt,
        );

        report.interaction = MiningSystem::update(
            &mut self.player,
            input,
            &mut self.grid,
            self.cell_size,
            self.config.player.reach,
            dt,
        );

        self.time += dt as f64;
        self.ticks += 1;
        report
    }

    fn handle_inventory_input(&mut self, input: &InputState) {
        if input.toggle_inventory {
            self.player.toggle_inventory();
        }
        if input.toggle_crafting {
            self.player.toggle_crafting();
        }

        let inventory = &mut self.player.inventory;
        if self.player.inventory_open {
            if let Some(slot) = input.inventory_click {
                inventory.click(slot);
            }
        } else {
            if let Some(index) = input.select_slot {
                inventory.select(index);
            }
            if input.scroll_delta != 0 {
                inventory.scroll(input.scroll_delta);
            }
        }
    }

    pub fn render_player(&self) -> PlayerRenderData {
        PlayerRenderData::from_player(&self.player)
    }

    pub fn render_animals(&self) -> Vec<AnimalRenderData> {
        self.creatures.animals().map(AnimalRenderData::from_animal).collect()
    }

    pub fn render_mining(&self) -> Option<MiningRenderData> {
        MiningRenderData::from_progress(&self.player.mining)
    }
}
