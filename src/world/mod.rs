//! World management - block grid, generation, collision and world systems

mod block;
pub mod collision;
pub mod generation;
mod grid;
pub mod mining_system;
pub mod noise;
pub mod player_physics;
pub mod render_data;
pub mod rng_trait;
#[allow(clippy::module_inception)]
mod world;
pub mod worldgen_config;

pub use block::{Block, BlockDef, BlockFlags};
pub use collision::CollisionQueries;
pub use generation::{GenerationReport, WorldGenerator};
pub use grid::{GridWorld, BOUNDARY_BLOCK};
pub use mining_system::{BrokenBlock, InteractionOutcome, MiningSystem};
pub use noise::NoiseField;
pub use player_physics::{MovementParams, PlayerPhysicsParams, PlayerPhysicsSystem};
pub use render_data::{AnimalRenderData, MiningRenderData, PlayerRenderData};
pub use rng_trait::WorldRng;
pub use world::{TickReport, World};
pub use worldgen_config::WorldGenConfig;
