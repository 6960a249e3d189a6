//! # Voxelgrid - 2D tile world simulation
//!
//! Procedural terrain on a fixed block grid, box-vs-grid collision physics
//! for the player and animals, and the mining, inventory and crafting loop
//! that ties them together. Rendering and input are left to the host.

pub mod config;
pub mod creature;
pub mod entity;
pub mod error;
pub mod simulation;
pub mod world;

pub use crate::config::SimConfig;
pub use crate::error::WorldError;

/// Common imports for internal use
pub mod prelude {
    pub use crate::config::SimConfig;
    pub use crate::entity::InputState;
    pub use crate::world::{Block, GridWorld, World, WorldGenConfig};
    pub use glam::Vec2;
}
