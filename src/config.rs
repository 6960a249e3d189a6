//! Simulation configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `voxelgrid.ron` file (if exists)
//! 3. Environment variables prefixed with `VOXELGRID_`
//!
//! Example environment variable: `VOXELGRID_PLAYER__REACH=150`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::creature::AnimalParams;
use crate::world::{PlayerPhysicsParams, WorldGenConfig};

/// Top-level simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// World units per cell edge
    pub cell_size: f32,
    /// Fixed world seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
    pub worldgen: WorldGenConfig,
    pub player: PlayerPhysicsParams,
    pub animals: AnimalParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            cell_size: 32.0,
            seed: None,
            worldgen: WorldGenConfig::default(),
            player: PlayerPhysicsParams::default(),
            animals: AnimalParams::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `voxelgrid.ron` file (if exists)
    /// 3. Environment variables prefixed with `VOXELGRID_` (highest priority)
    ///
    /// Nested sections missing from every layer fall back to their defaults.
    pub fn load() -> Result<Self> {
        Self::load_from("voxelgrid")
    }

    /// Same layering as [`SimConfig::load`] with a custom file stem
    pub fn load_from(name: &str) -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("width", 200_i64)?
            .set_default("height", 100_i64)?
            .set_default("cell_size", 32.0)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(name)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (VOXELGRID_PLAYER__REACH, etc.)
            .add_source(
                Environment::with_prefix("VOXELGRID")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Grid dimensions must be positive for generation to place anything
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        anyhow::ensure!(self.cell_size > 0.0, "cell size must be positive, got {}", self.cell_size);
        Ok(())
    }
}
