//! World generation configuration - serializable parameters for every pass
//!
//! `WorldGenConfig::default()` reproduces the stock world. Presets are plain
//! RON documents; the seed is NOT part of the config, so the same config with
//! a different seed yields a different world.

use serde::{Deserialize, Serialize};

use super::block::Block;
use crate::error::WorldError;

/// Complete world generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Display name for this configuration
    pub name: String,

    /// Heightmap and strata
    pub terrain: TerrainParams,

    /// Disk-shaped cave carvers
    pub caves: CaveParams,

    /// Elliptical surface lakes
    pub lakes: LakeParams,

    /// Surface-following river channels
    pub rivers: RiverParams,

    /// Tree placement and shape
    pub trees: TreeParams,

    /// Tall grass tufts on the surface
    pub decoration: DecorationParams,

    /// Depth-banded ore replacement of stone
    pub ores: OreParams,
}

/// Heightmap and layer depths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Horizontal noise frequency (default: 0.1)
    pub noise_scale: f32,
    /// Height of the hills in rows (default: 30.0)
    pub amplitude: f32,
    /// Row of the highest possible surface (default: 40)
    pub baseline: i32,
    /// Rows of dirt between the grass and the stone (default: 15)
    pub dirt_depth: i32,
    /// Shift the noise window by a seed-derived offset (default: false)
    ///
    /// Off keeps the stock heightmap for every seed; features still vary.
    pub seeded_heightmap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveParams {
    pub count: u32,
    /// Columns kept clear of cave centres at both edges (default: 5)
    pub edge_margin: i32,
    /// Shallowest row for a cave centre (default: 60)
    pub min_row: i32,
    /// Rows kept clear of cave centres at the bottom (default: 5)
    pub bottom_margin: i32,
    pub min_radius: i32,
    pub max_radius: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LakeParams {
    pub count: u32,
    /// Columns kept clear of lake centres at both edges (default: 30)
    pub edge_margin: i32,
    pub min_width: i32,
    pub max_width: i32,
    pub min_depth: i32,
    pub max_depth: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiverParams {
    pub count: u32,
    /// Columns kept clear at both edges (default: 10)
    pub edge_margin: i32,
    pub min_width: i32,
    pub max_width: i32,
    pub min_depth: i32,
    pub max_depth: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    pub attempts: u32,
    /// Columns kept clear of trunks at both edges (default: 10)
    pub edge_margin: i32,
    /// Trees only grow where the surface is above this row (default: 60)
    pub max_surface_row: i32,
    pub min_height: i32,
    pub max_height: i32,
    /// Euclidean radius of the leaf cluster (default: 3)
    pub canopy_radius: i32,
    /// Chance out of 101 that a canopy cell receives a leaf (default: 80)
    pub canopy_fill: i32,
    /// Half width of the clearance box (default: 3)
    pub clearance_half_width: i32,
    /// Height of the clearance box above the surface (default: 12)
    pub clearance_height: i32,
    /// Half width of the column that must be empty (default: 1)
    pub trunk_half_width: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationParams {
    /// Chance out of 101 per column (default: 15)
    pub chance: i32,
    pub min_height: i32,
    pub max_height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OreParams {
    pub enabled: bool,
    /// Only stone strictly below this row is considered (default: 50)
    pub min_row: i32,
    /// Checked in order; the first successful roll wins
    pub bands: Vec<OreBand>,
}

/// Depth band and odds for one ore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OreBand {
    pub block: Block,
    /// First row of the band (inclusive)
    pub min_row: i32,
    /// Last row of the band (inclusive)
    pub max_row: i32,
    /// Success when `roll(0, 1000) < odds`
    pub odds: i32,
}

impl OreBand {
    pub fn contains(&self, row: i32) -> bool {
        row >= self.min_row && row <= self.max_row
    }
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            terrain: TerrainParams::default(),
            caves: CaveParams::default(),
            lakes: LakeParams::default(),
            rivers: RiverParams::default(),
            trees: TreeParams::default(),
            decoration: DecorationParams::default(),
            ores: OreParams::default(),
        }
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            noise_scale: 0.1,
            amplitude: 30.0,
            baseline: 40,
            dirt_depth: 15,
            seeded_heightmap: false,
        }
    }
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            count: 30,
            edge_margin: 5,
            min_row: 60,
            bottom_margin: 5,
            min_radius: 2,
            max_radius: 4,
        }
    }
}

impl Default for LakeParams {
    fn default() -> Self {
        Self {
            count: 3,
            edge_margin: 30,
            min_width: 8,
            max_width: 16,
            min_depth: 4,
            max_depth: 8,
        }
    }
}

impl Default for RiverParams {
    fn default() -> Self {
        Self {
            count: 2,
            edge_margin: 10,
            min_width: 2,
            max_width: 4,
            min_depth: 3,
            max_depth: 6,
        }
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            attempts: 40,
            edge_margin: 10,
            max_surface_row: 60,
            min_height: 5,
            max_height: 12,
            canopy_radius: 3,
            canopy_fill: 80,
            clearance_half_width: 3,
            clearance_height: 12,
            trunk_half_width: 1,
        }
    }
}

impl Default for DecorationParams {
    fn default() -> Self {
        Self {
            chance: 15,
            min_height: 1,
            max_height: 3,
        }
    }
}

impl Default for OreParams {
    fn default() -> Self {
        Self {
            enabled: true,
            min_row: 50,
            bands: default_ore_bands(),
        }
    }
}

fn default_ore_bands() -> Vec<OreBand> {
    vec![
        OreBand {
            block: Block::CoalOre,
            min_row: 51,
            max_row: 85,
            odds: 80,
        },
        OreBand {
            block: Block::IronOre,
            min_row: 55,
            max_row: 95,
            odds: 50,
        },
        OreBand {
            block: Block::GoldOre,
            min_row: 70,
            max_row: 99,
            odds: 25,
        },
        OreBand {
            block: Block::DiamondOre,
            min_row: 85,
            max_row: 99,
            odds: 10,
        },
        OreBand {
            block: Block::EmeraldOre,
            min_row: 75,
            max_row: 85,
            odds: 15,
        },
    ]
}

// ============================================================================
// RON presets
// ============================================================================

impl WorldGenConfig {
    /// Parse a RON preset; missing fields fall back to defaults
    pub fn from_ron(text: &str) -> Result<Self, WorldError> {
        Ok(ron::from_str(text)?)
    }

    /// Pretty-printed RON document for this config
    pub fn to_ron(&self) -> Result<String, WorldError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Shallowest row at which `block` can be placed by the ore pass
    pub fn shallowest_ore_row(&self, block: Block) -> Option<i32> {
        self.ores
            .bands
            .iter()
            .filter(|band| band.block == block)
            .map(|band| band.min_row.max(self.ores.min_row.saturating_add(1)))
            .min()
    }

    /// Terrain, strata and ores only
    pub fn preset_bare() -> Self {
        Self {
            name: "Bare".to_string(),
            caves: CaveParams {
                count: 0,
                ..CaveParams::default()
            },
            lakes: LakeParams {
                count: 0,
                ..LakeParams::default()
            },
            rivers: RiverParams {
                count: 0,
                ..RiverParams::default()
            },
            trees: TreeParams {
                attempts: 0,
                ..TreeParams::default()
            },
            decoration: DecorationParams {
                chance: 0,
                ..DecorationParams::default()
            },
            ..Self::default()
        }
    }

    /// More caves and richer ore bands
    pub fn preset_cave_heavy() -> Self {
        let mut ores = OreParams::default();
        for band in &mut ores.bands {
            band.odds *= 2;
        }
        Self {
            name: "Cave Heavy".to_string(),
            caves: CaveParams {
                count: 90,
                min_row: 55,
                max_radius: 6,
                ..CaveParams::default()
            },
            ores,
            ..Self::default()
        }
    }

    /// Flat terrain (good for building)
    pub fn preset_flat() -> Self {
        Self {
            name: "Flat World".to_string(),
            terrain: TerrainParams {
                amplitude: 0.0,
                baseline: 50,
                ..TerrainParams::default()
            },
            ..Self::default()
        }
    }
}
