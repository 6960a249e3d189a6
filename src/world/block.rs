//! Block definitions and the static attribute table

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Classification tag of a single grid cell
///
/// Blocks carry no per-cell state; every attribute is looked up from
/// [`BlockDef`] by tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Block {
    #[default]
    Air = 0,
    Dirt,
    Stone,
    Grass,
    Water,
    Sand,
    Wood,
    Leaves,
    CoalOre,
    IronOre,
    GoldOre,
    DiamondOre,
    EmeraldOre,
}

bitflags! {
    /// Physical classification of a block
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct BlockFlags: u8 {
        /// Blocks entity movement
        const SOLID = 1 << 0;
        /// Entities overlapping it are submerged
        const LIQUID = 1 << 1;
        /// Can be broken by the player
        const MINEABLE = 1 << 2;
    }
}

/// Static attributes of a block tag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockDef {
    pub name: &'static str,
    /// Base color (RGBA)
    pub color: [u8; 4],
    /// Seconds to break with bare hands
    pub hardness: f32,
    pub flags: BlockFlags,
    /// Minimum pickaxe tier required to break at full speed (0 = none)
    pub min_tool_tier: u8,
    /// Character used by text dumps of the grid
    pub glyph: char,
}

const SOLID_MINEABLE: BlockFlags = BlockFlags::SOLID.union(BlockFlags::MINEABLE);

/// Lookup table indexed by `Block as usize`
static BLOCK_DEFS: [BlockDef; Block::COUNT] = [
    BlockDef {
        name: "Air",
        color: [0, 0, 0, 0],
        hardness: 1.0,
        flags: BlockFlags::empty(),
        min_tool_tier: 0,
        glyph: ' ',
    },
    BlockDef {
        name: "Dirt",
        color: [127, 106, 79, 255],
        hardness: 0.5,
        flags: SOLID_MINEABLE,
        min_tool_tier: 0,
        glyph: '%',
    },
    BlockDef {
        name: "Stone",
        color: [130, 130, 130, 255],
        hardness: 1.5,
        flags: SOLID_MINEABLE,
        min_tool_tier: 1,
        glyph: '#',
    },
    BlockDef {
        name: "Grass",
        color: [0, 228, 48, 255],
        hardness: 0.6,
        flags: SOLID_MINEABLE,
        min_tool_tier: 0,
        glyph: '"',
    },
    BlockDef {
        name: "Water",
        color: [100, 150, 255, 180],
        hardness: 1.0,
        flags: BlockFlags::LIQUID.union(BlockFlags::MINEABLE),
        min_tool_tier: 0,
        glyph: '~',
    },
    BlockDef {
        name: "Sand",
        color: [253, 249, 0, 255],
        hardness: 0.5,
        flags: SOLID_MINEABLE,
        min_tool_tier: 0,
        glyph: ':',
    },
    BlockDef {
        name: "Wood",
        color: [139, 69, 19, 255],
        hardness: 2.0,
        flags: SOLID_MINEABLE,
        min_tool_tier: 0,
        glyph: '|',
    },
    BlockDef {
        name: "Leaves",
        color: [50, 170, 50, 255],
        hardness: 0.2,
        flags: SOLID_MINEABLE,
        min_tool_tier: 0,
        glyph: '*',
    },
    BlockDef {
        name: "Coal Ore",
        color: [64, 64, 64, 255],
        hardness: 3.0,
        flags: SOLID_MINEABLE,
        min_tool_tier: 1,
        glyph: 'c',
    },
    BlockDef {
        name: "Iron Ore",
        color: [205, 127, 50, 255],
        hardness: 3.0,
        flags: SOLID_MINEABLE,
        min_tool_tier: 1,
        glyph: 'i',
    },
    BlockDef {
        name: "Gold Ore",
        color: [255, 215, 0, 255],
        hardness: 3.0,
        flags: SOLID_MINEABLE,
        min_tool_tier: 3,
        glyph: 'g',
    },
    BlockDef {
        name: "Diamond Ore",
        color: [185, 242, 255, 255],
        hardness: 15.0,
        flags: SOLID_MINEABLE,
        min_tool_tier: 3,
        glyph: 'd',
    },
    BlockDef {
        name: "Emerald Ore",
        color: [80, 200, 120, 255],
        hardness: 3.0,
        flags: SOLID_MINEABLE,
        min_tool_tier: 3,
        glyph: 'e',
    },
];

impl BlockDef {
    /// Definition reported for raw ids that do not map to any block
    pub const UNKNOWN: BlockDef = BlockDef {
        name: "Unknown",
        color: [255, 255, 255, 255],
        hardness: 1.0,
        flags: BlockFlags::SOLID,
        min_tool_tier: 0,
        glyph: '?',
    };

    /// Look up a definition by raw id, falling back to [`BlockDef::UNKNOWN`]
    pub fn for_id(id: u8) -> &'static BlockDef {
        BLOCK_DEFS.get(id as usize).unwrap_or(&Self::UNKNOWN)
    }
}

impl Block {
    pub const COUNT: usize = 13;

    /// Every block tag, in id order
    pub const ALL: [Block; Block::COUNT] = [
        Block::Air,
        Block::Dirt,
        Block::Stone,
        Block::Grass,
        Block::Water,
        Block::Sand,
        Block::Wood,
        Block::Leaves,
        Block::CoalOre,
        Block::IronOre,
        Block::GoldOre,
        Block::DiamondOre,
        Block::EmeraldOre,
    ];

    #[inline]
    pub fn def(self) -> &'static BlockDef {
        &BLOCK_DEFS[self as usize]
    }

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// True for every block except Air and Water
    #[inline]
    pub fn is_solid(self) -> bool {
        self.def().flags.contains(BlockFlags::SOLID)
    }

    /// True only for Water
    #[inline]
    pub fn is_liquid(self) -> bool {
        self.def().flags.contains(BlockFlags::LIQUID)
    }

    #[inline]
    pub fn is_mineable(self) -> bool {
        self.def().flags.contains(BlockFlags::MINEABLE)
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn color(self) -> [u8; 4] {
        self.def().color
    }

    pub fn hardness(self) -> f32 {
        self.def().hardness
    }

    pub fn min_tool_tier(self) -> u8 {
        self.def().min_tool_tier
    }

    pub fn glyph(self) -> char {
        self.def().glyph
    }
}

impl TryFrom<u8> for Block {
    type Error = WorldError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Block::ALL
            .get(id as usize)
            .copied()
            .ok_or(WorldError::UnknownBlock(id))
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_tag_order() {
        for (index, block) in Block::ALL.iter().enumerate() {
            assert_eq!(block.id() as usize, index);
            assert!(std::ptr::eq(block.def(), BlockDef::for_id(index as u8)));
        }
    }

    #[test]
    fn test_solidity_classification() {
        let non_solid: Vec<Block> = Block::ALL.iter().copied().filter(|b| !b.is_solid()).collect();
        assert_eq!(non_solid, vec![Block::Air, Block::Water]);

        let liquid: Vec<Block> = Block::ALL.iter().copied().filter(|b| b.is_liquid()).collect();
        assert_eq!(liquid, vec![Block::Water]);
    }

    #[test]
    fn test_hardness_values() {
        assert_eq!(Block::Dirt.hardness(), 0.5);
        assert_eq!(Block::Grass.hardness(), 0.6);
        assert_eq!(Block::Leaves.hardness(), 0.2);
        assert_eq!(Block::Stone.hardness(), 1.5);
        assert_eq!(Block::DiamondOre.hardness(), 15.0);
        assert_eq!(Block::Air.hardness(), 1.0);
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Block::try_from(2).unwrap(), Block::Stone);
        assert!(matches!(
            Block::try_from(200),
            Err(WorldError::UnknownBlock(200))
        ));
        assert_eq!(BlockDef::for_id(200).name, "Unknown");
    }

    #[test]
    fn test_air_not_mineable() {
        assert!(!Block::Air.is_mineable());
        assert!(Block::Stone.is_mineable());
        assert_eq!(Block::CoalOre.to_string(), "Coal Ore");
    }
}
