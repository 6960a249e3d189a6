//! Tool system for mining and crafting

use serde::{Deserialize, Serialize};

use crate::world::Block;

/// Mining speed with nothing (or a block stack) in the selected slot
pub const BARE_HAND_SPEED: f32 = 1.0;

/// Break time multiplier applied to hardness when the tool is too weak
pub const UNDERTIER_PENALTY: f32 = 5.0;

/// Pickaxes, in tier order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    WoodenPickaxe,
    StonePickaxe,
    IronPickaxe,
    GoldPickaxe,
    DiamondPickaxe,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::WoodenPickaxe,
        ToolKind::StonePickaxe,
        ToolKind::IronPickaxe,
        ToolKind::GoldPickaxe,
        ToolKind::DiamondPickaxe,
    ];

    /// Tier compared against [`Block::min_tool_tier`] (1 = wooden)
    pub fn tier(&self) -> u8 {
        match self {
            ToolKind::WoodenPickaxe => 1,
            ToolKind::StonePickaxe => 2,
            ToolKind::IronPickaxe => 3,
            ToolKind::GoldPickaxe => 4,
            ToolKind::DiamondPickaxe => 5,
        }
    }

    /// Mining speed divisor
    ///
    /// Gold is fragile but faster than diamond.
    pub fn speed(&self) -> f32 {
        match self {
            ToolKind::WoodenPickaxe => 2.0,
            ToolKind::StonePickaxe => 4.0,
            ToolKind::IronPickaxe => 6.0,
            ToolKind::GoldPickaxe => 12.0,
            ToolKind::DiamondPickaxe => 8.0,
        }
    }

    /// Blocks a fresh tool can break before it is used up
    pub fn max_durability(&self) -> u32 {
        match self {
            ToolKind::WoodenPickaxe => 60,
            ToolKind::StonePickaxe => 132,
            ToolKind::IronPickaxe => 251,
            ToolKind::GoldPickaxe => 33,
            ToolKind::DiamondPickaxe => 1562,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::WoodenPickaxe => "Wooden Pickaxe",
            ToolKind::StonePickaxe => "Stone Pickaxe",
            ToolKind::IronPickaxe => "Iron Pickaxe",
            ToolKind::GoldPickaxe => "Gold Pickaxe",
            ToolKind::DiamondPickaxe => "Diamond Pickaxe",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tier of an optional tool; bare hands are tier 0
pub fn tool_tier(tool: Option<ToolKind>) -> u8 {
    tool.map_or(0, |t| t.tier())
}

/// Mining speed of an optional tool
pub fn tool_speed(tool: Option<ToolKind>) -> f32 {
    tool.map_or(BARE_HAND_SPEED, |t| t.speed())
}

/// Whether `tool` meets the block's minimum tier
pub fn can_break(tool: Option<ToolKind>, block: Block) -> bool {
    tool_tier(tool) >= block.min_tool_tier()
}

/// Seconds of continuous mining needed to break `block` with `tool`
pub fn break_time(block: Block, tool: Option<ToolKind>) -> f32 {
    if can_break(tool, block) {
        block.hardness() / tool_speed(tool)
    } else {
        block.hardness() * UNDERTIER_PENALTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order() {
        for pair in ToolKind::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].tier() < pair[1].tier());
        }
    }

    #[test]
    fn test_tool_durability() {
        assert_eq!(ToolKind::WoodenPickaxe.max_durability(), 60);
        assert_eq!(ToolKind::GoldPickaxe.max_durability(), 33);
        assert_eq!(ToolKind::DiamondPickaxe.max_durability(), 1562);
    }

    #[test]
    fn test_can_break() {
        assert!(can_break(None, Block::Dirt));
        assert!(!can_break(None, Block::Stone));
        assert!(can_break(Some(ToolKind::WoodenPickaxe), Block::Stone));
        assert!(can_break(Some(ToolKind::WoodenPickaxe), Block::IronOre));
        assert!(!can_break(Some(ToolKind::StonePickaxe), Block::GoldOre));
        assert!(can_break(Some(ToolKind::IronPickaxe), Block::DiamondOre));
        assert!(can_break(Some(ToolKind::GoldPickaxe), Block::EmeraldOre));
    }

    #[test]
    fn test_break_times() {
        // Bare hands on dirt: hardness / 1
        assert_eq!(break_time(Block::Dirt, None), 0.5);
        // Wooden pickaxe on stone: 1.5 / 2
        assert_eq!(break_time(Block::Stone, Some(ToolKind::WoodenPickaxe)), 0.75);
        // Bare hands on stone: penalty
        assert_eq!(break_time(Block::Stone, None), 7.5);
        // Stone pickaxe on diamond: under tier
        assert_eq!(break_time(Block::DiamondOre, Some(ToolKind::StonePickaxe)), 75.0);
        // Gold beats diamond on speed
        assert!(
            break_time(Block::DiamondOre, Some(ToolKind::GoldPickaxe))
                < break_time(Block::DiamondOre, Some(ToolKind::DiamondPickaxe))
        );
    }
}
