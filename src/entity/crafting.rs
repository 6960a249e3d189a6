//! Tool crafting from inventory materials

use super::inventory::Inventory;
use super::tools::ToolKind;
use crate::world::Block;

/// Materials consumed to make one tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    pub output: ToolKind,
    pub inputs: &'static [(Block, u32)],
}

static RECIPES: [Recipe; 5] = [
    Recipe {
        output: ToolKind::WoodenPickaxe,
        inputs: &[(Block::Wood, 3)],
    },
    Recipe {
        output: ToolKind::StonePickaxe,
        inputs: &[(Block::Wood, 2), (Block::Stone, 3)],
    },
    Recipe {
        output: ToolKind::IronPickaxe,
        inputs: &[(Block::Wood, 2), (Block::IronOre, 3)],
    },
    Recipe {
        output: ToolKind::GoldPickaxe,
        inputs: &[(Block::Wood, 2), (Block::GoldOre, 3)],
    },
    Recipe {
        output: ToolKind::DiamondPickaxe,
        inputs: &[(Block::Wood, 2), (Block::DiamondOre, 3)],
    },
];

impl Recipe {
    /// Every recipe, in tool tier order
    pub fn all() -> &'static [Recipe] {
        &RECIPES
    }

    pub fn for_tool(kind: ToolKind) -> &'static Recipe {
        &RECIPES[kind as usize]
    }

    /// Whether the inventory holds every input (both regions count)
    pub fn satisfied_by(&self, inventory: &Inventory) -> bool {
        self.inputs
            .iter()
            .all(|&(block, amount)| inventory.count_block(block) >= amount)
    }
}

/// What happened to a crafting request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftOutcome {
    Crafted(ToolKind),
    MissingMaterials,
    NoFreeSlot,
}

/// Crafting system - stateless recipe application
pub struct CraftingSystem;

impl CraftingSystem {
    /// Craft `kind` if the inventory has the materials and, once they are
    /// consumed, a free slot for the tool
    ///
    /// A stack drained by the recipe frees its slot for the result. A
    /// rejected request leaves the inventory untouched.
    pub fn craft(inventory: &mut Inventory, kind: ToolKind) -> CraftOutcome {
        let recipe = Recipe::for_tool(kind);
        if !recipe.satisfied_by(inventory) {
            log::debug!("[CRAFTING] {} rejected: missing materials", kind);
            return CraftOutcome::MissingMaterials;
        }

        let mut crafted = inventory.clone();
        for &(block, amount) in recipe.inputs {
            crafted.remove_blocks(block, amount);
        }
        if !crafted.add_tool(kind) {
            log::debug!("[CRAFTING] {} rejected: no free slot", kind);
            return CraftOutcome::NoFreeSlot;
        }

        *inventory = crafted;
        log::info!("[CRAFTING] Crafted {}", kind);
        CraftOutcome::Crafted(kind)
    }
}
