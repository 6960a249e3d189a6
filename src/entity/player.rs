use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{body::Body, inventory::Inventory, tools::ToolKind};
use crate::simulation::mining::MiningProgress;

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub inventory: Inventory,
    pub mining: MiningProgress,
    /// Seconds until another land jump is allowed
    pub jump_cooldown: f32,
    pub inventory_open: bool,
    pub crafting_open: bool,
}

impl Player {
    pub const WIDTH: f32 = 16.0;
    pub const HEIGHT: f32 = 32.0;
    /// Grid row the player spawns on
    pub const SPAWN_ROW: i32 = 20;

    /// Create a new player at the specified position with the starting kit
    pub fn new(position: Vec2) -> Self {
        Player {
            body: Body::new(position, Vec2::new(Self::WIDTH, Self::HEIGHT)),
            inventory: Inventory::starting_kit(),
            mining: MiningProgress::new(),
            jump_cooldown: 0.0,
            inventory_open: false,
            crafting_open: false,
        }
    }

    /// Player at the horizontal centre of a grid, on the spawn row
    pub fn spawn(grid_width: i32, cell_size: f32) -> Self {
        Self::new(Vec2::new(
            grid_width as f32 * cell_size / 2.0,
            Self::SPAWN_ROW as f32 * cell_size,
        ))
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    pub fn selected_tool(&self) -> Option<ToolKind> {
        self.inventory.selected_tool()
    }

    /// (current, max) durability of the selected tool
    pub fn selected_tool_durability(&self) -> Option<(u32, u32)> {
        let stack = self.inventory.selected_stack()?;
        let kind = stack.tool_kind()?;
        Some((stack.durability, kind.max_durability()))
    }

    /// Whether a menu panel currently captures input
    pub fn panel_open(&self) -> bool {
        self.inventory_open || self.crafting_open
    }

    pub fn toggle_inventory(&mut self) {
        self.inventory_open = !self.inventory_open;
        if !self.inventory_open {
            self.inventory.held = None;
        }
        log::debug!("[INVENTORY] panel {}", if self.inventory_open { "opened" } else { "closed" });
    }

    pub fn toggle_crafting(&mut self) {
        self.crafting_open = !self.crafting_open;
        log::debug!("[CRAFTING] panel {}", if self.crafting_open { "opened" } else { "closed" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let player = Player::spawn(200, 32.0);
        assert_eq!(player.position(), Vec2::new(3200.0, 640.0));
        assert_eq!(player.body.size, Vec2::new(16.0, 32.0));
        assert!(!player.body.grounded);
    }

    #[test]
    fn test_starting_tool_durability() {
        let mut player = Player::spawn(200, 32.0);
        assert_eq!(player.selected_tool_durability(), None);
        player.inventory.select(4);
        assert_eq!(player.selected_tool(), Some(ToolKind::WoodenPickaxe));
        assert_eq!(player.selected_tool_durability(), Some((60, 60)));
    }

    #[test]
    fn test_panels() {
        let mut player = Player::new(Vec2::ZERO);
        assert!(!player.panel_open());
        player.toggle_crafting();
        assert!(player.panel_open());
        player.toggle_crafting();
        player.toggle_inventory();
        player.inventory.held = Some(crate::entity::SlotRef::hotbar(0));
        player.toggle_inventory();
        assert!(!player.panel_open());
        assert_eq!(player.inventory.held, None);
    }
}
