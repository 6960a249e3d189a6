//! Read-only snapshots handed to a renderer

use glam::Vec2;
use serde::Serialize;

use crate::creature::{AiState, Animal, Species};
use crate::entity::{ItemStack, Player};
use crate::simulation::MiningProgress;

/// Render data for one animal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalRenderData {
    pub species: Species,
    pub position: Vec2,
    pub size: Vec2,
    pub color: [u8; 4],
    pub direction: f32,
    pub state: AiState,
    pub anim_time: f32,
}

impl AnimalRenderData {
    pub fn from_animal(animal: &Animal) -> Self {
        Self {
            species: animal.species,
            position: animal.body.position,
            size: animal.body.size,
            color: animal.species.color(),
            direction: animal.direction,
            state: animal.state,
            anim_time: animal.anim_time,
        }
    }
}

/// Render data for the player and its inventory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRenderData {
    pub position: Vec2,
    pub size: Vec2,
    pub submerged: bool,
    pub grounded: bool,
    pub hotbar: Vec<Option<ItemStack>>,
    pub extended: Vec<Option<ItemStack>>,
    pub selected: usize,
    /// (current, max) durability of the selected tool
    pub tool_durability: Option<(u32, u32)>,
    pub inventory_open: bool,
    pub crafting_open: bool,
}

impl PlayerRenderData {
    pub fn from_player(player: &Player) -> Self {
        Self {
            position: player.body.position,
            size: player.body.size,
            submerged: player.body.submerged,
            grounded: player.body.grounded,
            hotbar: player.inventory.hotbar.clone(),
            extended: player.inventory.extended.clone(),
            selected: player.inventory.selected,
            tool_durability: player.selected_tool_durability(),
            inventory_open: player.inventory_open,
            crafting_open: player.crafting_open,
        }
    }
}

/// In-progress break, for the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MiningRenderData {
    pub cell: (i32, i32),
    /// 0.0 - 1.0
    pub progress: f32,
}

impl MiningRenderData {
    /// None while nothing is being mined
    pub fn from_progress(mining: &MiningProgress) -> Option<Self> {
        mining.target_cell.map(|cell| Self {
            cell,
            progress: mining.progress(),
        })
    }
}
