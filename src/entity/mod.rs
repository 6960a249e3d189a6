//! Player-side entities - body, input, inventory, tools and crafting

pub mod body;
pub mod crafting;
pub mod input;
pub mod inventory;
pub mod player;
pub mod tools;

pub use body::{Body, MoveResult};
pub use crafting::{CraftOutcome, CraftingSystem, Recipe};
pub use input::InputState;
pub use inventory::{Inventory, Item, ItemStack, Region, SlotRef};
pub use player::Player;
pub use tools::ToolKind;
