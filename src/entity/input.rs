//! Player input intents for one tick

use glam::Vec2;

use super::inventory::SlotRef;
use super::tools::ToolKind;

/// Tracks the intents the input layer hands to the simulation each tick
///
/// Held keys are plain flags; `*_pressed` fields are edges and should only
/// be set on the tick the key went down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    // Movement
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,

    /// World-space point the cursor is over
    pub target: Option<Vec2>,
    /// Mine (held)
    pub primary_down: bool,
    /// Place (edge)
    pub secondary_pressed: bool,

    // Hotbar selection
    pub select_slot: Option<usize>,
    /// Scroll steps this tick (positive moves the selection left)
    pub scroll_delta: i32,

    // Panels
    pub toggle_inventory: bool,
    pub toggle_crafting: bool,
    /// Slot clicked in the inventory panel
    pub inventory_click: Option<SlotRef>,
    /// Recipe clicked in the crafting panel
    pub craft: Option<ToolKind>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upward intent in liquid, or a jump on land
    pub fn wants_ascend(&self) -> bool {
        self.up || self.jump
    }

    /// Horizontal intent in [-1, 1]; left wins when both are held
    pub fn horizontal(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    /// Clear edge-triggered fields after a tick consumed them
    pub fn clear_edges(&mut self) {
        self.secondary_pressed = false;
        self.select_slot = None;
        self.scroll_delta = 0;
        self.toggle_inventory = false;
        self.toggle_crafting = false;
        self.inventory_click = None;
        self.craft = None;
    }
}
