use serde::{Deserialize, Serialize};

use super::tools::ToolKind;
use crate::world::Block;

/// Quick-access bar size
pub const HOTBAR_SIZE: usize = 9;
/// Extended store size (three rows of nine)
pub const EXTENDED_SIZE: usize = 27;
/// Largest block stack
pub const MAX_STACK: u32 = 64;

/// What a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Block(Block),
    Tool(ToolKind),
}

/// A stack of items in an inventory slot
///
/// Tools never stack: their count is 1 and `durability` counts down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ItemStack {
    pub item: Item,
    pub count: u32,
    pub durability: u32,
}

impl ItemStack {
    pub fn blocks(block: Block, count: u32) -> Self {
        ItemStack {
            item: Item::Block(block),
            count,
            durability: 0,
        }
    }

    /// A fresh tool at full durability
    pub fn tool(kind: ToolKind) -> Self {
        ItemStack {
            item: Item::Tool(kind),
            count: 1,
            durability: kind.max_durability(),
        }
    }

    pub fn block(&self) -> Option<Block> {
        match self.item {
            Item::Block(block) => Some(block),
            Item::Tool(_) => None,
        }
    }

    pub fn tool_kind(&self) -> Option<ToolKind> {
        match self.item {
            Item::Tool(kind) => Some(kind),
            Item::Block(_) => None,
        }
    }

    pub fn max_stack_size(&self) -> u32 {
        match self.item {
            Item::Block(_) => MAX_STACK,
            Item::Tool(_) => 1,
        }
    }

    /// Add items to this stack, returns amount that didn't fit
    pub fn add(&mut self, amount: u32) -> u32 {
        let space = self.max_stack_size().saturating_sub(self.count);
        let to_add = amount.min(space);
        self.count += to_add;
        amount - to_add
    }

    /// Remove items from this stack, returns amount actually removed
    pub fn remove(&mut self, amount: u32) -> u32 {
        let to_remove = amount.min(self.count);
        self.count -= to_remove;
        to_remove
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.max_stack_size()
    }
}

/// Which inventory region a slot lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Hotbar,
    Extended,
}

/// Address of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    pub region: Region,
    pub index: usize,
}

impl SlotRef {
    pub fn hotbar(index: usize) -> Self {
        SlotRef {
            region: Region::Hotbar,
            index,
        }
    }

    pub fn extended(index: usize) -> Self {
        SlotRef {
            region: Region::Extended,
            index,
        }
    }
}

/// Player inventory: a hotbar with a selected slot plus an extended store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inventory {
    pub hotbar: Vec<Option<ItemStack>>,
    pub extended: Vec<Option<ItemStack>>,
    /// Index into the hotbar
    pub selected: usize,
    /// Slot picked up by the first click of a move
    pub held: Option<SlotRef>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Inventory {
            hotbar: vec![None; HOTBAR_SIZE],
            extended: vec![None; EXTENDED_SIZE],
            selected: 0,
            held: None,
        }
    }

    /// Inventory a new player starts with
    pub fn starting_kit() -> Self {
        let mut inv = Self::new();
        inv.hotbar[0] = Some(ItemStack::blocks(Block::Dirt, 64));
        inv.hotbar[1] = Some(ItemStack::blocks(Block::Stone, 32));
        inv.hotbar[2] = Some(ItemStack::blocks(Block::Wood, 16));
        inv.hotbar[3] = Some(ItemStack::blocks(Block::Sand, 24));
        inv.hotbar[4] = Some(ItemStack::tool(ToolKind::WoodenPickaxe));
        inv.extended[0] = Some(ItemStack::blocks(Block::CoalOre, 5));
        inv.extended[1] = Some(ItemStack::blocks(Block::IronOre, 3));
        inv.extended[2] = Some(ItemStack::blocks(Block::GoldOre, 2));
        inv
    }

    fn region(&self, region: Region) -> &[Option<ItemStack>] {
        match region {
            Region::Hotbar => &self.hotbar,
            Region::Extended => &self.extended,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut Vec<Option<ItemStack>> {
        match region {
            Region::Hotbar => &mut self.hotbar,
            Region::Extended => &mut self.extended,
        }
    }

    /// Get a reference to a slot
    pub fn slot(&self, slot: SlotRef) -> Option<&Option<ItemStack>> {
        self.region(slot.region).get(slot.index)
    }

    /// Get a mutable reference to a slot
    pub fn slot_mut(&mut self, slot: SlotRef) -> Option<&mut Option<ItemStack>> {
        self.region_mut(slot.region).get_mut(slot.index)
    }

    /// Add one block
    ///
    /// Fills an existing hotbar stack, then an empty hotbar slot, then an
    /// existing extended stack, then an empty extended slot. Returns false
    /// when there is no room; the block is dropped.
    pub fn add_block(&mut self, block: Block) -> bool {
        for region in [Region::Hotbar, Region::Extended] {
            let slots = self.region_mut(region);
            let existing = slots.iter_mut().flatten().find(|stack| {
                stack.block() == Some(block) && !stack.is_empty() && !stack.is_full()
            });
            if let Some(stack) = existing {
                stack.count += 1;
                return true;
            }
            if let Some(empty) = slots.iter_mut().find(|slot| slot.is_none()) {
                *empty = Some(ItemStack::blocks(block, 1));
                return true;
            }
        }
        false
    }

    /// Put a fresh tool in the first empty slot (hotbar first)
    pub fn add_tool(&mut self, kind: ToolKind) -> bool {
        match self.first_empty_slot() {
            Some(slot) => {
                if let Some(target) = self.slot_mut(slot) {
                    *target = Some(ItemStack::tool(kind));
                }
                true
            }
            None => false,
        }
    }

    /// First empty slot, hotbar before extended
    pub fn first_empty_slot(&self) -> Option<SlotRef> {
        if let Some(index) = self.hotbar.iter().position(Option::is_none) {
            return Some(SlotRef::hotbar(index));
        }
        self.extended
            .iter()
            .position(Option::is_none)
            .map(SlotRef::extended)
    }

    /// Count of `block` across both regions
    pub fn count_block(&self, block: Block) -> u32 {
        self.hotbar
            .iter()
            .chain(self.extended.iter())
            .flatten()
            .filter(|stack| stack.block() == Some(block))
            .map(|stack| stack.count)
            .sum()
    }

    /// Remove `amount` of `block`, draining the hotbar first
    ///
    /// Nothing is removed unless the full amount is available.
    pub fn remove_blocks(&mut self, block: Block, amount: u32) -> bool {
        if self.count_block(block) < amount {
            return false;
        }
        let mut remaining = amount;
        for slot in self.hotbar.iter_mut().chain(self.extended.iter_mut()) {
            if remaining == 0 {
                break;
            }
            if let Some(stack) = slot {
                if stack.block() == Some(block) {
                    remaining -= stack.remove(remaining);
                    if stack.is_empty() {
                        *slot = None;
                    }
                }
            }
        }
        true
    }

    pub fn selected_stack(&self) -> Option<&ItemStack> {
        self.hotbar.get(self.selected).and_then(Option::as_ref)
    }

    /// Tool in the selected hotbar slot, if any
    pub fn selected_tool(&self) -> Option<ToolKind> {
        self.selected_stack().and_then(ItemStack::tool_kind)
    }

    /// Take one block from the selected slot for placing
    pub fn take_selected_block(&mut self) -> Option<Block> {
        let slot = self.hotbar.get_mut(self.selected)?;
        let stack = slot.as_mut()?;
        let block = stack.block()?;
        if stack.remove(1) == 0 {
            return None;
        }
        if stack.is_empty() {
            *slot = None;
        }
        Some(block)
    }

    /// Spend one use of the selected tool
    ///
    /// Returns the tool kind if it broke (and its slot was cleared).
    pub fn wear_selected_tool(&mut self) -> Option<ToolKind> {
        let slot = self.hotbar.get_mut(self.selected)?;
        let stack = slot.as_mut()?;
        let kind = stack.tool_kind()?;
        stack.durability = stack.durability.saturating_sub(1);
        if stack.durability == 0 {
            *slot = None;
            return Some(kind);
        }
        None
    }

    /// Select a hotbar slot by index; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.hotbar.len() {
            self.selected = index;
        }
    }

    /// Move the selection by a scroll delta (positive scrolls left)
    ///
    /// Running off either end jumps to the opposite end, however far the
    /// delta overshoots.
    pub fn scroll(&mut self, delta: i32) {
        let len = self.hotbar.len() as i64;
        if len == 0 || delta == 0 {
            return;
        }
        let target = self.selected as i64 - delta as i64;
        self.selected = if target < 0 {
            (len - 1) as usize
        } else if target >= len {
            0
        } else {
            target as usize
        };
    }

    /// Swap two slots (within or across regions)
    pub fn swap(&mut self, a: SlotRef, b: SlotRef) {
        let (Some(&first), Some(&second)) = (self.slot(a), self.slot(b)) else {
            return;
        };
        if let Some(slot) = self.slot_mut(a) {
            *slot = second;
        }
        if let Some(slot) = self.slot_mut(b) {
            *slot = first;
        }
    }

    /// Pick-then-drop click: the first click holds a slot, the second swaps
    /// it with the clicked slot. Clicks on invalid slots drop the hold.
    pub fn click(&mut self, slot: SlotRef) {
        if self.slot(slot).is_none() {
            self.held = None;
            return;
        }
        match self.held.take() {
            Some(from) => self.swap(from, slot),
            None => self.held = Some(slot),
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
