//! Mining system - player mining and placement mechanics

use super::block::Block;
use super::collision::CollisionQueries;
use super::grid::GridWorld;
use crate::entity::input::InputState;
use crate::entity::player::Player;
use crate::entity::tools::{break_time, ToolKind};

/// A block removed from the grid by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenBlock {
    pub cell: (i32, i32),
    pub block: Block,
    /// False when the inventory was full and the block was lost
    pub stored: bool,
    /// Tool that wore out on this break
    pub tool_broke: Option<ToolKind>,
}

/// What the player's world interaction did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub broken: Option<BrokenBlock>,
    pub placed: Option<((i32, i32), Block)>,
}

/// Mining system - static utility methods for mining and placement
pub struct MiningSystem;

impl MiningSystem {
    /// Cell under `target` if it is inside the grid and within reach of the
    /// player's centre
    pub fn reachable_cell(
        player: &Player,
        grid: &GridWorld,
        cell_size: f32,
        target: glam::Vec2,
        reach: f32,
    ) -> Option<(i32, i32)> {
        let (x, y) = CollisionQueries::cell_at(cell_size, target.x, target.y);
        if !grid.in_bounds(x, y) {
            return None;
        }
        if target.distance(player.center()) >= reach {
            return None;
        }
        Some((x, y))
    }

    /// Drive mining and placing from this tick's input
    ///
    /// Holding primary accumulates time on the targeted cell until its break
    /// time is reached. Releasing primary, aiming out of reach or out of the
    /// grid, or opening a panel cancels progress.
    pub fn update(
        player: &mut Player,
        input: &InputState,
        grid: &mut GridWorld,
        cell_size: f32,
        reach: f32,
        dt: f32,
    ) -> InteractionOutcome {
        let mut outcome = InteractionOutcome::default();

        if player.panel_open() {
            player.mining.reset();
            return outcome;
        }

        let Some(cell) = input
            .target
            .and_then(|target| Self::reachable_cell(player, grid, cell_size, target, reach))
        else {
            player.mining.reset();
            return outcome;
        };

        if input.primary_down {
            let block = grid.get(cell.0, cell.1);
            if block.is_mineable() {
                let required = break_time(block, player.selected_tool());
                if player.mining.advance(cell, required, dt) {
                    outcome.broken = Some(Self::break_cell(player, grid, cell));
                }
            } else {
                player.mining.reset();
            }
        } else {
            player.mining.reset();
        }

        if input.secondary_pressed {
            outcome.placed = Self::place_block(player, grid, cell).map(|block| (cell, block));
        }

        outcome
    }

    /// Remove a cell, store it and wear the selected tool
    pub fn break_cell(player: &mut Player, grid: &mut GridWorld, cell: (i32, i32)) -> BrokenBlock {
        let block = grid.get(cell.0, cell.1);
        let stored = player.inventory.add_block(block);
        grid.set(cell.0, cell.1, Block::Air);

        let tool_broke = player.inventory.wear_selected_tool();
        player.mining.reset();

        if stored {
            log::debug!("[MINING] Mined {} at {:?}", block, cell);
        } else {
            log::debug!("[MINING] Inventory full, {} at {:?} lost", block, cell);
        }
        if let Some(tool) = tool_broke {
            log::info!("[MINING] {} broke!", tool);
        }

        BrokenBlock {
            cell,
            block,
            stored,
            tool_broke,
        }
    }

    /// Place one block from the selected slot into an Air cell
    pub fn place_block(player: &mut Player, grid: &mut GridWorld, cell: (i32, i32)) -> Option<Block> {
        if grid.get_checked(cell.0, cell.1) != Some(Block::Air) {
            return None;
        }
        let block = player.inventory.take_selected_block()?;
        grid.set(cell.0, cell.1, block);
        log::debug!("[PLACE] Placed {} at {:?}", block, cell);
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::inventory::ItemStack;
    use glam::Vec2;

    const CELL: f32 = 32.0;
    const REACH: f32 = 100.0;

    /// Player standing in an open 10x10 grid with its centre at (88, 80)
    fn setup() -> (Player, GridWorld) {
        let player = Player::new(Vec2::new(80.0, 64.0));
        (player, GridWorld::new(10, 10))
    }

    fn mining_at(target: Vec2) -> InputState {
        InputState {
            target: Some(target),
            primary_down: true,
            ..InputState::default()
        }
    }

    #[test]
    fn test_reachable_cell() {
        let (player, grid) = setup();
        assert_eq!(
            MiningSystem::reachable_cell(&player, &grid, CELL, Vec2::new(130.0, 80.0), REACH),
            Some((4, 2))
        );
        assert_eq!(
            MiningSystem::reachable_cell(&player, &grid, CELL, Vec2::new(200.0, 80.0), REACH),
            None
        );
        assert_eq!(
            MiningSystem::reachable_cell(&player, &grid, CELL, Vec2::new(-5.0, 80.0), REACH),
            None
        );
    }

    #[test]
    fn test_mining_takes_break_time() {
        let (mut player, mut grid) = setup();
        grid.set(4, 2, Block::Dirt);
        let input = mining_at(Vec2::new(140.0, 80.0));

        // Bare hands on dirt: 0.5 s
        let first = MiningSystem::update(&mut player, &input, &mut grid, CELL, REACH, 0.3);
        assert_eq!(first.broken, None);
        assert!(player.mining.is_mining());
        assert_eq!(grid.get(4, 2), Block::Dirt);

        let second = MiningSystem::update(&mut player, &input, &mut grid, CELL, REACH, 0.3);
        let broken = second.broken.unwrap();
        assert_eq!(broken.block, Block::Dirt);
        assert!(broken.stored);
        assert_eq!(grid.get(4, 2), Block::Air);
        assert_eq!(player.inventory.count_block(Block::Dirt), 65);
    }

    #[test]
    fn test_release_cancels_progress() {
        let (mut player, mut grid) = setup();
        grid.set(4, 2, Block::Stone);
        let mut input = mining_at(Vec2::new(140.0, 80.0));
        MiningSystem::update(&mut player, &input, &mut grid, CELL, REACH, 0.5);
        assert!(player.mining.is_mining());

        input.primary_down = false;
        MiningSystem::update(&mut player, &input, &mut grid, CELL, REACH, 0.5);
        assert!(!player.mining.is_mining());
        assert_eq!(grid.get(4, 2), Block::Stone);
    }

    #[test]
    fn test_out_of_reach_cancels_progress() {
        let (mut player, mut grid) = setup();
        grid.set(4, 2, Block::Stone);
        grid.set(8, 2, Block::Stone);
        MiningSystem::update(&mut player, &mining_at(Vec2::new(140.0, 80.0)), &mut grid, CELL, REACH, 0.5);
        MiningSystem::update(&mut player, &mining_at(Vec2::new(270.0, 80.0)), &mut grid, CELL, REACH, 0.5);
        assert!(!player.mining.is_mining());
    }

    #[test]
    fn test_panel_suspends_interaction() {
        let (mut player, mut grid) = setup();
        grid.set(4, 2, Block::Leaves);
        player.toggle_crafting();
        let outcome = MiningSystem::update(
            &mut player,
            &mining_at(Vec2::new(140.0, 80.0)),
            &mut grid,
            CELL,
            REACH,
            10.0,
        );
        assert_eq!(outcome, InteractionOutcome::default());
        assert_eq!(grid.get(4, 2), Block::Leaves);
    }

    #[test]
    fn test_tool_wears_and_breaks() {
        let (mut player, mut grid) = setup();
        grid.set(4, 2, Block::Stone);
        let mut pick = ItemStack::tool(ToolKind::WoodenPickaxe);
        pick.durability = 1;
        player.inventory.hotbar[4] = Some(pick);
        player.inventory.select(4);

        let outcome = MiningSystem::update(
            &mut player,
            &mining_at(Vec2::new(140.0, 80.0)),
            &mut grid,
            CELL,
            REACH,
            1.0,
        );
        let broken = outcome.broken.unwrap();
        assert_eq!(broken.tool_broke, Some(ToolKind::WoodenPickaxe));
        assert_eq!(player.inventory.hotbar[4], None);
        assert_eq!(player.selected_tool(), None);
    }

    #[test]
    fn test_full_inventory_still_removes_block() {
        let (mut player, mut grid) = setup();
        for slot in player
            .inventory
            .hotbar
            .iter_mut()
            .chain(player.inventory.extended.iter_mut())
        {
            *slot = Some(ItemStack::blocks(Block::Sand, 64));
        }
        grid.set(4, 2, Block::Leaves);
        let outcome = MiningSystem::update(
            &mut player,
            &mining_at(Vec2::new(140.0, 80.0)),
            &mut grid,
            CELL,
            REACH,
            1.0,
        );
        assert!(!outcome.broken.unwrap().stored);
        assert_eq!(grid.get(4, 2), Block::Air);
    }

    #[test]
    fn test_place_from_selected_stack() {
        let (mut player, mut grid) = setup();
        let input = InputState {
            target: Some(Vec2::new(140.0, 80.0)),
            secondary_pressed: true,
            ..InputState::default()
        };
        let outcome = MiningSystem::update(&mut player, &input, &mut grid, CELL, REACH, 0.016);
        assert_eq!(outcome.placed, Some(((4, 2), Block::Dirt)));
        assert_eq!(grid.get(4, 2), Block::Dirt);
        assert_eq!(player.inventory.count_block(Block::Dirt), 63);

        // Occupied cell: nothing happens
        let again = MiningSystem::update(&mut player, &input, &mut grid, CELL, REACH, 0.016);
        assert_eq!(again.placed, None);
        assert_eq!(player.inventory.count_block(Block::Dirt), 63);
    }

    #[test]
    fn test_cannot_place_tool() {
        let (mut player, mut grid) = setup();
        player.inventory.select(4);
        assert_eq!(MiningSystem::place_block(&mut player, &mut grid, (4, 2)), None);
        assert_eq!(grid.get(4, 2), Block::Air);
    }
}
