//! Physical body shared by the player and animals

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world::{CollisionQueries, GridWorld};

/// Result of one collision-resolved move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// The horizontal step was rejected and `velocity.x` zeroed
    pub blocked_x: bool,
    /// The vertical step was rejected and `velocity.y` zeroed
    pub blocked_y: bool,
}

/// Axis-aligned box with velocity and contact flags
///
/// `position` is the top-left corner in world units; +y points down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    /// Last vertical collision stopped a downward move
    pub grounded: bool,
    /// Box overlapped liquid at the start of the last update
    pub submerged: bool,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            grounded: false,
            submerged: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// y of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_submerged(&self) -> bool {
        self.submerged
    }

    /// Moving down (positive y velocity)
    pub fn is_falling(&self) -> bool {
        self.velocity.y > 0.0
    }

    pub fn is_rising(&self) -> bool {
        self.velocity.y < 0.0
    }

    /// Whether the box at `position` overlaps a solid or out-of-bounds cell
    pub fn collides_at(&self, grid: &GridWorld, cell_size: f32, position: Vec2) -> bool {
        CollisionQueries::box_collides(
            grid,
            cell_size,
            position.x,
            position.y,
            self.size.x,
            self.size.y,
        )
    }

    /// Whether the box at its current position overlaps liquid
    pub fn in_liquid(&self, grid: &GridWorld, cell_size: f32) -> bool {
        CollisionQueries::box_in_liquid(
            grid,
            cell_size,
            self.position.x,
            self.position.y,
            self.size.x,
            self.size.y,
        )
    }

    /// Refresh `submerged` from the grid
    pub fn sense_liquid(&mut self, grid: &GridWorld, cell_size: f32) -> bool {
        self.submerged = self.in_liquid(grid, cell_size);
        self.submerged
    }

    /// Integrate velocity over `dt`, X first then Y
    ///
    /// A rejected step leaves that coordinate unchanged and zeroes that
    /// velocity component. A rejected downward step sets `grounded`; any
    /// accepted vertical step clears it.
    pub fn move_and_collide(&mut self, grid: &GridWorld, cell_size: f32, dt: f32) -> MoveResult {
        let mut result = MoveResult::default();

        let next_x = Vec2::new(self.position.x + self.velocity.x * dt, self.position.y);
        if self.collides_at(grid, cell_size, next_x) {
            self.velocity.x = 0.0;
            result.blocked_x = true;
        } else {
            self.position = next_x;
        }

        let next_y = Vec2::new(self.position.x, self.position.y + self.velocity.y * dt);
        if self.collides_at(grid, cell_size, next_y) {
            if self.velocity.y > 0.0 {
                self.grounded = true;
            }
            self.velocity.y = 0.0;
            result.blocked_y = true;
        } else {
            self.position = next_y;
            self.grounded = false;
        }

        result
    }
}
