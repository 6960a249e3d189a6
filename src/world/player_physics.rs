//! Player physics system - movement, gravity, swimming, jumping, collision

use serde::{Deserialize, Serialize};

use super::grid::GridWorld;
use crate::entity::input::InputState;
use crate::entity::player::Player;

/// Movement constants for one medium (land or liquid)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementParams {
    /// Horizontal speed while a direction is held (units/s)
    pub speed: f32,
    /// Vertical impulse: jump on land, swim up/down in liquid (units/s)
    pub impulse: f32,
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Horizontal velocity multiplier per tick with no direction held
    pub friction: f32,
    /// Largest downward speed (and, in liquid, largest upward speed)
    pub max_vertical_speed: f32,
}

/// Player movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerPhysicsParams {
    pub land: MovementParams,
    pub liquid: MovementParams,
    /// Gravity scale applied in liquid (default: 0.3)
    pub liquid_gravity_scale: f32,
    /// Vertical velocity multiplier per tick in liquid with no input (default: 0.8)
    pub liquid_drag: f32,
    /// Minimum seconds between land jumps (default: 0.2)
    pub jump_cooldown: f32,
    /// Mining/placing reach from the player's centre (default: 100)
    pub reach: f32,
}

impl Default for PlayerPhysicsParams {
    fn default() -> Self {
        Self {
            land: MovementParams {
                speed: 250.0,
                impulse: 450.0,
                gravity: 900.0,
                friction: 0.85,
                max_vertical_speed: 600.0,
            },
            liquid: MovementParams {
                speed: 150.0,
                impulse: 200.0,
                gravity: 200.0,
                friction: 0.7,
                max_vertical_speed: 200.0,
            },
            liquid_gravity_scale: 0.3,
            liquid_drag: 0.8,
            jump_cooldown: 0.2,
            reach: 100.0,
        }
    }
}

/// Player physics system - handles movement, jumping, swimming, collision
pub struct PlayerPhysicsSystem;

impl PlayerPhysicsSystem {
    /// Update player physics for one tick
    ///
    /// Submersion is sensed first and picks the constant set. On land a
    /// jump needs ground contact and an expired cooldown; in liquid the
    /// player can swim up or down freely.
    pub fn update(
        player: &mut Player,
        input: &InputState,
        grid: &GridWorld,
        cell_size: f32,
        params: &PlayerPhysicsParams,
        dt: f32,
    ) {
        let body = &mut player.body;
        let in_liquid = body.sense_liquid(grid, cell_size);
        let medium = if in_liquid { &params.liquid } else { &params.land };

        player.jump_cooldown = (player.jump_cooldown - dt).max(0.0);

        // Horizontal
        let direction = input.horizontal();
        if direction != 0.0 {
            body.velocity.x = direction * medium.speed;
        } else {
            body.velocity.x *= medium.friction;
        }

        // Vertical intent
        if in_liquid {
            if input.wants_ascend() {
                body.velocity.y = -medium.impulse;
            } else if input.down {
                body.velocity.y = medium.impulse;
            } else {
                body.velocity.y *= params.liquid_drag;
            }
        } else if input.wants_ascend() && body.grounded && player.jump_cooldown <= 0.0 {
            body.velocity.y = -medium.impulse;
            body.grounded = false;
            player.jump_cooldown = params.jump_cooldown;
            log::debug!("Player jumped!");
        }

        // Gravity
        if in_liquid {
            body.velocity.y += medium.gravity * params.liquid_gravity_scale * dt;
            body.velocity.y = body
                .velocity
                .y
                .clamp(-medium.max_vertical_speed, medium.max_vertical_speed);
        } else {
            body.velocity.y += medium.gravity * dt;
            body.velocity.y = body.velocity.y.min(medium.max_vertical_speed);
        }

        let before = body.position;
        body.move_and_collide(grid, cell_size, dt);

        if body.position != before {
            log::trace!(
                "Player: {:?} → {:?} (vel: {:?}, grounded: {}, submerged: {})",
                before,
                body.position,
                body.velocity,
                body.grounded,
                body.submerged
            );
        }
    }
}
