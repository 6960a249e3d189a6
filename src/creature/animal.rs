//! Animal state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::species::Species;
use crate::entity::Body;
use crate::world::WorldRng;

/// AI behaviour state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    Wander,
    Flee,
    Swim,
    /// Reserved; no transition enters it
    Follow,
}

/// A live animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub species: Species,
    pub body: Body,
    pub state: AiState,
    /// Seconds until the current state re-rolls
    pub state_timer: f32,
    /// Facing: -1.0 (left) or 1.0 (right)
    pub direction: f32,
    /// Seconds alive, drives animation
    pub anim_time: f32,
}

impl Animal {
    /// Fresh animal wandering in a random direction
    pub fn new<R: WorldRng + ?Sized>(species: Species, position: Vec2, size: Vec2, rng: &mut R) -> Self {
        let state_timer = rng.roll(2, 8) as f32;
        let direction = rng.coin_sign();
        Self {
            species,
            body: Body::new(position, size),
            state: AiState::Wander,
            state_timer,
            direction,
            anim_time: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn is_fleeing(&self) -> bool {
        self.state == AiState::Flee
    }
}
