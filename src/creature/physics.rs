//! Animal movement, gravity and terminal conditions

use super::animal::{AiState, Animal};
use super::species::{AnimalParams, Impulse, SpeciesParams};
use crate::world::{GridWorld, WorldRng};

/// What became of an animal after its physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalFate {
    Alive,
    /// Aquatic animal outside liquid
    Stranded,
    /// Left the world horizontally or fell below it
    OutOfBounds,
}

impl AnimalFate {
    pub fn is_alive(self) -> bool {
        self == AnimalFate::Alive
    }
}

/// Animal physics system
pub struct AnimalPhysics;

impl AnimalPhysics {
    /// Integrate one tick for `animal`
    ///
    /// The grid is only read. Animals that must leave the pool are reported
    /// through the returned fate; the caller frees their slot.
    pub fn update<R: WorldRng + ?Sized>(
        animal: &mut Animal,
        grid: &GridWorld,
        cell_size: f32,
        params: &AnimalParams,
        rng: &mut R,
        dt: f32,
    ) -> AnimalFate {
        let species = params.species.get(animal.species);
        let submerged = animal.body.sense_liquid(grid, cell_size);

        if species.aquatic {
            if !submerged {
                return AnimalFate::Stranded;
            }
            animal.state = AiState::Swim;
            animal.body.velocity.x = animal.direction * species.speed;
            Self::apply_impulse(animal, species, rng);
        } else {
            let walking = animal.state == AiState::Flee
                || (animal.state == AiState::Wander && rng.chance_percent(params.walk_chance));
            if walking {
                animal.body.velocity.x = animal.direction * species.speed;
            } else {
                animal.body.velocity.x *= params.idle_decay;
            }

            Self::apply_impulse(animal, species, rng);

            let velocity = &mut animal.body.velocity;
            if submerged {
                velocity.y *= params.liquid_drag;
                velocity.y += species.gravity * dt * params.liquid_gravity_scale;
            } else {
                velocity.y += species.gravity * dt;
            }
        }

        animal.body.velocity.y = animal
            .body
            .velocity
            .y
            .clamp(-params.max_vertical_speed, params.max_vertical_speed);

        let moved = animal.body.move_and_collide(grid, cell_size, dt);
        if moved.blocked_x {
            animal.direction = -animal.direction;
        }

        let position = animal.body.position;
        if position.x < 0.0
            || position.x > grid.width() as f32 * cell_size
            || position.y > grid.height() as f32 * cell_size
        {
            return AnimalFate::OutOfBounds;
        }

        AnimalFate::Alive
    }

    fn apply_impulse<R: WorldRng + ?Sized>(animal: &mut Animal, species: &SpeciesParams, rng: &mut R) {
        match species.impulse {
            Impulse::None => {}
            Impulse::Hop { chance } => {
                if animal.body.grounded && rng.chance_percent(chance) {
                    animal.body.velocity.y = -species.jump;
                }
            }
            Impulse::Flap { chance } => {
                if rng.chance_percent(chance) {
                    animal.body.velocity.y = -species.jump;
                }
            }
            Impulse::Drift { chance, range } => {
                if rng.chance_percent(chance) {
                    animal.body.velocity.y = rng.roll(-range, range) as f32;
                }
            }
        }
    }
}
