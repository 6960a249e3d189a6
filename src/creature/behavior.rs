//! Animal AI state machine
//!
//! Evaluated once per tick before physics. Transitions depend only on the
//! state timer and the distance to the player; the physics step then reads
//! `state` and `direction` to decide how the animal moves.

use glam::Vec2;

use super::animal::{AiState, Animal};
use super::species::AnimalParams;
use crate::world::WorldRng;

/// Stateless AI driver
pub struct AnimalBehavior;

impl AnimalBehavior {
    /// Advance timers and apply at most one state transition
    pub fn update<R: WorldRng + ?Sized>(
        animal: &mut Animal,
        player_position: Vec2,
        params: &AnimalParams,
        rng: &mut R,
        dt: f32,
    ) {
        let distance = animal.position().distance(player_position);
        let flees = params.species.get(animal.species).flees;

        animal.state_timer -= dt;
        animal.anim_time += dt;

        match animal.state {
            AiState::Wander => {
                if flees && distance < params.flee_radius {
                    animal.state = AiState::Flee;
                    animal.state_timer = params.flee_time;
                    animal.direction = if animal.position().x > player_position.x {
                        1.0
                    } else {
                        -1.0
                    };
                    log::trace!("{} fleeing (distance {:.1})", animal.species, distance);
                } else if animal.state_timer <= 0.0 {
                    animal.direction = rng.coin_sign();
                    animal.state_timer = rng.roll(2, 6) as f32;
                }
            }
            AiState::Flee => {
                if distance > params.calm_radius {
                    animal.state = AiState::Wander;
                    animal.state_timer = rng.roll(2, 8) as f32;
                } else if animal.state_timer <= 0.0 {
                    animal.state = AiState::Wander;
                    animal.state_timer = rng.roll(1, 3) as f32;
                }
            }
            AiState::Swim => {
                if !animal.body.submerged {
                    animal.state = AiState::Wander;
                    animal.state_timer = rng.roll(2, 8) as f32;
                } else if animal.state_timer <= 0.0 {
                    animal.direction = rng.coin_sign();
                    animal.state_timer = rng.roll(2, 5) as f32;
                }
            }
            AiState::Follow => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Species;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    const DT: f32 = 1.0 / 60.0;

    fn animal(species: Species, x: f32) -> Animal {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut animal = Animal::new(species, Vec2::new(x, 100.0), Vec2::splat(12.0), &mut rng);
        animal.state_timer = 5.0;
        animal
    }

    #[test]
    fn test_wander_to_flee_away_from_player() {
        let params = AnimalParams::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);

        let mut right = animal(Species::Rabbit, 150.0);
        AnimalBehavior::update(&mut right, Vec2::new(100.0, 100.0), &params, &mut rng, DT);
        assert_eq!(right.state, AiState::Flee);
        assert_eq!(right.direction, 1.0);
        assert_eq!(right.state_timer, 3.0);

        let mut left = animal(Species::Pig, 50.0);
        AnimalBehavior::update(&mut left, Vec2::new(100.0, 100.0), &params, &mut rng, DT);
        assert_eq!(left.state, AiState::Flee);
        assert_eq!(left.direction, -1.0);
    }

    #[test]
    fn test_aquatic_never_flees() {
        let params = AnimalParams::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut fish = animal(Species::Fish, 100.0);
        AnimalBehavior::update(&mut fish, Vec2::new(100.0, 100.0), &params, &mut rng, DT);
        assert_eq!(fish.state, AiState::Wander);
    }

    #[test]
    fn test_wander_timer_rerolls() {
        let params = AnimalParams::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut rabbit = animal(Species::Rabbit, 1000.0);
        rabbit.state_timer = 0.01;
        AnimalBehavior::update(&mut rabbit, Vec2::ZERO, &params, &mut rng, DT);
        assert_eq!(rabbit.state, AiState::Wander);
        assert!((2.0..=6.0).contains(&rabbit.state_timer));
    }

    #[test]
    fn test_flee_calms_when_far() {
        let params = AnimalParams::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut rabbit = animal(Species::Rabbit, 500.0);
        rabbit.state = AiState::Flee;
        AnimalBehavior::update(&mut rabbit, Vec2::new(100.0, 100.0), &params, &mut rng, DT);
        assert_eq!(rabbit.state, AiState::Wander);
        assert!((2.0..=8.0).contains(&rabbit.state_timer));
    }

    #[test]
    fn test_flee_timer_expiry() {
        let params = AnimalParams::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut rabbit = animal(Species::Rabbit, 200.0);
        rabbit.state = AiState::Flee;
        rabbit.state_timer = 0.01;
        // 100 units away: between the flee and calm radii
        AnimalBehavior::update(&mut rabbit, Vec2::new(100.0, 100.0), &params, &mut rng, DT);
        assert_eq!(rabbit.state, AiState::Wander);
        assert!((1.0..=3.0).contains(&rabbit.state_timer));
    }

    #[test]
    fn test_swim_exits_when_dry() {
        let params = AnimalParams::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut fish = animal(Species::Fish, 100.0);
        fish.state = AiState::Swim;
        fish.body.submerged = true;
        AnimalBehavior::update(&mut fish, Vec2::ZERO, &params, &mut rng, DT);
        assert_eq!(fish.state, AiState::Swim);

        fish.body.submerged = false;
        AnimalBehavior::update(&mut fish, Vec2::ZERO, &params, &mut rng, DT);
        assert_eq!(fish.state, AiState::Wander);
    }

    #[test]
    fn test_timers_advance() {
        let params = AnimalParams::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut pig = animal(Species::Pig, 1000.0);
        AnimalBehavior::update(&mut pig, Vec2::ZERO, &params, &mut rng, 0.5);
        assert_eq!(pig.state_timer, 4.5);
        assert_eq!(pig.anim_time, 0.5);
    }
}
