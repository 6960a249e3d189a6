//! Creature spawning and management
//!
//! Owns the animal pool, places new animals and drives AI and physics each
//! tick.

use glam::Vec2;

use super::animal::Animal;
use super::behavior::AnimalBehavior;
use super::physics::{AnimalFate, AnimalPhysics};
use super::pool::AnimalPool;
use super::species::{AnimalParams, AquaticSpawn, Species};
use crate::world::{CollisionQueries, GridWorld, WorldRng};

/// Manages the animal population
#[derive(Debug, Clone)]
pub struct CreatureManager {
    pool: AnimalPool,
    params: AnimalParams,
}

impl CreatureManager {
    pub fn new(params: AnimalParams) -> Self {
        Self {
            pool: AnimalPool::new(params.capacity),
            params,
        }
    }

    pub fn params(&self) -> &AnimalParams {
        &self.params
    }

    pub fn pool(&self) -> &AnimalPool {
        &self.pool
    }

    /// Number of live animals
    pub fn count(&self) -> usize {
        self.pool.alive_count()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn can_spawn(&self) -> bool {
        !self.pool.is_full()
    }

    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.pool.iter().map(|(_, animal)| animal)
    }

    /// Place an animal; dropped silently when the pool is full
    pub fn spawn<R: WorldRng + ?Sized>(&mut self, species: Species, position: Vec2, rng: &mut R) -> Option<usize> {
        if !self.can_spawn() {
            log::debug!(
                "Cannot spawn {}: max population reached ({})",
                species,
                self.capacity()
            );
            return None;
        }

        let size = self.params.species.get(species).size;
        let index = self.pool.insert(Animal::new(species, position, size, rng))?;
        log::debug!(
            "Spawned {} at ({:.1}, {:.1}). Population: {}/{}",
            species,
            position.x,
            position.y,
            self.count(),
            self.capacity()
        );
        Some(index)
    }

    /// Remove the animal in `index`, freeing its slot
    pub fn despawn(&mut self, index: usize) -> Option<Animal> {
        let animal = self.pool.remove(index)?;
        log::debug!(
            "Removed {}. Population: {}/{}",
            animal.species,
            self.count(),
            self.capacity()
        );
        Some(animal)
    }

    /// Random spawn point for `species`
    ///
    /// Ground species drop onto the first non-air, non-water cell of a
    /// random column. Aquatic species retry random points until one is in
    /// liquid, keeping the last attempt if none is.
    pub fn spawn_position<R: WorldRng + ?Sized>(
        &self,
        grid: &GridWorld,
        cell_size: f32,
        species: Species,
        aquatic: &AquaticSpawn,
        rng: &mut R,
    ) -> Vec2 {
        let x = self.random_spawn_x(grid, cell_size, rng);
        let column = (x / cell_size) as i32;
        let y = match grid.first_ground_row(column) {
            Some(row) => row as f32 * cell_size - self.params.spawn_lift,
            None => (grid.height() - 1) as f32 * cell_size,
        };
        let mut position = Vec2::new(x, y);

        let params = self.params.species.get(species);
        if params.aquatic {
            for _ in 0..aquatic.attempts {
                position = Vec2::new(
                    self.random_spawn_x(grid, cell_size, rng),
                    rng.roll(aquatic.min_row, aquatic.max_row) as f32 * cell_size,
                );
                if CollisionQueries::box_in_liquid(
                    grid,
                    cell_size,
                    position.x,
                    position.y,
                    params.size.x,
                    params.size.y,
                ) {
                    break;
                }
            }
        }

        position
    }

    fn random_spawn_x<R: WorldRng + ?Sized>(&self, grid: &GridWorld, cell_size: f32, rng: &mut R) -> f32 {
        let margin = self.params.spawn_margin;
        let max = (grid.width().saturating_sub(margin) as f32 * cell_size) as i32;
        rng.roll(margin, max) as f32
    }

    fn random_species<R: WorldRng + ?Sized>(rng: &mut R) -> Species {
        Species::from_index(rng.roll(0, Species::ALL.len() as i32 - 1) as usize)
    }

    /// Fill the starting population with random species
    pub fn spawn_initial<R: WorldRng + ?Sized>(&mut self, grid: &GridWorld, cell_size: f32, rng: &mut R) {
        let aquatic = self.params.initial_aquatic.clone();
        for _ in 0..self.params.initial_population {
            let species = Self::random_species(rng);
            let position = self.spawn_position(grid, cell_size, species, &aquatic, rng);
            self.spawn(species, position, rng);
        }
        log::info!(
            "Spawned initial animals. Population: {}/{}",
            self.count(),
            self.capacity()
        );
    }

    /// Run AI then physics for every live animal, then roll for a new spawn
    ///
    /// Returns the number of animals removed this tick.
    pub fn update<R: WorldRng + ?Sized>(
        &mut self,
        grid: &GridWorld,
        cell_size: f32,
        player_position: Vec2,
        rng: &mut R,
        dt: f32,
    ) -> usize {
        let mut removed = Vec::new();

        for index in 0..self.pool.capacity() {
            let Some(animal) = self.pool.get_mut(index) else {
                continue;
            };
            AnimalBehavior::update(animal, player_position, &self.params, rng, dt);
            let fate = AnimalPhysics::update(animal, grid, cell_size, &self.params, rng, dt);
            if fate != AnimalFate::Alive {
                log::trace!("{} removed: {:?}", animal.species, fate);
                removed.push(index);
            }
        }

        for &index in &removed {
            self.despawn(index);
        }

        if self.count() < self.params.target_population && rng.chance_per_mille(self.params.spawn_odds) {
            let species = Self::random_species(rng);
            let aquatic = self.params.ongoing_aquatic.clone();
            let position = self.spawn_position(grid, cell_size, species, &aquatic, rng);
            self.spawn(species, position, rng);
        }

        removed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Block;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    const CELL: f32 = 32.0;

    /// 200x100 grid: grass surface on row 40, stone below
    fn test_grid() -> GridWorld {
        let mut grid = GridWorld::new(200, 100);
        for x in 0..200 {
            grid.set(x, 40, Block::Grass);
            for y in 41..100 {
                grid.set(x, y, Block::Stone);
            }
        }
        grid
    }

    #[test]
    fn test_creature_manager_creation() {
        let manager = CreatureManager::new(AnimalParams::default());
        assert_eq!(manager.count(), 0);
        assert_eq!(manager.capacity(), 20);
        assert!(manager.can_spawn());
    }

    #[test]
    fn test_max_population_limit() {
        let mut manager = CreatureManager::new(AnimalParams::default());
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        for i in 0..25 {
            let spawned = manager.spawn(Species::Pig, Vec2::new(i as f32, 0.0), &mut rng);
            assert_eq!(spawned.is_some(), i < 20);
        }
        assert_eq!(manager.count(), 20);
        assert!(!manager.can_spawn());
    }

    #[test]
    fn test_ground_spawn_sits_on_surface() {
        let manager = CreatureManager::new(AnimalParams::default());
        let grid = test_grid();
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let aquatic = manager.params().initial_aquatic.clone();
        for _ in 0..20 {
            let pos = manager.spawn_position(&grid, CELL, Species::Rabbit, &aquatic, &mut rng);
            assert!(pos.x >= 50.0 && pos.x <= 150.0 * CELL);
            assert_eq!(pos.y, 40.0 * CELL - 16.0);
        }
    }

    #[test]
    fn test_empty_column_spawns_on_last_row() {
        let manager = CreatureManager::new(AnimalParams::default());
        let grid = GridWorld::new(200, 100);
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let aquatic = manager.params().initial_aquatic.clone();
        let pos = manager.spawn_position(&grid, CELL, Species::Pig, &aquatic, &mut rng);
        assert_eq!(pos.y, 99.0 * CELL);
    }

    #[test]
    fn test_fish_spawn_finds_water() {
        let manager = CreatureManager::new(AnimalParams::default());
        let mut grid = GridWorld::new(200, 100);
        for x in 0..200 {
            for y in 30..=81 {
                grid.set(x, y, Block::Water);
            }
        }
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let aquatic = manager.params().initial_aquatic.clone();
        let pos = manager.spawn_position(&grid, CELL, Species::Fish, &aquatic, &mut rng);
        assert!(CollisionQueries::box_in_liquid(&grid, CELL, pos.x, pos.y, 12.0, 6.0));
        assert_eq!(pos.y % CELL, 0.0);
    }

    #[test]
    fn test_fish_spawn_keeps_last_attempt_without_water() {
        let manager = CreatureManager::new(AnimalParams::default());
        let grid = test_grid();
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let aquatic = manager.params().ongoing_aquatic.clone();
        let pos = manager.spawn_position(&grid, CELL, Species::Fish, &aquatic, &mut rng);
        let row = (pos.y / CELL) as i32;
        assert!((40..=80).contains(&row));
    }

    #[test]
    fn test_spawn_initial_population() {
        let mut manager = CreatureManager::new(AnimalParams::default());
        let grid = test_grid();
        let mut rng = Xoshiro256StarStar::seed_from_u64(4);
        manager.spawn_initial(&grid, CELL, &mut rng);
        assert_eq!(manager.count(), 12);
    }

    #[test]
    fn test_update_removes_stranded_fish() {
        let mut params = AnimalParams::default();
        params.spawn_odds = 0;
        let mut manager = CreatureManager::new(params);
        let grid = test_grid();
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let index = manager
            .spawn(Species::Fish, Vec2::new(500.0, 40.0 * CELL - 16.0), &mut rng)
            .unwrap();
        let removed = manager.update(&grid, CELL, Vec2::ZERO, &mut rng, 1.0 / 60.0);
        assert_eq!(removed, 1);
        assert!(manager.pool().get(index).is_none());
    }

    #[test]
    fn test_update_skips_freed_slots() {
        let mut params = AnimalParams::default();
        params.spawn_odds = 0;
        let mut manager = CreatureManager::new(params);
        let grid = test_grid();
        let mut rng = Xoshiro256StarStar::seed_from_u64(8);
        for x in [500.0, 1000.0, 1500.0] {
            manager.spawn(Species::Pig, Vec2::new(x, 40.0 * CELL - 16.0), &mut rng);
        }
        assert!(manager.despawn(1).is_some());

        let removed = manager.update(&grid, CELL, Vec2::ZERO, &mut rng, 1.0 / 60.0);
        assert_eq!(removed, 0);
        assert_eq!(manager.count(), 2);
        assert!(manager.pool().get(1).is_none());
        assert!(manager.pool().get(0).unwrap().anim_time > 0.0);
        assert!(manager.pool().get(2).unwrap().anim_time > 0.0);
    }

    #[test]
    fn test_population_never_exceeds_capacity() {
        let mut params = AnimalParams::default();
        params.target_population = 100;
        params.spawn_odds = 1001;
        let mut manager = CreatureManager::new(params);
        let grid = test_grid();
        let mut rng = Xoshiro256StarStar::seed_from_u64(6);
        for _ in 0..200 {
            manager.update(&grid, CELL, Vec2::new(3200.0, 1200.0), &mut rng, 1.0 / 60.0);
            assert!(manager.count() <= manager.capacity());
        }
    }
}
