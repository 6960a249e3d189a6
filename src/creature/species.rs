//! Species table and animal tuning constants

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Animal species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Rabbit,
    Bird,
    Fish,
    Pig,
    Chicken,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Rabbit,
        Species::Bird,
        Species::Fish,
        Species::Pig,
        Species::Chicken,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Species::Rabbit => "Rabbit",
            Species::Bird => "Bird",
            Species::Fish => "Fish",
            Species::Pig => "Pig",
            Species::Chicken => "Chicken",
        }
    }

    /// Body colour (RGBA)
    pub fn color(self) -> [u8; 4] {
        match self {
            Species::Rabbit => [150, 111, 51, 255],
            Species::Bird => [70, 130, 180, 255],
            Species::Fish => [255, 140, 0, 255],
            Species::Pig => [255, 192, 203, 255],
            Species::Chicken => [255, 255, 255, 255],
        }
    }

    /// Species at `index` into [`Species::ALL`], wrapping
    pub fn from_index(index: usize) -> Species {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Species-specific vertical impulse rolled every physics tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Impulse {
    None,
    /// Jump with `chance` percent while grounded
    Hop { chance: i32 },
    /// Jump with `chance` percent, airborne or not
    Flap { chance: i32 },
    /// Random vertical speed in `[-range, range]` with `chance` percent
    Drift { chance: i32, range: i32 },
}

/// Movement constants for one species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesParams {
    pub speed: f32,
    pub jump: f32,
    pub gravity: f32,
    /// Body box (width, height)
    pub size: Vec2,
    /// Runs from the player when close
    pub flees: bool,
    /// Lives in liquid and dies outside it
    pub aquatic: bool,
    pub impulse: Impulse,
}

impl SpeciesParams {
    fn base() -> Self {
        Self {
            speed: 50.0,
            jump: 200.0,
            gravity: 400.0,
            size: Vec2::new(12.0, 12.0),
            flees: true,
            aquatic: false,
            impulse: Impulse::None,
        }
    }
}

/// Per-species movement table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesTable {
    pub rabbit: SpeciesParams,
    pub bird: SpeciesParams,
    pub fish: SpeciesParams,
    pub pig: SpeciesParams,
    pub chicken: SpeciesParams,
}

impl Default for SpeciesTable {
    fn default() -> Self {
        let base = SpeciesParams::base();
        Self {
            rabbit: SpeciesParams {
                speed: 80.0,
                jump: 300.0,
                impulse: Impulse::Hop { chance: 5 },
                ..base.clone()
            },
            bird: SpeciesParams {
                speed: 60.0,
                jump: 150.0,
                gravity: 100.0,
                size: Vec2::new(8.0, 12.0),
                impulse: Impulse::Flap { chance: 10 },
                ..base.clone()
            },
            fish: SpeciesParams {
                speed: 40.0,
                gravity: 0.0,
                size: Vec2::new(12.0, 6.0),
                flees: false,
                aquatic: true,
                impulse: Impulse::Drift {
                    chance: 5,
                    range: 50,
                },
                ..base.clone()
            },
            pig: SpeciesParams {
                speed: 30.0,
                jump: 180.0,
                ..base.clone()
            },
            chicken: SpeciesParams {
                speed: 50.0,
                jump: 250.0,
                ..base
            },
        }
    }
}

impl SpeciesTable {
    pub fn get(&self, species: Species) -> &SpeciesParams {
        match species {
            Species::Rabbit => &self.rabbit,
            Species::Bird => &self.bird,
            Species::Fish => &self.fish,
            Species::Pig => &self.pig,
            Species::Chicken => &self.chicken,
        }
    }
}

/// Rows and attempts used to find water for an aquatic spawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquaticSpawn {
    pub min_row: i32,
    pub max_row: i32,
    pub attempts: u32,
}

/// Animal population, AI and shared physics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalParams {
    /// Fixed pool size
    pub capacity: usize,
    pub initial_population: usize,
    /// Ongoing spawns only happen below this population
    pub target_population: usize,
    /// Per-tick spawn odds out of 1001
    pub spawn_odds: i32,
    /// Spawn columns keep this many world units from the left edge
    /// (and `spawn_margin` cells from the right)
    pub spawn_margin: i32,
    /// Ground spawns sit this far above the surface cell's top
    pub spawn_lift: f32,
    pub initial_aquatic: AquaticSpawn,
    pub ongoing_aquatic: AquaticSpawn,
    /// Player distance that makes an animal flee
    pub flee_radius: f32,
    /// Player distance at which a fleeing animal calms down
    pub calm_radius: f32,
    pub flee_time: f32,
    /// Percent chance a wandering animal walks on a given tick
    pub walk_chance: i32,
    /// Horizontal velocity multiplier on ticks without walking
    pub idle_decay: f32,
    pub max_vertical_speed: f32,
    pub liquid_drag: f32,
    pub liquid_gravity_scale: f32,
    pub species: SpeciesTable,
}

impl Default for AnimalParams {
    fn default() -> Self {
        Self {
            capacity: 20,
            initial_population: 12,
            target_population: 8,
            spawn_odds: 2,
            spawn_margin: 50,
            spawn_lift: 16.0,
            initial_aquatic: AquaticSpawn {
                min_row: 30,
                max_row: 80,
                attempts: 10,
            },
            ongoing_aquatic: AquaticSpawn {
                min_row: 40,
                max_row: 80,
                attempts: 5,
            },
            flee_radius: 80.0,
            calm_radius: 120.0,
            flee_time: 3.0,
            walk_chance: 50,
            idle_decay: 0.9,
            max_vertical_speed: 300.0,
            liquid_drag: 0.8,
            liquid_gravity_scale: 0.3,
            species: SpeciesTable::default(),
        }
    }
}
