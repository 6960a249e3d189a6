//! Animals - species table, AI state machine, physics and population
//!
//! Animals are simple state-machine critters: each tick the AI picks a
//! state and facing, then physics moves the body through the grid.

pub mod animal;
pub mod behavior;
pub mod physics;
pub mod pool;
pub mod spawning;
pub mod species;

pub use animal::{AiState, Animal};
pub use behavior::AnimalBehavior;
pub use physics::{AnimalFate, AnimalPhysics};
pub use pool::AnimalPool;
pub use spawning::CreatureManager;
pub use species::{AnimalParams, AquaticSpawn, Impulse, Species, SpeciesParams, SpeciesTable};
