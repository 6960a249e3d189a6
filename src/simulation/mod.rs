//! Simulation helpers - mining progress tracking

pub mod mining;

pub use mining::MiningProgress;
