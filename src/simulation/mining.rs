//! Mining progress tracking with hardness-based break times

use serde::{Deserialize, Serialize};

/// Mining progress tracker (one per player)
///
/// Progress is stored as elapsed seconds so that the required time can be
/// refreshed every tick (the selected tool may change mid-swing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningProgress {
    pub target_cell: Option<(i32, i32)>, // Grid coordinates
    pub elapsed: f32,                    // Seconds spent on the target
    pub required_time: f32,              // Seconds to complete
}

impl MiningProgress {
    pub fn new() -> Self {
        Self {
            target_cell: None,
            elapsed: 0.0,
            required_time: 0.0,
        }
    }

    /// Start mining a new cell
    pub fn start(&mut self, cell: (i32, i32), required_time: f32) {
        self.target_cell = Some(cell);
        self.elapsed = 0.0;
        self.required_time = required_time;
    }

    /// Keep mining `cell`, restarting if it is not the current target
    ///
    /// Returns true if mining completed this tick; the tracker is reset.
    pub fn advance(&mut self, cell: (i32, i32), required_time: f32, delta_time: f32) -> bool {
        if self.target_cell != Some(cell) {
            self.start(cell, required_time);
        }
        self.required_time = required_time;
        self.update(delta_time)
    }

    /// Update mining progress
    /// Returns true if mining completed
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.target_cell.is_none() {
            return false;
        }

        self.elapsed += delta_time;

        if self.progress() >= 1.0 {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Cancel current mining
    pub fn reset(&mut self) {
        self.target_cell = None;
        self.elapsed = 0.0;
        self.required_time = 0.0;
    }

    /// Fraction of the break completed (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        if self.target_cell.is_none() {
            return 0.0;
        }
        if self.required_time <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.required_time).min(1.0)
    }

    /// Get progress as percentage (0-100)
    pub fn get_percentage(&self) -> f32 {
        self.progress() * 100.0
    }

    /// Check if currently mining
    pub fn is_mining(&self) -> bool {
        self.target_cell.is_some()
    }
}

impl Default for MiningProgress {
    fn default() -> Self {
        Self::new()
    }
}
