//! Error types for the fallible edges of the library
//!
//! The simulation itself is total; these only surface when converting raw
//! ids or reading/writing generation presets.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown block id {0}")]
    UnknownBlock(u8),

    #[error("failed to parse worldgen preset: {0}")]
    PresetParse(#[from] ron::error::SpannedError),

    #[error("failed to serialize worldgen preset: {0}")]
    PresetSerialize(#[from] ron::Error),
}
