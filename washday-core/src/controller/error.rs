//! Operation errors
//!
//! All of these are input-sequencing mistakes. None is fatal, and none is
//! worth retrying automatically.

use core::fmt;

use crate::garment::GarmentKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons an operation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameError {
    /// Garment is not in the pile
    NotFound(GarmentKind),
    /// Operation needs at least one garment in the drum
    EmptyDrum,
    /// Wash requested before a mode was chosen
    NoModeSelected,
    /// A cycle is already running
    AlreadyWashing,
    /// The cycle cannot start from its current phase
    InvalidStart,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotFound(kind) => {
                write!(f, "The {} is not in the laundry pile.", kind.name())
            }
            GameError::EmptyDrum => f.write_str("No clothes in the machine! Drag some in first."),
            GameError::NoModeSelected => {
                f.write_str("Please select a wash mode first (Quick, Eco, or Heavy).")
            }
            GameError::AlreadyWashing => {
                f.write_str("Already washing! Wait for the cycle to finish.")
            }
            GameError::InvalidStart => {
                f.write_str("These clothes are already clean! Reset to wash another load.")
            }
        }
    }
}

impl core::error::Error for GameError {}
