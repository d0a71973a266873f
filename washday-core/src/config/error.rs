//! Configuration validation errors

use core::fmt;

use super::modes::WashMode;
use crate::garment::GarmentKind;

/// Errors raised while validating driver-supplied configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A wash mode was given a zero duration
    ZeroDuration(WashMode),
    /// The starting pile would be empty
    EmptyCatalog,
    /// A garment kind appears more than once in the catalog
    DuplicateGarment(GarmentKind),
    /// More garments than the containers can hold
    TooManyGarments,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration(mode) => {
                write!(f, "wash mode {} must have a positive duration", mode)
            }
            ConfigError::EmptyCatalog => f.write_str("catalog must contain at least one garment"),
            ConfigError::DuplicateGarment(kind) => {
                write!(f, "garment `{}` listed more than once", kind.id())
            }
            ConfigError::TooManyGarments => f.write_str("catalog exceeds container capacity"),
        }
    }
}

impl core::error::Error for ConfigError {}
