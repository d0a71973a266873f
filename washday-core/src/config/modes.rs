//! Wash modes and their fixed durations
//!
//! Each mode maps to a fixed, strictly positive duration. The mapping is a
//! static table; drivers may replace it with a validated one at start-up.

use core::fmt;

use super::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default Quick cycle duration (ms)
pub const QUICK_DURATION_MS: u32 = 2000;

/// Default Eco cycle duration (ms)
pub const ECO_DURATION_MS: u32 = 4000;

/// Default Heavy cycle duration (ms)
pub const HEAVY_DURATION_MS: u32 = 6000;

/// Wash mode preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WashMode {
    Quick,
    Eco,
    Heavy,
}

impl WashMode {
    /// All modes in presentation order
    pub const ALL: [WashMode; 3] = [WashMode::Quick, WashMode::Eco, WashMode::Heavy];

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            WashMode::Quick => "Quick",
            WashMode::Eco => "Eco",
            WashMode::Heavy => "Heavy",
        }
    }

    /// Parse a mode name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for WashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mode to duration mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DurationTable {
    quick_ms: u32,
    eco_ms: u32,
    heavy_ms: u32,
}

impl DurationTable {
    /// Build a table, rejecting zero durations
    pub fn new(quick_ms: u32, eco_ms: u32, heavy_ms: u32) -> Result<Self, ConfigError> {
        for (mode, ms) in [
            (WashMode::Quick, quick_ms),
            (WashMode::Eco, eco_ms),
            (WashMode::Heavy, heavy_ms),
        ] {
            if ms == 0 {
                return Err(ConfigError::ZeroDuration(mode));
            }
        }

        Ok(Self {
            quick_ms,
            eco_ms,
            heavy_ms,
        })
    }

    /// Duration of a full cycle in the given mode (ms, always > 0)
    pub const fn duration_ms(&self, mode: WashMode) -> u32 {
        match mode {
            WashMode::Quick => self.quick_ms,
            WashMode::Eco => self.eco_ms,
            WashMode::Heavy => self.heavy_ms,
        }
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            quick_ms: QUICK_DURATION_MS,
            eco_ms: ECO_DURATION_MS,
            heavy_ms: HEAVY_DURATION_MS,
        }
    }
}
