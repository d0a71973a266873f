//! Machine configuration loading
//!
//! Reads a TOML file, or falls back to the `washday.toml` embedded in the
//! binary. Every section is optional; missing keys take the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use washday_core::config::{ECO_DURATION_MS, HEAVY_DURATION_MS, QUICK_DURATION_MS};
use washday_core::{Catalog, DurationTable, GarmentKind};

/// Embedded default configuration
pub const EMBEDDED_CONFIG: &str = include_str!("../washday.toml");

/// Default tick cadence, roughly one animation frame
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown garment `{0}` in [catalog]")]
    UnknownGarment(String),
    #[error("[driver] tick_interval_ms must be positive")]
    ZeroTickInterval,
    #[error(transparent)]
    Invalid(#[from] washday_core::ConfigError),
}

/// `[modes]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModesSection {
    pub quick_ms: u32,
    pub eco_ms: u32,
    pub heavy_ms: u32,
}

impl Default for ModesSection {
    fn default() -> Self {
        Self {
            quick_ms: QUICK_DURATION_MS,
            eco_ms: ECO_DURATION_MS,
            heavy_ms: HEAVY_DURATION_MS,
        }
    }
}

/// `[catalog]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSection {
    /// Garment ids in display order
    pub garments: Vec<String>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            garments: GarmentKind::ALL
                .iter()
                .map(|kind| kind.id().to_owned())
                .collect(),
        }
    }
}

/// `[driver]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverSection {
    /// Interval between progress ticks (ms)
    pub tick_interval_ms: u64,
}

impl Default for DriverSection {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WashConfig {
    pub modes: ModesSection,
    pub catalog: CatalogSection,
    pub driver: DriverSection,
}

impl WashConfig {
    /// Load from `path`, or the embedded defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let input = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&input, &path.display().to_string())
            }
            None => Self::from_toml(EMBEDDED_CONFIG, "<embedded>"),
        }
    }

    /// Parse and validate TOML text
    ///
    /// `origin` names the source in error messages.
    pub fn from_toml(input: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: WashConfig = toml::from_str(input).map_err(|source| ConfigError::Parse {
            origin: origin.to_owned(),
            source,
        })?;

        // Surface every validation failure at load time
        config.durations()?;
        config.catalog()?;
        if config.driver.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(config)
    }

    /// Validated mode duration table
    pub fn durations(&self) -> Result<DurationTable, ConfigError> {
        let modes = &self.modes;
        Ok(DurationTable::new(
            modes.quick_ms,
            modes.eco_ms,
            modes.heavy_ms,
        )?)
    }

    /// Validated starting pile
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        let kinds = self
            .catalog
            .garments
            .iter()
            .map(|id| GarmentKind::from_id(id).ok_or_else(|| ConfigError::UnknownGarment(id.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog::new(&kinds)?)
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.driver.tick_interval_ms
    }
}
