//! Garment kinds and the starting catalog

use heapless::Vec;

use crate::config::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum garments a container can hold
pub const MAX_GARMENTS: usize = 8;

/// Garment kind
///
/// A kind occurs at most once in a catalog, so it doubles as the
/// garment's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GarmentKind {
    Sock,
    TShirt,
    Pants,
    Towel,
}

/// Soiled and clean image references for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Visuals {
    pub soiled: &'static str,
    pub clean: &'static str,
}

impl GarmentKind {
    /// All kinds, in standard catalog order
    pub const ALL: [GarmentKind; 4] = [
        GarmentKind::Sock,
        GarmentKind::TShirt,
        GarmentKind::Pants,
        GarmentKind::Towel,
    ];

    /// Stable lowercase identifier
    pub const fn id(self) -> &'static str {
        match self {
            GarmentKind::Sock => "sock",
            GarmentKind::TShirt => "tshirt",
            GarmentKind::Pants => "pants",
            GarmentKind::Towel => "towel",
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            GarmentKind::Sock => "Sock",
            GarmentKind::TShirt => "T-Shirt",
            GarmentKind::Pants => "Pants",
            GarmentKind::Towel => "Towel",
        }
    }

    pub const fn visuals(self) -> Visuals {
        match self {
            GarmentKind::Sock => Visuals {
                soiled: "https://placehold.co/60x60/c4b5fd/ffffff?text=🧦",
                clean: "https://placehold.co/60x60/d1fae5/374151?text=🧦",
            },
            GarmentKind::TShirt => Visuals {
                soiled: "https://placehold.co/80x80/fcd34d/ffffff?text=👕",
                clean: "https://placehold.co/80x80/d1fae5/374151?text=👕",
            },
            GarmentKind::Pants => Visuals {
                soiled: "https://placehold.co/90x90/93c5fd/ffffff?text=👖",
                clean: "https://placehold.co/90x90/d1fae5/374151?text=👖",
            },
            GarmentKind::Towel => Visuals {
                soiled: "https://placehold.co/70x70/a78bfa/ffffff?text=🧺",
                clean: "https://placehold.co/70x70/d1fae5/374151?text=🧺",
            },
        }
    }

    /// Parse a stable identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// Validated starting pile: non-empty, no duplicate kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Catalog {
    kinds: Vec<GarmentKind, MAX_GARMENTS>,
}

impl Catalog {
    /// Build a catalog from a list of kinds
    pub fn new(kinds: &[GarmentKind]) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut validated: Vec<GarmentKind, MAX_GARMENTS> = Vec::new();
        for &kind in kinds {
            if validated.contains(&kind) {
                return Err(ConfigError::DuplicateGarment(kind));
            }
            validated
                .push(kind)
                .map_err(|_| ConfigError::TooManyGarments)?;
        }

        Ok(Self { kinds: validated })
    }

    /// The four-garment catalog
    pub fn standard() -> Self {
        Self {
            kinds: Vec::from_slice(&GarmentKind::ALL).unwrap_or_default(),
        }
    }

    pub fn kinds(&self) -> &[GarmentKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
