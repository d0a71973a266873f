//! Ordered garment containers (pile and drum)

use heapless::Vec;

use super::catalog::{Catalog, GarmentKind, MAX_GARMENTS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A garment instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Garment {
    pub kind: GarmentKind,
    pub clean: bool,
}

impl Garment {
    /// A soiled garment of the given kind
    pub const fn soiled(kind: GarmentKind) -> Self {
        Self { kind, clean: false }
    }

    /// Image reference matching the current clean flag
    pub fn image(&self) -> &'static str {
        let visuals = self.kind.visuals();
        if self.clean {
            visuals.clean
        } else {
            visuals.soiled
        }
    }
}

/// Ordered collection of garments
///
/// Insertion order is preserved for rendering but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    garments: Vec<Garment, MAX_GARMENTS>,
}

impl Container {
    /// Create an empty container
    pub const fn new() -> Self {
        Self {
            garments: Vec::new(),
        }
    }

    /// Fill a container with soiled garments from the catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut container = Self::new();
        for &kind in catalog.kinds() {
            // Catalog length is bounded by MAX_GARMENTS
            let _ = container.garments.push(Garment::soiled(kind));
        }
        container
    }

    pub fn len(&self) -> usize {
        self.garments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    pub fn contains(&self, kind: GarmentKind) -> bool {
        self.garments.iter().any(|g| g.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Garment> {
        self.garments.iter()
    }

    pub fn kinds(&self) -> impl Iterator<Item = GarmentKind> + '_ {
        self.garments.iter().map(|g| g.kind)
    }

    /// Remove a garment by kind, keeping the order of the rest
    pub fn take(&mut self, kind: GarmentKind) -> Option<Garment> {
        let index = self.garments.iter().position(|g| g.kind == kind)?;
        Some(self.garments.remove(index))
    }

    /// Append a garment
    ///
    /// Returns the garment back if the container is full.
    pub fn push(&mut self, garment: Garment) -> Result<(), Garment> {
        self.garments.push(garment)
    }

    /// Flag every garment clean in one pass
    pub fn mark_all_clean(&mut self) {
        for garment in &mut self.garments {
            garment.clean = true;
        }
    }

    /// True when non-empty and every garment is clean
    pub fn all_clean(&self) -> bool {
        !self.garments.is_empty() && self.garments.iter().all(|g| g.clean)
    }

    /// Garments flagged clean (the derived clean set)
    pub fn clean_set(&self) -> impl Iterator<Item = &Garment> {
        self.garments.iter().filter(|g| g.clean)
    }

    pub fn clear(&mut self) {
        self.garments.clear();
    }
}
