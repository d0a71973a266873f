//! Garments and the containers that hold them
//!
//! Every garment in the catalog lives in exactly one of two containers:
//! the pile (not yet loaded) or the drum (loaded into the machine). The
//! only permitted move is pile to drum.

pub mod catalog;
pub mod container;
pub mod transfer;

pub use catalog::{Catalog, GarmentKind, Visuals, MAX_GARMENTS};
pub use container::{Container, Garment};
pub use transfer::transfer;
