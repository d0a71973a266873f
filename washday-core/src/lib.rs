//! Renderer-agnostic core logic for the Wash Day laundry game
//!
//! This crate contains all game logic that does not depend on a specific
//! UI, input mechanism or time source:
//!
//! - Garment catalog and the pile/drum containers
//! - Transfer of garments from the pile into the drum
//! - Wash cycle state machine and time-driven progress
//! - Game controller that enforces preconditions and produces snapshots
//! - Clock abstraction for the session start time
//!
//! The core performs no I/O. A driver feeds it input events and timestamps
//! and renders the returned [`GameState`] snapshots.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod cycle;
pub mod garment;
#[cfg(feature = "serde")]
pub mod snapshot;
pub mod traits;

pub use config::{ConfigError, DurationTable, WashMode};
pub use controller::{GameController, GameError, GameState, Notice};
pub use cycle::{CyclePhase, WashCycle, WashSession};
pub use garment::{Catalog, Container, Garment, GarmentKind};
pub use traits::{Clock, ManualClock};
