//! Abstraction traits
//!
//! These traits define the interface between the game logic and the
//! driver-specific environment it runs in.

pub mod clock;

pub use clock::{Clock, ManualClock};
