//! Configuration types
//!
//! The static wash mode table and the errors raised when a driver supplies
//! its own configuration.

pub mod error;
pub mod modes;

pub use error::ConfigError;
pub use modes::*;
