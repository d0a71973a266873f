//! Host-side driver for the Wash Day game
//!
//! Wires [`washday_core`] to a real or simulated clock, a TOML machine
//! configuration, a command script and a snapshot renderer.

pub mod clock;
pub mod config;
pub mod driver;
pub mod logging;
pub mod render;
pub mod script;

pub use clock::{Pacer, SystemClock};
pub use config::WashConfig;
pub use driver::{Driver, RunStats};
pub use render::{OutputFormat, Renderer};
pub use script::{parse_script, Command};
