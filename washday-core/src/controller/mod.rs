//! Game controller
//!
//! The only owner of mutable game state. Every operation enforces its
//! preconditions, updates the user-facing notice and returns a snapshot.

pub mod error;
pub mod game;
pub mod notice;

pub use error::GameError;
pub use game::{GameController, GameState};
pub use notice::Notice;
