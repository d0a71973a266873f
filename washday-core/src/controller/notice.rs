//! User-facing status messages

use core::fmt;

use super::error::GameError;
use crate::config::WashMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latest outcome, rendered as a sentence by `Display`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notice {
    /// Fresh game
    #[default]
    Welcome,
    /// A garment went into the drum
    Loaded,
    /// A mode was chosen
    ModeSelected(WashMode),
    /// Timer running
    Washing,
    /// Cycle finished
    Clean,
    /// Game was reset
    Reset,
    /// The last operation was rejected
    Rejected(GameError),
}

impl Notice {
    /// Check if this notice reports a rejected operation
    pub fn is_rejection(&self) -> bool {
        matches!(self, Notice::Rejected(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Welcome => f.write_str("Drag clothes into the washing machine!"),
            Notice::Loaded => f.write_str("Clothes are in! Now select a wash mode."),
            Notice::ModeSelected(mode) => {
                write!(f, "\"{}\" mode selected. Click \"Wash\" when ready!", mode)
            }
            Notice::Washing => f.write_str("Washing in progress..."),
            Notice::Clean => f.write_str("Clothes are clean! Time to dry!"),
            Notice::Reset => f.write_str("Game reset! Drag clothes into the washing machine."),
            Notice::Rejected(err) => fmt::Display::fmt(err, f),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::garment::GarmentKind;
    use std::string::ToString;

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Notice::Loaded.to_string(),
            "Clothes are in! Now select a wash mode."
        );
        assert_eq!(
            Notice::ModeSelected(WashMode::Quick).to_string(),
            "\"Quick\" mode selected. Click \"Wash\" when ready!"
        );
        assert_eq!(Notice::Clean.to_string(), "Clothes are clean! Time to dry!");
    }

    #[test]
    fn test_rejection_uses_error_text() {
        let notice = Notice::Rejected(GameError::EmptyDrum);
        assert!(notice.is_rejection());
        assert_eq!(
            notice.to_string(),
            "No clothes in the machine! Drag some in first."
        );
        assert_eq!(
            Notice::Rejected(GameError::NotFound(GarmentKind::Towel)).to_string(),
            "The Towel is not in the laundry pile."
        );
    }
}
