//! Wash cycle phase machine
//!
//! Pure phase transitions. Preconditions that depend on the drum contents
//! are enforced by [`WashCycle`](super::WashCycle) before an event is applied.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wash cycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CyclePhase {
    /// No mode chosen yet
    #[default]
    Idle,
    /// Mode chosen, timer not started
    ModeSelected,
    /// Timer running
    Washing,
    /// Cycle finished, drum contents clean
    Done,
}

/// Events that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleEvent {
    /// A wash mode was chosen
    SelectMode,
    /// Wash requested
    Start,
    /// Elapsed time reached the mode duration
    Completed,
    /// A garment was loaded, starting a fresh cycle context
    Load,
    /// Game reset
    Reset,
}

impl CyclePhase {
    /// Check if the timer is running
    pub fn is_washing(&self) -> bool {
        matches!(self, CyclePhase::Washing)
    }

    /// Check if a mode may be chosen in this phase
    pub fn accepts_mode(&self) -> bool {
        matches!(self, CyclePhase::Idle | CyclePhase::ModeSelected)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: CycleEvent) -> Self {
        use CycleEvent::*;
        use CyclePhase::*;

        match (self, event) {
            (_, Reset) => Idle,

            (Idle, SelectMode) => ModeSelected,
            (Idle, Load) => Idle,

            (ModeSelected, SelectMode) => ModeSelected,
            (ModeSelected, Start) => Washing,
            (ModeSelected, Load) => Idle,

            (Washing, Completed) => Done,

            // Loading more laundry after a finished wash starts over
            (Done, Load) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let phase = CyclePhase::Idle;
        let selected = phase.transition(CycleEvent::SelectMode);
        assert_eq!(selected, CyclePhase::ModeSelected);

        let washing = selected.transition(CycleEvent::Start);
        assert_eq!(washing, CyclePhase::Washing);

        let done = washing.transition(CycleEvent::Completed);
        assert_eq!(done, CyclePhase::Done);
    }

    #[test]
    fn test_start_requires_mode() {
        assert_eq!(
            CyclePhase::Idle.transition(CycleEvent::Start),
            CyclePhase::Idle
        );
    }

    #[test]
    fn test_no_rewash_from_done() {
        assert_eq!(
            CyclePhase::Done.transition(CycleEvent::Start),
            CyclePhase::Done
        );
        assert_eq!(
            CyclePhase::Done.transition(CycleEvent::SelectMode),
            CyclePhase::Done
        );
    }

    #[test]
    fn test_accepts_mode() {
        assert!(CyclePhase::Idle.accepts_mode());
        assert!(CyclePhase::ModeSelected.accepts_mode());
        assert!(!CyclePhase::Washing.accepts_mode());
        assert!(!CyclePhase::Done.accepts_mode());
    }

    #[test]
    fn test_washing_ignores_everything_but_completion_and_reset() {
        let events = [CycleEvent::SelectMode, CycleEvent::Start, CycleEvent::Load];
        for event in events {
            assert_eq!(
                CyclePhase::Washing.transition(event),
                CyclePhase::Washing
            );
        }
    }

    #[test]
    fn test_reset_from_any_phase() {
        let phases = [
            CyclePhase::Idle,
            CyclePhase::ModeSelected,
            CyclePhase::Washing,
            CyclePhase::Done,
        ];

        for phase in phases {
            assert_eq!(phase.transition(CycleEvent::Reset), CyclePhase::Idle);
        }
    }

    #[test]
    fn test_load_clears_mode() {
        assert_eq!(
            CyclePhase::ModeSelected.transition(CycleEvent::Load),
            CyclePhase::Idle
        );
        assert_eq!(CyclePhase::Done.transition(CycleEvent::Load), CyclePhase::Idle);
    }
}
