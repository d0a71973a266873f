//! Wash cycle
//!
//! Tracks the selected mode, the active session and the progress value,
//! and flips the drum contents to clean when the session completes.

pub mod machine;
pub mod session;

pub use machine::{CycleEvent, CyclePhase};
pub use session::{WashSession, PROGRESS_COMPLETE};

use crate::config::{DurationTable, WashMode};
use crate::controller::GameError;
use crate::garment::Container;

/// Wash cycle state
///
/// Owns everything about the machine except the garments themselves;
/// the drum is passed in by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct WashCycle {
    /// Current phase
    phase: CyclePhase,
    /// Selected mode (kept after completion for display)
    mode: Option<WashMode>,
    /// Active session, only while washing
    session: Option<WashSession>,
    /// Progress percentage, full precision
    progress: f64,
    /// Mode durations
    durations: DurationTable,
}

impl WashCycle {
    /// Create an idle cycle
    pub fn new(durations: DurationTable) -> Self {
        Self {
            phase: CyclePhase::Idle,
            mode: None,
            session: None,
            progress: 0.0,
            durations,
        }
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn mode(&self) -> Option<WashMode> {
        self.mode
    }

    pub fn session(&self) -> Option<&WashSession> {
        self.session.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn durations(&self) -> &DurationTable {
        &self.durations
    }

    pub fn is_washing(&self) -> bool {
        self.phase.is_washing()
    }

    pub fn is_done(&self) -> bool {
        self.phase == CyclePhase::Done
    }

    /// Choose a wash mode
    ///
    /// Does not start the timer.
    pub fn select_mode(&mut self, mode: WashMode, drum: &Container) -> Result<(), GameError> {
        if !self.phase.accepts_mode() {
            return Err(if self.phase.is_washing() {
                GameError::AlreadyWashing
            } else {
                GameError::InvalidStart
            });
        }
        if drum.is_empty() {
            return Err(GameError::EmptyDrum);
        }

        self.mode = Some(mode);
        self.phase = self.phase.transition(CycleEvent::SelectMode);
        Ok(())
    }

    /// Start the timed cycle at `now_ms`
    pub fn start(&mut self, now_ms: u64, drum: &Container) -> Result<(), GameError> {
        if drum.is_empty() {
            return Err(GameError::EmptyDrum);
        }
        let mode = self.mode.ok_or(GameError::NoModeSelected)?;
        match self.phase {
            CyclePhase::Washing => return Err(GameError::AlreadyWashing),
            CyclePhase::ModeSelected => {}
            CyclePhase::Idle | CyclePhase::Done => return Err(GameError::InvalidStart),
        }

        self.session = Some(WashSession::begin(
            mode,
            now_ms,
            self.durations.duration_ms(mode),
        ));
        self.progress = 0.0;
        self.phase = self.phase.transition(CycleEvent::Start);
        Ok(())
    }

    /// Advance the cycle to `now_ms`
    ///
    /// No-op unless washing. Progress never decreases. Returns true on the
    /// tick that completes the cycle; the whole drum is flagged clean in
    /// the same call.
    pub fn tick(&mut self, now_ms: u64, drum: &mut Container) -> bool {
        if !self.phase.is_washing() {
            return false;
        }
        let Some(session) = self.session else {
            return false;
        };

        let progress = session.progress_at(now_ms);
        if progress > self.progress {
            self.progress = progress;
        }

        if session.is_complete_at(now_ms) {
            drum.mark_all_clean();
            self.progress = PROGRESS_COMPLETE;
            self.session = None;
            self.phase = self.phase.transition(CycleEvent::Completed);
            return true;
        }

        false
    }

    /// Check that a garment may be loaded now
    pub fn check_load(&self) -> Result<(), GameError> {
        if self.phase.is_washing() {
            return Err(GameError::AlreadyWashing);
        }
        Ok(())
    }

    /// Start a fresh cycle context after a garment was loaded
    pub fn loaded(&mut self) {
        self.mode = None;
        self.progress = 0.0;
        self.session = None;
        self.phase = self.phase.transition(CycleEvent::Load);
    }

    /// Discard any session and return to idle
    pub fn reset(&mut self) {
        self.mode = None;
        self.session = None;
        self.progress = 0.0;
        self.phase = self.phase.transition(CycleEvent::Reset);
    }
}

impl Default for WashCycle {
    fn default() -> Self {
        Self::new(DurationTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garment::{Garment, GarmentKind};

    fn loaded_drum() -> Container {
        let mut drum = Container::new();
        drum.push(Garment::soiled(GarmentKind::Sock)).unwrap();
        drum.push(Garment::soiled(GarmentKind::Pants)).unwrap();
        drum
    }

    #[test]
    fn test_select_mode_needs_garments() {
        let mut cycle = WashCycle::default();
        let drum = Container::new();
        assert_eq!(
            cycle.select_mode(WashMode::Quick, &drum),
            Err(GameError::EmptyDrum)
        );
        assert_eq!(cycle.phase(), CyclePhase::Idle);
        assert_eq!(cycle.mode(), None);
    }

    #[test]
    fn test_mode_locked_while_washing() {
        let mut cycle = WashCycle::default();
        let drum = loaded_drum();

        cycle.select_mode(WashMode::Quick, &drum).unwrap();
        cycle.select_mode(WashMode::Heavy, &drum).unwrap();
        assert_eq!(cycle.mode(), Some(WashMode::Heavy));

        cycle.start(0, &drum).unwrap();
        assert_eq!(
            cycle.select_mode(WashMode::Eco, &drum),
            Err(GameError::AlreadyWashing)
        );
        assert_eq!(cycle.mode(), Some(WashMode::Heavy));
        assert!(cycle.is_washing());
    }

    #[test]
    fn test_start_guards() {
        let mut cycle = WashCycle::default();
        let drum = loaded_drum();

        assert_eq!(cycle.start(0, &Container::new()), Err(GameError::EmptyDrum));
        assert_eq!(cycle.start(0, &drum), Err(GameError::NoModeSelected));

        cycle.select_mode(WashMode::Eco, &drum).unwrap();
        cycle.start(0, &drum).unwrap();
        assert_eq!(cycle.start(100, &drum), Err(GameError::AlreadyWashing));
        assert_eq!(cycle.session().map(|s| s.start_ms), Some(0));
    }

    #[test]
    fn test_full_cycle() {
        let mut cycle = WashCycle::default();
        let mut drum = loaded_drum();

        cycle.select_mode(WashMode::Eco, &drum).unwrap();
        cycle.start(1000, &drum).unwrap();
        assert!(cycle.is_washing());

        assert!(!cycle.tick(2000, &mut drum));
        assert_eq!(cycle.progress(), 25.0);
        assert_eq!(drum.clean_set().count(), 0);

        assert!(cycle.tick(5000, &mut drum));
        assert_eq!(cycle.progress(), 100.0);
        assert!(cycle.is_done());
        assert!(cycle.session().is_none());
        assert!(drum.all_clean());
        assert_eq!(cycle.mode(), Some(WashMode::Eco));
    }

    #[test]
    fn test_single_coarse_tick_completes() {
        let mut cycle = WashCycle::default();
        let mut drum = loaded_drum();

        cycle.select_mode(WashMode::Heavy, &drum).unwrap();
        cycle.start(0, &drum).unwrap();

        assert!(cycle.tick(60_000, &mut drum));
        assert_eq!(cycle.progress(), 100.0);
        assert!(drum.all_clean());
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut cycle = WashCycle::default();
        let mut drum = loaded_drum();

        cycle.select_mode(WashMode::Quick, &drum).unwrap();
        cycle.start(1000, &drum).unwrap();

        cycle.tick(2000, &mut drum);
        assert_eq!(cycle.progress(), 50.0);

        // Out-of-order timestamp must not pull progress back
        cycle.tick(1200, &mut drum);
        assert_eq!(cycle.progress(), 50.0);
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut cycle = WashCycle::default();
        let mut drum = loaded_drum();
        let before = cycle.clone();

        assert!(!cycle.tick(10_000, &mut drum));
        assert_eq!(cycle, before);
        assert_eq!(drum.clean_set().count(), 0);
    }

    #[test]
    fn test_no_rewash_after_done() {
        let mut cycle = WashCycle::default();
        let mut drum = loaded_drum();

        cycle.select_mode(WashMode::Quick, &drum).unwrap();
        cycle.start(0, &drum).unwrap();
        cycle.tick(2000, &mut drum);

        assert_eq!(cycle.start(3000, &drum), Err(GameError::InvalidStart));
        assert_eq!(
            cycle.select_mode(WashMode::Eco, &drum),
            Err(GameError::InvalidStart)
        );
    }

    #[test]
    fn test_reset_discards_session() {
        let mut cycle = WashCycle::default();
        let mut drum = loaded_drum();

        cycle.select_mode(WashMode::Heavy, &drum).unwrap();
        cycle.start(0, &drum).unwrap();
        cycle.tick(2400, &mut drum);
        assert_eq!(cycle.progress(), 40.0);

        cycle.reset();
        assert_eq!(cycle, WashCycle::default());

        // Stale scheduler callback after reset
        assert!(!cycle.tick(6000, &mut drum));
        assert_eq!(drum.clean_set().count(), 0);
    }

    #[test]
    fn test_load_blocked_while_washing() {
        let mut cycle = WashCycle::default();
        let drum = loaded_drum();

        assert!(cycle.check_load().is_ok());
        cycle.select_mode(WashMode::Quick, &drum).unwrap();
        cycle.start(0, &drum).unwrap();
        assert_eq!(cycle.check_load(), Err(GameError::AlreadyWashing));
    }
}
