//! Game controller and state snapshot

use crate::config::{DurationTable, WashMode};
use crate::cycle::{CyclePhase, WashCycle};
use crate::garment::{transfer, Catalog, Container, Garment, GarmentKind};
use crate::traits::Clock;

use super::error::GameError;
use super::notice::Notice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only view of the game after an operation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    /// Garments not yet loaded
    pub pile: Container,
    /// Garments in the machine
    pub drum: Container,
    /// Selected wash mode
    pub mode: Option<WashMode>,
    /// Timer running
    pub is_washing: bool,
    /// Cycle finished and every drum garment is clean
    pub is_clean: bool,
    /// Progress percentage in [0, 100], full precision
    pub progress: f64,
    /// Latest outcome
    pub message: Notice,
}

impl GameState {
    /// Progress rounded to the nearest whole percent, for display
    pub fn display_percent(&self) -> u8 {
        // Progress is never negative, so adding 0.5 and truncating rounds
        (self.progress + 0.5) as u8
    }

    /// Drum garments flagged clean
    pub fn clean_set(&self) -> impl Iterator<Item = &Garment> {
        self.drum.clean_set()
    }

    /// Compare everything except the message
    pub fn same_state(&self, other: &GameState) -> bool {
        self.pile == other.pile
            && self.drum == other.drum
            && self.mode == other.mode
            && self.is_washing == other.is_washing
            && self.is_clean == other.is_clean
            && self.progress == other.progress
    }
}

/// Game controller
///
/// Owns the pile, the drum and the wash cycle. Calls are expected to be
/// serialized by the driver; there is no internal locking.
#[derive(Debug)]
pub struct GameController<C: Clock> {
    /// Time source for session start
    clock: C,
    /// Starting pile, restored on reset
    catalog: Catalog,
    pile: Container,
    drum: Container,
    cycle: WashCycle,
    notice: Notice,
}

impl<C: Clock> GameController<C> {
    /// Create a controller with the standard catalog and mode table
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, Catalog::standard(), DurationTable::default())
    }

    /// Create a controller with a custom catalog and mode table
    pub fn with_config(clock: C, catalog: Catalog, durations: DurationTable) -> Self {
        Self {
            clock,
            pile: Container::from_catalog(&catalog),
            drum: Container::new(),
            catalog,
            cycle: WashCycle::new(durations),
            notice: Notice::Welcome,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cycle(&self) -> &WashCycle {
        &self.cycle
    }

    pub fn phase(&self) -> CyclePhase {
        self.cycle.phase()
    }

    /// Current snapshot
    pub fn state(&self) -> GameState {
        GameState {
            pile: self.pile.clone(),
            drum: self.drum.clone(),
            mode: self.cycle.mode(),
            is_washing: self.cycle.is_washing(),
            is_clean: self.cycle.is_done(),
            progress: self.cycle.progress(),
            message: self.notice,
        }
    }

    /// Load a garment from the pile into the drum
    ///
    /// Clears any previous mode, clean flag and progress.
    pub fn drop_garment(&mut self, kind: GarmentKind) -> Result<GameState, GameError> {
        if let Err(err) = self.cycle.check_load() {
            return Err(self.reject(err));
        }
        if let Err(err) = transfer(&mut self.pile, &mut self.drum, kind) {
            return Err(self.reject(err));
        }

        self.cycle.loaded();
        self.notice = Notice::Loaded;
        Ok(self.state())
    }

    /// Choose a wash mode
    pub fn select_mode(&mut self, mode: WashMode) -> Result<GameState, GameError> {
        if let Err(err) = self.cycle.select_mode(mode, &self.drum) {
            return Err(self.reject(err));
        }

        self.notice = Notice::ModeSelected(mode);
        Ok(self.state())
    }

    /// Start washing, stamping the session with the clock's current time
    pub fn start_wash(&mut self) -> Result<GameState, GameError> {
        let now_ms = self.clock.now_ms();
        self.start_wash_at(now_ms)
    }

    /// Start washing with an explicit start timestamp
    pub fn start_wash_at(&mut self, now_ms: u64) -> Result<GameState, GameError> {
        if let Err(err) = self.cycle.start(now_ms, &self.drum) {
            return Err(self.reject(err));
        }

        self.notice = Notice::Washing;
        Ok(self.state())
    }

    /// Advance the active wash to `now_ms`
    ///
    /// Safe to call in any phase; outside of washing nothing changes.
    pub fn tick(&mut self, now_ms: u64) -> GameState {
        if self.cycle.tick(now_ms, &mut self.drum) {
            self.notice = Notice::Clean;
        }
        self.state()
    }

    /// Restore the starting state from any phase
    pub fn reset(&mut self) -> GameState {
        self.pile = Container::from_catalog(&self.catalog);
        self.drum.clear();
        self.cycle.reset();
        self.notice = Notice::Reset;
        self.state()
    }

    /// Record a rejection in the notice; nothing else changes
    fn reject(&mut self, err: GameError) -> GameError {
        self.notice = Notice::Rejected(err);
        err
    }
}
