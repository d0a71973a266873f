//! Script driver
//!
//! Replays commands against a [`GameController`] and runs the tick loop
//! for `wait` commands. Rejected commands are reported and skipped; they
//! never abort the run.

use std::io::Write;

use tracing::{debug, info, trace, warn};

use washday_core::{Catalog, DurationTable, GameController, GameError, GameState};

use crate::clock::Pacer;
use crate::render::{RenderError, Renderer};
use crate::script::Command;

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Commands accepted by the game
    pub accepted: usize,
    /// Commands rejected by the game
    pub rejected: usize,
    /// Progress ticks issued
    pub ticks: u64,
    /// Wash cycles that ran to completion
    pub completed_washes: usize,
}

/// Drives a game from a command list
pub struct Driver<'c, P: Pacer, W: Write> {
    pacer: &'c P,
    game: GameController<&'c P>,
    tick_interval_ms: u64,
    renderer: Renderer<W>,
    stats: RunStats,
}

impl<'c, P: Pacer, W: Write> Driver<'c, P, W> {
    /// Create a driver
    ///
    /// `tick_interval_ms` must be positive.
    pub fn new(
        pacer: &'c P,
        catalog: Catalog,
        durations: DurationTable,
        tick_interval_ms: u64,
        renderer: Renderer<W>,
    ) -> Self {
        Self {
            pacer,
            game: GameController::with_config(pacer, catalog, durations),
            tick_interval_ms: tick_interval_ms.max(1),
            renderer,
            stats: RunStats::default(),
        }
    }

    pub fn game(&self) -> &GameController<&'c P> {
        &self.game
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Give back the renderer
    pub fn into_renderer(self) -> Renderer<W> {
        self.renderer
    }

    /// Run every command in order
    pub fn run(&mut self, commands: &[Command]) -> Result<RunStats, RenderError> {
        self.renderer.snapshot(&self.game.state())?;

        for &command in commands {
            self.execute(command)?;
        }

        self.renderer.flush()?;
        Ok(self.stats)
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> Result<(), RenderError> {
        debug!(%command, "executing");

        let result = match command {
            Command::Drop(kind) => self.game.drop_garment(kind),
            Command::Mode(mode) => self.game.select_mode(mode),
            Command::Wash => self.game.start_wash(),
            Command::Reset => Ok(self.game.reset()),
            Command::Wait(ms) => return self.wait(ms),
        };

        self.report(command, result)
    }

    fn report(
        &mut self,
        command: Command,
        result: Result<GameState, GameError>,
    ) -> Result<(), RenderError> {
        match result {
            Ok(state) => {
                self.stats.accepted += 1;
                info!(%command, message = %state.message, "accepted");
                self.renderer.snapshot(&state)
            }
            Err(err) => {
                self.stats.rejected += 1;
                warn!(%command, error = ?err, "rejected: {}", err);
                self.renderer.snapshot(&self.game.state())
            }
        }
    }

    /// Let `duration_ms` pass, ticking once per interval
    fn wait(&mut self, duration_ms: u64) -> Result<(), RenderError> {
        self.stats.accepted += 1;
        let mut remaining = duration_ms;
        let mut last_percent = self.game.state().display_percent();

        while remaining > 0 {
            let step = remaining.min(self.tick_interval_ms);
            self.pacer.pause(step);
            remaining -= step;

            let was_washing = self.game.cycle().is_washing();
            let now_ms = self.pacer.now_ms();
            let state = self.game.tick(now_ms);
            self.stats.ticks += 1;
            trace!(now_ms, progress = state.progress, "tick");

            if !was_washing {
                continue;
            }

            if !state.is_washing {
                self.stats.completed_washes += 1;
                info!(now_ms, "wash complete");
                self.renderer.snapshot(&state)?;
            } else if state.display_percent() != last_percent {
                self.renderer.progress(&state)?;
            }
            last_percent = state.display_percent();
        }

        Ok(())
    }
}
