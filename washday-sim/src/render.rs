//! Snapshot output
//!
//! Text mode prints a small status block per snapshot. Frame mode writes
//! COBS-framed postcard snapshots for an external renderer.

use std::io::{self, Write};

use thiserror::Error;

use washday_core::snapshot::{self, MAX_SNAPSHOT_FRAME};
use washday_core::{Container, GameState};

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Frames,
}

/// Render errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] postcard::Error),
}

/// Snapshot writer
pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render a full snapshot
    pub fn snapshot(&mut self, state: &GameState) -> Result<(), RenderError> {
        match self.format {
            OutputFormat::Text => {
                self.status_line(state)?;
                writeln!(self.out, "       pile: {}", list(&state.pile))?;
                writeln!(self.out, "       drum: {}", list(&state.drum))?;
                Ok(())
            }
            OutputFormat::Frames => self.frame(state),
        }
    }

    /// Render a progress update during a wash
    ///
    /// Text mode prints only the status line.
    pub fn progress(&mut self, state: &GameState) -> Result<(), RenderError> {
        match self.format {
            OutputFormat::Text => Ok(self.status_line(state)?),
            OutputFormat::Frames => self.frame(state),
        }
    }

    pub fn flush(&mut self) -> Result<(), RenderError> {
        Ok(self.out.flush()?)
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn status_line(&mut self, state: &GameState) -> io::Result<()> {
        let mode = state.mode.map(|m| m.label()).unwrap_or("-");
        writeln!(
            self.out,
            "[{:>3}%] {:<6} {}",
            state.display_percent(),
            mode,
            state.message
        )
    }

    fn frame(&mut self, state: &GameState) -> Result<(), RenderError> {
        let mut buf = [0u8; MAX_SNAPSHOT_FRAME];
        let frame = snapshot::encode(state, &mut buf)?;
        self.out.write_all(frame)?;
        Ok(())
    }
}

/// Comma-separated garment ids, clean ones marked
fn list(container: &Container) -> String {
    if container.is_empty() {
        return "-".to_owned();
    }
    container
        .iter()
        .map(|g| {
            if g.clean {
                format!("{} (clean)", g.kind.id())
            } else {
                g.kind.id().to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
