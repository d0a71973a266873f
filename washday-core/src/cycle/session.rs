//! Active wash session and progress computation
//!
//! Progress is a function of elapsed time only, so any tick granularity
//! yields the same completion point.

use crate::config::WashMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Progress value of a finished cycle
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// A wash in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WashSession {
    /// Selected mode
    pub mode: WashMode,
    /// Session start timestamp (ms)
    pub start_ms: u64,
    /// Cycle duration (ms, always > 0)
    pub duration_ms: u32,
}

impl WashSession {
    /// Begin a session at the given timestamp
    pub const fn begin(mode: WashMode, start_ms: u64, duration_ms: u32) -> Self {
        Self {
            mode,
            start_ms,
            duration_ms,
        }
    }

    /// Elapsed time at `now_ms`
    ///
    /// Timestamps before the start count as zero.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_ms)
    }

    /// Progress percentage at `now_ms`, clamped to [0, 100]
    pub fn progress_at(&self, now_ms: u64) -> f64 {
        let elapsed = self.elapsed_ms(now_ms);
        if self.is_complete_at(now_ms) {
            return PROGRESS_COMPLETE;
        }
        PROGRESS_COMPLETE * elapsed as f64 / self.duration_ms as f64
    }

    /// Check if the full duration has elapsed at `now_ms`
    pub fn is_complete_at(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= u64::from(self.duration_ms)
    }

    /// Time left until completion (ms)
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        u64::from(self.duration_ms).saturating_sub(self.elapsed_ms(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_linear() {
        let session = WashSession::begin(WashMode::Quick, 10_000, 2000);
        assert_eq!(session.progress_at(10_000), 0.0);
        assert_eq!(session.progress_at(10_500), 25.0);
        assert_eq!(session.progress_at(11_000), 50.0);
        assert_eq!(session.progress_at(12_000), 100.0);
    }

    #[test]
    fn test_progress_clamped() {
        let session = WashSession::begin(WashMode::Eco, 1000, 4000);
        assert_eq!(session.progress_at(0), 0.0); // Before start
        assert_eq!(session.progress_at(60_000), 100.0);
    }

    #[test]
    fn test_completion_by_elapsed_time() {
        let session = WashSession::begin(WashMode::Heavy, 0, 6000);
        assert!(!session.is_complete_at(5999));
        assert!(session.is_complete_at(6000));
        assert!(session.is_complete_at(6001));
    }

    #[test]
    fn test_remaining() {
        let session = WashSession::begin(WashMode::Quick, 500, 2000);
        assert_eq!(session.remaining_ms(500), 2000);
        assert_eq!(session.remaining_ms(1500), 1000);
        assert_eq!(session.remaining_ms(9000), 0);
    }

    #[test]
    fn test_fractional_progress_retained() {
        let session = WashSession::begin(WashMode::Heavy, 0, 6000);
        let progress = session.progress_at(1);
        assert!(progress > 0.0 && progress < 0.02);
    }
}
