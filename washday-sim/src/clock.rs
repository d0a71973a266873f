//! Time sources for the driver
//!
//! The tick loop needs to both read the time and let it pass. Real time
//! sleeps; simulated time advances a [`ManualClock`] instantly.

use std::thread;
use std::time::{Duration, Instant};

use washday_core::{Clock, ManualClock};

/// A clock the driver can wait on
pub trait Pacer: Clock {
    /// Let `ms` milliseconds pass
    fn pause(&self, ms: u64);
}

/// Wall clock, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Pacer for SystemClock {
    fn pause(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

impl Pacer for ManualClock {
    fn pause(&self, ms: u64) {
        self.advance(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_pause_advances() {
        let clock = ManualClock::new(0);
        clock.pause(250);
        assert_eq!(clock.now_ms(), 250);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let before = clock.now_ms();
        clock.pause(5);
        assert!(clock.now_ms() >= before + 5);
    }
}
