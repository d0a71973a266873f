//! Time source trait
//!
//! The controller reads the clock only to stamp the start of a wash
//! session. Progress ticks carry their own timestamps.

use core::cell::Cell;

/// Monotonic millisecond time source
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Manually advanced clock for scripted and simulated time
///
/// Shared by reference between the controller and whoever drives time.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Move time forward
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }

    /// Jump to an absolute time; earlier values are ignored
    pub fn set(&self, now_ms: u64) {
        if now_ms > self.now_ms.get() {
            self.now_ms.set(now_ms);
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        clock.advance(50);
        assert_eq!(clock.now_ms(), 150);
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::new(1000);
        clock.set(500);
        assert_eq!(clock.now_ms(), 1000);
        clock.set(1500);
        assert_eq!(clock.now_ms(), 1500);
    }

    #[test]
    fn test_clock_through_reference() {
        let clock = ManualClock::new(7);
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now_ms(&by_ref), 7);
    }
}
