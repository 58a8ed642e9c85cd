//! Wall clock pacing.
use std::{
    thread,
    time::{Duration, Instant},
};

/// Timer to synchronize the thread with a software clock.
///
/// It is designed to work with the yielding cooperative pattern
/// of the interpreter loop. When the VM yields control back to the
/// caller, time elapses until it is resumed. Once the interpreter
/// is resumed, the elapsed time is taken into account when determining
/// the next cycle.
#[derive(Debug, Clone)]
pub(crate) struct Clock {
    last: Instant,
    interval: Duration,
}

impl Clock {
    /// Creates a new clock with the current time as internal state.
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            last: Instant::now(),
            interval,
        }
    }

    /// Set the clock state back to zero.
    pub(crate) fn reset(&mut self) {
        self.last = Instant::now()
    }

    /// Check whether a cycle has elapsed, and start the next one if so.
    pub(crate) fn tick(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Block the current thread until the next clock cycle.
    pub(crate) fn wait(&mut self) {
        loop {
            if self.last.elapsed() < self.interval {
                // Sleep does not have enough resolution, and causes
                // the clock to run at 30 FPS.
                //
                // Yielding in a loop is the best alternative.
                thread::yield_now();
            } else {
                // Reset back to zero, rather than trying to catch up.
                //
                // If the VM was paused for debugging, and a large
                // amount of time has elapsed until it is resumed,
                // it should simply continue at the next cycle running
                // at its usual speed.
                self.reset();
                return;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_interval_always_ticks() {
        let mut clock = Clock::new(Duration::ZERO);
        assert!(clock.tick());
        assert!(clock.tick());
        clock.wait();
    }

    #[test]
    fn test_long_interval_does_not_tick() {
        let mut clock = Clock::new(Duration::from_secs(3600));
        assert!(!clock.tick());
    }
}
