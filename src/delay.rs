//! Rate limiter for periodic actions

use crate::clock::Clock;

/// Lets an action through at most once per `wait` milliseconds.
///
/// Elapsed time is computed with wrapping subtraction, so the limiter keeps
/// working when the millisecond counter rolls over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Delay {
    wait: u32,
    last: u32,
}

impl Delay {
    pub const fn new(wait: u32) -> Self {
        Self { wait, last: 0 }
    }

    /// Returns true and restarts the window if at least `wait` has passed
    /// since the last accepted instant.
    pub fn is_due(&mut self, now: u32) -> bool {
        if now.wrapping_sub(self.last) >= self.wait {
            self.last = now;
            trace!("delay due at {}", now);
            true
        } else {
            false
        }
    }

    /// Same as [`Delay::is_due`] with the current time taken from `clock`
    pub fn is_due_with<C: Clock>(&mut self, clock: &C) -> bool {
        self.is_due(clock.millis())
    }

    /// Restart the window at `now` without firing
    pub fn reset(&mut self, now: u32) {
        self.last = now;
    }

    #[inline]
    pub fn wait(&self) -> u32 {
        self.wait
    }

    #[inline]
    pub fn last(&self) -> u32 {
        self.last
    }
}
