//! Polled push button with press timing

use crate::clock::Clock;
use embedded_hal::digital::v2::InputPin;

/// Logic level read from a digital input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Push button sampled on demand.
///
/// There is no time based debouncing. `is_long_press` only reports whether
/// the button was active on both of the last two polls; combine it with
/// `press_duration` for a real hold threshold.
pub struct Button<P, C> {
    pin: P,
    clock: C,
    active: Level,
    last: Level,
    was_pressed: bool,
    pressed_since: u32,
}

impl<P, C> Button<P, C>
where
    P: InputPin,
    C: Clock,
{
    /// Button wired to pull the input low when pressed.
    ///
    /// The previous level starts out inactive, so a button already held at
    /// power-up reads as a fresh press on the first poll: `is_long_press` is
    /// false and the press is timed from that poll.
    pub fn new(pin: P, clock: C) -> Self {
        Self::with_active_level(pin, clock, Level::Low)
    }

    pub fn with_active_level(pin: P, clock: C, active: Level) -> Self {
        Self {
            pin,
            clock,
            active,
            last: active.inverted(),
            was_pressed: false,
            pressed_since: 0,
        }
    }

    /// Poll the input. Returns whether the button is pressed right now.
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        let current = Level::from(self.pin.is_high()?);

        self.was_pressed = current == self.active && self.last == self.active;
        if current != self.last {
            if current == self.active {
                debug!("button pressed");
            } else {
                debug!("button released after {}ms", self.press_duration());
            }
        }
        self.last = current;

        if !self.was_pressed && self.last == self.active {
            self.pressed_since = self.clock.millis();
        }

        Ok(self.last == self.active)
    }

    /// Milliseconds since the press started, 0 while released
    pub fn press_duration(&self) -> u32 {
        if self.last == self.active {
            self.clock.millis().wrapping_sub(self.pressed_since)
        } else {
            0
        }
    }

    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }
}

impl<P, C> Button<P, C> {
    /// True when the last two polls both saw the button pressed
    #[inline]
    pub fn is_long_press(&self) -> bool {
        self.was_pressed
    }

    /// Level read by the last poll
    #[inline]
    pub fn last_value(&self) -> Level {
        self.last
    }

    #[inline]
    pub fn active_level(&self) -> Level {
        self.active
    }
}
