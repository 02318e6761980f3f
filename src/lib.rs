//! Input helpers for AVR firmware: a rate limiter, an averaging
//! potentiometer reader and a polled push button.
//!
//! The helpers only depend on `embedded-hal` traits and the [`Clock`]
//! capability, so they run against the ATmega128 peripherals in [`hal`]
//! (feature `board`) as well as against mocks on the host.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "board", feature(abi_avr_interrupt))]

mod fmt;

pub mod button;
pub mod clock;
pub mod config;
pub mod delay;
pub mod pot;

#[cfg(feature = "board")]
pub mod hal;

pub use button::{Button, Level};
pub use clock::Clock;
pub use delay::Delay;
pub use pot::Pot;
