//! ATmega128 peripherals behind the embedded-hal traits the input helpers
//! are generic over.

pub mod adc;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, AdcPin};
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
pub use timer::SystemClock;
pub use uart::Console;

/// Peripherals used by the firmware, configured for the BigAVR2 wiring
pub struct Board {
    pub adc: Adc,
    pub pot: adc::Adc0,
    pub button: board::BTN0,
    pub led: board::LED0,
    pub console: Console,
    pub clock: SystemClock,
}

impl Board {
    /// Returns `None` if the peripherals were already taken
    pub fn take() -> Option<Self> {
        avr_device::atmega128a::Peripherals::take()?;

        Some(Self {
            adc: Adc::new(),
            pot: adc::Adc0::new(),
            button: board::BTN0::new().into_pull_up_input(),
            led: board::LED0::new().into_output(),
            console: Console::new(),
            clock: SystemClock::new(),
        })
    }
}
