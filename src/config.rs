//! Configuration constants for the input helpers

/// Lowest raw value the ADC produces
pub const POT_MIN: u16 = 0;

/// Highest raw value the ADC produces (10-bit converter)
pub const POT_MAX: u16 = 1023;

/// Number of raw samples a `Pot` averages over
pub const POT_AVERAGE: usize = 20;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// System clock tick rate, one tick per millisecond
pub const MILLIS_TICK_HZ: u32 = 1000;

/// Interval between serial status reports in milliseconds
pub const REPORT_INTERVAL_MS: u32 = 250;

/// Hold time after which the firmware treats a press as a long press
pub const LONG_PRESS_MS: u32 = 1000;
