//! Millisecond system clock on Timer0

use crate::clock::Clock;
use crate::config::{CPU_FREQ_HZ, MILLIS_TICK_HZ};
use avr_device::atmega128a::TC0;
use avr_device::interrupt::{self, Mutex};
use core::cell::Cell;

// Timer0 clock select, CS0 = 4 is clk/64 (Timer0 has its own prescaler table)
const CS0_DIV64: u8 = 4;
const PRESCALER_DIV: u32 = 64;
const WGM01: u8 = 1 << 3;
const OCIE0: u8 = 1 << 1;

// 16MHz / 64 = 250kHz, 250 ticks = 1ms
const COMPARE: u8 = (CPU_FREQ_HZ / PRESCALER_DIV / MILLIS_TICK_HZ - 1) as u8;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Handle on the free running millisecond counter
pub struct SystemClock {
    _private: (),
}

impl SystemClock {
    /// Put Timer0 in CTC mode with a compare interrupt every millisecond.
    /// Interrupts still have to be enabled globally.
    pub(crate) fn new() -> Self {
        unsafe {
            let p = TC0::ptr();
            (*p).tccr0.write(|w| w.bits(0));
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).ocr0.write(|w| w.bits(COMPARE));
            (*p).tccr0.write(|w| w.bits(WGM01 | CS0_DIV64));
            (*p).timsk.modify(|r, w| w.bits(r.bits() | OCIE0));
        }
        interrupt::free(|cs| MILLIS.borrow(cs).set(0));
        Self { _private: () }
    }

    /// Busy wait on the counter
    pub fn delay_ms(&self, ms: u32) {
        let start = self.millis();
        while self.millis().wrapping_sub(start) < ms {}
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        interrupt::free(|cs| MILLIS.borrow(cs).get())
    }
}

#[avr_device::interrupt(atmega128a)]
fn TIMER0_COMP() {
    interrupt::free(|cs| {
        let counter = MILLIS.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}
