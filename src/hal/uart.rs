use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega128a::USART0;
use core::convert::Infallible;

const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16; // 103 @ 9600
const UDRE: u8 = 1 << 5;
const RXC: u8 = 1 << 7;

/// Blocking serial console on USART0, 8N1
pub struct Console {
    _private: (),
}

impl Console {
    pub(crate) fn new() -> Self {
        unsafe {
            let p = USART0::ptr();

            // Set baud rate
            (*p).ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
            (*p).ubrr0l.write(|w| w.bits(UBRR as u8));

            // Enable TX and RX, 8 data bits
            (*p).ucsr0b.write(|w| w.bits(0x18));
            (*p).ucsr0c.write(|w| w.bits(0x06));
        }
        Self { _private: () }
    }

    pub fn write_byte(&mut self, byte: u8) {
        unsafe {
            let p = USART0::ptr();
            while (*p).ucsr0a.read().bits() & UDRE == 0 {}
            (*p).udr0.write(|w| w.bits(byte));
        }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        unsafe {
            let p = USART0::ptr();
            if (*p).ucsr0a.read().bits() & RXC != 0 {
                Some((*p).udr0.read().bits())
            } else {
                None
            }
        }
    }
}

impl ufmt::uWrite for Console {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
