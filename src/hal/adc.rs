//! ADC driver implementing the embedded-hal one-shot interface

use avr_device::atmega128a::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

const ADSC: u8 = 1 << 6;

// AVCC reference, external cap at AREF
const REFS_AVCC: u8 = 1 << 6;
// Enable, prescaler div128 (125kHz @ 16MHz)
const ADEN_DIV128: u8 = 0x87;

/// Single-ended input on PORTF, `CH` in `0..=7`
pub struct AdcPin<const CH: u8> {
    _private: (),
}

impl<const CH: u8> AdcPin<CH> {
    pub(crate) const fn new() -> Self {
        Self { _private: () }
    }
}

impl<const CH: u8> Channel<Adc> for AdcPin<CH> {
    type ID = u8;

    fn channel() -> u8 {
        CH
    }
}

pub type Adc0 = AdcPin<0>;

pub struct Adc {
    // Channel of the conversion currently running, if any
    pending: Option<u8>,
}

impl Adc {
    pub(crate) fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            (*p).adcsra.write(|w| w.bits(ADEN_DIV128));
            (*p).admux.write(|w| w.bits(REFS_AVCC));
        }
        Self { pending: None }
    }

    fn start(&mut self, channel: u8) {
        unsafe {
            let p = ADC::ptr();
            (*p).admux.modify(|r, w| w.bits((r.bits() & 0xE0) | (channel & 0x07)));
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | ADSC));
        }
        self.pending = Some(channel);
    }

    fn busy(&self) -> bool {
        unsafe { (*ADC::ptr()).adcsra.read().bits() & ADSC != 0 }
    }

    fn result(&self) -> u16 {
        unsafe {
            let p = ADC::ptr();
            // ADCL must be read first
            let low = (*p).adcl.read().bits() as u16;
            let high = (*p).adch.read().bits() as u16;
            (high << 8) | low
        }
    }
}

impl<const CH: u8> OneShot<Adc, u16, AdcPin<CH>> for Adc {
    type Error = Infallible;

    fn read(&mut self, _pin: &mut AdcPin<CH>) -> nb::Result<u16, Infallible> {
        match self.pending {
            Some(channel) if channel == CH => {
                if self.busy() {
                    return Err(nb::Error::WouldBlock);
                }
                self.pending = None;
                Ok(self.result())
            }
            // Let a conversion on another channel finish, then drop it
            Some(_) if self.busy() => Err(nb::Error::WouldBlock),
            _ => {
                self.start(CH);
                Err(nb::Error::WouldBlock)
            }
        }
    }
}
