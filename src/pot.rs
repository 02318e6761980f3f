//! Averaging analog input

use crate::config::{POT_AVERAGE, POT_MAX, POT_MIN};
use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};

/// Potentiometer on an ADC channel, smoothed over the last `N` samples.
///
/// The sample window starts zero filled, so until `N` reads have been taken
/// the average is pulled towards zero.
///
/// `M` is the embedded-hal ADC marker type the channel belongs to. It only
/// differs from the driver type `ADC` for HALs that split the two.
pub struct Pot<ADC, PIN, const N: usize = POT_AVERAGE, M = ADC> {
    adc: ADC,
    pin: PIN,
    history: [u16; N],
    write_index: usize,
    mean: u16,
    _marker: PhantomData<M>,
}

impl<ADC, PIN, const N: usize, M> Pot<ADC, PIN, N, M>
where
    PIN: Channel<M>,
    ADC: OneShot<M, u16, PIN>,
{
    /// The window needs at least one slot, `N == 0` is rejected at build time:
    ///
    /// ```compile_fail
    /// use embedded_hal_mock::adc::{Mock, MockAdc, MockChan0, Transaction};
    /// use input_utils::Pot;
    ///
    /// let expectations: [Transaction<u16>; 0] = [];
    /// let _pot: Pot<_, _, 0, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});
    /// ```
    pub fn new(adc: ADC, pin: PIN) -> Self {
        const { assert!(N > 0, "a Pot needs at least one sample slot") };

        Self {
            adc,
            pin,
            history: [0; N],
            write_index: 0,
            mean: 0,
            _marker: PhantomData,
        }
    }

    /// Take one sample and return the new average.
    ///
    /// A failed conversion is returned as is and leaves the window untouched.
    pub fn value(&mut self) -> Result<u16, ADC::Error> {
        let raw = nb::block!(self.adc.read(&mut self.pin))?;

        self.history[self.write_index] = raw;
        self.write_index = (self.write_index + 1) % N;

        let sum: u32 = self.history.iter().map(|&v| v as u32).sum();
        self.mean = (sum / N as u32) as u16;

        trace!("pot raw {} mean {}", raw, self.mean);
        Ok(self.mean)
    }

    /// Hand the ADC and channel back
    pub fn release(self) -> (ADC, PIN) {
        (self.adc, self.pin)
    }
}

impl<ADC, PIN, const N: usize, M> Pot<ADC, PIN, N, M> {
    /// Average computed by the last [`Pot::value`] call
    #[inline]
    pub fn last_value(&self) -> u16 {
        self.mean
    }

    /// Rescale the cached average from `POT_MIN..=POT_MAX` onto
    /// `out_min..=out_max`, rounding to the nearest integer.
    ///
    /// Nothing is clamped: an average outside the input range lands outside
    /// the output range.
    pub fn mapped_value(&self, out_min: i32, out_max: i32) -> i32 {
        map_range(self.mean, out_min, out_max)
    }

    /// Raw sample window, oldest slot first after a full wrap
    pub fn history(&self) -> &[u16; N] {
        &self.history
    }
}

fn map_range(value: u16, out_min: i32, out_max: i32) -> i32 {
    let span_in = POT_MAX as i64 - POT_MIN as i64;
    let scaled = (value as i64 - POT_MIN as i64) * (out_max as i64 - out_min as i64);
    (div_round(scaled, span_in) + out_min as i64) as i32
}

// Division rounding half away from zero, `den` must be positive
fn div_round(num: i64, den: i64) -> i64 {
    if num >= 0 {
        (num + den / 2) / den
    } else {
        (num - den / 2) / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::adc::{Mock, MockAdc, MockChan0, Transaction};
    use embedded_hal_mock::MockError;
    use std::io::ErrorKind;

    fn reads(values: &[u16]) -> Vec<Transaction<u16>> {
        values.iter().map(|&v| Transaction::read(0, v)).collect()
    }

    #[test]
    fn warms_up_to_constant_reading() {
        let expectations = reads(&[512; POT_AVERAGE]);
        let mut pot: Pot<_, _, POT_AVERAGE, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        let mut last = 0;
        for _ in 0..POT_AVERAGE {
            last = pot.value().unwrap();
        }
        assert_eq!(last, 512);
        assert_eq!(pot.last_value(), 512);

        let (mut adc, _) = pot.release();
        adc.done();
    }

    #[test]
    fn cold_start_is_biased_towards_zero() {
        let expectations = reads(&[512, 512]);
        let mut pot: Pot<_, _, POT_AVERAGE, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        assert_eq!(pot.value().unwrap(), 512 / 20);
        assert_eq!(pot.value().unwrap(), 1024 / 20);

        let (mut adc, _) = pot.release();
        adc.done();
    }

    #[test]
    fn oldest_sample_is_overwritten() {
        let expectations = reads(&[4, 8, 12, 16, 20]);
        let mut pot: Pot<_, _, 4, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        assert_eq!(pot.value().unwrap(), 1);
        assert_eq!(pot.value().unwrap(), 3);
        assert_eq!(pot.value().unwrap(), 6);
        assert_eq!(pot.value().unwrap(), 10);
        assert_eq!(pot.value().unwrap(), 14);
        assert_eq!(pot.history(), &[20, 8, 12, 16]);

        let (mut adc, _) = pot.release();
        adc.done();
    }

    #[test]
    fn average_truncates() {
        let expectations = reads(&[1, 2]);
        let mut pot: Pot<_, _, 2, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        assert_eq!(pot.value().unwrap(), 0);
        assert_eq!(pot.value().unwrap(), 1);

        let (mut adc, _) = pot.release();
        adc.done();
    }

    #[test]
    fn last_value_does_not_touch_the_adc() {
        let expectations = reads(&[300]);
        let mut pot: Pot<_, _, 1, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        assert_eq!(pot.last_value(), 0);
        pot.value().unwrap();
        assert_eq!(pot.last_value(), 300);
        assert_eq!(pot.last_value(), 300);
        assert_eq!(pot.mapped_value(0, 1023), 300);

        let (mut adc, _) = pot.release();
        adc.done();
    }

    #[test]
    fn maps_range_ends() {
        let expectations = reads(&[POT_MIN, POT_MAX]);
        let mut pot: Pot<_, _, 1, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        pot.value().unwrap();
        assert_eq!(pot.mapped_value(10, 180), 10);
        assert_eq!(pot.mapped_value(-50, 50), -50);

        pot.value().unwrap();
        assert_eq!(pot.mapped_value(0, 180), 180);
        assert_eq!(pot.mapped_value(-50, 50), 50);

        let (mut adc, _) = pot.release();
        adc.done();
    }

    #[test]
    fn maps_to_nearest_integer() {
        assert_eq!(map_range(512, 0, 180), 90);
        assert_eq!(map_range(511, 0, 100), 50);
        assert_eq!(map_range(506, 0, 100), 49);
        assert_eq!(map_range(1023, 180, 0), 0);
        assert_eq!(map_range(0, 180, 0), 180);
        assert_eq!(map_range(512, 100, -100), 0);
    }

    #[test]
    fn out_of_range_reading_is_not_clamped() {
        let expectations = reads(&[1100]);
        let mut pot: Pot<_, _, 1, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        assert_eq!(pot.value().unwrap(), 1100);
        assert!(pot.mapped_value(0, 180) > 180);

        let (mut adc, _) = pot.release();
        adc.done();
    }

    #[test]
    fn failed_read_leaves_state_alone() {
        let expectations = [
            Transaction::read(0, 400),
            Transaction::read(0, 0).with_error(MockError::Io(ErrorKind::Other)),
        ];
        let mut pot: Pot<_, _, 2, MockAdc> = Pot::new(Mock::new(&expectations), MockChan0 {});

        assert_eq!(pot.value().unwrap(), 200);
        assert!(pot.value().is_err());
        assert_eq!(pot.last_value(), 200);
        assert_eq!(pot.history(), &[400, 0]);

        let (mut adc, _) = pot.release();
        adc.done();
    }
}
