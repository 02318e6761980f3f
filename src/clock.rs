//! Millisecond clock capability

/// Monotonic millisecond counter.
///
/// The counter wraps on overflow, so consumers must compare readings with
/// wrapping arithmetic.
pub trait Clock {
    fn millis(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn millis(&self) -> u32 {
        (**self).millis()
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeClock;
    use super::*;

    fn read<C: Clock>(clock: C) -> u32 {
        clock.millis()
    }

    #[test]
    fn reference_reads_through_to_the_clock() {
        let clock = FakeClock::at(42);
        assert_eq!(read(&clock), 42);
        clock.set(43);
        assert_eq!(read(&&clock), 43);
    }
}
