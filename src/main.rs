#![no_std]
#![no_main]

use panic_halt as _;

use input_utils::config::{LONG_PRESS_MS, REPORT_INTERVAL_MS};
use input_utils::hal::Board;
use input_utils::{Button, Clock, Delay, Pot};

const SAMPLE_INTERVAL_MS: u32 = 5;

#[avr_device::entry]
fn main() -> ! {
    let Some(board) = Board::take() else {
        #[allow(clippy::empty_loop)]
        loop {}
    };
    let Board {
        adc,
        pot,
        button,
        mut led,
        mut console,
        clock,
    } = board;

    // Enable interrupts globally, the system clock runs off TIMER0_COMP
    unsafe { avr_device::interrupt::enable() };

    let mut pot: Pot<_, _> = Pot::new(adc, pot);
    let mut button = Button::new(button, &clock);
    let mut sample = Delay::new(SAMPLE_INTERVAL_MS);
    let mut report = Delay::new(REPORT_INTERVAL_MS);
    let mut long_press_handled = false;

    let _ = ufmt::uwriteln!(console, "ATmega128 input helpers v0.1.0\r");

    loop {
        let now = clock.millis();

        if sample.is_due(now) {
            let _ = pot.value();
        }

        let pressed = button.is_pressed().unwrap_or(false);
        if !pressed {
            long_press_handled = false;
        } else if button.is_long_press()
            && !long_press_handled
            && button.press_duration() >= LONG_PRESS_MS
        {
            long_press_handled = true;
            led.toggle();
            let _ = ufmt::uwriteln!(console, "long press, led toggled\r");
        }

        if report.is_due(now) {
            let _ = ufmt::uwriteln!(
                console,
                "pot {} ({}%) button {} held {}ms\r",
                pot.last_value(),
                pot.mapped_value(0, 100),
                pressed,
                button.press_duration()
            );
        }

        // Echo any received characters
        if let Some(byte) = console.read_byte() {
            console.write_byte(byte);
        }
    }
}
