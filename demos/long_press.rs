#![no_std]
#![no_main]

use panic_halt as _;
use input_utils::config::LONG_PRESS_MS;
use input_utils::hal::Board;
use input_utils::Button;

#[avr_device::entry]
fn main() -> ! {
    let Some(board) = Board::take() else {
        #[allow(clippy::empty_loop)]
        loop {}
    };
    let Board { button, mut console, clock, .. } = board;
    unsafe { avr_device::interrupt::enable() };

    let mut button = Button::new(button, &clock);
    let mut held_for = 0u32;

    let _ = ufmt::uwriteln!(console, "Hold BTN0 for {}ms\r", LONG_PRESS_MS);

    loop {
        let pressed = button.is_pressed().unwrap_or(false);

        if pressed {
            // duration is only meaningful while the button stays down
            held_for = button.press_duration();
        } else if held_for > 0 {
            if held_for >= LONG_PRESS_MS {
                let _ = ufmt::uwriteln!(console, "long press: {}ms\r", held_for);
            } else {
                let _ = ufmt::uwriteln!(console, "short press: {}ms\r", held_for);
            }
            held_for = 0;
        }

        clock.delay_ms(2);
    }
}
