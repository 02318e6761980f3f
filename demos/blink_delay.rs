#![no_std]
#![no_main]

use panic_halt as _;
use input_utils::hal::Board;
use input_utils::Delay;

#[avr_device::entry]
fn main() -> ! {
    let Some(mut board) = Board::take() else {
        #[allow(clippy::empty_loop)]
        loop {}
    };
    unsafe { avr_device::interrupt::enable() };

    let mut blink = Delay::new(500);
    let mut ticks = 0u32;

    let _ = ufmt::uwriteln!(board.console, "Blinking every {}ms\r", blink.wait());

    loop {
        if blink.is_due_with(&board.clock) {
            board.led.toggle();
            ticks = ticks.wrapping_add(1);
            if ticks % 10 == 0 {
                let _ = ufmt::uwriteln!(board.console, "blink {} at {}\r", ticks, blink.last());
            }
        }
    }
}
