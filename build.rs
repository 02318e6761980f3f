use std::env;

fn main() {
    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only run the unit tests, everything below is for the board
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega128
    println!("cargo:rustc-link-arg=-mmcu=atmega128");

    if env::var("CARGO_FEATURE_BOARD").is_err() {
        println!("cargo:warning=Building for AVR without the `board` feature, no firmware will be produced");
    }
}
