// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! RP2350A PixMob IR Hardware Tester
//!
//! This firmware drives an IR LED with a 38 kHz carrier and repeatedly
//! transmits a PixMob wake preamble followed by a color-select packet, for
//! validating IR-controlled wristbands on the bench.
//!
//! # Hardware Configuration
//! - **Microcontroller**: RP2350A (ARM Cortex-M33)
//! - **IR LED**: PWM on GPIO 16 (PWM_SLICE0 channel A), through a transistor driver
//! - **Status LED**: GPIO 25, toggled after every round
//!
//! # Timing
//! - Carrier frequency and duty fixed at start-up from `clk_sys`
//! - Burst timing busy-waits on the DWT cycle counter (one tick per core clock)
//! - The pause between rounds is an async `embassy-time` timer
//!
//! # Build
//! ```bash
//! cargo build --release --target thumbv8m.main-none-eabihf
//! ```
//!
//! # Flash
//! ```bash
//! cargo run --release --target thumbv8m.main-none-eabihf
//! ```

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use fixed::traits::ToFixed;
use pixmob_ir::carrier::{Carrier, CarrierTiming};
use pixmob_ir::config::{
    CARRIER_DUTY_PERCENT, CARRIER_FREQUENCY_HZ, IR_LED_PIN, ROUND_PAUSE_MS, RUN_MODE,
    STATUS_LED_PIN,
};
use pixmob_ir::controller::TestController;
use pixmob_ir::timer::{DwtCycleCounter, MicrosecondTimer};
use pixmob_ir::transmitter::Transmitter;
use pixmob_ir::{Error, Result};
use {defmt_rtt as _, panic_probe as _};

/// Program metadata for picotool info command
///
/// This information is embedded in the binary and can be read by picotool
/// to display program information when querying the firmware.
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"PixMob IR Tester"),
    embassy_rp::binary_info::rp_program_description!(c"RP2350A 38 kHz IR carrier burst transmitter"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Firmware entry point
///
/// Runs [`inner_main`] and panics with its error if bring-up fails.
#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let Err(err) = inner_main().await;
    core::panic!("{err}");
}

/// Brings up the carrier and timer, then runs the configured mode forever.
///
/// # Initialization Sequence
/// 1. Claim the DWT cycle counter and read `clk_sys`
/// 2. Derive PWM divider/top for the carrier and start the slice gated off
/// 3. Build the transmitter and enter the round loop
///
/// # Errors
/// Returns only if the carrier or timer cannot be configured.
async fn inner_main() -> Result<Infallible> {
    info!("PixMob IR HW Test Suite starting");
    let p = embassy_rp::init(Default::default());
    let core = cortex_m::Peripherals::take().ok_or(Error::CorePeripheralsTaken)?;

    // Status LED stays low until the transmitter is ready
    let mut led = Output::new(p.PIN_25, Level::Low);

    let clock_hz = clk_sys_freq();
    let timing = CarrierTiming::new(clock_hz, CARRIER_FREQUENCY_HZ)?;
    info!(
        "IR carrier on GPIO {}: {} Hz (divider {}, top {}, clk_sys {} Hz)",
        IR_LED_PIN,
        timing.frequency_hz(),
        timing.divider,
        timing.top,
        clock_hz
    );

    // Compare starts at 0 so the LED is dark until the first burst
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = timing.divider.to_fixed();
    pwm_config.top = timing.top;
    pwm_config.compare_a = 0;
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config);

    let carrier = Carrier::new(pwm, CARRIER_DUTY_PERCENT)?;
    let timer = MicrosecondTimer::new(DwtCycleCounter::new(core.DWT, core.DCB), clock_hz)?;
    let mut transmitter = Transmitter::new(carrier, timer);
    let mut controller = TestController::new(RUN_MODE);

    info!(
        "Ready: running {} (status LED on GPIO {})",
        RUN_MODE.name(),
        STATUS_LED_PIN
    );
    led.set_high();

    loop {
        controller.run_round(&mut transmitter);
        led.toggle();
        Timer::after_millis(ROUND_PAUSE_MS).await;
    }
}
