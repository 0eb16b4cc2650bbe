// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Bench routines for checking the IR stage with a scope or a voltmeter.
//!
//! - **Signal types**: continuous carrier, then blink patterns from 500 ms
//!   down to 1 ms, to check the envelope on a scope
//! - **Voltage levels**: carrier held off, then on, long enough to read
//!   the LED drive with a meter
//! - **Drive mode**: a short push-pull blink burst to compare LED brightness
//!   against the transistor stage
//!
//! Each routine only uses the transmitter's gate and interval primitives.

use embedded_hal::pwm::SetDutyCycle;

use crate::timer::TickSource;
use crate::transmitter::Transmitter;

/// Hold time for each level in the voltage test (10 s).
pub const VOLTAGE_HOLD_US: u32 = 10_000_000;

/// A repeated on/off pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct BlinkTest {
    /// Name used in logs
    pub name: &'static str,
    /// Carrier-on time per repetition in microseconds
    pub on_us: u32,
    /// Carrier-off time per repetition in microseconds
    pub off_us: u32,
    /// Number of on/off repetitions
    pub repeats: u32,
}

impl BlinkTest {
    /// Total run time in microseconds.
    pub fn duration_us(&self) -> u64 {
        (u64::from(self.on_us) + u64::from(self.off_us)) * u64::from(self.repeats)
    }
}

/// Signal-type sequence, run in order.
pub const SIGNAL_TYPE_TESTS: [BlinkTest; 4] = [
    BlinkTest {
        name: "Continuous ON for 5s",
        on_us: 5_000_000,
        off_us: 0,
        repeats: 1,
    },
    BlinkTest {
        name: "Slow blink 500ms x10",
        on_us: 500_000,
        off_us: 500_000,
        repeats: 10,
    },
    BlinkTest {
        name: "Fast blink 50ms x20",
        on_us: 50_000,
        off_us: 50_000,
        repeats: 20,
    },
    BlinkTest {
        name: "Very fast blink 1ms x100",
        on_us: 1_000,
        off_us: 1_000,
        repeats: 100,
    },
];

/// Push-pull drive check: 20 ms on/off, five times.
pub const DRIVE_MODE_TEST: BlinkTest = BlinkTest {
    name: "Push-pull blink 20ms x5",
    on_us: 20_000,
    off_us: 20_000,
    repeats: 5,
};

/// Runs one blink pattern, one on/off transmission per repetition.
pub fn run_blink_test<P: SetDutyCycle, T: TickSource>(
    transmitter: &mut Transmitter<P, T>,
    test: &BlinkTest,
) {
    info!("{}...", test.name);
    let pair = [test.on_us, test.off_us];
    for _ in 0..test.repeats {
        transmitter.transmit(&pair);
    }
    info!("Done");
}

/// Runs every entry of [`SIGNAL_TYPE_TESTS`].
pub fn run_signal_types<P: SetDutyCycle, T: TickSource>(transmitter: &mut Transmitter<P, T>) {
    info!("=== Signal Type Tests ===");
    for test in &SIGNAL_TYPE_TESTS {
        run_blink_test(transmitter, test);
    }
}

/// Runs [`DRIVE_MODE_TEST`].
pub fn run_drive_mode<P: SetDutyCycle, T: TickSource>(transmitter: &mut Transmitter<P, T>) {
    info!("=== Drive Mode Test ===");
    run_blink_test(transmitter, &DRIVE_MODE_TEST);
}

/// Holds the carrier off, then on, for [`VOLTAGE_HOLD_US`] each, and ends off.
pub fn run_voltage_levels<P: SetDutyCycle, T: TickSource>(transmitter: &mut Transmitter<P, T>) {
    info!("=== Voltage Level Tests ===");

    info!("Carrier OFF, measure ~0V for 10s...");
    transmitter.carrier_off();
    transmitter.wait_us(VOLTAGE_HOLD_US);

    info!("Carrier ON, measure PWM ~3.3V for 10s...");
    transmitter.carrier_on();
    transmitter.wait_us(VOLTAGE_HOLD_US);
    transmitter.carrier_off();

    info!("Done");
}
