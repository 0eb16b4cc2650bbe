// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Gated fixed-frequency IR carrier.
//!
//! The carrier is a PWM output whose frequency and duty are fixed once at
//! start-up. At runtime only the gate changes:
//! - **On**: compare value set to the configured duty, the LED is driven at
//!   the carrier frequency
//! - **Off**: compare value set to 0, the output is held low
//!
//! # Configuration
//!
//! [`CarrierTiming`] derives the RP2350 PWM slice divider and `top` value for
//! a carrier frequency from the system clock. [`Carrier::new`] then applies
//! the duty. Together they form the one-time carrier configuration.
//!
//! # Examples
//!
//! ```ignore
//! let timing = CarrierTiming::new(clk_sys_freq(), 38_000)?;
//! let mut pwm_config = PwmConfig::default();
//! pwm_config.divider = timing.divider.to_fixed();
//! pwm_config.top = timing.top;
//! let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config);
//!
//! let mut carrier = Carrier::new(pwm, 50)?;
//! carrier.on();
//! carrier.off();
//! ```

use embedded_hal::pwm::SetDutyCycle;

use crate::error::{Error, Result};

/// Largest integer clock divider the PWM slice supports.
const MAX_DIVIDER: u32 = 255;

/// Counter states in one PWM period at `top = u16::MAX`.
const MAX_PERIOD_CYCLES: u32 = 1 << 16;

/// PWM slice settings that produce a carrier frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct CarrierTiming {
    /// Integer clock divider (1-255)
    pub divider: u8,
    /// Counter wrap value; one period is `top + 1` divided clock cycles
    pub top: u16,
    /// PWM input clock the settings were derived for
    pub clock_hz: u32,
}

impl CarrierTiming {
    /// Derives divider and `top` for `frequency_hz` from `clock_hz`.
    ///
    /// Picks the smallest divider whose period fits the 16-bit counter, which
    /// keeps the duty resolution as fine as possible. The period is rounded
    /// to the nearest whole cycle.
    ///
    /// # Errors
    ///
    /// * [`Error::ZeroFrequency`] - `frequency_hz` is 0
    /// * [`Error::FrequencyTooHigh`] - fewer than two clock cycles per period
    /// * [`Error::FrequencyTooLow`] - period exceeds the counter at divider 255
    pub fn new(clock_hz: u32, frequency_hz: u32) -> Result<Self> {
        if frequency_hz == 0 {
            return Err(Error::ZeroFrequency);
        }

        let cycles = clock_hz / frequency_hz;
        if cycles < 2 {
            return Err(Error::FrequencyTooHigh {
                clock_hz,
                frequency_hz,
            });
        }

        let divider = cycles.div_ceil(MAX_PERIOD_CYCLES).max(1);
        if divider > MAX_DIVIDER {
            return Err(Error::FrequencyTooLow {
                clock_hz,
                frequency_hz,
            });
        }

        let period = (cycles + divider / 2) / divider;
        Ok(Self {
            divider: divider as u8,
            top: (period - 1) as u16,
            clock_hz,
        })
    }

    /// Carrier frequency these settings actually produce, in Hz.
    pub fn frequency_hz(&self) -> u32 {
        self.clock_hz / (u32::from(self.divider) * (u32::from(self.top) + 1))
    }
}

/// IR carrier output with an on/off gate.
///
/// Starts gated off. Gate writes that would not change the level are
/// skipped, so the output only sees real transitions.
pub struct Carrier<P> {
    /// PWM channel driving the IR LED
    output: P,
    /// Compare value used while the carrier is on
    on_duty: u16,
    /// Current gate state
    on: bool,
}

impl<P: SetDutyCycle> Carrier<P> {
    /// Wraps a configured PWM output and forces the carrier off.
    ///
    /// # Arguments
    ///
    /// * `output` - PWM channel already set to the carrier frequency
    /// * `duty_percent` - Share of each period the LED is driven (1-100)
    ///
    /// # Returns
    ///
    /// A carrier gated off, ready for [`on`](Self::on).
    ///
    /// # Errors
    ///
    /// [`Error::DutyOutOfRange`] if `duty_percent` is 0 or above 100, or if it
    /// rounds to a compare value of 0 at the output's duty resolution.
    pub fn new(output: P, duty_percent: u8) -> Result<Self> {
        if duty_percent == 0 || duty_percent > 100 {
            return Err(Error::DutyOutOfRange(duty_percent));
        }

        let max_duty = u32::from(output.max_duty_cycle());
        let on_duty = (max_duty * u32::from(duty_percent) / 100) as u16;
        if on_duty == 0 {
            return Err(Error::DutyOutOfRange(duty_percent));
        }

        let mut carrier = Self {
            output,
            on_duty,
            on: false,
        };
        carrier.write(0);
        Ok(carrier)
    }

    /// Starts driving the carrier waveform.
    ///
    /// The gate state only changes once the output accepted the write, so a
    /// failed write is retried on the next call.
    pub fn on(&mut self) {
        if !self.on && self.write(self.on_duty) {
            self.on = true;
        }
    }

    /// Stops the carrier and holds the output low. Calling it again is a no-op.
    pub fn off(&mut self) {
        if self.on && self.write(0) {
            self.on = false;
        }
    }

    /// Returns `true` while the carrier is gated on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Compare value applied while on.
    pub fn on_duty(&self) -> u16 {
        self.on_duty
    }

    /// Forces the carrier off and returns the PWM output.
    pub fn release(mut self) -> P {
        self.off();
        self.output
    }

    /// Returns `false` if the output rejected the compare value.
    fn write(&mut self, duty: u16) -> bool {
        let written = self.output.set_duty_cycle(duty).is_ok();
        if !written {
            warn!("IR carrier duty write failed");
        }
        written
    }
}
