// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Error type for carrier and timer bring-up.
//!
//! Only configuration can fail. Once the carrier and timer exist, gating the
//! carrier, waiting and transmitting are infallible.

use core::fmt;

/// Errors reported while configuring the IR carrier or the microsecond timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Error {
    /// A carrier frequency of 0 Hz was requested.
    ZeroFrequency,
    /// The clock cannot produce at least two cycles per carrier period.
    FrequencyTooHigh {
        /// PWM input clock in Hz
        clock_hz: u32,
        /// Requested carrier frequency in Hz
        frequency_hz: u32,
    },
    /// The carrier period does not fit in the 16-bit PWM counter even at
    /// the largest integer divider.
    FrequencyTooLow {
        /// PWM input clock in Hz
        clock_hz: u32,
        /// Requested carrier frequency in Hz
        frequency_hz: u32,
    },
    /// Duty cycle outside 1-100 percent, or too small to give a non-zero
    /// compare value.
    DutyOutOfRange(u8),
    /// The tick source runs slower than 1 MHz and cannot resolve a microsecond.
    TickRateTooLow(u32),
    /// The Cortex-M core peripherals were already taken.
    CorePeripheralsTaken,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroFrequency => write!(f, "carrier frequency must be non-zero"),
            Error::FrequencyTooHigh {
                clock_hz,
                frequency_hz,
            } => write!(
                f,
                "carrier frequency {frequency_hz} Hz is too high for a {clock_hz} Hz clock"
            ),
            Error::FrequencyTooLow {
                clock_hz,
                frequency_hz,
            } => write!(
                f,
                "carrier frequency {frequency_hz} Hz is too low for a {clock_hz} Hz clock"
            ),
            Error::DutyOutOfRange(duty) => write!(f, "duty cycle {duty}% is outside 1-100%"),
            Error::TickRateTooLow(tick_hz) => {
                write!(f, "tick rate {tick_hz} Hz is below 1 MHz")
            }
            Error::CorePeripheralsTaken => write!(f, "core peripherals already taken"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
