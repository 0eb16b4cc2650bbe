// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Hardware configuration and pin mappings for the RP2350A IR tester.
//!
//! # Pin Mapping Summary
//!
//! - **IR LED**: GPIO 16 (PWM_SLICE0 Channel A), driven through a transistor
//! - **Status LED**: GPIO 25 (onboard LED)
//!
//! # Carrier
//!
//! - **Frequency**: 38 kHz, the usual IR receiver band
//! - **Duty cycle**: 50%
//! - **Divider / top**: derived from `clk_sys` at start-up
//!   (see [`crate::carrier::CarrierTiming`])

use crate::mode::RunMode;

/// GPIO pin number for the IR LED (PWM slice 0, channel A)
pub const IR_LED_PIN: u8 = 16;

/// GPIO pin number for status LED (onboard LED on RP2350)
pub const STATUS_LED_PIN: u8 = 25;

/// IR carrier frequency in Hz
pub const CARRIER_FREQUENCY_HZ: u32 = 38_000;

/// IR carrier duty cycle in percent
pub const CARRIER_DUTY_PERCENT: u8 = 50;

/// Pause between main-loop rounds in milliseconds
pub const ROUND_PAUSE_MS: u64 = 1_000;

/// Main-loop behavior
pub const RUN_MODE: RunMode = RunMode::PixMob;
