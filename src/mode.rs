// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! What the firmware does on every round of its main loop.
//!
//! # Modes
//!
//! - **PixMob**: send the red frame (wake preamble + color packet)
//! - **SignalTypes**: continuous and blinking carrier, for a scope
//! - **VoltageLevels**: long off/on holds, for a voltmeter
//! - **DriveMode**: short push-pull blink burst
//!
//! The mode is fixed at build time through [`crate::config::RUN_MODE`].

/// Main-loop behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum RunMode {
    /// Transmit the PixMob red frame
    PixMob,
    /// Run the signal-type bench sequence
    SignalTypes,
    /// Run the voltage-level bench sequence
    VoltageLevels,
    /// Run the push-pull drive check
    DriveMode,
}

impl RunMode {
    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            RunMode::PixMob => "PixMob red frame",
            RunMode::SignalTypes => "signal type tests",
            RunMode::VoltageLevels => "voltage level tests",
            RunMode::DriveMode => "drive mode test",
        }
    }
}
