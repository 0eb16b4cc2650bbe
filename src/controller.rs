// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Main-loop round execution.
//!
//! The controller runs one round of the configured [`RunMode`] per call and
//! counts completed rounds. The pause between rounds belongs to the caller,
//! which can await it instead of busy-waiting.

use embedded_hal::pwm::SetDutyCycle;

use crate::diagnostics;
use crate::mode::RunMode;
use crate::pixmob::{self, Frame};
use crate::timer::TickSource;
use crate::transmitter::Transmitter;

/// Drives the transmitter according to a [`RunMode`].
pub struct TestController {
    /// What each round does
    mode: RunMode,
    /// Completed rounds, wrapping
    rounds: u32,
}

impl TestController {
    /// Creates a controller for `mode` with no rounds run.
    pub fn new(mode: RunMode) -> Self {
        Self { mode, rounds: 0 }
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Returns the number of completed rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Runs one round of the configured mode.
    ///
    /// Blocks for the whole round. The carrier is off when this returns.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// controller.run_round(&mut transmitter);
    /// ```
    pub fn run_round<P: SetDutyCycle, T: TickSource>(&mut self, transmitter: &mut Transmitter<P, T>) {
        match self.mode {
            RunMode::PixMob => pixmob::send_frame(transmitter, &Frame::RED),
            RunMode::SignalTypes => diagnostics::run_signal_types(transmitter),
            RunMode::VoltageLevels => diagnostics::run_voltage_levels(transmitter),
            RunMode::DriveMode => diagnostics::run_drive_mode(transmitter),
        }
        self.rounds = self.rounds.wrapping_add(1);
        debug!("Round {} of {} complete", self.rounds, self.mode.name());
    }
}
