// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! PixMob IR carrier transmitter for the RP2350A.
//!
//! Drives an IR LED with a gated 38 kHz carrier and sends variable-length
//! on/off bursts from interval lists, used to validate PixMob-style IR
//! wristbands.
//!
//! # Modules
//!
//! - [`timer`]: busy-wait microsecond delay over a free-running tick counter
//! - [`carrier`]: carrier PWM timing and the on/off gate
//! - [`transmitter`]: interval list to carrier bursts
//! - [`pixmob`]: wake preamble and color packets
//! - [`diagnostics`]: scope and voltmeter bench routines
//! - [`controller`] / [`mode`]: what each main-loop round does
//! - [`config`]: pins and carrier constants
//!
//! Everything except the DWT tick source builds on the host, so the timing
//! logic is unit-tested against simulated clocks and PWM outputs.

#![cfg_attr(not(test), no_std)]

// Must stay first so the logging macros are visible to every module.
mod fmt;

pub mod carrier;
pub mod config;
pub mod controller;
pub mod diagnostics;
mod error;
pub mod mode;
pub mod pixmob;
pub mod timer;
pub mod transmitter;

#[cfg(test)]
mod test_utils;

pub use crate::error::{Error, Result};
