// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! PixMob wristband frames.
//!
//! A frame is a wake preamble followed by a color-select packet. Both are
//! plain interval lists; they are sent as two back-to-back transmissions.
//!
//! # Frame Layout
//!
//! ```text
//! [ wake preamble: 20 x 700 us, on/off ][ packet: 38, 6, (6, 2) x 16, 6 us ]
//! ```
//!
//! The packet's bit meaning is encoded entirely in its interval lengths.

use embedded_hal::pwm::SetDutyCycle;

use crate::timer::TickSource;
use crate::transmitter::{Transmitter, total_duration_us};

/// Length of every wake preamble phase in microseconds.
pub const WAKE_INTERVAL_US: u32 = 700;

/// Wake preamble that primes the receiver: ten equal on/off pairs.
pub const WAKE_PREAMBLE: [u32; 20] = [WAKE_INTERVAL_US; 20];

/// Color-select packet for red.
pub const RED_PACKET: [u32; 35] = [
    38, 6, 6, 2, 6, 2, 6, 2, 6, 2, 6, 2, 6, 2, 6, 2, 6, 2, //
    6, 2, 6, 2, 6, 2, 6, 2, 6, 2, 6, 2, 6, 2, 6, 2, 6,
];

/// A complete wristband transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Frame {
    /// Name used in logs
    pub name: &'static str,
    /// Sent first to wake the receiver
    pub preamble: &'static [u32],
    /// Sent right after the preamble
    pub packet: &'static [u32],
}

impl Frame {
    /// Wake preamble followed by the red packet.
    pub const RED: Frame = Frame {
        name: "red",
        preamble: &WAKE_PREAMBLE,
        packet: &RED_PACKET,
    };

    /// Combined on-air duration of preamble and packet.
    pub fn duration_us(&self) -> u64 {
        total_duration_us(self.preamble) + total_duration_us(self.packet)
    }
}

/// Sends `frame`: the preamble, then the packet.
pub fn send_frame<P: SetDutyCycle, T: TickSource>(
    transmitter: &mut Transmitter<P, T>,
    frame: &Frame,
) {
    transmitter.transmit(frame.preamble);
    transmitter.transmit(frame.packet);
    info!("Sent {} frame ({} us)", frame.name, frame.duration_us());
}
