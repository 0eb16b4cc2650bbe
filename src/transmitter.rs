// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Interval-driven IR burst transmitter.
//!
//! A transmission is a list of durations in microseconds. Even indices are
//! carrier-on phases, odd indices are carrier-off phases:
//!
//! ```text
//! intervals: [ 38 ][ 6 ][ 6 ]
//! carrier:    ON    OFF  ON   -> forced OFF
//! ```
//!
//! The carrier is always forced off once the list is done, whatever its
//! length or parity. The transmitter knows nothing about preambles, packets
//! or bits; any encoding lives in the interval values the caller passes.
//!
//! # Timing
//!
//! `transmit` blocks for the sum of all intervals. Nothing yields inside the
//! interval loop and nothing is logged there, so the only jitter is the
//! granularity of the tick counter.

use embedded_hal::pwm::SetDutyCycle;

use crate::carrier::Carrier;
use crate::timer::{MicrosecondTimer, TickSource};

/// Sum of an interval list in microseconds.
pub fn total_duration_us(intervals: &[u32]) -> u64 {
    intervals.iter().map(|&us| u64::from(us)).sum()
}

/// Owns the IR carrier and the microsecond timer that paces it.
pub struct Transmitter<P, T> {
    carrier: Carrier<P>,
    timer: MicrosecondTimer<T>,
}

impl<P: SetDutyCycle, T: TickSource> Transmitter<P, T> {
    /// Creates a transmitter from an already configured carrier and timer.
    ///
    /// # Arguments
    ///
    /// * `carrier` - Carrier gated off, frequency and duty already applied
    /// * `timer` - Microsecond timer pacing every interval
    ///
    /// # Returns
    ///
    /// A transmitter that owns both halves until [`release`](Self::release).
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let carrier = Carrier::new(pwm, CARRIER_DUTY_PERCENT)?;
    /// let timer = MicrosecondTimer::new(DwtCycleCounter::new(dwt, dcb), clock_hz)?;
    /// let mut transmitter = Transmitter::new(carrier, timer);
    /// ```
    pub fn new(carrier: Carrier<P>, timer: MicrosecondTimer<T>) -> Self {
        Self { carrier, timer }
    }

    /// Gates the carrier on.
    ///
    /// Does nothing if the carrier is already on. The carrier stays on until
    /// [`carrier_off`](Self::carrier_off) or the next [`transmit`](Self::transmit).
    ///
    /// # Examples
    ///
    /// ```ignore
    /// transmitter.carrier_on();
    /// transmitter.wait_us(10_000_000);
    /// transmitter.carrier_off();
    /// ```
    pub fn carrier_on(&mut self) {
        self.carrier.on();
    }

    /// Gates the carrier off.
    ///
    /// Calling it on a carrier that is already off changes nothing, so it is
    /// safe to call unconditionally.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// transmitter.carrier_off();
    /// assert!(!transmitter.is_carrier_on());
    /// ```
    pub fn carrier_off(&mut self) {
        self.carrier.off();
    }

    /// Returns `true` while the carrier is gated on.
    pub fn is_carrier_on(&self) -> bool {
        self.carrier.is_on()
    }

    /// Busy-waits without touching the carrier.
    ///
    /// # Arguments
    ///
    /// * `duration_us` - Minimum time to wait in microseconds
    ///
    /// # Examples
    ///
    /// ```ignore
    /// transmitter.carrier_off();
    /// transmitter.wait_us(VOLTAGE_HOLD_US);
    /// ```
    pub fn wait_us(&self, duration_us: u32) {
        self.timer.wait_us(duration_us);
    }

    /// Sends `intervals` as alternating carrier-on/off phases, starting on.
    ///
    /// Blocks until every interval has elapsed, then leaves the carrier off.
    /// An empty list only forces the carrier off. Zero-length intervals
    /// toggle the gate without adding delay.
    ///
    /// # Arguments
    ///
    /// * `intervals` - Phase durations in microseconds
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // 700 us on, 700 us off, twice
    /// transmitter.transmit(&[700, 700, 700, 700]);
    /// ```
    pub fn transmit(&mut self, intervals: &[u32]) {
        for (index, &duration_us) in intervals.iter().enumerate() {
            if index % 2 == 0 {
                self.carrier.on();
            } else {
                self.carrier.off();
            }
            self.timer.wait_us(duration_us);
        }
        self.carrier.off();

        debug!(
            "Sent {} intervals ({} us)",
            intervals.len(),
            total_duration_us(intervals)
        );
    }

    /// Forces the carrier off and returns the carrier and timer.
    pub fn release(mut self) -> (Carrier<P>, MicrosecondTimer<T>) {
        self.carrier.off();
        (self.carrier, self.timer)
    }
}
