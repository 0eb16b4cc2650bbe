// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Busy-wait microsecond timer over a free-running tick counter.
//!
//! The timer never yields. A wait snapshots the counter, then polls until the
//! wrap-safe difference `now - start` reaches the target tick count.
//!
//! # Long Waits
//!
//! A 32-bit counter at 150 MHz wraps roughly every 28.6 s. To keep the
//! elapsed-time comparison unambiguous, a single poll loop never waits for
//! more than half the counter range. Longer durations are split into
//! consecutive sub-waits, each anchored on the exact end tick of the
//! previous one, so splitting adds no drift.
//!
//! # Rounding
//!
//! Each span is converted to ticks with `ceil(us * tick_hz / 1 MHz)`, so a
//! clock that is not a whole number of MHz still never cuts a wait short.
//!
//! # Examples
//!
//! ```ignore
//! let timer = MicrosecondTimer::new(DwtCycleCounter::new(dwt, dcb), clk_sys_hz)?;
//! timer.wait_us(700);
//! ```

use crate::error::{Error, Result};

/// Microseconds per second.
const MICROS_PER_SECOND: u64 = 1_000_000;

/// Largest tick span a single poll loop waits for.
const MAX_SPAN_TICKS: u32 = u32::MAX / 2;

/// A free-running, monotonically increasing counter that wraps at `u32::MAX`.
pub trait TickSource {
    /// Returns the current counter value.
    fn now(&self) -> u32;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn now(&self) -> u32 {
        (**self).now()
    }
}

/// Blocking microsecond delay built on a [`TickSource`].
pub struct MicrosecondTimer<T> {
    /// Counter the timer polls
    source: T,
    /// Counter rate in Hz, fixed at construction
    tick_hz: u32,
}

impl<T: TickSource> MicrosecondTimer<T> {
    /// Creates a timer for a counter running at `tick_hz`.
    ///
    /// # Arguments
    ///
    /// * `source` - Free-running tick counter
    /// * `tick_hz` - Counter rate in Hz (for the DWT cycle counter, the core clock)
    ///
    /// # Errors
    ///
    /// [`Error::TickRateTooLow`] if `tick_hz` is below 1 MHz.
    pub fn new(source: T, tick_hz: u32) -> Result<Self> {
        if u64::from(tick_hz) < MICROS_PER_SECOND {
            return Err(Error::TickRateTooLow(tick_hz));
        }
        Ok(Self { source, tick_hz })
    }

    /// Returns the current counter value.
    pub fn now(&self) -> u32 {
        self.source.now()
    }

    /// Counter rate in Hz.
    pub fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    /// Ticks elapsed since `start`, tolerant of one counter wrap.
    pub fn elapsed_ticks(&self, start: u32) -> u32 {
        self.source.now().wrapping_sub(start)
    }

    /// Longest duration a single poll loop covers, in microseconds.
    ///
    /// At any accepted tick rate this is at most `2^31` us, and its rounded-up
    /// tick count never exceeds half the counter range.
    pub fn max_span_us(&self) -> u32 {
        (u64::from(MAX_SPAN_TICKS) * MICROS_PER_SECOND / u64::from(self.tick_hz)) as u32
    }

    /// Ticks covering at least `duration_us`, rounded up.
    ///
    /// Only called with `duration_us <= max_span_us()`, so the result fits.
    fn ticks_for(&self, duration_us: u32) -> u32 {
        (u64::from(duration_us) * u64::from(self.tick_hz)).div_ceil(MICROS_PER_SECOND) as u32
    }

    /// Busy-waits until at least `duration_us` microseconds have elapsed.
    ///
    /// Zero returns immediately. Any `u32` duration is accepted; waits longer
    /// than [`max_span_us`](Self::max_span_us) are split into back-to-back spans.
    ///
    /// # Arguments
    ///
    /// * `duration_us` - Minimum time to wait in microseconds
    ///
    /// # Examples
    ///
    /// ```ignore
    /// timer.wait_us(38); // one PixMob sync pulse
    /// ```
    pub fn wait_us(&self, duration_us: u32) {
        let max_span_us = self.max_span_us();
        let mut remaining_us = duration_us;
        let mut start = self.source.now();

        while remaining_us > 0 {
            let span_us = remaining_us.min(max_span_us);
            let span_ticks = self.ticks_for(span_us);
            while self.elapsed_ticks(start) < span_ticks {
                core::hint::spin_loop();
            }
            start = start.wrapping_add(span_ticks);
            remaining_us -= span_us;
        }
    }

    /// Releases the underlying tick source.
    pub fn release(self) -> T {
        self.source
    }
}

/// Cortex-M DWT cycle counter as a [`TickSource`].
///
/// Ticks at the core clock. Owning the `DWT` and `DCB` handles keeps anything
/// else from disabling the counter while the timer is in use.
#[cfg(target_os = "none")]
pub struct DwtCycleCounter {
    _dwt: cortex_m::peripheral::DWT,
    _dcb: cortex_m::peripheral::DCB,
}

#[cfg(target_os = "none")]
impl DwtCycleCounter {
    /// Enables tracing and starts the cycle counter.
    pub fn new(mut dwt: cortex_m::peripheral::DWT, mut dcb: cortex_m::peripheral::DCB) -> Self {
        dcb.enable_trace();
        dwt.enable_cycle_counter();
        Self {
            _dwt: dwt,
            _dcb: dcb,
        }
    }
}

#[cfg(target_os = "none")]
impl TickSource for DwtCycleCounter {
    fn now(&self) -> u32 {
        cortex_m::peripheral::DWT::cycle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SimClock;

    #[test]
    fn rejects_tick_rate_below_one_megahertz() {
        let clock = SimClock::new(0, 1);
        assert_eq!(
            MicrosecondTimer::new(clock, 999_999).err(),
            Some(Error::TickRateTooLow(999_999))
        );
    }

    #[test]
    fn max_span_fits_half_the_counter() {
        for tick_hz in [1_000_000, 1_500_000, 125_000_000, 150_000_000, u32::MAX] {
            let timer = MicrosecondTimer::new(SimClock::new(0, 1), tick_hz).unwrap();
            assert_eq!(timer.tick_hz(), tick_hz);
            assert!(timer.ticks_for(timer.max_span_us()) <= u32::MAX / 2);
        }
        let timer = MicrosecondTimer::new(SimClock::new(0, 1), 150_000_000).unwrap();
        assert_eq!(timer.max_span_us(), 14_316_557);
    }

    #[test]
    fn zero_duration_returns_without_waiting() {
        let clock = SimClock::new(1_000, 1);
        let timer = MicrosecondTimer::new(&clock, 10_000_000).unwrap();
        let before = clock.ticks();
        timer.wait_us(0);
        assert!(clock.ticks().wrapping_sub(before) <= 1);
    }

    #[test]
    fn never_returns_before_duration_elapses() {
        for step in [1, 3, 7, 10, 64] {
            for duration_us in [1, 2, 6, 38, 700, 5_000] {
                let clock = SimClock::new(0, step);
                let timer = MicrosecondTimer::new(&clock, 10_000_000).unwrap();
                let start = clock.ticks();
                timer.wait_us(duration_us);
                let elapsed = clock.ticks().wrapping_sub(start);
                assert!(
                    elapsed >= duration_us * 10,
                    "step {step}: waited {elapsed} ticks for {duration_us} us"
                );
                assert!(
                    elapsed < duration_us * 10 + 2 * step,
                    "step {step}: overshot to {elapsed} ticks for {duration_us} us"
                );
            }
        }
    }

    #[test]
    fn fractional_megahertz_clock_never_cuts_waits_short() {
        for (tick_hz, duration_us, min_ticks) in [
            (1_500_000, 1_000, 1_500),
            (1_900_000, 1_000, 1_900),
            (1_500_000, 1, 2),
            (133_333_333, 700, 93_334),
        ] {
            let clock = SimClock::new(0, 1);
            let timer = MicrosecondTimer::new(&clock, tick_hz).unwrap();
            let start = clock.ticks();
            timer.wait_us(duration_us);
            let elapsed = clock.ticks().wrapping_sub(start);
            assert!(
                elapsed >= min_ticks,
                "{tick_hz} Hz: waited {elapsed} ticks for {duration_us} us"
            );
            assert!(
                elapsed <= min_ticks + 1,
                "{tick_hz} Hz: overshot to {elapsed} ticks for {duration_us} us"
            );
        }
    }

    #[test]
    fn wait_survives_counter_wrap() {
        let clock = SimClock::new(u32::MAX - 5, 1);
        let timer = MicrosecondTimer::new(&clock, 10_000_000).unwrap();
        let start = clock.ticks();
        timer.wait_us(3);
        let elapsed = clock.ticks().wrapping_sub(start);
        assert!(clock.ticks() < start, "counter should have wrapped");
        assert!((30..=31).contains(&elapsed), "elapsed {elapsed} ticks");
    }

    #[test]
    fn long_wait_is_split_without_drift() {
        // 1 tick/us makes max span about 2^31 us; coarse steps keep the loop short.
        let step = 1 << 20;
        let clock = SimClock::new(u32::MAX - 100, step);
        let timer = MicrosecondTimer::new(&clock, 1_000_000).unwrap();
        let duration_us = u32::MAX - 10;
        let before = clock.total_advanced();
        timer.wait_us(duration_us);
        let total = clock.total_advanced() - before;
        assert!(total >= u64::from(duration_us));
        assert!(total < u64::from(duration_us) + 3 * u64::from(step));
    }
}
