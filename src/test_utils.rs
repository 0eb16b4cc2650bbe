// Copyright (c) 2025 Kevin Thomas
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Host test doubles for the tick counter and the PWM carrier output.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::pwm::{ErrorKind, ErrorType, SetDutyCycle};

use crate::timer::TickSource;

/// Simulated free-running counter that advances by `step` on every read.
pub struct SimClock {
    ticks: Cell<u32>,
    step: u32,
    total: Cell<u64>,
}

impl SimClock {
    pub fn new(start: u32, step: u32) -> Self {
        Self {
            ticks: Cell::new(start),
            step,
            total: Cell::new(0),
        }
    }

    /// Current counter value, without advancing it.
    pub fn ticks(&self) -> u32 {
        self.ticks.get()
    }

    /// Ticks advanced since creation, not wrapped.
    pub fn total_advanced(&self) -> u64 {
        self.total.get()
    }
}

impl TickSource for SimClock {
    fn now(&self) -> u32 {
        self.ticks.set(self.ticks.get().wrapping_add(self.step));
        self.total.set(self.total.get() + u64::from(self.step));
        self.ticks.get()
    }
}

/// One duty-cycle write, stamped with the simulated clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyWrite {
    pub at: u64,
    pub duty: u16,
}

/// `SetDutyCycle` output that records every write.
pub struct RecordingPwm<'a> {
    clock: &'a SimClock,
    max_duty: u16,
    writes: RefCell<Vec<DutyWrite>>,
}

impl<'a> RecordingPwm<'a> {
    pub fn new(clock: &'a SimClock, max_duty: u16) -> Self {
        Self {
            clock,
            max_duty,
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<DutyWrite> {
        self.writes.borrow().clone()
    }

    /// Gate level after each write (`true` = carrier running).
    pub fn levels(&self) -> Vec<bool> {
        self.writes.borrow().iter().map(|w| w.duty != 0).collect()
    }

    /// Level held and ticks spent between consecutive writes.
    pub fn phases(&self) -> Vec<(bool, u64)> {
        self.writes
            .borrow()
            .windows(2)
            .map(|pair| (pair[0].duty != 0, pair[1].at - pair[0].at))
            .collect()
    }
}

impl ErrorType for RecordingPwm<'_> {
    type Error = Infallible;
}

impl SetDutyCycle for RecordingPwm<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(DutyWrite {
            at: self.clock.total_advanced(),
            duty,
        });
        Ok(())
    }
}

/// `SetDutyCycle` output whose writes can be made to fail.
pub struct FlakyPwm {
    max_duty: u16,
    /// Rejects every write while set
    pub failing: bool,
    /// Last accepted compare value
    pub duty: Option<u16>,
}

impl FlakyPwm {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            failing: false,
            duty: None,
        }
    }
}

impl ErrorType for FlakyPwm {
    type Error = ErrorKind;
}

impl SetDutyCycle for FlakyPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.failing {
            return Err(ErrorKind::Other);
        }
        self.duty = Some(duty);
        Ok(())
    }
}
