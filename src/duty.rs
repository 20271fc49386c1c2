//! Duty cycle value and its shared accessor.
//!
//! The duty cycle is the only datum shared between the PWM generation thread
//! and whoever drives it. It lives in a `critical-section` mutex so readers
//! never observe a partial update; writers simply replace the value (last
//! write wins, nothing is queued).

use core::cell::Cell;
use core::fmt;
use std::sync::Arc;

use critical_section::Mutex;

/// Duty cycle in percent, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct DutyCycle(u8);

impl DutyCycle {
    /// Upper bound in percent
    pub const MAX_PERCENT: u8 = 100;
    /// Output held low for the whole period
    pub const OFF: Self = Self(0);
    /// Output held high for the whole period
    pub const FULL: Self = Self(Self::MAX_PERCENT);

    /// Clamp any requested value into `0..=100`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamped(value: i32) -> Self {
        if value <= 0 {
            Self::OFF
        } else if value >= Self::MAX_PERCENT as i32 {
            Self::FULL
        } else {
            Self(value as u8)
        }
    }

    /// Build from a percentage, rejecting values above 100
    pub const fn new(percent: u8) -> Option<Self> {
        if percent > Self::MAX_PERCENT {
            None
        } else {
            Some(Self(percent))
        }
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DutyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Duty cycle cell guarded by a critical section
pub struct DutyCell {
    inner: Mutex<Cell<DutyCycle>>,
}

impl DutyCell {
    pub const fn new(initial: DutyCycle) -> Self {
        Self {
            inner: Mutex::new(Cell::new(initial)),
        }
    }

    /// Clamp `value` and publish it
    ///
    /// Returns the value actually stored.
    pub fn set(&self, value: i32) -> DutyCycle {
        let duty = DutyCycle::clamped(value);
        self.store(duty);
        duty
    }

    pub fn store(&self, duty: DutyCycle) {
        critical_section::with(|cs| self.inner.borrow(cs).set(duty));
    }

    pub fn get(&self) -> DutyCycle {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for DutyCell {
    fn default() -> Self {
        Self::new(DutyCycle::OFF)
    }
}

/// Cloneable handle to a shared [`DutyCell`]
///
/// The PWM thread holds one handle, every animation source may hold another.
#[derive(Clone, Default)]
pub struct DutyHandle {
    cell: Arc<DutyCell>,
}

impl DutyHandle {
    pub fn new(initial: DutyCycle) -> Self {
        Self {
            cell: Arc::new(DutyCell::new(initial)),
        }
    }

    /// Clamp `value` into `0..=100` and publish it
    pub fn set_duty_cycle(&self, value: i32) -> DutyCycle {
        self.cell.set(value)
    }

    /// Publish an already valid duty cycle
    pub fn store(&self, duty: DutyCycle) {
        self.cell.store(duty);
    }

    pub fn duty_cycle(&self) -> DutyCycle {
        self.cell.get()
    }
}
