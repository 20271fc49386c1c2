//! Software PWM
//!
//! A [`PwmGenerator`] toggles one output line inside a fixed period so the
//! average level follows the duty cycle. [`PwmChannel`] runs a generator on
//! its own thread and exposes the thread-safe duty cycle accessor.

mod channel;
mod generator;

pub use channel::PwmChannel;
pub use generator::{FINISH_ATTEMPTS, PwmGenerator};

use embassy_time::Duration;

use crate::duty::DutyCycle;
use crate::error::PwmError;

/// Highest accepted frequency (one microsecond period)
pub const MAX_FREQUENCY_HZ: u32 = 1_000_000;

/// Fixed PWM period and its on/off split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmTiming {
    frequency_hz: u32,
    period: Duration,
}

impl PwmTiming {
    /// Derive the period from a frequency (`period = 1 / frequency`)
    pub fn from_frequency(frequency_hz: u32) -> Result<Self, PwmError> {
        if frequency_hz == 0 || frequency_hz > MAX_FREQUENCY_HZ {
            return Err(PwmError::InvalidFrequency(frequency_hz));
        }
        Ok(Self {
            frequency_hz,
            period: Duration::from_hz(u64::from(frequency_hz)),
        })
    }

    pub const fn frequency_hz(self) -> u32 {
        self.frequency_hz
    }

    pub const fn period(self) -> Duration {
        self.period
    }

    /// High phase of one period
    pub fn on_time(self, duty: DutyCycle) -> Duration {
        let ticks = self.period.as_ticks() * u64::from(duty.percent())
            / u64::from(DutyCycle::MAX_PERCENT);
        Duration::from_ticks(ticks)
    }

    /// Split one period into `(on_time, off_time)`
    ///
    /// The two halves always add up to exactly one period; truncation only
    /// moves at most one tick from the high to the low phase.
    pub fn split(self, duty: DutyCycle) -> (Duration, Duration) {
        let on = self.on_time(duty);
        let off = Duration::from_ticks(self.period.as_ticks() - on.as_ticks());
        (on, off)
    }
}

/// Block the current thread for `duration`
///
/// Interrupted sleeps are resumed, so the thread sleeps at least `duration`.
pub fn sleep(duration: Duration) {
    std::thread::sleep(std::time::Duration::from_micros(duration.as_micros()));
}
