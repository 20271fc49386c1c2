use core::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error, info, warn};

use super::{PwmTiming, sleep};
use crate::duty::{DutyCycle, DutyHandle};
use crate::error::GpioError;
use crate::gpio::{Level, OutputLine};

/// Attempts at driving the line low on shutdown
pub const FINISH_ATTEMPTS: u32 = 3;

/// PWM waveform generator driving one owned output line
///
/// Each [`cycle`](Self::cycle) emits one period: high for `on_time`, then low
/// for `off_time`. A phase with zero length is skipped entirely, so 0% and
/// 100% hold the line steady without zero-length sleeps. Writes of the level
/// already on the line are skipped as well.
pub struct PwmGenerator<L: OutputLine> {
    line: L,
    timing: PwmTiming,
    /// Level last written successfully, `None` when unknown
    level: Option<Level>,
    failing: bool,
    write_failures: u64,
}

impl<L: OutputLine> PwmGenerator<L> {
    pub fn new(line: L, timing: PwmTiming) -> Self {
        Self {
            line,
            timing,
            level: None,
            failing: false,
            write_failures: 0,
        }
    }

    /// Total number of failed line writes
    pub fn write_failures(&self) -> u64 {
        self.write_failures
    }

    /// Emit one period at `duty`
    pub fn cycle(&mut self, duty: DutyCycle) {
        let (on_time, off_time) = self.timing.split(duty);

        if on_time.as_ticks() > 0 {
            self.drive(Level::High);
            sleep(on_time);
        }

        if off_time.as_ticks() > 0 {
            self.drive(Level::Low);
            sleep(off_time);
        }
    }

    /// Generate cycles until `active` is cleared, then release the line low
    ///
    /// The duty cycle is read once per cycle, so a new value takes effect at
    /// the next period boundary.
    pub fn run(mut self, duty: &DutyHandle, active: &AtomicBool) -> Result<L, (L, GpioError)> {
        debug!(
            "PWM loop started on line {} ({} Hz)",
            self.line.offset(),
            self.timing.frequency_hz()
        );
        while active.load(Ordering::Acquire) {
            self.cycle(duty.duty_cycle());
        }
        self.finish()
    }

    /// Force the line low and hand it back
    ///
    /// The low write is attempted up to [`FINISH_ATTEMPTS`] times. If every
    /// attempt fails the line is returned together with the last error, as
    /// its level is then unknown.
    pub fn finish(mut self) -> Result<L, (L, GpioError)> {
        debug!(
            "PWM loop on line {} stopped after {} write failures",
            self.line.offset(),
            self.write_failures
        );

        let mut attempt = 1;
        loop {
            match self.line.write(Level::Low) {
                Ok(()) => return Ok(self.line),
                Err(err) if attempt >= FINISH_ATTEMPTS => {
                    error!(
                        "failed to switch line {} off on shutdown: {}",
                        self.line.offset(),
                        err
                    );
                    return Err((self.line, err));
                }
                Err(err) => {
                    warn!("shutdown write attempt {} failed: {}", attempt, err);
                    attempt += 1;
                }
            }
        }
    }

    fn drive(&mut self, level: Level) {
        if self.level == Some(level) {
            return;
        }

        match self.line.write(level) {
            Ok(()) => {
                self.level = Some(level);
                if self.failing {
                    self.failing = false;
                    info!("line {} writes recovered", self.line.offset());
                }
            }
            Err(err) => {
                // Next cycle retries
                self.level = None;
                self.write_failures += 1;
                if !self.failing {
                    self.failing = true;
                    warn!("PWM write failed: {}", err);
                }
            }
        }
    }
}
