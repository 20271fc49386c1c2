use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{error, info};

use super::{PwmGenerator, PwmTiming};
use crate::config::PwmConfig;
use crate::duty::{DutyCycle, DutyHandle};
use crate::error::{GpioError, PwmError};
use crate::gpio::OutputLine;

/// Software PWM output running on a dedicated thread
///
/// The channel owns its line for its whole lifetime. [`stop`](Self::stop)
/// clears the active flag, waits for the generation thread to finish its
/// current cycle and drive the line low, then returns the line. Dropping a
/// running channel performs the same stop-and-join.
pub struct PwmChannel<L: OutputLine + Send + 'static> {
    duty: DutyHandle,
    active: Arc<AtomicBool>,
    timing: PwmTiming,
    worker: Option<JoinHandle<Result<L, (L, GpioError)>>>,
}

impl<L: OutputLine + Send + 'static> PwmChannel<L> {
    /// Take ownership of `line` and start generating immediately
    pub fn start(line: L, config: &PwmConfig) -> Result<Self, PwmError> {
        let timing = PwmTiming::from_frequency(config.frequency_hz)?;
        let duty = DutyHandle::new(config.initial_duty);
        let active = Arc::new(AtomicBool::new(true));
        let offset = line.offset();

        let generator = PwmGenerator::new(line, timing);
        let worker = thread::Builder::new()
            .name(format!("pwm-{offset}"))
            .spawn({
                let duty = duty.clone();
                let active = Arc::clone(&active);
                move || generator.run(&duty, &active)
            })
            .map_err(PwmError::Spawn)?;

        info!(
            "PWM on line {}: {} Hz, period {} us",
            offset,
            timing.frequency_hz(),
            timing.period().as_micros()
        );

        Ok(Self {
            duty,
            active,
            timing,
            worker: Some(worker),
        })
    }

    /// Clamp `value` into `0..=100` and publish it to the generation thread
    pub fn set_duty_cycle(&self, value: i32) -> DutyCycle {
        self.duty.set_duty_cycle(value)
    }

    pub fn duty_cycle(&self) -> DutyCycle {
        self.duty.duty_cycle()
    }

    /// Handle for animation sources living elsewhere
    pub fn duty_handle(&self) -> DutyHandle {
        self.duty.clone()
    }

    pub fn timing(&self) -> PwmTiming {
        self.timing
    }

    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }

    /// Stop generating, wait for the thread and return the line (left low)
    ///
    /// Fails with [`PwmError::Gpio`] when the line could not be driven low;
    /// the line is released in that case.
    pub fn stop(mut self) -> Result<L, PwmError> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<L, PwmError> {
        self.active.store(false, Ordering::Release);
        let worker = self.worker.take().ok_or(PwmError::AlreadyStopped)?;
        let finished = worker.join().map_err(|_| PwmError::WorkerPanicked)?;
        finished.map_err(|(_, err)| PwmError::Gpio(err))
    }
}

impl<L: OutputLine + Send + 'static> Drop for PwmChannel<L> {
    fn drop(&mut self) {
        if self.worker.is_some() {
            if let Err(err) = self.shutdown() {
                error!("PWM channel dropped without a clean stop: {}", err);
            }
        }
    }
}
