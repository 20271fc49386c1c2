use embassy_time::Instant;
use log::debug;

use crate::animation::{AnimationId, AnimationSet};
use crate::config::{AnimationConfig, DriverConfig};
use crate::duty::{DutyCycle, DutyHandle};
use crate::step_scheduler::StepScheduler;

/// Animator - steps the selected pattern and publishes its duty cycle
///
/// The animator never touches the output line; its only link to the PWM
/// generator is the shared [`DutyHandle`].
pub struct Animator {
    // External dependencies
    duty: DutyHandle,

    // Internal state
    animations: AnimationSet,
    mode: AnimationId,
    scheduler: StepScheduler,
}

impl Animator {
    pub fn new(duty: DutyHandle, animation: &AnimationConfig, driver: &DriverConfig) -> Self {
        Self {
            duty,
            animations: AnimationSet::new(animation),
            mode: AnimationId::default(),
            scheduler: StepScheduler::new(driver.animation_interval),
        }
    }

    pub fn mode(&self) -> AnimationId {
        self.mode
    }

    /// Switch pattern; the new one resumes from its own saved state
    pub fn select(&mut self, mode: AnimationId) {
        debug!("animation {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
    }

    /// Advance to the next mode in cycling order
    pub fn cycle_mode(&mut self) -> AnimationId {
        self.select(self.mode.next());
        self.mode
    }

    /// Display name of the current mode, including the manual level
    pub fn mode_label(&self) -> String {
        match self.mode {
            AnimationId::Manual => format!(
                "{} ({})",
                self.mode.label(),
                self.animations.manual().level()
            ),
            other => other.label().to_owned(),
        }
    }

    pub fn animations_mut(&mut self) -> &mut AnimationSet {
        &mut self.animations
    }

    /// Step the animation if one is due at `now`
    ///
    /// Returns the published duty cycle when a step happened.
    pub fn tick(&mut self, now: Instant) -> Option<DutyCycle> {
        self.scheduler.tick(now).then(|| self.step())
    }

    /// Step the current pattern unconditionally and publish the result
    pub fn step(&mut self) -> DutyCycle {
        let duty = self.animations.step(self.mode);
        self.duty.store(duty);
        duty
    }
}
