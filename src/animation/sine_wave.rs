//! Sine wave pattern
//!
//! Maps `sin(phase)` from `-1..=1` onto `0..=100` percent.

use core::f32::consts::TAU;

use super::Animation;
use crate::duty::DutyCycle;

/// Smooth periodic level following a sine
#[derive(Debug, Clone)]
pub struct SineWave {
    /// Current phase in radians, kept within `[0, 2π)`
    phase: f32,
    increment: f32,
}

impl SineWave {
    pub const fn new(increment: f32) -> Self {
        Self {
            phase: 0.0,
            increment,
        }
    }

    /// Duty cycle for a given phase: `round(50 * (1 + sin(phase)))`
    #[allow(clippy::cast_possible_truncation)]
    pub fn duty_at(phase: f32) -> DutyCycle {
        let level = libm::roundf(50.0 * (1.0 + libm::sinf(phase)));
        DutyCycle::clamped(level as i32)
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }
}

impl Animation for SineWave {
    fn next_duty(&mut self) -> DutyCycle {
        let duty = Self::duty_at(self.phase);

        // Wrap to keep precision over long runs
        self.phase = libm::fmodf(self.phase + self.increment, TAU);
        if self.phase < 0.0 {
            self.phase += TAU;
        }

        duty
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
