//! Fixed level pattern

use super::Animation;
use crate::duty::DutyCycle;

/// Always yields the configured level
#[derive(Debug, Clone)]
pub struct ManualLevel {
    level: DutyCycle,
}

impl ManualLevel {
    pub const fn new(level: DutyCycle) -> Self {
        Self { level }
    }

    pub const fn level(&self) -> DutyCycle {
        self.level
    }

    /// Change the level, clamped into `0..=100`
    pub fn set_level(&mut self, value: i32) -> DutyCycle {
        self.level = DutyCycle::clamped(value);
        self.level
    }
}

impl Animation for ManualLevel {
    fn next_duty(&mut self) -> DutyCycle {
        self.level
    }
}
