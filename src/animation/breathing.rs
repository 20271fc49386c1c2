//! Breathing pattern
//!
//! Ramps the level up and down in fixed steps, bouncing at 0% and 100%.

use super::Animation;
use crate::duty::DutyCycle;

const MAX_LEVEL: i32 = DutyCycle::MAX_PERCENT as i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Triangle ramp between 0% and 100%
#[derive(Debug, Clone)]
pub struct Breathing {
    brightness: i32,
    direction: Direction,
    step: u8,
}

impl Breathing {
    /// Start dark and rising
    pub const fn new(step: u8) -> Self {
        Self {
            brightness: 0,
            direction: Direction::Up,
            step,
        }
    }

    pub const fn brightness(&self) -> DutyCycle {
        DutyCycle::clamped(self.brightness)
    }

    /// True while the ramp is heading towards 100%
    pub const fn is_rising(&self) -> bool {
        matches!(self.direction, Direction::Up)
    }
}

impl Animation for Breathing {
    fn next_duty(&mut self) -> DutyCycle {
        let step = i32::from(self.step);
        self.brightness += match self.direction {
            Direction::Up => step,
            Direction::Down => -step,
        };

        if self.brightness >= MAX_LEVEL {
            self.brightness = MAX_LEVEL;
            self.direction = Direction::Down;
        } else if self.brightness <= 0 {
            self.brightness = 0;
            self.direction = Direction::Up;
        }

        DutyCycle::clamped(self.brightness)
    }

    fn reset(&mut self) {
        self.brightness = 0;
        self.direction = Direction::Up;
    }
}
