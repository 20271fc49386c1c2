//! Strobe pattern
//!
//! Hard on/off: holds 0% for `toggle_every` steps, then 100% for as many.

use super::Animation;
use crate::duty::DutyCycle;

#[derive(Debug, Clone)]
pub struct Strobe {
    counter: u32,
    on: bool,
    toggle_every: u32,
}

impl Strobe {
    /// `toggle_every` of zero behaves like one (flip on every step)
    pub const fn new(toggle_every: u32) -> Self {
        Self {
            counter: 0,
            on: false,
            toggle_every: if toggle_every == 0 { 1 } else { toggle_every },
        }
    }
}

impl Animation for Strobe {
    fn next_duty(&mut self) -> DutyCycle {
        let duty = if self.on {
            DutyCycle::FULL
        } else {
            DutyCycle::OFF
        };

        self.counter += 1;
        if self.counter >= self.toggle_every {
            self.counter = 0;
            self.on = !self.on;
        }

        duty
    }

    fn reset(&mut self) {
        self.counter = 0;
        self.on = false;
    }
}
