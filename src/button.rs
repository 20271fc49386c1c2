//! Polled button handling
//!
//! Buttons are wired between the line and ground with the internal pull-up
//! enabled: released reads high, pressed reads low.

use crate::error::GpioError;
use crate::gpio::{InputLine, Level, OutputLine};

/// Level a pull-up button reads while released
pub const RELEASED: Level = Level::High;

/// Reports level changes of a polled input
#[derive(Debug, Clone, Copy)]
pub struct LevelTracker {
    last: Level,
}

impl LevelTracker {
    pub const fn new(initial: Level) -> Self {
        Self { last: initial }
    }

    /// Feed a sample; returns the new level if it differs from the last one
    pub fn update(&mut self, level: Level) -> Option<Level> {
        if level == self.last {
            return None;
        }
        self.last = level;
        Some(level)
    }

    pub const fn last(&self) -> Level {
        self.last
    }
}

/// Detects presses (high to low transitions) of a pull-up button
#[derive(Debug, Clone, Copy)]
pub struct ButtonEdge {
    tracker: LevelTracker,
}

impl ButtonEdge {
    pub const fn new() -> Self {
        Self {
            tracker: LevelTracker::new(RELEASED),
        }
    }

    /// Feed a sample; true exactly once per press
    pub fn update(&mut self, level: Level) -> bool {
        matches!(self.tracker.update(level), Some(Level::Low))
    }
}

impl Default for ButtonEdge {
    fn default() -> Self {
        Self::new()
    }
}

/// Lights an LED while a button is held
pub struct ButtonMirror<B: InputLine, L: OutputLine> {
    button: B,
    led: L,
    tracker: LevelTracker,
}

impl<B: InputLine, L: OutputLine> ButtonMirror<B, L> {
    pub const fn new(button: B, led: L) -> Self {
        Self {
            button,
            led,
            tracker: LevelTracker::new(RELEASED),
        }
    }

    /// Sample the button and drive the LED accordingly
    ///
    /// Returns the button level when it changed since the previous poll.
    pub fn poll(&mut self) -> Result<Option<Level>, GpioError> {
        let button = self.button.read()?;
        let led = match button {
            Level::Low => Level::High,
            Level::High => Level::Low,
        };
        self.led.write(led)?;
        Ok(self.tracker.update(button))
    }

    /// Switch the LED off and release both lines
    pub fn shutdown(mut self) -> Result<(), GpioError> {
        self.led.write(Level::Low)
    }
}
