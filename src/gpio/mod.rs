//! GPIO capability set
//!
//! Programs talk to lines through the small traits below. The character
//! device backend lives in [`cdev`], an in-memory backend for tests in
//! [`mock`]. Releasing a line or closing a chip is done by dropping it.

pub mod cdev;
pub mod mock;

use core::fmt;

use embassy_time::Duration;

use crate::error::GpioError;

/// Logic level of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl Level {
    pub const fn as_bit(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bit())
    }
}

/// Internal resistor configuration of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    #[default]
    Disabled,
    PullUp,
    PullDown,
}

/// Direction of a detected transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Rising,
    Falling,
}

/// Edge event reported by the kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent {
    /// Line the event happened on
    pub offset: u32,
    pub kind: EdgeKind,
    /// Kernel timestamp of the event (monotonic clock)
    pub timestamp: core::time::Duration,
}

/// A requested output line
///
/// Implementors own the line exclusively; only the holder may write it.
pub trait OutputLine {
    /// Offset of the line on its chip
    fn offset(&self) -> u32;

    /// Drive the line to `level`
    fn write(&mut self, level: Level) -> Result<(), GpioError>;
}

/// A requested input line
pub trait InputLine {
    /// Offset of the line on its chip
    fn offset(&self) -> u32;

    /// Sample the current level
    fn read(&mut self) -> Result<Level, GpioError>;
}

/// Lines requested with edge detection
pub trait EdgeSource {
    /// Wait up to `timeout` for the next edge event.
    ///
    /// Returns `Ok(None)` when the timeout expires without an event.
    fn wait_edge(&mut self, timeout: Duration) -> Result<Option<EdgeEvent>, GpioError>;
}
