//! Edge-event driven button presses
//!
//! Instead of polling, the kernel queues a timestamped event for each
//! falling edge. [`PressMonitor`] waits for those events with a timeout so
//! the caller can still check for shutdown between waits.

use embassy_time::Duration;
use heapless::LinearMap;
use log::warn;

use crate::error::GpioError;
use crate::gpio::{EdgeKind, EdgeSource, Level, OutputLine};

/// Maximum number of distinct lines a tally tracks
pub const MAX_TRACKED_LINES: usize = 8;

/// Press counts per line offset
#[derive(Debug, Clone, Default)]
pub struct PressTally {
    counts: LinearMap<u32, u32, MAX_TRACKED_LINES>,
}

impl PressTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a press on `offset` and return the new total for that line
    ///
    /// Returns `None` when the tally is already tracking the maximum number
    /// of lines and `offset` is not one of them.
    pub fn record(&mut self, offset: u32) -> Option<u32> {
        if let Some(count) = self.counts.get_mut(&offset) {
            *count += 1;
            return Some(*count);
        }
        self.counts.insert(offset, 1).ok()?;
        Some(1)
    }

    pub fn count(&self, offset: u32) -> u32 {
        self.counts.get(&offset).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// A handled button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub offset: u32,
    /// Presses seen on this line so far, including this one
    pub count: u32,
    /// Kernel timestamp of the edge
    pub timestamp: core::time::Duration,
    /// LED level after the toggle
    pub led: Level,
}

/// Toggles an LED on every button press reported by an edge source
pub struct PressMonitor<E: EdgeSource, L: OutputLine> {
    events: E,
    led: L,
    led_level: Level,
    tally: PressTally,
}

impl<E: EdgeSource, L: OutputLine> PressMonitor<E, L> {
    pub fn new(events: E, led: L) -> Self {
        Self {
            events,
            led,
            led_level: Level::Low,
            tally: PressTally::new(),
        }
    }

    /// Wait up to `timeout` for one press and handle it
    ///
    /// A failed LED write is logged and does not fail the poll; failing to
    /// wait for events does.
    pub fn poll(&mut self, timeout: Duration) -> Result<Option<Press>, GpioError> {
        let Some(event) = self.events.wait_edge(timeout)? else {
            return Ok(None);
        };
        if event.kind != EdgeKind::Falling {
            return Ok(None);
        }

        let count = self.tally.record(event.offset).unwrap_or(0);
        self.led_level = self.led_level.toggled();
        if let Err(err) = self.led.write(self.led_level) {
            warn!("failed to toggle LED: {}", err);
        }

        Ok(Some(Press {
            offset: event.offset,
            count,
            timestamp: event.timestamp,
            led: self.led_level,
        }))
    }

    pub fn tally(&self) -> &PressTally {
        &self.tally
    }

    /// Switch the LED off and release the lines
    pub fn shutdown(mut self) -> Result<PressTally, GpioError> {
        self.led.write(Level::Low)?;
        Ok(self.tally)
    }
}
