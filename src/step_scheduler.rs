//! Step scheduling and timing utilities.
//!
//! Decides when the next animation step is due without owning a timer.
//! The caller polls with the current time and sleeps in between.

use embassy_time::{Duration, Instant};

/// Steps further behind than this many intervals are dropped, not replayed.
const MAX_DRIFT_STEPS: u32 = 2;

/// Fixed-interval step pacing with drift correction
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = StepScheduler::new(Duration::from_millis(10));
///
/// loop {
///     if scheduler.tick(Instant::now()) {
///         animator.step();
///     }
///     sleep(poll_interval);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StepScheduler {
    interval: Duration,
    next_step: Option<Instant>,
}

impl StepScheduler {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_step: None,
        }
    }

    /// Check whether a step is due at `now` and book the following one.
    ///
    /// The first call is always due. After a stall longer than the allowed
    /// drift the schedule restarts from `now` instead of bursting through
    /// the backlog.
    pub fn tick(&mut self, now: Instant) -> bool {
        let deadline = *self.next_step.get_or_insert(now);
        if now < deadline {
            return false;
        }

        let max_drift = self.interval * MAX_DRIFT_STEPS;
        let base = if now > deadline + max_drift {
            now
        } else {
            deadline
        };
        self.next_step = Some(base + self.interval);
        true
    }

    /// Time left until the next step (zero when one is due)
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_step
            .and_then(|deadline| deadline.checked_duration_since(now))
            .unwrap_or(Duration::from_ticks(0))
    }

    /// Forget the schedule; the next tick is due immediately
    pub fn restart(&mut self) {
        self.next_step = None;
    }
}
