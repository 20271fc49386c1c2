//! Mock GPIO backend for testing
//!
//! Each mock line comes with a probe sharing its state, so a test can keep
//! observing (or scripting) a line after handing it to a worker thread.

use std::sync::Arc;

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};
use heapless::{Deque, HistoryBuffer};

use super::{EdgeEvent, EdgeSource, InputLine, Level, OutputLine};
use crate::error::GpioError;

/// Number of writes kept by an output probe
pub const HISTORY_LEN: usize = 256;

/// Number of edge events a mock edge source can queue
pub const EDGE_QUEUE_LEN: usize = 16;

/// A recorded output write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub level: Level,
    pub at: Instant,
}

struct OutputState {
    level: Level,
    writes: usize,
    history: HistoryBuffer<LevelChange, HISTORY_LEN>,
    failures_left: u32,
}

/// Mock output line
pub struct MockOutput {
    offset: u32,
    state: Arc<Mutex<RefCell<OutputState>>>,
}

/// Observer of a [`MockOutput`]
#[derive(Clone)]
pub struct OutputProbe {
    state: Arc<Mutex<RefCell<OutputState>>>,
}

impl MockOutput {
    /// Create a low output line and its probe
    pub fn new(offset: u32) -> (Self, OutputProbe) {
        let state = Arc::new(Mutex::new(RefCell::new(OutputState {
            level: Level::Low,
            writes: 0,
            history: HistoryBuffer::new(),
            failures_left: 0,
        })));
        let probe = OutputProbe {
            state: Arc::clone(&state),
        };
        (Self { offset, state }, probe)
    }
}

impl OutputLine for MockOutput {
    fn offset(&self) -> u32 {
        self.offset
    }

    fn write(&mut self, level: Level) -> Result<(), GpioError> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow(cs).borrow_mut();
            if state.failures_left > 0 {
                state.failures_left -= 1;
                return Err(GpioError::Write {
                    offset: self.offset,
                    source: "injected write failure".into(),
                });
            }
            state.level = level;
            state.writes += 1;
            state.history.write(LevelChange {
                level,
                at: Instant::now(),
            });
            Ok(())
        })
    }
}

impl OutputProbe {
    /// Level of the last successful write
    pub fn level(&self) -> Level {
        critical_section::with(|cs| self.state.borrow(cs).borrow().level)
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        critical_section::with(|cs| self.state.borrow(cs).borrow().writes)
    }

    /// Most recent writes, oldest first
    pub fn history(&self) -> Vec<LevelChange> {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs).borrow();
            state.history.oldest_ordered().copied().collect()
        })
    }

    /// Make the next `count` writes fail
    pub fn fail_next(&self, count: u32) {
        critical_section::with(|cs| {
            self.state.borrow(cs).borrow_mut().failures_left = count;
        });
    }
}

struct InputState {
    level: Level,
    failing: bool,
}

/// Mock input line
pub struct MockInput {
    offset: u32,
    state: Arc<Mutex<RefCell<InputState>>>,
}

/// Scripts the level seen by a [`MockInput`]
#[derive(Clone)]
pub struct InputProbe {
    state: Arc<Mutex<RefCell<InputState>>>,
}

impl MockInput {
    /// Create an input reading `initial` and its probe
    pub fn new(offset: u32, initial: Level) -> (Self, InputProbe) {
        let state = Arc::new(Mutex::new(RefCell::new(InputState {
            level: initial,
            failing: false,
        })));
        let probe = InputProbe {
            state: Arc::clone(&state),
        };
        (Self { offset, state }, probe)
    }
}

impl InputLine for MockInput {
    fn offset(&self) -> u32 {
        self.offset
    }

    fn read(&mut self) -> Result<Level, GpioError> {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs).borrow();
            if state.failing {
                return Err(GpioError::Read {
                    offset: self.offset,
                    source: "injected read failure".into(),
                });
            }
            Ok(state.level)
        })
    }
}

impl InputProbe {
    pub fn set_level(&self, level: Level) {
        critical_section::with(|cs| {
            self.state.borrow(cs).borrow_mut().level = level;
        });
    }

    /// Make every read fail until cleared
    pub fn set_failing(&self, failing: bool) {
        critical_section::with(|cs| {
            self.state.borrow(cs).borrow_mut().failing = failing;
        });
    }
}

/// Mock edge source delivering queued events
///
/// `wait_edge` never blocks: an empty queue behaves like an expired timeout.
pub struct MockEdges {
    queue: Arc<Mutex<RefCell<Deque<EdgeEvent, EDGE_QUEUE_LEN>>>>,
}

/// Feeds events into a [`MockEdges`]
#[derive(Clone)]
pub struct EdgeProbe {
    queue: Arc<Mutex<RefCell<Deque<EdgeEvent, EDGE_QUEUE_LEN>>>>,
}

impl MockEdges {
    pub fn new() -> (Self, EdgeProbe) {
        let queue = Arc::new(Mutex::new(RefCell::new(Deque::new())));
        let probe = EdgeProbe {
            queue: Arc::clone(&queue),
        };
        (Self { queue }, probe)
    }
}

impl EdgeSource for MockEdges {
    fn wait_edge(&mut self, _timeout: Duration) -> Result<Option<EdgeEvent>, GpioError> {
        Ok(critical_section::with(|cs| {
            self.queue.borrow(cs).borrow_mut().pop_front()
        }))
    }
}

impl EdgeProbe {
    /// Queue an event
    ///
    /// Returns the event back if the queue is full.
    pub fn push(&self, event: EdgeEvent) -> Result<(), EdgeEvent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().push_back(event))
    }
}
