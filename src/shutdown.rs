//! Cooperative shutdown
//!
//! Loops check a [`CancelToken`] at their poll points. SIGINT and SIGTERM are
//! turned into a cancellation, so programs leave their outputs low on exit.

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;
use simple_signal::Signal;

/// Shared shutdown flag
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Cancel `token` when the process receives SIGINT or SIGTERM
pub fn cancel_on_signals(token: &CancelToken) {
    let token = token.clone();
    simple_signal::set_handler(&[Signal::Int, Signal::Term], move |signals| {
        info!("received {:?}, shutting down", signals);
        token.cancel();
    });
}
