//! Error types for GPIO access and PWM generation.

use thiserror::Error;

/// Boxed error coming from a GPIO backend (character device or mock).
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of the GPIO capability set.
///
/// Acquisition variants (`OpenChip`, `LineUnavailable`, `Request`) are fatal to
/// the program that hits them. `Write`, `Read` and `EdgeWait` happen in steady
/// state and are usually logged and retried by the caller.
#[derive(Debug, Error)]
pub enum GpioError {
    #[error("failed to open GPIO chip {chip}")]
    OpenChip {
        chip: String,
        #[source]
        source: BackendError,
    },
    #[error("line {offset} is not available on {chip}")]
    LineUnavailable { chip: String, offset: u32 },
    #[error("failed to request line {offset} as {direction}")]
    Request {
        offset: u32,
        direction: &'static str,
        #[source]
        source: BackendError,
    },
    #[error("failed to write line {offset}")]
    Write {
        offset: u32,
        #[source]
        source: BackendError,
    },
    #[error("failed to read line {offset}")]
    Read {
        offset: u32,
        #[source]
        source: BackendError,
    },
    #[error("failed to wait for edge events")]
    EdgeWait(#[source] BackendError),
}

/// Failures of a software PWM channel.
#[derive(Debug, Error)]
pub enum PwmError {
    #[error("invalid PWM frequency {0} Hz")]
    InvalidFrequency(u32),
    #[error("failed to spawn PWM generation thread")]
    Spawn(#[source] std::io::Error),
    #[error("PWM generation thread panicked")]
    WorkerPanicked,
    #[error("PWM channel already stopped")]
    AlreadyStopped,
    #[error(transparent)]
    Gpio(#[from] GpioError),
}
