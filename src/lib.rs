//! GPIO teaching programs over the Linux character device API
//!
//! The library holds the pieces the programs in `src/bin` share: the GPIO
//! capability traits and backends, a threaded software PWM channel, the
//! animation patterns that drive its duty cycle, and small button helpers.

pub mod animation;
pub mod animator;
pub mod button;
pub mod config;
pub mod driver;
pub mod duty;
pub mod error;
pub mod events;
pub mod gpio;
pub mod pwm;
pub mod shutdown;
pub mod step_scheduler;

pub use animation::{Animation, AnimationId, AnimationSet};
pub use animator::Animator;
pub use config::{AnimationConfig, BoardConfig, DriverConfig, PwmConfig};
pub use driver::ModeDriver;
pub use duty::{DutyCell, DutyCycle, DutyHandle};
pub use error::{GpioError, PwmError};
pub use gpio::{Bias, EdgeEvent, EdgeKind, EdgeSource, InputLine, Level, OutputLine};
pub use pwm::{PwmChannel, PwmGenerator, PwmTiming};
pub use shutdown::{CancelToken, cancel_on_signals};
pub use step_scheduler::StepScheduler;

pub use embassy_time::{Duration, Instant};

/// Install the `env_logger` backend, defaulting to `info`
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
