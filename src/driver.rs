//! Driving loop of the PWM program
//!
//! Polls the mode-select button, cycles the animation on each press and
//! lets the [`Animator`] publish duty cycles at its own pace.

use embassy_time::{Duration, Instant};
use log::{info, warn};

use crate::animation::AnimationId;
use crate::animator::Animator;
use crate::button::ButtonEdge;
use crate::config::DriverConfig;
use crate::gpio::InputLine;
use crate::pwm::sleep;
use crate::shutdown::CancelToken;

/// Button-driven animation loop
pub struct ModeDriver<B: InputLine> {
    button: B,
    edge: ButtonEdge,
    animator: Animator,
    poll_interval: Duration,
    read_failing: bool,
}

impl<B: InputLine> ModeDriver<B> {
    pub fn new(button: B, animator: Animator, config: &DriverConfig) -> Self {
        Self {
            button,
            edge: ButtonEdge::new(),
            animator,
            poll_interval: config.poll_interval,
            read_failing: false,
        }
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// One loop iteration at `now`
    ///
    /// Returns the new mode when the button was pressed. A failed button
    /// read counts as "not pressed" and is logged once per failure streak.
    pub fn poll(&mut self, now: Instant) -> Option<AnimationId> {
        let mut selected = None;

        match self.button.read() {
            Ok(level) => {
                if self.read_failing {
                    self.read_failing = false;
                    info!("button line {} readable again", self.button.offset());
                }
                if self.edge.update(level) {
                    let mode = self.animator.cycle_mode();
                    info!("Mode: {}", self.animator.mode_label());
                    selected = Some(mode);
                }
            }
            Err(err) => {
                if !self.read_failing {
                    self.read_failing = true;
                    warn!("{}", err);
                }
            }
        }

        self.animator.tick(now);
        selected
    }

    /// Poll until `cancel` is triggered
    pub fn run(&mut self, cancel: &CancelToken) {
        while !cancel.is_cancelled() {
            self.poll(Instant::now());
            sleep(self.poll_interval);
        }
    }
}
