//! Construction-time configuration
//!
//! Defaults match a Raspberry Pi 5 header: the 40-pin lines live on
//! `gpiochip4`, LED on GPIO17 (pin 11), buttons on GPIO27 (pin 13) and
//! GPIO22 (pin 15), wired to ground with the internal pull-up enabled.

use embassy_time::Duration;

use crate::duty::DutyCycle;

/// Chip and line assignment
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    /// Chip name or path
    pub chip: &'static str,
    pub led: u32,
    pub button: u32,
    /// Second button used by the edge event program
    pub second_button: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            chip: "gpiochip4",
            led: 17,
            button: 27,
            second_button: 22,
        }
    }
}

/// Software PWM channel configuration
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// PWM frequency in Hz, fixes the period
    pub frequency_hz: u32,
    pub initial_duty: DutyCycle,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 1_000,
            initial_duty: DutyCycle::OFF,
        }
    }
}

/// Tuning knobs of the animation patterns
#[derive(Debug, Clone, Copy)]
pub struct AnimationConfig {
    /// Level held by the manual pattern
    pub manual_level: DutyCycle,
    /// Brightness change per breathing step, in percent
    pub breathing_step: u8,
    /// Phase advance per sine step, in radians
    pub sine_increment: f32,
    /// Strobe flips after this many steps
    pub strobe_toggle_every: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            manual_level: DutyCycle::clamped(50),
            breathing_step: 2,
            sine_increment: 0.1,
            strobe_toggle_every: 5,
        }
    }
}

/// Pacing of the driving loop
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    /// Delay between mode-select button samples
    pub poll_interval: Duration,
    /// Time between animation steps
    pub animation_interval: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1),
            animation_interval: Duration::from_millis(10),
        }
    }
}
