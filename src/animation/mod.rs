//! Animation system with compile-time known pattern variants
//!
//! Every pattern implements [`Animation`]: each call computes the next duty
//! cycle and advances the pattern's own state. [`AnimationSet`] keeps one
//! instance of each pattern, so switching modes resumes a pattern exactly
//! where it was left.

mod breathing;
mod manual;
mod sine_wave;
mod strobe;

pub use breathing::Breathing;
pub use manual::ManualLevel;
pub use sine_wave::SineWave;
pub use strobe::Strobe;

use crate::config::AnimationConfig;
use crate::duty::DutyCycle;

const ANIMATION_NAME_MANUAL: &str = "manual";
const ANIMATION_NAME_BREATHING: &str = "breathing";
const ANIMATION_NAME_SINE_WAVE: &str = "sine_wave";
const ANIMATION_NAME_STROBE: &str = "strobe";

const ANIMATION_ID_MANUAL: u8 = 0;
const ANIMATION_ID_BREATHING: u8 = 1;
const ANIMATION_ID_SINE_WAVE: u8 = 2;
const ANIMATION_ID_STROBE: u8 = 3;

pub trait Animation {
    /// Compute the duty cycle for this step and advance
    fn next_duty(&mut self) -> DutyCycle;

    /// Return to the initial state
    fn reset(&mut self) {}
}

/// Known animation modes, in button cycling order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AnimationId {
    #[default]
    Manual = ANIMATION_ID_MANUAL,
    Breathing = ANIMATION_ID_BREATHING,
    SineWave = ANIMATION_ID_SINE_WAVE,
    Strobe = ANIMATION_ID_STROBE,
}

impl AnimationId {
    pub const ALL: [Self; 4] = [Self::Manual, Self::Breathing, Self::SineWave, Self::Strobe];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_MANUAL => Self::Manual,
            ANIMATION_ID_BREATHING => Self::Breathing,
            ANIMATION_ID_SINE_WAVE => Self::SineWave,
            ANIMATION_ID_STROBE => Self::Strobe,
            _ => return None,
        })
    }

    /// Next mode in cycling order, wrapping back to manual
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Manual => Self::Breathing,
            Self::Breathing => Self::SineWave,
            Self::SineWave => Self::Strobe,
            Self::Strobe => Self::Manual,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => ANIMATION_NAME_MANUAL,
            Self::Breathing => ANIMATION_NAME_BREATHING,
            Self::SineWave => ANIMATION_NAME_SINE_WAVE,
            Self::Strobe => ANIMATION_NAME_STROBE,
        }
    }

    /// Human readable mode name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Breathing => "Breathing",
            Self::SineWave => "Sine Wave",
            Self::Strobe => "Strobe",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_MANUAL => Some(Self::Manual),
            ANIMATION_NAME_BREATHING => Some(Self::Breathing),
            ANIMATION_NAME_SINE_WAVE => Some(Self::SineWave),
            ANIMATION_NAME_STROBE => Some(Self::Strobe),
            _ => None,
        }
    }
}

/// One persisted instance of every pattern
#[derive(Debug, Clone)]
pub struct AnimationSet {
    manual: ManualLevel,
    breathing: Breathing,
    sine_wave: SineWave,
    strobe: Strobe,
}

impl AnimationSet {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            manual: ManualLevel::new(config.manual_level),
            breathing: Breathing::new(config.breathing_step),
            sine_wave: SineWave::new(config.sine_increment),
            strobe: Strobe::new(config.strobe_toggle_every),
        }
    }

    /// Step the pattern selected by `id`
    pub fn step(&mut self, id: AnimationId) -> DutyCycle {
        match id {
            AnimationId::Manual => self.manual.next_duty(),
            AnimationId::Breathing => self.breathing.next_duty(),
            AnimationId::SineWave => self.sine_wave.next_duty(),
            AnimationId::Strobe => self.strobe.next_duty(),
        }
    }

    /// Reset the pattern selected by `id`
    pub fn reset(&mut self, id: AnimationId) {
        match id {
            AnimationId::Manual => Animation::reset(&mut self.manual),
            AnimationId::Breathing => Animation::reset(&mut self.breathing),
            AnimationId::SineWave => Animation::reset(&mut self.sine_wave),
            AnimationId::Strobe => Animation::reset(&mut self.strobe),
        }
    }

    pub fn manual(&self) -> &ManualLevel {
        &self.manual
    }

    pub fn manual_mut(&mut self) -> &mut ManualLevel {
        &mut self.manual
    }
}

impl Default for AnimationSet {
    fn default() -> Self {
        Self::new(&AnimationConfig::default())
    }
}
