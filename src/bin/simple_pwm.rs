//! Minimal software PWM without threads
//!
//! The main thread generates every cycle itself and, every 100 cycles
//! (about 100 ms at 1 kHz), moves the brightness one breathing step.

use anyhow::Context;
use log::info;

use gpio_softpwm::animation::Breathing;
use gpio_softpwm::gpio::cdev::Chip;
use gpio_softpwm::{
    Animation, BoardConfig, CancelToken, DutyCycle, Level, PwmConfig, PwmGenerator, PwmTiming,
    cancel_on_signals, init_logging,
};

const CONSUMER: &str = "simple-pwm";
const CYCLES_PER_STEP: u32 = 100;
const BRIGHTNESS_STEP: u8 = 5;

fn main() -> anyhow::Result<()> {
    init_logging();

    let board = BoardConfig::default();
    let pwm = PwmConfig::default();

    let cancel = CancelToken::new();
    cancel_on_signals(&cancel);

    let chip = Chip::open(board.chip).context("failed to open GPIO chip")?;
    let led = chip
        .request_output(board.led, CONSUMER, Level::Low)
        .context("failed to request LED output")?;
    let timing = PwmTiming::from_frequency(pwm.frequency_hz)?;

    info!("PWM on GPIO{}, press Ctrl+C to exit", board.led);

    let mut generator = PwmGenerator::new(led, timing);
    let mut breathing = Breathing::new(BRIGHTNESS_STEP);
    let mut duty = DutyCycle::OFF;
    let mut cycles = 0;

    while !cancel.is_cancelled() {
        generator.cycle(duty);

        cycles += 1;
        if cycles >= CYCLES_PER_STEP {
            cycles = 0;
            duty = breathing.next_duty();
            info!("Brightness: {}", duty);
        }
    }

    info!("cleaning up");
    generator
        .finish()
        .map_err(|(_, err)| err)
        .context("failed to switch LED off")?;
    Ok(())
}
