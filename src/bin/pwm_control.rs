//! Software PWM LED brightness control
//!
//! Generates PWM on the LED line from a dedicated thread while the main
//! thread polls the mode button and animates the duty cycle.
//! Modes: Manual -> Breathing -> Sine Wave -> Strobe.

use anyhow::Context;
use log::info;

use gpio_softpwm::gpio::cdev::Chip;
use gpio_softpwm::{
    AnimationConfig, Animator, Bias, BoardConfig, CancelToken, DriverConfig, Level, ModeDriver,
    PwmChannel, PwmConfig, cancel_on_signals, init_logging,
};

const CONSUMER: &str = "pwm-control";

fn main() -> anyhow::Result<()> {
    init_logging();

    let board = BoardConfig::default();
    let pwm = PwmConfig::default();
    let animation = AnimationConfig::default();
    let driver = DriverConfig::default();

    let cancel = CancelToken::new();
    cancel_on_signals(&cancel);

    let chip = Chip::open(board.chip).context("failed to open GPIO chip")?;
    let led = chip
        .request_output(board.led, CONSUMER, Level::Low)
        .context("failed to request LED output")?;
    let button = chip
        .request_input(board.button, CONSUMER, Bias::PullUp)
        .context("failed to request button input")?;

    let channel = PwmChannel::start(led, &pwm).context("failed to initialize PWM")?;
    let timing = channel.timing();
    info!(
        "frequency {} Hz, period {} us, resolution 100 steps",
        timing.frequency_hz(),
        timing.period().as_micros()
    );
    info!("press the button to cycle modes, Ctrl+C to exit");

    let animator = Animator::new(channel.duty_handle(), &animation, &driver);
    info!("Mode: {}", animator.mode_label());
    let mut mode_driver = ModeDriver::new(button, animator, &driver);
    mode_driver.run(&cancel);

    info!("cleaning up");
    channel.stop().context("failed to stop PWM")?;
    info!("PWM control terminated");
    Ok(())
}
