//! Button to LED
//!
//! Lights the LED while the button is held. The button pulls the line to
//! ground against the internal pull-up, so pressed reads low.

use anyhow::Context;
use log::{info, warn};

use gpio_softpwm::button::ButtonMirror;
use gpio_softpwm::gpio::cdev::Chip;
use gpio_softpwm::pwm::sleep;
use gpio_softpwm::{
    Bias, BoardConfig, CancelToken, Duration, Level, cancel_on_signals, init_logging,
};

const CONSUMER: &str = "hello-world";
const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> anyhow::Result<()> {
    init_logging();

    let board = BoardConfig::default();
    let cancel = CancelToken::new();
    cancel_on_signals(&cancel);

    let chip = Chip::open(board.chip).context("failed to open GPIO chip")?;
    let led = chip
        .request_output(board.led, CONSUMER, Level::Low)
        .context("failed to request LED output")?;
    let button = chip
        .request_input(board.button, CONSUMER, Bias::PullUp)
        .context("failed to request button input")?;

    info!("LED on GPIO{}, button on GPIO{}", board.led, board.button);
    info!("press the button to light the LED, Ctrl+C to exit");

    let mut mirror = ButtonMirror::new(button, led);
    while !cancel.is_cancelled() {
        match mirror.poll() {
            Ok(Some(Level::Low)) => info!("Button pressed - LED ON"),
            Ok(Some(Level::High)) => info!("Button released - LED OFF"),
            Ok(None) => {}
            Err(err) => warn!("{:#}", anyhow::Error::from(err)),
        }
        sleep(POLL_INTERVAL);
    }

    info!("cleaning up");
    mirror.shutdown().context("failed to switch LED off")?;
    Ok(())
}
