//! Interrupt-style edge event detection
//!
//! Both buttons are requested with falling edge detection, so the kernel
//! reports each press with a timestamp instead of the program polling.
//! Every press toggles the LED.

use anyhow::Context;
use log::{error, info};

use gpio_softpwm::events::PressMonitor;
use gpio_softpwm::gpio::cdev::Chip;
use gpio_softpwm::{
    Bias, BoardConfig, CancelToken, Duration, Level, cancel_on_signals, init_logging,
};

const CONSUMER: &str = "gpio-interrupts";
/// Bounds how long shutdown can go unnoticed
const EVENT_TIMEOUT: Duration = Duration::from_secs(1);

fn main() -> anyhow::Result<()> {
    init_logging();

    let board = BoardConfig::default();
    let cancel = CancelToken::new();
    cancel_on_signals(&cancel);

    let chip = Chip::open(board.chip).context("GPIO initialization failed")?;
    let led = chip
        .request_output(board.led, CONSUMER, Level::Low)
        .context("failed to request LED output")?;
    let buttons = chip
        .request_falling_edges(&[board.button, board.second_button], CONSUMER, Bias::PullUp)
        .context("failed to request button events")?;

    info!(
        "Button 1: GPIO{}, Button 2: GPIO{}. Ctrl+C to exit",
        board.button, board.second_button
    );

    let mut monitor = PressMonitor::new(buttons, led);
    while !cancel.is_cancelled() {
        match monitor.poll(EVENT_TIMEOUT) {
            Ok(Some(press)) => info!(
                "[{}.{:06}] {} pressed! Count: {}",
                press.timestamp.as_secs(),
                press.timestamp.subsec_micros(),
                button_name(&board, press.offset),
                press.count
            ),
            Ok(None) => {}
            Err(err) => {
                error!("event wait error: {:#}", anyhow::Error::from(err));
                break;
            }
        }
    }

    let tally = monitor.shutdown().context("failed to switch LED off")?;
    info!("Button 1 pressed: {} times", tally.count(board.button));
    info!("Button 2 pressed: {} times", tally.count(board.second_button));
    Ok(())
}

fn button_name(board: &BoardConfig, offset: u32) -> &'static str {
    if offset == board.button {
        "Button 1"
    } else if offset == board.second_button {
        "Button 2"
    } else {
        "Unknown button"
    }
}
