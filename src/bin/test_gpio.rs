//! GPIO access check, no hardware required
//!
//! Opens the chip and probes the header lines to confirm the character
//! device is available to this user.

use std::process::ExitCode;

use log::{error, info, warn};

use gpio_softpwm::gpio::cdev::Chip;
use gpio_softpwm::{BoardConfig, init_logging};

const PROBED_LINES: core::ops::RangeInclusive<u32> = 17..=27;

fn main() -> ExitCode {
    init_logging();

    let board = BoardConfig::default();
    info!("testing GPIO access on {}", board.chip);

    let chip = match Chip::open(board.chip) {
        Ok(chip) => chip,
        Err(err) => {
            error!("cannot open {}: {:#}", board.chip, anyhow::Error::from(err));
            error!("make sure this is a Raspberry Pi 5 and you may access /dev/gpiochip*");
            return ExitCode::FAILURE;
        }
    };

    let info = chip.info();
    info!(
        "chip opened: {} ({}) at {}",
        info.name,
        info.label,
        chip.path().display()
    );
    info!("number of lines: {}", info.num_lines);

    for offset in PROBED_LINES {
        match chip.line(offset) {
            Ok(line) if line.used => {
                info!("  GPIO{}: accessible (in use by {:?})", offset, line.consumer);
            }
            Ok(_) => info!("  GPIO{}: accessible", offset),
            Err(_) => warn!("  GPIO{}: not accessible", offset),
        }
    }

    info!("GPIO test completed successfully");
    ExitCode::SUCCESS
}
