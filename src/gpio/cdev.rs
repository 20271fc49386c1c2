//! Linux GPIO character device backend
//!
//! Wraps `gpiocdev` requests behind the [`OutputLine`], [`InputLine`] and
//! [`EdgeSource`] traits. Every request releases its line when dropped, and
//! the chip handle closes on drop, so early returns never leak a line.

use std::path::{Path, PathBuf};

use embassy_time::Duration;
use gpiocdev::Request;
use gpiocdev::line::{self, EdgeDetection, Value};

use super::{Bias, EdgeEvent, EdgeKind, EdgeSource, InputLine, Level, OutputLine};
use crate::error::GpioError;

/// Chip metadata as reported by the kernel
#[derive(Debug, Clone)]
pub struct ChipInfo {
    pub name: String,
    pub label: String,
    pub num_lines: u32,
}

/// Metadata of a single line
#[derive(Debug, Clone)]
pub struct LineInfo {
    pub offset: u32,
    pub name: String,
    pub consumer: String,
    pub used: bool,
}

/// Open GPIO chip
pub struct Chip {
    name: String,
    path: PathBuf,
    inner: gpiocdev::chip::Chip,
    info: ChipInfo,
}

impl Chip {
    /// Open a chip by name (`gpiochip4`) or by path (`/dev/gpiochip4`)
    pub fn open(name: &str) -> Result<Self, GpioError> {
        let path = chip_path(name);
        let open_error = |source: gpiocdev::Error| GpioError::OpenChip {
            chip: name.to_owned(),
            source: source.into(),
        };

        let inner = gpiocdev::chip::Chip::from_path(&path).map_err(open_error)?;
        let info = inner.info().map_err(open_error)?;
        log::debug!(
            "opened {} ({}) with {} lines",
            info.name,
            info.label,
            info.num_lines
        );

        Ok(Self {
            name: name.to_owned(),
            path,
            inner,
            info: ChipInfo {
                name: info.name,
                label: info.label,
                num_lines: info.num_lines,
            },
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self) -> &ChipInfo {
        &self.info
    }

    /// Look up a line, failing if the chip does not have it
    pub fn line(&self, offset: u32) -> Result<LineInfo, GpioError> {
        let unavailable = || GpioError::LineUnavailable {
            chip: self.name.clone(),
            offset,
        };
        if offset >= self.info.num_lines {
            return Err(unavailable());
        }

        let info = self.inner.line_info(offset).map_err(|_| unavailable())?;
        Ok(LineInfo {
            offset,
            name: info.name,
            consumer: info.consumer,
            used: info.used,
        })
    }

    /// Request a line as an output driven to `initial`
    pub fn request_output(
        &self,
        offset: u32,
        consumer: &str,
        initial: Level,
    ) -> Result<CdevOutput, GpioError> {
        self.line(offset)?;
        let request = Request::builder()
            .on_chip(self.path.as_path())
            .with_consumer(consumer)
            .with_line(offset)
            .as_output(to_value(initial))
            .request()
            .map_err(|source| GpioError::Request {
                offset,
                direction: "output",
                source: source.into(),
            })?;

        Ok(CdevOutput { request, offset })
    }

    /// Request a line as an input with the given bias
    pub fn request_input(
        &self,
        offset: u32,
        consumer: &str,
        bias: Bias,
    ) -> Result<CdevInput, GpioError> {
        self.line(offset)?;
        let request = Request::builder()
            .on_chip(self.path.as_path())
            .with_consumer(consumer)
            .with_line(offset)
            .as_input()
            .with_bias(to_bias(bias))
            .request()
            .map_err(|source| GpioError::Request {
                offset,
                direction: "input",
                source: source.into(),
            })?;

        Ok(CdevInput { request, offset })
    }

    /// Request several inputs with falling edge detection
    ///
    /// With a pull-up bias a falling edge is a button press.
    pub fn request_falling_edges(
        &self,
        offsets: &[u32],
        consumer: &str,
        bias: Bias,
    ) -> Result<CdevEdges, GpioError> {
        for &offset in offsets {
            self.line(offset)?;
        }
        let request = Request::builder()
            .on_chip(self.path.as_path())
            .with_consumer(consumer)
            .with_lines(offsets)
            .as_input()
            .with_bias(to_bias(bias))
            .with_edge_detection(EdgeDetection::FallingEdge)
            .request()
            .map_err(|source| GpioError::Request {
                offset: offsets.first().copied().unwrap_or_default(),
                direction: "falling edge input",
                source: source.into(),
            })?;

        Ok(CdevEdges { request })
    }
}

/// Output line requested from a [`Chip`]
pub struct CdevOutput {
    request: Request,
    offset: u32,
}

impl OutputLine for CdevOutput {
    fn offset(&self) -> u32 {
        self.offset
    }

    fn write(&mut self, level: Level) -> Result<(), GpioError> {
        self.request
            .set_value(self.offset, to_value(level))
            .map_err(|source| GpioError::Write {
                offset: self.offset,
                source: source.into(),
            })
    }
}

/// Input line requested from a [`Chip`]
pub struct CdevInput {
    request: Request,
    offset: u32,
}

impl InputLine for CdevInput {
    fn offset(&self) -> u32 {
        self.offset
    }

    fn read(&mut self) -> Result<Level, GpioError> {
        self.request
            .value(self.offset)
            .map(from_value)
            .map_err(|source| GpioError::Read {
                offset: self.offset,
                source: source.into(),
            })
    }
}

/// Input lines requested with edge detection
pub struct CdevEdges {
    request: Request,
}

impl EdgeSource for CdevEdges {
    fn wait_edge(&mut self, timeout: Duration) -> Result<Option<EdgeEvent>, GpioError> {
        let timeout = std::time::Duration::from_micros(timeout.as_micros());
        let ready = self
            .request
            .wait_edge_event(timeout)
            .map_err(|source| GpioError::EdgeWait(source.into()))?;
        if !ready {
            return Ok(None);
        }

        let event = self
            .request
            .read_edge_event()
            .map_err(|source| GpioError::EdgeWait(source.into()))?;
        let kind = match event.kind {
            line::EdgeKind::Rising => EdgeKind::Rising,
            line::EdgeKind::Falling => EdgeKind::Falling,
        };

        Ok(Some(EdgeEvent {
            offset: event.offset,
            kind,
            timestamp: core::time::Duration::from_nanos(event.timestamp_ns),
        }))
    }
}

fn chip_path(name: &str) -> PathBuf {
    if name.contains('/') {
        PathBuf::from(name)
    } else {
        Path::new("/dev").join(name)
    }
}

const fn to_value(level: Level) -> Value {
    match level {
        Level::Low => Value::Inactive,
        Level::High => Value::Active,
    }
}

const fn from_value(value: Value) -> Level {
    match value {
        Value::Inactive => Level::Low,
        Value::Active => Level::High,
    }
}

const fn to_bias(bias: Bias) -> line::Bias {
    match bias {
        Bias::Disabled => line::Bias::Disabled,
        Bias::PullUp => line::Bias::PullUp,
        Bias::PullDown => line::Bias::PullDown,
    }
}
