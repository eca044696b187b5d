//! # `itm-log`
//!
//! A minimal logging shim for microcontroller firmware.
//!
//! Messages are written to a trace interface one character at a time, optionally prefixed with a `HH:MM:SS:MMM: `
//! timestamp and a severity tag.
//! The crate is `no_std`, performs no allocation and never buffers: every operation runs to completion on the calling
//! context.
//!
//! The platform is described by two values chosen once at startup:
//!
//! - a [`TraceSink`], the character-emission primitive (for example the ITM stimulus port, see `itm-log-cortex-m`),
//! - a [`Clock`], which is either [`Clock::bare_metal`] or a scheduler tick source (see `itm-log-freertos` and
//!   `itm-log-embassy`).
//!
//! ## Basic Usage
//!
//! ```rust
//! use itm_log::{Clock, Logger};
//! use itm_log_std::MemorySink;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(&sink, Clock::bare_metal());
//!
//! logger.print("booting");
//! logger.error("sensor not found");
//! logger.event("calibration done");
//!
//! assert_eq!(
//!     sink.contents(),
//!     "booting\n00:00:00:000: ERROR: sensor not found\n00:00:00:000: Event: calibration done\n",
//! );
//! ```
//!
//! ## Global Logger
//!
//! Firmware usually installs one logger for the whole program and uses the free functions or macros:
//!
//! ```rust
//! use itm_log::Clock;
//! use itm_log_std::{StdoutSink, Uptime};
//!
//! itm_log::build()
//!     .sink(&StdoutSink)
//!     .clock(Clock::scheduler::<Uptime>())
//!     .set_global()
//!     .unwrap();
//!
//! itm_log::event("started");
//! itm_log::itm_error!("bad frame {:#04x}", 0x7e);
//! ```

#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate std;

pub mod clock;
mod facade;
mod global;
mod logger;
mod macros;
pub mod sink;
pub mod timestamp;

pub use clock::{Clock, ClockReading, TickSource};
pub use facade::init_log_facade;
pub use global::{
    Builder, GlobalLogger, SetGlobalError, build, error, error_fmt, event, event_fmt, get_logger,
    print, print_fmt,
};
pub use logger::{LINE_TERMINATOR, Logger, Tag};
pub use sink::{SinkWriter, TraceSink};
pub use timestamp::{TIMESTAMP_CAPACITY, Timestamp, TimestampText};
