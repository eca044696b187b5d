//! Hosted platform support for `itm-log`.
//!
//! This provides sinks and a tick source built on the std library, for running firmware logic on a development host
//! and for capturing output in tests.

#![forbid(unsafe_code)]

pub mod sink;
pub mod time;

pub use self::sink::{MemorySink, StdoutSink};
pub use self::time::Uptime;
