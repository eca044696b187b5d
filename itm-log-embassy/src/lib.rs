//! Embassy tick source for `itm-log`.
//!
//! This requires binaries to depend on the [`embassy-time`](https://docs.rs/embassy-time/latest/embassy_time/) crate
//! with a time driver.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

pub mod time;

pub use self::time::EmbassyTicks;
