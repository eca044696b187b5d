//! FreeRTOS tick sources for `itm-log`.
//!
//! Two revisions of the scheduler tick API are supported, picking one is a type choice fixed per build:
//!
//! - [`KernelTickCount`] reads the raw kernel tick counter,
//! - [`TickCountDuration`] reads the tick count as a kernel duration in milliseconds.
//!
//! With the usual `configTICK_RATE_HZ` of 1000 both report the same value.
//! Before the scheduler starts both report that they are not running, so the logger emits the placeholder timestamp.
//!
//! # Examples
//!
//! ```rust,no_run
//! use itm_log::Clock;
//! use itm_log_freertos::TickCountDuration;
//! use itm_log_std::StdoutSink;
//!
//! itm_log::build()
//!     .sink(&StdoutSink)
//!     .clock(Clock::scheduler::<TickCountDuration>())
//!     .set_global()
//!     .unwrap();
//!
//! itm_log::event("before scheduler start");
//! veecle_freertos_integration::scheduler::start_scheduler();
//! ```

#![cfg_attr(not(test), no_std)]

pub mod time;

pub use self::time::{KernelTickCount, TickCountDuration, scheduler_started};
