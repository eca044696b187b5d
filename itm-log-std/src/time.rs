//! Tick source for hosted builds.

use std::sync::LazyLock;

use itm_log::TickSource;

/// Implements the [`TickSource`] trait with the milliseconds elapsed since it was first read.
///
/// The count wraps at [`u32::MAX`] like a 32-bit scheduler tick counter.
#[derive(Debug)]
pub struct Uptime;

impl TickSource for Uptime {
    const NAME: &'static str = "uptime";

    fn is_running() -> bool {
        true
    }

    fn tick_count() -> u32 {
        static EPOCH: LazyLock<std::time::Instant> = LazyLock::new(std::time::Instant::now);
        EPOCH.elapsed().as_millis() as u32
    }
}
