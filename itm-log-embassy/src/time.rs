//! Time related system utilities.

pub use itm_log::TickSource;

/// Implements the [`TickSource`] trait with the milliseconds since boot reported by the embassy time driver.
///
/// The embassy time driver runs from boot, so this source is always running.
/// The 64-bit embassy clock is truncated, wrapping like a 32-bit tick counter.
#[derive(Debug)]
pub struct EmbassyTicks;

impl TickSource for EmbassyTicks {
    const NAME: &'static str = "embassy-time";

    fn is_running() -> bool {
        true
    }

    fn tick_count() -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
