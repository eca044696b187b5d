//! Time related system utilities.

pub use itm_log::TickSource;

/// Value of `xTaskGetSchedulerState` before `vTaskStartScheduler` ran (`taskSCHEDULER_NOT_STARTED`).
const SCHEDULER_NOT_STARTED: i64 = 1;

/// Returns whether the FreeRTOS scheduler has been started.
///
/// A suspended scheduler still counts as started, its tick counter keeps its value.
pub fn scheduler_started() -> bool {
    // SAFETY: `xTaskGetSchedulerState` only reads kernel state and may be called from any task or before the
    // scheduler starts.
    let state = unsafe { veecle_freertos_sys::bindings::xTaskGetSchedulerState() };
    i64::from(state) != SCHEDULER_NOT_STARTED
}

/// Implements the [`TickSource`] trait with the raw kernel tick counter (`xTaskGetTickCount`).
///
/// Assumes a tick rate of 1000 Hz.
#[derive(Debug)]
pub struct KernelTickCount;

impl TickSource for KernelTickCount {
    const NAME: &'static str = "freertos-kernel-tick-count";

    fn is_running() -> bool {
        scheduler_started()
    }

    fn tick_count() -> u32 {
        // SAFETY: `xTaskGetTickCount` only reads the tick counter and may be called from any task.
        let ticks = unsafe { veecle_freertos_sys::bindings::xTaskGetTickCount() };
        // Truncating a 64-bit `TickType_t` keeps the wrapping behavior of a 32-bit counter.
        ticks as u32
    }
}

/// Implements the [`TickSource`] trait with the tick count converted to milliseconds by the kernel integration.
#[derive(Debug)]
pub struct TickCountDuration;

impl TickSource for TickCountDuration {
    const NAME: &'static str = "freertos-tick-count-duration";

    fn is_running() -> bool {
        scheduler_started()
    }

    fn tick_count() -> u32 {
        veecle_freertos_integration::scheduler::get_tick_count_duration().ms() as u32
    }
}
