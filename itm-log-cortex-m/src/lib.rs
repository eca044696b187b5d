//! ARM Cortex-M Instrumentation Trace Macrocell (ITM) support for `itm-log`.
//!
//! The ITM is available on Cortex-M3 and higher cores (M4, M7, M33, M55), not on M0 and M0+.
//! Enabling the ITM, the trace port and the stimulus ports is left to the debugger or the board setup code; this crate
//! only writes to a stimulus port.
//!
//! # Examples
//!
//! ```rust,no_run
//! use itm_log::Clock;
//! use itm_log_cortex_m::ItmSink;
//!
//! static ITM: ItmSink = ItmSink::PORT0;
//!
//! itm_log::build()
//!     .sink(&ITM)
//!     .clock(Clock::bare_metal())
//!     .set_global()
//!     .unwrap();
//!
//! itm_log::event("reset handler done");
//! ```

#![cfg_attr(not(test), no_std)]

use cortex_m::peripheral::ITM;
use cortex_m::peripheral::itm::RegisterBlock;
use itm_log::TraceSink;

/// Number of stimulus ports of the ITM.
pub const STIMULUS_PORTS: usize = 256;

/// Bit 0 of the trace control register, set when the ITM is enabled.
const TCR_ITMENA: u32 = 1 << 0;

/// Implements the [`TraceSink`] trait by writing to an ITM stimulus port.
///
/// Behaves like CMSIS `ITM_SendChar`:
///
/// - if the ITM or the stimulus port is disabled, the character is dropped silently,
/// - otherwise the call spins until the port FIFO accepts the character.
///
/// The sink can be used from any execution context.
/// Writes from different contexts are not serialized, so their characters may interleave.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ItmSink {
    port: u8,
}

impl ItmSink {
    /// Stimulus port 0, the port debuggers display by default.
    pub const PORT0: ItmSink = ItmSink::new(0);

    /// Creates a sink for the stimulus port `port`.
    pub const fn new(port: u8) -> Self {
        Self { port }
    }

    /// Returns the stimulus port this sink writes to.
    pub const fn port(&self) -> u8 {
        self.port
    }

    /// Returns whether the ITM and this sink's stimulus port are both enabled.
    pub fn is_enabled(&self) -> bool {
        // SAFETY: `ITM::PTR` points at the memory-mapped ITM.
        unsafe { port_enabled(ITM::PTR, self.port) }
    }
}

impl TraceSink for ItmSink {
    fn send_char(&self, byte: u8) {
        // SAFETY: `ITM::PTR` points at the memory-mapped ITM.
        unsafe { send_to(ITM::PTR, self.port, byte) }
    }
}

/// Reads TCR.ITMENA and the TER bit of `port`.
///
/// # Safety
///
/// `itm` must point at a readable ITM register block.
unsafe fn port_enabled(itm: *const RegisterBlock, port: u8) -> bool {
    let (register, mask) = enable_bit(port);
    // SAFETY: the caller guarantees `itm` is valid, reading the control registers has no side effects.
    unsafe { (*itm).tcr.read() & TCR_ITMENA != 0 && (*itm).ter[register].read() & mask != 0 }
}

/// Writes `byte` to stimulus `port` of `itm`, dropping it if the port is disabled.
///
/// # Safety
///
/// `itm` must point at a valid ITM register block.
unsafe fn send_to(itm: *mut RegisterBlock, port: u8, byte: u8) {
    // SAFETY: forwarded from the caller.
    let enabled = unsafe { port_enabled(itm, port) };
    if !enabled {
        return;
    }

    // SAFETY: the caller guarantees `itm` is valid. Only this port's stimulus register is borrowed, and only until
    // the store below. A context preempting us on the same port interleaves its characters with ours.
    let stim = unsafe { &mut (*itm).stim[usize::from(port)] };
    while !stim.is_fifo_ready() {}
    stim.write_u8(byte);
}

/// Locates the enable bit of stimulus `port` within the trace enable registers (`TER0..TER7`).
const fn enable_bit(port: u8) -> (usize, u32) {
    ((port / 32) as usize, 1 << (port % 32))
}
