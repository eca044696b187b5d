//! Global logger state and initialization.

use core::fmt;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::clock::Clock;
use crate::logger::Logger;
use crate::sink::TraceSink;

/// The logger type stored globally.
pub type GlobalLogger = Logger<&'static (dyn TraceSink + Sync)>;

/// Sink used before a global logger has been set, drops every character.
#[derive(Debug)]
struct NopSink;

impl TraceSink for NopSink {
    fn send_char(&self, _: u8) {}

    fn send_bytes(&self, _: &[u8]) {}
}

static NO_SINK: NopSink = NopSink;

static NO_LOGGER: GlobalLogger = Logger::new(&NO_SINK as _, Clock::bare_metal());

/// The `GLOBAL_LOGGER` static holds the global logger instance. It is protected by the `GLOBAL_INIT` static which
/// determines whether `GLOBAL_LOGGER` has been initialized.
static mut GLOBAL_LOGGER: GlobalLogger = Logger::new(&NO_SINK as _, Clock::bare_metal());

static GLOBAL_INIT: AtomicUsize = AtomicUsize::new(0);

// There are three different states that we care about:
// - the logger is uninitialized
// - the logger is initializing (`set_global` has been called but `GLOBAL_LOGGER` hasn't been set yet)
// - the logger is active
const UNINITIALIZED: usize = 0;
const INITIALIZING: usize = 1;
const INITIALIZED: usize = 2;

fn set_logger(logger: GlobalLogger) -> Result<(), SetGlobalError> {
    if GLOBAL_INIT
        .compare_exchange(
            UNINITIALIZED,
            INITIALIZING,
            Ordering::Acquire,
            Ordering::Relaxed,
        )
        .is_ok()
    {
        // SAFETY: this is guarded by the atomic, only the caller that won the exchange writes and nobody reads before
        // `INITIALIZED` is published.
        unsafe { GLOBAL_LOGGER = logger }
        GLOBAL_INIT.store(INITIALIZED, Ordering::Release);
        Ok(())
    } else {
        Err(SetGlobalError(()))
    }
}

/// Returns a reference to the global logger.
///
/// If no logger has been set, a logger that drops everything is returned.
pub fn get_logger() -> &'static GlobalLogger {
    // Acquire memory ordering guarantees that current thread would see any memory writes that happened before store
    // of the value into `GLOBAL_INIT` with memory ordering `Release` or stronger.
    if GLOBAL_INIT.load(Ordering::Acquire) != INITIALIZED {
        &NO_LOGGER
    } else {
        // SAFETY: this is guarded by the atomic, `GLOBAL_LOGGER` is never written after `INITIALIZED`.
        unsafe {
            #[expect(clippy::deref_addrof, reason = "false positive")]
            &*&raw const GLOBAL_LOGGER
        }
    }
}

/// Emits `message` and a line terminator through the global logger.
pub fn print(message: &str) {
    get_logger().print(message);
}

/// Emits a timestamped `"ERROR: "` line through the global logger.
pub fn error(message: &str) {
    get_logger().error(message);
}

/// Emits a timestamped `"Event: "` line through the global logger.
pub fn event(message: &str) {
    get_logger().event(message);
}

/// Formatted [`print`], prefer [`itm_print!`](crate::itm_print).
pub fn print_fmt(args: fmt::Arguments<'_>) {
    get_logger().print_fmt(args);
}

/// Formatted [`error`], prefer [`itm_error!`](crate::itm_error).
pub fn error_fmt(args: fmt::Arguments<'_>) {
    get_logger().error_fmt(args);
}

/// Formatted [`event`], prefer [`itm_event!`](crate::itm_event).
pub fn event_fmt(args: fmt::Arguments<'_>) {
    get_logger().event_fmt(args);
}

/// The type returned by [`set_global`][Builder::set_global] if the logger has already been initialized.
#[derive(Debug)]
pub struct SetGlobalError(());

impl SetGlobalError {
    const MESSAGE: &'static str = "a global logger has already been set";
}

impl fmt::Display for SetGlobalError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(Self::MESSAGE)
    }
}

impl core::error::Error for SetGlobalError {}

/// Type-state markers for builder
mod state {
    #[derive(Debug)]
    pub struct NoSink;
    #[derive(Debug)]
    pub struct WithSink;
    #[derive(Debug)]
    pub struct NoClock;
    #[derive(Debug)]
    pub struct WithClock;
}

/// Builder for initializing the global logger.
///
/// Uses type-state pattern to ensure the sink and the clock are configured at compile time.
/// Created via [`build()`] and finalized with [`set_global()`](Builder::set_global).
#[must_use]
pub struct Builder<SINK, CLOCK> {
    sink: Option<&'static (dyn TraceSink + Sync)>,
    clock: Option<Clock>,
    _sink: PhantomData<SINK>,
    _clock: PhantomData<CLOCK>,
}

/// Creates a new logger builder.
///
/// # Example
///
/// ```rust
/// use itm_log::Clock;
/// use itm_log_std::StdoutSink;
///
/// itm_log::build()
///     .sink(&StdoutSink)
///     .clock(Clock::bare_metal())
///     .set_global()
///     .unwrap();
///
/// assert!(itm_log::build().sink(&StdoutSink).clock(Clock::bare_metal()).set_global().is_err());
/// ```
pub fn build() -> Builder<state::NoSink, state::NoClock> {
    Builder {
        sink: None,
        clock: None,
        _sink: PhantomData,
        _clock: PhantomData,
    }
}

impl<SINK, CLOCK> fmt::Debug for Builder<SINK, CLOCK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `TraceSink` has no `Debug` bound, only report whether one is set.
        f.debug_struct("Builder")
            .field("sink", &self.sink.is_some())
            .field("clock", &self.clock)
            .finish()
    }
}

impl<SINK, CLOCK> Builder<SINK, CLOCK> {
    /// Sets the sink characters are emitted to.
    pub fn sink(self, sink: &'static (dyn TraceSink + Sync)) -> Builder<state::WithSink, CLOCK> {
        Builder {
            sink: Some(sink),
            clock: self.clock,
            _sink: PhantomData,
            _clock: PhantomData,
        }
    }

    /// Sets the clock timestamps are read from.
    pub fn clock(self, clock: Clock) -> Builder<SINK, state::WithClock> {
        Builder {
            sink: self.sink,
            clock: Some(clock),
            _sink: PhantomData,
            _clock: PhantomData,
        }
    }
}

impl<SINK> Builder<SINK, state::NoClock> {
    /// Configures a bare-metal clock.
    ///
    /// Equivalent to `.clock(Clock::bare_metal())`.
    pub fn bare_metal(self) -> Builder<SINK, state::WithClock> {
        self.clock(Clock::bare_metal())
    }
}

impl Builder<state::WithSink, state::WithClock> {
    /// Builds this configuration into a [`Logger`] instance.
    pub fn build(self) -> GlobalLogger {
        match (self.sink, self.clock) {
            (Some(sink), Some(clock)) => Logger::new(sink, clock),
            _ => unreachable!("the type state guarantees sink and clock are set"),
        }
    }

    /// Sets this logger as the global logger instance.
    ///
    /// This can only be called once per program.
    pub fn set_global(self) -> Result<(), SetGlobalError> {
        set_logger(self.build())
    }
}
