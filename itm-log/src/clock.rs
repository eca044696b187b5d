//! Abstractions for the timestamp clock.
//!
//! The main purpose of this module is to provide [`Clock`], the startup-time description of where timestamps come
//! from.
//! A firmware image either has no scheduler at all ([`Clock::bare_metal`]) or reads the tick counter of a scheduler
//! through a [`TickSource`] ([`Clock::scheduler`]).
//! The choice is made once when the logger is built, so the same source builds for bare-metal and scheduler targets.
//!
//! # Example
//!
//! ```rust
//! use itm_log::{Clock, ClockReading, TickSource};
//!
//! #[derive(Debug)]
//! struct FixedTicks;
//!
//! impl TickSource for FixedTicks {
//!     const NAME: &'static str = "fixed";
//!
//!     fn is_running() -> bool {
//!         true
//!     }
//!
//!     fn tick_count() -> u32 {
//!         3_661_000
//!     }
//! }
//!
//! assert_eq!(Clock::bare_metal().read(), ClockReading::Unconfigured);
//! assert_eq!(Clock::scheduler::<FixedTicks>().read(), ClockReading::Running(3_661_000));
//! assert_eq!(
//!     Clock::scheduler::<FixedTicks>().timestamp().to_string(),
//!     "01:01:01:000: ",
//! );
//! ```

use core::fmt;

use crate::timestamp::Timestamp;

/// `TickSource` is used to read a scheduler's tick counter in a platform-agnostic manner.
///
/// The counter is assumed to advance 1000 times per second and to wrap at [`u32::MAX`].
pub trait TickSource {
    /// Human readable name of the tick API, used in [`Debug`][fmt::Debug] output.
    const NAME: &'static str;

    /// Returns whether the scheduler has started and its tick counter is advancing.
    fn is_running() -> bool;

    /// Reads the current tick counter.
    fn tick_count() -> u32;
}

/// The result of consulting a [`Clock`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ClockReading {
    /// No scheduler is part of this build.
    Unconfigured,
    /// A scheduler is configured but has not started yet.
    NotStarted,
    /// The scheduler is running and its tick counter read this value.
    Running(u32),
}

impl ClockReading {
    /// Converts the reading into the [`Timestamp`] emitted on the trace interface.
    ///
    /// Both non-running readings produce [`Timestamp::PLACEHOLDER`].
    pub const fn timestamp(self) -> Timestamp {
        match self {
            ClockReading::Unconfigured | ClockReading::NotStarted => Timestamp::PLACEHOLDER,
            ClockReading::Running(ticks) => Timestamp::from_ticks(ticks),
        }
    }
}

/// Where timestamps come from, resolved once at startup.
#[derive(Copy, Clone)]
pub struct Clock {
    inner: ClockInner,
}

#[derive(Copy, Clone)]
enum ClockInner {
    BareMetal,
    Scheduler {
        name: &'static str,
        is_running: fn() -> bool,
        tick_count: fn() -> u32,
    },
}

impl Clock {
    /// A clock for builds without a scheduler, every timestamp is [`Timestamp::PLACEHOLDER`].
    pub const fn bare_metal() -> Self {
        Self {
            inner: ClockInner::BareMetal,
        }
    }

    /// A clock reading the tick counter of `T`.
    pub const fn scheduler<T>() -> Self
    where
        T: TickSource,
    {
        Self::from_fns(T::NAME, T::is_running, T::tick_count)
    }

    /// A clock reading the tick counter through plain function pointers.
    ///
    /// This is useful when the tick accessor is provided by C code or a board support package rather than a
    /// [`TickSource`] implementation.
    ///
    /// ```rust
    /// use itm_log::{Clock, ClockReading};
    ///
    /// let clock = Clock::from_fns("board", || false, || 0);
    /// assert_eq!(clock.read(), ClockReading::NotStarted);
    /// ```
    pub const fn from_fns(
        name: &'static str,
        is_running: fn() -> bool,
        tick_count: fn() -> u32,
    ) -> Self {
        Self {
            inner: ClockInner::Scheduler {
                name,
                is_running,
                tick_count,
            },
        }
    }

    /// Returns whether this clock was configured with a scheduler tick source.
    pub const fn has_scheduler(&self) -> bool {
        matches!(self.inner, ClockInner::Scheduler { .. })
    }

    /// Consults the clock.
    pub fn read(&self) -> ClockReading {
        match self.inner {
            ClockInner::BareMetal => ClockReading::Unconfigured,
            ClockInner::Scheduler {
                is_running,
                tick_count,
                ..
            } => {
                if is_running() {
                    ClockReading::Running(tick_count())
                } else {
                    ClockReading::NotStarted
                }
            }
        }
    }

    /// Reads the clock and formats the result as a [`Timestamp`].
    pub fn timestamp(&self) -> Timestamp {
        self.read().timestamp()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            ClockInner::BareMetal => f.write_str("Clock::BareMetal"),
            ClockInner::Scheduler { name, .. } => write!(f, "Clock::Scheduler({name})"),
        }
    }
}
