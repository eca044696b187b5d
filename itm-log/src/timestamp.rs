//! Formatting of tick counts as `HH:MM:SS:MMM: ` timestamps.
//!
//! Ticks are assumed to advance 1000 times per second.
//! There are no calendar semantics: hours keep counting past 24 and the value wraps together with the 32-bit tick
//! counter, after about 49.7 days.

use core::fmt::{self, Write};

/// Capacity in bytes of a rendered [`Timestamp`].
///
/// The common case `HH:MM:SS:MMM: ` is 14 bytes, the largest 32-bit tick count needs four hour digits
/// (`1193:02:47:295: `, 16 bytes).
pub const TIMESTAMP_CAPACITY: usize = 18;

/// A rendered [`Timestamp`], returned by value.
pub type TimestampText = heapless::String<TIMESTAMP_CAPACITY>;

const TICKS_PER_SECOND: u32 = 1_000;
const TICKS_PER_MINUTE: u32 = 60 * TICKS_PER_SECOND;
const TICKS_PER_HOUR: u32 = 60 * TICKS_PER_MINUTE;

/// A point in time since scheduler start, decomposed for display.
///
/// # Examples
///
/// ```rust
/// use itm_log::Timestamp;
///
/// let timestamp = Timestamp::from_ticks(3_661_000);
/// assert_eq!((timestamp.hours(), timestamp.minutes(), timestamp.seconds()), (1, 1, 1));
/// assert_eq!(timestamp.render().as_str(), "01:01:01:000: ");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    hours: u16,
    minutes: u8,
    seconds: u8,
    milliseconds: u16,
}

impl Timestamp {
    /// The timestamp emitted when no running scheduler is available.
    pub const PLACEHOLDER: Timestamp = Timestamp::from_ticks(0);

    /// Decomposes a tick count into hours, minutes, seconds and milliseconds.
    pub const fn from_ticks(ticks: u32) -> Self {
        Self {
            // `u32::MAX / TICKS_PER_HOUR` is 1193.
            hours: (ticks / TICKS_PER_HOUR) as u16,
            minutes: ((ticks / TICKS_PER_MINUTE) % 60) as u8,
            seconds: ((ticks / TICKS_PER_SECOND) % 60) as u8,
            milliseconds: (ticks % TICKS_PER_SECOND) as u16,
        }
    }

    /// Whole hours, not wrapped at a day boundary.
    pub const fn hours(&self) -> u16 {
        self.hours
    }

    /// Minutes within the hour.
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds within the minute.
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Milliseconds within the second.
    pub const fn milliseconds(&self) -> u16 {
        self.milliseconds
    }

    /// Renders the timestamp into a fixed-capacity string.
    pub fn render(&self) -> TimestampText {
        let mut text = TimestampText::new();
        // Cannot overflow, the longest rendering is 16 bytes.
        let _ = write!(text, "{self}");
        text
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:03}: ",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}
