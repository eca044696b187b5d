//! Line framing: optional timestamp and tag, message, terminator.

use core::fmt::{self, Write};

use crate::clock::Clock;
use crate::sink::{SinkWriter, TraceSink};
use crate::timestamp::Timestamp;

/// Terminates every emitted line.
pub const LINE_TERMINATOR: u8 = b'\n';

/// The severity tag written between timestamp and message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `"ERROR: "`
    Error,
    /// `"Event: "`
    Event,
}

impl Tag {
    /// The literal text emitted for this tag, including the trailing separator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Error => "ERROR: ",
            Tag::Event => "Event: ",
        }
    }
}

/// Writes lines to a [`TraceSink`], optionally prefixed with a timestamp and a [`Tag`].
///
/// Every operation is synchronous and runs to completion on the calling context.
/// There is no internal state besides the sink and the clock, so calls from several contexts are allowed but their
/// characters may interleave.
///
/// # Examples
///
/// ```rust
/// use itm_log::{Clock, Logger};
/// use itm_log_std::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(&sink, Clock::from_fns("fixed", || true, || 3_661_000));
///
/// logger.event("link up");
/// logger.error_fmt(format_args!("retries: {}", 3));
///
/// assert_eq!(
///     sink.contents(),
///     "01:01:01:000: Event: link up\n01:01:01:000: ERROR: retries: 3\n",
/// );
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Logger<S> {
    sink: S,
    clock: Clock,
}

impl<S> Logger<S> {
    /// Creates a logger writing to `sink` with timestamps from `clock`.
    pub const fn new(sink: S, clock: Clock) -> Self {
        Self { sink, clock }
    }

    /// Returns the sink this logger writes to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the clock this logger reads timestamps from.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Returns the timestamp a tagged message emitted now would carry.
    pub fn timestamp(&self) -> Timestamp {
        self.clock.timestamp()
    }
}

impl<S> Logger<S>
where
    S: TraceSink,
{
    /// Emits `message` followed by a line terminator, without timestamp or tag.
    pub fn print(&self, message: &str) {
        self.sink.send_bytes(message.as_bytes());
        self.sink.send_char(LINE_TERMINATOR);
    }

    /// Emits timestamp, `"ERROR: "`, `message` and a line terminator.
    pub fn error(&self, message: &str) {
        self.tagged(Tag::Error, message);
    }

    /// Emits timestamp, `"Event: "`, `message` and a line terminator.
    pub fn event(&self, message: &str) {
        self.tagged(Tag::Event, message);
    }

    /// Emits timestamp, `tag`, `message` and a line terminator.
    pub fn tagged(&self, tag: Tag, message: &str) {
        self.prefix(tag);
        self.print(message);
    }

    /// Like [`Self::print`], formatting `args` straight into the sink.
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) {
        // `SinkWriter` never fails.
        let _ = SinkWriter(&self.sink).write_fmt(args);
        self.sink.send_char(LINE_TERMINATOR);
    }

    /// Like [`Self::error`], formatting `args` straight into the sink.
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.tagged_fmt(Tag::Error, args);
    }

    /// Like [`Self::event`], formatting `args` straight into the sink.
    pub fn event_fmt(&self, args: fmt::Arguments<'_>) {
        self.tagged_fmt(Tag::Event, args);
    }

    /// Like [`Self::tagged`], formatting `args` straight into the sink.
    pub fn tagged_fmt(&self, tag: Tag, args: fmt::Arguments<'_>) {
        self.prefix(tag);
        self.print_fmt(args);
    }

    fn prefix(&self, tag: Tag) {
        self.sink.send_bytes(self.timestamp().render().as_bytes());
        self.sink.send_bytes(tag.as_str().as_bytes());
    }
}
