//! Sinks writing to standard output or to memory.

use std::io::Write;
use std::string::String;
use std::sync::Mutex;
use std::vec::Vec;

use itm_log::TraceSink;

/// Implements the [`TraceSink`] trait by writing to [`std::io::stdout`].
#[derive(Debug, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn send_char(&self, byte: u8) {
        self.send_bytes(&[byte]);
    }

    fn send_bytes(&self, bytes: &[u8]) {
        // this is a logger, ignore any errors writing
        let _ = std::io::stdout().write_all(bytes);
    }
}

/// A sink for testing that stores every emitted character in memory.
///
/// # Examples
///
/// ```rust
/// use itm_log::{Clock, Logger};
/// use itm_log_std::MemorySink;
///
/// let sink = MemorySink::new();
/// Logger::new(&sink, Clock::bare_metal()).event("hi");
///
/// assert_eq!(sink.contents(), "00:00:00:000: Event: hi\n");
/// assert_eq!(sink.send_count(), 24);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<Recorded>,
}

#[derive(Debug, Default)]
struct Recorded {
    bytes: Vec<u8>,
    send_count: usize,
}

impl MemorySink {
    /// Creates an empty sink, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Recorded {
                bytes: Vec::new(),
                send_count: 0,
            }),
        }
    }

    /// Returns a copy of every byte emitted so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().bytes.clone()
    }

    /// Returns the emitted bytes as text, replacing invalid UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock().bytes).into_owned()
    }

    /// Returns how often [`TraceSink::send_char`] was called.
    pub fn send_count(&self) -> usize {
        self.lock().send_count
    }

    /// Returns the emitted text and resets the sink.
    pub fn take(&self) -> String {
        let recorded = core::mem::take(&mut *self.lock());
        String::from_utf8_lossy(&recorded.bytes).into_owned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        // A panicking test must not hide the output of the others.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TraceSink for MemorySink {
    fn send_char(&self, byte: u8) {
        let mut recorded = self.lock();
        recorded.bytes.push(byte);
        recorded.send_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use itm_log::TraceSink;
    use pretty_assertions::assert_eq;

    use super::MemorySink;

    #[test]
    fn counts_every_character() {
        let sink = MemorySink::new();
        sink.send_bytes(b"ab");
        sink.send_char(b'\n');

        assert_eq!(sink.bytes(), b"ab\n");
        assert_eq!(sink.send_count(), 3);
    }

    #[test]
    fn take_resets() {
        let sink = MemorySink::new();
        sink.send_bytes(b"first");

        assert_eq!(sink.take(), "first");
        assert_eq!(sink.contents(), "");
        assert_eq!(sink.send_count(), 0);
    }
}
