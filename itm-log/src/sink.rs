//! The character-emission primitive.
//!
//! A [`TraceSink`] is supplied by the platform, typically a hardware trace driver.
//! The logger calls [`TraceSink::send_char`] once per character and never checks whether anything is listening: a sink
//! either delivers the byte, stalls until it can, or drops it silently.

use core::fmt;

/// `TraceSink` is used to emit characters to a trace interface in a platform-agnostic manner.
///
/// Methods take `&self` because the logger may be called from any execution context (main loop, interrupt handler,
/// scheduler task) without synchronization.
/// Implementations that share hardware between contexts must tolerate interleaved output.
///
/// # Examples
///
/// ```rust
/// use core::cell::RefCell;
///
/// use itm_log::TraceSink;
///
/// #[derive(Debug, Default)]
/// struct Counter(RefCell<usize>);
///
/// impl TraceSink for Counter {
///     fn send_char(&self, _byte: u8) {
///         *self.0.borrow_mut() += 1;
///     }
/// }
///
/// let counter = Counter::default();
/// counter.send_bytes(b"abc");
/// assert_eq!(*counter.0.borrow(), 3);
/// ```
pub trait TraceSink {
    /// Emits a single character.
    fn send_char(&self, byte: u8);

    /// Emits every byte of `bytes` in order.
    fn send_bytes(&self, bytes: &[u8]) {
        for &byte in bytes {
            self.send_char(byte);
        }
    }
}

impl<T> TraceSink for &T
where
    T: TraceSink + ?Sized,
{
    fn send_char(&self, byte: u8) {
        (**self).send_char(byte);
    }

    fn send_bytes(&self, bytes: &[u8]) {
        (**self).send_bytes(bytes);
    }
}

/// Adapts a [`TraceSink`] to [`core::fmt::Write`].
///
/// Writing never fails, formatted output is streamed to the sink as it is produced.
#[derive(Debug)]
pub struct SinkWriter<'a, S: ?Sized>(pub &'a S);

impl<S> fmt::Write for SinkWriter<'_, S>
where
    S: TraceSink + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.send_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;
    use core::fmt::Write;
    use std::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::{SinkWriter, TraceSink};

    #[derive(Debug, Default)]
    struct Recorder(RefCell<Vec<u8>>);

    impl TraceSink for Recorder {
        fn send_char(&self, byte: u8) {
            self.0.borrow_mut().push(byte);
        }
    }

    #[test]
    fn send_bytes_emits_each_byte_in_order() {
        let recorder = Recorder::default();
        recorder.send_bytes(b"ITM");
        assert_eq!(*recorder.0.borrow(), b"ITM");
    }

    #[test]
    fn references_forward_to_the_sink() {
        let recorder = Recorder::default();
        let sink: &dyn TraceSink = &recorder;
        (&sink).send_char(b'x');
        sink.send_bytes(b"yz");
        assert_eq!(*recorder.0.borrow(), b"xyz");
    }

    #[test]
    fn writer_streams_formatted_output() {
        let recorder = Recorder::default();
        write!(SinkWriter(&recorder), "{}-{:03}", "id", 7).unwrap();
        assert_eq!(*recorder.0.borrow(), b"id-007");
    }
}
