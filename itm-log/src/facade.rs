//! Backend for the [`log`] facade.
//!
//! [`Level::Error`] records are emitted like [`Logger::error`], every other level like [`Logger::event`].

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::global::get_logger;
use crate::logger::{Logger, Tag};
use crate::sink::TraceSink;

fn tag_for(level: Level) -> Tag {
    match level {
        Level::Error => Tag::Error,
        Level::Warn | Level::Info | Level::Debug | Level::Trace => Tag::Event,
    }
}

impl<S> Log for Logger<S>
where
    S: TraceSink + Send + Sync,
{
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.tagged_fmt(tag_for(record.level()), *record.args());
    }

    fn flush(&self) {}
}

/// Forwards `log` records to whatever [`get_logger`] returns at the time of the call.
#[derive(Debug)]
struct GlobalFacade;

impl Log for GlobalFacade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        get_logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        get_logger().log(record);
    }

    fn flush(&self) {}
}

static FACADE: GlobalFacade = GlobalFacade;

/// Routes the [`log`] macros to the global logger, up to `max_level`.
///
/// Records logged before [`set_global`](crate::Builder::set_global) are dropped.
///
/// # Examples
///
/// ```rust
/// use itm_log::Clock;
/// use itm_log_std::StdoutSink;
///
/// itm_log::init_log_facade(log::LevelFilter::Info).unwrap();
/// itm_log::build().sink(&StdoutSink).clock(Clock::bare_metal()).set_global().unwrap();
///
/// log::error!("brown-out detected");
/// log::info!("wake reason: {}", "rtc");
/// ```
pub fn init_log_facade(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&FACADE)?;
    log::set_max_level(max_level);
    Ok(())
}
