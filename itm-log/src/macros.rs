//! Formatting macros over the global logger.
//!
//! - `itm_print!`: a plain line
//! - `itm_error!`: a timestamped `ERROR: ` line
//! - `itm_event!`: a timestamped `Event: ` line
//!
//! The arguments are passed to [`format_args!`] and streamed to the sink without an intermediate buffer.

/// Emits a formatted line through the global logger, without timestamp or tag.
///
/// # Examples
///
/// ```rust
/// itm_log::itm_print!("heap: {} bytes free", 2048);
/// ```
#[macro_export]
macro_rules! itm_print {
    ($($arg:tt)+) => {
        $crate::print_fmt(::core::format_args!($($arg)+))
    };
}

/// Emits a formatted, timestamped `ERROR: ` line through the global logger.
///
/// # Examples
///
/// ```rust
/// let code = 0x13;
/// itm_log::itm_error!("i2c nack, code {code:#x}");
/// ```
#[macro_export]
macro_rules! itm_error {
    ($($arg:tt)+) => {
        $crate::error_fmt(::core::format_args!($($arg)+))
    };
}

/// Emits a formatted, timestamped `Event: ` line through the global logger.
///
/// # Examples
///
/// ```rust
/// itm_log::itm_event!("button {} pressed", 2);
/// ```
#[macro_export]
macro_rules! itm_event {
    ($($arg:tt)+) => {
        $crate::event_fmt(::core::format_args!($($arg)+))
    };
}
