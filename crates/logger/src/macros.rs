//! crates/logger/src/macros.rs
//! Format macros over the `*f` methods.
//!
//! Each macro takes a format string with arguments, as `format!` does, and
//! writes to the default logger. A leading `logger: <expr>,` targets another
//! instance; the expression may be a `Logger`, a reference or any smart
//! pointer dereferencing to one.
//!
//! The arguments are captured with `format_args!`, so nothing is rendered
//! while the stream is below the threshold.

/// Writes a formatted record to the debug stream.
///
/// ```
/// use logger::{Level, Logger, Stream, StreamConfig, debugf};
/// use logger_sink::SharedSink;
///
/// let logger = Logger::new();
/// let sink = SharedSink::new(Vec::new());
/// logger.set_debug_output(sink.clone());
/// logger.set_stream_config(Stream::Debug, StreamConfig::bare());
/// logger.set_level(Level::Debug);
///
/// let attempt = 3;
/// debugf!(logger: logger, "retry {attempt} of {}", 5);
/// assert_eq!(sink.contents_lossy(), "retry 3 of 5\n");
/// ```
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).debugf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::default_logger().debugf(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted record to the log stream.
///
/// ```
/// use logger::logf;
///
/// let port = 8080;
/// logf!("listening on {port}");
/// ```
#[macro_export]
macro_rules! logf {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).logf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::default_logger().logf(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted record to the error stream.
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).errorf(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::default_logger().errorf(::core::format_args!($($arg)+))
    };
}

/// Builds a lazily rendered [`Printf`](crate::printf::Printf) from a
/// printf-style format string and its arguments.
///
/// Every argument is converted with [`Arg::from`](crate::printf::Arg).
///
/// ```
/// use logger::sprintf;
///
/// let name = String::from("eth0");
/// assert_eq!(sprintf!("%-5s|%3d%%", &name, 42).to_string(), "eth0 | 42%");
/// ```
#[macro_export]
macro_rules! sprintf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::printf::Printf::new(
            $format,
            ::std::vec![$($crate::printf::Arg::from($arg)),*],
        )
    };
}
