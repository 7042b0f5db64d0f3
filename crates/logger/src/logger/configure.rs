use std::io::{self, Write};
use std::sync::atomic::Ordering;
use std::sync::{Arc, PoisonError};

use logger_sink::LineFlags;

use super::{LevelGuard, Logger};
use crate::config::{LoggerConfig, StreamConfig};
use crate::level::Level;
use crate::stream::Stream;

impl Logger {
    /// Replaces the threshold.
    pub fn set_level(&self, level: Level) {
        self.set_raw_level(level.as_i32());
    }

    /// Replaces the threshold with an arbitrary integer.
    ///
    /// No range check is applied: values below [`Level::Debug`] behave as an
    /// always-on logger and values above [`Level::NoLog`] as an always-silent one.
    pub fn set_raw_level(&self, level: i32) {
        self.threshold.store(level, Ordering::Relaxed);
    }

    /// Returns the threshold, or `None` when it was set outside `0..=3`.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        Level::from_i32(self.raw_level())
    }

    /// Overrides the threshold until the returned guard is dropped.
    ///
    /// ```
    /// use logger::{Level, Logger};
    ///
    /// let logger = Logger::new();
    /// {
    ///     let _quiet = logger.scoped_level(Level::NoLog);
    ///     assert_eq!(logger.level(), Some(Level::NoLog));
    /// }
    /// assert_eq!(logger.level(), Some(Level::Log));
    /// ```
    pub fn scoped_level(&self, level: Level) -> LevelGuard<'_> {
        let previous = self.threshold.swap(level.as_i32(), Ordering::Relaxed);
        LevelGuard::new(self, previous)
    }

    /// Replaces the destination of `stream`, keeping its prefix and flags.
    ///
    /// The previous destination is dropped.
    pub fn set_output<W>(&self, stream: Stream, writer: W)
    where
        W: Write + Send + 'static,
    {
        let previous = self.lock(stream).replace_writer(Box::new(writer));
        drop(previous);
    }

    /// Replaces the destination of the debug stream.
    pub fn set_debug_output<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        self.set_output(Stream::Debug, writer);
    }

    /// Replaces the destination of the log stream.
    pub fn set_log_output<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        self.set_output(Stream::Log, writer);
    }

    /// Replaces the destination of the error stream.
    pub fn set_error_output<W>(&self, writer: W)
    where
        W: Write + Send + 'static,
    {
        self.set_output(Stream::Error, writer);
    }

    /// Returns the prefix of `stream`.
    #[must_use]
    pub fn prefix(&self, stream: Stream) -> String {
        self.lock(stream).prefix().to_owned()
    }

    /// Replaces the prefix of `stream`.
    pub fn set_prefix(&self, stream: Stream, prefix: impl Into<String>) {
        self.lock(stream).set_prefix(prefix);
    }

    /// Returns the header flags of `stream`.
    #[must_use]
    pub fn flags(&self, stream: Stream) -> LineFlags {
        self.lock(stream).flags()
    }

    /// Replaces the header flags of `stream`.
    pub fn set_flags(&self, stream: Stream, flags: LineFlags) {
        self.lock(stream).set_flags(flags);
    }

    /// Returns prefix and flags of `stream`.
    #[must_use]
    pub fn stream_config(&self, stream: Stream) -> StreamConfig {
        let writer = self.lock(stream);
        StreamConfig::new(writer.prefix(), writer.flags())
    }

    /// Replaces prefix and flags of `stream` together.
    pub fn set_stream_config(&self, stream: Stream, config: StreamConfig) {
        let mut writer = self.lock(stream);
        writer.set_prefix(config.prefix);
        writer.set_flags(config.flags);
    }

    /// Captures threshold, prefixes and flags.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.raw_level(),
            debug: self.stream_config(Stream::Debug),
            log: self.stream_config(Stream::Log),
            error: self.stream_config(Stream::Error),
        }
    }

    /// Applies threshold, prefixes and flags from `config`. Destinations are unchanged.
    pub fn apply_config(&self, config: &LoggerConfig) {
        for stream in Stream::ALL {
            self.set_stream_config(stream, config.stream(stream).clone());
        }
        self.set_raw_level(config.level);
    }

    /// Installs a callback that is told about failed writes.
    ///
    /// Without a handler, failed writes are silently dropped.
    pub fn set_write_error_handler<F>(&self, handler: F)
    where
        F: Fn(Stream, &io::Error) + Send + Sync + 'static,
    {
        *self
            .on_write_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(handler));
    }

    /// Removes the write-failure callback, returning to silent drops.
    pub fn clear_write_error_handler(&self) {
        *self
            .on_write_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Flushes all three destinations.
    ///
    /// Every stream is flushed even if an earlier one fails; the first error is returned.
    pub fn flush(&self) -> io::Result<()> {
        let mut first_error = None;
        for stream in Stream::ALL {
            if let Err(error) = self.lock(stream).flush() {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
