//! crates/logger/src/config.rs
//! Snapshot of a logger's threshold and per-stream decoration.

use logger_sink::LineFlags;

use crate::level::Level;
use crate::stream::Stream;

/// Prefix and header flags of one stream.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamConfig {
    /// Text written in front of (or, with [`LineFlags::MSG_PREFIX`], after) the header.
    pub prefix: String,
    /// Header fields to render.
    pub flags: LineFlags,
}

impl StreamConfig {
    /// Creates a stream configuration.
    #[must_use]
    pub fn new(prefix: impl Into<String>, flags: LineFlags) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
        }
    }

    /// Configuration a freshly constructed logger uses for `stream`.
    #[must_use]
    pub fn for_stream(stream: Stream) -> Self {
        Self::new(stream.default_prefix(), LineFlags::DEFAULT)
    }

    /// A configuration with no prefix and no header, so only the message is written.
    #[must_use]
    pub fn bare() -> Self {
        Self::new("", LineFlags::empty())
    }
}

/// Threshold plus the three stream configurations of a [`Logger`](crate::Logger).
///
/// Destinations are not part of the configuration; they are runtime handles.
/// With the `serde` feature the configuration serializes with the threshold
/// and flags as integers, and missing fields fall back to the defaults.
///
/// ```
/// use logger::{Level, LoggerConfig, Stream};
///
/// let config = LoggerConfig::default();
/// assert_eq!(config.level, Level::Log.as_i32());
/// assert_eq!(config.stream(Stream::Error).prefix, "[ERROR] ");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    /// Raw threshold. Values outside `0..=3` are kept as they are.
    pub level: i32,
    /// Debug stream configuration.
    pub debug: StreamConfig,
    /// Log stream configuration.
    pub log: StreamConfig,
    /// Error stream configuration.
    pub error: StreamConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default().as_i32(),
            debug: StreamConfig::for_stream(Stream::Debug),
            log: StreamConfig::for_stream(Stream::Log),
            error: StreamConfig::for_stream(Stream::Error),
        }
    }
}

impl LoggerConfig {
    /// Returns the configuration of `stream`.
    #[must_use]
    pub const fn stream(&self, stream: Stream) -> &StreamConfig {
        match stream {
            Stream::Debug => &self.debug,
            Stream::Log => &self.log,
            Stream::Error => &self.error,
        }
    }

    /// Returns the configuration of `stream` for modification.
    pub fn stream_mut(&mut self, stream: Stream) -> &mut StreamConfig {
        match stream {
            Stream::Debug => &mut self.debug,
            Stream::Log => &mut self.log,
            Stream::Error => &mut self.error,
        }
    }

    /// Returns the threshold as a [`Level`], or `None` for out-of-range values.
    #[must_use]
    pub const fn threshold(&self) -> Option<Level> {
        Level::from_i32(self.level)
    }

    /// Replaces the threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level.as_i32();
        self
    }

    /// Replaces the configuration of one stream.
    #[must_use]
    pub fn with_stream(mut self, stream: Stream, config: StreamConfig) -> Self {
        *self.stream_mut(stream) = config;
        self
    }
}
