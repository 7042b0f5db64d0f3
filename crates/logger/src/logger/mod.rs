//! crates/logger/src/logger/mod.rs
//! The leveled logger: three line writers behind one threshold.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use logger_sink::{BoxedWriter, LineWriter};

use crate::config::{LoggerConfig, StreamConfig};
use crate::stream::Stream;

mod configure;
mod emit;
mod guard;

pub use guard::LevelGuard;

/// Callback invoked when writing a record to a stream's destination fails.
pub type WriteErrorHandler = Arc<dyn Fn(Stream, &io::Error) + Send + Sync>;

/// Leveled logger with independent debug, log and error streams.
///
/// Each stream owns a [`LineWriter`] (destination, prefix, header flags)
/// behind its own lock, so reconfiguring or writing to one stream never waits
/// on another. The threshold is an atomic integer read before every emission;
/// a record is written only when `threshold <= stream severity`.
///
/// All methods take `&self`, which lets one logger be shared between threads
/// and lets the process-wide [`default_logger`](crate::default_logger) be a
/// plain static.
///
/// Emission never reports errors. A failed write is dropped unless a handler
/// was installed with [`set_write_error_handler`](Self::set_write_error_handler).
///
/// # Examples
///
/// ```
/// use logger::{Level, Logger, Stream, StreamConfig};
/// use logger_sink::SharedSink;
///
/// let logger = Logger::new();
/// let sink = SharedSink::new(Vec::new());
/// logger.set_debug_output(sink.clone());
/// logger.set_stream_config(Stream::Debug, StreamConfig::bare());
///
/// logger.debug("hidden");
/// logger.set_level(Level::Debug);
/// logger.debugf(format_args!("n={}", 42));
///
/// assert_eq!(sink.contents_lossy(), "n=42\n");
/// ```
pub struct Logger {
    threshold: AtomicI32,
    debug: Mutex<LineWriter>,
    log: Mutex<LineWriter>,
    error: Mutex<LineWriter>,
    on_write_error: RwLock<Option<WriteErrorHandler>>,
}

impl Logger {
    /// Creates a logger writing debug and log records to standard output and
    /// error records to standard error, with the default prefixes, timestamp
    /// headers and threshold [`Level::Log`](crate::Level::Log).
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&LoggerConfig::default())
    }

    /// Creates a logger with the default destinations and the threshold,
    /// prefixes and flags of `config`.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self {
            threshold: AtomicI32::new(config.level),
            debug: Mutex::new(line_writer(Stream::Debug, config.stream(Stream::Debug))),
            log: Mutex::new(line_writer(Stream::Log, config.stream(Stream::Log))),
            error: Mutex::new(line_writer(Stream::Error, config.stream(Stream::Error))),
            on_write_error: RwLock::new(None),
        }
    }

    /// Returns the raw threshold.
    #[must_use]
    pub fn raw_level(&self) -> i32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Reports whether records on `stream` are currently written.
    #[must_use]
    pub fn enabled(&self, stream: Stream) -> bool {
        stream.passes(self.raw_level())
    }

    fn writer(&self, stream: Stream) -> &Mutex<LineWriter> {
        match stream {
            Stream::Debug => &self.debug,
            Stream::Log => &self.log,
            Stream::Error => &self.error,
        }
    }

    fn lock(&self, stream: Stream) -> MutexGuard<'_, LineWriter> {
        self.writer(stream)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn report_write_error(&self, stream: Stream, error: &io::Error) {
        let handler = self
            .on_write_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(handler) = handler {
            handler(stream, error);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.raw_level())
            .field("debug", &*self.lock(Stream::Debug))
            .field("log", &*self.lock(Stream::Log))
            .field("error", &*self.lock(Stream::Error))
            .finish_non_exhaustive()
    }
}

fn default_destination(stream: Stream) -> BoxedWriter {
    if stream.defaults_to_stderr() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    }
}

fn line_writer(stream: Stream, config: &StreamConfig) -> LineWriter {
    LineWriter::new(default_destination(stream), config.prefix.clone(), config.flags)
}
