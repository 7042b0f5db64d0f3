//! crates/logger/src/tracing_bridge.rs
//! Bridge from the tracing crate into the leveled streams.
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that writes every event it
//! sees to one of the three streams of a [`Logger`]:
//!
//! | tracing level | stream |
//! |---------------|--------|
//! | `TRACE`, `DEBUG` | debug |
//! | `INFO`, `WARN` | log |
//! | `ERROR` | error |
//!
//! The logger's threshold still applies, so `tracing::debug!` stays silent
//! unless the logger runs at [`Level::Debug`](crate::Level::Debug). The
//! event's source file and line replace the Rust call site in the header, and
//! fields other than `message` are appended as `key=value`.
//!
//! # Usage
//!
//! ```rust,ignore
//! logger::init_tracing()?;
//!
//! tracing::info!(peer = "10.0.0.7", "connection accepted");
//! // 2009/11/10 23:00:00 [LOG] connection accepted peer=10.0.0.7
//! ```

use std::fmt::{self, Write as _};
use std::ops::Deref;

use logger_sink::{Caller, LineMode};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::logger::Logger;
use crate::stream::Stream;

/// A tracing layer writing events to a [`Logger`].
///
/// `L` is anything that dereferences to a logger and can be shared across
/// threads: `&'static Logger` (the default instance) or `Arc<Logger>`.
#[derive(Clone, Debug)]
pub struct LoggerLayer<L = &'static Logger> {
    logger: L,
}

impl LoggerLayer {
    /// Creates a layer over the process-wide default logger.
    #[must_use]
    pub fn default_instance() -> Self {
        Self::new(crate::default::default_logger())
    }
}

impl<L> LoggerLayer<L>
where
    L: Deref<Target = Logger>,
{
    /// Creates a layer writing to `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Returns the logger events are written to.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Maps a tracing level to the stream its events are written to.
    #[must_use]
    pub const fn stream_for(level: &Level) -> Stream {
        match *level {
            Level::ERROR => Stream::Error,
            Level::WARN | Level::INFO => Stream::Log,
            Level::DEBUG | Level::TRACE => Stream::Debug,
        }
    }
}

impl<S, L> Layer<S> for LoggerLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Deref<Target = Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let stream = Self::stream_for(metadata.level());
        if !self.logger.enabled(stream) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let caller = metadata
            .file()
            .map(|file| Caller::new(file, metadata.line().unwrap_or(0)));
        self.logger.emit_record(
            stream,
            &visitor.finish(),
            LineMode::EnsureNewline,
            caller,
        );
    }
}

/// Collects the `message` field and renders the others as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(self.fields, "{name}={value}");
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Installs a global subscriber that writes tracing events to the default logger.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(LoggerLayer::default_instance())
        .try_init()
}

/// Like [`init_tracing`], with `filter` deciding which events reach the logger
/// before its own threshold is consulted.
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logger::init_tracing_with_filter(EnvFilter::new("info,hyper=warn"))?;
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::default_instance())
        .try_init()
}
