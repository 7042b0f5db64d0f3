use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use logger_sink::{Caller, LineMode};

use super::Logger;
use crate::stream::Stream;

impl Logger {
    /// Writes `text` to the debug stream.
    #[track_caller]
    pub fn debug(&self, text: &str) {
        self.emit_caller(Stream::Debug, text, LineMode::EnsureNewline);
    }

    /// Writes `text` followed by a newline to the debug stream.
    #[track_caller]
    pub fn debugln(&self, text: &str) {
        self.emit_caller(Stream::Debug, text, LineMode::AppendNewline);
    }

    /// Writes formatted text to the debug stream.
    ///
    /// The arguments are rendered only when the debug stream is enabled.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Stream::Debug, LineMode::EnsureNewline, args);
    }

    /// Writes `text` to the log stream.
    #[track_caller]
    pub fn log(&self, text: &str) {
        self.emit_caller(Stream::Log, text, LineMode::EnsureNewline);
    }

    /// Writes `text` followed by a newline to the log stream.
    #[track_caller]
    pub fn logln(&self, text: &str) {
        self.emit_caller(Stream::Log, text, LineMode::AppendNewline);
    }

    /// Writes formatted text to the log stream.
    #[track_caller]
    pub fn logf(&self, args: fmt::Arguments<'_>) {
        self.emit(Stream::Log, LineMode::EnsureNewline, args);
    }

    /// Writes `text` to the error stream.
    #[track_caller]
    pub fn error(&self, text: &str) {
        self.emit_caller(Stream::Error, text, LineMode::EnsureNewline);
    }

    /// Writes `text` followed by a newline to the error stream.
    #[track_caller]
    pub fn errorln(&self, text: &str) {
        self.emit_caller(Stream::Error, text, LineMode::AppendNewline);
    }

    /// Writes formatted text to the error stream.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Stream::Error, LineMode::EnsureNewline, args);
    }

    /// Writes formatted text to `stream` with an explicit [`LineMode`].
    ///
    /// This is the common path behind the `*f` methods and the format macros.
    /// Nothing is rendered when `stream` is below the threshold; arguments
    /// that are a plain string literal are written without allocating.
    #[track_caller]
    pub fn emit(&self, stream: Stream, line_mode: LineMode, args: fmt::Arguments<'_>) {
        if !self.enabled(stream) {
            return;
        }
        let caller = Caller::from(Location::caller());
        let text = match args.as_str() {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(fmt::format(args)),
        };
        self.write_record(stream, &text, line_mode, Some(caller));
    }

    /// Writes `text` to `stream`, attributing it to `caller` instead of the
    /// Rust call site.
    ///
    /// Bridges from other logging frameworks use this to keep the source
    /// location recorded by the originating event.
    pub fn emit_record(
        &self,
        stream: Stream,
        text: &str,
        line_mode: LineMode,
        caller: Option<Caller<'_>>,
    ) {
        if self.enabled(stream) {
            self.write_record(stream, text, line_mode, caller);
        }
    }

    #[track_caller]
    fn emit_caller(&self, stream: Stream, text: &str, line_mode: LineMode) {
        if self.enabled(stream) {
            let caller = Caller::from(Location::caller());
            self.write_record(stream, text, line_mode, Some(caller));
        }
    }

    fn write_record(
        &self,
        stream: Stream,
        text: &str,
        line_mode: LineMode,
        caller: Option<Caller<'_>>,
    ) {
        let result = self.lock(stream).write_record(text, line_mode, caller);
        if let Err(error) = result {
            self.report_write_error(stream, &error);
        }
    }
}
