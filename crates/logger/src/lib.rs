#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logger/src/lib.rs
//!
//! # Overview
//!
//! `logger` is a small leveled logging facade. A [`Logger`] has three
//! independent output streams (debug, log and error) and one threshold
//! deciding which of them produce output. Each stream has its own destination,
//! prefix and header flags; the rendering itself lives in
//! [`logger_sink::LineWriter`].
//!
//! | threshold | debug | log | error |
//! |-----------|-------|-----|-------|
//! | [`Level::Debug`] | yes | yes | yes |
//! | [`Level::Log`] (default) | | yes | yes |
//! | [`Level::Error`] | | | yes |
//! | [`Level::NoLog`] | | | |
//!
//! Every stream has three emission forms: plain (`log`), line (`logln`) and
//! formatted (`logf`, or the [`logf!`] macro). Plain and formatted records get
//! a newline only when the text does not already end with one; line records
//! always get one.
//!
//! # Default instance
//!
//! A process-wide logger is created on first use and reachable through
//! [`default_logger`]. The free functions ([`log`], [`errorf()`],
//! [`set_level`], ...) and the macros without a `logger:` argument operate on
//! it. [`install_default`] replaces it with a preconfigured logger as long as
//! it has not been used yet.
//!
//! # Output
//!
//! Out of the box debug and log records go to standard output and error
//! records to standard error, each rendered as
//!
//! ```text
//! 2009/11/10 23:00:00 [LOG] message
//! ```
//!
//! # Errors
//!
//! Emission never fails from the caller's point of view. When a destination
//! rejects a write the record is dropped; a handler installed with
//! [`Logger::set_write_error_handler`] gets to see the [`std::io::Error`].
//! Parsing a [`Level`] from text reports a [`ParseLevelError`].
//!
//! # Features
//!
//! - `serde`: (de)serialization of [`LoggerConfig`], [`StreamConfig`] and
//!   [`Level`].
//! - `tracing`: `LoggerLayer`, routing `tracing` events into the streams, and
//!   `init_tracing` to install it globally.
//!
//! # Examples
//!
//! ```
//! use logger::{Level, LineFlags, Logger, Stream, StreamConfig, errorf};
//! use logger_sink::SharedSink;
//!
//! let logger = Logger::new();
//! let errors = SharedSink::new(Vec::new());
//! logger.set_error_output(errors.clone());
//! logger.set_stream_config(Stream::Error, StreamConfig::new("[ERROR] ", LineFlags::empty()));
//!
//! logger.set_level(Level::Error);
//! logger.log("dropped");
//! errorf!(logger: logger, "disk {} is full", "/dev/sda1");
//!
//! assert_eq!(errors.contents_lossy(), "[ERROR] disk /dev/sda1 is full\n");
//! ```

mod config;
mod default;
mod level;
mod logger;
mod macros;
pub mod printf;
mod stream;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LoggerConfig, StreamConfig};
pub use default::{
    debug, debugf, debugln, default_logger, error, errorf, errorln, install_default, log, logf,
    logln, set_debug_output, set_error_output, set_level, set_log_output, set_raw_level,
};
pub use level::{Level, ParseLevelError};
pub use logger::{LevelGuard, Logger, WriteErrorHandler};
pub use logger_sink::{Caller, LineFlags, LineMode};
pub use printf::{Arg, Printf};
pub use stream::Stream;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing, init_tracing_with_filter};
