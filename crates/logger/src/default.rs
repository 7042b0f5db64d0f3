//! crates/logger/src/default.rs
//! Process-wide default logger and the free functions delegating to it.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use crate::level::Level;
use crate::logger::Logger;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, creating it with [`Logger::new`] on first use.
///
/// The free functions of this crate operate on the same instance, so a
/// change made through one is visible through the other.
///
/// ```
/// use logger::{Level, default_logger, set_level};
///
/// set_level(Level::Error);
/// assert_eq!(default_logger().level(), Some(Level::Error));
/// ```
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

/// Installs `logger` as the process-wide logger.
///
/// Succeeds only if the default has not been created yet, either by an earlier
/// call or by first use of [`default_logger`] or a free function. Otherwise the
/// logger is handed back unchanged.
pub fn install_default(logger: Logger) -> Result<(), Logger> {
    DEFAULT.set(logger)
}

/// Writes `text` to the debug stream of the default logger.
#[track_caller]
pub fn debug(text: &str) {
    default_logger().debug(text);
}

/// Writes `text` and a newline to the debug stream of the default logger.
#[track_caller]
pub fn debugln(text: &str) {
    default_logger().debugln(text);
}

/// Writes formatted text to the debug stream of the default logger.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

/// Writes `text` to the log stream of the default logger.
#[track_caller]
pub fn log(text: &str) {
    default_logger().log(text);
}

/// Writes `text` and a newline to the log stream of the default logger.
#[track_caller]
pub fn logln(text: &str) {
    default_logger().logln(text);
}

/// Writes formatted text to the log stream of the default logger.
#[track_caller]
pub fn logf(args: fmt::Arguments<'_>) {
    default_logger().logf(args);
}

/// Writes `text` to the error stream of the default logger.
#[track_caller]
pub fn error(text: &str) {
    default_logger().error(text);
}

/// Writes `text` and a newline to the error stream of the default logger.
#[track_caller]
pub fn errorln(text: &str) {
    default_logger().errorln(text);
}

/// Writes formatted text to the error stream of the default logger.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

/// Replaces the debug destination of the default logger.
pub fn set_debug_output<W>(writer: W)
where
    W: Write + Send + 'static,
{
    default_logger().set_debug_output(writer);
}

/// Replaces the log destination of the default logger.
pub fn set_log_output<W>(writer: W)
where
    W: Write + Send + 'static,
{
    default_logger().set_log_output(writer);
}

/// Replaces the error destination of the default logger.
pub fn set_error_output<W>(writer: W)
where
    W: Write + Send + 'static,
{
    default_logger().set_error_output(writer);
}

/// Sets the threshold of the default logger.
pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

/// Sets the threshold of the default logger to an arbitrary integer.
pub fn set_raw_level(level: i32) {
    default_logger().set_raw_level(level);
}
