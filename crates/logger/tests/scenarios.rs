//! End-to-end behavior of a freshly constructed logger.
//!
//! Destinations are swapped for in-memory sinks; prefixes and flags are left
//! at their defaults unless a test clears them.

use logger::{Level, LineFlags, Logger, Stream, StreamConfig, debugf, sprintf};
use logger_sink::SharedSink;

fn redirect_all(logger: &Logger) -> [SharedSink<Vec<u8>>; 3] {
    let sinks = [
        SharedSink::new(Vec::new()),
        SharedSink::new(Vec::new()),
        SharedSink::new(Vec::new()),
    ];
    for (stream, sink) in Stream::ALL.into_iter().zip(&sinks) {
        logger.set_output(stream, sink.clone());
    }
    sinks
}

/// Checks `YYYY/MM/DD HH:MM:SS ` at the start of `line` and returns the rest.
fn strip_timestamp(line: &str) -> &str {
    let (stamp, rest) = line.split_at(20);
    for (index, byte) in stamp.bytes().enumerate() {
        match index {
            4 | 7 => assert_eq!(byte, b'/', "{line:?}"),
            10 | 19 => assert_eq!(byte, b' ', "{line:?}"),
            13 | 16 => assert_eq!(byte, b':', "{line:?}"),
            _ => assert!(byte.is_ascii_digit(), "{line:?}"),
        }
    }
    rest
}

// ============================================================================
// Default Logger
// ============================================================================

#[test]
fn default_threshold_writes_log_but_not_debug() {
    let logger = Logger::new();
    let [debug, log, error] = redirect_all(&logger);

    logger.debug("x");
    logger.log("x");

    assert!(debug.contents().is_empty());
    assert!(error.contents().is_empty());
    let written = log.contents_lossy();
    assert_eq!(strip_timestamp(&written), "[LOG] x\n");
}

#[test]
fn every_stream_uses_its_own_prefix() {
    let logger = Logger::new();
    logger.set_level(Level::Debug);
    let [debug, log, error] = redirect_all(&logger);

    logger.debugln("a");
    logger.logln("b");
    logger.errorln("c");

    assert_eq!(strip_timestamp(&debug.contents_lossy()), "[DEBUG] a\n");
    assert_eq!(strip_timestamp(&log.contents_lossy()), "[LOG] b\n");
    assert_eq!(strip_timestamp(&error.contents_lossy()), "[ERROR] c\n");
}

#[test]
fn prefix_precedes_header_without_msg_prefix() {
    let logger = Logger::new();
    let [_, log, _] = redirect_all(&logger);
    logger.set_flags(Stream::Log, LineFlags::STD);

    logger.log("x");

    let written = log.contents_lossy();
    let rest = written.strip_prefix("[LOG] ").unwrap_or_default();
    assert_eq!(strip_timestamp(rest), "x\n");
}

// ============================================================================
// Bare Debug Stream
// ============================================================================

#[test]
fn cleared_debug_stream_writes_only_the_message() {
    let logger = Logger::new();
    logger.set_level(Level::Debug);
    let [debug, _, _] = redirect_all(&logger);
    logger.set_stream_config(Stream::Debug, StreamConfig::bare());

    debugf!(logger: logger, "n={}", 42);
    logger.debugf(format_args!("{}", sprintf!("n=%d", 42)));
    logger.debugln("n=42");

    assert_eq!(debug.contents_lossy(), "n=42\nn=42\nn=42\n");
}

#[test]
fn plain_and_line_forms_differ_only_on_terminated_text() {
    let logger = Logger::new();
    let [_, log, _] = redirect_all(&logger);
    logger.set_stream_config(Stream::Log, StreamConfig::bare());

    logger.log("a\n");
    logger.logln("b\n");
    logger.log("");
    logger.logln("");

    assert_eq!(log.contents_lossy(), "a\nb\n\n\n\n");
}

// ============================================================================
// Error Threshold
// ============================================================================

#[test]
fn error_threshold_reaches_only_the_error_destination() {
    let logger = Logger::new();
    logger.set_level(Level::Error);
    let [debug, log, error] = redirect_all(&logger);

    logger.log("ignored");
    logger.debug("ignored");
    logger.error("boom");

    assert!(debug.contents().is_empty());
    assert!(log.contents().is_empty());
    assert_eq!(strip_timestamp(&error.contents_lossy()), "[ERROR] boom\n");
}

#[test]
fn shared_destination_receives_records_in_call_order() {
    let logger = Logger::new();
    logger.set_level(Level::Debug);
    let sink = SharedSink::new(Vec::new());
    for stream in Stream::ALL {
        logger.set_output(stream, sink.clone());
        logger.set_flags(stream, LineFlags::empty());
    }

    logger.error("1");
    logger.debug("2");
    logger.log("3");

    assert_eq!(sink.contents_lossy(), "[ERROR] 1\n[DEBUG] 2\n[LOG] 3\n");
}
