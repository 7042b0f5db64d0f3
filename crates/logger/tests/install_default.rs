//! Installing a preconfigured default logger.
//!
//! Kept in its own binary so no other test touches the default first.

use logger::{Level, Logger, LoggerConfig, Stream, StreamConfig, default_logger, install_default};
use logger_sink::SharedSink;

#[test]
fn installed_logger_becomes_the_default_once() {
    let config = LoggerConfig::default()
        .with_level(Level::Error)
        .with_stream(Stream::Error, StreamConfig::new("fatal: ", Default::default()));
    let preconfigured = Logger::from_config(&config);
    let sink = SharedSink::new(Vec::new());
    preconfigured.set_error_output(sink.clone());

    assert!(install_default(preconfigured).is_ok());
    assert_eq!(default_logger().level(), Some(Level::Error));

    logger::error("disk full");
    assert_eq!(sink.contents_lossy(), "fatal: disk full\n");

    let rejected = install_default(Logger::new());
    let returned = rejected.expect_err("default already installed");
    assert_eq!(returned.level(), Some(Level::Log));
    assert_eq!(default_logger().level(), Some(Level::Error));
}
