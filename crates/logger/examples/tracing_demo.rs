//! Routes `tracing` events through the default logger.
//!
//! Run with `cargo run -p logger --example tracing_demo --features tracing`.

use logger::{Level, LineFlags, Stream, default_logger, init_tracing_with_filter, logf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing_with_filter(EnvFilter::new("trace"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    tracing::debug!("not shown at the default threshold");

    default_logger().set_level(Level::Debug);
    default_logger().set_flags(Stream::Debug, LineFlags::DEFAULT | LineFlags::SHORT_FILE);
    tracing::debug!(attempt = 2, "reconnecting");

    logf!("direct record, {} streams", Stream::ALL.len());
    tracing::error!(code = 23, "partial transfer");

    default_logger().flush()?;
    Ok(())
}
