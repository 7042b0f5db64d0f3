mod line_writer;
mod shared;

pub use line_writer::{BoxedWriter, LineWriter};
pub use shared::SharedSink;
