use std::fmt;
use std::io::Write;

use crate::flags::LineFlags;

/// Type-erased destination used by loggers whose sinks are swapped at runtime.
pub type BoxedWriter = Box<dyn Write + Send>;

/// Formats records into an [`std::io::Write`] destination.
///
/// A line writer pairs a destination with a prefix and a set of
/// [`LineFlags`]. Each call to [`write_record`](Self::write_record) renders the
/// header selected by the flags, the message, and a trailing newline as chosen
/// by the [`LineMode`](crate::LineMode), then hands the whole record to the
/// destination in a single `write_all` call. The record is assembled in a
/// scratch buffer owned by the writer and reused across calls.
///
/// # Examples
///
/// ```
/// use logger_sink::{LineFlags, LineMode, LineWriter};
///
/// let mut writer = LineWriter::new(Vec::new(), "[LOG] ", LineFlags::empty());
/// writer.write_record("ready", LineMode::EnsureNewline, None)?;
/// writer.write_record("done\n", LineMode::AppendNewline, None)?;
///
/// assert_eq!(writer.into_inner(), b"[LOG] ready\n[LOG] done\n\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineWriter<W = BoxedWriter> {
    writer: W,
    prefix: String,
    flags: LineFlags,
    scratch: Vec<u8>,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for LineWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
