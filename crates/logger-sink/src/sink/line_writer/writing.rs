use std::io::{self, Write};

use time::OffsetDateTime;

use super::LineWriter;
use crate::header::{Caller, current_time, write_header};
use crate::line_mode::LineMode;

/// Scratch buffers that grew past this size are released after the record.
const MAX_RETAINED_SCRATCH: usize = 64 * 1024;

impl<W> LineWriter<W>
where
    W: Write,
{
    /// Renders one record and writes it to the destination.
    ///
    /// The clock is only read when the flags request a timestamp. `caller` is
    /// rendered when [`LineFlags::LONG_FILE`](crate::LineFlags::LONG_FILE) or
    /// [`LineFlags::SHORT_FILE`](crate::LineFlags::SHORT_FILE) is set.
    pub fn write_record(
        &mut self,
        text: &str,
        line_mode: LineMode,
        caller: Option<Caller<'_>>,
    ) -> io::Result<()> {
        let now = if self.flags.has_timestamp() {
            current_time(self.flags)
        } else {
            OffsetDateTime::UNIX_EPOCH
        };
        self.write_record_at(text, line_mode, now, caller)
    }

    /// Renders one record using an explicit timestamp.
    pub fn write_record_at(
        &mut self,
        text: &str,
        line_mode: LineMode,
        now: OffsetDateTime,
        caller: Option<Caller<'_>>,
    ) -> io::Result<()> {
        self.scratch.clear();
        write_header(&mut self.scratch, &self.prefix, self.flags, now, caller)?;
        self.scratch.extend_from_slice(text.as_bytes());
        if line_mode.needs_newline(text) {
            self.scratch.push(b'\n');
        }

        let result = self.writer.write_all(&self.scratch);
        if self.scratch.capacity() > MAX_RETAINED_SCRATCH {
            self.scratch = Vec::new();
        }
        result
    }

    /// Flushes the destination.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::LineFlags;
    use time::macros::datetime;

    fn plain(prefix: &str) -> LineWriter<Vec<u8>> {
        LineWriter::new(Vec::new(), prefix, LineFlags::empty())
    }

    #[test]
    fn ensure_newline_terminates_once() {
        let mut writer = plain("");
        writer
            .write_record("a", LineMode::EnsureNewline, None)
            .expect("write succeeds");
        writer
            .write_record("b\n", LineMode::EnsureNewline, None)
            .expect("write succeeds");
        assert_eq!(writer.into_inner(), b"a\nb\n".to_vec());
    }

    #[test]
    fn append_newline_always_adds_terminator() {
        let mut writer = plain("");
        writer
            .write_record("a", LineMode::AppendNewline, None)
            .expect("write succeeds");
        writer
            .write_record("b\n", LineMode::AppendNewline, None)
            .expect("write succeeds");
        assert_eq!(writer.into_inner(), b"a\nb\n\n".to_vec());
    }

    #[test]
    fn empty_text_still_produces_a_line() {
        let mut writer = plain("[DEBUG] ");
        writer
            .write_record("", LineMode::EnsureNewline, None)
            .expect("write succeeds");
        assert_eq!(writer.into_inner(), b"[DEBUG] \n".to_vec());
    }

    #[test]
    fn explicit_timestamp_is_rendered() {
        let mut writer = LineWriter::new(Vec::new(), "[LOG] ", LineFlags::DEFAULT);
        writer
            .write_record_at(
                "message",
                LineMode::EnsureNewline,
                datetime!(2009-11-10 23:00:00 UTC),
                None,
            )
            .expect("write succeeds");
        assert_eq!(
            writer.into_inner(),
            b"2009/11/10 23:00:00 [LOG] message\n".to_vec()
        );
    }

    #[test]
    fn replace_writer_keeps_prefix_and_flags() {
        let mut writer = LineWriter::new(Vec::new(), "[ERROR] ", LineFlags::SHORT_FILE);
        writer
            .write_record("first", LineMode::EnsureNewline, Some(Caller::new("a/b.rs", 1)))
            .expect("write succeeds");

        let previous = writer.replace_writer(Vec::new());
        assert_eq!(previous, b"[ERROR] b.rs:1: first\n".to_vec());

        writer
            .write_record("second", LineMode::EnsureNewline, Some(Caller::new("c.rs", 2)))
            .expect("write succeeds");
        assert_eq!(writer.prefix(), "[ERROR] ");
        assert_eq!(writer.flags(), LineFlags::SHORT_FILE);
        assert_eq!(writer.into_inner(), b"[ERROR] c.rs:2: second\n".to_vec());
    }

    #[test]
    fn oversized_scratch_is_released() {
        let mut writer = plain("");
        let big = "x".repeat(MAX_RETAINED_SCRATCH * 2);
        writer
            .write_record(&big, LineMode::EnsureNewline, None)
            .expect("write succeeds");
        assert!(writer.scratch.capacity() <= MAX_RETAINED_SCRATCH);
        assert_eq!(writer.get_ref().len(), big.len() + 1);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_surface_to_the_caller() {
        let mut writer = LineWriter::new(FailingWriter, "", LineFlags::empty());
        let error = writer
            .write_record("lost", LineMode::EnsureNewline, None)
            .expect_err("write fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
