use std::mem;

use super::LineWriter;
use crate::flags::LineFlags;

impl<W> LineWriter<W> {
    /// Creates a writer with the given destination, prefix and flags.
    #[must_use]
    pub fn new(writer: W, prefix: impl Into<String>, flags: LineFlags) -> Self {
        Self {
            writer,
            prefix: prefix.into(),
            flags,
            scratch: Vec::new(),
        }
    }

    /// Returns the prefix rendered in each header.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replaces the prefix used for subsequent records.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Returns the header flags.
    #[must_use]
    pub const fn flags(&self) -> LineFlags {
        self.flags
    }

    /// Replaces the header flags used for subsequent records.
    pub fn set_flags(&mut self, flags: LineFlags) {
        self.flags = flags;
    }

    /// Borrows the destination.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the destination.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Swaps in a new destination and returns the previous one.
    ///
    /// Prefix, flags and the scratch buffer are kept, so only the place the
    /// records go to changes.
    #[must_use = "the returned writer may hold records that still need flushing"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }

    /// Consumes the line writer and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Consumes the line writer and returns destination, prefix and flags.
    #[must_use]
    pub fn into_parts(self) -> (W, String, LineFlags) {
        (self.writer, self.prefix, self.flags)
    }
}
