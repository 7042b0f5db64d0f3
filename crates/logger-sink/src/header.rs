//! crates/logger-sink/src/header.rs
//! Rendering of the per-record header: prefix, timestamp and call site.

use std::io::{self, Write};
use std::panic::Location;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::flags::LineFlags;

/// Placeholder rendered when a file flag is set but no call site is known.
const UNKNOWN_FILE: &str = "???";

/// Source location of the code that emitted a record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Caller<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Caller<'a> {
    /// Creates a call site from a file path and line number.
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Full source path as reported by the compiler.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// One-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Final path component of [`file`](Self::file).
    ///
    /// Both `/` and `\` are treated as separators so paths recorded on Windows
    /// hosts shorten the same way.
    ///
    /// ```
    /// use logger_sink::Caller;
    ///
    /// assert_eq!(Caller::new("crates/logger/src/lib.rs", 7).short_file(), "lib.rs");
    /// assert_eq!(Caller::new(r"src\main.rs", 1).short_file(), "main.rs");
    /// assert_eq!(Caller::new("main.rs", 1).short_file(), "main.rs");
    /// ```
    #[must_use]
    pub fn short_file(&self) -> &'a str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}

impl<'a> From<&'a Location<'a>> for Caller<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Returns the current time in the zone selected by `flags`.
///
/// Local time is used unless [`LineFlags::UTC`] is set. When the local offset
/// cannot be determined (for example on platforms where querying it from a
/// multi-threaded process is unsound) the timestamp falls back to UTC.
#[must_use]
pub fn current_time(flags: LineFlags) -> OffsetDateTime {
    if flags.contains(LineFlags::UTC) {
        OffsetDateTime::now_utc()
    } else {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Appends the header for one record to `out`.
///
/// `now` is only consulted when a timestamp flag is set; with
/// [`LineFlags::UTC`] it is converted to UTC first. The prefix is written
/// at the start of the header, or at its end when [`LineFlags::MSG_PREFIX`] is
/// set.
///
/// # Examples
///
/// ```
/// use logger_sink::{Caller, LineFlags, write_header};
/// use time::macros::datetime;
///
/// let mut out = Vec::new();
/// let now = datetime!(2009-11-10 23:00:00 UTC);
/// write_header(&mut out, "[LOG] ", LineFlags::DEFAULT, now, None)?;
/// assert_eq!(out, b"2009/11/10 23:00:00 [LOG] ");
///
/// out.clear();
/// let caller = Caller::new("src/net/conn.rs", 42);
/// write_header(&mut out, "[LOG] ", LineFlags::SHORT_FILE, now, Some(caller))?;
/// assert_eq!(out, b"[LOG] conn.rs:42: ");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_header(
    out: &mut Vec<u8>,
    prefix: &str,
    flags: LineFlags,
    now: OffsetDateTime,
    caller: Option<Caller<'_>>,
) -> io::Result<()> {
    if !flags.contains(LineFlags::MSG_PREFIX) {
        out.extend_from_slice(prefix.as_bytes());
    }

    if flags.has_timestamp() {
        let now = if flags.contains(LineFlags::UTC) {
            now.to_offset(UtcOffset::UTC)
        } else {
            now
        };
        write_timestamp(out, flags, now)?;
    }

    if flags.has_caller() {
        let caller = caller.unwrap_or(Caller::new(UNKNOWN_FILE, 0));
        let file = if flags.contains(LineFlags::SHORT_FILE) {
            caller.short_file()
        } else {
            caller.file()
        };
        write!(out, "{file}:{}: ", caller.line())?;
    }

    if flags.contains(LineFlags::MSG_PREFIX) {
        out.extend_from_slice(prefix.as_bytes());
    }

    Ok(())
}

fn write_timestamp(out: &mut Vec<u8>, flags: LineFlags, now: OffsetDateTime) -> io::Result<()> {
    if flags.contains(LineFlags::DATE) {
        now.format_into(
            out,
            format_description!("[year]/[month padding:zero]/[day padding:zero] "),
        )
        .map_err(io::Error::other)?;
    }

    if flags.intersects(LineFlags::TIME | LineFlags::MICROSECONDS) {
        now.format_into(
            out,
            format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero]"),
        )
        .map_err(io::Error::other)?;
        if flags.contains(LineFlags::MICROSECONDS) {
            now.format_into(out, format_description!(".[subsecond digits:6]"))
                .map_err(io::Error::other)?;
        }
        out.push(b' ');
    }

    Ok(())
}
