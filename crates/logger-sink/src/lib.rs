#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logger-sink/src/lib.rs
//!
//! # Overview
//!
//! `logger-sink` provides the line-writer layer underneath the leveled
//! `logger` crate. A [`LineWriter`] binds a destination implementing
//! [`std::io::Write`] to a prefix and a set of [`LineFlags`], and renders each
//! record as one line: header, message, newline.
//!
//! # Design
//!
//! - The header is built by [`write_header`] from the flags: optional prefix,
//!   date, time with optional microseconds, call site, and the prefix again
//!   when [`LineFlags::MSG_PREFIX`] moves it next to the message.
//! - Records are assembled in a scratch buffer owned by the writer and handed
//!   to the destination in a single `write_all` call.
//! - [`LineMode`] decides whether an already newline-terminated message gets
//!   another newline.
//! - [`SharedSink`] lets a caller keep writing to, or reading from, a
//!   destination that a writer also owns.
//!
//! # Errors
//!
//! Writing surfaces the [`std::io::Error`] of the destination. Whether to
//! report or swallow it is the caller's decision.
//!
//! # Examples
//!
//! ```
//! use logger_sink::{LineFlags, LineMode, LineWriter, SharedSink};
//!
//! let sink = SharedSink::new(Vec::new());
//! let mut writer = LineWriter::new(sink.clone(), "[LOG] ", LineFlags::empty());
//!
//! writer.write_record("listening", LineMode::EnsureNewline, None)?;
//! assert_eq!(sink.contents_lossy(), "[LOG] listening\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod flags;
mod header;
mod line_mode;
mod sink;

pub use flags::LineFlags;
pub use header::{Caller, current_time, write_header};
pub use line_mode::LineMode;
pub use sink::{BoxedWriter, LineWriter, SharedSink};
