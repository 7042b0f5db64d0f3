use std::fmt;

use crate::level::Level;

/// One of the three independent output categories of a [`Logger`](crate::Logger).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Stream {
    /// Diagnostic detail, emitted only at [`Level::Debug`].
    Debug,
    /// Regular informational output.
    Log,
    /// Failures.
    Error,
}

impl Stream {
    /// All streams in ascending severity.
    pub const ALL: [Self; 3] = [Self::Debug, Self::Log, Self::Error];

    /// Severity a record on this stream carries.
    #[must_use]
    pub const fn severity(self) -> Level {
        match self {
            Self::Debug => Level::Debug,
            Self::Log => Level::Log,
            Self::Error => Level::Error,
        }
    }

    /// Prefix a freshly constructed logger uses for this stream.
    #[must_use]
    pub const fn default_prefix(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG] ",
            Self::Log => "[LOG] ",
            Self::Error => "[ERROR] ",
        }
    }

    /// Reports whether the default destination is standard error rather than standard output.
    #[must_use]
    pub const fn defaults_to_stderr(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the lowercase stream name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Log => "log",
            Self::Error => "error",
        }
    }

    /// Reports whether a logger with the raw threshold `threshold` emits on this stream.
    ///
    /// Any integer is accepted: values below [`Level::Debug`] enable every
    /// stream and values above [`Level::NoLog`] silence every stream.
    ///
    /// ```
    /// use logger::{Level, Stream};
    ///
    /// assert!(Stream::Error.passes(Level::Log.as_i32()));
    /// assert!(!Stream::Debug.passes(Level::Log.as_i32()));
    /// assert!(Stream::Debug.passes(-5));
    /// assert!(!Stream::Error.passes(17));
    /// ```
    #[must_use]
    pub const fn passes(self, threshold: i32) -> bool {
        threshold <= self.severity().as_i32()
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
