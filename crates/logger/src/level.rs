//! crates/logger/src/level.rs
//! Severity levels gating the three output streams.

use std::fmt;
use std::str::FromStr;

/// Severity threshold of a [`Logger`](crate::Logger).
///
/// The variants are strictly ordered. A logger whose threshold is set to a
/// level emits on the streams of that level and above: with [`Level::Log`]
/// the log and error streams produce output while the debug stream stays
/// silent. [`Level::NoLog`] is a sentinel that silences every stream.
///
/// The integer values are part of the public contract and are what the
/// serialized configuration stores.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "i32", try_from = "i32")
)]
#[repr(i32)]
pub enum Level {
    /// Everything, including the debug stream.
    Debug = 0,
    /// The log and error streams.
    #[default]
    Log = 1,
    /// Only the error stream.
    Error = 2,
    /// No output at all.
    NoLog = 3,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Log, Self::Error, Self::NoLog];

    /// Returns the integer value of the level.
    ///
    /// ```
    /// use logger::Level;
    ///
    /// assert_eq!(Level::Debug.as_i32(), 0);
    /// assert_eq!(Level::NoLog.as_i32(), 3);
    /// ```
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an integer back to a level, or `None` outside `0..=3`.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Debug),
            1 => Some(Self::Log),
            2 => Some(Self::Error),
            3 => Some(Self::NoLog),
            _ => None,
        }
    }

    /// Returns the lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Log => "log",
            Self::Error => "error",
            Self::NoLog => "nolog",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.as_i32()
    }
}

impl TryFrom<i32> for Level {
    type Error = ParseLevelError;

    fn try_from(value: i32) -> Result<Self, ParseLevelError> {
        Self::from_i32(value).ok_or(ParseLevelError::OutOfRange(value))
    }
}

/// Error returned when a [`Level`] cannot be parsed from a name or integer.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseLevelError {
    /// The text is neither a known level name nor an integer.
    #[error("unknown log level `{0}`")]
    UnknownName(String),
    /// The integer is not one of the four level values.
    #[error("log level {0} is outside the range 0..=3")]
    OutOfRange(i32),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name (`debug`, `log`, `error`, `nolog`, any case) or its
    /// integer value.
    ///
    /// ```
    /// use logger::Level;
    ///
    /// assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
    /// assert_eq!(" 2 ".parse::<Level>(), Ok(Level::Error));
    /// assert!("verbose".parse::<Level>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Ok(value) = input.parse::<i32>() {
            return Self::try_from(value);
        }

        match input.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "log" => Ok(Self::Log),
            "error" => Ok(Self::Error),
            "nolog" => Ok(Self::NoLog),
            _ => Err(ParseLevelError::UnknownName(input.to_owned())),
        }
    }
}
