//! crates/logger-sink/src/flags.rs
//! Decoration flags controlling the header rendered in front of each record.

use bitflags::bitflags;

bitflags! {
    /// Selects which header fields a [`LineWriter`](crate::LineWriter) renders.
    ///
    /// The bit values are stable so that configurations stored as integers keep
    /// their meaning. Header fields are written in a fixed order regardless of
    /// the order the flags were combined in:
    ///
    /// `[prefix] [date] [time] [file:line: ] [prefix if MSG_PREFIX] message`
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct LineFlags: u32 {
        /// The date in the local time zone: `2009/01/23`.
        const DATE = 1;
        /// The time in the local time zone: `01:23:23`.
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Implies [`LineFlags::TIME`].
        const MICROSECONDS = 1 << 2;
        /// Full source path and line of the call site: `/a/b/c/d.rs:23`.
        const LONG_FILE = 1 << 3;
        /// Final path component and line of the call site: `d.rs:23`.
        /// Overrides [`LineFlags::LONG_FILE`].
        const SHORT_FILE = 1 << 4;
        /// Render date and time in UTC rather than the local time zone.
        const UTC = 1 << 5;
        /// Move the prefix from the start of the line to just before the message.
        const MSG_PREFIX = 1 << 6;
        /// Date and time, the conventional log-line decoration.
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl LineFlags {
    /// Flags applied to every stream of a freshly constructed logger.
    ///
    /// The timestamp leads the line and the stream prefix sits right before the
    /// message: `2009/11/10 23:00:00 [LOG] message`.
    pub const DEFAULT: Self = Self::STD.union(Self::MSG_PREFIX);

    /// Reports whether any timestamp field is enabled.
    #[must_use]
    pub const fn has_timestamp(self) -> bool {
        self.intersects(Self::DATE.union(Self::TIME).union(Self::MICROSECONDS))
    }

    /// Reports whether the call site is rendered.
    #[must_use]
    pub const fn has_caller(self) -> bool {
        self.intersects(Self::LONG_FILE.union(Self::SHORT_FILE))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LineFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LineFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <u32 as serde::Deserialize>::deserialize(deserializer).map(Self::from_bits_retain)
    }
}
