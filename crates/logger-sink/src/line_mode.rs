/// Controls how a [`LineWriter`](crate::LineWriter) terminates a record.
///
/// Every record ends on a line boundary. The two modes differ only in how they
/// treat text that already carries a trailing newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline only when the text does not already end with one.
    ///
    /// This is the behaviour of the plain and formatted emission calls.
    #[default]
    EnsureNewline,
    /// Always append a newline after the text, even if it already ends with one.
    ///
    /// This is the behaviour of the `*ln` emission calls.
    AppendNewline,
}

impl LineMode {
    /// Reports whether a newline must follow `text` when rendered in this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use logger_sink::LineMode;
    ///
    /// assert!(LineMode::EnsureNewline.needs_newline("ready"));
    /// assert!(!LineMode::EnsureNewline.needs_newline("ready\n"));
    /// assert!(LineMode::AppendNewline.needs_newline("ready\n"));
    /// ```
    #[must_use]
    pub fn needs_newline(self, text: &str) -> bool {
        match self {
            Self::EnsureNewline => !text.ends_with('\n'),
            Self::AppendNewline => true,
        }
    }

    /// Reports whether the mode unconditionally appends a trailing newline.
    #[must_use]
    pub const fn always_appends(self) -> bool {
        matches!(self, Self::AppendNewline)
    }
}

impl From<bool> for LineMode {
    /// Maps `true` to [`LineMode::AppendNewline`] and `false` to
    /// [`LineMode::EnsureNewline`], so call sites that already know whether they
    /// are emitting an `*ln` record can pick the mode without branching.
    ///
    /// # Examples
    ///
    /// ```
    /// use logger_sink::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::AppendNewline);
    /// assert_eq!(LineMode::from(false), LineMode::EnsureNewline);
    /// ```
    fn from(always_append: bool) -> Self {
        if always_append {
            Self::AppendNewline
        } else {
            Self::EnsureNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.always_appends()
    }
}
