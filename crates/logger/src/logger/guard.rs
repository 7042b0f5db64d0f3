use std::ops::Deref;

use super::Logger;
use crate::level::Level;

/// RAII guard that temporarily overrides a [`Logger`]'s threshold.
///
/// Created by [`Logger::scoped_level`]. Dropping the guard writes the previous
/// threshold back, including out-of-range raw values. The guard dereferences
/// to the logger so calls can go through it directly.
#[must_use = "dropping the guard immediately restores the previous level"]
pub struct LevelGuard<'a> {
    logger: &'a Logger,
    previous: i32,
    restore: bool,
}

impl<'a> LevelGuard<'a> {
    pub(super) const fn new(logger: &'a Logger, previous: i32) -> Self {
        Self {
            logger,
            previous,
            restore: true,
        }
    }

    /// Returns the raw threshold that will be restored.
    #[must_use]
    pub const fn previous_raw_level(&self) -> i32 {
        self.previous
    }

    /// Returns the threshold that will be restored, if it is one of the four levels.
    #[must_use]
    pub const fn previous_level(&self) -> Option<Level> {
        Level::from_i32(self.previous)
    }

    /// Consumes the guard without restoring the previous threshold.
    ///
    /// The override becomes the logger's new baseline.
    ///
    /// ```
    /// use logger::{Level, Logger};
    ///
    /// let logger = Logger::new();
    /// logger.scoped_level(Level::Error).into_inner();
    /// assert_eq!(logger.level(), Some(Level::Error));
    /// ```
    pub fn into_inner(mut self) -> &'a Logger {
        self.restore = false;
        self.logger
    }
}

impl Drop for LevelGuard<'_> {
    fn drop(&mut self) {
        if self.restore {
            self.logger.set_raw_level(self.previous);
        }
    }
}

impl Deref for LevelGuard<'_> {
    type Target = Logger;

    fn deref(&self) -> &Self::Target {
        self.logger
    }
}
