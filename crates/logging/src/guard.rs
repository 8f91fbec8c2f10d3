//! crates/logging/src/guard.rs
//! Scoped flag overrides.

use std::ops::Deref;

use crate::flags::Flags;
use crate::logger::Logger;

/// RAII guard that temporarily overrides a [`Logger`]'s flags.
///
/// Created by [`Logger::scoped_flags`]. Dropping the guard reinstates the
/// flags that were active before the override; flag changes made in the
/// meantime are discarded.
///
/// ```
/// use taglog::{CaptureBuffer, Flags, Logger};
///
/// let buffer = CaptureBuffer::new();
/// let logger = Logger::with_sink(buffer.clone().into());
/// {
///     let quiet = logger.scoped_flags(Flags::END_OF_LINE_SUFFIX);
///     quiet.info(None, &[&"bare"]);
/// }
/// assert_eq!(logger.flags(), Flags::DEFAULT);
/// assert_eq!(buffer.contents(), "bare\n");
/// ```
#[must_use = "dropping the guard immediately restores the previous flags"]
pub struct FlagsGuard<'a> {
    logger: &'a Logger,
    previous: Option<Flags>,
}

impl<'a> FlagsGuard<'a> {
    pub(crate) const fn new(logger: &'a Logger, previous: Flags) -> Self {
        Self {
            logger,
            previous: Some(previous),
        }
    }

    /// Flags that will be restored when the guard drops.
    #[must_use]
    pub fn previous_flags(&self) -> Flags {
        self.previous.unwrap_or_else(|| self.logger.flags())
    }

    /// Consumes the guard without restoring the previous flags, making the
    /// override the logger's new baseline.
    pub fn keep(mut self) -> &'a Logger {
        self.previous = None;
        self.logger
    }
}

impl Drop for FlagsGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.logger.replace_flags(previous);
        }
    }
}

impl Deref for FlagsGuard<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        self.logger
    }
}
