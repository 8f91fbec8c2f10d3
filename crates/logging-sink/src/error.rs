//! crates/logging-sink/src/error.rs
//! Errors raised while preparing an output destination.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to open a file-backed [`OutputSink`](crate::OutputSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log file could not be opened or created.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        /// Path that was passed to the constructor.
        path: PathBuf,
        /// Error reported by the operating system.
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Returns the path involved in the failure.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } => path,
        }
    }
}

impl From<SinkError> for io::Error {
    fn from(error: SinkError) -> Self {
        match error {
            SinkError::Open { source, .. } => source,
        }
    }
}
