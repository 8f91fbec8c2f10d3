use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

mod constructors;
mod writing;

/// Coarse classification of an [`OutputSink`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SinkKind {
    /// The process' standard output.
    Stdout,
    /// The process' standard error.
    Stderr,
    /// A file opened for the logger.
    File,
    /// A caller-supplied writer.
    Writer,
}

impl SinkKind {
    /// Returns a short lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::File => "file",
            Self::Writer => "writer",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single destination that receives rendered log lines.
///
/// The logger owns exactly one sink at a time. Replacing it hands the previous
/// value back so the caller can [`close`](Self::close) it, which releases file
/// handles but leaves the standard streams open.
///
/// # Examples
///
/// Route output to a file and close it once done:
///
/// ```
/// use taglog_sink::{OutputSink, SinkKind};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("app.log");
///
/// let mut sink = OutputSink::create(&path)?;
/// assert_eq!(sink.kind(), SinkKind::File);
/// sink.write_line("[Info]\tready\n")?;
/// assert!(sink.close()?);
///
/// assert_eq!(std::fs::read_to_string(&path)?, "[Info]\tready\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub enum OutputSink {
    /// Write to standard output. The only destination that receives colors.
    Stdout,
    /// Write to standard error.
    Stderr,
    /// Write to a file; `path` is `None` when the handle was supplied directly.
    File {
        /// Location of the file, when known.
        path: Option<PathBuf>,
        /// Open handle.
        file: File,
    },
    /// Write to an arbitrary writer.
    Writer(Box<dyn Write + Send>),
}

impl OutputSink {
    /// Returns the classification of this sink.
    #[must_use]
    pub const fn kind(&self) -> SinkKind {
        match self {
            Self::Stdout => SinkKind::Stdout,
            Self::Stderr => SinkKind::Stderr,
            Self::File { .. } => SinkKind::File,
            Self::Writer(_) => SinkKind::Writer,
        }
    }

    /// Reports whether ANSI color sequences may be written to this sink.
    ///
    /// Only standard output qualifies; files, standard error and custom
    /// writers always receive plain text.
    #[must_use]
    pub const fn supports_color(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Reports whether closing this sink releases a file handle.
    #[must_use]
    pub const fn is_file_backed(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Returns the file path for file-backed sinks opened by path.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::File { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::Stdout
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("OutputSink::Stdout"),
            Self::Stderr => f.write_str("OutputSink::Stderr"),
            Self::File { path, .. } => f
                .debug_struct("OutputSink::File")
                .field("path", path)
                .finish_non_exhaustive(),
            Self::Writer(_) => f.write_str("OutputSink::Writer(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaptureBuffer;

    #[test]
    fn default_sink_is_stdout() {
        let sink = OutputSink::default();
        assert_eq!(sink.kind(), SinkKind::Stdout);
        assert!(sink.supports_color());
        assert!(!sink.is_file_backed());
        assert!(sink.path().is_none());
    }

    #[test]
    fn only_stdout_supports_color() {
        assert!(OutputSink::Stdout.supports_color());
        assert!(!OutputSink::Stderr.supports_color());
        assert!(!OutputSink::from(CaptureBuffer::new()).supports_color());
    }

    #[test]
    fn kind_names() {
        assert_eq!(SinkKind::Stdout.to_string(), "stdout");
        assert_eq!(SinkKind::Stderr.to_string(), "stderr");
        assert_eq!(SinkKind::File.to_string(), "file");
        assert_eq!(SinkKind::Writer.to_string(), "writer");
    }

    #[test]
    fn debug_hides_writer_internals() {
        let sink = OutputSink::from(CaptureBuffer::new());
        assert_eq!(format!("{sink:?}"), "OutputSink::Writer(..)");
        assert_eq!(format!("{:?}", OutputSink::Stdout), "OutputSink::Stdout");
    }
}
