use super::OutputSink;
use crate::error::SinkError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

impl OutputSink {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub const fn stdout() -> Self {
        Self::Stdout
    }

    /// Creates a sink writing to standard error.
    #[must_use]
    pub const fn stderr() -> Self {
        Self::Stderr
    }

    /// Creates (or truncates) the file at `path` and writes to it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|error| SinkError::open(path, error))?;
        Ok(Self::File {
            path: Some(path.to_path_buf()),
            file,
        })
    }

    /// Opens the file at `path` for appending, creating it when missing.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| SinkError::open(path, error))?;
        Ok(Self::File {
            path: Some(path.to_path_buf()),
            file,
        })
    }

    /// Wraps an already opened file handle.
    #[must_use]
    pub const fn from_file(file: File) -> Self {
        Self::File { path: None, file }
    }

    /// Wraps an arbitrary writer.
    #[must_use]
    pub fn from_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::Writer(Box::new(writer))
    }
}

impl From<File> for OutputSink {
    fn from(file: File) -> Self {
        Self::from_file(file)
    }
}

impl From<Box<dyn Write + Send>> for OutputSink {
    fn from(writer: Box<dyn Write + Send>) -> Self {
        Self::Writer(writer)
    }
}
