use super::OutputSink;
use std::io::{self, Write};
use std::mem;

impl OutputSink {
    /// Writes `line` to the destination with a single `write_all`.
    ///
    /// The text is written verbatim; any terminator must already be part of
    /// `line`.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        let bytes = line.as_bytes();
        match self {
            Self::Stdout => io::stdout().lock().write_all(bytes),
            Self::Stderr => io::stderr().lock().write_all(bytes),
            Self::File { file, .. } => file.write_all(bytes),
            Self::Writer(writer) => writer.write_all(bytes),
        }
    }

    /// Flushes the destination.
    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().flush(),
            Self::Stderr => io::stderr().lock().flush(),
            Self::File { file, .. } => file.flush(),
            Self::Writer(writer) => writer.flush(),
        }
    }

    /// Replaces the destination in place and returns the previous one.
    ///
    /// The previous sink is handed back untouched so buffered output can be
    /// inspected or flushed before it is dropped.
    #[must_use = "the previous sink should be closed"]
    pub fn replace(&mut self, next: Self) -> Self {
        mem::replace(self, next)
    }

    /// Flushes the destination and releases it.
    ///
    /// Returns `true` when a file handle was closed. Standard streams are only
    /// flushed and stay open for the rest of the process, so closing them
    /// returns `false`; custom writers are flushed and dropped.
    pub fn close(mut self) -> io::Result<bool> {
        self.flush()?;
        let released = self.is_file_backed();
        drop(self);
        Ok(released)
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout => io::stdout().lock().write(buf),
            Self::Stderr => io::stderr().lock().write(buf),
            Self::File { file, .. } => file.write(buf),
            Self::Writer(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Self::flush(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CaptureBuffer, SinkKind};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_line_is_verbatim() {
        let buffer = CaptureBuffer::new();
        let mut sink = OutputSink::from(buffer.clone());
        sink.write_line("a").expect("write");
        sink.write_line("b\n").expect("write");
        assert_eq!(buffer.contents(), "ab\n");
    }

    #[test]
    fn replace_returns_previous_sink() {
        let mut sink = OutputSink::from(CaptureBuffer::new());
        let previous = sink.replace(OutputSink::Stdout);
        assert_eq!(previous.kind(), SinkKind::Writer);
        assert_eq!(sink.kind(), SinkKind::Stdout);
    }

    #[test]
    fn closing_stdout_does_not_release_anything() {
        assert!(!OutputSink::Stdout.close().expect("flush stdout"));
        assert!(!OutputSink::Stderr.close().expect("flush stderr"));
    }

    #[test]
    fn closing_file_releases_handle() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("close.log");
        let mut sink = OutputSink::create(&path).expect("create");
        sink.write_line("line\n").expect("write");
        assert!(sink.close().expect("close"));
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "line\n");
    }

    #[test]
    fn write_errors_propagate() {
        let mut sink = OutputSink::from_writer(FailingWriter);
        let error = sink.write_line("x").expect_err("writer fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        let error = sink.close().expect_err("flush fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn io_write_impl_forwards() {
        let buffer = CaptureBuffer::new();
        let mut sink = OutputSink::from(buffer.clone());
        write!(sink, "{}-{}", 1, 2).expect("write");
        Write::flush(&mut sink).expect("flush");
        assert_eq!(buffer.contents(), "1-2");
    }
}
