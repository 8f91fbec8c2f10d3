use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::OutputSink;

/// Cloneable in-memory writer.
///
/// All clones share one buffer, so a test can hand one clone to a logger and
/// keep another to inspect what was written.
///
/// ```
/// use std::io::Write;
/// use taglog_sink::CaptureBuffer;
///
/// let buffer = CaptureBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"captured")?;
/// assert_eq!(buffer.contents(), "captured");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Returns the captured bytes decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns a copy of the captured bytes.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Removes and returns the captured text.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Number of captured bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards the captured bytes.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<CaptureBuffer> for OutputSink {
    fn from(buffer: CaptureBuffer) -> Self {
        Self::from_writer(buffer)
    }
}
