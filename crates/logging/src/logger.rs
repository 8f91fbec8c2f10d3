//! crates/logging/src/logger.rs
//! The logger façade: one sink, one flag set, one pair of filter tables,
//! all behind a single lock.

use std::fmt;
use std::io;
use std::mem;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use taglog_sink::{OutputSink, SinkKind};

use crate::config::LoggerConfig;
use crate::filter::{FilterTables, FilterTarget};
use crate::flags::Flags;
use crate::format::{self, LineStyle};
use crate::guard::FlagsGuard;
use crate::severity::Severity;
use crate::tag::Tag;

/// What happened to a log call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The line reached the sink.
    Written,
    /// The filter gate dropped the line.
    Suppressed,
}

impl Delivery {
    /// Reports whether the line reached the sink.
    #[must_use]
    pub const fn is_written(self) -> bool {
        matches!(self, Self::Written)
    }
}

struct LoggerState {
    sink: OutputSink,
    flags: Flags,
    filters: FilterTables,
    scratch: String,
}

/// A logger writing to a single [`OutputSink`].
///
/// Every operation, including configuration changes, takes the same lock.
/// A log call renders its values first, then prefixes, filters and writes
/// while holding it, so lines from concurrent callers never interleave and
/// no call observes a half-applied configuration.
///
/// # Examples
///
/// ```
/// use taglog::{CaptureBuffer, Flags, Logger, Severity, Tag};
///
/// let buffer = CaptureBuffer::new();
/// let logger = Logger::with_sink(buffer.clone().into());
/// logger.clear_flag(Flags::TIMESTAMPS_PREFIX);
///
/// let net = Tag::new("net");
/// logger.set_flag(Flags::TAG_PREFIX);
/// logger.info(Some(&net), &[&"connected to ", &"10.0.0.1"]);
///
/// assert_eq!(buffer.contents(), "[Info][net]\tconnected to 10.0.0.1\n");
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Creates a logger writing to standard output with default flags.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(OutputSink::Stdout)
    }

    /// Creates a logger writing to `sink` with default flags.
    #[must_use]
    pub fn with_sink(sink: OutputSink) -> Self {
        Self::with_config(sink, &LoggerConfig::default())
    }

    /// Creates a logger writing to `sink` configured by `config`.
    #[must_use]
    pub fn with_config(sink: OutputSink, config: &LoggerConfig) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                sink,
                flags: config.flags,
                filters: config.filter_tables(),
                scratch: String::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Formats, filters and writes one line, reporting the outcome.
    ///
    /// The line is rendered before the gate runs unless
    /// [`Flags::FILTER_BEFORE_FORMAT`] is set.
    ///
    /// `values` are rendered before the lock is taken, so a value whose
    /// `Display` logs through this same logger does not block.
    pub fn try_log(
        &self,
        severity: Severity,
        tag: Option<&Tag>,
        values: &[&dyn fmt::Display],
    ) -> io::Result<Delivery> {
        let tag = tag.unwrap_or_else(|| Tag::no_tag());
        if self.rejects_early(severity, tag) {
            return Ok(Delivery::Suppressed);
        }

        let mut body = String::new();
        format::write_values(&mut body, values);

        let mut state = self.lock();
        let flags = state.flags;

        if flags.contains(Flags::FILTER_BEFORE_FORMAT)
            && state.filters.suppresses(flags, severity, tag.id())
        {
            return Ok(Delivery::Suppressed);
        }

        let style = LineStyle::new(flags, state.sink.supports_color());
        let mut line = mem::take(&mut state.scratch);
        line.clear();
        format::write_prefix(&mut line, style, format::now(), severity, tag);
        line.push_str(&body);
        format::write_suffix(&mut line, style);

        let result = if state.filters.suppresses(flags, severity, tag.id()) {
            Ok(Delivery::Suppressed)
        } else {
            state.sink.write_line(&line).map(|()| Delivery::Written)
        };
        state.scratch = line;
        result
    }

    fn rejects_early(&self, severity: Severity, tag: &Tag) -> bool {
        let state = self.lock();
        state.flags.contains(Flags::FILTER_BEFORE_FORMAT)
            && state.filters.suppresses(state.flags, severity, tag.id())
    }

    /// Logs one line; write failures are reported through `tracing` and
    /// otherwise ignored.
    pub fn log(&self, severity: Severity, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
        if let Err(error) = self.try_log(severity, tag, values) {
            tracing::warn!(%error, ?severity, "failed to write log line");
        }
    }

    /// Logs at [`Severity::Trace`].
    pub fn trace(&self, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
        self.log(Severity::Trace, tag, values);
    }

    /// Logs at [`Severity::Debug`].
    pub fn debug(&self, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
        self.log(Severity::Debug, tag, values);
    }

    /// Logs at [`Severity::Info`].
    pub fn info(&self, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
        self.log(Severity::Info, tag, values);
    }

    /// Logs at [`Severity::Warning`].
    pub fn warning(&self, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
        self.log(Severity::Warning, tag, values);
    }

    /// Logs at [`Severity::Error`].
    pub fn error(&self, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
        self.log(Severity::Error, tag, values);
    }

    /// Logs at [`Severity::Fatal`].
    pub fn fatal(&self, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
        self.log(Severity::Fatal, tag, values);
    }

    /// Replaces the destination.
    ///
    /// A file-backed previous destination is flushed and closed before the
    /// new one takes over; standard streams are left open.
    pub fn set_output_stream(&self, sink: OutputSink) {
        let next = sink.kind();
        let (kind, path, closed) = {
            let mut state = self.lock();
            let previous = state.sink.replace(sink);
            let path = previous.path().map(Path::to_path_buf);
            (previous.kind(), path, previous.close())
        };
        match closed {
            Ok(released) => {
                if let Some(path) = &path {
                    tracing::trace!(path = %path.display(), "closed log file");
                }
                tracing::debug!(from = %kind, to = %next, released, "output stream replaced");
            }
            Err(error) => {
                tracing::warn!(%error, from = %kind, "failed to flush previous output stream");
            }
        }
    }

    /// Kind of the active destination.
    #[must_use]
    pub fn sink_kind(&self) -> SinkKind {
        self.lock().sink.kind()
    }

    /// Flushes the active destination.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().sink.flush()
    }

    /// Enables every toggle in `flags`.
    pub fn set_flag(&self, flags: Flags) {
        self.lock().flags.insert(flags);
    }

    /// Disables every toggle in `flags`.
    pub fn clear_flag(&self, flags: Flags) {
        self.lock().flags.remove(flags);
    }

    /// Current toggles.
    #[must_use]
    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    /// Reports whether every toggle in `flags` is enabled.
    #[must_use]
    pub fn is_flag_set(&self, flags: Flags) -> bool {
        self.lock().flags.contains(flags)
    }

    /// Installs `flags` wholesale and returns the previous set.
    pub fn replace_flags(&self, flags: Flags) -> Flags {
        mem::replace(&mut self.lock().flags, flags)
    }

    /// Temporarily installs `flags`; the previous set is restored when the
    /// returned guard drops.
    pub fn scoped_flags(&self, flags: Flags) -> FlagsGuard<'_> {
        let previous = self.replace_flags(flags);
        FlagsGuard::new(self, previous)
    }

    /// Lists `target` in its filter table.
    pub fn set_filter<T: FilterTarget>(&self, target: T) {
        target.mark(&mut self.lock().filters, true);
    }

    /// Unlists `target` from its filter table.
    pub fn clear_filter<T: FilterTarget>(&self, target: T) {
        target.mark(&mut self.lock().filters, false);
    }

    /// Copy of the filter tables.
    #[must_use]
    pub fn filters(&self) -> FilterTables {
        self.lock().filters.clone()
    }

    /// Applies `config`: its flags replace the current ones and its listed
    /// entries become the only listed entries.
    pub fn configure(&self, config: &LoggerConfig) {
        let mut state = self.lock();
        state.flags = config.flags;
        state.filters = config.filter_tables();
    }

    /// Snapshot of the current flags and filter entries.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        let state = self.lock();
        LoggerConfig::from_parts(state.flags, &state.filters)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("sink", &state.sink)
            .field("flags", &state.flags)
            .finish_non_exhaustive()
    }
}
