//! crates/logging/src/global.rs
//! The process-wide logger and free functions forwarding to it.
//!
//! The global [`Logger`] is created on first use with default flags and
//! standard output as its destination. Every function here takes the same
//! lock as the corresponding [`Logger`] method.

use std::fmt;
use std::io;
use std::sync::OnceLock;

use taglog_sink::{OutputSink, SinkKind};

use crate::config::LoggerConfig;
use crate::filter::FilterTarget;
use crate::flags::Flags;
use crate::logger::{Delivery, Logger};
use crate::severity::Severity;
use crate::tag::Tag;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, creating it on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Logs one line through the global logger, reporting the outcome.
pub fn try_log(
    severity: Severity,
    tag: Option<&Tag>,
    values: &[&dyn fmt::Display],
) -> io::Result<Delivery> {
    global().try_log(severity, tag, values)
}

/// Logs one line through the global logger.
pub fn log(severity: Severity, tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
    global().log(severity, tag, values);
}

/// Logs at [`Severity::Trace`] through the global logger.
pub fn trace(tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
    global().trace(tag, values);
}

/// Logs at [`Severity::Debug`] through the global logger.
pub fn debug(tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
    global().debug(tag, values);
}

/// Logs at [`Severity::Info`] through the global logger.
pub fn info(tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
    global().info(tag, values);
}

/// Logs at [`Severity::Warning`] through the global logger.
pub fn warning(tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
    global().warning(tag, values);
}

/// Logs at [`Severity::Error`] through the global logger.
pub fn error(tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
    global().error(tag, values);
}

/// Logs at [`Severity::Fatal`] through the global logger.
pub fn fatal(tag: Option<&Tag>, values: &[&dyn fmt::Display]) {
    global().fatal(tag, values);
}

/// Replaces the global logger's destination.
pub fn set_output_stream(sink: OutputSink) {
    global().set_output_stream(sink);
}

/// Kind of the global logger's destination.
pub fn sink_kind() -> SinkKind {
    global().sink_kind()
}

/// Flushes the global logger's destination.
pub fn flush() -> io::Result<()> {
    global().flush()
}

/// Enables toggles on the global logger.
pub fn set_flag(flags: Flags) {
    global().set_flag(flags);
}

/// Disables toggles on the global logger.
pub fn clear_flag(flags: Flags) {
    global().clear_flag(flags);
}

/// Current toggles of the global logger.
pub fn flags() -> Flags {
    global().flags()
}

/// Lists a severity or tag in the global logger's filter tables.
pub fn set_filter<T: FilterTarget>(target: T) {
    global().set_filter(target);
}

/// Unlists a severity or tag from the global logger's filter tables.
pub fn clear_filter<T: FilterTarget>(target: T) {
    global().clear_filter(target);
}

/// Applies `config` to the global logger.
pub fn configure(config: &LoggerConfig) {
    global().configure(config);
}

/// Snapshot of the global logger's configuration.
pub fn config() -> LoggerConfig {
    global().config()
}
