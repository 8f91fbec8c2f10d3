#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `taglog` is a small process-wide logger. Each call names a [`Severity`],
//! optionally a [`Tag`], and any number of [`Display`](std::fmt::Display)
//! values. The logger renders a prefix (timestamp, severity label, tag label,
//! separator), the concatenated values and a suffix (color reset, newline),
//! runs a filter gate, and writes the line to its single [`OutputSink`].
//!
//! # Design
//!
//! All state lives in a [`Logger`]: the sink, the active [`Flags`] and the
//! [`FilterTables`]. One mutex guards all of it, so every call, setters
//! included, is atomic with respect to every other. A lazily created
//! process-wide logger backs the free functions in [`global`](mod@global)
//! and the [`info!`]-style macros; tests and embedders build their own
//! instances.
//!
//! # Invariants
//!
//! - Prefix components always appear in the order color, timestamp, severity
//!   label, tag label, separator, and only when their flag is set.
//! - ANSI colors are written only to standard output.
//! - The severity check runs before the tag check; either failing suppresses
//!   the line. Both tables share the whitelist/blacklist polarity.
//! - Identity `0` belongs to [`Tag::no_tag`]; user tags never receive it.
//!
//! # Errors
//!
//! Logging never fails from the caller's point of view. [`Logger::try_log`]
//! exposes write failures for callers that care; the other entry points report
//! them through `tracing` and carry on. Opening a log file reports a
//! [`SinkError`]; parsing flag or severity names reports a [`ParseError`].
//!
//! # Examples
//!
//! ```
//! use taglog::{CaptureBuffer, Flags, Logger, Severity, Tag};
//!
//! let buffer = CaptureBuffer::new();
//! let logger = Logger::with_sink(buffer.clone().into());
//! logger.clear_flag(Flags::TIMESTAMPS_PREFIX);
//!
//! let db = Tag::new("db");
//! logger.set_flag(Flags::TAG_FILTER);
//! logger.set_filter(&db);
//!
//! taglog::log_to!(logger, Severity::Info, tag: &db, "pool size ", 8);
//! taglog::log_to!(logger, Severity::Info, "not listed, dropped");
//!
//! assert_eq!(buffer.contents(), "[Info]\tpool size 8\n");
//! ```

mod config;
mod error;
mod filter;
mod flags;
pub mod format;
pub mod global;
mod guard;
mod logger;
mod macros;
mod severity;
mod tag;
#[cfg(feature = "bridge")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use error::ParseError;
pub use filter::{FilterMode, FilterTables, FilterTarget};
pub use flags::Flags;
pub use global::global;
pub use guard::FlagsGuard;
pub use logger::{Delivery, Logger};
pub use severity::{COLOR_RESET, Severity};
pub use tag::{NO_TAG_NAME, Tag, TagId};
#[cfg(feature = "bridge")]
pub use tracing_bridge::{LoggerLayer, try_init_tracing, try_init_tracing_with_filter};

pub use taglog_sink::{CaptureBuffer, OutputSink, SinkError, SinkKind};
