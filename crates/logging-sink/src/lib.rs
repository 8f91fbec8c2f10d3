#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `taglog-sink` provides the single output destination used by the `taglog`
//! logger. A destination is either one of the process' standard streams, a
//! file opened on behalf of the caller, or an arbitrary [`std::io::Write`]
//! implementor such as the in-memory [`CaptureBuffer`].
//!
//! # Design
//!
//! [`OutputSink`] is an enum rather than a trait object so the logger can ask
//! cheap structural questions about the destination: whether it is the
//! interactive console (only standard output receives ANSI colors) and whether
//! replacing it must release a file handle. Writers supplied by the caller are
//! boxed behind the [`OutputSink::Writer`] variant.
//!
//! # Invariants
//!
//! - Standard streams are never closed; [`OutputSink::close`] only flushes
//!   them.
//! - File-backed sinks are flushed and their handle released when closed.
//! - Each [`OutputSink::write_line`] call issues a single `write_all`, so a
//!   caller that serialises access gets whole lines in the destination.
//!
//! # Errors
//!
//! Opening a file reports a [`SinkError`] that carries the offending path.
//! Writes and flushes surface the [`std::io::Error`] of the underlying
//! destination unchanged.
//!
//! # Examples
//!
//! ```
//! use taglog_sink::{CaptureBuffer, OutputSink, SinkKind};
//!
//! let buffer = CaptureBuffer::new();
//! let mut sink = OutputSink::from(buffer.clone());
//! assert_eq!(sink.kind(), SinkKind::Writer);
//! assert!(!sink.supports_color());
//!
//! sink.write_line("hello\n")?;
//! assert_eq!(buffer.contents(), "hello\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod error;
mod sink;
mod terminal;

pub use error::SinkError;
pub use sink::{CaptureBuffer, OutputSink, SinkKind};
pub use terminal::stdout_is_terminal;
