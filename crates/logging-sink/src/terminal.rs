//! crates/logging-sink/src/terminal.rs
//! Interactive console detection.

use is_terminal::IsTerminal;

/// Reports whether the process' standard output is attached to a terminal.
///
/// Redirected output (pipes, files) returns `false`; callers use this to
/// suppress ANSI color sequences that would otherwise pollute the capture.
#[must_use]
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}
