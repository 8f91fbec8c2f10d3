//! crates/logging/src/severity.rs
//! Ordered message severities and their rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Importance of a log message, ordered from least to most severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fine-grained tracing output.
    Trace,
    /// Diagnostic detail.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected that does not stop the program.
    Warning,
    /// An operation failed.
    Error,
    /// The program cannot continue.
    Fatal,
}

/// ANSI sequence that restores the terminal's default attributes.
pub const COLOR_RESET: &str = "\x1b[0m";

impl Severity {
    /// Number of severities.
    pub const COUNT: usize = 6;

    /// Every severity in ascending order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Position of the severity in [`Severity::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bare name, e.g. `"Warning"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }

    /// Bracketed label written in the line prefix, e.g. `"[Warning]"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "[Trace]",
            Self::Debug => "[Debug]",
            Self::Info => "[Info]",
            Self::Warning => "[Warning]",
            Self::Error => "[Error]",
            Self::Fatal => "[Fatal]",
        }
    }

    /// ANSI sequence that starts a line of this severity.
    #[must_use]
    pub const fn color_code(self) -> &'static str {
        match self {
            Self::Trace => COLOR_RESET,
            Self::Debug => "\x1b[32m",
            Self::Info => "\x1b[34m",
            Self::Warning => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Fatal => "\x1b[37;41m",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    /// Parses a severity name, ignoring ASCII case. `warn` is accepted as an
    /// alias for [`Severity::Warning`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyToken);
        }
        Self::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(name))
            .or_else(|| name.eq_ignore_ascii_case("warn").then_some(Self::Warning))
            .ok_or_else(|| ParseError::UnknownSeverity(name.to_owned()))
    }
}
