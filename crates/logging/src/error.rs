//! crates/logging/src/error.rs
//! Errors raised while parsing logger configuration tokens.

use thiserror::Error;

/// Failure to interpret a severity or flag name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token was empty after trimming.
    #[error("empty configuration token")]
    EmptyToken,
    /// The name does not match any severity.
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
    /// The name does not match any flag.
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}
