//! crates/logging/src/flags.rs
//! Formatting and filtering toggles.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use crate::error::ParseError;

/// Set of independent on/off toggles that control formatting and filtering.
///
/// A single toggle is itself a `Flags` value with one bit set; combine them
/// with `|`.
///
/// ```
/// use taglog::Flags;
///
/// let flags = Flags::DEFAULT | Flags::TAG_PREFIX;
/// assert!(flags.contains(Flags::TAG_PREFIX));
/// assert!(flags.contains(Flags::TIMESTAMPS_PREFIX));
/// assert!(!flags.contains(Flags::SEVERITY_FILTER));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Flags(u16);

impl Flags {
    /// Prefix each line with a `[HH:MM:SS]` timestamp.
    pub const TIMESTAMPS_PREFIX: Self = Self(1 << 0);
    /// Prefix each line with the bracketed severity label.
    pub const SEVERITY_PREFIX: Self = Self(1 << 1);
    /// End the prefix with a field separator.
    pub const WHITESPACE_PREFIX: Self = Self(1 << 2);
    /// Prefix each line with the bracketed tag name.
    pub const TAG_PREFIX: Self = Self(1 << 3);
    /// Color lines by severity when writing to standard output.
    pub const SEVERITY_COLORS: Self = Self(1 << 4);
    /// Consult the severity filter table.
    pub const SEVERITY_FILTER: Self = Self(1 << 5);
    /// Consult the tag filter table.
    pub const TAG_FILTER: Self = Self(1 << 6);
    /// Interpret both filter tables as whitelists; cleared means blacklists.
    pub const WHITELIST_FILTER: Self = Self(1 << 7);
    /// Terminate each line with `\n`.
    pub const END_OF_LINE_SUFFIX: Self = Self(1 << 8);
    /// Run the filter gate before rendering instead of after.
    pub const FILTER_BEFORE_FORMAT: Self = Self(1 << 9);

    /// No toggles set.
    pub const EMPTY: Self = Self(0);

    /// Timestamp, severity label, separator, colors, whitelist mode and
    /// trailing newline.
    pub const DEFAULT: Self = Self(
        Self::TIMESTAMPS_PREFIX.0
            | Self::SEVERITY_PREFIX.0
            | Self::WHITESPACE_PREFIX.0
            | Self::SEVERITY_COLORS.0
            | Self::WHITELIST_FILTER.0
            | Self::END_OF_LINE_SUFFIX.0,
    );

    const NAMED: [(Self, &'static str); 10] = [
        (Self::TIMESTAMPS_PREFIX, "timestamps"),
        (Self::SEVERITY_PREFIX, "severity"),
        (Self::WHITESPACE_PREFIX, "whitespace"),
        (Self::TAG_PREFIX, "tag"),
        (Self::SEVERITY_COLORS, "colors"),
        (Self::SEVERITY_FILTER, "severity-filter"),
        (Self::TAG_FILTER, "tag-filter"),
        (Self::WHITELIST_FILTER, "whitelist"),
        (Self::END_OF_LINE_SUFFIX, "newline"),
        (Self::FILTER_BEFORE_FORMAT, "filter-before-format"),
    ];

    /// Builds a set from raw bits, dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & Self::all().0)
    }

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Every known toggle.
    #[must_use]
    pub const fn all() -> Self {
        Self((1 << 10) - 1)
    }

    /// Reports whether every toggle in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Reports whether no toggle is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets every toggle in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears every toggle in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `self` without the toggles in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Default flags adjusted for the current console.
    ///
    /// Colors are dropped when standard output is not a terminal so redirected
    /// output stays free of escape sequences.
    #[must_use]
    pub fn for_console() -> Self {
        if taglog_sink::stdout_is_terminal() {
            Self::DEFAULT
        } else {
            Self::DEFAULT.difference(Self::SEVERITY_COLORS)
        }
    }

    /// Iterates over the names of the toggles that are set.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for Flags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::all().0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags({self})")
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        for (position, name) in self.names().enumerate() {
            if position > 0 {
                f.write_str("|")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = ParseError;

    /// Parses a single toggle name such as `"timestamps"` or `"tag-filter"`.
    /// Underscores are accepted in place of dashes and case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyToken);
        }
        let normalized = name.replace('_', "-").to_ascii_lowercase();
        Self::NAMED
            .into_iter()
            .find(|(_, candidate)| *candidate == normalized)
            .map(|(flag, _)| flag)
            .ok_or_else(|| ParseError::UnknownFlag(name.to_owned()))
    }
}
