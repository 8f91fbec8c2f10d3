//! crates/logging/src/format.rs
//! Line rendering: prefix, concatenated values, suffix.

use std::fmt::{self, Write as _};

use time::OffsetDateTime;
use time::macros::format_description;

use crate::flags::Flags;
use crate::severity::{COLOR_RESET, Severity};
use crate::tag::Tag;

/// Separator written at the end of the prefix when
/// [`Flags::WHITESPACE_PREFIX`] is set.
pub const FIELD_SEPARATOR: char = '\t';

/// Everything that decides how one line looks.
#[derive(Clone, Copy, Debug)]
pub struct LineStyle {
    /// Active toggles.
    pub flags: Flags,
    /// Whether the destination accepts ANSI colors.
    pub color_capable: bool,
}

impl LineStyle {
    /// Style for `flags` on a destination that does (or does not) accept
    /// colors.
    #[must_use]
    pub const fn new(flags: Flags, color_capable: bool) -> Self {
        Self {
            flags,
            color_capable,
        }
    }

    const fn colorize(self) -> bool {
        self.color_capable && self.flags.contains(Flags::SEVERITY_COLORS)
    }
}

/// Current wall-clock time in the local offset, or UTC when the local offset
/// cannot be determined.
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Appends `[HH:MM:SS]` for `at`.
pub fn write_timestamp(out: &mut String, at: OffsetDateTime) {
    let clock = at
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| String::from("--:--:--"));
    out.push('[');
    out.push_str(&clock);
    out.push(']');
}

/// Appends the enabled prefix components in their fixed order: color, time,
/// severity label, tag label, separator.
pub fn write_prefix(
    out: &mut String,
    style: LineStyle,
    at: OffsetDateTime,
    severity: Severity,
    tag: &Tag,
) {
    let flags = style.flags;
    if style.colorize() {
        out.push_str(severity.color_code());
    }
    if flags.contains(Flags::TIMESTAMPS_PREFIX) {
        write_timestamp(out, at);
    }
    if flags.contains(Flags::SEVERITY_PREFIX) {
        out.push_str(severity.label());
    }
    if flags.contains(Flags::TAG_PREFIX) {
        let _ = write!(out, "{tag}");
    }
    if flags.contains(Flags::WHITESPACE_PREFIX) {
        out.push(FIELD_SEPARATOR);
    }
}

/// Appends each value's `Display` output with nothing in between.
pub fn write_values(out: &mut String, values: &[&dyn fmt::Display]) {
    for value in values {
        let _ = write!(out, "{value}");
    }
}

/// Appends the color reset and the line terminator when enabled.
pub fn write_suffix(out: &mut String, style: LineStyle) {
    if style.colorize() {
        out.push_str(COLOR_RESET);
    }
    if style.flags.contains(Flags::END_OF_LINE_SUFFIX) {
        out.push('\n');
    }
}

/// Renders a full line into `out`.
pub fn write_line(
    out: &mut String,
    style: LineStyle,
    at: OffsetDateTime,
    severity: Severity,
    tag: &Tag,
    values: &[&dyn fmt::Display],
) {
    write_prefix(out, style, at, severity, tag);
    write_values(out, values);
    write_suffix(out, style);
}

/// Renders a full line into a new string.
///
/// ```
/// use taglog::format::{LineStyle, render_line};
/// use taglog::{Flags, Severity, Tag};
///
/// let at = time::macros::datetime!(2024-01-02 13:04:05 UTC);
/// let style = LineStyle::new(Flags::DEFAULT, false);
/// let line = render_line(style, at, Severity::Info, Tag::no_tag(), &[&"a", &1, &'c']);
/// assert_eq!(line, "[13:04:05][Info]\ta1c\n");
/// ```
#[must_use]
pub fn render_line(
    style: LineStyle,
    at: OffsetDateTime,
    severity: Severity,
    tag: &Tag,
    values: &[&dyn fmt::Display],
) -> String {
    let mut out = String::new();
    write_line(&mut out, style, at, severity, tag, values);
    out
}
