//! crates/logging/src/filter.rs
//! The filter gate: per-severity and per-tag tables plus a shared polarity.

use crate::flags::Flags;
use crate::severity::Severity;
use crate::tag::{Tag, TagId};

/// How listed entries in the filter tables are interpreted.
///
/// The polarity is shared by the severity table and the tag table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterMode {
    /// Only listed entries pass.
    Whitelist,
    /// Listed entries are suppressed.
    Blacklist,
}

impl FilterMode {
    /// Reads the polarity from [`Flags::WHITELIST_FILTER`].
    #[must_use]
    pub const fn from_flags(flags: Flags) -> Self {
        if flags.contains(Flags::WHITELIST_FILTER) {
            Self::Whitelist
        } else {
            Self::Blacklist
        }
    }

    /// Reports whether an entry whose listed state is `listed` is suppressed.
    #[must_use]
    pub const fn suppresses(self, listed: bool) -> bool {
        match self {
            Self::Whitelist => !listed,
            Self::Blacklist => listed,
        }
    }
}

/// One boolean per severity and one per tag identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterTables {
    severities: [bool; Severity::COUNT],
    tags: [bool; TagId::COUNT],
}

impl FilterTables {
    /// Creates tables with no entry listed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            severities: [false; Severity::COUNT],
            tags: [false; TagId::COUNT],
        }
    }

    /// Marks or unmarks a severity.
    pub fn set_severity(&mut self, severity: Severity, listed: bool) {
        self.severities[severity.index()] = listed;
    }

    /// Marks or unmarks a tag identity.
    pub fn set_tag(&mut self, id: TagId, listed: bool) {
        self.tags[id.index()] = listed;
    }

    /// Reports whether `severity` is listed.
    #[must_use]
    pub const fn is_severity_listed(&self, severity: Severity) -> bool {
        self.severities[severity.index()]
    }

    /// Reports whether the tag identity `id` is listed.
    #[must_use]
    pub const fn is_tag_listed(&self, id: TagId) -> bool {
        self.tags[id.index()]
    }

    /// Listed severities in ascending order.
    pub fn listed_severities(&self) -> impl Iterator<Item = Severity> + '_ {
        Severity::ALL
            .into_iter()
            .filter(|severity| self.is_severity_listed(*severity))
    }

    /// Listed tag identities in ascending order.
    pub fn listed_tags(&self) -> impl Iterator<Item = TagId> + '_ {
        (0..=u8::MAX)
            .map(TagId::new)
            .filter(|id| self.is_tag_listed(*id))
    }

    /// Runs the gate: returns `true` when a message of `severity` tagged
    /// `tag` must be dropped under `flags`.
    ///
    /// Each table is only consulted when its filter toggle is set; either
    /// check failing suppresses the message.
    #[must_use]
    pub const fn suppresses(&self, flags: Flags, severity: Severity, tag: TagId) -> bool {
        let mode = FilterMode::from_flags(flags);
        if flags.contains(Flags::SEVERITY_FILTER)
            && mode.suppresses(self.is_severity_listed(severity))
        {
            return true;
        }
        flags.contains(Flags::TAG_FILTER) && mode.suppresses(self.is_tag_listed(tag))
    }
}

impl Default for FilterTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that owns an entry in the filter tables.
///
/// Implemented for [`Severity`], [`Tag`] and [`TagId`] so the logger exposes
/// a single `set_filter`/`clear_filter` pair.
pub trait FilterTarget {
    /// Updates this target's entry in `tables`.
    fn mark(&self, tables: &mut FilterTables, listed: bool);
}

impl FilterTarget for Severity {
    fn mark(&self, tables: &mut FilterTables, listed: bool) {
        tables.set_severity(*self, listed);
    }
}

impl FilterTarget for TagId {
    fn mark(&self, tables: &mut FilterTables, listed: bool) {
        tables.set_tag(*self, listed);
    }
}

impl FilterTarget for Tag {
    fn mark(&self, tables: &mut FilterTables, listed: bool) {
        tables.set_tag(self.id(), listed);
    }
}

impl<T> FilterTarget for &T
where
    T: FilterTarget + ?Sized,
{
    fn mark(&self, tables: &mut FilterTables, listed: bool) {
        (**self).mark(tables, listed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing(tables: &FilterTables, flags: Flags, tag: TagId) -> Vec<Severity> {
        Severity::ALL
            .into_iter()
            .filter(|severity| !tables.suppresses(flags, *severity, tag))
            .collect()
    }

    #[test]
    fn nothing_is_filtered_without_filter_flags() {
        let mut tables = FilterTables::new();
        tables.set_severity(Severity::Info, true);
        tables.set_tag(TagId::new(3), true);
        assert_eq!(passing(&tables, Flags::DEFAULT, TagId::NONE), Severity::ALL);
        assert_eq!(
            passing(&tables, Flags::EMPTY, TagId::new(3)),
            Severity::ALL
        );
    }

    #[test]
    fn whitelist_only_passes_listed_severities() {
        let mut tables = FilterTables::new();
        tables.set_severity(Severity::Error, true);
        tables.set_severity(Severity::Fatal, true);
        let flags = Flags::DEFAULT | Flags::SEVERITY_FILTER;
        assert_eq!(
            passing(&tables, flags, TagId::NONE),
            vec![Severity::Error, Severity::Fatal]
        );
    }

    #[test]
    fn blacklist_suppresses_listed_severities() {
        let mut tables = FilterTables::new();
        tables.set_severity(Severity::Debug, true);
        let flags = (Flags::DEFAULT | Flags::SEVERITY_FILTER).difference(Flags::WHITELIST_FILTER);
        assert_eq!(
            passing(&tables, flags, TagId::NONE),
            vec![
                Severity::Trace,
                Severity::Info,
                Severity::Warning,
                Severity::Error,
                Severity::Fatal
            ]
        );
    }

    #[test]
    fn tag_whitelist() {
        let mut tables = FilterTables::new();
        tables.set_tag(TagId::new(7), true);
        let flags = Flags::DEFAULT | Flags::TAG_FILTER;
        assert!(!tables.suppresses(flags, Severity::Info, TagId::new(7)));
        assert!(tables.suppresses(flags, Severity::Info, TagId::new(8)));
        assert!(tables.suppresses(flags, Severity::Info, TagId::NONE));
    }

    #[test]
    fn tag_blacklist() {
        let mut tables = FilterTables::new();
        tables.set_tag(TagId::new(7), true);
        let flags = Flags::TAG_FILTER;
        assert!(tables.suppresses(flags, Severity::Info, TagId::new(7)));
        assert!(!tables.suppresses(flags, Severity::Info, TagId::new(8)));
    }

    #[test]
    fn both_checks_must_pass() {
        let mut tables = FilterTables::new();
        tables.set_severity(Severity::Error, true);
        tables.set_tag(TagId::new(2), true);
        let flags = Flags::DEFAULT | Flags::SEVERITY_FILTER | Flags::TAG_FILTER;
        assert!(!tables.suppresses(flags, Severity::Error, TagId::new(2)));
        assert!(tables.suppresses(flags, Severity::Error, TagId::new(3)));
        assert!(tables.suppresses(flags, Severity::Info, TagId::new(2)));
    }

    #[test]
    fn clearing_an_entry_unlists_it() {
        let mut tables = FilterTables::new();
        tables.set_severity(Severity::Warning, true);
        tables.set_severity(Severity::Warning, false);
        assert!(!tables.is_severity_listed(Severity::Warning));
        assert_eq!(tables, FilterTables::default());
    }

    #[test]
    fn listed_iterators() {
        let mut tables = FilterTables::new();
        Severity::Fatal.mark(&mut tables, true);
        Severity::Trace.mark(&mut tables, true);
        TagId::new(200).mark(&mut tables, true);
        TagId::NONE.mark(&mut tables, true);
        assert_eq!(
            tables.listed_severities().collect::<Vec<_>>(),
            vec![Severity::Trace, Severity::Fatal]
        );
        assert_eq!(
            tables.listed_tags().collect::<Vec<_>>(),
            vec![TagId::NONE, TagId::new(200)]
        );
    }

    #[test]
    fn tags_mark_by_identity() {
        let tag = Tag::new("io");
        let mut tables = FilterTables::new();
        (&tag).mark(&mut tables, true);
        assert!(tables.is_tag_listed(tag.id()));
    }

    #[test]
    fn mode_from_flags() {
        assert_eq!(FilterMode::from_flags(Flags::DEFAULT), FilterMode::Whitelist);
        assert_eq!(FilterMode::from_flags(Flags::EMPTY), FilterMode::Blacklist);
        assert!(FilterMode::Whitelist.suppresses(false));
        assert!(!FilterMode::Blacklist.suppresses(false));
    }
}
