//! crates/logging/src/config.rs
//! Logger configuration: flags plus listed filter entries.

use crate::error::ParseError;
use crate::filter::FilterTables;
use crate::flags::Flags;
use crate::severity::Severity;
use crate::tag::TagId;

/// Complete, detachable logger configuration.
///
/// Applied atomically with [`Logger::configure`](crate::Logger::configure)
/// and captured with [`Logger::config`](crate::Logger::config).
///
/// ```
/// use taglog::{Flags, LoggerConfig, Severity};
///
/// let mut config = LoggerConfig::default();
/// config.apply_flag_tokens("-colors,severity-filter").unwrap();
/// config.severities.push(Severity::Error);
///
/// assert!(!config.flags.contains(Flags::SEVERITY_COLORS));
/// assert!(config.flags.contains(Flags::SEVERITY_FILTER));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Active toggles.
    pub flags: Flags,
    /// Severities listed in the severity filter table.
    pub severities: Vec<Severity>,
    /// Tag identities listed in the tag filter table.
    pub tags: Vec<TagId>,
}

impl LoggerConfig {
    /// Configuration with `flags` and no listed entries.
    #[must_use]
    pub const fn with_flags(flags: Flags) -> Self {
        Self {
            flags,
            severities: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub(crate) fn from_parts(flags: Flags, tables: &FilterTables) -> Self {
        Self {
            flags,
            severities: tables.listed_severities().collect(),
            tags: tables.listed_tags().collect(),
        }
    }

    /// Builds the filter tables described by this configuration.
    #[must_use]
    pub fn filter_tables(&self) -> FilterTables {
        let mut tables = FilterTables::new();
        for severity in &self.severities {
            tables.set_severity(*severity, true);
        }
        for id in &self.tags {
            tables.set_tag(*id, true);
        }
        tables
    }

    /// Applies one flag token: `"tag"` sets the toggle, `"-tag"` clears it.
    pub fn apply_flag_token(&mut self, token: &str) -> Result<(), ParseError> {
        let token = token.trim();
        match token.strip_prefix('-') {
            Some(name) => self.flags.remove(name.parse()?),
            None => self.flags.insert(token.parse()?),
        }
        Ok(())
    }

    /// Applies a comma-separated list of flag tokens in order.
    ///
    /// Stops at the first invalid token; earlier tokens stay applied.
    pub fn apply_flag_tokens(&mut self, tokens: &str) -> Result<(), ParseError> {
        tokens
            .split(',')
            .try_for_each(|token| self.apply_flag_token(token))
    }

    /// Lists a severity, ignoring duplicates.
    pub fn list_severity(&mut self, severity: Severity) -> &mut Self {
        if !self.severities.contains(&severity) {
            self.severities.push(severity);
        }
        self
    }

    /// Lists a tag identity, ignoring duplicates.
    pub fn list_tag(&mut self, id: TagId) -> &mut Self {
        if !self.tags.contains(&id) {
            self.tags.push(id);
        }
        self
    }
}
