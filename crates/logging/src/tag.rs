//! crates/logging/src/tag.rs
//! Tags: secondary labels with a one-byte runtime identity.
//!
//! Identity `0` belongs to the built-in "untagged" sentinel returned by
//! [`Tag::no_tag`]. User tags are numbered from `1` upwards in creation order.
//! The identity space is a single byte: after `255` the counter wraps back to
//! `1`, so a process that creates more than 255 tags reuses identities and the
//! aliased tags compare equal and share one filter table entry. Identities are
//! never reclaimed.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

/// Name of the sentinel tag attached to untagged messages.
pub const NO_TAG_NAME: &str = "NONE";

/// One-byte tag identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagId(u8);

impl TagId {
    /// Number of distinct identities.
    pub const COUNT: usize = 256;

    /// Identity of the untagged sentinel.
    pub const NONE: Self = Self(0);

    /// First identity handed out to user tags.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw identity.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw identity.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into per-tag tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A named label used to classify and filter messages independently of
/// their severity.
///
/// Equality and hashing only consider the identity: two tags created with the
/// same name are different tags.
///
/// ```
/// use taglog::Tag;
///
/// let first = Tag::new("net");
/// let second = Tag::new("net");
/// assert_ne!(first, second);
/// assert_eq!(first, first.clone());
/// assert_eq!(first.to_string(), "[net]");
/// ```
#[derive(Clone, Debug)]
pub struct Tag {
    name: Arc<str>,
    id: TagId,
}

static TAG_IDS: TagAllocator = TagAllocator::new();

impl Tag {
    /// Creates a tag with the next process-wide identity.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TAG_IDS.allocate(name)
    }

    /// Returns the shared sentinel used for untagged messages.
    #[must_use]
    pub fn no_tag() -> &'static Self {
        static NO_TAG: OnceLock<Tag> = OnceLock::new();
        NO_TAG.get_or_init(|| Self {
            name: Arc::from(NO_TAG_NAME),
            id: TagId::NONE,
        })
    }

    /// The tag's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag's identity.
    #[must_use]
    pub const fn id(&self) -> TagId {
        self.id
    }

    /// Reports whether this is the untagged sentinel (or aliases it).
    #[must_use]
    pub fn is_no_tag(&self) -> bool {
        self.id == TagId::NONE
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// Sequential source of tag identities.
///
/// Every [`Tag::new`] draws from the single process-wide instance, since all
/// tags share one identity space and one filter table per logger.
#[derive(Debug)]
pub(crate) struct TagAllocator {
    next: AtomicU8,
    wrapped: AtomicBool,
}

impl TagAllocator {
    /// Creates an allocator whose first identity is [`TagId::FIRST`].
    pub(crate) const fn new() -> Self {
        Self {
            next: AtomicU8::new(TagId::FIRST.get()),
            wrapped: AtomicBool::new(false),
        }
    }

    /// Creates a tag named `name` with the next identity.
    pub(crate) fn allocate(&self, name: impl Into<Arc<str>>) -> Tag {
        Tag {
            name: name.into(),
            id: self.next_id(),
        }
    }

    #[cfg(test)]
    fn peek(&self) -> TagId {
        TagId(self.next.load(Ordering::Acquire))
    }

    #[cfg(test)]
    fn has_wrapped(&self) -> bool {
        self.wrapped.load(Ordering::Acquire)
    }

    fn next_id(&self) -> TagId {
        let previous = self
            .next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(if current == u8::MAX {
                    TagId::FIRST.get()
                } else {
                    current + 1
                })
            })
            .unwrap_or_else(|current| current);

        if previous == u8::MAX && !self.wrapped.swap(true, Ordering::AcqRel) {
            tracing::warn!(
                "tag identities exhausted; new tags now reuse identities starting at {}",
                TagId::FIRST
            );
        }

        TagId(previous)
    }
}
