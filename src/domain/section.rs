//! Section and item models.
//!
//! A [`Section`] pairs a stable [`SectionId`] with an ordered list of
//! [`Item`]s. Section identity is the diffing key: two sections with the same
//! id are the same section across snapshots even when their items differ.
//! Items have no identity of their own and are compared by value.

use std::fmt;

/// Stable identity of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    /// The first section of the demo list.
    Primary,
    /// The second section of the demo list.
    Secondary,
}

impl SectionId {
    /// Every section identity in display order.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];

    /// Raw string form of the identity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single list row. Two items with the same title are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Text shown in the item's cell.
    pub title: String,
}

impl Item {
    /// Creates an item with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A section identity together with its ordered items.
///
/// Data sources hand sections to the list model, which turns them into a
/// [`Snapshot`](super::Snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Identity used as the diffing key.
    pub id: SectionId,
    /// Items in insertion order.
    pub items: Vec<Item>,
}

impl Section {
    /// Creates a section from an identity and its items.
    #[must_use]
    pub const fn new(id: SectionId, items: Vec<Item>) -> Self {
        Self { id, items }
    }
}
