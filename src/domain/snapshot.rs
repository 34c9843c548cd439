//! Immutable description of what a list should display.
//!
//! A [`Snapshot`] is an ordered sequence of sections, each with its ordered
//! items. It is built once with [`Snapshot::append_sections`] and
//! [`Snapshot::append_items`], handed to a rendering surface and then thrown
//! away. The surface compares it with whatever it displayed before (see
//! [`SnapshotDiff`](super::SnapshotDiff)).
//!
//! Section identities are unique within a snapshot, and so are items across
//! all of its sections. Breaking either rule is a programmer error and panics,
//! the same way appending to an unknown section does.

use super::section::{Item, Section, SectionId};

/// Ordered sections and items at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    sections: Vec<(SectionId, Vec<Item>)>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Builds a snapshot holding every section and its items, in order.
    ///
    /// # Panics
    ///
    /// Panics if two sections share an identity.
    #[must_use]
    pub fn from_sections(sections: &[Section]) -> Self {
        let mut snapshot = Self::new();
        snapshot.append_sections(sections.iter().map(|s| s.id));
        for section in sections {
            snapshot.append_items(section.items.iter().cloned(), section.id);
        }
        snapshot
    }

    /// Appends empty sections after the existing ones.
    ///
    /// # Panics
    ///
    /// Panics if an identity is already present in the snapshot.
    pub fn append_sections(&mut self, ids: impl IntoIterator<Item = SectionId>) {
        for id in ids {
            assert!(
                self.index_of_section(id).is_none(),
                "section `{id}` already exists in snapshot"
            );
            self.sections.push((id, Vec::new()));
        }
    }

    /// Appends items to the end of a section.
    ///
    /// # Parameters
    ///
    /// * `items` - Items to append, in order
    /// * `to_section` - Identity of a section already in the snapshot
    ///
    /// # Panics
    ///
    /// Panics if the section is not part of the snapshot, or if an item is
    /// already present in any section (including earlier in `items`).
    pub fn append_items(&mut self, items: impl IntoIterator<Item = Item>, to_section: SectionId) {
        let Some(index) = self.index_of_section(to_section) else {
            panic!("section `{to_section}` is not part of snapshot");
        };
        for item in items {
            assert!(
                !self.contains_item(&item),
                "item `{}` already exists in snapshot",
                item.title
            );
            self.sections[index].1.push(item);
        }
    }

    /// Whether any section holds `item`.
    #[must_use]
    pub fn contains_item(&self, item: &Item) -> bool {
        self.sections.iter().any(|(_, items)| items.contains(item))
    }

    /// Section identities in display order.
    #[must_use]
    pub fn section_identifiers(&self) -> Vec<SectionId> {
        self.sections.iter().map(|(id, _)| *id).collect()
    }

    /// Every item across all sections, in display order.
    #[must_use]
    pub fn item_identifiers(&self) -> Vec<&Item> {
        self.sections.iter().flat_map(|(_, items)| items).collect()
    }

    /// Items of one section, or `None` if the section is absent.
    #[must_use]
    pub fn items(&self, section: SectionId) -> Option<&[Item]> {
        self.index_of_section(section)
            .map(|index| self.sections[index].1.as_slice())
    }

    /// Zero-based position of a section.
    #[must_use]
    pub fn index_of_section(&self, section: SectionId) -> Option<usize> {
        self.sections.iter().position(|(id, _)| *id == section)
    }

    /// Number of sections.
    #[must_use]
    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    /// Number of items across all sections.
    #[must_use]
    pub fn number_of_items(&self) -> usize {
        self.sections.iter().map(|(_, items)| items.len()).sum()
    }

    /// Whether the snapshot holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates over `(ordinal, id, items)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, SectionId, &[Item])> + '_ {
        self.sections
            .iter()
            .enumerate()
            .map(|(ordinal, (id, items))| (ordinal, *id, items.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<Item> {
        names.iter().copied().map(Item::new).collect()
    }

    #[test]
    fn appends_keep_insertion_order() {
        let mut snapshot = Snapshot::new();
        snapshot.append_sections([SectionId::Secondary, SectionId::Primary]);
        snapshot.append_items(items(&["b", "a"]), SectionId::Primary);
        snapshot.append_items(items(&["c"]), SectionId::Primary);

        assert_eq!(
            snapshot.section_identifiers(),
            vec![SectionId::Secondary, SectionId::Primary]
        );
        assert_eq!(
            snapshot.items(SectionId::Primary).map(<[Item]>::to_vec),
            Some(items(&["b", "a", "c"]))
        );
        assert_eq!(snapshot.items(SectionId::Secondary).map(<[Item]>::len), Some(0));
        assert_eq!(snapshot.number_of_items(), 3);
        assert_eq!(snapshot.index_of_section(SectionId::Primary), Some(1));
    }

    #[test]
    fn from_sections_matches_manual_construction() {
        let sections = vec![
            Section::new(SectionId::Primary, items(&["x"])),
            Section::new(SectionId::Secondary, items(&["y", "z"])),
        ];

        let mut manual = Snapshot::new();
        manual.append_sections([SectionId::Primary, SectionId::Secondary]);
        manual.append_items(items(&["x"]), SectionId::Primary);
        manual.append_items(items(&["y", "z"]), SectionId::Secondary);

        assert_eq!(Snapshot::from_sections(&sections), manual);
    }

    #[test]
    fn iter_yields_ordinals() {
        let snapshot = Snapshot::from_sections(&[
            Section::new(SectionId::Primary, vec![]),
            Section::new(SectionId::Secondary, items(&["only"])),
        ]);

        let seen: Vec<(usize, SectionId, usize)> = snapshot
            .iter()
            .map(|(ordinal, id, items)| (ordinal, id, items.len()))
            .collect();
        assert_eq!(
            seen,
            vec![(0, SectionId::Primary, 0), (1, SectionId::Secondary, 1)]
        );
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn duplicate_section_is_a_precondition_violation() {
        let mut snapshot = Snapshot::new();
        snapshot.append_sections([SectionId::Primary, SectionId::Primary]);
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn duplicate_item_in_one_append_is_a_precondition_violation() {
        let mut snapshot = Snapshot::new();
        snapshot.append_sections([SectionId::Primary]);
        snapshot.append_items(items(&["a", "a"]), SectionId::Primary);
    }

    #[test]
    #[should_panic(expected = "item `a` already exists")]
    fn duplicate_item_across_sections_is_a_precondition_violation() {
        let mut snapshot = Snapshot::new();
        snapshot.append_sections([SectionId::Primary, SectionId::Secondary]);
        snapshot.append_items(items(&["a"]), SectionId::Primary);
        snapshot.append_items(items(&["a"]), SectionId::Secondary);
    }

    #[test]
    fn contains_item_searches_every_section() {
        let snapshot = Snapshot::from_sections(&[
            Section::new(SectionId::Primary, items(&["x"])),
            Section::new(SectionId::Secondary, items(&["y"])),
        ]);
        assert!(snapshot.contains_item(&Item::new("y")));
        assert!(!snapshot.contains_item(&Item::new("z")));
    }

    #[test]
    #[should_panic(expected = "not part of snapshot")]
    fn appending_to_missing_section_panics() {
        let mut snapshot = Snapshot::new();
        snapshot.append_items(items(&["orphan"]), SectionId::Secondary);
    }
}
