//! Differences between two snapshots.
//!
//! Sections are matched by [`SectionId`] and items by value. Items that live
//! in a section that was inserted or removed as a whole are not listed again
//! at item level. Items are unique within a snapshot, so each value maps to
//! exactly one position on either side.

use std::collections::HashMap;

use super::section::{Item, SectionId};
use super::snapshot::Snapshot;

/// Position of an item: section ordinal and index within that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    /// Zero-based section position within its snapshot.
    pub section: usize,
    /// Zero-based item position within its section.
    pub item: usize,
}

/// Changes needed to turn one snapshot into another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// Sections present only in the new snapshot.
    pub inserted_sections: Vec<SectionId>,
    /// Sections present only in the old snapshot.
    pub removed_sections: Vec<SectionId>,
    /// Sections present in both at different positions, as `(id, from, to)`.
    pub moved_sections: Vec<(SectionId, usize, usize)>,
    /// Items new to a section that existed before, at their new path.
    pub inserted_items: Vec<IndexPath>,
    /// Items gone from a section that still exists, at their old path.
    pub removed_items: Vec<IndexPath>,
    /// Items present in both at different paths, as `(from, to)`.
    pub moved_items: Vec<(IndexPath, IndexPath)>,
}

impl SnapshotDiff {
    /// Computes the changes from `old` to `new`.
    #[must_use]
    pub fn between(old: &Snapshot, new: &Snapshot) -> Self {
        let old_sections = section_positions(old);
        let new_sections = section_positions(new);

        let mut diff = Self::default();

        for (ordinal, id, _) in old.iter() {
            match new_sections.get(&id) {
                None => diff.removed_sections.push(id),
                Some(&to) if to != ordinal => diff.moved_sections.push((id, ordinal, to)),
                Some(_) => {}
            }
        }
        for (_, id, _) in new.iter() {
            if !old_sections.contains_key(&id) {
                diff.inserted_sections.push(id);
            }
        }

        let old_items = item_paths(old, |id| new_sections.contains_key(&id));
        let new_items = item_paths(new, |id| old_sections.contains_key(&id));

        for (item, &from) in &old_items {
            match new_items.get(item) {
                None => diff.removed_items.push(from),
                Some(&to) if to != from => diff.moved_items.push((from, to)),
                Some(_) => {}
            }
        }
        for (item, &to) in &new_items {
            if !old_items.contains_key(item) {
                diff.inserted_items.push(to);
            }
        }

        diff.removed_items.sort_by_key(|p| (p.section, p.item));
        diff.inserted_items.sort_by_key(|p| (p.section, p.item));
        diff.moved_items.sort_by_key(|(from, _)| (from.section, from.item));

        diff
    }

    /// Whether both snapshots describe the same display state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inserted_sections.is_empty()
            && self.removed_sections.is_empty()
            && self.moved_sections.is_empty()
            && self.inserted_items.is_empty()
            && self.removed_items.is_empty()
            && self.moved_items.is_empty()
    }

    /// Total number of section and item changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.inserted_sections.len()
            + self.removed_sections.len()
            + self.moved_sections.len()
            + self.inserted_items.len()
            + self.removed_items.len()
            + self.moved_items.len()
    }
}

fn section_positions(snapshot: &Snapshot) -> HashMap<SectionId, usize> {
    snapshot.iter().map(|(ordinal, id, _)| (id, ordinal)).collect()
}

fn item_paths<'a>(
    snapshot: &'a Snapshot,
    section_survives: impl Fn(SectionId) -> bool,
) -> HashMap<&'a Item, IndexPath> {
    let mut paths = HashMap::new();
    for (section, id, items) in snapshot.iter() {
        if !section_survives(id) {
            continue;
        }
        for (item, value) in items.iter().enumerate() {
            paths.insert(value, IndexPath { section, item });
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;

    fn snapshot(sections: &[(SectionId, Vec<&str>)]) -> Snapshot {
        let sections: Vec<Section> = sections
            .iter()
            .map(|(id, titles)| Section::new(*id, titles.iter().copied().map(Item::new).collect()))
            .collect();
        Snapshot::from_sections(&sections)
    }

    const fn path(section: usize, item: usize) -> IndexPath {
        IndexPath { section, item }
    }

    #[test]
    fn identical_snapshots_produce_no_changes() {
        let a = snapshot(&[(SectionId::Primary, vec!["a", "b"]), (SectionId::Secondary, vec!["c"])]);
        let diff = SnapshotDiff::between(&a, &a.clone());
        assert!(diff.is_empty());
        assert_eq!(diff.change_count(), 0);
    }

    #[test]
    fn applying_to_empty_inserts_whole_sections() {
        let new = snapshot(&[(SectionId::Primary, vec!["a"]), (SectionId::Secondary, vec!["b"])]);
        let diff = SnapshotDiff::between(&Snapshot::new(), &new);

        assert_eq!(diff.inserted_sections, vec![SectionId::Primary, SectionId::Secondary]);
        assert!(diff.inserted_items.is_empty());
        assert_eq!(diff.change_count(), 2);
    }

    #[test]
    fn detects_item_insert_remove_and_move() {
        let old = snapshot(&[(SectionId::Primary, vec!["a", "b", "c"])]);
        let new = snapshot(&[(SectionId::Primary, vec!["c", "a", "d"])]);
        let diff = SnapshotDiff::between(&old, &new);

        assert_eq!(diff.removed_items, vec![path(0, 1)]);
        assert_eq!(diff.inserted_items, vec![path(0, 2)]);
        assert_eq!(diff.moved_items, vec![(path(0, 0), path(0, 1)), (path(0, 2), path(0, 0))]);
    }

    #[test]
    fn items_move_between_sections_by_value() {
        let old = snapshot(&[(SectionId::Primary, vec!["a"]), (SectionId::Secondary, vec!["b"])]);
        let new = snapshot(&[(SectionId::Primary, vec![]), (SectionId::Secondary, vec!["b", "a"])]);
        let diff = SnapshotDiff::between(&old, &new);

        assert_eq!(diff.moved_items, vec![(path(0, 0), path(1, 1))]);
        assert!(diff.inserted_items.is_empty());
        assert!(diff.removed_items.is_empty());
    }

    #[test]
    fn section_reorder_is_a_move_not_a_replace() {
        let old = snapshot(&[(SectionId::Primary, vec!["a"]), (SectionId::Secondary, vec!["b"])]);
        let new = snapshot(&[(SectionId::Secondary, vec!["b"]), (SectionId::Primary, vec!["a"])]);
        let diff = SnapshotDiff::between(&old, &new);

        assert_eq!(
            diff.moved_sections,
            vec![(SectionId::Primary, 0, 1), (SectionId::Secondary, 1, 0)]
        );
        assert!(diff.inserted_sections.is_empty());
        assert!(diff.removed_sections.is_empty());
    }

    #[test]
    fn removed_section_does_not_list_its_items() {
        let old = snapshot(&[(SectionId::Primary, vec!["a"]), (SectionId::Secondary, vec!["b", "c"])]);
        let new = snapshot(&[(SectionId::Primary, vec!["a"])]);
        let diff = SnapshotDiff::between(&old, &new);

        assert_eq!(diff.removed_sections, vec![SectionId::Secondary]);
        assert!(diff.removed_items.is_empty());
        assert_eq!(diff.change_count(), 1);
    }
}
