//! List model and its data sources.
//!
//! [`ListModel`] turns whatever its [`DataSource`] provides into a fresh
//! [`Snapshot`]. The built-in [`DemoDataSource`] produces two sections of five
//! items whose titles are derived only from the section ordinal and item index,
//! so regenerating the snapshot always yields the same content.

use std::fmt;

use super::section::{Item, Section, SectionId};
use super::snapshot::Snapshot;

/// Number of items the demo data source puts in every section.
pub const DEMO_ITEMS_PER_SECTION: usize = 5;

/// Supplies the sections a [`ListModel`] displays.
///
/// Implementations must return unique section identities and items that are
/// unique across all sections; see [`Snapshot::append_sections`] and
/// [`Snapshot::append_items`].
pub trait DataSource {
    /// Sections to display, in order.
    fn sections(&self) -> Vec<Section>;
}

/// Static demo content: `primary` and `secondary`, five items each.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoDataSource;

impl DemoDataSource {
    /// Builds the items for the section at `ordinal`.
    #[must_use]
    pub fn make_items(ordinal: usize) -> Vec<Item> {
        (0..DEMO_ITEMS_PER_SECTION)
            .map(|index| Item::new(format!("My Item number {index}: Section: {ordinal}")))
            .collect()
    }
}

impl DataSource for DemoDataSource {
    fn sections(&self) -> Vec<Section> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(ordinal, id)| Section::new(*id, Self::make_items(ordinal)))
            .collect()
    }
}

/// Produces the snapshot that should currently be displayed.
pub struct ListModel {
    source: Box<dyn DataSource>,
}

impl ListModel {
    /// Creates a model backed by the given data source.
    #[must_use]
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Builds a new snapshot from the data source.
    ///
    /// Pure construction: the caller applies the result to a surface.
    ///
    /// # Panics
    ///
    /// Panics if the data source returns duplicate section identities.
    #[must_use]
    pub fn build_snapshot(&self) -> Snapshot {
        let sections = self.source.sections();
        let snapshot = Snapshot::from_sections(&sections);
        tracing::trace!(
            sections = snapshot.number_of_sections(),
            items = snapshot.number_of_items(),
            "snapshot built"
        );
        snapshot
    }
}

impl Default for ListModel {
    fn default() -> Self {
        Self::new(Box::new(DemoDataSource))
    }
}

impl fmt::Debug for ListModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListModel").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_snapshot_has_two_sections_of_five() {
        let snapshot = ListModel::default().build_snapshot();

        assert_eq!(
            snapshot.section_identifiers(),
            vec![SectionId::Primary, SectionId::Secondary]
        );
        for id in SectionId::ALL {
            assert_eq!(snapshot.items(id).map(<[Item]>::len), Some(5));
        }
    }

    #[test]
    fn build_snapshot_is_idempotent() {
        let model = ListModel::default();
        assert_eq!(model.build_snapshot(), model.build_snapshot());
    }

    #[test]
    fn titles_are_unique_and_encode_position() {
        let snapshot = ListModel::default().build_snapshot();
        let titles: HashSet<&str> = snapshot
            .item_identifiers()
            .into_iter()
            .map(|item| item.title.as_str())
            .collect();

        assert_eq!(titles.len(), snapshot.number_of_items());
        assert!(titles.contains("My Item number 0: Section: 0"));
        assert!(titles.contains("My Item number 4: Section: 1"));
    }

    #[test]
    fn injected_source_replaces_demo_content() {
        struct Fixture;
        impl DataSource for Fixture {
            fn sections(&self) -> Vec<Section> {
                vec![Section::new(SectionId::Secondary, vec![Item::new("fixture")])]
            }
        }

        let snapshot = ListModel::new(Box::new(Fixture)).build_snapshot();
        assert_eq!(snapshot.section_identifiers(), vec![SectionId::Secondary]);
        assert_eq!(snapshot.item_identifiers(), vec![&Item::new("fixture")]);
    }
}
