//! Rendering surface and cell provisioning.
//!
//! A [`RenderingSurface`] is the collaborator the appearance controller
//! drives: it is reconfigured with a [`ListConfiguration`] and receives
//! snapshots to display. [`TerminalSurface`] is the implementation for a
//! Zellij pane. It keeps the displayed snapshot, diffs each new one against
//! it, and lays sections out as rows using a [`CellProvider`] for cells,
//! headers and footers.

use crate::app::modes::{ListConfiguration, SupplementaryMode};
use crate::domain::{IndexPath, Item, Snapshot, SnapshotDiff};

/// Glyph shown at the trailing edge of every cell.
pub const FORWARD_CHEVRON: char = '›';

/// The contract the appearance controller drives.
pub trait RenderingSurface {
    /// Switches the visual layout strategy.
    fn reconfigure(&mut self, configuration: ListConfiguration);

    /// Replaces the displayed content.
    ///
    /// # Parameters
    ///
    /// * `snapshot` - Desired display state
    /// * `animated` - Whether the change should be animated
    ///
    /// # Returns
    ///
    /// The changes from the previously displayed snapshot to `snapshot`.
    fn apply_snapshot(&mut self, snapshot: Snapshot, animated: bool) -> SnapshotDiff;
}

/// Which supplementary view is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplementaryKind {
    /// Shown above a section's items.
    Header,
    /// Shown below a section's items.
    Footer,
}

/// A configured item cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Label text.
    pub title: String,
    /// Trailing accessory glyph, if any.
    pub accessory: Option<char>,
}

/// A configured header or footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementaryView {
    /// Header or footer.
    pub kind: SupplementaryKind,
    /// Label text; empty for footers.
    pub text: String,
    /// Rows the view wants. Zero keeps it structurally present but invisible.
    pub preferred_height: usize,
}

/// Builds cells and supplementary views for a surface.
pub trait CellProvider {
    /// Cell for one item.
    fn make_cell(&self, item: &Item) -> Cell;

    /// Header or footer for the section at `section_ordinal`.
    fn make_supplementary(&self, kind: SupplementaryKind, section_ordinal: usize) -> SupplementaryView;
}

/// Title plus chevron cells, `Section <n>` headers and zero-height footers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCellProvider;

impl CellProvider for DefaultCellProvider {
    fn make_cell(&self, item: &Item) -> Cell {
        Cell {
            title: item.title.clone(),
            accessory: Some(FORWARD_CHEVRON),
        }
    }

    fn make_supplementary(&self, kind: SupplementaryKind, section_ordinal: usize) -> SupplementaryView {
        match kind {
            SupplementaryKind::Header => SupplementaryView {
                kind,
                text: format!("Section {section_ordinal}"),
                preferred_height: 1,
            },
            SupplementaryKind::Footer => SupplementaryView {
                kind,
                text: String::new(),
                preferred_height: 0,
            },
        }
    }
}

/// One laid-out row of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutRow {
    /// A section header.
    Header(SupplementaryView),
    /// An item cell at its index path.
    Cell {
        /// Position in the displayed snapshot.
        path: IndexPath,
        /// Configured cell.
        cell: Cell,
    },
    /// Blank row between sections.
    Spacer,
}

/// Rendering surface for a terminal pane.
#[derive(Debug, Default)]
pub struct TerminalSurface<P = DefaultCellProvider> {
    configuration: ListConfiguration,
    displayed: Snapshot,
    provider: P,
    last_diff: SnapshotDiff,
}

impl<P: CellProvider> TerminalSurface<P> {
    /// Creates an empty surface using `provider` for its views.
    pub fn with_provider(provider: P) -> Self {
        Self {
            configuration: ListConfiguration::default(),
            displayed: Snapshot::new(),
            provider,
            last_diff: SnapshotDiff::default(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn configuration(&self) -> ListConfiguration {
        self.configuration
    }

    /// Snapshot currently on screen.
    #[must_use]
    pub const fn displayed(&self) -> &Snapshot {
        &self.displayed
    }

    /// Changes made by the most recent [`RenderingSurface::apply_snapshot`].
    #[must_use]
    pub const fn last_diff(&self) -> &SnapshotDiff {
        &self.last_diff
    }

    /// Header for the section at `ordinal`, unless headers are disabled.
    #[must_use]
    pub fn header(&self, ordinal: usize) -> Option<SupplementaryView> {
        match self.configuration.header_mode {
            SupplementaryMode::Supplementary => {
                Some(self.provider.make_supplementary(SupplementaryKind::Header, ordinal))
            }
            SupplementaryMode::None => None,
        }
    }

    /// Footer for the section at `ordinal`, unless footers are disabled.
    #[must_use]
    pub fn footer(&self, ordinal: usize) -> Option<SupplementaryView> {
        match self.configuration.footer_mode {
            SupplementaryMode::Supplementary => {
                Some(self.provider.make_supplementary(SupplementaryKind::Footer, ordinal))
            }
            SupplementaryMode::None => None,
        }
    }

    /// Lays the displayed snapshot out as rows.
    ///
    /// Each supplementary view takes `preferred_height` rows, so zero-height
    /// footers take none. Spacers follow the appearance's section spacing.
    #[must_use]
    pub fn layout(&self) -> Vec<LayoutRow> {
        let spacing = self.configuration.appearance.metrics().section_spacing;
        let mut rows = Vec::new();

        for (section, _, items) in self.displayed.iter() {
            if section > 0 {
                rows.extend(std::iter::repeat(LayoutRow::Spacer).take(spacing));
            }
            if let Some(header) = self.header(section) {
                if header.preferred_height > 0 {
                    let height = header.preferred_height;
                    rows.push(LayoutRow::Header(header));
                    rows.extend(std::iter::repeat(LayoutRow::Spacer).take(height - 1));
                }
            }
            for (item, value) in items.iter().enumerate() {
                rows.push(LayoutRow::Cell {
                    path: IndexPath { section, item },
                    cell: self.provider.make_cell(value),
                });
            }
            if let Some(footer) = self.footer(section) {
                rows.extend(std::iter::repeat(LayoutRow::Spacer).take(footer.preferred_height));
            }
        }

        rows
    }
}

impl<P: CellProvider> RenderingSurface for TerminalSurface<P> {
    fn reconfigure(&mut self, configuration: ListConfiguration) {
        self.configuration = configuration;
    }

    #[tracing::instrument(level = "debug", skip(self, snapshot), fields(sections = snapshot.number_of_sections()))]
    fn apply_snapshot(&mut self, snapshot: Snapshot, animated: bool) -> SnapshotDiff {
        let diff = SnapshotDiff::between(&self.displayed, &snapshot);
        tracing::debug!(changes = diff.change_count(), "diffed against displayed snapshot");
        self.displayed = snapshot;
        self.last_diff = diff.clone();
        diff
    }
}
