//! Section list renderer.
//!
//! Lays out headers, cells and spacers between two rows of the pane and fills
//! the whole area with the background chosen by the active configuration.
//! Cells carry their accessory glyph at the trailing edge.

use crate::app::modes::LayoutMetrics;
use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, RowKind};

/// Columns taken by an accessory: a separating blank and the glyph.
const ACCESSORY_WIDTH: usize = 2;

/// Columns of a row: leading blank, text, gap, accessory, trailing blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    /// Blank columns before the text.
    pub lead: usize,
    /// Text after truncation.
    pub text: String,
    /// Blank columns between text and accessory.
    pub gap: usize,
    /// Accessory glyph, if any.
    pub accessory: Option<char>,
    /// Blank columns after the accessory.
    pub trail: usize,
}

/// Computes column placement for one row in a pane `cols` wide.
#[must_use]
pub fn layout_row(row: &DisplayRow, metrics: &LayoutMetrics, cols: usize) -> RowLayout {
    let indent = match row.kind {
        RowKind::Header => 1,
        RowKind::Cell => metrics.cell_indent,
        RowKind::Spacer => 0,
    };
    let lead = (metrics.inset + indent).min(cols);
    // The accessory is dropped when the pane is too narrow to hold it.
    let accessory = row.accessory.filter(|_| lead + ACCESSORY_WIDTH <= cols);
    let accessory_width = if accessory.is_some() { ACCESSORY_WIDTH } else { 0 };
    let room = cols.saturating_sub(lead + metrics.inset + accessory_width);
    let text = truncate(&row.text, room);
    let gap = room - display_width(&text);

    RowLayout {
        lead,
        text,
        gap,
        accessory,
        trail: cols - lead - room - accessory_width,
    }
}

/// Renders `rows` from `first_row` up to (not including) `end_row`.
///
/// Lines past the last row are filled with the background.
pub fn render_list(
    first_row: usize,
    end_row: usize,
    rows: &[DisplayRow],
    metrics: &LayoutMetrics,
    background: &str,
    theme: &Theme,
    cols: usize,
) {
    for line in first_row..end_row {
        position_cursor(line, 1);
        print!("{}", Theme::bg(background));

        let Some(row) = rows.get(line - first_row) else {
            print!("{}", " ".repeat(cols));
            print!("{}", Theme::reset());
            continue;
        };

        let placed = layout_row(row, metrics, cols);
        print!("{}", " ".repeat(placed.lead));

        match row.kind {
            RowKind::Header => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.section_header_fg));
            }
            RowKind::Cell if row.is_cursor => {
                print!("{}", Theme::fg(&theme.colors.cursor_fg));
                print!("{}", Theme::bg(&theme.colors.cursor_bg));
            }
            RowKind::Cell | RowKind::Spacer => {
                print!("{}", Theme::fg(&theme.colors.cell_fg));
            }
        }

        print!("{}", placed.text);
        print!("{}", " ".repeat(placed.gap));
        if let Some(glyph) = placed.accessory {
            if !row.is_cursor {
                print!("{}", Theme::fg(&theme.colors.accessory_fg));
            }
            print!(" {glyph}");
        }

        print!("{}", Theme::reset());
        print!("{}", Theme::bg(background));
        print!("{}", " ".repeat(placed.trail));
        print!("{}", Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ListAppearance;

    fn cell(text: &str) -> DisplayRow {
        DisplayRow {
            kind: RowKind::Cell,
            text: text.to_string(),
            accessory: Some('›'),
            is_cursor: false,
        }
    }

    fn width(layout: &RowLayout) -> usize {
        layout.lead
            + display_width(&layout.text)
            + layout.gap
            + layout.accessory.map_or(0, |_| 2)
            + layout.trail
    }

    #[test]
    fn rows_fill_the_pane_exactly() {
        for appearance in ListAppearance::ALL {
            let metrics = appearance.metrics();
            for cols in (1..=8).chain([10, 40, 120]) {
                let placed = layout_row(&cell("My Item number 0: Section: 0"), &metrics, cols);
                assert_eq!(width(&placed), cols, "{appearance} at {cols}");
            }
        }
    }

    #[test]
    fn inset_grouped_indents_both_sides() {
        let metrics = ListAppearance::InsetGrouped.metrics();
        let placed = layout_row(&cell("Item"), &metrics, 40);
        assert_eq!(placed.lead, 6);
        assert_eq!(placed.trail, 4);
        assert_eq!(placed.accessory, Some('›'));
    }

    #[test]
    fn accessory_is_dropped_when_it_cannot_fit() {
        let metrics = ListAppearance::InsetGrouped.metrics();
        let placed = layout_row(&cell("Item"), &metrics, 5);
        assert_eq!(placed.accessory, None);
        assert_eq!(placed.lead, 5);
        assert_eq!(width(&placed), 5);

        let placed = layout_row(&cell("Item"), &metrics, 8);
        assert_eq!(placed.accessory, Some('›'));
        assert_eq!(width(&placed), 8);
    }

    #[test]
    fn narrow_panes_truncate_titles() {
        let metrics = ListAppearance::Plain.metrics();
        let placed = layout_row(&cell("My Item number 0: Section: 0"), &metrics, 12);
        assert_eq!(placed.text, "My Item …");
    }
}
