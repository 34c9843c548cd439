//! Application state management and view model computation.
//!
//! [`AppState`] is the appearance controller's state: the selected
//! [`ListAppearance`], the [`ListModel`] that regenerates snapshots, the active
//! theme and the row cursor. The rendering surface keeps what is actually on
//! screen; [`AppState::compute_viewmodel`] combines both into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel).

use super::actions::Action;
use super::modes::ListAppearance;
use crate::domain::ListModel;
use crate::ui::surface::{CellProvider, LayoutRow, TerminalSurface};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, EmptyState, FooterInfo, RowKind, Segment, UIViewModel};

/// Rows taken by the segment bar, its border, the footer border and the footer.
const CHROME_ROWS: usize = 5;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Currently selected appearance. Exactly one is active at any time.
    pub appearance: ListAppearance,

    /// Produces the snapshot to display.
    pub model: ListModel,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Index of the highlighted item, counted across all sections.
    pub cursor: usize,

    /// Item count of the last snapshot handed out, used to bound the cursor.
    item_count: usize,
}

impl AppState {
    /// Creates a new state with the given model, theme and starting appearance.
    #[must_use]
    pub fn new(model: ListModel, theme: Theme, appearance: ListAppearance) -> Self {
        Self {
            appearance,
            model,
            theme,
            cursor: 0,
            item_count: 0,
        }
    }

    /// Actions that reconfigure the surface for the current appearance and
    /// re-apply a freshly built snapshot.
    ///
    /// Content is regenerated on every call; nothing displayed before is
    /// carried over.
    pub fn refresh_actions(&mut self) -> Vec<Action> {
        let snapshot = self.model.build_snapshot();
        self.item_count = snapshot.number_of_items();
        self.clamp_cursor();

        vec![
            Action::Reconfigure(self.appearance.configuration()),
            Action::ApplySnapshot {
                snapshot,
                animated: false,
            },
        ]
    }

    /// Moves the cursor down one item, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.item_count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % self.item_count;
    }

    /// Moves the cursor up one item, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.item_count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.item_count - 1
        } else {
            self.cursor - 1
        };
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.item_count.saturating_sub(1));
    }

    /// Computes a renderable view model from state, surface and pane height.
    ///
    /// The list is windowed so the cursor row stays visible, centered when
    /// possible. Zero-height footers produce no rows. Column fitting happens
    /// at render time in [`layout_row`](crate::ui::components::list::layout_row).
    ///
    /// # Parameters
    ///
    /// * `surface` - Surface holding the configuration and displayed snapshot
    /// * `rows` - Pane height; the list gets what the chrome leaves over
    #[must_use]
    pub fn compute_viewmodel<P: CellProvider>(
        &self,
        surface: &TerminalSurface<P>,
        rows: usize,
    ) -> UIViewModel {
        let configuration = surface.configuration();
        let metrics = configuration.appearance.metrics();

        let segments = ListAppearance::ALL
            .into_iter()
            .map(|appearance| Segment {
                label: appearance.label(),
                is_selected: appearance == self.appearance,
            })
            .collect();

        let footer = FooterInfo {
            keybindings: "1-5: style  Tab/Shift+Tab: cycle  j/k: move  q: quit".to_string(),
        };

        let layout = surface.layout();
        if layout.is_empty() {
            return UIViewModel {
                segments,
                rows: vec![],
                background: configuration.background,
                metrics,
                footer,
                empty_state: Some(EmptyState {
                    message: "Nothing to display".to_string(),
                    subtitle: "The list has no sections yet".to_string(),
                }),
            };
        }

        let mut item_ordinal = 0;
        let all_rows: Vec<DisplayRow> = layout
            .into_iter()
            .map(|row| match row {
                LayoutRow::Header(view) => DisplayRow {
                    kind: RowKind::Header,
                    text: if metrics.uppercase_headers {
                        view.text.to_uppercase()
                    } else {
                        view.text
                    },
                    accessory: None,
                    is_cursor: false,
                },
                LayoutRow::Cell { cell, .. } => {
                    let is_cursor = item_ordinal == self.cursor;
                    item_ordinal += 1;
                    DisplayRow {
                        kind: RowKind::Cell,
                        text: cell.title,
                        accessory: cell.accessory,
                        is_cursor,
                    }
                }
                LayoutRow::Spacer => DisplayRow {
                    kind: RowKind::Spacer,
                    text: String::new(),
                    accessory: None,
                    is_cursor: false,
                },
            })
            .collect();

        let available = rows.saturating_sub(CHROME_ROWS).max(1);
        let cursor_row = all_rows.iter().position(|r| r.is_cursor).unwrap_or(0);

        let mut start = cursor_row.saturating_sub(available / 2);
        let end = (start + available).min(all_rows.len());
        if end - start < available {
            start = end.saturating_sub(available);
        }

        UIViewModel {
            segments,
            rows: all_rows[start..end].to_vec(),
            background: configuration.background,
            metrics,
            footer,
            empty_state: None,
        }
    }
}
