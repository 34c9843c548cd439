//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from the
//! controller state and the surface's laid-out rows. They carry display-ready
//! data only; the components in [`crate::ui::components`] print them.

use crate::app::modes::{BackgroundEffect, LayoutMetrics};

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Segmented control entries, one per appearance.
    pub segments: Vec<Segment>,

    /// Visible window of list rows.
    pub rows: Vec<DisplayRow>,

    /// Background policy of the active configuration.
    pub background: BackgroundEffect,

    /// Spacing for the active appearance.
    pub metrics: LayoutMetrics,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Shown instead of the list when nothing has been applied.
    pub empty_state: Option<EmptyState>,
}

/// One entry of the segmented control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Uppercased appearance name.
    pub label: String,
    /// Whether this is the active appearance.
    pub is_selected: bool,
}

/// What a list row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Section header label.
    Header,
    /// Item cell.
    Cell,
    /// Blank spacing row.
    Spacer,
}

/// Display information for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Header, cell or spacer.
    pub kind: RowKind,
    /// Text to print (empty for spacers).
    pub text: String,
    /// Trailing accessory glyph for cells.
    pub accessory: Option<char>,
    /// Whether the cursor is on this row.
    pub is_cursor: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
