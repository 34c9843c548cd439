//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`segments`]: Segmented control listing every appearance
//! - [`list`]: Section headers, cells and spacers on the configured background
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message shown while no sections are displayed
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Segmented control]
//! [Border]
//! [List rows, background-filled to the footer border]
//! [Border]
//! [Footer]
//! ```

pub mod empty;
pub mod footer;
pub mod list;
pub mod segments;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use list::render_list;
use segments::render_segments;

/// Renders a horizontal border line at `row`. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full frame for a view model.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_segments(current_row, &vm.segments, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.max(current_row + 1);
    let border_row = footer_start - 1;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_list(
            current_row,
            border_row,
            &vm.rows,
            &vm.metrics,
            theme.background(vm.background),
            theme,
            cols,
        );
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
