//! Segmented control renderer.
//!
//! Prints one labelled segment per appearance on a single centered line, the
//! active one filled with the selection colors.

use crate::ui::helpers::{center_padding, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Segment;

const SEPARATOR: &str = "│";

/// Width of the whole control: padded labels plus separators.
#[must_use]
pub fn segments_width(segments: &[Segment]) -> usize {
    let labels: usize = segments.iter().map(|s| display_width(&s.label) + 2).sum();
    labels + segments.len().saturating_sub(1)
}

/// Renders the segmented control at `row`. Returns the next free row.
pub fn render_segments(row: usize, segments: &[Segment], theme: &Theme, cols: usize) -> usize {
    let width = segments_width(segments);
    let padding = center_padding(cols, width);

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            print!("{}{SEPARATOR}{}", Theme::fg(&theme.colors.border), Theme::reset());
        }
        if segment.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.segment_selected_fg));
            print!("{}", Theme::bg(&theme.colors.segment_selected_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.segment_fg));
        }
        print!(" {} ", segment.label);
        print!("{}", Theme::reset());
    }
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    row + 1
}
