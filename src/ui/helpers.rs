//! Shared rendering utilities.
//!
//! Low-level cursor positioning and line padding used by every component.
//! Widths are measured in `char`s, which is exact for the ASCII labels and the
//! single-column glyphs this plugin prints.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Visible width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` columns, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Left padding that centers `content_width` columns within `cols`.
#[must_use]
pub const fn center_padding(cols: usize, content_width: usize) -> usize {
    cols.saturating_sub(content_width) / 2
}
