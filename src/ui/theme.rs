//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents, either built in (`themes/*.toml`) or loaded
//! from a user file. Colors are hex strings turned into 24-bit ANSI escapes.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! segment_fg = "#a6adc8"
//! segment_selected_fg = "#1e1e2e"
//! segment_selected_bg = "#cba6f7"
//! background_light = "#313244"
//! background_alternate = "#181825"
//! section_header_fg = "#89b4fa"
//! cell_fg = "#cdd6f4"
//! accessory_fg = "#6c7086"
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#f5c2e7"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! empty_state_fg = "#f9e2af"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::app::modes::BackgroundEffect;
use crate::domain::{ListLayoutError, Result};

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Unselected segment text.
    pub segment_fg: String,
    /// Selected segment text.
    pub segment_selected_fg: String,
    /// Selected segment fill.
    pub segment_selected_bg: String,

    /// List background for [`BackgroundEffect::Light`].
    pub background_light: String,
    /// List background for [`BackgroundEffect::Alternate`].
    pub background_alternate: String,

    /// Section header labels.
    pub section_header_fg: String,
    /// Cell titles.
    pub cell_fg: String,
    /// Cell accessory glyph.
    pub accessory_fg: String,

    /// Cursor row text.
    pub cursor_fg: String,
    /// Cursor row fill.
    pub cursor_bg: String,

    /// Dimmed text (footer).
    pub text_dim: String,
    /// Separator lines.
    pub border: String,
    /// Empty state message.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ListLayoutError::Io`] if the file cannot be read and
    /// [`ListLayoutError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ListLayoutError::Theme(format!("{}: {e}", path.display())))
    }

    /// Background color for a background effect.
    #[must_use]
    pub fn background(&self, effect: BackgroundEffect) -> &str {
        match effect {
            BackgroundEffect::Light => &self.colors.background_light,
            BackgroundEffect::Alternate => &self.colors.background_alternate,
        }
    }

    /// Converts a hex color to RGB, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which a test guards.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
