//! Listlayout: a Zellij plugin showing one sectioned list under five
//! switchable appearances.
//!
//! The plugin displays two sections of five items each. A segmented control
//! along the top selects the appearance (plain, grouped, inset grouped,
//! sidebar, sidebar plain). Each selection reconfigures the list surface and
//! re-applies a freshly generated snapshot of the same content, which the
//! surface diffs against what it already shows.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Appearance controller
//! │  - Event handling                                   │
//! │  - Immediate/deferred action dispatch               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Domain Layer          │   │ UI Layer (ui/)          │
//! │ (domain/)             │   │ - Rendering surface     │
//! │ - Sections and items  │   │ - Cell provisioning     │
//! │ - Snapshots and diffs │   │ - Components, theming   │
//! │ - List model          │   │                         │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (infrastructure/), Observability     │
//! │  - Sandbox paths                                     │
//! │  - File-based OpenTelemetry span export              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/listlayout.wasm" {
//!         theme "catppuccin-latte"
//!         initial_appearance "insetGrouped"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use listlayout::app::Dispatcher;
//! use listlayout::ui::TerminalSurface;
//! use listlayout::{handle_event, initialize, Config, Event, ListAppearance};
//!
//! let mut state = initialize(&Config::default());
//! let mut surface: TerminalSurface = TerminalSurface::default();
//! let mut dispatcher = Dispatcher::new();
//!
//! for event in [Event::Initialize, Event::SelectAppearance(3)] {
//!     let (_render, actions) = handle_event(&mut state, &event);
//!     dispatcher.submit(actions, &mut surface);
//!     dispatcher.drain(&mut surface);
//! }
//!
//! assert_eq!(state.appearance, ListAppearance::Sidebar);
//! assert_eq!(surface.displayed().number_of_items(), 10);
//! assert!(surface.last_diff().is_empty());
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ListAppearance, ListConfiguration};
pub use domain::{ListLayoutError, ListModel, Result, Snapshot};
pub use ui::Theme;

use std::collections::BTreeMap;

use crate::infrastructure::expand_tilde;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file, with `~` mapped onto the host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `info`.
    pub trace_level: Option<String>,

    /// Appearance selected when the plugin starts.
    pub initial_appearance: ListAppearance,
}

impl Config {
    /// Parses the plugin configuration.
    ///
    /// Recognized keys are `theme`, `theme_file`, `trace_level` and
    /// `initial_appearance`. An unknown appearance name falls back to plain.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use listlayout::{Config, ListAppearance};
    ///
    /// let map = BTreeMap::from([
    ///     ("initial_appearance".to_string(), "sidebarPlain".to_string()),
    ///     ("theme_file".to_string(), "~/themes/mine.toml".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.initial_appearance, ListAppearance::SidebarPlain);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let initial_appearance = config
            .get("initial_appearance")
            .map_or_else(ListAppearance::default, |name| {
                name.parse().unwrap_or_else(|e: ListLayoutError| {
                    tracing::debug!(error = %e, "unknown initial appearance, using plain");
                    ListAppearance::default()
                })
            });

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|path| expand_tilde(path)),
            trace_level: config.get("trace_level").cloned(),
            initial_appearance,
        }
    }
}

/// Builds the controller state for `config`.
///
/// The theme comes from `theme_file`, then `theme`, then the default; a theme
/// that fails to load falls back to the default. Nothing is displayed until
/// [`Event::Initialize`] is handled.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(appearance = %config.initial_appearance, "initializing listlayout plugin");

    let theme = match (&config.theme_file, &config.theme_name) {
        (Some(theme_file), _) => Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        }),
        (None, Some(theme_name)) => Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        }),
        (None, None) => Theme::default(),
    };

    AppState::new(ListModel::default(), theme, config.initial_appearance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::default().initial_appearance, ListAppearance::Plain);
    }

    #[test]
    fn unknown_appearance_falls_back_to_plain() {
        let config = Config::from_zellij(&map(&[("initial_appearance", "carousel")]));
        assert_eq!(config.initial_appearance, ListAppearance::Plain);
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "/etc/theme.toml"),
            ("trace_level", "debug"),
            ("initial_appearance", "Grouped"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/etc/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.initial_appearance, ListAppearance::Grouped);
    }

    #[test]
    fn initialize_resolves_theme_by_name() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            initial_appearance: ListAppearance::Sidebar,
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.appearance, ListAppearance::Sidebar);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());

        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            theme_file: Some(dir.path().join("missing.toml").to_string_lossy().into_owned()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
