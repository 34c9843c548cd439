//! Zellij plugin wrapper and entry point.
//!
//! Owns the controller state, the terminal surface and the dispatcher, and
//! translates between Zellij and the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`, request
//!    permissions, subscribe to key events, then run `Event::Initialize`.
//! 2. **Update**: Map keys to events, delegate to `handle_event`, hand the
//!    actions to the dispatcher and drain its deferred queue.
//! 3. **Render**: Call the library render function.
//!
//! # Keybindings
//!
//! - `1`–`5`: Select appearance
//! - `Tab`/`l`/`Right`: Next appearance
//! - `Shift+Tab`/`h`/`Left`: Previous appearance
//! - `j`/`Down`, `k`/`Up`: Move the row cursor
//! - `q`/`Esc`: Hide the plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use listlayout::app::{event_for_key, Dispatcher};
use listlayout::ui::TerminalSurface;
use listlayout::{handle_event, Action, AppState, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Appearance controller state.
    app: AppState,

    /// What the pane currently shows.
    surface: TerminalSurface,

    /// Runs surface actions, deferring snapshot application.
    dispatcher: Dispatcher,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: listlayout::initialize(&Config::default()),
            surface: TerminalSurface::default(),
            dispatcher: Dispatcher::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        listlayout::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = listlayout::initialize(&config);

        request_permission(&[PermissionType::ReadApplicationState]);
        subscribe(&[EventType::Key]);

        self.dispatch(Event::Initialize);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let span = tracing::debug_span!("plugin_update", bare_key = ?key.bare_key);
        let _guard = span.entered();

        match event_for_key(&key) {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        listlayout::ui::render(&self.app, &self.surface, rows, cols);
    }
}

impl State {
    /// Handles one event to completion: immediate actions, host actions,
    /// then the deferred queue.
    fn dispatch(&mut self, event: Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.app, &event);
        tracing::debug!(action_count = actions.len(), should_render, "event handled");

        for action in self.dispatcher.submit(actions, &mut self.surface) {
            Self::execute_host_action(&action);
        }
        self.dispatcher.drain(&mut self.surface);

        should_render
    }

    #[tracing::instrument(level = "debug")]
    fn execute_host_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::Reconfigure(_) | Action::ApplySnapshot { .. } => {
                tracing::debug!("surface action reached the host, ignoring");
            }
        }
    }
}
