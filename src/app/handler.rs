//! Event handling and state transition logic.
//!
//! [`handle_event`] is the appearance controller. It pattern-matches an
//! [`Event`], mutates [`AppState`], and returns whether the pane should be
//! redrawn together with the [`Action`]s to execute.
//!
//! # Appearance changes
//!
//! A selection change sets the new appearance, then emits
//! [`Action::Reconfigure`] followed by [`Action::ApplySnapshot`] carrying a
//! regenerated snapshot. Initialization emits the same pair for the starting
//! appearance.
//!
//! # Example
//!
//! ```
//! use listlayout::app::{handle_event, Action, AppState, Event, ListAppearance};
//! use listlayout::domain::ListModel;
//! use listlayout::ui::Theme;
//!
//! let mut state = AppState::new(ListModel::default(), Theme::default(), ListAppearance::Plain);
//! let (should_render, actions) = handle_event(&mut state, &Event::SelectAppearance(3));
//! assert!(should_render);
//! assert_eq!(actions[0], Action::Reconfigure(ListAppearance::Sidebar.configuration()));
//! ```

use crate::app::modes::ListAppearance;
use crate::app::{Action, AppState};

/// Events triggered by the host runtime or user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The display was (re)initialized; configure and populate the surface.
    Initialize,
    /// The segmented control selected the appearance at this index.
    SelectAppearance(usize),
    /// Selects the next appearance, wrapping around.
    NextAppearance,
    /// Selects the previous appearance, wrapping around.
    PreviousAppearance,
    /// Moves the row cursor down (wraps to top).
    KeyDown,
    /// Moves the row cursor up (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Indices outside the appearance set are ignored; the segmented control
/// never produces them.
///
/// # Parameters
///
/// * `state` - Controller state to update
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: whether the pane needs a redraw, and the
/// actions for the [`Dispatcher`](crate::app::Dispatcher).
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match *event {
        Event::Initialize => {
            tracing::debug!(appearance = %state.appearance, "initializing list");
            (true, state.refresh_actions())
        }
        Event::SelectAppearance(index) => {
            let Some(appearance) = ListAppearance::from_index(index) else {
                tracing::debug!(index, "appearance index out of range, ignoring");
                return (false, vec![]);
            };
            select_appearance(state, appearance)
        }
        Event::NextAppearance => {
            let appearance = state.appearance.next();
            select_appearance(state, appearance)
        }
        Event::PreviousAppearance => {
            let appearance = state.appearance.previous();
            select_appearance(state, appearance)
        }
        Event::KeyDown => {
            state.move_cursor_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_cursor_up();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
    }
}

fn select_appearance(state: &mut AppState, appearance: ListAppearance) -> (bool, Vec<Action>) {
    tracing::debug!(from = %state.appearance, to = %appearance, "appearance selected");
    state.appearance = appearance;
    (true, state.refresh_actions())
}
