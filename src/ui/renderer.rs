//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`](crate::ui::UIViewModel)
//! from the controller state and the surface, then hand it to the components.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::surface::{CellProvider, TerminalSurface};

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning; Zellij owns
/// clearing the pane between frames.
pub fn render<P: CellProvider>(state: &AppState, surface: &TerminalSurface<P>, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(surface, rows);
    components::render_frame(&viewmodel, &state.theme, cols, rows);
}
