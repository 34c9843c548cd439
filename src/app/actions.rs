//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the rendering surface itself. It returns
//! a `Vec<Action>` that the [`Dispatcher`](super::Dispatcher) carries out:
//! reconfiguration runs immediately, snapshot application is deferred to the
//! end of the current event pass, and host actions go back to the Zellij shim.

use crate::app::modes::ListConfiguration;
use crate::domain::Snapshot;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switches the surface to a new layout strategy.
    Reconfigure(ListConfiguration),

    /// Hands a freshly built snapshot to the surface.
    ///
    /// The surface diffs it against what it currently displays.
    ApplySnapshot {
        /// Desired display state.
        snapshot: Snapshot,
        /// Whether the surface should animate the update. Always `false` here.
        animated: bool,
    },

    /// Hides the plugin pane.
    CloseFocus,
}
