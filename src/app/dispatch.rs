//! Single-threaded action dispatcher with a deferred queue.
//!
//! Everything runs on the plugin's one execution context. Reconfiguration is
//! executed as soon as it is submitted; snapshot application is queued and
//! only runs on [`Dispatcher::drain`], which the runtime calls once the
//! current event pass has finished. Host-level actions are handed back to the
//! caller untouched.

use std::collections::VecDeque;

use crate::app::Action;
use crate::ui::surface::RenderingSurface;

/// FIFO of deferred actions for one rendering surface.
#[derive(Debug, Default)]
pub struct Dispatcher {
    pending: VecDeque<Action>,
}

impl Dispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Executes or queues each action in order.
    ///
    /// # Parameters
    ///
    /// * `actions` - Actions from [`handle_event`](crate::app::handle_event)
    /// * `surface` - Surface that receives [`Action::Reconfigure`] at once
    ///
    /// # Returns
    ///
    /// The actions the surface does not handle (e.g. [`Action::CloseFocus`])
    /// for the runtime to carry out.
    pub fn submit<S: RenderingSurface>(&mut self, actions: Vec<Action>, surface: &mut S) -> Vec<Action> {
        let mut host_actions = Vec::new();
        for action in actions {
            match action {
                Action::Reconfigure(configuration) => {
                    tracing::debug!(appearance = %configuration.appearance, "reconfiguring surface");
                    surface.reconfigure(configuration);
                }
                Action::ApplySnapshot { .. } => {
                    tracing::trace!(pending = self.pending.len() + 1, "snapshot apply deferred");
                    self.pending.push_back(action);
                }
                Action::CloseFocus => host_actions.push(action),
            }
        }
        host_actions
    }

    /// Runs every deferred action, oldest first. Returns how many ran.
    pub fn drain<S: RenderingSurface>(&mut self, surface: &mut S) -> usize {
        let mut ran = 0;
        while let Some(action) = self.pending.pop_front() {
            if let Action::ApplySnapshot { snapshot, animated } = action {
                let diff = surface.apply_snapshot(snapshot, animated);
                tracing::debug!(
                    changes = diff.change_count(),
                    inserted_sections = diff.inserted_sections.len(),
                    "snapshot applied"
                );
            }
            ran += 1;
        }
        ran
    }

    /// Number of actions waiting for [`Dispatcher::drain`].
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
