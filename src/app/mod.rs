//! Application layer: the appearance controller and its plumbing.
//!
//! This module sits between the Zellij shim (`main.rs`) and the domain and UI
//! layers. Events go in, state changes, actions come out, and the dispatcher
//! carries the actions out against the rendering surface.
//!
//! # Architecture
//!
//! ```text
//! Key → Event → handle_event → AppState mutation → Actions
//!                                                     │
//!            Reconfigure (now) ◄── Dispatcher ──► ApplySnapshot (deferred, drain)
//!                     │                                   │
//!                     └────────── RenderingSurface ◄──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`dispatch`]: Immediate/deferred execution against a surface
//! - [`handler`]: Event processing and appearance transitions
//! - [`keymap`]: Zellij key events to controller events
//! - [`modes`]: Appearance enum and surface configuration mapping
//! - [`state`]: Controller state and view model computation

pub mod actions;
pub mod dispatch;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use dispatch::Dispatcher;
pub use handler::{handle_event, Event};
pub use keymap::event_for_key;
pub use modes::{BackgroundEffect, LayoutMetrics, ListAppearance, ListConfiguration, SupplementaryMode};
pub use state::AppState;
