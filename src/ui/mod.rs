//! User interface layer: the terminal rendering surface and its renderer.
//!
//! # Architecture
//!
//! ```text
//! Actions → TerminalSurface (configuration + displayed snapshot)
//!                 │
//! AppState ───────┴──► compute_viewmodel → UIViewModel → components → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`surface`]: Rendering surface contract, terminal implementation, cell provisioning
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Segmented control, list, footer and empty-state renderers
//! - [`helpers`]: Cursor positioning and text width utilities
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod surface;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use surface::{
    Cell, CellProvider, DefaultCellProvider, LayoutRow, RenderingSurface, SupplementaryKind,
    SupplementaryView, TerminalSurface,
};
pub use theme::Theme;
pub use viewmodel::{DisplayRow, EmptyState, FooterInfo, RowKind, Segment, UIViewModel};
