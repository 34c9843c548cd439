//! Domain layer for the listlayout plugin.
//!
//! Holds the list data model independent of Zellij and of any rendering code:
//! sections and items, immutable snapshots, the diff between two snapshots, and
//! the list model that builds snapshots from a data source.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`section`]: Section identities, sections and items
//! - [`snapshot`]: Ordered, immutable display state
//! - [`diff`]: Section/item changes between two snapshots
//! - [`model`]: Data sources and the snapshot-producing list model
//!
//! # Examples
//!
//! ```
//! use listlayout::domain::{ListModel, SectionId};
//!
//! let snapshot = ListModel::default().build_snapshot();
//! assert_eq!(
//!     snapshot.section_identifiers(),
//!     vec![SectionId::Primary, SectionId::Secondary]
//! );
//! ```

pub mod diff;
pub mod error;
pub mod model;
pub mod section;
pub mod snapshot;

pub use diff::{IndexPath, SnapshotDiff};
pub use error::{ListLayoutError, Result};
pub use model::{DataSource, DemoDataSource, ListModel};
pub use section::{Item, Section, SectionId};
pub use snapshot::Snapshot;
