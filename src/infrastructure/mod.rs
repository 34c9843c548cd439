//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`; the helpers here map user
//! paths and the plugin's data directory onto that mount.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
