//! Span export to a local JSON file.
//!
//! The plugin sandbox has no network collector, so spans emitted through
//! `tracing` are bridged into OpenTelemetry and written as OTLP-shaped JSON,
//! one batch per line:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → JsonFileExporter → RotatingFile
//! ```
//!
//! The file lives at `~/.local/share/zellij/listlayout/listlayout-spans.json`
//! (through the `/host` mount). It rotates at 5 MiB and keeps three
//! timestamped backups.
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! ```no_run
//! use listlayout::observability::init_tracing;
//! use listlayout::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("tracing ready");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
