//! Tracer provider whose exporter appends span batches to a file.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};

use super::file_writer::RotatingFile;
use super::span_formatter::encode_batch;

/// Span exporter writing to a rotating file.
///
/// Each exported batch becomes one OTLP-shaped JSON document on its own
/// line, carrying the resource attributes and the instrumentation scope.
#[derive(Debug)]
struct JsonFileExporter {
    file: RotatingFile,
    resource: Resource,
    scope: &'static str,
    stopped: bool,
}

impl SpanExporter for JsonFileExporter {
    /// Encodes `batch` and appends it to the file.
    ///
    /// # Parameters
    ///
    /// * `batch` - Finished spans handed over by the span processor
    ///
    /// # Returns
    ///
    /// A ready future: `Ok(())` once the line is written, `Err(TraceError)`
    /// if the exporter was shut down or the write failed.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("span exporter already shut down"))
        } else {
            let line = encode_batch(&self.resource, self.scope, &batch).to_string();
            self.file
                .append(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    /// Stops accepting batches. Later exports fail.
    fn shutdown(&mut self) {
        self.stopped = true;
    }

    /// Replaces the resource attributes written with each batch.
    ///
    /// # Parameters
    ///
    /// * `resource` - Resource configured on the tracer provider
    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Creates a tracer provider exporting every finished span to `path`.
///
/// Uses the simple span processor, so each span is written as soon as it
/// ends, without batching.
///
/// # Parameters
///
/// * `path` - Active trace file
/// * `resource` - Resource attributes (`service.name`)
/// * `scope` - Instrumentation scope name written with every batch
///
/// # Returns
///
/// A `TracerProvider` ready to hand to `tracing-opentelemetry`.
pub fn file_tracer_provider(path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = JsonFileExporter {
        file: RotatingFile::new(path),
        resource: resource.clone(),
        scope,
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
