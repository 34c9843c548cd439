//! Subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::tracer::file_tracer_provider;
use crate::infrastructure::get_data_dir;
use crate::Config;

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "listlayout";

/// Span file inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "listlayout-spans.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without a subscriber, and an invalid `trace_level` falls back
/// to `info`. Only the first call in a process takes effect.
///
/// # Parameters
///
/// * `config` - Plugin configuration; only `trace_level` is read
///
/// # File Location
///
/// `~/.local/share/zellij/listlayout/listlayout-spans.json`, reached through
/// the `/host` mount.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
