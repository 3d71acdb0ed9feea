//! Subscriber setup.

use super::exporter::create_tracer_provider;
use super::rotating::{RotatingFile, DEFAULT_BACKUPS, DEFAULT_MAX_BYTES};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "talentscope";

/// Installs the global tracing subscriber.
///
/// Spans at or above `config.trace_level` (default `info`) are exported to
/// `talentscope-traces.jsonl` in the plugin data directory. Does nothing when
/// the directory cannot be created. Later calls are no-ops once a global
/// subscriber is set.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let file = RotatingFile::new(
        data_dir.join("talentscope-traces.jsonl"),
        DEFAULT_MAX_BYTES,
        DEFAULT_BACKUPS,
    );
    let provider = create_tracer_provider(file, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
