//! Subscriber installation.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in every trace batch.
pub const SERVICE_NAME: &str = "Legio";

/// Installs the global subscriber: an [`EnvFilter`] built from
/// `config.trace_level` (default `info`) feeding an OpenTelemetry layer that
/// exports to `<data_dir>/legio-otlp.json`.
///
/// Tracing is best-effort. Returns `false` when the data directory cannot be
/// created or a subscriber is already installed; the caller carries on
/// without traces either way.
///
/// # Example
///
/// ```no_run
/// use legio::observability::init_tracing;
/// use legio::Config;
///
/// let config = Config {
///     trace_level: Some("legio=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = paths::data_dir(config);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return false;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::file_tracer_provider(paths::trace_path(config), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init()
        .is_ok()
}
