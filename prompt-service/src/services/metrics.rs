//! Prometheus metrics for prompt-service.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub const PROMPT_GENERATIONS_TOTAL: &str = "prompt_generations_total";

/// Install the Prometheus recorder once per process.
///
/// Later calls (several applications in one test binary) reuse the first
/// handle.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| {
        PrometheusBuilder::new()
            .install_recorder()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Prometheus recorder already installed");
                PrometheusBuilder::new().build_recorder().handle()
            })
    });
}

/// Metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count one provider round trip by feature and outcome.
pub fn record_generation(feature: &str, provider: &str, outcome: &str) {
    let labels = [
        ("feature", feature.to_string()),
        ("provider", provider.to_string()),
        ("outcome", outcome.to_string()),
    ];
    counter!(PROMPT_GENERATIONS_TOTAL, &labels).increment(1);
}
