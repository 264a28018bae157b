//! Prometheus metrics
//!
//! The recorder is installed once per process; `/metrics` renders it.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder
///
/// Returns `None` if another recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    HANDLE
        .get_or_try_init(|| PrometheusBuilder::new().install_recorder())
        .map_err(|e| tracing::warn!(error = %e, "Failed to install Prometheus recorder"))
        .ok()
        .cloned()
}

/// Count one inbound request on `channel`
pub fn record_request(channel: &'static str, latency: Duration) {
    metrics::counter!("health_agent_requests_total", "channel" => channel).increment(1);
    metrics::histogram!("health_agent_request_seconds", "channel" => channel)
        .record(latency.as_secs_f64());
}

pub fn record_error(kind: &'static str) {
    metrics::counter!("health_agent_errors_total", "kind" => kind).increment(1);
}

pub async fn metrics_handler() -> impl IntoResponse {
    match HANDLE.get() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}
