//! Prometheus metrics

use std::sync::OnceLock;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use concierge_agent::MatchKind;

use crate::ServerError;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder
///
/// The recorder is process-global; later calls return the first handle.
pub fn init_metrics() -> Result<PrometheusHandle, ServerError> {
    if let Some(handle) = METRICS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics(e.to_string()))?;

    register_default_metrics();

    Ok(METRICS_HANDLE.get_or_init(|| handle).clone())
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

fn register_default_metrics() {
    for outcome in [MatchKind::Exact, MatchKind::Fuzzy, MatchKind::Fallback] {
        counter!("concierge_replies_total", "outcome" => outcome.as_str()).absolute(0);
    }
    for endpoint in ["chat", "suggestions", "history", "about"] {
        counter!("concierge_requests_total", "endpoint" => endpoint).absolute(0);
    }
    counter!("concierge_interaction_log_failures_total").absolute(0);
}

pub fn record_request(endpoint: &'static str) {
    counter!("concierge_requests_total", "endpoint" => endpoint).increment(1);
}

/// Count a reply by how it was produced and record its match latency
pub fn record_reply(kind: MatchKind, elapsed_micros: u64) {
    counter!("concierge_replies_total", "outcome" => kind.as_str()).increment(1);
    histogram!("concierge_match_duration_seconds").record(elapsed_micros as f64 / 1_000_000.0);
}

pub fn record_log_failure() {
    counter!("concierge_interaction_log_failures_total").increment(1);
}

/// Prometheus text exposition
pub async fn metrics_handler() -> impl IntoResponse {
    match get_metrics_handle() {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "Metrics not initialized".to_string(),
        ),
    }
}
