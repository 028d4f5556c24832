//! Concierge Server
//!
//! HTTP API in front of the responder: chat, suggestions, conversation history,
//! about, plus health, readiness and Prometheus metrics.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::create_router;
pub use crate::metrics::init_metrics;
pub use state::AppState;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use concierge_persistence::PersistenceError;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Interaction log error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl From<&ServerError> for StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Metrics(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::InvalidRequest("empty".into()), StatusCode::BAD_REQUEST),
            (
                ServerError::Persistence(PersistenceError::Csv("bad row".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ServerError::Metrics("no recorder".into()), StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (err, status) in cases {
            assert_eq!(StatusCode::from(&err), status, "{err}");
            assert_eq!(err.into_response().status(), status);
        }
    }
}
