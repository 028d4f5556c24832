//! HTTP Endpoints
//!
//! REST API for the concierge.

use std::time::Duration;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use concierge_agent::MatchKind;
use concierge_persistence::InteractionRecord;

use crate::metrics::{metrics_handler, record_log_failure, record_reply, record_request};
use crate::state::AppState;
use crate::ServerError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Conversation
        .route("/api/chat", post(chat))
        .route("/api/suggestions", get(suggestions))
        .route("/api/history", get(history))
        .route("/api/about", get(about))

        // Health check
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check));

    if state.config.observability.metrics_enabled {
        router = router.route("/metrics", get(metrics_handler));
    }

    let cors_enabled = state.config.server.cors_enabled;
    let mut router = router
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }
    router
}

/// Chat request
///
/// `message` is what the guest typed; `suggestion` is a catalog pattern picked
/// from the suggestion list. A non-blank message takes precedence.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl ChatRequest {
    fn final_input(&self) -> Option<&str> {
        [self.message.as_deref(), self.suggestion.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub request_id: Uuid,
    pub input: String,
    pub response: String,
    pub match_kind: MatchKind,
    pub intent: Option<String>,
    pub score: Option<f64>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farewell_message: Option<String>,
    pub conversation_ended: bool,
}

/// Reply to one guest message and log the exchange
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    record_request("chat");
    let request_id = Uuid::new_v4();

    let input = request
        .final_input()
        .ok_or_else(|| ServerError::InvalidRequest("message or suggestion is required".to_string()))?
        .to_string();

    let reply = state.responder.reply(&input);
    record_reply(reply.kind, reply.elapsed_micros);

    tracing::info!(
        %request_id,
        kind = reply.kind.as_str(),
        intent = reply.intent.as_deref().unwrap_or("-"),
        "Chat reply"
    );

    let record = InteractionRecord::new(&input, &reply.text);
    if let Err(e) = state.log.append(&record).await {
        record_log_failure();
        tracing::warn!(%request_id, error = %e, "Failed to log interaction");
    }

    let matcher = &state.config.matcher;
    let conversation_ended = matcher.is_farewell(&input);

    Ok(Json(ChatResponse {
        request_id,
        input,
        response: reply.text,
        match_kind: reply.kind,
        intent: reply.intent,
        score: reply.score,
        timestamp: record.formatted_timestamp(),
        farewell_message: conversation_ended.then(|| matcher.farewell_message.clone()),
        conversation_ended,
    }))
}

/// Every catalog pattern, in catalog order
async fn suggestions(State(state): State<AppState>) -> Json<serde_json::Value> {
    record_request("suggestions");
    let suggestions: Vec<&str> = state.responder.catalog().patterns().collect();

    Json(serde_json::json!({
        "count": suggestions.len(),
        "suggestions": suggestions,
    }))
}

#[derive(Debug, Serialize)]
struct HistoryEntry {
    input: String,
    response: String,
    timestamp: String,
}

/// Logged exchanges, oldest first
async fn history(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ServerError> {
    record_request("history");

    let entries: Vec<HistoryEntry> = state
        .log
        .history()
        .await?
        .into_iter()
        .map(|record| HistoryEntry {
            timestamp: record.formatted_timestamp(),
            input: record.input,
            response: record.response,
        })
        .collect();

    Ok(Json(serde_json::json!({
        "count": entries.len(),
        "history": entries,
    })))
}

const ABOUT: &str = "A virtual concierge that answers guest questions about the hotel. \
Messages are matched against a catalog of example phrases, tolerating word order, \
plurals and small typos, and answered with one of the catalog's prepared replies.";

const FEATURES: [&str; 5] = [
    "Room service orders",
    "Special requests such as extra towels or room cleaning",
    "Hotel amenities and services information",
    "General inquiries about local attractions, transportation and policies",
    "Conversation history",
];

async fn about(State(state): State<AppState>) -> Json<serde_json::Value> {
    record_request("about");
    let catalog = state.responder.catalog();

    Json(serde_json::json!({
        "name": "Hotel Concierge",
        "version": env!("CARGO_PKG_VERSION"),
        "description": ABOUT,
        "features": FEATURES,
        "intents": catalog.tags(),
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ready once the catalog is loaded, which happens before the router exists
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.responder.catalog();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ready",
            "intents": catalog.len(),
            "patterns": catalog.pattern_count(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: Option<&str>, suggestion: Option<&str>) -> ChatRequest {
        ChatRequest {
            message: message.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    #[test]
    fn test_typed_message_wins() {
        let req = request(Some("extra towels"), Some("pool hours"));
        assert_eq!(req.final_input(), Some("extra towels"));
    }

    #[test]
    fn test_blank_message_uses_suggestion() {
        assert_eq!(request(Some("  "), Some("pool hours")).final_input(), Some("pool hours"));
        assert_eq!(request(None, Some("pool hours")).final_input(), Some("pool hours"));
    }

    #[test]
    fn test_nothing_to_answer() {
        assert_eq!(request(None, None).final_input(), None);
        assert_eq!(request(Some(""), Some(" \t")).final_input(), None);
    }
}
