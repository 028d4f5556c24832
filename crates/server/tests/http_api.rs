//! HTTP API tests against an in-process router

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use concierge_agent::{FirstResponseSelector, Responder};
use concierge_config::Settings;
use concierge_core::{constants::FALLBACK_RESPONSE, Intent, IntentCatalog};
use concierge_persistence::{CsvInteractionLog, InMemoryInteractionLog, InteractionLog};
use concierge_server::{create_router, AppState};

fn responder() -> Responder {
    let catalog = IntentCatalog::new(vec![
        Intent::new("greeting", ["hello", "hi there"], ["Welcome!"]),
        Intent::new("goodbye", ["bye", "goodbye"], ["Farewell!"]),
        Intent::new("towels", ["extra towels"], ["Towels are on the way."]),
    ])
    .unwrap();
    Responder::new(catalog)
        .unwrap()
        .with_selector(Arc::new(FirstResponseSelector))
}

fn router_with_log(log: Arc<dyn InteractionLog>) -> Router {
    let mut settings = Settings::default();
    settings.observability.metrics_enabled = false;
    create_router(AppState::new(settings, responder(), log))
}

fn router() -> (Router, Arc<InMemoryInteractionLog>) {
    let log = Arc::new(InMemoryInteractionLog::new());
    (router_with_log(log.clone()), log)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post_chat(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_chat_exact_match() {
    let (app, log) = router();
    let (status, body) = post_chat(app, serde_json::json!({ "message": "Hello!" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Welcome!");
    assert_eq!(body["match_kind"], "exact");
    assert_eq!(body["intent"], "greeting");
    assert_eq!(body["conversation_ended"], false);
    assert!(body.get("farewell_message").is_none());
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_chat_fuzzy_match_reports_score() {
    let (app, _) = router();
    let (status, body) = post_chat(app, serde_json::json!({ "message": "helo" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["match_kind"], "fuzzy");
    assert!(body["score"].as_f64().unwrap() > 0.8);
}

#[tokio::test]
async fn test_chat_fallback() {
    let (app, _) = router();
    let (_, body) = post_chat(app, serde_json::json!({ "message": "xyz123" })).await;

    assert_eq!(body["response"], FALLBACK_RESPONSE);
    assert_eq!(body["match_kind"], "fallback");
    assert!(body["intent"].is_null());
}

#[tokio::test]
async fn test_chat_uses_suggestion_when_message_blank() {
    let (app, _) = router();
    let (status, body) = post_chat(
        app,
        serde_json::json!({ "message": "   ", "suggestion": "extra towels" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], "extra towels");
    assert_eq!(body["response"], "Towels are on the way.");
}

#[tokio::test]
async fn test_chat_without_input_is_rejected() {
    let (app, log) = router();
    let (status, body) = post_chat(app, serde_json::json!({ "suggestion": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("required"));
    assert!(log.is_empty());
}

#[tokio::test]
async fn test_farewell_ends_conversation() {
    let (app, _) = router();
    let (_, body) = post_chat(app, serde_json::json!({ "message": "Goodbye" })).await;

    assert_eq!(body["response"], "Farewell!");
    assert_eq!(body["conversation_ended"], true);
    assert_eq!(
        body["farewell_message"],
        "Thank you for chatting with me! Have a wonderful stay!"
    );
}

#[tokio::test]
async fn test_suggestions_list_every_pattern() {
    let (app, _) = router();
    let (status, body) = get_json(app, "/api/suggestions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 5);
    assert_eq!(
        body["suggestions"],
        serde_json::json!(["hello", "hi there", "bye", "goodbye", "extra towels"])
    );
}

#[tokio::test]
async fn test_history_follows_chat_order() {
    let (app, _) = router();

    post_chat(app.clone(), serde_json::json!({ "message": "hello" })).await;
    post_chat(app.clone(), serde_json::json!({ "message": "bye" })).await;

    let (status, body) = get_json(app, "/api/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["history"][0]["input"], "hello");
    assert_eq!(body["history"][0]["response"], "Welcome!");
    assert_eq!(body["history"][1]["input"], "bye");
    assert_eq!(body["history"][1]["timestamp"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn test_chat_is_written_to_csv_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat_log.csv");
    let log = Arc::new(CsvInteractionLog::open(&path).await.unwrap());
    let app = router_with_log(log);

    post_chat(app, serde_json::json!({ "message": "extra towels please" })).await;

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "User Input,Chatbot Response,Timestamp");
    assert!(lines[1].starts_with("extra towels please,Towels are on the way.,"));
}

#[tokio::test]
async fn test_about_lists_intents() {
    let (app, _) = router();
    let (status, body) = get_json(app, "/api/about").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intents"], serde_json::json!(["greeting", "goodbye", "towels"]));
    assert!(body["description"].as_str().unwrap().contains("concierge"));
}

#[tokio::test]
async fn test_health_and_readiness() {
    let (app, _) = router();

    let (status, body) = get_json(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intents"], 3);
    assert_eq!(body["patterns"], 5);
}

#[tokio::test]
async fn test_metrics_route_absent_when_disabled() {
    let (app, _) = router();
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
