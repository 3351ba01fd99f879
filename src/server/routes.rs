//! Axum route handlers for the rulebot HTTP server.
//!
//! # Routes
//!
//! - `GET  /health` — Returns `{"status": "ok", "version": ..., "service": "rulebot"}`
//! - `POST /chat`   — Accepts `{"message": string}`, returns `{"response": string}`
//!
//! A missing or non-string `message` field is rejected with
//! `400 {"error": ...}` before any processing. The only unexpected failure
//! mode in process is a poisoned responder lock, mapped to
//! `500 {"error": ...}` with details kept in the log.

use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::responder::Responder;

/// Incoming chat request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
}

/// Outgoing chat reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The responder's reply text.
    pub response: String,
}

/// Shared application state for the HTTP server.
///
/// The responder is an explicitly constructed instance handed to every
/// handler rather than a hidden process-wide global; the write lock
/// serializes calls, though the core itself promises nothing about
/// cross-request ordering.
#[derive(Clone)]
pub struct AppState {
    /// The shared responder instance.
    pub responder: Arc<RwLock<Responder>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            responder: Arc::new(RwLock::new(Responder::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "rulebot",
    }))
}

/// POST /chat — classify a message and return the reply.
///
/// The body is probed as a raw JSON value so that a missing field, a
/// wrong-typed field, and a non-object body all produce the same
/// client-error shape.
async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChatReply>, (StatusCode, Json<Value>)> {
    let message = body
        .get("message")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Request body must be a JSON object with a string 'message' field",
                })),
            )
        })?;

    let mut responder = state.responder.write().map_err(|e| {
        tracing::error!("responder lock poisoned: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Internal server error"})),
        )
    })?;

    let response = responder.respond(message);

    Ok(Json(ChatReply { response }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn post_chat(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_router(AppState::new());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "rulebot");
    }

    #[tokio::test]
    async fn test_chat_returns_reply() {
        let app = app_router(AppState::new());
        let (status, json) = post_chat(app, r#"{"message": "2 + 2"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["response"].as_str().unwrap().contains('4'));
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_client_error() {
        let app = app_router(AppState::new());
        let (status, json) = post_chat(app, r#"{"text": "hello"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("message"));
    }

    #[tokio::test]
    async fn test_chat_non_string_message_is_client_error() {
        let app = app_router(AppState::new());
        let (status, json) = post_chat(app, r#"{"message": 42}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_chat_non_object_body_is_client_error() {
        let app = app_router(AppState::new());
        let (status, json) = post_chat(app, r#""just a string""#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_chat_state_accumulates_history() {
        let state = AppState::new();
        let app = app_router(state.clone());

        let _ = post_chat(app.clone(), r#"{"message": "hello"}"#).await;
        let _ = post_chat(app, r#"{"message": "2 + 2"}"#).await;

        let responder = state.responder.read().unwrap();
        assert_eq!(responder.history().len(), 4);
    }

    #[tokio::test]
    async fn test_chat_greeting_is_deterministic() {
        let app = app_router(AppState::new());
        let (_, first) = post_chat(app.clone(), r#"{"message": "hello"}"#).await;
        let (_, second) = post_chat(app, r#"{"message": "hello"}"#).await;
        assert_eq!(first["response"], second["response"]);
    }
}
