//! HTTP relay for TubeTutor.
//!
//! Exposes the summary, chat, flashcard, and health endpoints. Every failure
//! is reported as `{"error": "..."}` with status 500.

mod handlers;
mod stream;

pub use stream::event_stream;

use crate::error::TutorError;
use crate::tutor::Tutor;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared application state.
pub struct AppState {
    pub tutor: Tutor,
}

impl AppState {
    pub fn new(tutor: Tutor) -> Self {
        Self { tutor }
    }
}

/// Build the relay router with open CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .route("/chat", post(handlers::chat))
        .route("/generate-flashcards", post(handlers::generate_flashcards))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Handler error; always rendered as a 500 with the error message.
#[derive(Debug)]
pub struct ApiError(TutorError);

impl From<TutorError> for ApiError {
    fn from(err: TutorError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(TutorError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{flashcard_reply, tutor, MockChatModel, MockMetadata, MockTranscripts};

    async fn spawn(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn failing_state() -> AppState {
        AppState::new(tutor(
            MockTranscripts::failing("transcript provider down"),
            MockMetadata::failing("oEmbed down"),
            MockChatModel::failing("completion down"),
        ))
    }

    #[tokio::test]
    async fn test_health_with_all_providers_failing() {
        let base = spawn(failing_state()).await;

        let response = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let base = spawn(failing_state()).await;

        let response = reqwest::Client::new()
            .get(format!("{}/health", base))
            .header("Origin", "https://example.com")
            .send()
            .await
            .unwrap();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_transcript_failure_maps_to_500() {
        let base = spawn(failing_state()).await;
        let client = reqwest::Client::new();

        for (path, body) in [
            ("/summarize", serde_json::json!({ "url": "abc" })),
            ("/chat", serde_json::json!({ "url": "abc", "question": "why?" })),
            ("/generate-flashcards", serde_json::json!({ "url": "abc" })),
        ] {
            let response = client
                .post(format!("{}{}", base, path))
                .json(&body)
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), 500, "{}", path);
            let body: serde_json::Value = response.json().await.unwrap();
            assert!(
                body["error"]
                    .as_str()
                    .unwrap()
                    .contains("transcript provider down"),
                "{}",
                path
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_500() {
        let base = spawn(failing_state()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/summarize", base))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_flashcards_over_http() {
        let state = AppState::new(tutor(
            MockTranscripts::new(&["a", "b"]),
            MockMetadata::untitled(),
            MockChatModel::replying(&flashcard_reply(5)),
        ));
        let base = spawn(state).await;

        let response = reqwest::Client::new()
            .post(format!("{}/generate-flashcards", base))
            .json(&serde_json::json!({ "url": "https://youtu.be/abc" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["flashcards"].as_array().unwrap().len(), 5);
    }
}
