//! Request handlers.

use super::{event_stream, ApiError, AppState};
use crate::error::TutorError;
use crate::tutor::{Flashcard, Summary};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// === Request/Response Types ===

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    /// YouTube URL or bare video ID
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub url: Option<String>,
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| {
        TutorError::InvalidInput(format!("Missing '{}' in request body", field)).into()
    })
}

// === Handlers ===

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VideoRequest>, JsonRejection>,
) -> Result<Json<Summary>, ApiError> {
    let Json(req) = payload?;
    let url = required(req.url, "url")?;

    Ok(Json(state.tutor.summarize(&url).await?))
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let url = required(req.url, "url")?;
    let question = required(req.question, "question")?;

    let fragments = state.tutor.chat(&url, &question).await?;
    Ok(event_stream(fragments).into_response())
}

pub async fn generate_flashcards(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VideoRequest>, JsonRejection>,
) -> Result<Json<FlashcardsResponse>, ApiError> {
    let Json(req) = payload?;
    let url = required(req.url, "url")?;

    let flashcards = state.tutor.flashcards(&url).await?;
    Ok(Json(FlashcardsResponse { flashcards }))
}
