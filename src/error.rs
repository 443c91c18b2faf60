//! Error types for TubeTutor.

use thiserror::Error;

/// Library-level error type for TubeTutor operations.
#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transcript unavailable: {0}")]
    Transcript(String),

    #[error("Metadata lookup failed: {0}")]
    Metadata(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("{0}")]
    Flashcards(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for TubeTutor operations.
pub type Result<T> = std::result::Result<T, TutorError>;
