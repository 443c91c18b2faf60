//! Video sources for TubeTutor.
//!
//! Provides identifier extraction plus trait-based interfaces for the transcript
//! provider and the oEmbed metadata lookup.

mod oembed;
mod transcript;

pub use oembed::OEmbedClient;
pub use transcript::YoutubeTranscripts;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Title used when the metadata lookup yields nothing usable.
pub const PLACEHOLDER_TITLE: &str = "Video Title";

/// A single caption fragment from a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Caption text.
    pub text: String,
    /// Start offset in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
}

impl CaptionFragment {
    /// Create a fragment with no timing information.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: 0.0,
            duration: 0.0,
        }
    }
}

/// Metadata returned by the oEmbed lookup. Only the title is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: Option<String>,
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the ordered caption fragments for a video.
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<CaptionFragment>>;
}

/// Trait for video metadata lookups.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch display metadata for a video.
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata>;
}

/// Extract a video ID from a URL or bare ID.
///
/// Takes the text between the first `v=` and the next `&` when present,
/// otherwise everything after the last `/`. The result is not validated.
pub fn extract_video_id(input: &str) -> String {
    match input.split_once("v=") {
        Some((_, rest)) => rest.split('&').next().unwrap_or_default().to_string(),
        None => input.rsplit('/').next().unwrap_or_default().to_string(),
    }
}

/// Join caption fragments into a single space-separated transcript.
pub fn join_transcript(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
