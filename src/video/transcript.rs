//! YouTube transcript provider.

use super::{CaptionFragment, TranscriptSource};
use crate::error::{Result, TutorError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Transcript source backed by YouTube's caption tracks.
pub struct YoutubeTranscripts {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YoutubeTranscripts {
    /// Create a transcript source preferring the given languages in order.
    pub fn new(languages: Vec<String>) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TutorError::Transcript(format!("Failed to initialize client: {}", e)))?;

        Ok(Self { api, languages })
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscripts {
    #[instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<CaptionFragment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| TutorError::Transcript(e.to_string()))?;

        debug!(
            "Fetched {} caption fragments ({})",
            transcript.snippets.len(),
            transcript.language_code
        );

        Ok(transcript
            .snippets
            .into_iter()
            .map(|s| CaptionFragment {
                text: s.text,
                start: s.start,
                duration: s.duration,
            })
            .collect())
    }
}
