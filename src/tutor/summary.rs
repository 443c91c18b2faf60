//! Kid-friendly video summaries.

use super::Tutor;
use crate::error::Result;
use crate::llm::ChatRequest;
use crate::video::{extract_video_id, PLACEHOLDER_TITLE};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A generated summary with the resolved video identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    pub video_id: String,
    pub video_title: String,
}

impl Tutor {
    /// Summarize a video for a young audience.
    #[instrument(skip(self))]
    pub async fn summarize(&self, url: &str) -> Result<Summary> {
        let video_id = extract_video_id(url);
        info!("Summarizing video {}", video_id);

        let transcript = self.transcript_text(&video_id).await?;
        let video_title = self.video_title(&video_id).await;

        let request = ChatRequest::new(
            self.render(&self.prompts.summarize.system, &[]),
            self.render(&self.prompts.summarize.user, &[("transcript", transcript.as_str())]),
            0.1,
        )
        .with_top_p(0.95)
        .with_frequency_penalty(0.5);

        let summary = self.model.complete(request).await?;

        Ok(Summary {
            summary,
            video_id,
            video_title,
        })
    }

    /// Look up the display title, falling back to a placeholder.
    async fn video_title(&self, video_id: &str) -> String {
        match self.metadata.fetch_metadata(video_id).await {
            Ok(metadata) => metadata
                .title
                .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
            Err(e) => {
                warn!("Title lookup for {} failed: {}", video_id, e);
                PLACEHOLDER_TITLE.to_string()
            }
        }
    }
}
