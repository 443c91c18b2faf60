//! Tutor operations: summaries, transcript chat, and flashcards.
//!
//! A `Tutor` bundles the transcript provider, the metadata lookup, and the chat
//! model. It is built once at startup and shared by the HTTP handlers and the
//! CLI commands.

mod chat;
mod flashcards;
mod summary;

pub use flashcards::{parse_flashcards, Flashcard, FLASHCARD_COUNT};
pub use summary::Summary;

use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::llm::{ChatModel, OpenAIChat};
use crate::openai::create_client;
use crate::video::{
    join_transcript, MetadataSource, OEmbedClient, TranscriptSource, YoutubeTranscripts,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Relay between the transcript provider and the chat model.
#[derive(Clone)]
pub struct Tutor {
    transcripts: Arc<dyn TranscriptSource>,
    metadata: Arc<dyn MetadataSource>,
    model: Arc<dyn ChatModel>,
    prompts: Arc<Prompts>,
}

impl Tutor {
    /// Create a tutor from explicit collaborators with default prompts.
    pub fn new(
        transcripts: Arc<dyn TranscriptSource>,
        metadata: Arc<dyn MetadataSource>,
        model: Arc<dyn ChatModel>,
    ) -> Self {
        Self {
            transcripts,
            metadata,
            model,
            prompts: Arc::new(Prompts::default()),
        }
    }

    /// Build the production tutor from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transcripts = YoutubeTranscripts::new(settings.youtube.languages.clone())?;
        let metadata = OEmbedClient::new(
            &settings.youtube.oembed_endpoint,
            &settings.youtube.watch_url,
        );
        let model = OpenAIChat::new(create_client(settings)?, &settings.openai.model);
        let prompts = Prompts::from_settings(settings)?;

        Ok(Self::new(Arc::new(transcripts), Arc::new(metadata), Arc::new(model))
            .with_prompts(prompts))
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = Arc::new(prompts);
        self
    }

    /// Fetch a transcript and flatten it to a single string.
    async fn transcript_text(&self, video_id: &str) -> Result<String> {
        let fragments = self.transcripts.fetch_transcript(video_id).await?;
        let transcript = join_transcript(&fragments);
        debug!(
            "Transcript for {}: {} fragments, {} chars",
            video_id,
            fragments.len(),
            transcript.len()
        );
        Ok(transcript)
    }

    fn render(&self, template: &str, vars: &[(&str, &str)]) -> String {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.prompts.render_with_custom(template, &vars)
    }
}
