//! Flashcard generation.

use super::Tutor;
use crate::error::{Result, TutorError};
use crate::llm::ChatRequest;
use crate::video::extract_video_id;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of flashcards every generated set must contain.
pub const FLASHCARD_COUNT: usize = 5;

/// A question/answer flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    /// The question.
    pub front: String,
    /// The answer, with examples.
    pub back: String,
}

#[derive(Deserialize)]
struct FlashcardDeck {
    flashcards: Vec<Flashcard>,
}

/// Parse a model reply into exactly `FLASHCARD_COUNT` flashcards.
pub fn parse_flashcards(content: &str) -> Result<Vec<Flashcard>> {
    let deck: FlashcardDeck = serde_json::from_str(content)
        .map_err(|e| TutorError::Flashcards(format!("Invalid flashcard JSON: {}", e)))?;

    if deck.flashcards.len() != FLASHCARD_COUNT {
        debug!("Model returned {} flashcards", deck.flashcards.len());
        return Err(TutorError::Flashcards(format!(
            "Didn't receive exactly {} flashcards",
            FLASHCARD_COUNT
        )));
    }

    Ok(deck.flashcards)
}

impl Tutor {
    /// Generate five flashcards for a video.
    #[instrument(skip(self))]
    pub async fn flashcards(&self, url: &str) -> Result<Vec<Flashcard>> {
        let video_id = extract_video_id(url);
        info!("Generating flashcards for video {}", video_id);

        let transcript = self.transcript_text(&video_id).await?;

        let request = ChatRequest::new(
            self.render(&self.prompts.flashcards.system, &[]),
            self.render(&self.prompts.flashcards.user, &[("transcript", transcript.as_str())]),
            0.3,
        )
        .json();

        let content = self.model.complete(request).await?;
        parse_flashcards(&content)
    }
}
