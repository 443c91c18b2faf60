//! Transcript-grounded question answering.

use super::Tutor;
use crate::error::Result;
use crate::llm::{ChatRequest, FragmentStream};
use crate::video::extract_video_id;
use futures::{future, StreamExt, TryStreamExt};
use tracing::{info, instrument};

impl Tutor {
    /// Answer a question about a video as a stream of non-empty fragments.
    ///
    /// Fails before returning if the transcript cannot be fetched or the
    /// stream cannot be opened. Provider errors after that arrive as stream
    /// items.
    #[instrument(skip(self, question))]
    pub async fn chat(&self, url: &str, question: &str) -> Result<FragmentStream> {
        let video_id = extract_video_id(url);
        info!("Answering question about video {}", video_id);

        let transcript = self.transcript_text(&video_id).await?;

        let request = ChatRequest::new(
            self.render(&self.prompts.chat.system, &[("transcript", transcript.as_str())]),
            self.render(&self.prompts.chat.user, &[("question", question)]),
            0.3,
        );

        let stream = self.model.stream(request).await?;

        Ok(stream
            .try_filter(|fragment| future::ready(!fragment.is_empty()))
            .boxed())
    }
}
