//! In-memory collaborators for unit tests.

use crate::error::{Result, TutorError};
use crate::llm::{ChatModel, ChatRequest, FragmentStream};
use crate::tutor::Tutor;
use crate::video::{CaptionFragment, MetadataSource, TranscriptSource, VideoMetadata};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockTranscripts {
    pub fragments: Vec<CaptionFragment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscripts {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            fragments: texts.iter().map(|t| CaptionFragment::text(*t)).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fragments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptSource for MockTranscripts {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<CaptionFragment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TutorError::Transcript(msg.clone()));
        }
        Ok(self.fragments.clone())
    }
}

#[derive(Clone)]
pub struct MockMetadata {
    pub title: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockMetadata {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn untitled() -> Self {
        Self {
            title: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            title: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl MetadataSource for MockMetadata {
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TutorError::Metadata(msg.clone()));
        }
        Ok(VideoMetadata {
            title: self.title.clone(),
        })
    }
}

#[derive(Clone)]
pub struct MockChatModel {
    pub reply: String,
    /// Stream items; `Err` entries become provider errors mid-stream.
    pub fragments: Vec<std::result::Result<String, String>>,
    pub requests: Arc<Mutex<Vec<ChatRequest>>>,
    pub fail_with: Option<String>,
}

impl MockChatModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fragments: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn streaming(fragments: &[&str]) -> Self {
        Self {
            reply: String::new(),
            fragments: fragments.iter().map(|f| Ok(f.to_string())).collect(),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn streaming_then_error(fragments: &[&str], msg: &str) -> Self {
        let mut model = Self::streaming(fragments);
        model.fragments.push(Err(msg.to_string()));
        model
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            reply: String::new(),
            fragments: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        if let Some(ref msg) = self.fail_with {
            return Err(TutorError::OpenAI(msg.clone()));
        }
        Ok(self.reply.clone())
    }

    async fn stream(&self, request: ChatRequest) -> Result<FragmentStream> {
        self.requests.lock().unwrap().push(request);
        if let Some(ref msg) = self.fail_with {
            return Err(TutorError::OpenAI(msg.clone()));
        }
        let items: Vec<Result<String>> = self
            .fragments
            .iter()
            .cloned()
            .map(|f| f.map_err(TutorError::OpenAI))
            .collect();
        Ok(futures::stream::iter(items).boxed())
    }
}

pub fn tutor(transcripts: MockTranscripts, metadata: MockMetadata, model: MockChatModel) -> Tutor {
    Tutor::new(Arc::new(transcripts), Arc::new(metadata), Arc::new(model))
}

/// A well-formed flashcard reply with `count` cards.
pub fn flashcard_reply(count: usize) -> String {
    let cards: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "front": format!("Question {}?", i),
                "back": format!("Answer {}, for example {}.", i, i * 10),
            })
        })
        .collect();
    serde_json::json!({ "flashcards": cards }).to_string()
}
