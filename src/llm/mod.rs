//! Chat completion seam for TubeTutor.

mod openai;

pub use openai::OpenAIChat;

use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Stream of incremental content fragments. Fragments may be empty.
pub type FragmentStream = BoxStream<'static, Result<String>>;

/// A single system + user exchange with its sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub frequency_penalty: Option<f32>,
    /// Constrain the output to a single JSON object.
    pub json_response: bool,
}

impl ChatRequest {
    /// Create a request with the given messages and temperature.
    pub fn new(system: impl Into<String>, user: impl Into<String>, temperature: f32) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature,
            top_p: None,
            frequency_penalty: None,
            json_response: false,
        }
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_frequency_penalty(mut self, penalty: f32) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    pub fn json(mut self) -> Self {
        self.json_response = true;
        self
    }
}

/// Trait for chat completion providers.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run a buffered completion and return the full message content.
    async fn complete(&self, request: ChatRequest) -> Result<String>;

    /// Open a streaming completion.
    async fn stream(&self, request: ChatRequest) -> Result<FragmentStream>;
}
