//! OpenAI chat completion implementation.

use super::{ChatModel, ChatRequest, FragmentStream};
use crate::error::{Result, TutorError};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs, ResponseFormat,
};
use async_openai::Client;
use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, instrument};

/// OpenAI-backed chat model.
pub struct OpenAIChat {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIChat {
    /// Create a chat model using an existing client.
    pub fn new(client: Client<OpenAIConfig>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    fn build_request(&self, request: ChatRequest, stream: bool) -> Result<CreateChatCompletionRequest> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(request.system)
                .build()
                .map_err(|e| TutorError::Completion(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(request.user)
                .build()
                .map_err(|e| TutorError::Completion(e.to_string()))?
                .into(),
        ];

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model)
            .messages(messages)
            .temperature(request.temperature);

        if let Some(top_p) = request.top_p {
            args.top_p(top_p);
        }
        if let Some(penalty) = request.frequency_penalty {
            args.frequency_penalty(penalty);
        }
        if request.json_response {
            args.response_format(ResponseFormat::JsonObject);
        }
        if stream {
            args.stream(true);
        }

        args.build().map_err(|e| TutorError::Completion(e.to_string()))
    }
}

#[async_trait]
impl ChatModel for OpenAIChat {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        let request = self.build_request(request, false)?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| TutorError::OpenAI(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| TutorError::Completion("Empty response from LLM".to_string()))?;

        debug!("Completion returned {} chars", content.len());
        Ok(content)
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn stream(&self, request: ChatRequest) -> Result<FragmentStream> {
        let request = self.build_request(request, true)?;

        let stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| TutorError::OpenAI(e.to_string()))?;

        Ok(stream
            .map(|item| match item {
                Ok(chunk) => Ok(chunk
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.delta.content)
                    .unwrap_or_default()),
                Err(e) => Err(TutorError::OpenAI(e.to_string())),
            })
            .boxed())
    }
}
