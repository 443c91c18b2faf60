//! Configuration module for TubeTutor.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{ChatPrompts, FlashcardPrompts, Prompts, SummarizePrompts};
pub use settings::{
    OpenAISettings, PromptSettings, ServerSettings, Settings, YoutubeSettings, API_KEY_ENV,
};
