//! Prompt templates for TubeTutor.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub summarize: SummarizePrompts,
    pub chat: ChatPrompts,
    pub flashcards: FlashcardPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompts for the kid-friendly video summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizePrompts {
    pub system: String,
    pub user: String,
}

impl Default for SummarizePrompts {
    fn default() -> Self {
        Self {
            system: "You are a gifted teacher who explains complex topics to children.".to_string(),

            user: r#"Create a simple, easy-to-understand summary from this YouTube video transcript that even a 10-year-old could follow. Follow these rules:

1. Use VERY simple words and short sentences
2. Break down complex ideas into basic concepts
3. Always use examples a child would understand
4. Format strictly using markdown with LOTS of line breaks

Structure:
## 🎥 Video Overview
2-3 super simple sentences about what this video is about

## 📝 Summary
→ Break down EVERYTHING that happens in the video
→ Use lots of bullet points
→ Explain each point in simple words
→ Give examples where needed
→ Make sure to cover all important details
→ Keep each point short and clear

## 🔑 Main Ideas
→ List the most important takeaways
→ Explain why each one matters
→ Use real-world examples

## ❓ Why This Matters
Simple explanation of why this topic is important and how it affects everyday life

## 🚀 Try This
Simple activities or ideas to help understand the topic better

Formatting MUST:
- Use ## for section headers
- Put TWO blank lines between sections
- Use → for ALL bullet points
- Start each bullet point with a new idea
- Keep each point under 2 lines
- Use simple words only
- Maximum 750 words
- Add emojis for visual breaks

Transcript: {{transcript}}"#
                .to_string(),
        }
    }
}

/// Prompts for transcript-grounded question answering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatPrompts {
    pub system: String,
    pub user: String,
}

impl Default for ChatPrompts {
    fn default() -> Self {
        Self {
            system: "You are a helpful assistant for a YouTube video. Use this transcript to answer questions: {{transcript}}".to_string(),
            user: "Answer this question based on the video: {{question}}".to_string(),
        }
    }
}

/// Prompts for flashcard generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashcardPrompts {
    pub system: String,
    pub user: String,
}

impl Default for FlashcardPrompts {
    fn default() -> Self {
        Self {
            system: r#"Create exactly 5 high-quality flashcards from this video transcript. Follow STRICTLY:
- Front must be a clear question
- Back must be a specific answer with examples
- Questions should test understanding of key concepts
- Format as JSON: {"flashcards": [{"front":"...", "back":"..."}]}"#
                .to_string(),
            user: "Video transcript: {{transcript}}".to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let summarize_path = custom_path.join("summarize.toml");
            if summarize_path.exists() {
                let content = std::fs::read_to_string(&summarize_path)?;
                prompts.summarize = toml::from_str(&content)?;
            }

            let chat_path = custom_path.join("chat.toml");
            if chat_path.exists() {
                let content = std::fs::read_to_string(&chat_path)?;
                prompts.chat = toml::from_str(&content)?;
            }

            let flashcards_path = custom_path.join("flashcards.toml");
            if flashcards_path.exists() {
                let content = std::fs::read_to_string(&flashcards_path)?;
                prompts.flashcards = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Load prompts as configured in settings.
    pub fn from_settings(settings: &crate::config::Settings) -> crate::error::Result<Self> {
        Self::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )
    }

    /// Render a prompt template with the given variables.
    ///
    /// Placeholders are resolved in one left-to-right pass over the template;
    /// substituted values are never scanned again. Unknown placeholders are
    /// left as written.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            result.push_str(&rest[..open]);
            let after = &rest[open + 2..];

            match after
                .find("}}")
                .and_then(|close| vars.get(&after[..close]).map(|value| (close, value)))
            {
                Some((close, value)) => {
                    result.push_str(value);
                    rest = &after[close + 2..];
                }
                None => {
                    result.push_str("{{");
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(&self, template: &str, vars: &HashMap<String, String>) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}
