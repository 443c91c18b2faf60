//! TubeTutor - YouTube transcripts, explained simply
//!
//! A small relay that fetches a video's transcript and hands it to a chat model
//! to produce a kid-friendly summary, a streamed answer to a question, or a set
//! of five flashcards.
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `video` - Video ID extraction, transcript provider, oEmbed metadata
//! - `llm` - Chat completion seam and the OpenAI implementation
//! - `tutor` - Summaries, chat, and flashcards on top of the above
//! - `api` - The HTTP relay (axum)
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use tubetutor::config::Settings;
//! use tubetutor::tutor::Tutor;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let tutor = Tutor::from_settings(&settings)?;
//!
//!     let summary = tutor.summarize("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//!     println!("{}\n\n{}", summary.video_title, summary.summary);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod openai;
pub mod tutor;
pub mod video;

#[cfg(test)]
mod testing;

pub use error::{Result, TutorError};
