//! CLI command implementations.

mod ask;
mod config;
mod doctor;
mod flashcards;
mod serve;
mod summarize;

pub use ask::run_ask;
pub use config::run_config;
pub use doctor::run_doctor;
pub use flashcards::run_flashcards;
pub use serve::run_serve;
pub use summarize::run_summarize;
