//! Flashcards command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::tutor::Tutor;
use anyhow::Result;

/// Run the flashcards command.
pub async fn run_flashcards(url: &str, json: bool, settings: Settings) -> Result<()> {
    let tutor = Tutor::from_settings(&settings)?;

    let spinner = Output::spinner("Making flashcards...");
    let cards = match tutor.flashcards(url).await {
        Ok(cards) => {
            spinner.finish_and_clear();
            cards
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate flashcards: {}", e));
            return Err(e.into());
        }
    };

    if json {
        let out = serde_json::json!({ "flashcards": cards });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    Output::header("Flashcards");
    for (i, card) in cards.iter().enumerate() {
        Output::flashcard(i + 1, card);
    }
    println!();

    Ok(())
}
