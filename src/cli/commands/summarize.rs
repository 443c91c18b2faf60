//! Summarize command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::tutor::Tutor;
use anyhow::Result;

/// Run the summarize command.
pub async fn run_summarize(url: &str, settings: Settings) -> Result<()> {
    let tutor = Tutor::from_settings(&settings)?;

    let spinner = Output::spinner("Reading the transcript and writing a summary...");

    match tutor.summarize(url).await {
        Ok(summary) => {
            spinner.finish_and_clear();
            Output::header(&summary.video_title);
            Output::kv("Video", &summary.video_id);
            println!("\n{}\n", summary.summary);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to summarize video: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
