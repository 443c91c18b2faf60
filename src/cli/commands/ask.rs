//! Ask command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::tutor::Tutor;
use anyhow::Result;
use console::style;
use futures::StreamExt;
use std::io::{self, Write};

/// Run the ask command, printing the answer as it streams in.
pub async fn run_ask(url: &str, question: &str, settings: Settings) -> Result<()> {
    let tutor = Tutor::from_settings(&settings)?;

    let spinner = Output::spinner("Reading the transcript...");
    let mut fragments = match tutor.chat(url, question).await {
        Ok(stream) => {
            spinner.finish_and_clear();
            stream
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to start answer: {}", e));
            return Err(e.into());
        }
    };

    let mut stdout = io::stdout();
    print!("\n{} ", style("TubeTutor:").cyan().bold());

    while let Some(fragment) = fragments.next().await {
        match fragment {
            Ok(text) => {
                print!("{}", text);
                stdout.flush()?;
            }
            Err(e) => {
                println!();
                Output::error(&format!("Answer interrupted: {}", e));
                return Err(e.into());
            }
        }
    }

    println!("\n");
    Ok(())
}
