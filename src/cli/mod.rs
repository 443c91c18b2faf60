//! CLI module for TubeTutor.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// TubeTutor - YouTube transcripts, explained simply
///
/// Summarize videos for young learners, ask questions about them, and turn them
/// into flashcards, over HTTP or straight from the terminal.
#[derive(Parser, Debug)]
#[command(name = "tubetutor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP relay
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Summarize a video for a 10-year-old
    Summarize {
        /// YouTube URL or video ID
        url: String,
    },

    /// Ask a question about a video and stream the answer
    Ask {
        /// YouTube URL or video ID
        url: String,

        /// The question to ask
        question: String,
    },

    /// Generate five flashcards from a video
    Flashcards {
        /// YouTube URL or video ID
        url: String,

        /// Print the flashcards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check configuration and credentials
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
