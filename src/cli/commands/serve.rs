//! HTTP relay server command.

use crate::api::{self, AppState};
use crate::cli::Output;
use crate::config::Settings;
use crate::tutor::Tutor;
use tracing::info;

/// Run the HTTP relay.
pub async fn run_serve(host: Option<String>, port: Option<u16>, mut settings: Settings) -> anyhow::Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    if !settings.has_api_key() {
        Output::warning("No OpenAI API key configured. Completion requests will fail until one is set.");
    }

    let tutor = Tutor::from_settings(&settings)?;
    let app = api::router(AppState::new(tutor));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("TubeTutor Relay");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Summarize", "POST /summarize");
    Output::kv("Chat (SSE)", "POST /chat");
    Output::kv("Flashcards", "POST /generate-flashcards");
    Output::kv("Model", &settings.openai.model);
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
