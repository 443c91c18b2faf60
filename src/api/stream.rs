//! Server-sent event forwarding for chat answers.
//!
//! A producer task pulls fragments from the provider stream and pushes framed
//! events into a bounded channel. The response body drains the channel. When
//! the client goes away the receiver is dropped, the producer sees the closed
//! channel, and the provider stream is dropped with it.

use crate::llm::FragmentStream;
use axum::{
    http::header,
    response::{
        sse::{Event, Sse},
        IntoResponse,
    },
};
use futures::StreamExt;
use serde::Serialize;
use std::convert::Infallible;
use tokio::sync::mpsc;
use tracing::{debug, warn};

const CHANNEL_CAPACITY: usize = 32;

#[derive(Serialize)]
struct ContentEvent<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct ErrorEvent {
    error: String,
}

/// Turn a fragment stream into a `text/event-stream` response.
///
/// Each non-empty fragment becomes `data: {"content": ...}`. A provider error
/// ends the stream with a final `data: {"error": ...}` event.
pub fn event_stream(fragments: FragmentStream) -> impl IntoResponse {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    tokio::spawn(forward(fragments, tx));

    let events = futures::stream::unfold(rx, |mut rx| async move {
        rx.recv()
            .await
            .map(|event| (Ok::<Event, Infallible>(event), rx))
    });

    ([(header::CACHE_CONTROL, "no-cache")], Sse::new(events))
}

async fn forward(mut fragments: FragmentStream, tx: mpsc::Sender<Event>) {
    let mut sent = 0usize;

    loop {
        let next = tokio::select! {
            _ = tx.closed() => {
                debug!("Client disconnected after {} events, dropping provider stream", sent);
                return;
            }
            next = fragments.next() => next,
        };

        let event = match next {
            Some(Ok(fragment)) if fragment.is_empty() => continue,
            Some(Ok(fragment)) => Event::default().json_data(ContentEvent { content: &fragment }),
            Some(Err(e)) => {
                warn!("Provider stream failed after {} events: {}", sent, e);
                if let Ok(event) = Event::default().json_data(ErrorEvent { error: e.to_string() }) {
                    let _ = tx.send(event).await;
                }
                return;
            }
            None => {
                debug!("Provider stream finished after {} events", sent);
                return;
            }
        };

        let event = match event {
            Ok(event) => event,
            Err(e) => {
                warn!("Failed to encode event: {}", e);
                return;
            }
        };

        if tx.send(event).await.is_err() {
            debug!("Client disconnected after {} events", sent);
            return;
        }
        sent += 1;
    }
}
