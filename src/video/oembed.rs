//! oEmbed metadata lookup.

use super::{MetadataSource, VideoMetadata};
use crate::error::{Result, TutorError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

/// Metadata source that queries an oEmbed endpoint.
pub struct OEmbedClient {
    http: reqwest::Client,
    endpoint: String,
    watch_url: String,
}

impl OEmbedClient {
    /// Create a client for the given oEmbed endpoint and watch URL prefix.
    pub fn new(endpoint: &str, watch_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            watch_url: watch_url.to_string(),
        }
    }

    /// Build the lookup URL for a video.
    fn lookup_url(&self, video_id: &str) -> Result<Url> {
        let watch = format!("{}?v={}", self.watch_url, video_id);
        Url::parse_with_params(&self.endpoint, &[("url", watch.as_str()), ("format", "json")])
            .map_err(|e| TutorError::Config(format!("Invalid oEmbed endpoint: {}", e)))
    }
}

#[async_trait]
impl MetadataSource for OEmbedClient {
    #[instrument(skip(self))]
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata> {
        let url = self.lookup_url(video_id)?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TutorError::Metadata(format!("oEmbed returned {}", status)));
        }

        let metadata: VideoMetadata = response.json().await?;
        debug!("oEmbed title: {:?}", metadata.title);
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/oembed", addr)
    }

    #[test]
    fn test_lookup_url() {
        let client = OEmbedClient::new("https://www.youtube.com/oembed", "https://www.youtube.com/watch");
        let url = client.lookup_url("abc123").unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("url".to_string(), "https://www.youtube.com/watch?v=abc123".to_string()),
                ("format".to_string(), "json".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_metadata_success() {
        let router = Router::new().route(
            "/oembed",
            get(|| async {
                Json(serde_json::json!({
                    "title": "How Rainbows Work",
                    "author_name": "Science Kids",
                    "type": "video"
                }))
            }),
        );
        let endpoint = spawn(router).await;

        let client = OEmbedClient::new(&endpoint, "https://www.youtube.com/watch");
        let metadata = client.fetch_metadata("abc123").await.unwrap();
        assert_eq!(metadata.title.as_deref(), Some("How Rainbows Work"));
    }

    #[tokio::test]
    async fn test_fetch_metadata_not_found() {
        let router = Router::new().route("/oembed", get(|| async { StatusCode::NOT_FOUND }));
        let endpoint = spawn(router).await;

        let client = OEmbedClient::new(&endpoint, "https://www.youtube.com/watch");
        let err = client.fetch_metadata("missing").await.unwrap_err();
        assert!(matches!(err, TutorError::Metadata(_)));
        assert!(err.to_string().contains("404"));
    }
}
