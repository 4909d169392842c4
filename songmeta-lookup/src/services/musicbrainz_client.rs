//! MusicBrainz recording search client
//!
//! Rate limited to one request per configured interval (1/second by default,
//! per MusicBrainz API terms).

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;

use songmeta_common::ServiceConfig;

use crate::resolution::SearchResponse;

const USER_AGENT: &str = concat!("songmeta/", env!("CARGO_PKG_VERSION"));

/// Search client errors
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Source of recording search results
#[async_trait]
pub trait RecordingSearch: Send + Sync {
    /// Search recordings matching title and artist
    async fn search_recordings(&self, title: &str, artist: &str) -> Result<SearchResponse, SearchError>;
}

/// Client settings
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Recording search endpoint, e.g. `https://musicbrainz.org/ws/2/recording`
    pub base_url: String,
    pub limit: u32,
    pub timeout: Duration,
    pub min_interval: Duration,
}

impl From<&ServiceConfig> for SearchConfig {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            base_url: config.music_service_url.clone(),
            limit: config.search_limit,
            timeout: config.request_timeout,
            min_interval: config.rate_limit,
        }
    }
}

/// Rate limiter enforcing a minimum spacing between requests
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval,
        }
    }

    /// Wait if necessary to comply with rate limit
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// Lucene query matching an exact recording title and artist
pub fn build_query(title: &str, artist: &str) -> String {
    format!(
        "recording:\"{}\" AND artist:\"{}\"",
        title.replace('"', "\\\""),
        artist.replace('"', "\\\"")
    )
}

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    rate_limiter: Arc<RateLimiter>,
    config: SearchConfig,
}

impl MusicBrainzClient {
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            rate_limiter: Arc::new(RateLimiter::new(config.min_interval)),
            config,
        })
    }
}

#[async_trait]
impl RecordingSearch for MusicBrainzClient {
    async fn search_recordings(&self, title: &str, artist: &str) -> Result<SearchResponse, SearchError> {
        self.rate_limiter.wait().await;

        let query = build_query(title, artist);
        let limit = self.config.limit.to_string();

        tracing::info!(url = %self.config.base_url, query = %query, "Searching recordings");

        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[("query", query.as_str()), ("fmt", "json"), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        let status = response.status();

        if status == 503 {
            return Err(SearchError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError(status.as_u16(), error_text));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::NetworkError(e.to_string()))?;

        let parsed = SearchResponse::from_slice(&body).map_err(|e| SearchError::ParseError(e.to_string()))?;

        tracing::debug!(
            title = %title,
            artist = %artist,
            candidates = parsed.recordings.len(),
            "Received search results"
        );

        Ok(parsed)
    }
}
