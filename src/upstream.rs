//! Outbound HTTP reads with a freshness window.
//!
//! An [`UpstreamFetcher`] reads one fixed URL and decodes the body into a
//! value. A successfully decoded value is kept in a single reuse slot and
//! handed back to later callers until the freshness window has passed.

use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::{FeedConfig, StatsConfig};
use crate::error::FetchError;
use crate::{FolioError, Result};

/// User agent string for outbound requests.
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Turns a response body into the value handed to callers.
pub type Decoder<T> = fn(&str) -> std::result::Result<T, FetchError>;

/// Timeouts and limits for an outbound client.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Total request timeout.
    pub total_timeout: Duration,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
    /// Maximum accepted body size in bytes.
    pub max_body_size: u64,
}

impl From<&FeedConfig> for HttpSettings {
    fn from(config: &FeedConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            read_timeout: Duration::from_secs(config.read_timeout_secs),
            total_timeout: Duration::from_secs(config.total_timeout_secs),
            max_redirects: config.max_redirects,
            max_body_size: config.max_feed_size_bytes,
        }
    }
}

impl From<&StatsConfig> for HttpSettings {
    fn from(config: &StatsConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            read_timeout: Duration::from_secs(config.read_timeout_secs),
            total_timeout: Duration::from_secs(config.total_timeout_secs),
            max_redirects: config.max_redirects,
            max_body_size: config.max_response_size_bytes,
        }
    }
}

/// A decoded value kept for reuse.
#[derive(Debug)]
struct Cached<T> {
    value: T,
    fetched_at: Instant,
}

/// Reads a fixed URL, reusing the last decoded value inside the freshness
/// window.
pub struct UpstreamFetcher<T> {
    client: Client,
    url: String,
    freshness: Duration,
    max_body_size: u64,
    decode: Decoder<T>,
    slot: Mutex<Option<Cached<T>>>,
}

impl<T: Clone> UpstreamFetcher<T> {
    /// Create a fetcher for `url` whose bodies are decoded with `decode`.
    pub fn new(
        url: impl Into<String>,
        freshness: Duration,
        settings: &HttpSettings,
        decode: Decoder<T>,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .read_timeout(settings.read_timeout)
            .timeout(settings.total_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FolioError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            freshness,
            max_body_size: settings.max_body_size,
            decode,
            slot: Mutex::new(None),
        })
    }

    /// The URL this fetcher reads.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The freshness window.
    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Return the decoded value, from the reuse slot when it is still fresh.
    ///
    /// The slot lock is held across the network read, so concurrent callers
    /// during a refresh wait for that one read instead of issuing their own.
    /// Only values that decoded successfully are stored.
    pub async fn fetch(&self) -> std::result::Result<T, FetchError> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.fetched_at.elapsed() < self.freshness {
                debug!(url = %self.url, "Reusing cached response");
                return Ok(cached.value.clone());
            }
        }

        let body = self.fetch_uncached().await?;
        let value = (self.decode)(&body)?;
        *slot = Some(Cached {
            value: value.clone(),
            fetched_at: Instant::now(),
        });

        Ok(value)
    }

    /// Issue the outbound read.
    async fn fetch_uncached(&self) -> std::result::Result<String, FetchError> {
        debug!(url = %self.url, "Fetching upstream");

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > self.max_body_size {
                return Err(FetchError::TooLarge {
                    size: content_length,
                    max: self.max_body_size,
                });
            }
        }

        let bytes = response.bytes().await?;

        if bytes.len() as u64 > self.max_body_size {
            return Err(FetchError::TooLarge {
                size: bytes.len() as u64,
                max: self.max_body_size,
            });
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
