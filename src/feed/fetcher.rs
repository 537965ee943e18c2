//! Syndication feed fetcher.

use std::time::Duration;

use tracing::info;

use crate::config::FeedConfig;
use crate::error::FetchError;
use crate::feed::extractor::extract_articles;
use crate::feed::types::ArticleRecord;
use crate::upstream::{HttpSettings, UpstreamFetcher};
use crate::Result;

/// Fetches the configured feed and turns it into article records.
pub struct FeedFetcher {
    upstream: UpstreamFetcher<Vec<ArticleRecord>>,
}

impl FeedFetcher {
    /// Create a fetcher from the feed configuration.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let upstream = UpstreamFetcher::new(
            &config.url,
            config.freshness(),
            &HttpSettings::from(config),
            decode_feed,
        )?;
        Ok(Self { upstream })
    }

    /// Feed URL.
    pub fn url(&self) -> &str {
        self.upstream.url()
    }

    /// Freshness window of extracted articles.
    pub fn freshness(&self) -> Duration {
        self.upstream.freshness()
    }

    /// Latest articles, extracted from the feed.
    pub async fn articles(&self) -> std::result::Result<Vec<ArticleRecord>, FetchError> {
        let articles = self.upstream.fetch().await?;
        info!(url = %self.url(), count = articles.len(), "Serving articles");
        Ok(articles)
    }
}

/// Extraction never fails; malformed entries degrade field by field.
fn decode_feed(document: &str) -> std::result::Result<Vec<ArticleRecord>, FetchError> {
    Ok(extract_articles(document))
}
