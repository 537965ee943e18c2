//! API handlers for the site.

pub mod articles;
pub mod stats;

pub use articles::get_articles;
pub use stats::get_repo_stats;

use std::time::Duration;

use crate::config::Config;
use crate::feed::FeedFetcher;
use crate::stats::RepoStatsClient;
use crate::Result;

/// Shared application state.
pub struct AppState {
    /// Article feed.
    pub feed: FeedFetcher,
    /// Repository statistics, when enabled.
    pub stats: Option<RepoStatsClient>,
}

impl AppState {
    /// Create a new application state without statistics.
    pub fn new(feed: FeedFetcher) -> Self {
        Self { feed, stats: None }
    }

    /// Enable repository statistics.
    pub fn with_stats(mut self, stats: RepoStatsClient) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Build the state described by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut state = Self::new(FeedFetcher::new(&config.feed)?);
        if config.stats.enabled {
            state = state.with_stats(RepoStatsClient::new(&config.stats)?);
        }
        Ok(state)
    }
}

/// `Cache-Control` value declaring the freshness window to shared caches.
pub(crate) fn cache_control(freshness: Duration) -> String {
    match freshness.as_secs() {
        0 => "no-store".to_string(),
        secs => format!("public, s-maxage={secs}"),
    }
}
