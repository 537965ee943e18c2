//! Repository listing client.

use std::time::Duration;

use tracing::info;

use crate::config::StatsConfig;
use crate::error::FetchError;
use crate::stats::types::{HostedRepo, RepoSummary, RepoTotals};
use crate::upstream::{HttpSettings, UpstreamFetcher};
use crate::Result;

/// Repository summaries plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub repos: Vec<RepoSummary>,
    pub totals: RepoTotals,
}

/// Reads an account's most recently updated repositories.
pub struct RepoStatsClient {
    upstream: UpstreamFetcher<RepoStats>,
}

impl RepoStatsClient {
    /// Create a client from the statistics configuration.
    pub fn new(config: &StatsConfig) -> Result<Self> {
        let upstream = UpstreamFetcher::new(
            config.repos_url(),
            config.freshness(),
            &HttpSettings::from(config),
            summarize,
        )?;
        Ok(Self { upstream })
    }

    /// Listing URL.
    pub fn url(&self) -> &str {
        self.upstream.url()
    }

    /// Freshness window of fetched listings.
    pub fn freshness(&self) -> Duration {
        self.upstream.freshness()
    }

    /// Fetch the listing and summarize it.
    ///
    /// A listing that fails to decode is not reused; the next call fetches again.
    pub async fn stats(&self) -> std::result::Result<RepoStats, FetchError> {
        let stats = self.upstream.fetch().await?;
        info!(url = %self.url(), count = stats.repos.len(), "Serving repository statistics");
        Ok(stats)
    }
}

/// Decode a listing body into summaries and totals.
fn summarize(body: &str) -> std::result::Result<RepoStats, FetchError> {
    let hosted: Vec<HostedRepo> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let repos: Vec<RepoSummary> = hosted.into_iter().map(RepoSummary::from).collect();
    let totals = RepoTotals::from_repos(&repos);

    Ok(RepoStats { repos, totals })
}
