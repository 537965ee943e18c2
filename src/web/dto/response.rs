//! Response DTOs for Web API.

use serde::{Deserialize, Serialize};

use crate::feed::ArticleRecord;
use crate::stats::{RepoStats, RepoSummary, RepoTotals};

/// Body of the articles endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticlesResponse {
    /// Latest articles, newest first.
    pub articles: Vec<ArticleRecord>,
}

impl ArticlesResponse {
    /// Create a response carrying the given articles.
    pub fn new(articles: Vec<ArticleRecord>) -> Self {
        Self { articles }
    }

    /// The body sent when the feed could not be read.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Body of the repository statistics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoStatsResponse {
    /// Recently updated repositories.
    pub repos: Vec<RepoSummary>,
    /// Totals across `repos`.
    pub stats: RepoTotals,
}

impl RepoStatsResponse {
    /// The body sent when the listing could not be read.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<RepoStats> for RepoStatsResponse {
    fn from(stats: RepoStats) -> Self {
        Self {
            repos: stats.repos,
            stats: stats.totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_articles_body() {
        let json = serde_json::to_string(&ArticlesResponse::empty()).unwrap();
        assert_eq!(json, r#"{"articles":[]}"#);
    }

    #[test]
    fn test_articles_body() {
        let body = ArticlesResponse::new(crate::feed::extract_articles(
            "<item><link>https://medium.com/@someone/slug</link></item>",
        ));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["articles"][0]["id"], "slug");
        assert_eq!(json["articles"][0]["tags"][0], "Article");
    }

    #[test]
    fn test_empty_stats_body() {
        let json = serde_json::to_value(RepoStatsResponse::empty()).unwrap();
        assert_eq!(json["repos"].as_array().unwrap().len(), 0);
        assert_eq!(json["stats"]["totalRepos"], 0);
    }
}
