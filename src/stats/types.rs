//! Repository statistics types.

use serde::{Deserialize, Serialize};

/// Description shown for repositories without one.
pub const NO_DESCRIPTION: &str = "No description provided";

/// Language shown for repositories without a detected language.
pub const NO_LANGUAGE: &str = "N/A";

/// A repository as returned by the hosting provider's listing API.
///
/// Only the fields the summaries need are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct HostedRepo {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    pub html_url: String,
}

/// Display-ready repository summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    /// Repository name.
    pub name: String,
    /// Description, or a placeholder.
    pub description: String,
    /// Star count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
    /// Primary language, or a placeholder.
    pub language: String,
    /// Link to the repository page.
    pub url: String,
}

impl From<HostedRepo> for RepoSummary {
    fn from(repo: HostedRepo) -> Self {
        Self {
            name: repo.name,
            description: repo
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| NO_LANGUAGE.to_string()),
            url: repo.html_url,
        }
    }
}

/// Totals across the listed repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoTotals {
    /// Number of repositories listed.
    pub total_repos: u64,
    /// Sum of stars.
    pub total_stars: u64,
    /// Sum of forks.
    pub total_forks: u64,
}

impl RepoTotals {
    /// Compute totals over a set of summaries.
    pub fn from_repos(repos: &[RepoSummary]) -> Self {
        Self {
            total_repos: repos.len() as u64,
            total_stars: repos.iter().map(|r| r.stars).sum(),
            total_forks: repos.iter().map(|r| r.forks).sum(),
        }
    }
}
