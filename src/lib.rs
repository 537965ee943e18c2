//! folio - data service for a personal portfolio site.
//!
//! Serves the latest syndicated articles and repository statistics as JSON.

pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod stats;
pub mod upstream;
pub mod web;

pub use config::Config;
pub use error::{FetchError, FolioError, Result};
pub use feed::{extract_articles, ArticleRecord, FeedFetcher};
pub use stats::{RepoStats, RepoStatsClient};
pub use web::WebServer;
