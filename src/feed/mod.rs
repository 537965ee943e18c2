//! Syndicated article feed for folio.
//!
//! This module fetches the configured RSS feed and extracts the latest
//! articles into presentation-ready records.

pub mod extractor;
pub mod fetcher;
pub mod types;

pub use extractor::extract_articles;
pub use fetcher::FeedFetcher;
pub use types::{
    ArticleRecord, FALLBACK_TAG, MAX_ARTICLES, MAX_TAGS, SUMMARY_ELLIPSIS, SUMMARY_MAX_CHARS,
    WORDS_PER_MINUTE,
};
