//! Article types for folio.

use serde::{Deserialize, Serialize};

/// Maximum number of articles produced from one document.
pub const MAX_ARTICLES: usize = 6;

/// Maximum number of characters kept from a stripped description.
pub const SUMMARY_MAX_CHARS: usize = 150;

/// Marker appended to every summary.
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Maximum number of tags per article.
pub const MAX_TAGS: usize = 3;

/// Tag used when an article declares no categories.
pub const FALLBACK_TAG: &str = "Article";

/// Reading speed used for the reading time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// A normalized, presentation-ready article.
///
/// Serialized with the field names the site's article view reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Identifier, unique within one extraction batch.
    pub id: String,
    /// Article title.
    pub title: String,
    /// HTML-stripped, truncated summary (always ends with `...`).
    #[serde(rename = "description")]
    pub summary: String,
    /// Link to the article, possibly empty.
    pub url: String,
    /// Publication date as `YYYY-MM-DD`, or empty.
    pub published_date: String,
    /// Reading time label, e.g. `"4 min read"`.
    pub reading_time: String,
    /// One to three tags.
    pub tags: Vec<String>,
    /// Thumbnail URL when the entry declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Clap count. The feed never carries it, so extraction leaves it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claps: Option<u64>,
}

/// Format a reading time label.
pub fn reading_time_label(minutes: usize) -> String {
    format!("{minutes} min read")
}
