//! Pattern-based article extraction.
//!
//! This is not an XML parser. Each `<item>` span is located by pattern and
//! every field is pulled out of that span independently, so one malformed
//! field never costs the rest of the record.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::feed::types::{
    reading_time_label, ArticleRecord, FALLBACK_TAG, MAX_ARTICLES, MAX_TAGS, SUMMARY_ELLIPSIS,
    SUMMARY_MAX_CHARS, WORDS_PER_MINUTE,
};

static RE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<item>.*?</item>").unwrap());
static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title><!\[CDATA\[(.*?)\]\]></title>").unwrap());
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<link>(.*?)</link>").unwrap());
static RE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<description><!\[CDATA\[(.*?)\]\]></description>").unwrap());
static RE_PUB_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pubDate>(.*?)</pubDate>").unwrap());
static RE_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<category><!\[CDATA\[(.*?)\]\]></category>").unwrap());
static RE_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<content:encoded><!\[CDATA\[(.*?)\]\]></content:encoded>").unwrap()
});
static RE_THUMBNAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<media:thumbnail.*?url="(.*?)""#).unwrap());
static RE_HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Extract up to [`MAX_ARTICLES`] records from a raw feed document.
///
/// Records keep document order. Entries past the limit are never looked at.
pub fn extract_articles(document: &str) -> Vec<ArticleRecord> {
    let mut articles = Vec::new();
    let mut taken = HashSet::new();

    for fragment in RE_ITEM
        .find_iter(document)
        .take(MAX_ARTICLES)
        .map(|m| m.as_str())
    {
        let record = extract_record(fragment, articles.len(), &taken);
        taken.insert(record.id.clone());
        articles.push(record);
    }

    articles
}

/// Build one record from a single `<item>` fragment.
fn extract_record(fragment: &str, position: usize, taken: &HashSet<String>) -> ArticleRecord {
    let url = first_capture(&RE_LINK, fragment).unwrap_or_default();

    ArticleRecord {
        id: derive_id(url, position, taken),
        title: first_capture(&RE_TITLE, fragment)
            .unwrap_or_default()
            .to_string(),
        summary: summarize(first_capture(&RE_DESCRIPTION, fragment).unwrap_or_default()),
        url: url.to_string(),
        published_date: first_capture(&RE_PUB_DATE, fragment)
            .and_then(calendar_date)
            .unwrap_or_default(),
        reading_time: reading_time_label(reading_minutes(
            first_capture(&RE_CONTENT, fragment).unwrap_or_default(),
        )),
        tags: tags(fragment),
        thumbnail: first_capture(&RE_THUMBNAIL, fragment).map(str::to_string),
        claps: None,
    }
}

fn first_capture<'a>(re: &Regex, fragment: &'a str) -> Option<&'a str> {
    re.captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip tags, keep the first [`SUMMARY_MAX_CHARS`] characters and append
/// the ellipsis whether or not anything was cut.
fn summarize(description: &str) -> String {
    let stripped = RE_HTML_TAG.replace_all(description, "");
    let mut summary: String = stripped.chars().take(SUMMARY_MAX_CHARS).collect();
    summary.push_str(SUMMARY_ELLIPSIS);
    summary
}

/// Reduce a publication timestamp to its UTC calendar date.
fn calendar_date(raw: &str) -> Option<String> {
    let raw = raw.trim();

    let date = DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;

    Some(date.format("%Y-%m-%d").to_string())
}

fn tags(fragment: &str) -> Vec<String> {
    let tags: Vec<String> = RE_CATEGORY
        .captures_iter(fragment)
        .filter_map(|caps| caps.get(1))
        .take(MAX_TAGS)
        .map(|m| m.as_str().to_string())
        .collect();

    if tags.is_empty() {
        vec![FALLBACK_TAG.to_string()]
    } else {
        tags
    }
}

/// Minutes needed to read `content`.
///
/// Words are the pieces left after splitting on whitespace runs, so empty
/// content still counts as one piece and the estimate never drops below 1.
fn reading_minutes(content: &str) -> usize {
    let words = RE_WHITESPACE.find_iter(content).count() + 1;
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Last path segment of `url`, or a positional id when that is empty or
/// already used in this batch.
fn derive_id(url: &str, position: usize, taken: &HashSet<String>) -> String {
    let slug = url.rsplit('/').next().unwrap_or_default();
    if !slug.is_empty() && !taken.contains(slug) {
        return slug.to_string();
    }

    let mut id = format!("article-{position}");
    let mut suffix = 1;
    while taken.contains(&id) {
        id = format!("article-{position}-{suffix}");
        suffix += 1;
    }
    id
}
