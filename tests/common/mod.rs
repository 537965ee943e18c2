//! Shared helpers for Web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use folio::config::Config;
use folio::web::{create_router, AppState};
use wiremock::MockServer;

/// Path the mocked feed is served from.
pub const FEED_PATH: &str = "/feed/@someone";

/// One Medium-style `<item>` entry.
pub fn medium_item(slug: &str, day: u32) -> String {
    let published = NaiveDate::from_ymd_opt(2025, 1, day)
        .expect("valid January day")
        .format("%a, %d %b %Y");
    format!(
        r#"<item>
<title><![CDATA[Story {slug}]]></title>
<link>https://medium.com/@someone/{slug}?source=rss-abc123</link>
<guid isPermaLink="false">https://medium.com/p/{slug}</guid>
<category><![CDATA[rust]]></category>
<category><![CDATA[web]]></category>
<dc:creator><![CDATA[Someone]]></dc:creator>
<pubDate>{published} 12:00:00 GMT</pubDate>
<atom:updated>2025-01-{day:02}T12:00:00.000Z</atom:updated>
<content:encoded><![CDATA[<p>Some words about {slug} and more words.</p>]]></content:encoded>
</item>"#
    )
}

/// A feed document wrapping `items`.
pub fn medium_feed(items: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><rss xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:atom="http://www.w3.org/2005/Atom" version="2.0" xmlns:cc="http://cyber.law.harvard.edu/rss/creativeCommonsRssModule.html">
<channel>
<title><![CDATA[Stories by Someone on Medium]]></title>
<link>https://medium.com/@someone?source=rss-abc123</link>
{}
</channel>
</rss>"#,
        items.join("\n")
    )
}

/// Configuration pointing the feed (and optionally statistics) at mock servers.
pub fn test_config(feed: &MockServer, stats: Option<&MockServer>) -> Config {
    let mut config = Config::default();
    config.web.host = "127.0.0.1".to_string();
    config.web.port = 0;
    config.feed.url = format!("{}{}", feed.uri(), FEED_PATH);

    match stats {
        Some(stats) => {
            config.stats.api_base = stats.uri();
            config.stats.username = "someone".to_string();
        }
        None => config.stats.enabled = false,
    }

    config
}

/// Create a test server for the given configuration.
pub fn create_test_server(config: &Config) -> TestServer {
    let state = Arc::new(AppState::from_config(config).expect("Failed to create app state"));
    let router = create_router(state, &config.web.cors_origins);
    TestServer::new(router).expect("Failed to create test server")
}
