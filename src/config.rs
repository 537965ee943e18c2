//! Configuration module for folio.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::{FolioError, Result};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    3000
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            cors_origins: vec![],
        }
    }
}

/// Syndication feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Feed URL.
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// How long a fetched document may be reused, in seconds.
    #[serde(default = "default_freshness")]
    pub freshness_secs: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// Maximum number of redirects.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    /// Maximum feed size in bytes.
    #[serde(default = "default_max_feed_size")]
    pub max_feed_size_bytes: u64,
}

fn default_feed_url() -> String {
    "https://medium.com/feed/@sanyapb".to_string()
}

fn default_freshness() -> u64 {
    3600 // 1 hour
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_read_timeout() -> u64 {
    20
}

fn default_total_timeout() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    5
}

fn default_max_feed_size() -> u64 {
    5 * 1024 * 1024 // 5MB
}

impl FeedConfig {
    /// Freshness window as a duration.
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            freshness_secs: default_freshness(),
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            total_timeout_secs: default_total_timeout(),
            max_redirects: default_max_redirects(),
            max_feed_size_bytes: default_max_feed_size(),
        }
    }
}

/// Repository statistics configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Whether the statistics endpoint is served.
    #[serde(default = "default_stats_enabled")]
    pub enabled: bool,
    /// Base URL of the hosting provider's API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Account whose repositories are listed.
    #[serde(default = "default_username")]
    pub username: String,
    /// Number of repositories requested.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// How long a fetched listing may be reused, in seconds.
    #[serde(default = "default_freshness")]
    pub freshness_secs: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// Maximum number of redirects.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    /// Maximum listing size in bytes.
    #[serde(default = "default_max_listing_size")]
    pub max_response_size_bytes: u64,
}

fn default_stats_enabled() -> bool {
    true
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_username() -> String {
    "sanyaprem".to_string()
}

fn default_per_page() -> u32 {
    6
}

fn default_max_listing_size() -> u64 {
    1024 * 1024 // 1MB
}

impl StatsConfig {
    /// Full URL of the repository listing.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base.trim_end_matches('/'),
            self.username,
            self.per_page
        )
    }

    /// Freshness window as a duration.
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            enabled: default_stats_enabled(),
            api_base: default_api_base(),
            username: default_username(),
            per_page: default_per_page(),
            freshness_secs: default_freshness(),
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            total_timeout_secs: default_total_timeout(),
            max_redirects: default_max_redirects(),
            max_response_size_bytes: default_max_listing_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/folio.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Web server configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Syndication feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Repository statistics configuration.
    #[serde(default)]
    pub stats: StatsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(FolioError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FolioError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FOLIO_FEED_URL`: Override the syndication feed URL
    /// - `FOLIO_PORT`: Override the web server port
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FOLIO_FEED_URL") {
            if !url.is_empty() {
                self.feed.url = url;
            }
        }

        if let Ok(port) = std::env::var("FOLIO_PORT") {
            match port.parse() {
                Ok(port) => self.web.port = port,
                Err(_) => eprintln!("Ignoring invalid FOLIO_PORT value: {port}"),
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The feed URL is not an absolute http(s) URL
    /// - Statistics are enabled with a bad API base or a zero page size
    pub fn validate(&self) -> Result<()> {
        validate_upstream_url("feed.url", &self.feed.url)?;

        if self.stats.enabled {
            validate_upstream_url("stats.api_base", &self.stats.api_base)?;
            if self.stats.per_page == 0 {
                return Err(FolioError::Validation(
                    "stats.per_page must be greater than zero".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Check that an upstream URL parses and uses http or https.
fn validate_upstream_url(field: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| FolioError::Validation(format!("{field} is not a valid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(FolioError::Validation(format!(
            "{field} uses unsupported URL scheme: {scheme}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 3000);
        assert!(config.web.cors_origins.is_empty());

        assert_eq!(config.feed.url, "https://medium.com/feed/@sanyapb");
        assert_eq!(config.feed.freshness_secs, 3600);
        assert_eq!(config.feed.freshness(), Duration::from_secs(3600));
        assert_eq!(config.feed.connect_timeout_secs, 10);
        assert_eq!(config.feed.read_timeout_secs, 20);
        assert_eq!(config.feed.total_timeout_secs, 30);
        assert_eq!(config.feed.max_redirects, 5);
        assert_eq!(config.feed.max_feed_size_bytes, 5 * 1024 * 1024);

        assert!(config.stats.enabled);
        assert_eq!(config.stats.api_base, "https://api.github.com");
        assert_eq!(config.stats.username, "sanyaprem");
        assert_eq!(config.stats.per_page, 6);
        assert_eq!(config.stats.freshness_secs, 3600);
        assert_eq!(config.stats.connect_timeout_secs, 10);
        assert_eq!(config.stats.read_timeout_secs, 20);
        assert_eq!(config.stats.total_timeout_secs, 30);
        assert_eq!(config.stats.max_redirects, 5);
        assert_eq!(config.stats.max_response_size_bytes, 1024 * 1024);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/folio.log");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[web]
host = "127.0.0.1"
port = 8080
cors_origins = ["http://localhost:3000"]

[feed]
url = "https://example.com/feed"
freshness_secs = 600
connect_timeout_secs = 5
read_timeout_secs = 6
total_timeout_secs = 7
max_redirects = 2
max_feed_size_bytes = 1024

[stats]
enabled = false
api_base = "https://git.example.com/api/"
username = "someone"
per_page = 12
freshness_secs = 60
total_timeout_secs = 15
max_response_size_bytes = 65536

[logging]
level = "debug"
file = "custom/logs/app.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.web.host, "127.0.0.1");
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.web.cors_origins, vec!["http://localhost:3000"]);

        assert_eq!(config.feed.url, "https://example.com/feed");
        assert_eq!(config.feed.freshness_secs, 600);
        assert_eq!(config.feed.connect_timeout_secs, 5);
        assert_eq!(config.feed.read_timeout_secs, 6);
        assert_eq!(config.feed.total_timeout_secs, 7);
        assert_eq!(config.feed.max_redirects, 2);
        assert_eq!(config.feed.max_feed_size_bytes, 1024);

        assert!(!config.stats.enabled);
        assert_eq!(config.stats.username, "someone");
        assert_eq!(config.stats.per_page, 12);
        assert_eq!(config.stats.freshness_secs, 60);
        assert_eq!(config.stats.total_timeout_secs, 15);
        assert_eq!(config.stats.connect_timeout_secs, 10);
        assert_eq!(config.stats.max_response_size_bytes, 65536);
        assert_eq!(
            config.stats.repos_url(),
            "https://git.example.com/api/users/someone/repos?sort=updated&per_page=12"
        );

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[feed]
freshness_secs = 0
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.feed.freshness_secs, 0);
        assert_eq!(config.feed.url, "https://medium.com/feed/@sanyapb");
        assert_eq!(config.web.port, 3000);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.feed.freshness_secs, 3600);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        assert!(result.is_err());
        if let Err(FolioError::Validation(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(FolioError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[web]\nport = 4040").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.web.port, 4040);
    }

    #[test]
    fn test_default_repos_url() {
        assert_eq!(
            StatsConfig::default().repos_url(),
            "https://api.github.com/users/sanyaprem/repos?sort=updated&per_page=6"
        );
    }

    #[test]
    fn test_apply_env_overrides() {
        let original_url = std::env::var("FOLIO_FEED_URL").ok();
        let original_port = std::env::var("FOLIO_PORT").ok();

        std::env::set_var("FOLIO_FEED_URL", "https://example.org/feed");
        std::env::set_var("FOLIO_PORT", "9090");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.feed.url, "https://example.org/feed");
        assert_eq!(config.web.port, 9090);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[web]\nport = 4040\n[feed]\nfreshness_secs = 60").unwrap();
        let loaded = Config::load_with_env(file.path()).unwrap();
        assert_eq!(loaded.web.port, 9090);
        assert_eq!(loaded.feed.url, "https://example.org/feed");
        assert_eq!(loaded.feed.freshness_secs, 60);

        std::env::set_var("FOLIO_FEED_URL", "");
        std::env::set_var("FOLIO_PORT", "not-a-port");

        let mut config = Config::default();
        config.apply_env_overrides();

        // Empty or malformed values leave defaults in place
        assert_eq!(config.feed.url, "https://medium.com/feed/@sanyapb");
        assert_eq!(config.web.port, 3000);

        match original_url {
            Some(val) => std::env::set_var("FOLIO_FEED_URL", val),
            None => std::env::remove_var("FOLIO_FEED_URL"),
        }
        match original_port {
            Some(val) => std::env::set_var("FOLIO_PORT", val),
            None => std::env::remove_var("FOLIO_PORT"),
        }
    }

    #[test]
    fn test_validate_default() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_feed_url() {
        let mut config = Config::default();
        config.feed.url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(FolioError::Validation(_))));

        config.feed.url = "ftp://example.com/feed".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported URL scheme"));
    }

    #[test]
    fn test_validate_stats() {
        let mut config = Config::default();
        config.stats.per_page = 0;
        assert!(config.validate().is_err());

        // Disabled statistics are not checked
        config.stats.enabled = false;
        config.stats.api_base = "garbage".to_string();
        assert!(config.validate().is_ok());
    }
}
