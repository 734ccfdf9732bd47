//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use toml::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::utils::log;

/// Root application configuration.
///
/// Deserialized from the flat `feed.toml` layout through [`RawConfig`], which
/// coerces or defaults each loosely typed value on its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawConfig")]
pub struct Config {
    /// Usable source feed URLs, in fetch order
    pub sources: Vec<String>,

    /// Metadata of the generated channel
    pub channel: ChannelConfig,

    /// Where the merged feed is written
    pub output_file: String,

    /// Maximum number of items kept after sorting
    pub max_items: usize,

    /// HTTP client settings
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn(&format!(
                "Config load failed from {}: {}. Using defaults.",
                path.as_ref().display(),
                e
            ));
            Self::default()
        })
    }

    /// Whether at least one usable source URL is configured.
    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if !self.has_sources() {
            return Err(AppError::validation(
                "no usable source_feeds or source_feed configured",
            ));
        }
        for source in &self.sources {
            let url = Url::parse(source)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::validation(format!(
                    "source {source} is not an http(s) URL"
                )));
            }
        }
        if self.output_file.trim().is_empty() {
            return Err(AppError::validation("output_file is empty"));
        }
        if self.max_items == 0 {
            return Err(AppError::validation("max_items must be > 0"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            channel: ChannelConfig::default(),
            output_file: defaults::output_file(),
            max_items: defaults::max_items(),
            http: HttpConfig::default(),
        }
    }
}

/// Metadata written into the output `<channel>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            title: defaults::title(),
            link: defaults::link(),
            description: defaults::description(),
            language: defaults::language(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// On-disk layout of the configuration file.
///
/// Every field is read loosely so that one mistyped value falls back to its
/// default instead of discarding the whole file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    source_feed: Option<Value>,

    #[serde(default)]
    source_feeds: Option<Value>,

    #[serde(default)]
    title: Option<Value>,

    #[serde(default)]
    link: Option<Value>,

    #[serde(default)]
    description: Option<Value>,

    #[serde(default)]
    language: Option<Value>,

    #[serde(default)]
    output_file: Option<Value>,

    #[serde(default)]
    max_items: Option<Value>,

    #[serde(default)]
    http: Option<Value>,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let output_file = coerce_string("output_file", raw.output_file.as_ref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(defaults::output_file);

        Self {
            sources: usable_sources(raw.source_feeds.as_ref(), raw.source_feed.as_ref()),
            channel: ChannelConfig {
                title: coerce_string("title", raw.title.as_ref()).unwrap_or_else(defaults::title),
                link: coerce_string("link", raw.link.as_ref()).unwrap_or_else(defaults::link),
                description: coerce_string("description", raw.description.as_ref())
                    .unwrap_or_else(defaults::description),
                language: coerce_string("language", raw.language.as_ref())
                    .unwrap_or_else(defaults::language),
            },
            output_file,
            max_items: coerce_max_items(raw.max_items.as_ref()),
            http: coerce_http(raw.http),
        }
    }
}

/// Pick the feed URLs to fetch.
///
/// A non-empty `source_feeds` list wins; blank and non-string entries are
/// dropped before deciding. Otherwise the singular `source_feed` is used.
fn usable_sources(feeds: Option<&Value>, feed: Option<&Value>) -> Vec<String> {
    let listed: Vec<String> = match feeds {
        Some(Value::Array(values)) => values.iter().filter_map(as_url).collect(),
        _ => Vec::new(),
    };

    if !listed.is_empty() {
        return listed;
    }

    feed.and_then(as_url).into_iter().collect()
}

fn as_url(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Coerce `max_items` to an integer, falling back to the default.
fn coerce_max_items(value: Option<&Value>) -> usize {
    let coerced = match value {
        Some(Value::Integer(n)) => usize::try_from(*n).ok(),
        Some(Value::Float(f)) if f.is_finite() && *f >= 0.0 => Some(f.trunc() as usize),
        Some(Value::String(s)) => s.trim().parse::<usize>().ok(),
        _ => None,
    };

    coerced.unwrap_or_else(|| {
        if let Some(v) = value {
            log::warn(&format!("Ignoring invalid max_items value {v}"));
        }
        defaults::max_items()
    })
}

/// Coerce a scalar to text. Arrays and tables are ignored with a warning.
fn coerce_string(key: &str, value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Integer(n) => Some(n.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        other => {
            log::warn(&format!("Ignoring non-text {key} value {other}"));
            None
        }
    }
}

/// Read the `[http]` table, falling back to defaults if it does not fit.
fn coerce_http(value: Option<Value>) -> HttpConfig {
    let Some(value) = value else {
        return HttpConfig::default();
    };

    value.try_into().unwrap_or_else(|e| {
        log::warn(&format!("Ignoring invalid [http] table: {e}"));
        HttpConfig::default()
    })
}

mod defaults {
    // Channel defaults
    pub fn title() -> String {
        "Aggregated News".into()
    }
    pub fn link() -> String {
        "https://example.com/".into()
    }
    pub fn description() -> String {
        "Aggregated news feed".into()
    }
    pub fn language() -> String {
        "en-us".into()
    }

    // Output defaults
    pub fn output_file() -> String {
        "docs/news-feed.xml".into()
    }
    pub fn max_items() -> usize {
        40
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; GitHubActionsBot/1.0)".into()
    }
    pub fn timeout() -> u64 {
        10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert!(!config.has_sources());
        assert_eq!(config.output_file, "docs/news-feed.xml");
        assert_eq!(config.max_items, 40);
        assert_eq!(config.channel, ChannelConfig::default());
        assert_eq!(
            config.http.user_agent,
            "Mozilla/5.0 (compatible; GitHubActionsBot/1.0)"
        );
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_source_feeds_preferred_over_source_feed() {
        let config = Config::parse(
            r#"
            source_feed = "https://single.example.com/rss"
            source_feeds = ["https://a.example.com/rss", "https://b.example.com/rss"]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.sources,
            vec!["https://a.example.com/rss", "https://b.example.com/rss"]
        );
    }

    #[test]
    fn test_blank_and_non_string_entries_are_filtered() {
        let config = Config::parse(
            r#"
            source_feeds = ["  ", 42, "  https://a.example.com/rss  ", true]
            "#,
        )
        .unwrap();
        assert_eq!(config.sources, vec!["https://a.example.com/rss"]);
    }

    #[test]
    fn test_falls_back_to_source_feed() {
        let config = Config::parse(
            r#"
            source_feed = "https://single.example.com/rss"
            source_feeds = ["", 1]
            "#,
        )
        .unwrap();
        assert_eq!(config.sources, vec!["https://single.example.com/rss"]);
    }

    #[test]
    fn test_no_usable_sources() {
        let config = Config::parse(
            r#"
            source_feed = "   "
            source_feeds = []
            "#,
        )
        .unwrap();
        assert!(!config.has_sources());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_items_coercion() {
        assert_eq!(Config::parse("max_items = 5").unwrap().max_items, 5);
        assert_eq!(Config::parse("max_items = \"12\"").unwrap().max_items, 12);
        assert_eq!(Config::parse("max_items = 7.9").unwrap().max_items, 7);
        assert_eq!(Config::parse("max_items = -3").unwrap().max_items, 40);
        assert_eq!(Config::parse("max_items = \"lots\"").unwrap().max_items, 40);
    }

    #[test]
    fn test_mistyped_fields_keep_sources() {
        let config = Config::parse(
            r#"
            source_feed = "https://a.example.com/rss"
            title = 5
            link = ["https://example.org/"]
            language = true
            output_file = "  "

            [http]
            timeout_secs = "soon"
            "#,
        )
        .unwrap();
        assert_eq!(config.sources, vec!["https://a.example.com/rss"]);
        assert_eq!(config.channel.title, "5");
        assert_eq!(config.channel.link, "https://example.com/");
        assert_eq!(config.channel.language, "true");
        assert_eq!(config.output_file, "docs/news-feed.xml");
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_channel_and_http_overrides() {
        let config = Config::parse(
            r#"
            title = "Investor News"
            language = "en"
            output_file = "out/feed.xml"

            [http]
            timeout_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.channel.title, "Investor News");
        assert_eq!(config.channel.language, "en");
        assert_eq!(config.channel.link, "https://example.com/");
        assert_eq!(config.output_file, "out/feed.xml");
        assert_eq!(config.http.timeout_secs, 3);
        assert!(config.http.user_agent.contains("GitHubActionsBot"));
    }

    #[test]
    fn test_validate() {
        let mut config = Config::parse("source_feed = \"https://a.example.com/rss\"").unwrap();
        assert!(config.validate().is_ok());

        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.http.timeout_secs = 10;
        config.sources = vec!["ftp://a.example.com/rss".into()];
        assert!(config.validate().is_err());

        config.sources = vec!["not a url".into()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/definitely/not/here/feed.toml");
        assert!(!config.has_sources());
        assert_eq!(config.max_items, 40);
    }
}
