//! Run settings with built-in defaults and optional YAML overrides.
//!
//! Running without a settings file uses the built-in feed list and writes
//! `news_data.json` to the working directory. A YAML file may override any
//! subset of fields:
//!
//! ```yaml
//! output_file: public/news_data.json
//! feed_delay_ms: 2000
//! feeds:
//!   - https://techcrunch.com/tag/artificial-intelligence/feed/
//! ```

use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use tracing::{debug, instrument};
use url::Url;

/// Feeds pulled when no settings file overrides them.
pub const DEFAULT_FEEDS: [&str; 4] = [
    "https://techcrunch.com/tag/artificial-intelligence/feed/",
    "https://www.technologyreview.com/topic/artificial-intelligence/feed",
    "https://venturebeat.com/category/ai/feed/",
    "https://www.artificialintelligence-news.com/feed/",
];

pub const DEFAULT_OUTPUT_FILE: &str = "news_data.json";
pub const DEFAULT_MAX_ARTICLES: usize = 30;
pub const DEFAULT_ENTRIES_PER_FEED: usize = 10;
pub const DEFAULT_FEED_DELAY_MS: u64 = 1000;
pub const DEFAULT_USER_AGENT: &str = concat!("ai_daily_news/", env!("CARGO_PKG_VERSION"));

/// Maximum summary length in characters, ellipsis included.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Number of leading title characters compared when deduplicating.
pub const TITLE_KEY_CHARS: usize = 30;

/// Settings for a single run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// RSS/Atom feed URLs, fetched in order.
    pub feeds: Vec<String>,
    /// Snapshot path, replaced on every run.
    pub output_file: String,
    /// Articles kept after ranking.
    pub max_articles: usize,
    /// Entries read from the head of each feed.
    pub entries_per_feed: usize,
    /// Pause between consecutive feeds, in milliseconds.
    pub feed_delay_ms: u64,
    /// `User-Agent` header sent with every feed request.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            max_articles: DEFAULT_MAX_ARTICLES,
            entries_per_feed: DEFAULT_ENTRIES_PER_FEED,
            feed_delay_ms: DEFAULT_FEED_DELAY_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from an optional YAML file.
    ///
    /// `None` yields [`Settings::default`]. Fields missing from the file keep
    /// their defaults. Every feed must be an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML for
    /// this struct, or lists a feed that is not a URL.
    #[instrument(level = "info")]
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let settings = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(Path::new(p))?;
                Self::from_yaml(&raw)?
            }
            None => Self::default(),
        };
        settings.validate()?;
        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// Parse settings from a YAML document.
    pub fn from_yaml(raw: &str) -> Result<Self, Box<dyn Error>> {
        // An empty document deserializes as unit, not as a map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        for feed in &self.feeds {
            Url::parse(feed).map_err(|e| format!("invalid feed URL {:?}: {}", feed, e))?;
        }
        if self.output_file.trim().is_empty() {
            return Err("output_file must not be empty".into());
        }
        Ok(())
    }
}
