//! Data models for classified articles and the snapshot that wraps them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Category`]: The closed set of topic labels an article can carry
//! - [`Article`]: A feed entry after cleaning and classification
//! - [`Snapshot`]: The document written to disk at the end of a run
//!
//! Field order on [`Article`] matches the key order of the JSON output.

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic category assigned to an article by keyword scoring.
///
/// Variants are declared in scoring-table order. When two categories score
/// the same, the one listed first here wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Tools,
    Research,
    Industry,
    Safety,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 5] = [
        Category::News,
        Category::Tools,
        Category::Research,
        Category::Industry,
        Category::Safety,
    ];

    /// The lowercase label used in the snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Tools => "tools",
            Category::Research => "research",
            Category::Industry => "industry",
            Category::Safety => "safety",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single news article taken from a feed entry.
///
/// Articles are built by the feed fetcher with `id` set to `0`; the real
/// 1-based identifier is assigned only after ranking and truncation, so it
/// is never stable across runs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Article {
    /// Position in the final snapshot, starting at 1.
    pub id: usize,
    /// Cleaned plain-text title. Never empty.
    pub title: String,
    /// Cleaned plain-text summary, at most 200 characters.
    pub summary: String,
    /// Display name of the originating feed.
    pub source: String,
    /// Publication date in `YYYY-MM-DD` form.
    pub date: String,
    /// Link to the original article, or `#`.
    pub url: String,
    /// Assigned topic category.
    pub cat: Category,
    /// Whether the article mentions any hot keyword.
    pub hot: bool,
    /// Up to five entity or technology labels.
    pub tags: Vec<String>,
}

/// The complete JSON document replaced on every run.
#[derive(Debug, Deserialize, Serialize)]
pub struct Snapshot {
    /// Local time of the run in ISO 8601 form.
    pub last_update: String,
    /// Number of entries in `articles`.
    pub total_count: usize,
    /// Final ranked articles.
    pub articles: Vec<Article>,
}

impl Snapshot {
    /// Wrap a final article list with run metadata.
    pub fn new(articles: Vec<Article>, now: DateTime<Local>) -> Self {
        Self {
            last_update: now.to_rfc3339_opts(SecondsFormat::Micros, false),
            total_count: articles.len(),
            articles,
        }
    }
}
