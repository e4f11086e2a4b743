//! RSS/Atom feed fetcher.
//!
//! Downloads each configured feed, parses it with `feed-rs`, and maps the
//! first few entries to classified [`Article`]s. A feed that cannot be
//! fetched or parsed contributes no articles; the run carries on with the
//! remaining feeds.
//!
//! # Field Resolution
//!
//! | Article field | Taken from | Fallback |
//! |---------------|------------|----------|
//! | `title` | entry title | entry skipped |
//! | `summary` | entry summary, then content body | entry skipped |
//! | `date` | `published`, then `updated` (UTC) | today's local date |
//! | `source` | feed title | `Unknown` |
//! | `url` | first entry link | `#` |

use crate::classify::{categorize, is_hot, tags_or_default};
use crate::config::{SUMMARY_MAX_CHARS, Settings};
use crate::models::Article;
use crate::utils::{clean_text, truncate_with_ellipsis};
use chrono::{Local, NaiveDate};
use feed_rs::model::Entry;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

/// Source name used when a feed has no title.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Link used when an entry has none.
pub const MISSING_LINK: &str = "#";

/// Build the HTTP client shared by every feed request.
pub fn build_client(settings: &Settings) -> Result<Client, Box<dyn Error>> {
    Ok(Client::builder().user_agent(&settings.user_agent).build()?)
}

/// Fetch every configured feed in order and concatenate the results.
///
/// Sleeps `feed_delay_ms` between consecutive feeds. Never fails: feeds
/// that error are logged by [`fetch_feed`] and contribute nothing.
#[instrument(level = "info", skip_all, fields(feeds = settings.feeds.len()))]
pub async fn fetch_all(client: &Client, settings: &Settings) -> Vec<Article> {
    let mut articles = Vec::new();
    let delay = Duration::from_millis(settings.feed_delay_ms);

    for (i, url) in settings.feeds.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            sleep(delay).await;
        }
        articles.extend(fetch_feed(client, url, settings).await);
    }

    info!(count = articles.len(), "Fetched raw articles from all feeds");
    articles
}

/// Fetch a single feed and map its entries to articles.
///
/// Any transport, status, or parse failure is logged and turned into an
/// empty result.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_feed(client: &Client, url: &str, settings: &Settings) -> Vec<Article> {
    info!("Fetching feed");
    match try_fetch_feed(client, url, settings).await {
        Ok(articles) => {
            info!(count = articles.len(), "Fetched feed");
            articles
        }
        Err(e) => {
            error!(error = %e, "Feed fetch failed");
            Vec::new()
        }
    }
}

async fn try_fetch_feed(
    client: &Client,
    url: &str,
    settings: &Settings,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    debug!(bytes = bytes.len(), "Downloaded feed");

    let today = Local::now().date_naive();
    parse_feed(&bytes, settings.entries_per_feed, today)
}

/// Parse a feed document and map up to `limit` entries to articles.
///
/// Only the first `limit` entries are considered; entries among them whose
/// cleaned title or summary is empty are dropped, so fewer than `limit`
/// articles may come back. `today` is used for entries without a timestamp.
pub fn parse_feed(
    bytes: &[u8],
    limit: usize,
    today: NaiveDate,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let feed = feed_rs::parser::parse(bytes)?;

    let source = feed
        .title
        .as_ref()
        .map(|t| clean_text(&t.content))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    let articles = feed
        .entries
        .iter()
        .take(limit)
        .filter_map(|entry| entry_to_article(entry, &source, today))
        .collect();
    Ok(articles)
}

fn entry_to_article(entry: &Entry, source: &str, today: NaiveDate) -> Option<Article> {
    let title = entry
        .title
        .as_ref()
        .map(|t| clean_text(&t.content))
        .unwrap_or_default();

    let raw_summary = entry
        .summary
        .as_ref()
        .map(|s| s.content.as_str())
        .or_else(|| entry.content.as_ref().and_then(|c| c.body.as_deref()))
        .unwrap_or_default();
    let summary = truncate_with_ellipsis(&clean_text(raw_summary), SUMMARY_MAX_CHARS);

    if title.is_empty() || summary.is_empty() {
        debug!(entry_id = %entry.id, "Skipping entry with empty title or summary");
        return None;
    }

    let date = entry
        .published
        .or(entry.updated)
        .map(|d| d.date_naive())
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string();

    let url = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .unwrap_or_else(|| MISSING_LINK.to_string());

    Some(Article {
        id: 0,
        cat: categorize(&title, &summary),
        hot: is_hot(&title, &summary),
        tags: tags_or_default(&title, &summary),
        title,
        summary,
        source: source.to_string(),
        date,
        url,
    })
}
