//! # AI Daily News
//!
//! A single-pass updater that pulls AI news from a fixed set of RSS/Atom
//! feeds, labels each article with a category, a hotness flag and tags,
//! removes near-duplicate titles, ranks what is left, and writes a bounded
//! JSON snapshot for a static news site.
//!
//! ## Usage
//!
//! ```sh
//! ai_daily_news
//! ```
//!
//! Run it from cron or any other scheduler; each run replaces the previous
//! snapshot completely.
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: Download each feed in turn and map entries to articles
//! 2. **Classifying**: Score category, hotness and tags per article, inline
//! 3. **Deduplicating**: Drop titles whose 30-character prefix was seen
//! 4. **Ranking**: Hot first, newest first, keep the top 30, number them
//! 5. **Output**: Write the JSON snapshot

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod classify;
mod cli;
mod config;
mod feeds;
mod models;
mod outputs;
mod pipeline;
mod utils;

use cli::Cli;
use config::Settings;
use models::Snapshot;
use outputs::json;
use pipeline::{category_counts, hot_count, run_pipeline};
use utils::ensure_writable_parent;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ai_daily_news starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.output, "Parsed CLI arguments");

    let mut settings = Settings::load(args.config.as_deref()).inspect_err(|e| {
        error!(error = %e, "Failed to load settings");
    })?;
    if let Some(output) = args.output {
        settings.output_file = output;
    }
    let output_path = PathBuf::from(&settings.output_file);

    // Fail before any network work if the snapshot can't be written
    if let Err(e) = ensure_writable_parent(&output_path).await {
        error!(
            path = %output_path.display(),
            error = %e,
            "Snapshot directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Fetch and classify ----
    let client = feeds::rss::build_client(&settings)?;
    let articles = feeds::rss::fetch_all(&client, &settings).await;

    // ---- Dedup, rank, truncate, number ----
    let articles = run_pipeline(articles, settings.max_articles);

    // ---- Snapshot ----
    let snapshot = Snapshot::new(articles, Local::now());
    if let Err(e) = json::write_snapshot(&snapshot, &output_path).await {
        error!(path = %output_path.display(), error = %e, "Failed to write snapshot");
        return Err(e);
    }
    info!(path = %output_path.display(), "Saved snapshot");

    // ---- Statistics ----
    info!(
        total = snapshot.total_count,
        hot = hot_count(&snapshot.articles),
        "Snapshot statistics"
    );
    for (category, count) in category_counts(&snapshot.articles) {
        info!(%category, count, "Articles per category");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
