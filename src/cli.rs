//! Command-line interface definitions for AI Daily News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option is optional: a bare invocation fetches the built-in feeds
//! and writes `news_data.json` to the working directory.

use clap::Parser;

/// Command-line arguments for the AI Daily News updater.
///
/// # Examples
///
/// ```sh
/// # Built-in feeds, ./news_data.json
/// ai_daily_news
///
/// # Custom feed list from a settings file
/// ai_daily_news --config feeds.yaml
///
/// # Write straight into a static site's public directory
/// ai_daily_news -o ./site/public/news_data.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Snapshot path (overrides `output_file` from the settings file)
    #[arg(short, long)]
    pub output: Option<String>,
}
