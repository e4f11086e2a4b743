//! Text cleanup and file system helpers.
//!
//! This module provides helper functions used throughout the application:
//! - Markup stripping and whitespace collapsing for feed text
//! - Character-safe truncation for summaries and title keys
//! - Output directory validation before any network work starts

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip HTML tags and collapse whitespace.
///
/// Anything between `<` and `>` is removed, then every run of whitespace
/// becomes a single space and the ends are trimmed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("<p>Hello\n  <b>world</b></p>"), "Hello world");
/// ```
pub fn clean_text(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Shorten `s` to at most `max` characters, ending in `...` when cut.
///
/// Lengths are counted in characters, so multi-byte text is never split
/// mid-codepoint.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Lowercase of the first `n` characters of `s`.
pub fn lowercase_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect::<String>().to_lowercase()
}

/// Ensure the directory that will hold `file_path` exists and is writable.
///
/// Creates the directory if it doesn't exist, then writes and removes a
/// probe file. Running this before fetching means a bad output path fails
/// fast instead of after every feed has been downloaded.
#[instrument(level = "info", skip_all, fields(path = %file_path.display()))]
pub async fn ensure_writable_parent(file_path: &Path) -> Result<(), Box<dyn Error>> {
    let dir = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    fs::create_dir_all(&dir).await?;

    let probe_path = dir.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!(dir = %dir.display(), "Output directory is writable");
    Ok(())
}
