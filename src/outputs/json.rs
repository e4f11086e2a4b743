//! JSON snapshot writer.
//!
//! Serializes the [`Snapshot`] with two-space indentation. Non-ASCII text
//! (Chinese tags, curly quotes in titles) is written as literal UTF-8.
//!
//! # Replacement
//!
//! The document is first written to a temporary file next to the target and
//! then renamed over it, so a crash mid-write leaves the previous snapshot
//! intact instead of a truncated file.

use crate::models::Snapshot;
use std::error::Error;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Render a snapshot as pretty-printed JSON.
pub fn to_json(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `snapshot` to `path`, replacing any existing file.
///
/// Creates the parent directory if it is missing.
///
/// # Errors
///
/// Returns an error if serialization, directory creation, the temporary
/// write, or the final rename fails. A failed write or rename removes the
/// temporary file.
#[instrument(level = "info", skip_all, fields(path = %path.display(), articles = snapshot.total_count))]
pub async fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = to_json(snapshot)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).await?;
    }

    let tmp = temp_path_for(path);
    if let Err(e) = fs::write(&tmp, json.as_bytes()).await {
        error!(tmp = %tmp.display(), error = %e, "Failed to write temporary snapshot");
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        error!(tmp = %tmp.display(), error = %e, "Failed to move snapshot into place");
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    info!(bytes = json.len(), "Wrote snapshot");
    Ok(())
}
