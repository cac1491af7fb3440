//! Snapshot files on the local filesystem.
//!
//! Thin async wrappers over the envelope codec: write an export,
//! read one back, or peek at a stored file's campaign header without
//! deserializing the whole document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;

use crate::model::{AgencySnapshot, Campaign};
use crate::snapshot::{
    create_envelope, export_file_name, parse_envelope, to_json, SnapshotError, SNAPSHOT_VERSION,
};

/// Errors from reading or writing snapshot files.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Write a snapshot to `path` as a versioned envelope document.
pub async fn save_snapshot(
    path: impl AsRef<Path>,
    snapshot: &AgencySnapshot,
) -> Result<(), PersistError> {
    let envelope = create_envelope(snapshot.clone());
    let json = to_json(&envelope)?;
    fs::write(path, json).await?;
    Ok(())
}

/// Read a snapshot envelope back from `path`.
pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<AgencySnapshot, PersistError> {
    let raw = fs::read_to_string(path).await?;
    let envelope = parse_envelope(&raw)?;
    Ok(envelope.snapshot)
}

/// The header of a stored snapshot, cheap to read for listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPeek {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub campaign: Campaign,
}

/// Read just the campaign header out of a stored snapshot.
pub async fn peek_campaign(path: impl AsRef<Path>) -> Result<SnapshotPeek, PersistError> {
    let raw = fs::read_to_string(path).await?;
    let peek: SnapshotPeek = serde_json::from_str(&raw).map_err(SnapshotError::from)?;
    if peek.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            expected: SNAPSHOT_VERSION,
            found: peek.version,
        }
        .into());
    }
    Ok(peek)
}

/// One discovered snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    /// Path to the file.
    pub path: PathBuf,

    /// Its parsed header.
    pub peek: SnapshotPeek,
}

/// List readable snapshot files in a directory, newest export first.
/// A missing directory reads as empty; files that fail to parse are
/// skipped.
pub async fn list_snapshots(dir: impl AsRef<Path>) -> Result<Vec<SnapshotFile>, PersistError> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut found = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            if let Ok(peek) = peek_campaign(&path).await {
                found.push(SnapshotFile { path, peek });
            }
        }
    }

    found.sort_by(|a, b| b.peek.exported_at.cmp(&a.peek.exported_at));
    Ok(found)
}

/// Where an export for this division lands inside `dir`.
pub fn export_path(dir: impl AsRef<Path>, division_code: &str, at: DateTime<Utc>) -> PathBuf {
    dir.as_ref().join(export_file_name(division_code, at))
}
