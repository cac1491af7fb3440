//! Versioned snapshot envelope: the export/import document format.
//!
//! An envelope is the snapshot plus a version marker and an export
//! stamp at the top level. Parsing is all-or-nothing; a document that
//! fails shape or version checks leaves nothing behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::AgencySnapshot;

/// Current envelope format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from envelope encoding and parsing.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported snapshot version: expected {expected}, found {found}")]
    UnsupportedVersion { expected: u32, found: u32 },
}

/// A snapshot wrapped with its format version and export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEnvelope {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: AgencySnapshot,
}

/// Wrap a snapshot for export, stamping version and time.
pub fn create_envelope(snapshot: AgencySnapshot) -> SnapshotEnvelope {
    SnapshotEnvelope {
        version: SNAPSHOT_VERSION,
        exported_at: Utc::now(),
        snapshot,
    }
}

/// Encode an envelope as pretty-printed JSON.
pub fn to_json(envelope: &SnapshotEnvelope) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Decode and validate an envelope document.
///
/// Optional sections absent from the document parse to `None`. A
/// missing campaign, a non-array collection, or an unknown version is
/// an error.
pub fn parse_envelope(raw: &str) -> Result<SnapshotEnvelope, SnapshotError> {
    let envelope: SnapshotEnvelope = serde_json::from_str(raw)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            expected: SNAPSHOT_VERSION,
            found: envelope.version,
        });
    }
    Ok(envelope)
}

/// File name for an exported snapshot: the sanitized division code
/// plus a timestamp.
pub fn export_file_name(division_code: &str, at: DateTime<Utc>) -> String {
    let sanitized: String = division_code
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("agency-{}-{}.json", sanitized, at.format("%Y%m%d-%H%M%S"))
}
