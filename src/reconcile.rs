//! Import reconciliation: folding a parsed snapshot into live state.
//!
//! Requisitions are the only collection a user may have grown locally
//! between exports, so they are the only collection with a mode
//! choice. Everything else is campaign-level data and is replaced
//! wholesale on every import.

use serde::{Deserialize, Serialize};

use crate::model::AgencySnapshot;
use crate::store::AgencyStore;

/// How the incoming requisition collection meets the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Incoming requisitions replace the live collection as-is.
    Overwrite,
    /// Incoming requisitions are re-created after the live ones; live
    /// records are never removed or reordered.
    Append,
    /// Live requisitions stay exactly as they are.
    Skip,
}

/// Whether an import needs the user to pick a mode. Only a snapshot
/// that actually carries requisitions poses the question; otherwise
/// callers should proceed directly with [`ImportMode::Overwrite`].
pub fn requires_mode_choice(incoming: &AgencySnapshot) -> bool {
    incoming
        .requisitions
        .as_ref()
        .is_some_and(|items| !items.is_empty())
}

/// Fold an incoming snapshot into the store under the chosen mode.
///
/// Regardless of mode: the campaign record is replaced wholesale, the
/// required collections are replaced wholesale, tracks are replaced
/// (cleared when the snapshot lacks them), settings merge field by
/// field, and emergency configuration is replaced only when present.
pub fn apply_snapshot(store: &mut AgencyStore, incoming: AgencySnapshot, mode: ImportMode) {
    let AgencySnapshot {
        campaign,
        agents,
        missions,
        anomalies,
        notes,
        logs,
        requisitions,
        tracks,
        settings,
        emergency,
    } = incoming;

    store.replace_campaign(campaign);
    store.replace_agents(agents);
    store.replace_missions(missions);
    store.replace_anomalies(anomalies);
    store.replace_notes(notes);
    store.replace_logs(logs);
    store.replace_tracks(tracks.unwrap_or_default());
    if let Some(settings) = settings {
        store.update_settings(settings);
    }
    if let Some(emergency) = emergency {
        store.set_emergency(Some(emergency));
    }

    match mode {
        ImportMode::Overwrite => {
            store.replace_requisitions(requisitions.unwrap_or_default());
        }
        ImportMode::Append => {
            if let Some(items) = requisitions {
                store.append_requisitions(items);
            }
        }
        ImportMode::Skip => {}
    }
}
