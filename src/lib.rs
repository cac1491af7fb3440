//! Local-first data layer for an agency campaign manager.
//!
//! This crate provides:
//! - Typed entity collections behind a uniform CRUD lifecycle engine
//! - Audited mission counters, agent commendation deltas, and tracks
//! - A versioned snapshot format with export/import reconciliation
//! - Async snapshot persistence on the local filesystem
//!
//! # Quick Start
//!
//! ```ignore
//! use agency_core::{apply_snapshot, requires_mode_choice, AgencyStore, Campaign, ImportMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = AgencyStore::new(Campaign::new("Third Shift", "TRI-13"));
//!     agency_core::catalog::seed_requisitions(&mut store);
//!
//!     let out = agency_core::persist::export_path(
//!         "saves",
//!         &store.campaign().division_code,
//!         chrono::Utc::now(),
//!     );
//!     agency_core::persist::save_snapshot(&out, &store.snapshot()).await?;
//!
//!     let incoming = agency_core::persist::load_snapshot(&out).await?;
//!     let mode = if requires_mode_choice(&incoming) {
//!         ImportMode::Append
//!     } else {
//!         ImportMode::Overwrite
//!     };
//!     apply_snapshot(&mut store, incoming, mode);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod ids;
pub mod model;
pub mod persist;
pub mod reconcile;
pub mod repository;
pub mod snapshot;
pub mod store;
pub mod weather;
pub mod windows;

// Primary public API
pub use model::{
    create_sample_campaign, Agent, AgencySnapshot, Anomaly, Campaign, CustomTrack, Mission,
    MissionLogEntry, Note, Requisition, Settings,
};
pub use persist::{load_snapshot, save_snapshot, PersistError};
pub use reconcile::{apply_snapshot, requires_mode_choice, ImportMode};
pub use repository::{Entity, LifecyclePolicy, Repository};
pub use snapshot::{create_envelope, parse_envelope, SnapshotEnvelope, SnapshotError};
pub use store::{AgencyStore, DeltaKind, MissionCounter};
pub use weather::{rule_for_count, WeatherRule};
pub use windows::WindowStack;
