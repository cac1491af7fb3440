//! The live campaign state: one campaign record plus every entity
//! collection, with the derived operations layered on top of the
//! repositories.
//!
//! All mutation goes through the methods here. Counter adjustments and
//! their audit entries land together or not at all; an unknown id is a
//! silent no-op everywhere, matching the repository contract.

use chrono::Utc;

use crate::ids::new_id;
use crate::model::{
    Agent, AgencySnapshot, Anomaly, Campaign, CustomTrack, EmergencyConfig, LogKind, Mission,
    MissionLogEntry, MissionStatus, Note, Requisition, Settings, TrackItem,
};
use crate::repository::{LifecyclePolicy, Repository};
use crate::weather::{rule_for_count, WeatherRule};

/// Name given to a track created without one.
pub const DEFAULT_TRACK_NAME: &str = "Untitled track";
/// Color given to a track created without one.
pub const DEFAULT_TRACK_COLOR: &str = "#22c55e";
/// A track always keeps at least one item.
pub const MIN_TRACK_ITEMS: usize = 1;
/// Resizing never grows a track past this.
pub const MAX_TRACK_ITEMS: usize = 32;

// ============================================================================
// Policies and operation tags
// ============================================================================

/// Stamps both requisition timestamps on insert, whatever the payload
/// carried.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequisitionPolicy;

impl LifecyclePolicy<Requisition> for RequisitionPolicy {
    fn on_create(&self, mut item: Requisition) -> Requisition {
        let now = Utc::now();
        item.created_at = now;
        item.updated_at = now;
        item
    }
}

/// Which per-agent session counter an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaKind {
    Awards,
    Reprimands,
}

/// Which mission counter an audited adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionCounter {
    Chaos,
    LooseEnds,
    RealityRequestsFailed,
}

impl MissionCounter {
    fn log_kind(self) -> LogKind {
        match self {
            MissionCounter::Chaos => LogKind::Chaos,
            MissionCounter::LooseEnds => LogKind::LooseEnd,
            MissionCounter::RealityRequestsFailed => LogKind::RealityFailure,
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// Owns every collection. Single-threaded by construction; callers
/// hold `&mut` for writes and observe only settled states.
#[derive(Debug, Clone)]
pub struct AgencyStore {
    campaign: Campaign,
    agents: Repository<Agent>,
    missions: Repository<Mission>,
    anomalies: Repository<Anomaly>,
    notes: Repository<Note>,
    logs: Repository<MissionLogEntry>,
    requisitions: Repository<Requisition, RequisitionPolicy>,
    tracks: Repository<CustomTrack>,
    settings: Settings,
    emergency: Option<EmergencyConfig>,
}

impl AgencyStore {
    pub fn new(campaign: Campaign) -> Self {
        Self {
            campaign,
            agents: Repository::new(),
            missions: Repository::new(),
            anomalies: Repository::new(),
            notes: Repository::new(),
            logs: Repository::new(),
            requisitions: Repository::with_policy(RequisitionPolicy),
            tracks: Repository::new(),
            settings: Settings::default(),
            emergency: None,
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn agents(&self) -> &[Agent] {
        self.agents.items()
    }

    pub fn missions(&self) -> &[Mission] {
        self.missions.items()
    }

    pub fn anomalies(&self) -> &[Anomaly] {
        self.anomalies.items()
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.items()
    }

    pub fn logs(&self) -> &[MissionLogEntry] {
        self.logs.items()
    }

    pub fn requisitions(&self) -> &[Requisition] {
        self.requisitions.items()
    }

    pub fn tracks(&self) -> &[CustomTrack] {
        self.tracks.items()
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn emergency(&self) -> Option<&EmergencyConfig> {
        self.emergency.as_ref()
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn mission(&self, id: &str) -> Option<&Mission> {
        self.missions.get(id)
    }

    pub fn anomaly(&self, id: &str) -> Option<&Anomaly> {
        self.anomalies.get(id)
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn requisition(&self, id: &str) -> Option<&Requisition> {
        self.requisitions.get(id)
    }

    pub fn track(&self, id: &str) -> Option<&CustomTrack> {
        self.tracks.get(id)
    }

    // ------------------------------------------------------------------------
    // Campaign
    // ------------------------------------------------------------------------

    /// Edit the campaign record; refreshes its edit stamp.
    pub fn update_campaign(&mut self, apply: impl FnOnce(&mut Campaign)) {
        apply(&mut self.campaign);
        self.campaign.updated_at = Utc::now();
    }

    /// Swap the campaign record in as-is, stamps included.
    pub fn replace_campaign(&mut self, campaign: Campaign) {
        self.campaign = campaign;
    }

    // ------------------------------------------------------------------------
    // Agents
    // ------------------------------------------------------------------------

    pub fn create_agent(&mut self, payload: Agent) -> Agent {
        self.agents.create(payload)
    }

    pub fn update_agent(&mut self, id: &str, apply: impl FnOnce(&mut Agent)) -> Option<Agent> {
        self.agents.update(id, apply)
    }

    pub fn delete_agent(&mut self, id: &str) -> Option<Agent> {
        self.agents.remove(id)
    }

    /// Nudge an agent's pending award or reprimand counter. The
    /// pending counters never go below zero.
    pub fn adjust_agent_delta(&mut self, id: &str, kind: DeltaKind, delta: i32) -> Option<Agent> {
        self.agents.update(id, |agent| match kind {
            DeltaKind::Awards => agent.awards_delta = (agent.awards_delta + delta).max(0),
            DeltaKind::Reprimands => {
                agent.reprimands_delta = (agent.reprimands_delta + delta).max(0)
            }
        })
    }

    /// Fold every agent's pending counters into the cumulative totals
    /// and reset them. Safe to call again; a second pass moves zeros.
    pub fn settle_deltas(&mut self) {
        for agent in self.agents.items_mut() {
            agent.awards += agent.awards_delta;
            agent.reprimands += agent.reprimands_delta;
            agent.awards_delta = 0;
            agent.reprimands_delta = 0;
        }
    }

    // ------------------------------------------------------------------------
    // Missions and logs
    // ------------------------------------------------------------------------

    pub fn create_mission(&mut self, payload: Mission) -> Mission {
        self.missions.create(payload)
    }

    pub fn update_mission(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut Mission),
    ) -> Option<Mission> {
        self.missions.update(id, apply)
    }

    /// Remove a mission and every log entry that referenced it.
    pub fn delete_mission(&mut self, id: &str) -> Option<Mission> {
        let removed = self.missions.remove(id);
        self.logs.items_mut().retain(|entry| entry.mission_id != id);
        removed
    }

    /// Move a mission counter and record the change in the log, as one
    /// step. An unknown mission id changes nothing and logs nothing.
    pub fn adjust_mission_counter(
        &mut self,
        mission_id: &str,
        counter: MissionCounter,
        delta: i32,
        note: impl Into<String>,
    ) -> Option<Mission> {
        let updated = self.missions.update(mission_id, |mission| match counter {
            MissionCounter::Chaos => mission.chaos += delta,
            MissionCounter::LooseEnds => mission.loose_ends += delta,
            MissionCounter::RealityRequestsFailed => {
                mission.reality_requests_failed =
                    Some(mission.reality_requests_failed.unwrap_or(0) + delta);
            }
        })?;
        self.logs.create(MissionLogEntry {
            id: String::new(),
            mission_id: mission_id.to_string(),
            timestamp: Utc::now(),
            kind: counter.log_kind(),
            detail: note.into(),
            delta: Some(delta),
        });
        Some(updated)
    }

    pub fn adjust_chaos(
        &mut self,
        mission_id: &str,
        delta: i32,
        note: impl Into<String>,
    ) -> Option<Mission> {
        self.adjust_mission_counter(mission_id, MissionCounter::Chaos, delta, note)
    }

    pub fn adjust_loose_ends(
        &mut self,
        mission_id: &str,
        delta: i32,
        note: impl Into<String>,
    ) -> Option<Mission> {
        self.adjust_mission_counter(mission_id, MissionCounter::LooseEnds, delta, note)
    }

    pub fn adjust_reality_failures(
        &mut self,
        mission_id: &str,
        delta: i32,
        note: impl Into<String>,
    ) -> Option<Mission> {
        self.adjust_mission_counter(mission_id, MissionCounter::RealityRequestsFailed, delta, note)
    }

    /// Record a free-form log line against an existing mission.
    pub fn append_log(
        &mut self,
        mission_id: &str,
        detail: impl Into<String>,
    ) -> Option<MissionLogEntry> {
        self.missions.get(mission_id)?;
        Some(self.logs.create(MissionLogEntry {
            id: String::new(),
            mission_id: mission_id.to_string(),
            timestamp: Utc::now(),
            kind: LogKind::Log,
            detail: detail.into(),
            delta: None,
        }))
    }

    // ------------------------------------------------------------------------
    // Anomalies
    // ------------------------------------------------------------------------

    pub fn create_anomaly(&mut self, payload: Anomaly) -> Anomaly {
        self.anomalies.create(payload)
    }

    pub fn update_anomaly(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut Anomaly),
    ) -> Option<Anomaly> {
        self.anomalies.update(id, apply)
    }

    pub fn delete_anomaly(&mut self, id: &str) -> Option<Anomaly> {
        self.anomalies.remove(id)
    }

    // ------------------------------------------------------------------------
    // Notes
    // ------------------------------------------------------------------------

    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
    ) -> Note {
        let now = Utc::now();
        self.notes.create(Note {
            id: String::new(),
            title: title.into(),
            summary: summary.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Insert a fully-formed note, keeping its stamps.
    pub fn add_note(&mut self, note: Note) -> Note {
        self.notes.create(note)
    }

    /// Edit a note; refreshes its edit stamp.
    pub fn update_note(&mut self, id: &str, apply: impl FnOnce(&mut Note)) -> Option<Note> {
        self.notes.update(id, |note| {
            apply(note);
            note.updated_at = Utc::now();
        })
    }

    pub fn delete_note(&mut self, id: &str) -> Option<Note> {
        self.notes.remove(id)
    }

    // ------------------------------------------------------------------------
    // Requisitions
    // ------------------------------------------------------------------------

    pub fn create_requisition(&mut self, payload: Requisition) -> Requisition {
        self.requisitions.create(payload)
    }

    /// Edit a requisition; refreshes its edit stamp.
    pub fn update_requisition(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut Requisition),
    ) -> Option<Requisition> {
        self.requisitions.update(id, |item| {
            apply(item);
            item.updated_at = Utc::now();
        })
    }

    pub fn delete_requisition(&mut self, id: &str) -> Option<Requisition> {
        self.requisitions.remove(id)
    }

    /// Flip the star flag without touching the edit stamp.
    pub fn toggle_star(&mut self, id: &str) -> Option<Requisition> {
        self.requisitions.update(id, |item| {
            item.starred = Some(!item.starred.unwrap_or(false));
        })
    }

    /// Drag one requisition onto another within the same shop
    /// category. On success every item's `order` field is rewritten to
    /// its collection index. Unknown ids and cross-category drags
    /// change nothing.
    pub fn reorder_requisitions(&mut self, source_id: &str, target_id: &str) -> bool {
        let items = self.requisitions.items_mut();
        let source_index = match items.iter().position(|item| item.id == source_id) {
            Some(index) => index,
            None => return false,
        };
        let target_index = match items.iter().position(|item| item.id == target_id) {
            Some(index) => index,
            None => return false,
        };
        if items[source_index].source != items[target_index].source {
            return false;
        }
        let moved = items.remove(source_index);
        items.insert(target_index, moved);
        for (index, item) in items.iter_mut().enumerate() {
            item.order = Some(index);
        }
        true
    }

    /// Re-create incoming requisitions after the live ones. Each record
    /// gets a fresh id and fresh stamps; carried ordering hints are
    /// dropped.
    pub fn append_requisitions(&mut self, items: Vec<Requisition>) {
        for mut item in items {
            item.id = String::new();
            item.order = None;
            self.requisitions.create(item);
        }
    }

    /// Swap the whole requisition collection in as-is, ids and stamps
    /// included.
    pub fn replace_requisitions(&mut self, items: Vec<Requisition>) {
        self.requisitions.replace_all(items);
    }

    // ------------------------------------------------------------------------
    // Tracks
    // ------------------------------------------------------------------------

    /// Create a track with `item_count` unchecked items (at least
    /// one). Empty name or color falls back to the defaults.
    pub fn create_track(&mut self, name: &str, color: &str, item_count: usize) -> CustomTrack {
        let count = item_count.max(MIN_TRACK_ITEMS);
        let items = (0..count)
            .map(|index| TrackItem {
                id: new_id(),
                label: format!("Node {}", index + 1),
                checked: false,
            })
            .collect();
        self.tracks.create(CustomTrack {
            id: String::new(),
            name: if name.is_empty() {
                DEFAULT_TRACK_NAME.to_string()
            } else {
                name.to_string()
            },
            color: if color.is_empty() {
                DEFAULT_TRACK_COLOR.to_string()
            } else {
                color.to_string()
            },
            items,
        })
    }

    /// Grow or shrink a track to `next_count` items, clamped to
    /// `MIN_TRACK_ITEMS..=MAX_TRACK_ITEMS`. Growth appends fresh
    /// unchecked items with labels continuing the numbering; shrinking
    /// trims from the end.
    pub fn resize_track(&mut self, id: &str, next_count: usize) -> Option<CustomTrack> {
        self.tracks.update(id, |track| {
            let count = next_count.clamp(MIN_TRACK_ITEMS, MAX_TRACK_ITEMS);
            if count > track.items.len() {
                for index in track.items.len()..count {
                    track.items.push(TrackItem {
                        id: new_id(),
                        label: format!("Node {}", index + 1),
                        checked: false,
                    });
                }
            } else {
                track.items.truncate(count);
            }
        })
    }

    pub fn update_track_meta(
        &mut self,
        id: &str,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Option<CustomTrack> {
        self.tracks.update(id, |track| {
            if let Some(name) = name {
                track.name = name.to_string();
            }
            if let Some(color) = color {
                track.color = color.to_string();
            }
        })
    }

    pub fn update_track_item(
        &mut self,
        track_id: &str,
        item_id: &str,
        apply: impl FnOnce(&mut TrackItem),
    ) -> Option<CustomTrack> {
        self.tracks.update(track_id, |track| {
            if let Some(item) = track.items.iter_mut().find(|item| item.id == item_id) {
                apply(item);
            }
        })
    }

    pub fn delete_track(&mut self, id: &str) -> Option<CustomTrack> {
        self.tracks.remove(id)
    }

    // ------------------------------------------------------------------------
    // Settings and emergency mode
    // ------------------------------------------------------------------------

    /// Fold a settings patch in; fields the patch leaves unset keep
    /// their current value.
    pub fn update_settings(&mut self, patch: Settings) {
        self.settings.merge(&patch);
    }

    pub fn set_emergency(&mut self, emergency: Option<EmergencyConfig>) {
        self.emergency = emergency;
    }

    // ------------------------------------------------------------------------
    // Bulk replacement
    // ------------------------------------------------------------------------

    pub fn replace_agents(&mut self, agents: Vec<Agent>) {
        self.agents.replace_all(agents);
    }

    pub fn replace_missions(&mut self, missions: Vec<Mission>) {
        self.missions.replace_all(missions);
    }

    pub fn replace_anomalies(&mut self, anomalies: Vec<Anomaly>) {
        self.anomalies.replace_all(anomalies);
    }

    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes.replace_all(notes);
    }

    pub fn replace_logs(&mut self, logs: Vec<MissionLogEntry>) {
        self.logs.replace_all(logs);
    }

    pub fn replace_tracks(&mut self, tracks: Vec<CustomTrack>) {
        self.tracks.replace_all(tracks);
    }

    // ------------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------------

    /// The mission the dashboard treats as current: the first active
    /// one, else the campaign's designated next mission, else the
    /// first that is not archived.
    pub fn active_mission(&self) -> Option<&Mission> {
        if let Some(mission) = self
            .missions
            .iter()
            .find(|m| m.status == MissionStatus::Active)
        {
            return Some(mission);
        }
        if let Some(next_id) = &self.campaign.next_mission_id {
            if let Some(mission) = self.missions.get(next_id) {
                return Some(mission);
            }
        }
        self.missions
            .iter()
            .find(|m| m.status != MissionStatus::Archived)
    }

    pub fn logs_for_mission(&self, mission_id: &str) -> Vec<&MissionLogEntry> {
        self.logs
            .iter()
            .filter(|entry| entry.mission_id == mission_id)
            .collect()
    }

    /// Loose ends summed across every mission.
    pub fn total_loose_ends(&self) -> i32 {
        self.missions.iter().map(|m| m.loose_ends).sum()
    }

    /// The weather tier the current loose end total falls in.
    pub fn weather_rule(&self) -> &'static WeatherRule {
        rule_for_count(self.total_loose_ends().max(0) as u32)
    }

    // ------------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------------

    /// Copy the full state out. Every optional section is populated;
    /// exports never drop live data.
    pub fn snapshot(&self) -> AgencySnapshot {
        AgencySnapshot {
            campaign: self.campaign.clone(),
            agents: self.agents.items().to_vec(),
            missions: self.missions.items().to_vec(),
            anomalies: self.anomalies.items().to_vec(),
            notes: self.notes.items().to_vec(),
            logs: self.logs.items().to_vec(),
            requisitions: Some(self.requisitions.items().to_vec()),
            tracks: Some(self.tracks.items().to_vec()),
            settings: Some(self.settings),
            emergency: self.emergency.clone(),
        }
    }

    /// Load a snapshot wholesale, as at startup. Sections the snapshot
    /// lacks reset to empty or default.
    pub fn restore(&mut self, snapshot: AgencySnapshot) {
        self.campaign = snapshot.campaign;
        self.agents.replace_all(snapshot.agents);
        self.missions.replace_all(snapshot.missions);
        self.anomalies.replace_all(snapshot.anomalies);
        self.notes.replace_all(snapshot.notes);
        self.logs.replace_all(snapshot.logs);
        self.requisitions
            .replace_all(snapshot.requisitions.unwrap_or_default());
        self.tracks.replace_all(snapshot.tracks.unwrap_or_default());
        self.settings = snapshot.settings.unwrap_or_default();
        self.emergency = snapshot.emergency;
    }
}

impl Default for AgencyStore {
    fn default() -> Self {
        Self::new(Campaign::new("New Campaign", "DIV-00"))
    }
}
