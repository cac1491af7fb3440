//! Entity types for the agency data layer.
//!
//! Every type here serializes with the exact field names the snapshot
//! document format uses: camelCase keys, lowercase status strings,
//! kebab-case log kinds. Legacy documents must keep round-tripping, so
//! wire names are pinned even where the Rust names differ.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::new_id;
use crate::repository::Entity;

// ============================================================================
// Campaign
// ============================================================================

/// Campaign lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
    Ended,
}

/// Singleton campaign metadata. Exactly one instance lives in the
/// store; it is never kept in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub division_code: String,
    pub location: String,
    pub status: CampaignStatus,
    pub style_tags: Vec<String>,
    pub content_flags: Vec<String>,
    pub default_rules: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_mission_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_manager: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    pub fn new(name: impl Into<String>, division_code: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            division_code: division_code.into(),
            location: String::new(),
            status: CampaignStatus::Active,
            style_tags: Vec::new(),
            content_flags: Vec::new(),
            default_rules: Vec::new(),
            next_mission_id: None,
            general_manager: None,
            updated_at: Utc::now(),
        }
    }
}

/// A campaign pre-filled with plausible values, handy for demos and
/// tests.
pub fn create_sample_campaign() -> Campaign {
    let mut campaign = Campaign::new("Third Shift", "TRI-13");
    campaign.location = "Crescent Hollow".to_string();
    campaign.style_tags = vec!["corporate".to_string(), "surreal".to_string()];
    campaign.default_rules = vec!["standard onboarding".to_string()];
    campaign
}

// ============================================================================
// Agents
// ============================================================================

/// Agent duty status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Active,
    Resting,
    Retired,
    Dead,
    Pending,
}

/// The nine qualities every agent is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QaKey {
    Focus,
    Deceit,
    Vitality,
    Empathy,
    Initiative,
    Resilience,
    Presence,
    Expertise,
    Mystique,
}

impl QaKey {
    pub fn all() -> [QaKey; 9] {
        [
            QaKey::Focus,
            QaKey::Deceit,
            QaKey::Vitality,
            QaKey::Empathy,
            QaKey::Initiative,
            QaKey::Resilience,
            QaKey::Presence,
            QaKey::Expertise,
            QaKey::Mystique,
        ]
    }
}

/// A single bounded stat pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaStat {
    pub current: i32,
    pub max: i32,
}

impl Default for QaStat {
    fn default() -> Self {
        Self { current: 1, max: 3 }
    }
}

/// Quality profile container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QaProfile {
    pub focus: QaStat,
    pub deceit: QaStat,
    pub vitality: QaStat,
    pub empathy: QaStat,
    pub initiative: QaStat,
    pub resilience: QaStat,
    pub presence: QaStat,
    pub expertise: QaStat,
    pub mystique: QaStat,
}

impl QaProfile {
    pub fn get(&self, key: QaKey) -> QaStat {
        match key {
            QaKey::Focus => self.focus,
            QaKey::Deceit => self.deceit,
            QaKey::Vitality => self.vitality,
            QaKey::Empathy => self.empathy,
            QaKey::Initiative => self.initiative,
            QaKey::Resilience => self.resilience,
            QaKey::Presence => self.presence,
            QaKey::Expertise => self.expertise,
            QaKey::Mystique => self.mystique,
        }
    }

    pub fn set(&mut self, key: QaKey, stat: QaStat) {
        match key {
            QaKey::Focus => self.focus = stat,
            QaKey::Deceit => self.deceit = stat,
            QaKey::Vitality => self.vitality = stat,
            QaKey::Empathy => self.empathy = stat,
            QaKey::Initiative => self.initiative = stat,
            QaKey::Resilience => self.resilience = stat,
            QaKey::Presence => self.presence = stat,
            QaKey::Expertise => self.expertise = stat,
            QaKey::Mystique => self.mystique = stat,
        }
    }
}

/// Claim lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A record of an agent claiming a requisition item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentClaim {
    pub id: String,
    pub item_name: String,
    pub category: String,
    pub reason: String,
    pub claimed_at: DateTime<Utc>,
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requisition_id: Option<String>,
}

/// A field agent.
///
/// `awards` and `reprimands` accumulate across missions. The delta
/// counters collect in-session changes until a settlement folds them
/// into the cumulative totals; deltas never go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub codename: String,
    pub arc_anomaly: String,
    pub arc_reality: String,
    pub arc_role: String,
    pub qa: QaProfile,
    pub awards: i32,
    pub reprimands: i32,
    pub status: AgentStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<AgentClaim>,
    #[serde(default)]
    pub awards_delta: i32,
    #[serde(default)]
    pub reprimands_delta: i32,
}

impl Agent {
    pub fn new(codename: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            codename: codename.into(),
            arc_anomaly: String::new(),
            arc_reality: String::new(),
            arc_role: String::new(),
            qa: QaProfile::default(),
            awards: 0,
            reprimands: 0,
            status: AgentStatus::Active,
            claims: Vec::new(),
            awards_delta: 0,
            reprimands_delta: 0,
        }
    }
}

// ============================================================================
// Missions and logs
// ============================================================================

/// Mission categories. Wire values keep the legacy document strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MissionKind {
    #[serde(rename = "收容")]
    Containment,
    #[serde(rename = "清扫")]
    Cleanup,
    #[serde(rename = "市场破坏")]
    MarketDisruption,
    #[default]
    #[serde(rename = "其他")]
    Other,
}

/// Mission lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    #[default]
    Planning,
    Active,
    Debrief,
    Archived,
}

/// A scheduled or running mission with its running counters.
///
/// `chaos` and `loose_ends` move only through audited adjustments;
/// negative totals are allowed and represent overcorrection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MissionKind,
    pub status: MissionStatus,
    pub chaos: i32,
    pub loose_ends: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reality_requests_failed: Option<i32>,
    pub scheduled_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_objective_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_agents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_summary: Option<String>,
}

impl Mission {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            code: code.into(),
            name: name.into(),
            kind: MissionKind::Other,
            status: MissionStatus::Planning,
            chaos: 0,
            loose_ends: 0,
            reality_requests_failed: None,
            scheduled_date: String::new(),
            optional_objective_hint: None,
            expected_agents: None,
            goals_summary: None,
        }
    }
}

/// Kind tag on a mission log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogKind {
    Log,
    Chaos,
    LooseEnd,
    RealityFailure,
}

/// One immutable record of a counter adjustment or free-form log line.
/// Never edited after creation; removed only when its parent mission
/// is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionLogEntry {
    pub id: String,
    pub mission_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i32>,
}

// ============================================================================
// Anomalies and notes
// ============================================================================

/// Containment state of an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyStatus {
    #[default]
    Active,
    Contained,
    Neutralized,
    Escaped,
}

/// A tracked anomalous entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub id: String,
    pub codename: String,
    pub focus: String,
    pub domain: String,
    pub status: AnomalyStatus,
}

/// A free-form note with creation and edit stamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Requisitions
// ============================================================================

/// Which shop a requisition item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequisitionSource {
    #[default]
    Hq,
    Branch,
    Siphon,
}

/// One labeled price option on a requisition item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub label: String,
    pub cost: f64,
}

/// A purchasable item in one of the three shop categories.
///
/// `order` is derived, not authoritative: after every successful
/// reorder it equals the item's index in the collection. Timestamps
/// are maintained by the store, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    pub id: String,
    pub name: String,
    pub source: RequisitionSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    pub prices: Vec<PriceEntry>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Requisition {
    pub fn new(name: impl Into<String>, source: RequisitionSource) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: name.into(),
            source,
            branch_name: None,
            prices: Vec::new(),
            description: String::new(),
            condition: None,
            purchased_by: None,
            image: None,
            is_new: None,
            starred: None,
            order: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_price(mut self, label: impl Into<String>, cost: f64) -> Self {
        self.prices.push(PriceEntry {
            label: label.into(),
            cost,
        });
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_branch_name(mut self, branch_name: impl Into<String>) -> Self {
        self.branch_name = Some(branch_name.into());
        self
    }
}

// ============================================================================
// Custom tracks
// ============================================================================

/// One checkbox on a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackItem {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

/// A named, colored row of checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTrack {
    pub id: String,
    pub name: String,
    pub color: String,
    pub items: Vec<TrackItem>,
}

// ============================================================================
// Settings and emergency mode
// ============================================================================

/// Optional app settings carried by a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_allow_html: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_read_only_style: Option<bool>,
}

impl Settings {
    /// Fold another settings record in. Fields the incoming record
    /// sets win; unset fields keep their current value.
    pub fn merge(&mut self, incoming: &Settings) {
        if let Some(v) = incoming.notes_allow_html {
            self.notes_allow_html = Some(v);
        }
        if let Some(v) = incoming.dashboard_read_only_style {
            self.dashboard_read_only_style = Some(v);
        }
    }
}

/// What the emergency assistant is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyPermissions {
    pub can_read_dom: bool,
    pub can_write_dom: bool,
    pub can_write_campaign_data: bool,
    pub can_write_settings_data: bool,
    pub allowed_areas: Vec<String>,
}

/// Who authored an emergency chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencySender {
    User,
    Agent,
}

/// One line of emergency chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyMessage {
    pub id: String,
    pub sender: EmergencySender,
    pub text: String,
    pub timestamp: i64,
}

/// Kinds of recorded emergency actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmergencyActionKind {
    SetStyle,
    UpdateText,
    AddElement,
    RemoveElement,
    RunAnimation,
    UpdateData,
    Navigate,
}

/// One recorded emergency action, with enough captured state to undo
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyAction {
    pub id: String,
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: EmergencyActionKind,
    pub selector: String,
    pub payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_state: Option<Value>,
}

/// Connection details for the emergency assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmConfig {
    pub api_url: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Emergency-mode configuration and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyConfig {
    pub is_enabled: bool,
    pub permissions: EmergencyPermissions,
    pub chat_history: Vec<EmergencyMessage>,
    pub action_history: Vec<EmergencyAction>,
    pub llm_config: LlmConfig,
}

// ============================================================================
// Snapshot aggregate
// ============================================================================

/// The full serializable state: the campaign plus every collection.
///
/// The four optional sections distinguish "absent from the source
/// document" from "present but empty"; older documents omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencySnapshot {
    pub campaign: Campaign,
    pub agents: Vec<Agent>,
    pub missions: Vec<Mission>,
    pub anomalies: Vec<Anomaly>,
    pub notes: Vec<Note>,
    pub logs: Vec<MissionLogEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requisitions: Option<Vec<Requisition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<CustomTrack>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<EmergencyConfig>,
}

// ============================================================================
// Repository wiring
// ============================================================================

impl Entity for Agent {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Entity for Mission {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Entity for Anomaly {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Entity for MissionLogEntry {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Entity for Requisition {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Entity for CustomTrack {
    fn id(&self) -> &str {
        &self.id
    }
    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Paused).unwrap(),
            "\"paused\""
        );
        assert_eq!(
            serde_json::to_string(&AgentStatus::Resting).unwrap(),
            "\"resting\""
        );
        assert_eq!(
            serde_json::to_string(&AnomalyStatus::Neutralized).unwrap(),
            "\"neutralized\""
        );
        assert_eq!(
            serde_json::to_string(&MissionStatus::Debrief).unwrap(),
            "\"debrief\""
        );
    }

    #[test]
    fn test_log_kind_kebab_case() {
        assert_eq!(serde_json::to_string(&LogKind::Log).unwrap(), "\"log\"");
        assert_eq!(
            serde_json::to_string(&LogKind::LooseEnd).unwrap(),
            "\"loose-end\""
        );
        assert_eq!(
            serde_json::to_string(&LogKind::RealityFailure).unwrap(),
            "\"reality-failure\""
        );
    }

    #[test]
    fn test_mission_kind_legacy_strings() {
        assert_eq!(
            serde_json::to_string(&MissionKind::Containment).unwrap(),
            "\"收容\""
        );
        assert_eq!(
            serde_json::to_string(&MissionKind::MarketDisruption).unwrap(),
            "\"市场破坏\""
        );
        let parsed: MissionKind = serde_json::from_str("\"清扫\"").unwrap();
        assert_eq!(parsed, MissionKind::Cleanup);
    }

    #[test]
    fn test_campaign_camel_case_keys() {
        let campaign = Campaign::new("Test", "D-01");
        let value = serde_json::to_value(&campaign).unwrap();
        assert!(value.get("divisionCode").is_some());
        assert!(value.get("styleTags").is_some());
        assert!(value.get("updatedAt").is_some());
        // unset optionals stay off the wire
        assert!(value.get("nextMissionId").is_none());
        assert!(value.get("generalManager").is_none());
    }

    #[test]
    fn test_mission_type_field_name() {
        let mission = Mission::new("M-01", "Opening Shift");
        let value = serde_json::to_value(&mission).unwrap();
        assert_eq!(value["type"], "其他");
        assert_eq!(value["looseEnds"], 0);
        assert!(value.get("realityRequestsFailed").is_none());
    }

    #[test]
    fn test_agent_delta_defaults() {
        let json = r#"{
            "id": "a1",
            "codename": "LATCH",
            "arcAnomaly": "", "arcReality": "", "arcRole": "",
            "qa": {
                "focus": {"current": 1, "max": 3},
                "deceit": {"current": 1, "max": 3},
                "vitality": {"current": 1, "max": 3},
                "empathy": {"current": 1, "max": 3},
                "initiative": {"current": 1, "max": 3},
                "resilience": {"current": 1, "max": 3},
                "presence": {"current": 1, "max": 3},
                "expertise": {"current": 1, "max": 3},
                "mystique": {"current": 1, "max": 3}
            },
            "awards": 2, "reprimands": 0,
            "status": "active"
        }"#;
        let agent: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(agent.awards_delta, 0);
        assert_eq!(agent.reprimands_delta, 0);
        assert!(agent.claims.is_empty());
    }

    #[test]
    fn test_qa_profile_get_set() {
        let mut qa = QaProfile::default();
        assert_eq!(qa.get(QaKey::Mystique), QaStat { current: 1, max: 3 });
        qa.set(QaKey::Focus, QaStat { current: 3, max: 3 });
        assert_eq!(qa.get(QaKey::Focus).current, 3);
        assert_eq!(QaKey::all().len(), 9);
    }

    #[test]
    fn test_settings_merge() {
        let mut live = Settings {
            notes_allow_html: Some(true),
            dashboard_read_only_style: None,
        };
        live.merge(&Settings {
            notes_allow_html: None,
            dashboard_read_only_style: Some(true),
        });
        assert_eq!(live.notes_allow_html, Some(true));
        assert_eq!(live.dashboard_read_only_style, Some(true));
    }

    #[test]
    fn test_emergency_action_kind_casing() {
        assert_eq!(
            serde_json::to_string(&EmergencyActionKind::SetStyle).unwrap(),
            "\"setStyle\""
        );
        assert_eq!(
            serde_json::to_string(&EmergencyActionKind::RemoveElement).unwrap(),
            "\"removeElement\""
        );
    }

    #[test]
    fn test_requisition_builder() {
        let item = Requisition::new("Convenience Paperclip", RequisitionSource::Hq)
            .with_price("Lease", 1.0)
            .with_price("Purchase", 15.0)
            .with_description("Stores any number of documents.");
        assert_eq!(item.prices.len(), 2);
        assert_eq!(item.prices[1].cost, 15.0);
        assert!(!item.id.is_empty());
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["source"], "hq");
        assert!(value.get("branchName").is_none());
    }
}
