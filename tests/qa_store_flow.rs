//! QA tests for the live store: CRUD flows, audited counters, and the
//! derived operations on top of them.
//!
//! These tests verify that:
//! - Creation honors caller ids and generates the rest
//! - Counter adjustments and their audit entries land together
//! - Settlement, reordering, and track resizing hold their invariants
//!
//! Run with: `cargo test --test qa_store_flow`

use agency_core::model::{
    Agent, Campaign, LogKind, Mission, MissionStatus, Requisition, RequisitionSource,
};
use agency_core::store::{AgencyStore, DeltaKind, MAX_TRACK_ITEMS};

// =============================================================================
// TEST 1: Creation and id handling
// =============================================================================

#[test]
fn test_create_honors_caller_ids() {
    let mut store = AgencyStore::default();

    let mut preset = Agent::new("LATCH");
    preset.id = "agent-7".to_string();
    let created = store.create_agent(preset);
    assert_eq!(created.id, "agent-7", "caller-supplied id should survive");

    let mut blank = Agent::new("VISTA");
    blank.id = String::new();
    let created = store.create_agent(blank);
    assert!(!created.id.is_empty(), "blank id should be generated");
    assert_ne!(created.id, "agent-7");
    assert_eq!(store.agents().len(), 2);
}

#[test]
fn test_update_cannot_change_id() {
    let mut store = AgencyStore::default();
    let agent = store.create_agent(Agent::new("LATCH"));

    let updated = store
        .update_agent(&agent.id, |a| {
            a.id = "hijacked".to_string();
            a.codename = "REKEYED".to_string();
        })
        .expect("agent exists");

    assert_eq!(updated.id, agent.id, "record id is immutable under update");
    assert_eq!(updated.codename, "REKEYED");
    assert!(store.agent("hijacked").is_none());
}

#[test]
fn test_unknown_ids_are_quiet_no_ops() {
    let mut store = AgencyStore::default();
    let agent = store.create_agent(Agent::new("LATCH"));

    assert!(store.update_agent("ghost", |a| a.awards = 99).is_none());
    assert!(store.delete_agent("ghost").is_none());
    assert_eq!(store.agents().len(), 1);
    assert_eq!(
        store.agent(&agent.id).expect("agent exists").awards,
        0,
        "misses must not touch other records"
    );
}

// =============================================================================
// TEST 2: Audited mission counters
// =============================================================================

#[test]
fn test_adjustments_audit_as_one_transaction() {
    let mut store = AgencyStore::default();
    let mission = store.create_mission(Mission::new("M-01", "Opening Shift"));

    store.adjust_chaos(&mission.id, 2, "surge").expect("mission exists");
    store
        .adjust_loose_ends(&mission.id, 1, "witness")
        .expect("mission exists");
    store
        .adjust_reality_failures(&mission.id, 1, "request denied")
        .expect("mission exists");

    let current = store.mission(&mission.id).expect("mission exists");
    assert_eq!(current.chaos, 2);
    assert_eq!(current.loose_ends, 1);
    assert_eq!(current.reality_requests_failed, Some(1));

    let logs = store.logs_for_mission(&mission.id);
    assert_eq!(logs.len(), 3, "exactly one audit entry per adjustment");
    assert_eq!(logs[0].kind, LogKind::Chaos);
    assert_eq!(logs[0].delta, Some(2));
    assert_eq!(logs[1].kind, LogKind::LooseEnd);
    assert_eq!(logs[1].detail, "witness");
    assert_eq!(logs[2].kind, LogKind::RealityFailure);

    // Unknown mission: no counter moves and no audit entry.
    assert!(store.adjust_chaos("ghost", 5, "nothing").is_none());
    assert_eq!(store.logs().len(), 3);
}

#[test]
fn test_counters_may_go_negative() {
    let mut store = AgencyStore::default();
    let mission = store.create_mission(Mission::new("M-01", "Opening Shift"));

    store
        .adjust_chaos(&mission.id, -3, "overcorrection")
        .expect("mission exists");
    assert_eq!(store.mission(&mission.id).expect("mission exists").chaos, -3);
}

#[test]
fn test_deleting_a_mission_cascades_to_its_logs() {
    let mut store = AgencyStore::default();
    let doomed = store.create_mission(Mission::new("M-01", "Doomed"));
    let keeper = store.create_mission(Mission::new("M-02", "Keeper"));

    store.adjust_chaos(&doomed.id, 1, "a").expect("mission exists");
    store.adjust_chaos(&doomed.id, 1, "b").expect("mission exists");
    store.adjust_chaos(&keeper.id, 1, "c").expect("mission exists");

    store.delete_mission(&doomed.id).expect("mission exists");

    assert_eq!(store.logs().len(), 1);
    assert!(store.logs_for_mission(&doomed.id).is_empty());
    assert_eq!(store.logs_for_mission(&keeper.id).len(), 1);
}

// =============================================================================
// TEST 3: Agent commendation deltas
// =============================================================================

#[test]
fn test_delta_adjustment_clamps_at_zero() {
    let mut store = AgencyStore::default();
    let agent = store.create_agent(Agent::new("LATCH"));

    store
        .adjust_agent_delta(&agent.id, DeltaKind::Reprimands, 2)
        .expect("agent exists");
    let clamped = store
        .adjust_agent_delta(&agent.id, DeltaKind::Reprimands, -10)
        .expect("agent exists");
    assert_eq!(clamped.reprimands_delta, 0, "pending counters floor at zero");
}

#[test]
fn test_settlement_is_bulk_and_idempotent() {
    let mut store = AgencyStore::default();
    let first = store.create_agent(Agent::new("LATCH"));
    let second = store.create_agent(Agent::new("VISTA"));

    store
        .adjust_agent_delta(&first.id, DeltaKind::Awards, 2)
        .expect("agent exists");
    store
        .adjust_agent_delta(&second.id, DeltaKind::Reprimands, 1)
        .expect("agent exists");

    store.settle_deltas();

    let first_settled = store.agent(&first.id).expect("agent exists");
    let second_settled = store.agent(&second.id).expect("agent exists");
    assert_eq!(first_settled.awards, 2);
    assert_eq!(first_settled.awards_delta, 0);
    assert_eq!(second_settled.reprimands, 1);
    assert_eq!(second_settled.reprimands_delta, 0);

    // A second settlement moves nothing.
    store.settle_deltas();
    assert_eq!(store.agent(&first.id).expect("agent exists").awards, 2);
    assert_eq!(store.agent(&second.id).expect("agent exists").reprimands, 1);
}

// =============================================================================
// TEST 4: Requisition reordering
// =============================================================================

fn seeded_requisitions(store: &mut AgencyStore) -> Vec<String> {
    let names = [
        ("Mug", RequisitionSource::Hq),
        ("Paperclip", RequisitionSource::Hq),
        ("Locker", RequisitionSource::Hq),
        ("Awakening", RequisitionSource::Siphon),
    ];
    names
        .into_iter()
        .map(|(name, source)| {
            store
                .create_requisition(Requisition::new(name, source))
                .id
        })
        .collect()
}

#[test]
fn test_reorder_rewrites_every_order_field() {
    let mut store = AgencyStore::default();
    let ids = seeded_requisitions(&mut store);

    // Drag the first HQ item onto the third.
    assert!(store.reorder_requisitions(&ids[0], &ids[2]));

    let names: Vec<&str> = store
        .requisitions()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, ["Paperclip", "Locker", "Mug", "Awakening"]);

    for (index, item) in store.requisitions().iter().enumerate() {
        assert_eq!(
            item.order,
            Some(index),
            "order must equal position after reorder"
        );
    }
}

#[test]
fn test_reorder_rejects_cross_category_drags() {
    let mut store = AgencyStore::default();
    let ids = seeded_requisitions(&mut store);
    let before = store.requisitions().to_vec();

    assert!(!store.reorder_requisitions(&ids[0], &ids[3]), "hq onto siphon");
    assert!(!store.reorder_requisitions(&ids[0], "ghost"), "unknown target");
    assert!(!store.reorder_requisitions("ghost", &ids[0]), "unknown source");
    assert_eq!(store.requisitions(), before.as_slice(), "rejections change nothing");
}

#[test]
fn test_star_toggle_skips_edit_stamp_but_updates_do_not() {
    let mut store = AgencyStore::default();
    let item = store.create_requisition(Requisition::new("Mug", RequisitionSource::Hq));
    let stamp = store.requisition(&item.id).expect("item exists").updated_at;

    let starred = store.toggle_star(&item.id).expect("item exists");
    assert_eq!(starred.starred, Some(true));
    assert_eq!(starred.updated_at, stamp, "starring is not an edit");

    // Outwait coarse clocks before checking the stamp moved.
    std::thread::sleep(std::time::Duration::from_millis(2));
    let renamed = store
        .update_requisition(&item.id, |r| r.name = "Commemorative Mug".to_string())
        .expect("item exists");
    assert!(renamed.updated_at > stamp, "edits refresh the stamp");
}

// =============================================================================
// TEST 5: Tracks
// =============================================================================

#[test]
fn test_track_resize_clamps_to_bounds() {
    let mut store = AgencyStore::default();
    let track = store.create_track("Containment", "#f97316", 3);

    let grown = store
        .resize_track(&track.id, MAX_TRACK_ITEMS + 10)
        .expect("track exists");
    assert_eq!(grown.items.len(), MAX_TRACK_ITEMS);

    let shrunk = store.resize_track(&track.id, 0).expect("track exists");
    assert_eq!(shrunk.items.len(), 1);
}

#[test]
fn test_track_shrink_preserves_leading_items() {
    let mut store = AgencyStore::default();
    let track = store.create_track("Ritual", "#22c55e", 4);

    store
        .update_track_item(&track.id, &track.items[1].id, |item| item.checked = true)
        .expect("track exists");
    let shrunk = store.resize_track(&track.id, 2).expect("track exists");

    assert_eq!(shrunk.items.len(), 2);
    assert_eq!(shrunk.items[0].id, track.items[0].id);
    assert!(shrunk.items[1].checked, "surviving items keep their state");
}

// =============================================================================
// TEST 6: Selectors
// =============================================================================

#[test]
fn test_active_mission_prefers_active_then_designated() {
    let mut store = AgencyStore::new(Campaign::new("Third Shift", "TRI-13"));

    assert!(store.active_mission().is_none());

    let mut archived = Mission::new("M-00", "History");
    archived.status = MissionStatus::Archived;
    store.create_mission(archived);
    assert!(store.active_mission().is_none(), "archived never surfaces by default");

    let planning = store.create_mission(Mission::new("M-01", "Soon"));
    assert_eq!(
        store.active_mission().expect("selector hit").id,
        planning.id
    );

    let mut running = Mission::new("M-02", "Now");
    running.status = MissionStatus::Active;
    let running = store.create_mission(running);
    assert_eq!(store.active_mission().expect("selector hit").id, running.id);
}

#[test]
fn test_weather_rule_tracks_loose_end_total() {
    let mut store = AgencyStore::default();
    let a = store.create_mission(Mission::new("M-01", "A"));
    let b = store.create_mission(Mission::new("M-02", "B"));

    assert_eq!(store.weather_rule().threshold, 0);

    store.adjust_loose_ends(&a.id, 30, "pileup").expect("mission exists");
    store.adjust_loose_ends(&b.id, 4, "spill").expect("mission exists");
    assert_eq!(store.total_loose_ends(), 34);
    assert_eq!(store.weather_rule().threshold, 33);

    store.adjust_loose_ends(&a.id, 100, "cascade").expect("mission exists");
    assert_eq!(store.weather_rule().threshold, 77, "top tier is a floor");
}
