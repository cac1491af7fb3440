//! Stock requisition catalog.
//!
//! The standard items every new campaign starts from: the HQ storefront
//! and the Siphon ability tree. Seeding appends clones of these through
//! the normal create path, so seeded records get their own ids and
//! stamps.

use crate::model::{Requisition, RequisitionSource};
use crate::store::AgencyStore;

/// Find a stock item by name, any source. Matching ignores case.
pub fn catalog_item(name: &str) -> Option<Requisition> {
    let name_lower = name.to_lowercase();
    HQ_CATALOG
        .iter()
        .chain(SIPHON_CATALOG.iter())
        .find(|item| item.name.to_lowercase() == name_lower)
        .cloned()
}

/// Append the full stock catalog to the store's requisitions.
pub fn seed_requisitions(store: &mut AgencyStore) {
    let mut items = HQ_CATALOG.clone();
    items.extend(SIPHON_CATALOG.iter().cloned());
    store.append_requisitions(items);
}

// ============================================================================
// HQ storefront
// ============================================================================

lazy_static::lazy_static! {
    /// Items sold through the HQ storefront.
    pub static ref HQ_CATALOG: Vec<Requisition> = vec![
        Requisition::new("Official Triangle Agency Mug", RequisitionSource::Hq)
            .with_price("12 oz", 3.0)
            .with_price("18 oz", 18.0)
            .with_description(
                "This stylish ceramic mug holds any liquid within a reasonable \
                 temperature range.",
            ),
        Requisition::new("Convenience Paperclip", RequisitionSource::Hq)
            .with_price("Lease", 1.0)
            .with_price("Purchase", 15.0)
            .with_description(
                "This one-inch metal paperclip lets an agent covertly store any \
                 number of documents or digital files.\nClip paper files together \
                 to store them, or slot one end of the clip into any data port to \
                 save, transfer, or copy digital data. There is no cap on how much \
                 the clip can hold; any quantity of paper reads as an unremarkable \
                 stack of five or so sheets. Note that any information stored in \
                 the clip becomes Agency property.",
            ),
        Requisition::new("Portable Locker", RequisitionSource::Hq)
            .with_price("Small lease", 1.0)
            .with_price("Large lease", 3.0)
            .with_price("Small purchase", 11.0)
            .with_price("Large purchase", 33.0)
            .with_description(
                "This metal locker is maintained by the manifold on duty and can \
                 be reached at any point during a mission: extend a held object \
                 behind your back to store it, or an empty hand to retrieve one. \
                 Objects age and wear normally while inside.\nThe small locker is \
                 about the size of an ordinary backpack. The large locker is about \
                 the size of an ordinary garage.",
            ),
        Requisition::new("Triangle Agency Corporate Meal Plan", RequisitionSource::Hq)
            .with_price("Single-mission plan", 1.0)
            .with_price("Permanent plan", 15.0)
            .with_description(
                "When ordering for yourself from any restaurant, you may use the \
                 Agency's company card so long as you order only from the approved \
                 foods list: samosas, crepes (served folded), onigiri, sandwiches \
                 (cut into triangles), pizza or pie (by the slice), hamantaschen, \
                 arrow crab, Toblerone. Other selections must be approved by your \
                 General Manager.",
            ),
        Requisition::new("Charitable Donation", RequisitionSource::Hq)
            .with_price("Thank you for your donation!", 9.0)
            .with_description(
                "A randomly selected underfunded orphanage receives a year of \
                 financial support.",
            ),
        Requisition::new("Tricycle Motor Service", RequisitionSource::Hq)
            .with_price("Guest pass", 1.0)
            .with_price("Lifetime member", 15.0)
            .with_description(
                "You are assigned a personal vehicle of your choice. It may be any \
                 commercially available, street-legal mobile object large enough \
                 to carry your whole field team, fitted with any necessary \
                 amenities. Returning a damaged vehicle draws a reprimand.",
            ),
        Requisition::new("Disclosure Agreement", RequisitionSource::Hq)
            .with_price("Guest pass", 1.0)
            .with_price("Member", 15.0)
            .with_description(
                "Agents covered by this agreement authorize the Agency, with the \
                 consent of both parties, to transcribe their thoughts and plant \
                 other agents' thoughts into their minds, easing communication \
                 between agents and letting you converse wordlessly at a distance. \
                 Every agent must sign their own disclosure agreement to \
                 participate.",
            ),
        Requisition::new("Official Triangle Agency Varsity Jacket", RequisitionSource::Hq)
            .with_price("Any size", 15.0)
            .with_description(
                "This light, breathable jacket keeps an agent comfortable and \
                 mobile while showing off their impeccable taste. Agents may \
                 request their name or call sign screen-printed across the back, \
                 and space is reserved on the right chest for the embroidered \
                 patch earned at each promotion.",
            ),
        Requisition::new("Triangle Home Gift Card", RequisitionSource::Hq)
            .with_price("$1,000 gift card", 1.0)
            .with_price("$3,000,000 gift card", 66.0)
            .with_description(
                "At the office, or in a shopping center during a mission, spend \
                 this gift card on props, furniture, household goods, and any \
                 other common mundane items your investigation may require. \
                 Merchandise may not be resold.",
            ),
        Requisition::new("Department Transfer Request", RequisitionSource::Hq)
            .with_price("First time", 15.0)
            .with_price("Each time after", 30.0)
            .with_description(
                "Feeling out of place in your current department? Apply to \
                 transfer your role to any role not already represented on your \
                 field team. Note that you receive your new role's starting \
                 requisitions only at the start of your next mission.",
            ),
        Requisition::new("Historical Revision Request", RequisitionSource::Hq)
            .with_price("All requests", 99.0)
            .with_description(
                "Use the Agency's 3% flashback program to rewrite one specific \
                 mundane moment from your past. This covers anything from \
                 adjusting what you said in a decisive conversation to whether \
                 you put mayonnaise on your sandwich this morning.\nNote that \
                 this cannot affect past interactions with anomalous entities, \
                 including your own private anomaly.",
            ),
        Requisition::new("LMZ \"Skybreaker\" Archon-Class Helicopter", RequisitionSource::Hq)
            .with_price("Base model", 333.0)
            .with_price("Fireproof model", 999.0)
            .with_description(
                "This top-of-the-line Agency-branded helicopter frees you from \
                 every terrestrial concern. With plush leather seating for up to \
                 9 passengers, a range over 300 nautical miles, a 140-knot \
                 cruising speed, a customizable automated assistant, and \
                 refrigerated cup holders, the Skybreaker is the definitive way \
                 to travel.\nPilot training not included. Liability waiver \
                 required.",
            ),
    ];

    /// Abilities bought through the Siphon.
    pub static ref SIPHON_CATALOG: Vec<Requisition> = vec![
        Requisition::new("Accelerated Development", RequisitionSource::Siphon)
            .with_price("Activate", 7.0)
            .with_description("Activate a Practiced or Known For tag."),
        Requisition::new("Self-Actualization", RequisitionSource::Siphon)
            .with_price("Replace ability", 14.0)
            .with_description(
                "Dislike where one of your anomalous abilities is heading? The \
                 Siphon makes your observation the deciding factor, replacing one \
                 of your existing abilities with the one you would have gained by \
                 answering the previous ability question differently. The \
                 replaced ability loses its Practiced status and any answered \
                 Known For questions.",
            ),
        Requisition::new("Multitude", RequisitionSource::Siphon)
            .with_price("Gain ability", 21.0)
            .with_description(
                "Gain a starting anomalous ability from an anomaly ARC component \
                 no one on your field team is using. It can advance into future \
                 abilities like any normal ability.",
            ),
        Requisition::new("Infiltration", RequisitionSource::Siphon)
            .with_price("Gain ability", 28.0)
            .with_description(
                "You gain the ability Infiltration: when you die, you do not \
                 return to the Agency but fall into the Vestibule. You can return \
                 to reality quickly by appearing near someone who is thinking of \
                 you. When you return, choose a part of your body; it is \
                 permanently changed to reflect your anomaly. You cannot choose \
                 the same option twice: left eye, right eye, mouth and nose, left \
                 hand, right hand, left arm, right arm, left foot, right foot, \
                 left leg, right leg, heart, stomach\nThese changes may cause \
                 your mere presence to start generating loose ends.",
            ),
        Requisition::new("Fission", RequisitionSource::Siphon)
            .with_price("Gain ability", 42.0)
            .with_description(
                "You gain the ability Fission: your anomaly can safely detach \
                 from your body and act on its own for up to 7 minutes. During \
                 that time you control both independently; your human body \
                 cannot use anomalous abilities, and your anomalous form \
                 generates a loose end for everyone who encounters it.",
            ),
        Requisition::new("Domain Creation", RequisitionSource::Siphon)
            .with_price("Gain ability", 49.0)
            .with_description(
                "You gain the ability Domain Creation:\nOnce per mission, you \
                 may establish an enclosed room or an open space roughly 10 \
                 meters across as your domain. The space cannot lie within, or \
                 touch, another anomaly's domain. It does not dissipate until \
                 the mission ends.\nYour domain has the following effects: other \
                 anomalies, including lesser anomalies, cannot enter without \
                 your permission. Successful rolls made while using anomalous \
                 abilities in your domain automatically gain an extra 3.\nOnce \
                 per mission, you may use UNL3ASH inside your domain without \
                 rolling, affecting only things within it.",
            ),
        Requisition::new("Awakening", RequisitionSource::Siphon)
            .with_price("Gain ability", 56.0)
            .with_description(
                "Create a brand-new anomalous ability that perfectly represents \
                 you, including a success effect, a triple-exaltation effect, \
                 and a failure effect.",
            ),
    ];
}
