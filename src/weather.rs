//! Weather rules derived from the jurisdiction-wide loose end total.
//!
//! The table is fixed and ascending; every count maps to exactly one
//! rule, so lookups are total and monotonic.

/// One row of the weather table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherRule {
    /// Loose end count at which this rule takes effect.
    pub threshold: u32,
    /// Chaos value new missions start at. `None` past the point where
    /// missions stop starting normally.
    pub start_chaos: Option<u32>,
    /// Weather event tier, when one still applies.
    pub weather_event: Option<u32>,
    /// Table restriction in force at this tier.
    pub restriction: &'static str,
}

static RULES: [WeatherRule; 8] = [
    WeatherRule {
        threshold: 0,
        start_chaos: Some(0),
        weather_event: Some(0),
        restriction: "Only what is stipulated in the agency's terms of employment.",
    },
    WeatherRule {
        threshold: 11,
        start_chaos: Some(5),
        weather_event: Some(1),
        restriction: "In seemingly normal conversation, agents' personal connections \
            spontaneously remind them of their duties to the agency and of the \
            importance of reducing loose ends.",
    },
    WeatherRule {
        threshold: 22,
        start_chaos: Some(10),
        weather_event: Some(2),
        restriction: "To gain the effect of a triple exaltation, an agent must deliver \
            a short speech reaffirming their commitment to clearing loose ends and \
            stabilizing reality.",
    },
    WeatherRule {
        threshold: 33,
        start_chaos: Some(15),
        weather_event: Some(3),
        restriction: "Before any roll, agents must count to three, aloud or by an \
            equivalent method.",
    },
    WeatherRule {
        threshold: 44,
        start_chaos: Some(20),
        weather_event: Some(4),
        restriction: "Agents are not eligible for MVP until the loose end count drops \
            below 44.",
    },
    WeatherRule {
        threshold: 55,
        start_chaos: Some(25),
        weather_event: Some(5),
        restriction: "Read to the agents: should loose ends reach 66, every agent's \
            contract is terminated. If missions cannot bring the number down, overtime \
            is mandatory: strike one box from the end of every work/life balance track \
            to clear 6 loose ends.",
    },
    WeatherRule {
        threshold: 66,
        start_chaos: None,
        weather_event: None,
        restriction: "When the current mission ends, the active field team is forcibly \
            retired. Each member picks an available retirement option or is sent to \
            the containment vault. The jurisdiction's loose end count drops by 11, \
            plus 11 for every agent retiring through an option granted by their role.",
    },
    WeatherRule {
        threshold: 77,
        start_chaos: None,
        weather_event: None,
        restriction: "Dissolution is imminent. To avert it, this division's \
            jurisdiction will be erased from existence. [Go to: W7]",
    },
];

/// Every rule, ascending by threshold.
pub fn rules() -> &'static [WeatherRule] {
    &RULES
}

/// The rule with the largest threshold not exceeding `count`. Counts
/// below every threshold fall back to the first rule.
pub fn rule_for_count(count: u32) -> &'static WeatherRule {
    let mut selected = &RULES[0];
    for rule in &RULES {
        if count >= rule.threshold {
            selected = rule;
        } else {
            break;
        }
    }
    selected
}

/// Exact-threshold lookup.
pub fn rule_for_threshold(threshold: u32) -> Option<&'static WeatherRule> {
    RULES.iter().find(|r| r.threshold == threshold)
}
