use crate::model::{DnfCount, EventKey, Events};
use config::DnfCountRule;
use std::collections::BTreeMap;

/// Event keys always present in a match report.
pub const SCORED_EVENTS: [EventKey; 3] = [EventKey::FastestLap, EventKey::SafetyCar, EventKey::Dnfs];

/// Compare one event. Both sides are already normalized, so two absent
/// values are equal.
pub fn match_event(
    key: &EventKey,
    predicted: &Events,
    official: &Events,
    dnf_count: DnfCountRule,
) -> bool {
    let (guess, actual) = (predicted.get(key), official.get(key));

    // Unparseable counts fall back to the literal comparison below.
    if *key == EventKey::Dnfs
        && dnf_count == DnfCountRule::Numeric
        && let (Ok(guess), Ok(actual)) = (DnfCount::try_from(guess), DnfCount::try_from(actual))
    {
        return guess == actual;
    }

    guess == actual
}

/// Match the scored events plus any extra, non-informational key the
/// prediction carries. `DNF_DRIVER` is left to the DNF comparator. Without an
/// official result every event is a miss.
pub fn match_events(
    predicted: &Events,
    official: Option<&Events>,
    dnf_count: DnfCountRule,
) -> BTreeMap<EventKey, bool> {
    let extra = predicted
        .keys()
        .filter(|key| matches!(key, EventKey::Other(_)))
        .cloned();

    SCORED_EVENTS
        .into_iter()
        .chain(extra)
        .map(|key| {
            let hit = official.is_some_and(|official| {
                match_event(&key, predicted, official, dnf_count)
            });
            (key, hit)
        })
        .collect()
}
