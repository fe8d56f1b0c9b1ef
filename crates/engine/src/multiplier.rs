use crate::dnf::match_dnf;
use crate::event_match::match_events;
use crate::model::{EventKey, Prediction, RaceResult};
use crate::podium::{PodiumStatus, classify_podium};
use config::{Bonus, MultiplierTable, Scoring};
use std::collections::BTreeMap;
use tracing::trace;

/// Everything the multiplier depends on, for one prediction against one
/// result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub events: BTreeMap<EventKey, bool>,
    pub dnf_driver: bool,
    pub podium: PodiumStatus,
}

impl Outcome {
    /// Run the event matcher, the DNF comparator and the podium classifier.
    /// No result yields the all-miss outcome.
    pub fn evaluate(prediction: &Prediction, result: Option<&RaceResult>, rules: &Scoring) -> Self {
        let events = match_events(
            &prediction.events,
            result.map(RaceResult::events),
            rules.dnf_count,
        );

        let Some(result) = result else {
            return Self {
                events,
                ..Default::default()
            };
        };

        Self {
            events,
            dnf_driver: match_dnf(&prediction.events, result.events(), rules.dnf_driver),
            podium: classify_podium(&prediction.positions, result.positions()),
        }
    }

    fn event(&self, key: &EventKey) -> bool {
        self.events.get(key).copied().unwrap_or(false)
    }

    /// Bonuses earned, in table order. Exact and partial podium exclude each
    /// other.
    pub fn bonuses(&self) -> Vec<Bonus> {
        let mut earned = Vec::with_capacity(Bonus::ALL.len());
        if self.event(&EventKey::SafetyCar) {
            earned.push(Bonus::SafetyCar);
        }
        if self.event(&EventKey::Dnfs) {
            earned.push(Bonus::DnfCount);
        }
        if self.dnf_driver {
            earned.push(Bonus::DnfDriver);
        }
        if self.event(&EventKey::FastestLap) {
            earned.push(Bonus::FastestLap);
        }
        match self.podium {
            PodiumStatus::Exact => earned.push(Bonus::PodiumExact),
            PodiumStatus::Partial => earned.push(Bonus::PodiumPartial),
            PodiumStatus::None => {}
        }
        earned
    }
}

/// Compound the factors of `bonuses` onto the neutral multiplier 1.0.
pub fn compound(table: &MultiplierTable, bonuses: &[Bonus]) -> f64 {
    let multiplier = bonuses
        .iter()
        .fold(1.0, |multiplier, bonus| multiplier * table.factor(*bonus));
    trace!(multiplier, ?bonuses, "multiplier compounded");
    multiplier
}
