use crate::model::{EventKey, Prediction, RaceResult};
use crate::multiplier::{Outcome, compound};
use crate::podium::{PodiumStatus, SlotMatch, classify_positions};
use config::{Bonus, Scoring};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Full verdict on one prediction, for display and for standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub podium_status: PodiumStatus,
    pub position_matches: BTreeMap<u8, SlotMatch>,
    pub event_matches: BTreeMap<EventKey, bool>,
    pub dnf_match: bool,
    pub bonuses: Vec<Bonus>,
    pub multiplier: f64,
    pub base_points: f64,
    pub final_score: f64,
}

/// Scores predictions against results under one set of rules.
///
/// Holds no state besides its rules, so one instance can be shared across
/// threads to score a whole grid.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    rules: Scoring,
}

impl Scorer {
    pub fn new(rules: &Scoring) -> Self {
        let mut rules = rules.clone();
        rules.multipliers = rules.multipliers.clamp();
        Self { rules }
    }

    pub fn rules(&self) -> &Scoring {
        &self.rules
    }

    /// Score `prediction` against `result`. `base_points` comes from the
    /// points service and is taken as-is.
    ///
    /// An undecided race (`result == None`) scores exactly the base points.
    pub fn score(
        &self,
        base_points: f64,
        prediction: &Prediction,
        result: Option<&RaceResult>,
    ) -> ScoreBreakdown {
        let outcome = Outcome::evaluate(prediction, result, &self.rules);
        let position_matches =
            classify_positions(&prediction.positions, result.map(RaceResult::positions));

        let bonuses = outcome.bonuses();
        let multiplier = compound(&self.rules.multipliers, &bonuses);
        let final_score = self.rules.rounding.apply(base_points * multiplier);

        debug!(
            decided = result.is_some(),
            podium = ?outcome.podium,
            multiplier,
            base_points,
            final_score,
            "prediction scored"
        );

        ScoreBreakdown {
            podium_status: outcome.podium,
            position_matches,
            event_matches: outcome.events,
            dnf_match: outcome.dnf_driver,
            bonuses,
            multiplier,
            base_points,
            final_score,
        }
    }
}

/// [`Scorer::score`] with the default rules.
pub fn score(
    base_points: f64,
    prediction: &Prediction,
    result: Option<&RaceResult>,
) -> ScoreBreakdown {
    Scorer::default().score(base_points, prediction, result)
}
