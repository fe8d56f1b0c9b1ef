#![forbid(unsafe_code)]

use config::{Config, Points};
use engine::model::GRID;
use engine::podium::classify_slot;
use engine::{Prediction, RaceResult, SlotMatch};

pub trait BasePoints: Send + Sync {
    /// Points for positional accuracy, before any multiplier.
    fn base_points(&self, prediction: &Prediction, result: Option<&RaceResult>) -> f64;
}

/// Awards points per predicted slot: `exact` when the official driver in that
/// slot is the predicted one, `adjacent` when a neighbouring slot holds them.
#[derive(Debug, Clone)]
pub struct PositionalPoints {
    table: Points,
}

impl PositionalPoints {
    pub fn new(config: &Config) -> Self {
        Self {
            table: config.points,
        }
    }
}

impl BasePoints for PositionalPoints {
    fn base_points(&self, prediction: &Prediction, result: Option<&RaceResult>) -> f64 {
        let Some(result) = result else {
            return 0.0;
        };

        let total: u32 = prediction
            .positions
            .iter()
            .filter(|(slot, _)| GRID.contains(slot))
            .map(
                |(slot, _)| match classify_slot(&prediction.positions, result.positions(), slot) {
                    SlotMatch::Exact => self.table.exact,
                    SlotMatch::Near => self.table.adjacent,
                    SlotMatch::None => 0,
                },
            )
            .sum();

        f64::from(total)
    }
}
