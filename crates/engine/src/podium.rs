use crate::model::{GRID, Positions};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// How one predicted slot compares to the official order. Display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotMatch {
    Exact,
    /// The driver finished one slot away from the prediction.
    Near,
    #[default]
    None,
}

/// Ordered by strength: `None < Partial < Exact`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PodiumStatus {
    #[default]
    None,
    /// Same three drivers in a different order.
    Partial,
    Exact,
}

impl fmt::Display for PodiumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Exact => "exact",
        })
    }
}

/// Compare the predicted driver at `slot` with the official driver in the
/// same slot, then with its grid neighbours.
pub fn classify_slot(predicted: &Positions, official: &Positions, slot: u8) -> SlotMatch {
    let driver = predicted.get(slot);
    if driver.is_absent() {
        return SlotMatch::None;
    }

    if official.get(slot) == driver {
        return SlotMatch::Exact;
    }

    let near = [slot.checked_sub(1), slot.checked_add(1)]
        .into_iter()
        .flatten()
        .filter(|neighbour| GRID.contains(neighbour))
        .any(|neighbour| official.get(neighbour) == driver);
    if near { SlotMatch::Near } else { SlotMatch::None }
}

/// Classify every grid slot. Without an official order every slot is `None`.
pub fn classify_positions(
    predicted: &Positions,
    official: Option<&Positions>,
) -> BTreeMap<u8, SlotMatch> {
    GRID.map(|slot| {
        let class = official.map_or(SlotMatch::None, |official| {
            classify_slot(predicted, official, slot)
        });
        (slot, class)
    })
    .collect()
}

/// Compare the top three. Any empty podium slot on either side gives `None`.
pub fn classify_podium(predicted: &Positions, official: &Positions) -> PodiumStatus {
    let (Some(predicted), Some(official)) = (predicted.podium(), official.podium()) else {
        return PodiumStatus::None;
    };

    if predicted == official {
        PodiumStatus::Exact
    } else if BTreeSet::from(predicted) == BTreeSet::from(official) {
        PodiumStatus::Partial
    } else {
        PodiumStatus::None
    }
}
