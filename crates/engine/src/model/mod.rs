mod events;
mod positions;
mod typed;

pub use events::{EventKey, Events};
pub use positions::{GRID, PODIUM, Positions};
pub use typed::{DnfCount, DriverCode, SafetyCar};

use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A user's guess for one race.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prediction {
    pub positions: Positions,
    pub events: Events,
}

impl Prediction {
    pub fn new(positions: Positions, events: Events) -> Self {
        Self { positions, events }
    }
}

/// The official outcome of a race. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceResult {
    positions: Positions,
    events: Events,
}

impl RaceResult {
    pub fn new(positions: Positions, events: Events) -> Self {
        Self { positions, events }
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Check that every official value reads as its typed form: grid slots
    /// hold distinct driver codes, the safety-car flag is yes/no, the DNF
    /// count is a non-negative integer and the retirement list holds driver
    /// codes.
    ///
    /// Scoring does not depend on this; it is meant for the publishing side.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for (slot, token) in self.positions.iter() {
            if !GRID.contains(&slot) {
                return Err(Error::InvalidSlot(slot));
            }
            if let Some(raw) = token.value() {
                let driver = DriverCode::try_from(raw)?;
                if !seen.insert(driver.clone()) {
                    return Err(Error::DuplicateDriver(driver.to_string()));
                }
            }
        }

        self.events.fastest_lap()?;
        self.events.safety_car()?;
        self.events.dnf_count()?;
        for token in self.events.dnf_drivers() {
            DriverCode::try_from(token.as_str())?;
        }
        Ok(())
    }
}
