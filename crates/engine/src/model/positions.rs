use crate::normalize::{Token, normalize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Finishing slots that take part in classification.
pub const GRID: RangeInclusive<u8> = 1..=10;

/// Slots making up the podium.
pub const PODIUM: [u8; 3] = [1, 2, 3];

static ABSENT: Token = Token::Absent;

/// Finishing order keyed by slot. Slots need not be exhaustive; a missing
/// slot and an empty one both read as [`Token::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Positions(BTreeMap<u8, Token>);

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from drivers listed in finishing order, starting at slot 1.
    pub fn from_order<'a>(drivers: impl IntoIterator<Item = &'a str>) -> Self {
        drivers
            .into_iter()
            .zip(GRID)
            .fold(Self::new(), |positions, (driver, slot)| {
                positions.with(slot, driver)
            })
    }

    pub fn with(mut self, slot: u8, raw: &str) -> Self {
        self.0.insert(slot, normalize(raw));
        self
    }

    pub fn get(&self, slot: u8) -> &Token {
        self.0.get(&slot).unwrap_or(&ABSENT)
    }

    /// The top three drivers, or `None` if any podium slot is empty.
    pub fn podium(&self) -> Option<[&str; 3]> {
        let [p1, p2, p3] = PODIUM.map(|slot| self.get(slot).value());
        Some([p1?, p2?, p3?])
    }

    /// Every recorded slot, including ones outside [`GRID`].
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Token)> {
        self.0.iter().map(|(slot, token)| (*slot, token))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Token::is_absent)
    }
}
