use crate::Error;
use crate::model::typed::{DnfCount, DriverCode, SafetyCar};
use crate::normalize::{Token, normalize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKey {
    FastestLap,
    SafetyCar,
    /// Number of retirements.
    Dnfs,
    /// Predicted retiree, or the comma-joined retirement list on a result.
    DnfDriver,
    PolePosition,
    IncidentsInfo,
    DnfList,
    Other(String),
}

impl EventKey {
    pub fn as_str(&self) -> &str {
        match self {
            EventKey::FastestLap => "FASTEST_LAP",
            EventKey::SafetyCar => "SAFETY_CAR",
            EventKey::Dnfs => "DNFS",
            EventKey::DnfDriver => "DNF_DRIVER",
            EventKey::PolePosition => "POLE_POSITION",
            EventKey::IncidentsInfo => "INCIDENTS_INFO",
            EventKey::DnfList => "DNF_LIST",
            EventKey::Other(key) => key,
        }
    }

    /// Keys carried for display only; they never earn a bonus.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            EventKey::PolePosition | EventKey::IncidentsInfo | EventKey::DnfList
        )
    }
}

impl FromStr for EventKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "FASTEST_LAP" => EventKey::FastestLap,
            "SAFETY_CAR" => EventKey::SafetyCar,
            "DNFS" => EventKey::Dnfs,
            "DNF_DRIVER" => EventKey::DnfDriver,
            "POLE_POSITION" => EventKey::PolePosition,
            "INCIDENTS_INFO" => EventKey::IncidentsInfo,
            "DNF_LIST" => EventKey::DnfList,
            other => EventKey::Other(other.to_owned()),
        })
    }
}

impl fmt::Debug for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        let Ok(key) = key.parse::<EventKey>();
        Ok(key)
    }
}

static ABSENT: Token = Token::Absent;

/// Side-event values keyed by event, normalized on ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Events(BTreeMap<EventKey, Token>);

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: EventKey, raw: &str) -> Self {
        self.0.insert(key, normalize(raw));
        self
    }

    pub fn get(&self, key: &EventKey) -> &Token {
        self.0.get(key).unwrap_or(&ABSENT)
    }

    pub fn keys(&self) -> impl Iterator<Item = &EventKey> {
        self.0.keys()
    }

    pub fn fastest_lap(&self) -> Result<Option<DriverCode>, Error> {
        self.get(&EventKey::FastestLap)
            .value()
            .map(DriverCode::try_from)
            .transpose()
    }

    pub fn safety_car(&self) -> Result<SafetyCar, Error> {
        SafetyCar::try_from(self.get(&EventKey::SafetyCar))
    }

    pub fn dnf_count(&self) -> Result<DnfCount, Error> {
        DnfCount::try_from(self.get(&EventKey::Dnfs))
    }

    /// The `DNF_DRIVER` value read as a comma-separated list. Empty elements
    /// and sentinels are dropped, so "no retirements" is an empty list.
    pub fn dnf_drivers(&self) -> Vec<Token> {
        match self.get(&EventKey::DnfDriver) {
            Token::Absent => Vec::new(),
            Token::Value(list) => list
                .split(',')
                .map(normalize)
                .filter(|token| !token.is_absent())
                .collect(),
        }
    }
}
