#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// A secondary prediction that, when correct, multiplies the base points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bonus {
    SafetyCar,
    DnfCount,
    DnfDriver,
    FastestLap,
    PodiumExact,
    PodiumPartial,
}

impl Bonus {
    pub const ALL: [Bonus; 6] = [
        Bonus::SafetyCar,
        Bonus::DnfCount,
        Bonus::DnfDriver,
        Bonus::FastestLap,
        Bonus::PodiumExact,
        Bonus::PodiumPartial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Bonus::SafetyCar => "SAFETY_CAR",
            Bonus::DnfCount => "DNF_COUNT",
            Bonus::DnfDriver => "DNF_DRIVER",
            Bonus::FastestLap => "FASTEST_LAP",
            Bonus::PodiumExact => "PODIUM_EXACT",
            Bonus::PodiumPartial => "PODIUM_PARTIAL",
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MultiplierTable {
    /// Safety-car yes/no guessed correctly.
    pub safety_car: f64,
    /// Number of retirements guessed correctly.
    pub dnf_count: f64,
    /// Retired driver guessed correctly.
    pub dnf_driver: f64,
    /// Fastest-lap driver guessed correctly.
    pub fastest_lap: f64,
    /// Top three in the exact order.
    pub podium_exact: f64,
    /// Top three drivers right, order wrong.
    pub podium_partial: f64,
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self {
            safety_car: 1.5,
            dnf_count: 1.5,
            dnf_driver: 1.5,
            fastest_lap: 1.5,
            podium_exact: 1.5,
            podium_partial: 1.25,
        }
    }
}

impl MultiplierTable {
    /// Replace factors that would shrink the score (below 1.0, NaN or
    /// infinite) with the neutral factor.
    pub fn clamp(self) -> Self {
        fn sane(factor: f64) -> f64 {
            if factor.is_finite() && factor >= 1.0 {
                factor
            } else {
                1.0
            }
        }

        Self {
            safety_car: sane(self.safety_car),
            dnf_count: sane(self.dnf_count),
            dnf_driver: sane(self.dnf_driver),
            fastest_lap: sane(self.fastest_lap),
            podium_exact: sane(self.podium_exact),
            podium_partial: sane(self.podium_partial),
        }
    }

    pub fn factor(&self, bonus: Bonus) -> f64 {
        match bonus {
            Bonus::SafetyCar => self.safety_car,
            Bonus::DnfCount => self.dnf_count,
            Bonus::DnfDriver => self.dnf_driver,
            Bonus::FastestLap => self.fastest_lap,
            Bonus::PodiumExact => self.podium_exact,
            Bonus::PodiumPartial => self.podium_partial,
        }
    }

    /// Largest multiplier reachable with this table. Exact and partial podium
    /// bonuses exclude each other, so only the bigger of the two counts.
    pub fn ceiling(&self) -> f64 {
        self.safety_car
            * self.dnf_count
            * self.dnf_driver
            * self.fastest_lap
            * self.podium_exact.max(self.podium_partial)
    }
}
