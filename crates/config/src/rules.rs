#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// How the predicted number of retirements is compared to the official one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DnfCountRule {
    /// Normalized string equality, so `"3"` and `"03"` differ.
    #[default]
    Literal,
    /// Integer equality, with a missing value read as zero.
    Numeric,
}

/// How the predicted retiree is matched against the official retirement list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DnfDriverRule {
    /// Any driver in the list counts.
    #[default]
    Membership,
    /// Only the first driver in the list counts.
    First,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    Exact,
    /// Drop the fractional part of the final score.
    Truncate,
}

impl Rounding {
    pub fn apply(self, score: f64) -> f64 {
        match self {
            Rounding::Exact => score,
            Rounding::Truncate => score.trunc(),
        }
    }
}
