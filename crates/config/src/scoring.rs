#![forbid(unsafe_code)]

use crate::multipliers::MultiplierTable;
use crate::rules::{DnfCountRule, DnfDriverRule, Rounding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Scoring {
    /// Bonus factors compounded on top of the base points.
    pub multipliers: MultiplierTable,

    pub dnf_count: DnfCountRule,

    pub dnf_driver: DnfDriverRule,

    /// Rounding applied to `base points * multiplier`.
    pub rounding: Rounding,
}
