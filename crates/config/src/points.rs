#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Points table of the default positional base-points service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Points {
    /// Driver predicted in the exact finishing slot.
    pub exact: u32,

    /// Driver predicted one slot away from the finishing slot.
    pub adjacent: u32,
}

impl Default for Points {
    fn default() -> Self {
        Self {
            exact: 3,
            adjacent: 1,
        }
    }
}
