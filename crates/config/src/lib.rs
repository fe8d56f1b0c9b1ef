#![forbid(unsafe_code)]

mod error;
mod multipliers;
mod points;
mod rules;
mod scoring;

pub use error::Error;
pub use multipliers::{Bonus, MultiplierTable};
pub use points::Points;
pub use rules::{DnfCountRule, DnfDriverRule, Rounding};
pub use scoring::Scoring;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables that override defaults and file settings
/// in [`Config::load`] and [`Config::from_env`], e.g.
/// `RACE_SCORER_SCORING__ROUNDING=truncate`.
pub const ENV_PREFIX: &str = "RACE_SCORER_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub scoring: Scoring,
    pub points: Points,
}

impl Config {
    /// Built-in defaults, no file and no environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults with environment overrides, for runs without a
    /// config file.
    pub fn from_env() -> Result<Self, Error> {
        Self::extract(Self::defaults())
    }

    /// Load defaults, then the TOML file at `path`, then environment
    /// overrides. Multiplier factors are clamped so they never shrink a score.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }

        Self::extract(Self::defaults().merge(Toml::file(path)))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    fn extract(figment: Figment) -> Result<Self, Error> {
        let mut config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.scoring.multipliers = config.scoring.multipliers.clamp();
        Ok(config)
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}
