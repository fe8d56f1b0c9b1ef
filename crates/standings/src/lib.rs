#![forbid(unsafe_code)]

//! Authoritative scoring: whole races, whole seasons and teams.

mod error;
pub mod leaderboard;
pub mod points;
pub mod season;
pub mod sheet;
pub mod team;

pub use error::Error;
pub use leaderboard::{Leaderboard, RaceStanding, score_race};
pub use points::{BasePoints, PositionalPoints};
pub use season::{SeasonStanding, SeasonStandings};
pub use sheet::{Entry, RaceSheet};
pub use team::{TeamStanding, TeamStandings, Teams};
