#![forbid(unsafe_code)]

use crate::error::Error;
use crate::leaderboard::rank;
use crate::season::SeasonStandings;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Team rosters: team name to member users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Teams(pub BTreeMap<String, BTreeSet<String>>);

impl Teams {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        serde_json::from_reader(reader).map_err(|source| Error::Json {
            path: path.to_owned(),
            source,
        })
    }
}

impl FromIterator<(String, BTreeSet<String>)> for Teams {
    fn from_iter<I: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub rank: usize,
    pub team: String,
    pub points: f64,
    /// Members with at least one decided race.
    pub scoring_members: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStandings {
    pub standings: Vec<TeamStanding>,
}

impl TeamStandings {
    /// Sum the season points of each team's members, best team first.
    ///
    /// Teams whose members never scored a decided race are left out. A user
    /// on two rosters counts for both.
    pub fn from_season(season: &SeasonStandings, teams: &Teams) -> Self {
        let points: HashMap<&str, f64> = season
            .standings
            .iter()
            .map(|standing| (standing.user.as_str(), standing.points))
            .collect();

        let mut rows: Vec<(String, (f64, usize))> = teams
            .0
            .iter()
            .filter_map(|(team, members)| {
                let scored: Vec<f64> = members
                    .iter()
                    .filter_map(|user| points.get(user.as_str()).copied())
                    .collect();
                if scored.is_empty() {
                    debug!(%team, "team has no scored members");
                    return None;
                }
                Some((team.clone(), (scored.iter().sum(), scored.len())))
            })
            .collect();
        rows.sort_by(|(a_team, a), (b_team, b)| b.0.total_cmp(&a.0).then_with(|| a_team.cmp(b_team)));

        let standings = rank(rows, |(points, _)| *points)
            .map(|(rank, (team, (points, scoring_members)))| TeamStanding {
                rank,
                team,
                points,
                scoring_members,
            })
            .collect();

        Self { standings }
    }

    pub fn leader(&self) -> Option<&TeamStanding> {
        self.standings.first()
    }
}
