#![forbid(unsafe_code)]

use crate::leaderboard::{Leaderboard, rank};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStanding {
    pub rank: usize,
    pub user: String,
    pub points: f64,
    /// Decided races the user entered.
    pub races: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStandings {
    pub standings: Vec<SeasonStanding>,
}

impl SeasonStandings {
    /// Sum final scores per user over the decided races. Undecided races are
    /// previews and do not count.
    pub fn from_leaderboards<'a>(leaderboards: impl IntoIterator<Item = &'a Leaderboard>) -> Self {
        let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for leaderboard in leaderboards {
            if !leaderboard.decided {
                debug!(grand_prix = %leaderboard.grand_prix, "skipping undecided race");
                continue;
            }
            for standing in &leaderboard.standings {
                let total = totals.entry(standing.user.as_str()).or_default();
                total.0 += standing.breakdown.final_score;
                total.1 += 1;
            }
        }

        let mut rows: Vec<(String, (f64, usize))> = totals
            .into_iter()
            .map(|(user, total)| (user.to_owned(), total))
            .collect();
        rows.sort_by(|(a_user, a), (b_user, b)| b.0.total_cmp(&a.0).then_with(|| a_user.cmp(b_user)));

        let standings = rank(rows, |(points, _)| *points)
            .map(|(rank, (user, (points, races)))| SeasonStanding {
                rank,
                user,
                points,
                races,
            })
            .collect();

        Self { standings }
    }

    pub fn leader(&self) -> Option<&SeasonStanding> {
        self.standings.first()
    }
}
