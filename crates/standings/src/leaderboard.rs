#![forbid(unsafe_code)]

use crate::error::Error;
use crate::points::BasePoints;
use crate::sheet::RaceSheet;
use engine::{ScoreBreakdown, Scorer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceStanding {
    /// Competition rank: tied scores share a rank and the next one skips.
    pub rank: usize,
    pub user: String,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub grand_prix: String,
    pub decided: bool,
    pub standings: Vec<RaceStanding>,
}

impl Leaderboard {
    pub fn standing(&self, user: &str) -> Option<&RaceStanding> {
        self.standings.iter().find(|s| s.user == user)
    }
}

/// Score every entry of `sheet`, best score first.
///
/// Entries are scored in parallel. A result that fails validation is logged
/// and still scored; duplicate entrants are rejected.
pub fn score_race(
    scorer: &Scorer,
    points: &dyn BasePoints,
    sheet: &RaceSheet,
) -> Result<Leaderboard, Error> {
    let mut seen = HashSet::new();
    for entry in &sheet.entries {
        if !seen.insert(entry.user.as_str()) {
            return Err(Error::DuplicateEntrant {
                grand_prix: sheet.grand_prix.clone(),
                user: entry.user.clone(),
            });
        }
    }

    if let Err(error) = sheet.validate() {
        warn!(%error, "scoring against a malformed result");
    }

    let result = sheet.result.as_ref();
    let mut scored: Vec<(String, ScoreBreakdown)> = sheet
        .entries
        .par_iter()
        .map(|entry| {
            let base = entry
                .base_points
                .unwrap_or_else(|| points.base_points(&entry.prediction, result));
            (entry.user.clone(), scorer.score(base, &entry.prediction, result))
        })
        .collect();

    scored.sort_by(|(a_user, a), (b_user, b)| {
        b.final_score
            .total_cmp(&a.final_score)
            .then_with(|| a_user.cmp(b_user))
    });

    let standings = rank(scored, |breakdown| breakdown.final_score)
        .map(|(rank, (user, breakdown))| RaceStanding {
            rank,
            user,
            breakdown,
        })
        .collect();

    info!(
        grand_prix = %sheet.grand_prix,
        entrants = sheet.entries.len(),
        decided = sheet.is_decided(),
        "race scored"
    );

    Ok(Leaderboard {
        grand_prix: sheet.grand_prix.clone(),
        decided: sheet.is_decided(),
        standings,
    })
}

/// Attach competition ranks to rows already sorted best first.
pub(crate) fn rank<T>(
    rows: Vec<(String, T)>,
    score: impl Fn(&T) -> f64,
) -> impl Iterator<Item = (usize, (String, T))> {
    let mut previous: Option<f64> = None;
    let mut current = 0;
    rows.into_iter().enumerate().map(move |(index, row)| {
        let value = score(&row.1);
        if previous.is_none_or(|p| p.total_cmp(&value) != Ordering::Equal) {
            current = index + 1;
            previous = Some(value);
        }
        (current, row)
    })
}
