use crate::error::Error;
use config::Config;
use engine::{Prediction, RaceResult, ScoreBreakdown, Scorer};
use serde::de::DeserializeOwned;
use standings::{
    Leaderboard, PositionalPoints, RaceSheet, SeasonStandings, TeamStandings, Teams, score_race,
};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })
}

/// Score a single prediction read from disk.
pub fn score(
    config: &Config,
    prediction: &Path,
    result: Option<&Path>,
    base_points: f64,
) -> Result<ScoreBreakdown, Error> {
    let prediction: Prediction = read_json(prediction)?;
    let result: Option<RaceResult> = result.map(read_json).transpose()?;
    if let Some(result) = &result
        && let Err(error) = result.validate()
    {
        warn!(%error, "scoring against a malformed result");
    }

    let scorer = Scorer::new(&config.scoring);
    Ok(scorer.score(base_points, &prediction, result.as_ref()))
}

/// Score every entry of one race sheet.
pub fn race(config: &Config, sheet: &Path, strict: bool) -> Result<Leaderboard, Error> {
    let sheet = RaceSheet::load(sheet)?;
    if strict {
        sheet.validate()?;
    }
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(config);
    Ok(score_race(&scorer, &points, &sheet)?)
}

/// Expand file names and glob patterns into race sheet paths.
///
/// A plain path is kept as given; a pattern must match at least one file.
pub fn expand_sheets(patterns: &[String]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for pattern in patterns {
        if Path::new(pattern).is_file() {
            paths.push(PathBuf::from(pattern));
            continue;
        }
        let before = paths.len();
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }
        if paths.len() == before {
            return Err(Error::NoMatch(pattern.clone()));
        }
    }
    paths.sort();
    paths.dedup();
    debug!(sheets = paths.len(), "expanded race sheets");
    Ok(paths)
}

/// Score every race sheet and sum the decided ones into season standings.
pub fn season(config: &Config, patterns: &[String]) -> Result<SeasonStandings, Error> {
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(config);

    let leaderboards = expand_sheets(patterns)?
        .iter()
        .map(|path| {
            let sheet = RaceSheet::load(path)?;
            score_race(&scorer, &points, &sheet)
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(races = leaderboards.len(), "season scored");
    Ok(SeasonStandings::from_leaderboards(&leaderboards))
}

/// Season standings summed per team roster.
pub fn teams(config: &Config, roster: &Path, patterns: &[String]) -> Result<TeamStandings, Error> {
    let teams = Teams::load(roster)?;
    let season = season(config, patterns)?;
    Ok(TeamStandings::from_season(&season, &teams))
}

pub fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_leaderboard(out: &mut impl Write, leaderboard: &Leaderboard) -> Result<(), Error> {
    let state = if leaderboard.decided { "final" } else { "preview" };
    writeln!(out, "{} ({state})", leaderboard.grand_prix)?;
    for standing in &leaderboard.standings {
        let breakdown = &standing.breakdown;
        writeln!(
            out,
            "{:>4}  {:<20} {:>10.2}  x{:<8.5} {}",
            standing.rank,
            standing.user,
            breakdown.final_score,
            breakdown.multiplier,
            breakdown.podium_status,
        )?;
    }
    Ok(())
}

pub fn write_season(out: &mut impl Write, season: &SeasonStandings) -> Result<(), Error> {
    for standing in &season.standings {
        writeln!(
            out,
            "{:>4}  {:<20} {:>10.2}  {} races",
            standing.rank, standing.user, standing.points, standing.races,
        )?;
    }
    Ok(())
}

pub fn write_teams(out: &mut impl Write, teams: &TeamStandings) -> Result<(), Error> {
    for standing in &teams.standings {
        writeln!(
            out,
            "{:>4}  {:<20} {:>10.2}  {} members",
            standing.rank, standing.team, standing.points, standing.scoring_members,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    const SHEET: &str = r#"{
        "grandPrix": "Monza",
        "result": {
            "positions": {"1": "LEC", "2": "SAI", "3": "VER"},
            "events": {"SAFETY_CAR": "No"}
        },
        "entries": [
            {"user": "ana", "prediction": {"positions": {"1": "LEC", "2": "SAI", "3": "VER"}}},
            {"user": "ben", "prediction": {"positions": {"1": "VER"}}}
        ]
    }"#;

    #[test]
    fn score_reads_prediction_and_result() {
        let dir = tempdir().unwrap();
        let prediction = dir.path().join("prediction.json");
        let result = dir.path().join("result.json");
        fs::write(&prediction, r#"{"events": {"SAFETY_CAR": "yes"}}"#).unwrap();
        fs::write(
            &result,
            r#"{"events": {"SAFETY_CAR": "Yes", "FASTEST_LAP": "VER", "DNFS": "1", "DNF_DRIVER": "PER"}}"#,
        )
        .unwrap();

        let breakdown = score(&Config::default(), &prediction, Some(&result), 10.0).unwrap();
        assert_eq!(breakdown.final_score, 15.0);

        let pending = score(&Config::default(), &prediction, None, 10.0).unwrap();
        assert_eq!(pending.final_score, 10.0);
        assert_eq!(pending.multiplier, 1.0);
    }

    #[test]
    fn malformed_prediction_names_the_file() {
        let dir = tempdir().unwrap();
        let prediction = dir.path().join("prediction.json");
        fs::write(&prediction, "{ nope").unwrap();

        let err = score(&Config::default(), &prediction, None, 1.0).unwrap_err();
        assert!(matches!(err, Error::Json { ref path, .. } if *path == prediction));
    }

    #[test]
    fn strict_race_rejects_a_malformed_result() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("monza.json");
        fs::write(&path, SHEET.replace(r#""SAFETY_CAR": "No""#, r#""SAFETY_CAR": "maybe""#))
            .unwrap();

        assert!(race(&Config::default(), &path, false).is_ok());
        assert!(matches!(
            race(&Config::default(), &path, true),
            Err(Error::Standings(standings::Error::InvalidResult { .. }))
        ));
    }

    #[test]
    fn season_expands_globs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("01-monza.json"), SHEET).unwrap();
        fs::write(dir.path().join("02-monza.json"), SHEET).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let pattern = format!("{}/*.json", dir.path().display());
        let sheets = expand_sheets(&[pattern.clone()]).unwrap();
        assert_eq!(sheets.len(), 2);

        let season = season(&Config::default(), &[pattern]).unwrap();
        let leader = season.leader().unwrap();
        assert_eq!(leader.user, "ana");
        assert_eq!(leader.races, 2);
    }

    #[test]
    fn teams_total_their_members() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("monza.json"), SHEET).unwrap();
        let roster = dir.path().join("teams.json");
        fs::write(&roster, r#"{"red": ["ana", "ben"], "blue": ["zed"]}"#).unwrap();

        let pattern = format!("{}/*.json", dir.path().display());
        let standings = teams(&Config::default(), &roster, &[pattern]).unwrap();
        assert_eq!(standings.standings.len(), 1);
        assert_eq!(standings.standings[0].team, "red");
        assert_eq!(standings.standings[0].scoring_members, 2);

        let mut out = Vec::new();
        write_teams(&mut out, &standings).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("red"));
    }

    #[test]
    fn unmatched_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/*.json", dir.path().display());
        assert!(matches!(expand_sheets(&[pattern]), Err(Error::NoMatch(_))));
    }

    #[test]
    fn leaderboard_table_lists_every_entrant() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("monza.json");
        fs::write(&path, SHEET).unwrap();

        let leaderboard = race(&Config::default(), &path, true).unwrap();
        let mut out = Vec::new();
        write_leaderboard(&mut out, &leaderboard).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Monza (final)\n"));
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(1).unwrap().contains("ana"));
    }
}
