use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::{Path, PathBuf};

/// race-scorer: score race predictions against official results
///
/// Compares each prediction's finishing order, podium and side events with
/// the published result and multiplies the base points by every bonus earned.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to configuration file.
    ///
    /// Without one the built-in multiplier table and rules are used, with
    /// `RACE_SCORER_*` environment overrides applied in both cases.
    #[arg(short, long, global = true, value_parser = validate_file)]
    pub conffile: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Score one prediction, printing the breakdown as JSON.
    Score {
        /// Prediction file (JSON).
        #[arg(short, long, value_parser = validate_file)]
        prediction: PathBuf,

        /// Official result file (JSON). Omit while the race is undecided.
        #[arg(short, long, value_parser = validate_file)]
        result: Option<PathBuf>,

        /// Base points from the points service.
        #[arg(short, long, value_parser = validate_points)]
        base_points: f64,
    },

    /// Score every entry of a race sheet.
    Race {
        /// Race sheet file (JSON).
        #[arg(value_parser = validate_file)]
        sheet: PathBuf,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Refuse to score a result that fails validation.
        #[arg(long)]
        strict: bool,
    },

    /// Accumulate season standings over race sheets.
    Season {
        /// Race sheet files or glob patterns.
        #[arg(required = true)]
        sheets: Vec<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Sum season points per team.
    Teams {
        /// Team rosters (JSON object of team name to member users).
        #[arg(short, long, value_parser = validate_file)]
        roster: PathBuf,

        /// Race sheet files or glob patterns.
        #[arg(required = true)]
        sheets: Vec<String>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML.
    Config,
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.is_file() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

/// Validate base points: any finite, non-negative number.
#[inline(always)]
fn validate_points(points: &str) -> Result<f64, String> {
    let points: f64 = points
        .parse()
        .map_err(|_| format!("`{points}` is not a number"))?;
    if points.is_finite() && points >= 0.0 {
        Ok(points)
    } else {
        Err("Base points must be a finite, non-negative number".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_season_patterns() {
        let cli = Cli::try_parse_from(["race-scorer", "season", "a.json", "races/*.json", "--json"])
            .unwrap();
        match cli.command {
            Command::Season { sheets, json } => {
                assert_eq!(sheets, vec!["a.json", "races/*.json"]);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn teams_requires_a_roster() {
        let err = Cli::try_parse_from(["race-scorer", "teams", "races/*.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn score_requires_existing_prediction() {
        let err = Cli::try_parse_from([
            "race-scorer",
            "score",
            "--prediction",
            "/definitely/not/here.json",
            "--base-points",
            "10",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn base_points_reject_negative_and_nan() {
        assert!(validate_points("-1").is_err());
        assert!(validate_points("NaN").is_err());
        assert!(validate_points("inf").is_err());
        assert!(validate_points("ten").is_err());
        assert_eq!(validate_points("12.5"), Ok(12.5));
    }

    proptest! {
        #[test]
        fn finite_points_parse(points in 0.0f64..1e9) {
            prop_assert_eq!(validate_points(&points.to_string()), Ok(points));
        }
    }
}
