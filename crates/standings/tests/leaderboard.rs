#![forbid(unsafe_code)]

use config::{Config, Rounding};
use engine::{EventKey, Events, PodiumStatus, Positions, Prediction, RaceResult, Scorer};
use pretty_assertions::assert_eq;
use standings::{Entry, Error, PositionalPoints, RaceSheet, score_race};

fn result() -> RaceResult {
    RaceResult::new(
        Positions::from_order(["VER", "HAM", "LEC", "NOR", "SAI"]),
        Events::new()
            .with(EventKey::FastestLap, "NOR")
            .with(EventKey::SafetyCar, "Yes")
            .with(EventKey::Dnfs, "1")
            .with(EventKey::DnfDriver, "PER"),
    )
}

fn entry(user: &str, order: &[&str], events: Events) -> Entry {
    Entry {
        user: user.to_string(),
        prediction: Prediction::new(Positions::from_order(order.iter().copied()), events),
        base_points: None,
    }
}

fn sheet(result: Option<RaceResult>) -> RaceSheet {
    RaceSheet {
        grand_prix: "Silverstone".into(),
        result,
        entries: vec![
            // 3 + 3 + 3 base, exact podium, safety car: 9 * 1.5 * 1.5
            entry(
                "ana",
                &["VER", "HAM", "LEC"],
                Events::new().with(EventKey::SafetyCar, "Yes"),
            ),
            // 1 + 1 + 3 base, partial podium, dnf driver: 5 * 1.25 * 1.5
            entry(
                "ben",
                &["HAM", "VER", "LEC"],
                Events::new().with(EventKey::DnfDriver, "per"),
            ),
            // nothing right
            entry("cat", &["ALO", "RUS", "PIA"], Events::new()),
        ],
    }
}

#[test]
fn race_is_ranked_by_final_score() {
    let config = Config::default();
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(&config);

    let leaderboard = score_race(&scorer, &points, &sheet(Some(result()))).unwrap();

    assert!(leaderboard.decided);
    let order: Vec<(usize, &str, f64)> = leaderboard
        .standings
        .iter()
        .map(|s| (s.rank, s.user.as_str(), s.breakdown.final_score))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, "ana", 9.0 * 1.5 * 1.5),
            (2, "ben", 5.0 * 1.25 * 1.5),
            (3, "cat", 0.0),
        ]
    );

    let ana = leaderboard.standing("ana").unwrap();
    assert_eq!(ana.breakdown.podium_status, PodiumStatus::Exact);
    assert_eq!(ana.breakdown.base_points, 9.0);
}

#[test]
fn undecided_race_is_a_preview_of_base_points() {
    let config = Config::default();
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(&config);

    let leaderboard = score_race(&scorer, &points, &sheet(None)).unwrap();

    assert!(!leaderboard.decided);
    assert!(leaderboard.standings.iter().all(|s| s.rank == 1));
    assert!(
        leaderboard
            .standings
            .iter()
            .all(|s| s.breakdown.multiplier == 1.0 && s.breakdown.final_score == 0.0)
    );
}

#[test]
fn supplied_base_points_override_the_service() {
    let config = Config::default();
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(&config);

    let mut sheet = sheet(Some(result()));
    sheet.entries[2].base_points = Some(40.0);

    let leaderboard = score_race(&scorer, &points, &sheet).unwrap();

    let cat = leaderboard.standing("cat").unwrap();
    assert_eq!(cat.rank, 1);
    assert_eq!(cat.breakdown.final_score, 40.0);
}

#[test]
fn truncated_scores_tie() {
    let mut config = Config::default();
    config.scoring.rounding = Rounding::Truncate;
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(&config);

    let mut sheet = sheet(Some(result()));
    sheet.entries[2].base_points = Some(20.0);

    let leaderboard = score_race(&scorer, &points, &sheet).unwrap();

    // 20.25 and 20.0 both truncate to 20
    let ranks: Vec<(usize, &str)> = leaderboard
        .standings
        .iter()
        .map(|s| (s.rank, s.user.as_str()))
        .collect();
    assert_eq!(ranks, vec![(1, "ana"), (1, "cat"), (3, "ben")]);
}

#[test]
fn duplicate_entrant_is_rejected() {
    let config = Config::default();
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(&config);

    let mut sheet = sheet(Some(result()));
    sheet.entries.push(entry("ben", &["VER"], Events::new()));

    let err = score_race(&scorer, &points, &sheet).unwrap_err();
    assert!(matches!(err, Error::DuplicateEntrant { ref user, .. } if user == "ben"));
}

#[test]
fn malformed_result_still_scores() {
    let config = Config::default();
    let scorer = Scorer::new(&config.scoring);
    let points = PositionalPoints::new(&config);

    let broken = RaceResult::new(
        Positions::from_order(["VER", "HAM", "LEC"]),
        Events::new().with(EventKey::Dnfs, "a few"),
    );
    let sheet = sheet(Some(broken));

    assert!(sheet.validate().is_err());
    let leaderboard = score_race(&scorer, &points, &sheet).unwrap();
    assert_eq!(leaderboard.standings.len(), 3);
}
