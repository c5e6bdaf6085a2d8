use super::*;
use crate::analysis::models::CongestionLevel;
use crate::cache::NoopCache;
use crate::storage::FixtureDatabase;
use crate::types::{FixtureId, Gameweek};

fn form_with_score(team: u32, form_score: f64) -> FormSnapshot {
    FormSnapshot {
        form_score,
        ..FormSnapshot::neutral(TeamId::new(team))
    }
}

fn congestion_with_score(score: f64) -> CongestionProfile {
    CongestionProfile {
        score,
        ..CongestionProfile::neutral(TeamId::new(1), Gameweek::default())
    }
}

fn test_fixture(home: u32, away: u32, home_diff: i64, away_diff: i64) -> Fixture {
    Fixture::new(
        FixtureId::new(500),
        Gameweek::new(10).unwrap(),
        TeamId::new(home),
        TeamId::new(away),
        DifficultyRating::new(home_diff).unwrap(),
        DifficultyRating::new(away_diff).unwrap(),
        Some("2026-11-07T15:00:00Z".to_string()),
        None,
    )
}

#[test]
fn test_form_multiplier_venue_adjustment() {
    let even = form_with_score(1, 50.0);
    let opponent = form_with_score(2, 50.0);

    assert!((form_multiplier(&even, &opponent, true) - 0.9).abs() < 1e-9);
    assert!((form_multiplier(&even, &opponent, false) - 1.1).abs() < 1e-9);
}

#[test]
fn test_form_multiplier_tracks_form_gap() {
    // Opponent in much better form makes the fixture harder.
    let cold = form_with_score(1, 20.0);
    let hot = form_with_score(2, 90.0);

    let away = form_multiplier(&cold, &hot, false);
    assert!((away - (1.0 + 70.0 / 200.0) * 1.1).abs() < 1e-9);

    let reversed = form_multiplier(&hot, &cold, true);
    assert!((reversed - (1.0 - 70.0 / 200.0) * 0.9).abs() < 1e-9);
}

#[test]
fn test_form_multiplier_is_bounded() {
    let floor = form_with_score(1, 100.0);
    let ceiling = form_with_score(2, 0.0);

    assert_eq!(form_multiplier(&floor, &ceiling, true), 0.5);
    assert_eq!(form_multiplier(&ceiling, &floor, false), 1.5);
}

#[test]
fn test_favorability_easy_home_fixture() {
    // Base 2 at home with even form, neutral history, light congestion:
    // 60 + 0 + 10 + 0 - 3 = 67.
    let score = favorability_score(
        DifficultyRating::new(2).unwrap(),
        &form_with_score(1, 50.0),
        &form_with_score(2, 50.0),
        &HeadToHeadRecord::neutral(TeamId::new(1), TeamId::new(2)),
        &congestion_with_score(0.2),
        true,
    );
    assert!((score - 67.0).abs() < 1e-9);
}

#[test]
fn test_favorability_is_bounded() {
    let best = favorability_score(
        DifficultyRating::new(1).unwrap(),
        &form_with_score(1, 100.0),
        &form_with_score(2, 0.0),
        &HeadToHeadRecord {
            team1_win_rate: 1.0,
            ..HeadToHeadRecord::neutral(TeamId::new(1), TeamId::new(2))
        },
        &congestion_with_score(0.0),
        true,
    );
    assert_eq!(best, 100.0);

    let worst = favorability_score(
        DifficultyRating::new(5).unwrap(),
        &form_with_score(1, 0.0),
        &form_with_score(2, 100.0),
        &HeadToHeadRecord {
            team1_win_rate: 0.0,
            ..HeadToHeadRecord::neutral(TeamId::new(1), TeamId::new(2))
        },
        &congestion_with_score(1.0),
        false,
    );
    assert_eq!(worst, 0.0);
}

#[test]
fn test_final_difficulty_fuses_all_signals() {
    // 3 * 1.1 + 0.6 * 2 + (0.5 - 0.25) * 2 = 5.0
    let difficulty = final_difficulty(DifficultyRating::new(3).unwrap(), 1.1, 0.6, 0.25);
    assert!((difficulty - 5.0).abs() < 1e-9);
}

#[test]
fn test_final_difficulty_is_bounded() {
    assert_eq!(
        final_difficulty(DifficultyRating::new(1).unwrap(), 0.5, 0.0, 1.0),
        1.0
    );
    assert!(final_difficulty(DifficultyRating::new(5).unwrap(), 1.5, 1.0, 0.0) <= 10.0);
}

#[test]
fn test_confidence_rises_with_history_and_falls_with_congestion() {
    let full_history = FormSnapshot {
        games_played: 6,
        ..FormSnapshot::neutral(TeamId::new(1))
    };
    let some_history = FormSnapshot {
        games_played: 3,
        ..FormSnapshot::neutral(TeamId::new(2))
    };
    let h2h = HeadToHeadRecord {
        total_games: 6,
        ..HeadToHeadRecord::neutral(TeamId::new(1), TeamId::new(2))
    };

    // 50 + 20 + 8 + 10 = 88 with no congestion penalty.
    let calm = CongestionProfile {
        level: CongestionLevel::None,
        ..congestion_with_score(0.0)
    };
    assert_eq!(confidence(&full_history, &some_history, &h2h, &calm), 88);

    let congested = CongestionProfile {
        level: CongestionLevel::High,
        ..congestion_with_score(0.8)
    };
    assert_eq!(confidence(&full_history, &some_history, &h2h, &congested), 73);
}

#[test]
fn test_confidence_baseline_without_history() {
    let neutral_team = FormSnapshot::neutral(TeamId::new(1));
    let neutral_opponent = FormSnapshot::neutral(TeamId::new(2));
    let h2h = HeadToHeadRecord::neutral(TeamId::new(1), TeamId::new(2));
    let calm = CongestionProfile {
        level: CongestionLevel::None,
        ..congestion_with_score(0.0)
    };

    assert_eq!(confidence(&neutral_team, &neutral_opponent, &h2h, &calm), 50);
}

#[test]
fn test_full_analysis_with_empty_store_stays_neutral() {
    let db = FixtureDatabase::open_in_memory().unwrap();
    let config = EngineConfig::default();
    let calculator = DifficultyCalculator::new(&db, &NoopCache, &config);

    let fixture = test_fixture(20, 30, 2, 4);
    let outcome = calculator.calculate_advanced_difficulty(&fixture, TeamId::new(20));

    assert!(!outcome.is_degraded());
    let analysis = outcome.analysis();
    assert!(analysis.is_home);
    assert_eq!(analysis.base_difficulty.as_u8(), 2);
    assert_eq!(analysis.confidence, 50);
    assert_eq!(analysis.team_form.games_played, 0);
    // Empty schedule means no congestion contribution.
    assert_eq!(analysis.congestion.score, 0.0);
    assert!((analysis.form_multiplier - 0.9).abs() < 1e-9);
    assert!((analysis.advanced_difficulty - 2.0 * 0.9).abs() < 1e-9);
}

#[test]
fn test_team_not_in_fixture_degrades() {
    let db = FixtureDatabase::open_in_memory().unwrap();
    let config = EngineConfig::default();
    let calculator = DifficultyCalculator::new(&db, &NoopCache, &config);

    let fixture = test_fixture(20, 30, 2, 4);
    let outcome = calculator.calculate_advanced_difficulty(&fixture, TeamId::new(99));

    assert!(outcome.is_degraded());
    let analysis = outcome.analysis();
    // The stray team is treated as the away side.
    assert!(!analysis.is_home);
    assert_eq!(analysis.base_difficulty.as_u8(), 4);
    assert_eq!(analysis.confidence, 50);
    assert_eq!(analysis.form_multiplier, 1.0);
    assert_eq!(analysis.advanced_difficulty, 4.0);
    assert!((analysis.favorability_score - 40.0).abs() < 1e-9);
}

#[test]
fn test_away_side_analysis_uses_away_rating() {
    let db = FixtureDatabase::open_in_memory().unwrap();
    let config = EngineConfig::default();
    let calculator = DifficultyCalculator::new(&db, &NoopCache, &config);

    let fixture = test_fixture(20, 30, 2, 4);
    let outcome = calculator.calculate_advanced_difficulty(&fixture, TeamId::new(30));

    let analysis = outcome.analysis();
    assert!(!analysis.is_home);
    assert_eq!(analysis.opponent_id, TeamId::new(20));
    assert_eq!(analysis.base_difficulty.as_u8(), 4);
}
