//! Unit tests for error types

use super::*;

#[test]
fn test_invalid_difficulty_display() {
    let err = FplError::InvalidDifficulty { value: 7 };
    assert_eq!(
        err.to_string(),
        "difficulty rating 7 outside valid range 1-5"
    );
}

#[test]
fn test_invalid_gameweek_display() {
    let err = FplError::InvalidGameweek { value: 0 };
    assert_eq!(err.to_string(), "gameweek 0 outside valid range 1-38");
}

#[test]
fn test_team_not_in_fixture_display() {
    let err = FplError::TeamNotInFixture {
        fixture_id: 101,
        team_id: 9,
    };
    assert_eq!(err.to_string(), "team 9 does not play in fixture 101");
}

#[test]
fn test_sqlite_error_conversion() {
    let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
    let err: FplError = sqlite_err.into();
    assert!(matches!(err, FplError::Sqlite(_)));
    assert!(err.to_string().starts_with("database error"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: FplError = json_err.into();
    assert!(matches!(err, FplError::Json(_)));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: FplError = io_err.into();
    assert!(matches!(err, FplError::Io(_)));
}
