//! Error types for the fixture analysis engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("difficulty rating {value} outside valid range 1-5")]
    InvalidDifficulty { value: i64 },

    #[error("gameweek {value} outside valid range 1-38")]
    InvalidGameweek { value: i64 },

    #[error("team {team_id} does not play in fixture {fixture_id}")]
    TeamNotInFixture { fixture_id: u32, team_id: u32 },

    #[error("finished fixture {fixture_id} is missing a final score")]
    MissingScore { fixture_id: u32 },

    #[error("unknown team: {team_id}")]
    UnknownTeam { team_id: u32 },

    #[error("storage error: {message}")]
    Storage { message: String },
}

#[cfg(test)]
mod tests;
