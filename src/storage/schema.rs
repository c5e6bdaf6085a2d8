//! Database schema and connection management

use crate::error::FplError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// SQLite-backed store of teams, fixtures, and persisted analysis snapshots.
pub struct FixtureDatabase {
    pub(crate) conn: Connection,
}

impl FixtureDatabase {
    /// Open (or create) the database at its default cache-dir location.
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) a database at an explicit path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests and throwaway analysis runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Path: ~/.cache/fpl-fixtures/fixtures.db
    fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| FplError::Storage {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("fpl-fixtures").join("fixtures.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fixtures (
                id INTEGER PRIMARY KEY,
                gameweek INTEGER NOT NULL,
                team_h INTEGER NOT NULL,
                team_a INTEGER NOT NULL,
                team_h_difficulty INTEGER NOT NULL,
                team_a_difficulty INTEGER NOT NULL,
                kickoff_time TEXT,
                finished INTEGER NOT NULL DEFAULT 0,
                team_h_score INTEGER,
                team_a_score INTEGER
            )",
            [],
        )?;

        // Persisted per-(fixture, team) analysis snapshot, replaced wholesale
        // on each analysis run.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fixture_analysis (
                fixture_id INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                opponent_id INTEGER NOT NULL,
                gameweek INTEGER NOT NULL,
                is_home INTEGER NOT NULL,
                base_difficulty INTEGER NOT NULL,
                advanced_difficulty REAL NOT NULL,
                form_adjusted_difficulty REAL NOT NULL,
                favorability_score REAL NOT NULL,
                confidence INTEGER NOT NULL,
                congestion_level TEXT NOT NULL,
                congestion_score REAL NOT NULL,
                degraded INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (fixture_id, team_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_fixtures_team_h
             ON fixtures(team_h, kickoff_time)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_fixtures_team_a
             ON fixtures(team_a, kickoff_time)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_fixtures_gameweek
             ON fixtures(gameweek, finished)",
            [],
        )?;

        Ok(())
    }
}
