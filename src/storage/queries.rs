//! Read/write operations and the `ResultStore` implementation

use super::{models::*, schema::FixtureDatabase, ResultStore};
use crate::analysis::models::FixtureAssessment;
use crate::error::FplError;
use crate::types::{DifficultyRating, FixtureId, Gameweek, TeamId};
use anyhow::Result;
use rusqlite::{params, Row};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

const FIXTURE_COLUMNS: &str = "id, gameweek, team_h, team_a, team_h_difficulty,
     team_a_difficulty, kickoff_time, finished, team_h_score, team_a_score";

/// Fixture row exactly as stored, before range validation.
struct RawFixtureRow {
    id: u32,
    gameweek: i64,
    team_h: u32,
    team_a: u32,
    team_h_difficulty: i64,
    team_a_difficulty: i64,
    kickoff_time: Option<String>,
    finished: bool,
    team_h_score: Option<u32>,
    team_a_score: Option<u32>,
}

impl RawFixtureRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            gameweek: row.get(1)?,
            team_h: row.get(2)?,
            team_a: row.get(3)?,
            team_h_difficulty: row.get(4)?,
            team_a_difficulty: row.get(5)?,
            kickoff_time: row.get(6)?,
            finished: row.get(7)?,
            team_h_score: row.get(8)?,
            team_a_score: row.get(9)?,
        })
    }

    fn validate(self) -> crate::error::Result<Fixture> {
        let score = match (self.finished, self.team_h_score, self.team_a_score) {
            (true, Some(h), Some(a)) => Some((h, a)),
            (true, _, _) => {
                return Err(FplError::MissingScore {
                    fixture_id: self.id,
                })
            }
            (false, _, _) => None,
        };

        Ok(Fixture::new(
            FixtureId::new(self.id),
            Gameweek::new(self.gameweek)?,
            TeamId::new(self.team_h),
            TeamId::new(self.team_a),
            DifficultyRating::new(self.team_h_difficulty)?,
            DifficultyRating::new(self.team_a_difficulty)?,
            self.kickoff_time,
            score,
        ))
    }
}

impl FixtureDatabase {
    /// Insert or update a team.
    pub fn upsert_team(&self, team: &Team) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO teams (id, name) VALUES (?, ?)",
            params![team.id.as_u32(), team.name],
        )?;
        Ok(())
    }

    /// Insert or update a fixture.
    pub fn upsert_fixture(&self, fixture: &Fixture) -> Result<()> {
        let (home_score, away_score) = match fixture.score() {
            Some((h, a)) => (Some(h), Some(a)),
            None => (None, None),
        };

        self.conn.execute(
            "INSERT OR REPLACE INTO fixtures
             (id, gameweek, team_h, team_a, team_h_difficulty, team_a_difficulty,
              kickoff_time, finished, team_h_score, team_a_score)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                fixture.id().as_u32(),
                fixture.gameweek().as_u8(),
                fixture.home().as_u32(),
                fixture.away().as_u32(),
                fixture.home_difficulty().as_u8(),
                fixture.away_difficulty().as_u8(),
                fixture.kickoff_time(),
                fixture.finished(),
                home_score,
                away_score,
            ],
        )?;
        Ok(())
    }

    /// Replace the persisted analysis snapshot with a fresh batch.
    pub fn replace_analysis_snapshot(&self, assessments: &[FixtureAssessment]) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

        self.conn.execute("DELETE FROM fixture_analysis", [])?;

        for assessment in assessments {
            let analysis = &assessment.analysis;
            self.conn.execute(
                "INSERT OR REPLACE INTO fixture_analysis
                 (fixture_id, team_id, opponent_id, gameweek, is_home,
                  base_difficulty, advanced_difficulty, form_adjusted_difficulty,
                  favorability_score, confidence, congestion_level,
                  congestion_score, degraded, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    analysis.fixture_id.as_u32(),
                    analysis.team_id.as_u32(),
                    analysis.opponent_id.as_u32(),
                    analysis.gameweek.as_u8(),
                    analysis.is_home,
                    analysis.base_difficulty.as_u8(),
                    analysis.advanced_difficulty,
                    analysis.form_adjusted_difficulty,
                    analysis.favorability_score,
                    analysis.confidence,
                    analysis.congestion.level.to_string(),
                    analysis.congestion.score,
                    assessment.degraded,
                    now,
                ],
            )?;
        }

        Ok(())
    }

    /// Number of persisted analysis rows.
    pub fn analysis_snapshot_len(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM fixture_analysis", [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }

    /// Run a fixture query and decode rows, skipping malformed ones with a
    /// warning rather than failing the whole read.
    fn query_fixtures<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Fixture>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| RawFixtureRow::from_row(row))?;

        let mut fixtures = Vec::new();
        for row in rows {
            let raw = row?;
            let fixture_id = raw.id;
            match raw.validate() {
                Ok(fixture) => fixtures.push(fixture),
                Err(err) => {
                    warn!(fixture_id, %err, "skipping malformed fixture row");
                }
            }
        }
        Ok(fixtures)
    }
}

impl ResultStore for FixtureDatabase {
    fn fixtures_for_team(
        &self,
        team: TeamId,
        limit: u32,
        finished_only: bool,
    ) -> Result<Vec<Fixture>> {
        let sql = format!(
            "SELECT {FIXTURE_COLUMNS} FROM fixtures
             WHERE (team_h = ?1 OR team_a = ?1) {}
             ORDER BY kickoff_time DESC
             LIMIT ?2",
            if finished_only { "AND finished = 1" } else { "" },
        );
        self.query_fixtures(&sql, params![team.as_u32(), limit])
    }

    fn fixtures_between_teams(
        &self,
        team1: TeamId,
        team2: TeamId,
        limit: u32,
    ) -> Result<Vec<Fixture>> {
        let sql = format!(
            "SELECT {FIXTURE_COLUMNS} FROM fixtures
             WHERE ((team_h = ?1 AND team_a = ?2) OR (team_h = ?2 AND team_a = ?1))
               AND finished = 1
             ORDER BY kickoff_time DESC
             LIMIT ?3"
        );
        self.query_fixtures(&sql, params![team1.as_u32(), team2.as_u32(), limit])
    }

    fn fixtures_in_gameweek_range(
        &self,
        team: TeamId,
        start: Gameweek,
        end: Gameweek,
        finished: Option<bool>,
    ) -> Result<Vec<Fixture>> {
        let finished_clause = match finished {
            Some(true) => "AND finished = 1",
            Some(false) => "AND finished = 0",
            None => "",
        };
        let sql = format!(
            "SELECT {FIXTURE_COLUMNS} FROM fixtures
             WHERE (team_h = ?1 OR team_a = ?1)
               AND gameweek BETWEEN ?2 AND ?3
               {finished_clause}
             ORDER BY gameweek, kickoff_time"
        );
        self.query_fixtures(&sql, params![team.as_u32(), start.as_u8(), end.as_u8()])
    }

    fn upcoming_fixtures(&self, start: Gameweek, end: Gameweek) -> Result<Vec<Fixture>> {
        let sql = format!(
            "SELECT {FIXTURE_COLUMNS} FROM fixtures
             WHERE gameweek BETWEEN ?1 AND ?2
               AND finished = 0
             ORDER BY gameweek, kickoff_time"
        );
        self.query_fixtures(&sql, params![start.as_u8(), end.as_u8()])
    }

    fn team_name(&self, team: TeamId) -> Result<String> {
        let mut stmt = self.conn.prepare("SELECT name FROM teams WHERE id = ?")?;
        match stmt.query_row(params![team.as_u32()], |row| row.get::<_, String>(0)) {
            Ok(name) => Ok(name),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(format!("Team {}", team)),
            Err(e) => Err(e.into()),
        }
    }

    fn teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM teams ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Team {
                id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    fn current_gameweek(&self) -> Result<Gameweek> {
        let min_gw: Option<i64> = self.conn.query_row(
            "SELECT MIN(gameweek) FROM fixtures WHERE finished = 0",
            [],
            |row| row.get(0),
        )?;
        Ok(Gameweek::clamped(min_gw.unwrap_or(1)))
    }
}
