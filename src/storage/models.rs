//! Data models for the storage layer

use crate::error::{FplError, Result};
use crate::types::{DifficultyRating, FixtureId, Gameweek, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team known to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// One scheduled or finished match.
///
/// Fields are validated at construction: difficulty ratings are 1-5,
/// gameweeks 1-38, and a final score is present exactly when the fixture is
/// finished (the completion flag is derived from score presence, so the two
/// can never disagree).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    id: FixtureId,
    gameweek: Gameweek,
    team_h: TeamId,
    team_a: TeamId,
    team_h_difficulty: DifficultyRating,
    team_a_difficulty: DifficultyRating,
    kickoff_time: Option<String>,
    score: Option<(u32, u32)>,
}

impl Fixture {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: FixtureId,
        gameweek: Gameweek,
        team_h: TeamId,
        team_a: TeamId,
        team_h_difficulty: DifficultyRating,
        team_a_difficulty: DifficultyRating,
        kickoff_time: Option<String>,
        score: Option<(u32, u32)>,
    ) -> Self {
        Self {
            id,
            gameweek,
            team_h,
            team_a,
            team_h_difficulty,
            team_a_difficulty,
            kickoff_time,
            score,
        }
    }

    pub fn id(&self) -> FixtureId {
        self.id
    }

    pub fn gameweek(&self) -> Gameweek {
        self.gameweek
    }

    pub fn home(&self) -> TeamId {
        self.team_h
    }

    pub fn away(&self) -> TeamId {
        self.team_a
    }

    pub fn home_difficulty(&self) -> DifficultyRating {
        self.team_h_difficulty
    }

    pub fn away_difficulty(&self) -> DifficultyRating {
        self.team_a_difficulty
    }

    /// Raw kickoff timestamp as stored (ISO-8601), if any.
    pub fn kickoff_time(&self) -> Option<&str> {
        self.kickoff_time.as_deref()
    }

    /// Parsed kickoff instant. `None` when the timestamp is missing or not
    /// valid ISO-8601; callers decide whether that is worth a warning.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        let raw = self.kickoff_time.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn finished(&self) -> bool {
        self.score.is_some()
    }

    /// Final (home, away) score, present iff the fixture is finished.
    pub fn score(&self) -> Option<(u32, u32)> {
        self.score
    }

    /// Which side `team` plays on: `Some(true)` for home, `Some(false)` for
    /// away, `None` when the team is not in this fixture.
    pub fn side_of(&self, team: TeamId) -> Option<bool> {
        if team == self.team_h {
            Some(true)
        } else if team == self.team_a {
            Some(false)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        match self.side_of(team)? {
            true => Some(self.team_a),
            false => Some(self.team_h),
        }
    }

    /// Side-appropriate baseline difficulty for `team`.
    pub fn difficulty_for(&self, team: TeamId) -> Option<DifficultyRating> {
        match self.side_of(team)? {
            true => Some(self.team_h_difficulty),
            false => Some(self.team_a_difficulty),
        }
    }

    /// Goals (for, against) from `team`'s perspective, when finished.
    pub fn result_for(&self, team: TeamId) -> Option<(u32, u32)> {
        let (home_goals, away_goals) = self.score?;
        match self.side_of(team)? {
            true => Some((home_goals, away_goals)),
            false => Some((away_goals, home_goals)),
        }
    }
}

/// Fixture row as emitted by the external fetcher's JSON dump.
///
/// The fetcher preserves the upstream field names; `event` is the wire name
/// for gameweek. Conversion into [`Fixture`] validates ranges and the
/// score/finished invariant.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecord {
    pub id: u32,
    #[serde(alias = "gameweek")]
    pub event: Option<i64>,
    pub team_h: u32,
    pub team_a: u32,
    pub team_h_difficulty: i64,
    pub team_a_difficulty: i64,
    pub kickoff_time: Option<String>,
    #[serde(default)]
    pub finished: bool,
    pub team_h_score: Option<u32>,
    pub team_a_score: Option<u32>,
}

impl TryFrom<FixtureRecord> for Fixture {
    type Error = FplError;

    fn try_from(record: FixtureRecord) -> Result<Self> {
        let score = match (record.finished, record.team_h_score, record.team_a_score) {
            (true, Some(h), Some(a)) => Some((h, a)),
            (true, _, _) => {
                return Err(FplError::MissingScore {
                    fixture_id: record.id,
                })
            }
            // Provisional scores on unfinished fixtures are ignored.
            (false, _, _) => None,
        };

        Ok(Fixture::new(
            FixtureId::new(record.id),
            Gameweek::new(record.event.unwrap_or(1))?,
            TeamId::new(record.team_h),
            TeamId::new(record.team_a),
            DifficultyRating::new(record.team_h_difficulty)?,
            DifficultyRating::new(record.team_a_difficulty)?,
            record.kickoff_time,
            score,
        ))
    }
}

/// Team row from the fetcher's bootstrap dump.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub id: u32,
    pub name: String,
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Team {
            id: TeamId::new(record.id),
            name: record.name,
        }
    }
}
