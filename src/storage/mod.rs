//! Storage layer for fixture and result data.
//!
//! Organized into logical components:
//! - `models`: validated fixture/team value types and wire-format records
//! - `schema`: database connection and schema management
//! - `queries`: read/write operations and the [`ResultStore`] implementation
//!
//! The analysis engine only ever sees the [`ResultStore`] trait; the bundled
//! SQLite implementation is one provider of it.

pub mod models;
pub mod queries;
pub mod schema;


pub use models::{Fixture, FixtureRecord, Team, TeamRecord};
pub use schema::FixtureDatabase;

use crate::types::{Gameweek, TeamId};
use anyhow::Result;

/// Read contract over stored fixtures and results.
///
/// All reads return value snapshots; implementations must order
/// "most recent first" queries by kickoff time descending.
pub trait ResultStore {
    /// Fixtures involving `team`, most recent first. With `finished_only`,
    /// restricts to completed matches.
    fn fixtures_for_team(&self, team: TeamId, limit: u32, finished_only: bool)
        -> Result<Vec<Fixture>>;

    /// Finished meetings between the two teams at either venue, most recent
    /// first.
    fn fixtures_between_teams(&self, team1: TeamId, team2: TeamId, limit: u32)
        -> Result<Vec<Fixture>>;

    /// Fixtures for `team` with gameweek in `[start, end]`, ordered by
    /// gameweek then kickoff. `finished` of `None` returns both finished and
    /// scheduled fixtures.
    fn fixtures_in_gameweek_range(
        &self,
        team: TeamId,
        start: Gameweek,
        end: Gameweek,
        finished: Option<bool>,
    ) -> Result<Vec<Fixture>>;

    /// All unfinished fixtures with gameweek in `[start, end]`, ordered by
    /// gameweek then kickoff.
    fn upcoming_fixtures(&self, start: Gameweek, end: Gameweek) -> Result<Vec<Fixture>>;

    /// Display name for a team, falling back to `"Team {id}"` when the team
    /// is not stored.
    fn team_name(&self, team: TeamId) -> Result<String>;

    /// All stored teams.
    fn teams(&self) -> Result<Vec<Team>>;

    /// Earliest gameweek with an unfinished fixture, defaulting to gameweek 1
    /// when everything is finished or the store is empty.
    fn current_gameweek(&self) -> Result<Gameweek>;
}
