//! Engine configuration.
//!
//! Everything tunable about the analysis lives here and is passed into the
//! components explicitly; nothing reaches for ambient constants. The
//! continental-competition membership in particular changes every season, so
//! it is injectable configuration rather than a hardcoded set.

use crate::types::TeamId;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// League-average goals per game used to normalize attack/defense strength.
pub const LEAGUE_AVG_GOALS: f64 = 1.3;

/// Tunable parameters for the fixture analysis engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Finished fixtures considered when computing team form.
    pub games_back: u32,
    /// Seasons of history considered for head-to-head records
    /// (two meetings per season).
    pub seasons_back: u32,
    /// League-average goals per game; attack/defense multipliers center on it.
    pub league_avg_goals: f64,
    /// Teams carrying extra continental-competition load this season.
    pub continental_teams: HashSet<TeamId>,
    /// Advisory expiry for cached form/congestion snapshots, in seconds.
    pub cache_ttl_secs: u64,
}

impl EngineConfig {
    /// Load configuration from a JSON file; missing fields take defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn is_continental(&self, team_id: TeamId) -> bool {
        self.continental_teams.contains(&team_id)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            games_back: 6,
            seasons_back: 3,
            league_avg_goals: LEAGUE_AVG_GOALS,
            // 2024-25 snapshot of clubs in European competition.
            continental_teams: (1..=8).map(TeamId::new).collect(),
            cache_ttl_secs: 300,
        }
    }
}
