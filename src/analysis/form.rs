//! Team form and head-to-head analysis.

use crate::cache::AnalysisCache;
use crate::config::EngineConfig;
use crate::storage::ResultStore;
use crate::types::TeamId;
use anyhow::Result;
use std::time::Duration;
use tracing::warn;

use super::models::{FormSnapshot, HeadToHeadRecord};

/// Computes rolling-window form and head-to-head records from stored results.
pub struct FormAnalyzer<'a> {
    store: &'a dyn ResultStore,
    cache: &'a dyn AnalysisCache,
    config: &'a EngineConfig,
}

impl<'a> FormAnalyzer<'a> {
    pub fn new(
        store: &'a dyn ResultStore,
        cache: &'a dyn AnalysisCache,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            store,
            cache,
            config,
        }
    }

    /// Compute a team's form over its `games_back` most recent finished
    /// fixtures.
    ///
    /// A team with no usable results gets the neutral snapshot (form 50.0,
    /// strengths 1.0) rather than an error; store failures still propagate.
    pub fn calculate_team_form(&self, team_id: TeamId, games_back: u32) -> Result<FormSnapshot> {
        let cache_key = format!("form:{}:{}", team_id, games_back);
        if let Some(value) = self.cache.get(&cache_key) {
            if let Ok(snapshot) = serde_json::from_value::<FormSnapshot>(value) {
                return Ok(snapshot);
            }
        }

        let fixtures = self.store.fixtures_for_team(team_id, games_back, true)?;

        let mut wins = 0u32;
        let mut draws = 0u32;
        let mut losses = 0u32;
        let mut goals_for = 0u32;
        let mut goals_against = 0u32;
        let mut games_played = 0u32;

        for fixture in &fixtures {
            let Some((team_goals, opp_goals)) = fixture.result_for(team_id) else {
                warn!(
                    fixture_id = fixture.id().as_u32(),
                    %team_id,
                    "skipping fixture without a usable result"
                );
                continue;
            };

            goals_for += team_goals;
            goals_against += opp_goals;
            games_played += 1;

            if team_goals > opp_goals {
                wins += 1;
            } else if team_goals == opp_goals {
                draws += 1;
            } else {
                losses += 1;
            }
        }

        if games_played == 0 {
            return Ok(FormSnapshot::neutral(team_id));
        }

        let points = (wins * 3 + draws) as f64;
        let form_score = points / (games_played as f64 * 3.0) * 100.0;

        let avg_goals = self.config.league_avg_goals;
        let attack_strength = (goals_for as f64 / games_played as f64) / avg_goals;
        let defense_strength = if goals_against > 0 {
            avg_goals / (goals_against as f64 / games_played as f64)
        } else {
            1.0
        };

        let snapshot = FormSnapshot {
            team_id,
            games_played,
            wins,
            draws,
            losses,
            goals_for,
            goals_against,
            form_score,
            attack_strength,
            defense_strength,
        };

        if let Ok(value) = serde_json::to_value(&snapshot) {
            self.cache
                .put(&cache_key, value, Duration::from_secs(self.config.cache_ttl_secs));
        }

        Ok(snapshot)
    }

    /// Head-to-head record between two teams from `team1`'s perspective,
    /// over up to `seasons_back * 2` finished meetings (two per season).
    ///
    /// No meetings on record yields the neutral 0.5 win rate.
    pub fn get_head_to_head_record(
        &self,
        team1: TeamId,
        team2: TeamId,
        seasons_back: u32,
    ) -> Result<HeadToHeadRecord> {
        let fixtures = self
            .store
            .fixtures_between_teams(team1, team2, seasons_back * 2)?;

        let mut wins = 0u32;
        let mut draws = 0u32;
        let mut losses = 0u32;
        let mut total_games = 0u32;

        for fixture in &fixtures {
            let Some((team1_goals, team2_goals)) = fixture.result_for(team1) else {
                warn!(
                    fixture_id = fixture.id().as_u32(),
                    %team1,
                    %team2,
                    "skipping head-to-head fixture without a usable result"
                );
                continue;
            };

            if team1_goals > team2_goals {
                wins += 1;
            } else if team1_goals == team2_goals {
                draws += 1;
            } else {
                losses += 1;
            }
            total_games += 1;
        }

        let team1_win_rate = if total_games > 0 {
            wins as f64 / total_games as f64
        } else {
            0.5
        };

        Ok(HeadToHeadRecord {
            team1,
            team2,
            total_games,
            team1_wins: wins,
            team1_draws: draws,
            team1_losses: losses,
            team1_win_rate,
        })
    }
}
