//! Fixture congestion analysis.

use crate::cache::AnalysisCache;
use crate::config::EngineConfig;
use crate::storage::ResultStore;
use crate::types::{Gameweek, TeamId};
use anyhow::Result;
use std::time::Duration;
use tracing::warn;

use super::models::{CongestionLevel, CongestionProfile};

/// Default advisory window passed to [`CongestionAnalyzer::calculate_fixture_congestion`].
pub const DEFAULT_WINDOW_DAYS: u32 = 14;

/// Computes fixture density around a target gameweek.
pub struct CongestionAnalyzer<'a> {
    store: &'a dyn ResultStore,
    cache: &'a dyn AnalysisCache,
    config: &'a EngineConfig,
}

impl<'a> CongestionAnalyzer<'a> {
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

    /// Congestion profile for `team_id` around `gameweek`.
    ///
    /// The window is the ±2-gameweek span clamped to the season, not a
    /// calendar-day span: `_window_days` is advisory and currently unused,
    /// kept so callers carrying the historical parameter keep working.
    ///
    /// Fixtures with missing or unparsable kickoff timestamps still count
    /// toward the fixture total but contribute no day gaps; with no parseable
    /// kickoffs at all, the average gap defaults to a neutral 7 days.
    pub fn calculate_fixture_congestion(
        &self,
        team_id: TeamId,
        gameweek: Gameweek,
        _window_days: u32,
    ) -> Result<CongestionProfile> {
        let cache_key = format!("congestion:{}:{}", team_id, gameweek.as_u8());
        if let Some(value) = self.cache.get(&cache_key) {
            if let Ok(profile) = serde_json::from_value::<CongestionProfile>(value) {
                return Ok(profile);
            }
        }

        let start = gameweek.back(2);
        let end = gameweek.ahead(2);
        let fixtures = self
            .store
            .fixtures_in_gameweek_range(team_id, start, end, None)?;

        let has_continental_football = self.config.is_continental(team_id);

        if fixtures.is_empty() {
            return Ok(CongestionProfile::empty(
                team_id,
                gameweek,
                has_continental_football,
            ));
        }

        let mut kickoffs = Vec::new();
        for fixture in &fixtures {
            match fixture.kickoff() {
                Some(instant) => kickoffs.push(instant),
                None => {
                    if let Some(raw) = fixture.kickoff_time() {
                        warn!(
                            fixture_id = fixture.id().as_u32(),
                            kickoff_time = raw,
                            "skipping unparsable kickoff time"
                        );
                    }
                }
            }
        }
        kickoffs.sort();

        let days_between_fixtures: Vec<i64> = kickoffs
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_days())
            .collect();

        let avg_days_between = if days_between_fixtures.is_empty() {
            7.0
        } else {
            days_between_fixtures.iter().sum::<i64>() as f64
                / days_between_fixtures.len() as f64
        };

        let fixture_count = fixtures.len() as u32;
        let (level, mut score) = classify_congestion(fixture_count, avg_days_between);

        // Continental competition adds midweek load on top of league fixtures.
        if has_continental_football {
            score = (score + 0.2).min(1.0);
        }

        let profile = CongestionProfile {
            team_id,
            gameweek,
            fixture_count,
            days_between_fixtures,
            avg_days_between,
            level,
            score,
            has_continental_football,
        };

        if let Ok(value) = serde_json::to_value(&profile) {
            self.cache
                .put(&cache_key, value, Duration::from_secs(self.config.cache_ttl_secs));
        }

        Ok(profile)
    }
}

/// Congestion classification table; evaluated in order, first match wins.
fn classify_congestion(fixture_count: u32, avg_days_between: f64) -> (CongestionLevel, f64) {
    if fixture_count >= 4 && avg_days_between < 4.0 {
        (CongestionLevel::High, 0.8)
    } else if fixture_count >= 3 && avg_days_between < 5.0 {
        (CongestionLevel::Medium, 0.6)
    } else if fixture_count >= 2 && avg_days_between < 3.0 {
        (CongestionLevel::Medium, 0.5)
    } else {
        (CongestionLevel::Low, 0.2)
    }
}
