//! Orchestrates per-fixture assessments across all upcoming fixtures.

use crate::cache::AnalysisCache;
use crate::config::EngineConfig;
use crate::storage::ResultStore;
use anyhow::Result;
use tracing::info;

use super::difficulty::DifficultyCalculator;
use super::models::FixtureAssessment;

/// Runs the difficulty pipeline for both sides of every upcoming fixture in
/// a gameweek window.
pub struct FixtureAnalysisEngine<'a> {
    store: &'a dyn ResultStore,
    calculator: DifficultyCalculator<'a>,
}

impl<'a> FixtureAnalysisEngine<'a> {
    pub fn new(
        store: &'a dyn ResultStore,
        cache: &'a dyn AnalysisCache,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            store,
            calculator: DifficultyCalculator::new(store, cache, config),
        }
    }

    /// Assess both team-sides of every unfinished fixture in
    /// `[current_gameweek, current_gameweek + gameweeks_ahead]`.
    ///
    /// Individual analyses degrade rather than fail; only store errors abort
    /// the batch.
    pub fn analyze_upcoming_fixtures(&self, gameweeks_ahead: u8) -> Result<Vec<FixtureAssessment>> {
        let start = self.store.current_gameweek()?;
        let end = start.ahead(gameweeks_ahead);

        let fixtures = self.store.upcoming_fixtures(start, end)?;
        info!(
            fixture_count = fixtures.len(),
            %start,
            %end,
            "analyzing upcoming fixtures"
        );

        let mut assessments = Vec::with_capacity(fixtures.len() * 2);

        for fixture in &fixtures {
            for team_id in [fixture.home(), fixture.away()] {
                let outcome = self.calculator.calculate_advanced_difficulty(fixture, team_id);
                let degraded = outcome.is_degraded();
                let analysis = outcome.into_analysis();

                assessments.push(FixtureAssessment {
                    team_id,
                    team_name: self.store.team_name(team_id)?,
                    fixture_id: fixture.id(),
                    opponent_id: analysis.opponent_id,
                    opponent_name: self.store.team_name(analysis.opponent_id)?,
                    gameweek: fixture.gameweek(),
                    is_home: analysis.is_home,
                    kickoff_time: fixture.kickoff(),
                    degraded,
                    analysis,
                });
            }
        }

        Ok(assessments)
    }
}
