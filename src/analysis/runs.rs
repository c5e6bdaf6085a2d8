//! Fixture run aggregation: run summaries, team rankings, transfer timing.

use crate::cache::AnalysisCache;
use crate::config::EngineConfig;
use crate::storage::ResultStore;
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::congestion::{CongestionAnalyzer, DEFAULT_WINDOW_DAYS};
use super::models::{
    CongestionLevel, FixtureRunSummary, RankedTeam, RunRecommendation, TransferSuggestion,
};

/// Number of upcoming gameweeks considered per transfer-timing candidate.
const TRANSFER_LOOKAHEAD_GAMEWEEKS: u8 = 6;
/// Candidate transfer gameweeks examined beyond the current one.
const TRANSFER_CANDIDATE_GAMEWEEKS: u8 = 3;
/// Cap on returned transfer suggestions.
const MAX_TRANSFER_SUGGESTIONS: usize = 15;

/// Scans each team's upcoming fixtures over a rolling gameweek window.
pub struct FixtureRunAggregator<'a> {
    store: &'a dyn ResultStore,
    congestion: CongestionAnalyzer<'a>,
}

impl<'a> FixtureRunAggregator<'a> {
    pub fn new(
        store: &'a dyn ResultStore,
        cache: &'a dyn AnalysisCache,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            store,
            congestion: CongestionAnalyzer::new(store, cache, config),
        }
    }

    /// Summarize every team's unfinished fixtures in
    /// `[current_gameweek, current_gameweek + gameweeks_ahead]` (capped at
    /// the end of the season). Teams with no fixtures in the window are
    /// omitted. Sorted easiest run first.
    pub fn analyze_fixture_runs(&self, gameweeks_ahead: u8) -> Result<Vec<FixtureRunSummary>> {
        let start = self.store.current_gameweek()?;
        let end = start.ahead(gameweeks_ahead);

        let mut runs = Vec::new();

        for team in self.store.teams()? {
            let fixtures =
                self.store
                    .fixtures_in_gameweek_range(team.id, start, end, Some(false))?;
            if fixtures.is_empty() {
                continue;
            }

            let difficulties: Vec<f64> = fixtures
                .iter()
                .filter_map(|f| f.difficulty_for(team.id))
                .map(|d| d.as_f64())
                .collect();

            let fixture_count = difficulties.len() as u32;
            let average_difficulty =
                difficulties.iter().sum::<f64>() / difficulties.len() as f64;
            let easy_fixtures = difficulties.iter().filter(|&&d| d <= 2.0).count() as u32;
            let hard_fixtures = difficulties.iter().filter(|&&d| d >= 4.0).count() as u32;
            let home_fixtures = fixtures.iter().filter(|f| f.home() == team.id).count() as u32;
            let away_fixtures = fixture_count - home_fixtures;

            let congestion = self.congestion.calculate_fixture_congestion(
                team.id,
                start.ahead(3),
                DEFAULT_WINDOW_DAYS,
            )?;

            let recommendation = classify_run(
                average_difficulty,
                easy_fixtures,
                hard_fixtures,
                congestion.level,
            );

            runs.push(FixtureRunSummary {
                team_id: team.id,
                team_name: team.name,
                start_gameweek: start,
                end_gameweek: end,
                fixture_count,
                average_difficulty,
                easy_fixtures,
                hard_fixtures,
                home_fixtures,
                away_fixtures,
                congestion_level: congestion.level,
                recommendation,
            });
        }

        runs.sort_by(|a, b| {
            a.average_difficulty
                .partial_cmp(&b.average_difficulty)
                .unwrap_or(Ordering::Equal)
        });

        Ok(runs)
    }

    /// Teams with the best upcoming runs, ranked by fixture score descending.
    /// Runs with fewer than `min_fixtures` fixtures are excluded.
    pub fn get_best_fixture_teams(
        &self,
        gameweeks_ahead: u8,
        min_fixtures: u32,
        limit: usize,
    ) -> Result<Vec<RankedTeam>> {
        let runs = self.analyze_fixture_runs(gameweeks_ahead)?;

        let mut ranked: Vec<RankedTeam> = runs
            .into_iter()
            .filter(|run| run.fixture_count >= min_fixtures)
            .map(|run| {
                let fixture_score = fixture_score(&run);
                RankedTeam {
                    team_id: run.team_id,
                    team_name: run.team_name,
                    fixture_count: run.fixture_count,
                    average_difficulty: run.average_difficulty,
                    easy_fixtures: run.easy_fixtures,
                    hard_fixtures: run.hard_fixtures,
                    home_fixtures: run.home_fixtures,
                    congestion_level: run.congestion_level,
                    fixture_score,
                    recommendation: run.recommendation,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.fixture_score
                .partial_cmp(&a.fixture_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(limit);

        Ok(ranked)
    }

    /// Suggested transfer gameweeks: each of the next three gameweeks is a
    /// candidate, and teams whose six-gameweek run qualifies (average
    /// difficulty ≤ 2.5 with at least two easy fixtures) are surfaced at the
    /// earliest candidate, deduplicated by team name.
    pub fn get_transfer_timing_recommendations(&self) -> Result<Vec<TransferSuggestion>> {
        let current = self.store.current_gameweek()?;
        let mut suggestions = Vec::new();

        for offset in 1..=TRANSFER_CANDIDATE_GAMEWEEKS {
            let target = current.ahead(offset);
            let runs = self.analyze_fixture_runs(TRANSFER_LOOKAHEAD_GAMEWEEKS)?;

            for run in runs {
                if run.average_difficulty <= 2.5 && run.easy_fixtures >= 2 {
                    suggestions.push(TransferSuggestion {
                        team_id: run.team_id,
                        reasoning: format!(
                            "Easy run of {} fixtures starting {}",
                            run.easy_fixtures, run.start_gameweek
                        ),
                        team_name: run.team_name,
                        recommended_transfer_gameweek: target,
                        fixture_run_start: run.start_gameweek,
                        average_difficulty: run.average_difficulty,
                        easy_fixtures: run.easy_fixtures,
                    });
                }
            }
        }

        // First occurrence wins, so every team lands on its earliest
        // candidate gameweek.
        let mut seen = HashSet::new();
        let mut unique: Vec<TransferSuggestion> = suggestions
            .into_iter()
            .filter(|s| seen.insert(s.team_name.clone()))
            .collect();

        unique.sort_by_key(|s| s.recommended_transfer_gameweek);
        unique.truncate(MAX_TRANSFER_SUGGESTIONS);

        Ok(unique)
    }
}

/// Classify a fixture run; evaluated in order, first match wins.
pub(crate) fn classify_run(
    avg_difficulty: f64,
    easy_fixtures: u32,
    hard_fixtures: u32,
    congestion_level: CongestionLevel,
) -> RunRecommendation {
    if avg_difficulty <= 2.0 && easy_fixtures >= 3 {
        RunRecommendation::Excellent
    } else if avg_difficulty <= 2.5 && easy_fixtures >= 2 {
        RunRecommendation::Good
    } else if avg_difficulty >= 4.0 || hard_fixtures >= 3 {
        RunRecommendation::Avoid
    } else if congestion_level == CongestionLevel::High {
        RunRecommendation::Caution
    } else {
        RunRecommendation::Neutral
    }
}

/// Derived fixture score in [0, 100]; higher is better.
pub(crate) fn fixture_score(run: &FixtureRunSummary) -> f64 {
    let base_score = (6.0 - run.average_difficulty) * 20.0;
    let easy_bonus = run.easy_fixtures as f64 * 10.0;
    let hard_penalty = run.hard_fixtures as f64 * 15.0;
    let home_bonus = run.home_fixtures as f64 * 5.0;
    let congestion_penalty = match run.congestion_level {
        CongestionLevel::High => 25.0,
        CongestionLevel::Medium => 15.0,
        CongestionLevel::Low | CongestionLevel::None => 0.0,
    };

    (base_score + easy_bonus - hard_penalty + home_bonus - congestion_penalty).clamp(0.0, 100.0)
}
