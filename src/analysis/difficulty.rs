//! Advanced difficulty fusion for a single (fixture, team) pair.

use crate::cache::AnalysisCache;
use crate::config::EngineConfig;
use crate::error::FplError;
use crate::storage::{Fixture, ResultStore};
use crate::types::{DifficultyRating, TeamId};
use anyhow::Result;
use tracing::warn;

use super::congestion::{CongestionAnalyzer, DEFAULT_WINDOW_DAYS};
use super::form::FormAnalyzer;
use super::models::{
    CongestionProfile, DifficultyAnalysis, DifficultyOutcome, FormSnapshot, HeadToHeadRecord,
};

/// Fuses the externally supplied baseline rating with form, head-to-head,
/// and congestion signals.
pub struct DifficultyCalculator<'a> {
    form: FormAnalyzer<'a>,
    congestion: CongestionAnalyzer<'a>,
    config: &'a EngineConfig,
}

impl<'a> DifficultyCalculator<'a> {
    pub fn new(
        store: &'a dyn ResultStore,
        cache: &'a dyn AnalysisCache,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            form: FormAnalyzer::new(store, cache, config),
            congestion: CongestionAnalyzer::new(store, cache, config),
            config,
        }
    }

    /// Full difficulty analysis for `team_id`'s side of `fixture`.
    ///
    /// This never fails: if anything in the fusion pipeline errors (a store
    /// failure, a team that is not in the fixture), the result degrades to a
    /// baseline-only analysis carrying neutral constituents and confidence 50.
    pub fn calculate_advanced_difficulty(
        &self,
        fixture: &Fixture,
        team_id: TeamId,
    ) -> DifficultyOutcome {
        match self.full_analysis(fixture, team_id) {
            Ok(analysis) => DifficultyOutcome::Full(analysis),
            Err(err) => {
                warn!(
                    fixture_id = fixture.id().as_u32(),
                    %team_id,
                    %err,
                    "difficulty fusion failed, degrading to baseline analysis"
                );
                DifficultyOutcome::Degraded(self.degraded_analysis(fixture, team_id))
            }
        }
    }

    fn full_analysis(&self, fixture: &Fixture, team_id: TeamId) -> Result<DifficultyAnalysis> {
        let is_home = fixture
            .side_of(team_id)
            .ok_or_else(|| FplError::TeamNotInFixture {
                fixture_id: fixture.id().as_u32(),
                team_id: team_id.as_u32(),
            })?;
        let opponent_id = if is_home { fixture.away() } else { fixture.home() };
        let base_difficulty = if is_home {
            fixture.home_difficulty()
        } else {
            fixture.away_difficulty()
        };

        let team_form = self
            .form
            .calculate_team_form(team_id, self.config.games_back)?;
        let opponent_form = self
            .form
            .calculate_team_form(opponent_id, self.config.games_back)?;
        let head_to_head =
            self.form
                .get_head_to_head_record(team_id, opponent_id, self.config.seasons_back)?;
        let congestion = self.congestion.calculate_fixture_congestion(
            team_id,
            fixture.gameweek(),
            DEFAULT_WINDOW_DAYS,
        )?;

        let form_multiplier = form_multiplier(&team_form, &opponent_form, is_home);
        let form_adjusted_difficulty = base_difficulty.as_f64() * form_multiplier;

        let favorability_score = favorability_score(
            base_difficulty,
            &team_form,
            &opponent_form,
            &head_to_head,
            &congestion,
            is_home,
        );

        let advanced_difficulty = final_difficulty(
            base_difficulty,
            form_multiplier,
            congestion.score,
            head_to_head.team1_win_rate,
        );

        let confidence = confidence(&team_form, &opponent_form, &head_to_head, &congestion);

        Ok(DifficultyAnalysis {
            fixture_id: fixture.id(),
            team_id,
            opponent_id,
            gameweek: fixture.gameweek(),
            is_home,
            base_difficulty,
            form_multiplier,
            form_adjusted_difficulty,
            advanced_difficulty,
            favorability_score,
            confidence,
            team_form,
            opponent_form,
            head_to_head,
            congestion,
        })
    }

    /// Baseline-only fallback. A team id that is on neither side is treated
    /// as the away side so a side-appropriate rating is still produced.
    fn degraded_analysis(&self, fixture: &Fixture, team_id: TeamId) -> DifficultyAnalysis {
        let is_home = fixture.side_of(team_id) == Some(true);
        let opponent_id = if is_home { fixture.away() } else { fixture.home() };
        let base_difficulty = if is_home {
            fixture.home_difficulty()
        } else {
            fixture.away_difficulty()
        };
        let base = base_difficulty.as_f64();

        DifficultyAnalysis {
            fixture_id: fixture.id(),
            team_id,
            opponent_id,
            gameweek: fixture.gameweek(),
            is_home,
            base_difficulty,
            form_multiplier: 1.0,
            form_adjusted_difficulty: base,
            advanced_difficulty: base,
            favorability_score: (6.0 - base) * 20.0,
            confidence: 50,
            team_form: FormSnapshot::neutral(team_id),
            opponent_form: FormSnapshot::neutral(opponent_id),
            head_to_head: HeadToHeadRecord::neutral(team_id, opponent_id),
            congestion: CongestionProfile::neutral(team_id, fixture.gameweek()),
        }
    }
}

/// How current form shifts the baseline difficulty, bounded to [0.5, 1.5].
fn form_multiplier(team_form: &FormSnapshot, opponent_form: &FormSnapshot, is_home: bool) -> f64 {
    let form_difference = opponent_form.form_score - team_form.form_score;
    let mut multiplier = 1.0 + form_difference / 200.0;

    if is_home {
        multiplier *= 0.9;
    } else {
        multiplier *= 1.1;
    }

    multiplier.clamp(0.5, 1.5)
}

/// Overall favorability in [0, 100]; higher is better for the team.
fn favorability_score(
    base_difficulty: DifficultyRating,
    team_form: &FormSnapshot,
    opponent_form: &FormSnapshot,
    head_to_head: &HeadToHeadRecord,
    congestion: &CongestionProfile,
    is_home: bool,
) -> f64 {
    // Inverse of the baseline rating on a 15-75 scale.
    let mut score = (6.0 - base_difficulty.as_f64()) * 15.0;

    score += (team_form.form_score - opponent_form.form_score) / 4.0;

    if is_home {
        score += 10.0;
    }

    score += (head_to_head.team1_win_rate - 0.5) * 20.0;
    score -= congestion.score * 15.0;

    score.clamp(0.0, 100.0)
}

/// Advanced difficulty on the 1-10 scale, lower is easier.
fn final_difficulty(
    base_difficulty: DifficultyRating,
    form_multiplier: f64,
    congestion_score: f64,
    h2h_win_rate: f64,
) -> f64 {
    let difficulty = base_difficulty.as_f64() * form_multiplier
        + congestion_score * 2.0
        + (0.5 - h2h_win_rate) * 2.0;

    difficulty.clamp(1.0, 10.0)
}

/// Confidence in the analysis, 0-100. More history raises it; heavy
/// congestion lowers it.
fn confidence(
    team_form: &FormSnapshot,
    opponent_form: &FormSnapshot,
    head_to_head: &HeadToHeadRecord,
    congestion: &CongestionProfile,
) -> u8 {
    let mut confidence: i32 = 50;

    if team_form.games_played >= 5 {
        confidence += 20;
    } else if team_form.games_played >= 3 {
        confidence += 10;
    }

    if opponent_form.games_played >= 5 {
        confidence += 15;
    } else if opponent_form.games_played >= 3 {
        confidence += 8;
    }

    if head_to_head.total_games >= 6 {
        confidence += 10;
    } else if head_to_head.total_games >= 3 {
        confidence += 5;
    }

    match congestion.level {
        super::models::CongestionLevel::High => confidence -= 15,
        super::models::CongestionLevel::Medium => confidence -= 8,
        _ => {}
    }

    confidence.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests;
