//! Value types produced by the analysis engine.
//!
//! All of these are immutable snapshots owned by the call that produced them;
//! they carry team/fixture ids rather than back-references to the store.

use crate::types::{DifficultyRating, FixtureId, Gameweek, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A team's rolling-window form, recomputed fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub team_id: TeamId,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Points-per-game as a percentage of the maximum, in [0, 100].
    pub form_score: f64,
    /// Goals scored per game relative to the league average; 1.0 is average.
    pub attack_strength: f64,
    /// League-average goals over goals conceded per game; 1.0 is average.
    pub defense_strength: f64,
}

impl FormSnapshot {
    /// Neutral snapshot for a team with no usable finished fixtures.
    pub fn neutral(team_id: TeamId) -> Self {
        Self {
            team_id,
            games_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            form_score: 50.0,
            attack_strength: 1.0,
            defense_strength: 1.0,
        }
    }
}

/// Historical record between two teams, from `team1`'s perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub team1: TeamId,
    pub team2: TeamId,
    pub total_games: u32,
    pub team1_wins: u32,
    pub team1_draws: u32,
    pub team1_losses: u32,
    /// In [0, 1]; 0.5 when no meetings are on record.
    pub team1_win_rate: f64,
}

impl HeadToHeadRecord {
    pub fn neutral(team1: TeamId, team2: TeamId) -> Self {
        Self {
            team1,
            team2,
            total_games: 0,
            team1_wins: 0,
            team1_draws: 0,
            team1_losses: 0,
            team1_win_rate: 0.5,
        }
    }
}

/// Categorical fixture-congestion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    None,
    Low,
    Medium,
    High,
}

impl fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CongestionLevel::None => "none",
            CongestionLevel::Low => "low",
            CongestionLevel::Medium => "medium",
            CongestionLevel::High => "high",
        };
        write!(f, "{label}")
    }
}

/// Fixture density around a target gameweek.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionProfile {
    pub team_id: TeamId,
    pub gameweek: Gameweek,
    /// Matches inside the ±2-gameweek window.
    pub fixture_count: u32,
    /// Day gaps between consecutive fixtures with parseable kickoffs.
    pub days_between_fixtures: Vec<i64>,
    /// Mean of the day gaps; 7.0 when no gaps are known.
    pub avg_days_between: f64,
    pub level: CongestionLevel,
    /// Bounded congestion score in [0, 1].
    pub score: f64,
    pub has_continental_football: bool,
}

impl CongestionProfile {
    /// Empty-window profile: no fixtures means no congestion.
    pub fn empty(team_id: TeamId, gameweek: Gameweek, has_continental_football: bool) -> Self {
        Self {
            team_id,
            gameweek,
            fixture_count: 0,
            days_between_fixtures: Vec::new(),
            avg_days_between: 7.0,
            level: CongestionLevel::None,
            score: 0.0,
            has_continental_football,
        }
    }

    /// Placeholder used on the degraded analysis path.
    pub fn neutral(team_id: TeamId, gameweek: Gameweek) -> Self {
        Self {
            team_id,
            gameweek,
            fixture_count: 0,
            days_between_fixtures: Vec::new(),
            avg_days_between: 7.0,
            level: CongestionLevel::Low,
            score: 0.2,
            has_continental_football: false,
        }
    }
}

/// Fused difficulty result for one (fixture, team) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultyAnalysis {
    pub fixture_id: FixtureId,
    pub team_id: TeamId,
    pub opponent_id: TeamId,
    pub gameweek: Gameweek,
    pub is_home: bool,
    pub base_difficulty: DifficultyRating,
    /// In [0.5, 1.5]; above 1.0 means form makes the fixture harder.
    pub form_multiplier: f64,
    pub form_adjusted_difficulty: f64,
    /// 1-10 scale, lower is easier; clamped.
    pub advanced_difficulty: f64,
    /// 0-100 scale, higher is better for `team_id`; clamped.
    pub favorability_score: f64,
    /// 0-100 confidence in the analysis.
    pub confidence: u8,
    pub team_form: FormSnapshot,
    pub opponent_form: FormSnapshot,
    pub head_to_head: HeadToHeadRecord,
    pub congestion: CongestionProfile,
}

/// Outcome of the difficulty fusion pipeline.
///
/// The calculator never raises to its caller: an internal failure degrades to
/// a baseline-only analysis instead. Degradation is a first-class branch so
/// callers can tell a full analysis from a fallback one.
#[derive(Debug, Clone, PartialEq)]
pub enum DifficultyOutcome {
    Full(DifficultyAnalysis),
    Degraded(DifficultyAnalysis),
}

impl DifficultyOutcome {
    pub fn analysis(&self) -> &DifficultyAnalysis {
        match self {
            DifficultyOutcome::Full(a) | DifficultyOutcome::Degraded(a) => a,
        }
    }

    pub fn into_analysis(self) -> DifficultyAnalysis {
        match self {
            DifficultyOutcome::Full(a) | DifficultyOutcome::Degraded(a) => a,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, DifficultyOutcome::Degraded(_))
    }
}

/// One team-side of an upcoming fixture, fully assessed.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureAssessment {
    pub team_id: TeamId,
    pub team_name: String,
    pub fixture_id: FixtureId,
    pub opponent_id: TeamId,
    pub opponent_name: String,
    pub gameweek: Gameweek,
    pub is_home: bool,
    pub kickoff_time: Option<DateTime<Utc>>,
    pub degraded: bool,
    pub analysis: DifficultyAnalysis,
}

/// Qualitative classification of a fixture run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunRecommendation {
    Excellent,
    Good,
    Avoid,
    Caution,
    Neutral,
}

impl RunRecommendation {
    /// Longer label for human-readable output.
    pub fn describe(&self) -> &'static str {
        match self {
            RunRecommendation::Excellent => "EXCELLENT - Strong target for transfers",
            RunRecommendation::Good => "GOOD - Consider for transfers",
            RunRecommendation::Avoid => "AVOID - Difficult fixture run",
            RunRecommendation::Caution => "CAUTION - High fixture congestion",
            RunRecommendation::Neutral => "NEUTRAL - Average fixture difficulty",
        }
    }
}

impl fmt::Display for RunRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunRecommendation::Excellent => "EXCELLENT",
            RunRecommendation::Good => "GOOD",
            RunRecommendation::Avoid => "AVOID",
            RunRecommendation::Caution => "CAUTION",
            RunRecommendation::Neutral => "NEUTRAL",
        };
        write!(f, "{label}")
    }
}

/// Summary of a team's upcoming fixtures over a rolling gameweek window.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureRunSummary {
    pub team_id: TeamId,
    pub team_name: String,
    pub start_gameweek: Gameweek,
    pub end_gameweek: Gameweek,
    pub fixture_count: u32,
    pub average_difficulty: f64,
    /// Fixtures with baseline difficulty ≤ 2.
    pub easy_fixtures: u32,
    /// Fixtures with baseline difficulty ≥ 4.
    pub hard_fixtures: u32,
    pub home_fixtures: u32,
    pub away_fixtures: u32,
    pub congestion_level: CongestionLevel,
    pub recommendation: RunRecommendation,
}

/// A team ranked by derived fixture score, higher is better.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTeam {
    pub team_id: TeamId,
    pub team_name: String,
    pub fixture_count: u32,
    pub average_difficulty: f64,
    pub easy_fixtures: u32,
    pub hard_fixtures: u32,
    pub home_fixtures: u32,
    pub congestion_level: CongestionLevel,
    /// In [0, 100].
    pub fixture_score: f64,
    pub recommendation: RunRecommendation,
}

/// Suggested gameweek to transfer in players from a team with an easy run.
#[derive(Debug, Clone, Serialize)]
pub struct TransferSuggestion {
    pub team_id: TeamId,
    pub team_name: String,
    pub recommended_transfer_gameweek: Gameweek,
    pub fixture_run_start: Gameweek,
    pub average_difficulty: f64,
    pub easy_fixtures: u32,
    pub reasoning: String,
}
