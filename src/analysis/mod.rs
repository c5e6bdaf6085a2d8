//! The fixture difficulty analysis engine.
//!
//! Pipeline, leaf-first:
//! - `form`: rolling-window team form and head-to-head records
//! - `congestion`: fixture density around a target gameweek
//! - `difficulty`: fuses baseline ratings with form and congestion into an
//!   advanced difficulty / favorability score with a confidence level
//! - `runs`: aggregates a team's upcoming fixtures into run summaries,
//!   rankings, and transfer-timing suggestions
//! - `engine`: orchestrates per-fixture assessments across all teams
//!
//! Every operation is a pure function of its inputs plus the current contents
//! of the [`ResultStore`](crate::storage::ResultStore); nothing here holds
//! mutable state between calls.

pub mod congestion;
pub mod difficulty;
pub mod engine;
pub mod form;
pub mod models;
pub mod runs;

pub use congestion::CongestionAnalyzer;
pub use difficulty::DifficultyCalculator;
pub use engine::FixtureAnalysisEngine;
pub use form::FormAnalyzer;
pub use models::{
    CongestionLevel, CongestionProfile, DifficultyAnalysis, DifficultyOutcome, FixtureAssessment,
    FixtureRunSummary, FormSnapshot, HeadToHeadRecord, RankedTeam, RunRecommendation,
    TransferSuggestion,
};
pub use runs::FixtureRunAggregator;
