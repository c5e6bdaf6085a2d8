//! Fixture Difficulty Analysis Engine
//!
//! A Rust library for turning stored Premier League match results and
//! scheduled fixtures into per-team, per-fixture difficulty and favorability
//! signals used to rank transfer and captaincy decisions.
//!
//! ## Features
//!
//! - **Team Form**: rolling-window win/draw/loss records with attack and
//!   defense strength multipliers, plus head-to-head history
//! - **Fixture Congestion**: match density around a target gameweek with a
//!   bounded [0, 1] congestion score and continental-competition load
//! - **Advanced Difficulty**: fuses the external 1-5 baseline rating with
//!   form, head-to-head and congestion into a 1-10 difficulty, a 0-100
//!   favorability score, and a confidence level
//! - **Fixture Runs**: rolling-window run summaries, team rankings, and
//!   transfer-timing suggestions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_fixtures::{
//!     analysis::FixtureRunAggregator, cache::NoopCache, config::EngineConfig,
//!     storage::FixtureDatabase,
//! };
//!
//! # fn example() -> anyhow::Result<()> {
//! let db = FixtureDatabase::new()?;
//! let config = EngineConfig::default();
//! let aggregator = FixtureRunAggregator::new(&db, &NoopCache, &config);
//!
//! for run in aggregator.analyze_fixture_runs(6)? {
//!     println!("{}: {} ({:.2})", run.team_name, run.recommendation, run.average_difficulty);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use analysis::{
    CongestionAnalyzer, CongestionLevel, CongestionProfile, DifficultyAnalysis, DifficultyCalculator,
    DifficultyOutcome, FixtureAnalysisEngine, FixtureAssessment, FixtureRunAggregator,
    FixtureRunSummary, FormAnalyzer, FormSnapshot, HeadToHeadRecord, RankedTeam, RunRecommendation,
    TransferSuggestion,
};
pub use cache::{AnalysisCache, MemoryCache, NoopCache};
pub use config::EngineConfig;
pub use error::{FplError, Result};
pub use storage::{Fixture, FixtureDatabase, ResultStore, Team};
pub use types::{DifficultyRating, FixtureId, Gameweek, TeamId, FINAL_GAMEWEEK, FIRST_GAMEWEEK};
