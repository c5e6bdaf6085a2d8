//! Summarize each team's upcoming fixture run.

use super::common::print_json;
use crate::analysis::FixtureRunAggregator;
use crate::cache::MemoryCache;
use crate::config::EngineConfig;
use crate::storage::FixtureDatabase;
use anyhow::Result;

pub fn handle_runs(
    db: &FixtureDatabase,
    config: &EngineConfig,
    gameweeks: u8,
    as_json: bool,
) -> Result<()> {
    let cache = MemoryCache::new(64);
    let aggregator = FixtureRunAggregator::new(db, &cache, config);
    let runs = aggregator.analyze_fixture_runs(gameweeks)?;

    if as_json {
        return print_json(&runs);
    }

    println!(
        "{:<18} {:>9} {:>5} {:>5} {:>5} {:>5} {:>8}  {}",
        "Team", "Window", "Fix", "Avg", "Easy", "Hard", "Congest", "Recommendation"
    );
    for run in &runs {
        println!(
            "{:<18} {:>4}-{:<4} {:>5} {:>5.2} {:>5} {:>5} {:>8}  {}",
            run.team_name,
            run.start_gameweek,
            run.end_gameweek,
            run.fixture_count,
            run.average_difficulty,
            run.easy_fixtures,
            run.hard_fixtures,
            run.congestion_level,
            run.recommendation.describe(),
        );
    }

    Ok(())
}
