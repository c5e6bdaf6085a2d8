//! Rank teams by derived fixture score.

use super::common::print_json;
use crate::analysis::FixtureRunAggregator;
use crate::cache::MemoryCache;
use crate::config::EngineConfig;
use crate::storage::FixtureDatabase;
use anyhow::Result;

pub fn handle_best_teams(
    db: &FixtureDatabase,
    config: &EngineConfig,
    gameweeks: u8,
    min_fixtures: u32,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let cache = MemoryCache::new(64);
    let aggregator = FixtureRunAggregator::new(db, &cache, config);
    let ranked = aggregator.get_best_fixture_teams(gameweeks, min_fixtures, limit)?;

    if as_json {
        return print_json(&ranked);
    }

    println!(
        "{:<4} {:<18} {:>5} {:>5} {:>5} {:>5} {:>6}  {}",
        "#", "Team", "Fix", "Avg", "Easy", "Home", "Score", "Recommendation"
    );
    for (rank, team) in ranked.iter().enumerate() {
        println!(
            "{:<4} {:<18} {:>5} {:>5.2} {:>5} {:>5} {:>6.1}  {}",
            rank + 1,
            team.team_name,
            team.fixture_count,
            team.average_difficulty,
            team.easy_fixtures,
            team.home_fixtures,
            team.fixture_score,
            team.recommendation,
        );
    }

    Ok(())
}
