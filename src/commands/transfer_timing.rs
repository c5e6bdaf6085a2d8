//! Suggest optimal transfer gameweeks.

use super::common::print_json;
use crate::analysis::FixtureRunAggregator;
use crate::cache::MemoryCache;
use crate::config::EngineConfig;
use crate::storage::FixtureDatabase;
use anyhow::Result;

pub fn handle_transfer_timing(
    db: &FixtureDatabase,
    config: &EngineConfig,
    as_json: bool,
) -> Result<()> {
    let cache = MemoryCache::new(64);
    let aggregator = FixtureRunAggregator::new(db, &cache, config);
    let suggestions = aggregator.get_transfer_timing_recommendations()?;

    if as_json {
        return print_json(&suggestions);
    }

    if suggestions.is_empty() {
        println!("No teams with qualifying fixture runs right now");
        return Ok(());
    }

    println!("{:<18} {:>9} {:>5} {:>5}  {}", "Team", "Transfer", "Avg", "Easy", "Reasoning");
    for s in &suggestions {
        println!(
            "{:<18} {:>9} {:>5.2} {:>5}  {}",
            s.team_name,
            s.recommended_transfer_gameweek.to_string(),
            s.average_difficulty,
            s.easy_fixtures,
            s.reasoning,
        );
    }

    Ok(())
}
