//! Analyze both sides of every upcoming fixture.

use super::common::print_json;
use crate::analysis::FixtureAnalysisEngine;
use crate::cache::MemoryCache;
use crate::config::EngineConfig;
use crate::storage::FixtureDatabase;
use anyhow::Result;

pub fn handle_analyze(
    db: &FixtureDatabase,
    config: &EngineConfig,
    gameweeks: u8,
    as_json: bool,
) -> Result<()> {
    // Per-run cache: form/congestion snapshots repeat across fixture sides.
    let cache = MemoryCache::new(256);
    let engine = FixtureAnalysisEngine::new(db, &cache, config);
    let assessments = engine.analyze_upcoming_fixtures(gameweeks)?;

    db.replace_analysis_snapshot(&assessments)?;

    if as_json {
        return print_json(&assessments);
    }

    println!(
        "{:<18} {:<18} {:>4} {:>5} {:>5} {:>6} {:>6} {:>5}",
        "Team", "Opponent", "GW", "Venue", "Base", "Adv", "Favor", "Conf"
    );
    for a in &assessments {
        println!(
            "{:<18} {:<18} {:>4} {:>5} {:>5} {:>6.2} {:>6.1} {:>4}%{}",
            a.team_name,
            a.opponent_name,
            a.gameweek.as_u8(),
            if a.is_home { "H" } else { "A" },
            a.analysis.base_difficulty,
            a.analysis.advanced_difficulty,
            a.analysis.favorability_score,
            a.analysis.confidence,
            if a.degraded { " (degraded)" } else { "" },
        );
    }
    println!("\nAnalyzed {} fixture sides", assessments.len());

    Ok(())
}
