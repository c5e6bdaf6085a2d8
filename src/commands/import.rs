//! Load fixture and team JSON dumps into the database.

use crate::storage::{Fixture, FixtureDatabase, FixtureRecord, Team, TeamRecord};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// Import fixtures (and optionally teams) from the fetcher's JSON dumps.
/// Individual invalid records are skipped with a warning, not fatal.
pub fn handle_import(
    db: &FixtureDatabase,
    fixtures_path: &Path,
    teams_path: Option<&Path>,
) -> Result<()> {
    if let Some(teams_path) = teams_path {
        let contents = std::fs::read_to_string(teams_path)
            .with_context(|| format!("reading {}", teams_path.display()))?;
        let records: Vec<TeamRecord> = serde_json::from_str(&contents)?;
        let count = records.len();

        for record in records {
            db.upsert_team(&Team::from(record))?;
        }
        println!("Imported {count} teams");
    }

    let contents = std::fs::read_to_string(fixtures_path)
        .with_context(|| format!("reading {}", fixtures_path.display()))?;
    let records: Vec<FixtureRecord> = serde_json::from_str(&contents)?;

    let mut imported = 0usize;
    let mut skipped = 0usize;

    for record in records {
        let fixture_id = record.id;
        match Fixture::try_from(record) {
            Ok(fixture) => {
                db.upsert_fixture(&fixture)?;
                imported += 1;
            }
            Err(err) => {
                warn!(fixture_id, %err, "skipping invalid fixture record");
                skipped += 1;
            }
        }
    }

    println!("Imported {imported} fixtures ({skipped} skipped)");
    Ok(())
}
