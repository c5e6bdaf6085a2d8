//! Shared helpers for command handlers.

use crate::config::EngineConfig;
use crate::storage::FixtureDatabase;
use anyhow::Result;
use std::path::Path;

/// Open the fixture database at `path`, or the default cache-dir location.
pub fn open_database(path: Option<&Path>) -> Result<FixtureDatabase> {
    match path {
        Some(path) => FixtureDatabase::open(path),
        None => FixtureDatabase::new(),
    }
}

/// Load engine configuration from `path`, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_path(path),
        None => Ok(EngineConfig::default()),
    }
}

/// Print any serializable payload as pretty JSON.
pub fn print_json<T: serde::Serialize>(payload: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
