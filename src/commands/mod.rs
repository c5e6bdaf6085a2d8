//! Command handlers for the CLI binary.

pub mod analyze;
pub mod best_teams;
pub mod common;
pub mod import;
pub mod runs;
pub mod transfer_timing;
