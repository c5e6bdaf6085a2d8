//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fpl-fixtures",
    about = "Fixture difficulty analysis for FPL transfer and captaincy decisions",
    version
)]
pub struct Cli {
    /// Path to the fixture database (defaults to the user cache directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Path to an engine configuration JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of human-readable tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load fixture and team dumps produced by the data fetcher
    Import {
        /// JSON file of fixture records
        #[arg(long)]
        fixtures: PathBuf,

        /// JSON file of team records
        #[arg(long)]
        teams: Option<PathBuf>,
    },

    /// Analyze both sides of every upcoming fixture
    Analyze {
        /// Gameweeks ahead of the current one to analyze
        #[arg(long, default_value_t = 6)]
        gameweeks: u8,
    },

    /// Summarize each team's upcoming fixture run, easiest first
    Runs {
        /// Gameweeks ahead of the current one to include
        #[arg(long, default_value_t = 6)]
        gameweeks: u8,
    },

    /// Rank teams by fixture score over their upcoming run
    BestTeams {
        #[arg(long, default_value_t = 4)]
        gameweeks: u8,

        /// Minimum fixtures a run needs to be ranked
        #[arg(long, default_value_t = 2)]
        min_fixtures: u32,

        /// Number of teams to return
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Suggest gameweeks to transfer in players from teams with easy runs
    TransferTiming,
}
