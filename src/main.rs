use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fpl_fixtures::cli::{Cli, Commands};
use fpl_fixtures::commands::{
    analyze::handle_analyze,
    best_teams::handle_best_teams,
    common::{load_config, open_database},
    import::handle_import,
    runs::handle_runs,
    transfer_timing::handle_transfer_timing,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = open_database(cli.db.as_deref())?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Import { fixtures, teams } => handle_import(&db, &fixtures, teams.as_deref()),
        Commands::Analyze { gameweeks } => handle_analyze(&db, &config, gameweeks, cli.json),
        Commands::Runs { gameweeks } => handle_runs(&db, &config, gameweeks, cli.json),
        Commands::BestTeams {
            gameweeks,
            min_fixtures,
            limit,
        } => handle_best_teams(&db, &config, gameweeks, min_fixtures, limit, cli.json),
        Commands::TransferTiming => handle_transfer_timing(&db, &config, cli.json),
    }
}
