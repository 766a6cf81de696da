//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleepr_refresh::{
    cli::{Commands, Sleepr},
    commands::{
        league_data::handle_league_data,
        refresh::{handle_refresh, RefreshParams},
    },
    output::OutputPaths,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    sensible_env_logger::init!();
    let app = Sleepr::parse();

    match app.command {
        Commands::Refresh {
            league,
            season_start,
            quick,
            free_agents,
            free_agent_limit,
            public_dir,
            data_dir,
            refresh,
        } => {
            handle_refresh(RefreshParams {
                league_id: league.league_id,
                season: league.season,
                season_start,
                quick,
                free_agents,
                free_agent_limit,
                outputs: OutputPaths::new(public_dir, data_dir),
                refresh,
            })
            .await?;
        }

        Commands::LeagueData {
            league_id,
            refresh,
            verbose,
        } => handle_league_data(league_id, refresh, verbose).await?,
    }

    Ok(())
}
