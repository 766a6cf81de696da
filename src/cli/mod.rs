//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, Season, SeasonAnchor};

use crate::{
    output::{DEFAULT_DATA_DIR, DEFAULT_PUBLIC_DIR},
    DEFAULT_SEASON_START,
};

/// League selection shared between commands
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// Sleeper league ID (or set `SLEEPR_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// NBA season (e.g. 2025-26).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Parser)]
#[clap(name = "sleepr-refresh", about = "Sleeper fantasy basketball dashboard refresher")]
pub struct Sleepr {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Refresh the dashboard's data files.
    ///
    /// Pulls rosters, users, scoring and players from Sleeper, the league schedule
    /// from the NBA CDN, and (unless `--quick`) every rostered player's game log
    /// from NBA Stats, then writes JSON/CSV into the public directory.
    Refresh {
        #[clap(flatten)]
        league: LeagueArgs,

        /// First day of the fantasy season; week 1 starts on that date's Monday.
        #[clap(long, default_value = DEFAULT_SEASON_START)]
        season_start: SeasonAnchor,

        /// Quick refresh (rosters only, no game logs).
        #[clap(long, short)]
        quick: bool,

        /// Include top free agents in the game log fetch.
        #[clap(long, short)]
        free_agents: bool,

        /// Number of top free agents to include.
        #[clap(long, short = 'n', default_value_t = 100)]
        free_agent_limit: usize,

        /// Directory the dashboard serves files from.
        #[clap(long, default_value = DEFAULT_PUBLIC_DIR)]
        public_dir: PathBuf,

        /// Directory for timestamped game log backups.
        #[clap(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Re-download the Sleeper player directory even if the cached copy is fresh.
        #[clap(long)]
        refresh: bool,
    },

    /// Fetch and optionally refresh cached league info, then summarize its scoring.
    LeagueData {
        /// Sleeper league ID (or set `SLEEPR_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Force refresh from Sleeper, overwriting the cache.
        #[clap(long)]
        refresh: bool,

        /// Print every scoring category and the cache path.
        #[clap(long)]
        verbose: bool,
    },
}
