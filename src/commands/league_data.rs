//! League data command implementation

use log::info;
use std::path::Path;

use crate::{
    core::cache::league_cache_path,
    fantasy::ScoringRules,
    sleeper::{
        cache::{load_or_fetch_league_at, CacheStatus},
        types::League,
        SleeperClient,
    },
    LeagueId, Result,
};

use super::resolve_league_id;

/// Handle the league data command
pub async fn handle_league_data(
    league_id: Option<LeagueId>,
    refresh: bool,
    verbose: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = SleeperClient::new()?;
    let path = league_cache_path(league_id.as_u64());

    // tarpaulin::skip - HTTP/file I/O call, tested via run_league_data
    let league = run_league_data(&client, league_id, &path, refresh).await?;

    for line in scoring_summary(&league, verbose) {
        println!("{line}");
    }
    if verbose {
        println!("League info cached at: {}", path.display()); // tarpaulin::skip
    }

    Ok(())
}

/// Load (or refresh) the cached league info.
pub async fn run_league_data(
    client: &SleeperClient,
    league_id: LeagueId,
    cache_path: &Path,
    refresh: bool,
) -> Result<League> {
    if refresh {
        info!("Fetching fresh league info from Sleeper...");
    } else {
        info!("Loading league info (cached if available)...");
    }

    let (league, status) = load_or_fetch_league_at(client, league_id, cache_path, refresh).await?;
    match status {
        CacheStatus::Hit => info!("✓ League info loaded (from cache)"),
        CacheStatus::Miss => info!("✓ League info fetched (cache miss)"),
        CacheStatus::Refreshed => info!("✓ League info refreshed"),
    }

    Ok(league)
}

/// Human-readable scoring summary; `verbose` lists every category.
pub fn scoring_summary(league: &League, verbose: bool) -> Vec<String> {
    let rules = ScoringRules::from(&league.scoring_settings);
    let mut lines = vec![
        format!(
            "League: {} ({})",
            league.name.as_deref().unwrap_or("unnamed"),
            league.season.as_deref().unwrap_or("unknown season")
        ),
        format!(
            "Scoring settings: {} categories, {} used for fantasy points",
            league.scoring_settings.len(),
            rules.active_rules()
        ),
    ];

    if verbose {
        if let Some(teams) = league.total_rosters {
            lines.push(format!("Teams: {teams}"));
        }
        lines.extend(
            league
                .scoring_settings
                .iter()
                .map(|(key, weight)| format!("  {key:<14} {weight:>6}")),
        );
    }

    lines
}
