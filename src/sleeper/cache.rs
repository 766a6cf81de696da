// src/sleeper/cache.rs
use log::{debug, warn};
use std::path::Path;

use crate::core::cache::{
    is_fresh, try_read_to_string, write_string, PLAYERS_CACHE_MAX_AGE,
};
use crate::sleeper::{
    http::SleeperClient,
    types::{League, PlayerDirectory},
};
use crate::{cli::types::LeagueId, Result};

/// Where a cached payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

impl CacheStatus {
    fn fetched(refresh: bool) -> Self {
        if refresh {
            CacheStatus::Refreshed
        } else {
            CacheStatus::Miss
        }
    }
}

/// Load `/players/nba` from `path` when it is less than a day old;
/// otherwise (or when `refresh == true`) fetch it and re-write the cache.
pub async fn load_or_fetch_players_at(
    client: &SleeperClient,
    path: &Path,
    refresh: bool,
) -> Result<(PlayerDirectory, CacheStatus)> {
    // 1) Try cache (unless refresh or stale)
    if !refresh && is_fresh(path, PLAYERS_CACHE_MAX_AGE) {
        if let Some(s) = try_read_to_string(path) {
            match serde_json::from_str::<PlayerDirectory>(&s) {
                Ok(players) => return Ok((players, CacheStatus::Hit)),
                Err(e) => warn!("Ignoring unreadable players cache {}: {e}", path.display()),
            }
        }
    }

    // 2) Fetch from API
    let players = client.get_all_players().await?;

    // 3) Write cache; a failed write only costs a refetch next time
    match serde_json::to_string(&players) {
        Ok(json_str) => {
            if let Err(e) = write_string(path, &json_str) {
                warn!("Could not write players cache {}: {e}", path.display());
            }
        }
        Err(e) => warn!("Could not serialize players cache: {e}"),
    }
    debug!("Cached {} players at {}", players.len(), path.display());

    Ok((players, CacheStatus::fetched(refresh)))
}

/// Try to load league info from `path` first. If missing or `refresh == true`,
/// fetch it from Sleeper and re-write the cache.
pub async fn load_or_fetch_league_at(
    client: &SleeperClient,
    league_id: LeagueId,
    path: &Path,
    refresh: bool,
) -> Result<(League, CacheStatus)> {
    if !refresh {
        if let Some(league) = try_read_to_string(path)
            .and_then(|s| serde_json::from_str::<League>(&s).ok())
        {
            return Ok((league, CacheStatus::Hit));
        }
    }

    let league = client.get_league(league_id).await?;

    if let Ok(json_str) = serde_json::to_string_pretty(&league) {
        let _ = write_string(path, &json_str);
    }

    Ok((league, CacheStatus::fetched(refresh)))
}
