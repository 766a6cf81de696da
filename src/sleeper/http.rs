use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::{
    cli::types::LeagueId,
    core::http::REQUEST_TIMEOUT,
    sleeper::types::{League, PlayerDirectory, Roster, User},
    Result,
};

#[cfg(test)]
mod tests;

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Thin client over the public (unauthenticated) Sleeper endpoints.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SLEEPER_BASE_URL)
    }

    /// Point the client somewhere other than api.sleeper.app (tests use a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    /// `GET /league/{id}`
    pub async fn get_league(&self, league_id: LeagueId) -> Result<League> {
        self.get_json(&format!("/league/{}", league_id)).await
    }

    /// `GET /league/{id}/rosters`
    pub async fn get_rosters(&self, league_id: LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("/league/{}/rosters", league_id)).await
    }

    /// `GET /league/{id}/users`, indexed by user id.
    pub async fn get_users(&self, league_id: LeagueId) -> Result<HashMap<String, User>> {
        let users: Vec<User> = self.get_json(&format!("/league/{}/users", league_id)).await?;
        Ok(users.into_iter().map(|u| (u.user_id.clone(), u)).collect())
    }

    /// `GET /players/nba`, several megabytes; see `load_or_fetch_players_at` for the cached path.
    pub async fn get_all_players(&self) -> Result<PlayerDirectory> {
        self.get_json("/players/nba").await
    }
}
