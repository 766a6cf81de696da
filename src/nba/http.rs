use log::debug;
use reqwest::Client;

use crate::{
    cli::types::{NbaPlayerId, Season},
    core::{
        http::{build_client, nba_stats_headers, DEFAULT_USER_AGENT},
        rate_limit::{RateLimiter, NBA_STATS_DELAY_MS},
    },
    nba::types::{
        GameLogEntry, NbaPlayer, ScheduleResponse, StatsResponse, COMMON_ALL_PLAYERS,
        PLAYER_GAME_LOG,
    },
    Result,
};


/// Base path for stats.nba.com.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Full league schedule published on the NBA CDN.
pub const NBA_SCHEDULE_URL: &str = "https://cdn.nba.com/static/json/staticData/scheduleLeagueV2.json";

pub const REGULAR_SEASON: &str = "Regular Season";

/// Client for NBA Stats and the NBA CDN.
///
/// Every stats.nba.com call waits on the rate limiter, so calls take `&mut self`.
#[derive(Debug)]
pub struct NbaClient {
    client: Client,
    stats_base_url: String,
    schedule_url: String,
    limiter: RateLimiter,
}

impl NbaClient {
    pub fn new() -> Result<Self> {
        Self::with_urls(NBA_STATS_BASE_URL, NBA_SCHEDULE_URL, NBA_STATS_DELAY_MS)
    }

    pub fn with_urls(
        stats_base_url: impl Into<String>,
        schedule_url: impl Into<String>,
        delay_ms: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(nba_stats_headers(DEFAULT_USER_AGENT)?)?,
            stats_base_url: stats_base_url.into().trim_end_matches('/').to_string(),
            schedule_url: schedule_url.into(),
            limiter: RateLimiter::new(delay_ms),
        })
    }

    async fn get_stats(&mut self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        self.limiter.wait().await;
        let url = format!("{}/{}", self.stats_base_url, endpoint);
        debug!("GET {url} {params:?}");

        let res = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        Ok(res)
    }

    /// Every player NBA Stats knows, current and historical, for name lookups.
    pub async fn get_player_directory(&mut self, season: Season) -> Result<Vec<NbaPlayer>> {
        let params = [
            ("LeagueID", "00".to_string()),
            ("Season", season.to_string()),
            ("IsOnlyCurrentSeason", "0".to_string()),
        ];
        let response = self.get_stats("commonallplayers", &params).await?;
        Ok(response.result_set(COMMON_ALL_PLAYERS)?.deserialize_records())
    }

    /// Regular-season game log for one player.
    pub async fn get_game_log(
        &mut self,
        player_id: NbaPlayerId,
        season: Season,
    ) -> Result<Vec<GameLogEntry>> {
        let params = [
            ("PlayerID", player_id.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", REGULAR_SEASON.to_string()),
        ];
        let response = self.get_stats("playergamelog", &params).await?;
        Ok(response.result_set(PLAYER_GAME_LOG)?.deserialize_records())
    }

    /// League schedule from the CDN; not rate limited.
    pub async fn get_schedule(&self) -> Result<ScheduleResponse> {
        debug!("GET {}", self.schedule_url);
        let res = self
            .client
            .get(&self.schedule_url)
            .send()
            .await?
            .error_for_status()?
            .json::<ScheduleResponse>()
            .await?;

        Ok(res)
    }

    pub fn requests_made(&self) -> usize {
        self.limiter.request_count()
    }
}
