use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    cli::types::NbaPlayerId,
    error::{Result, SleeprError},
    fantasy::GameStatLine,
};

#[cfg(test)]
mod tests;

pub const PLAYER_GAME_LOG: &str = "PlayerGameLog";
pub const COMMON_ALL_PLAYERS: &str = "CommonAllPlayers";

/// Envelope every stats.nba.com endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| SleeprError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// Column-oriented table: one header list, rows as positional arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Rows as header-keyed objects. Short rows leave the trailing columns out.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.row_set
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Rows deserialized into `T` through their header-keyed form.
    ///
    /// A row that doesn't fit `T` is logged and left out; the rest still load.
    pub fn deserialize_records<T: DeserializeOwned>(&self) -> Vec<T> {
        self.records()
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| {
                serde_json::from_value(Value::Object(record))
                    .map_err(|e| warn!("Skipping {} row {}: {e}", self.name, i))
                    .ok()
            })
            .collect()
    }
}

/// Row of the `PlayerGameLog` result set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameLogEntry {
    #[serde(flatten)]
    pub stats: GameStatLine,
    #[serde(rename = "MATCHUP", default)]
    pub matchup: Option<String>,
    #[serde(rename = "FG_PCT", default)]
    pub fg_pct: Option<f64>,
}

/// Row of the `CommonAllPlayers` result set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NbaPlayer {
    #[serde(rename = "PERSON_ID")]
    pub id: NbaPlayerId,
    #[serde(rename = "DISPLAY_FIRST_LAST", default)]
    pub full_name: String,
    /// 1 while on an active roster; older payloads send it as a string
    #[serde(rename = "ROSTERSTATUS", default)]
    pub roster_status: Value,
}

impl NbaPlayer {
    pub fn is_active(&self) -> bool {
        match &self.roster_status {
            Value::Number(n) => n.as_u64() == Some(1),
            Value::String(s) => s == "1" || s.eq_ignore_ascii_case("active"),
            Value::Bool(b) => *b,
            _ => false,
        }
    }
}

/// `scheduleLeagueV2.json` from the NBA CDN.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleResponse {
    #[serde(rename = "leagueSchedule", default)]
    pub league_schedule: LeagueSchedule,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueSchedule {
    #[serde(rename = "seasonYear", default)]
    pub season_year: String,
    #[serde(rename = "gameDates", default)]
    pub game_dates: Vec<GameDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDate {
    /// `%m/%d/%Y %H:%M:%S`
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduledGame {
    #[serde(rename = "homeTeam", default)]
    pub home_team: ScheduleTeam,
    #[serde(rename = "awayTeam", default)]
    pub away_team: ScheduleTeam,
    #[serde(rename = "gameTimeEst", default)]
    pub game_time_est: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleTeam {
    #[serde(rename = "teamTricode", default)]
    pub team_tricode: Option<String>,
}

impl ScheduleTeam {
    pub fn tricode(&self) -> Option<&str> {
        self.team_tricode.as_deref().filter(|t| !t.is_empty())
    }
}
