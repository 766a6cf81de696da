use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;


/// `GET /league/{id}`; only the fields the refresh uses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    /// Sparse category -> weight mapping, saved verbatim for the dashboard
    #[serde(default)]
    pub scoring_settings: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

/// One entry of `GET /league/{id}/rosters`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Sleeper sends `null` for an empty roster
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub starters: Option<Vec<PlayerId>>,
    #[serde(default)]
    pub settings: RosterSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// One entry of `GET /league/{id}/users`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

impl User {
    pub fn team_name(&self) -> Option<&str> {
        self.metadata.as_ref()?.team_name.as_deref()
    }
}

/// One value of `GET /players/nba`.
///
/// Fields the refresh doesn't read are kept in `extra` so the payload can be
/// written back out for the dashboard without losing anything.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperPlayer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub search_rank: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SleeperPlayer {
    /// `"{first} {last}"` trimmed; empty when Sleeper has neither.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }
}

/// Every NBA player Sleeper knows about, keyed by Sleeper id.
pub type PlayerDirectory = BTreeMap<PlayerId, SleeperPlayer>;
