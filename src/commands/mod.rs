//! Command implementations for the dashboard refresher

pub mod league_data;
pub mod refresh;

use crate::{LeagueId, Result, SleeprError, LEAGUE_ID_ENV_VAR};


/// Use the `--league-id` argument when given, else the environment variable.
fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| SleeprError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}
