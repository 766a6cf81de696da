//! The `games.csv` table: one row per player per game.

use serde::{Serialize, Serializer};
use std::path::Path;

use crate::{
    cli::types::{PlayerId, SeasonAnchor, Week},
    fantasy::{
        compute_fantasy_points, compute_week_number, parse_game_date, points_per_minute,
        ScoringRules,
    },
    nba::types::GameLogEntry,
    sleeper::roster::PlayerRef,
    Result,
};

/// Box-score counts are whole numbers; write `30`, not `30.0`.
fn whole_number<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Column order matters: the dashboard reads the CSV by header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRow {
    pub player: String,
    pub sleeper_id: PlayerId,
    pub nba_team: String,
    pub fantasy_team: String,
    pub date: String,
    pub week: Week,
    pub matchup: String,
    #[serde(serialize_with = "whole_number")]
    pub minutes: f64,
    pub fpts: f64,
    pub fpts_per_min: f64,
    #[serde(serialize_with = "whole_number")]
    pub pts: f64,
    #[serde(serialize_with = "whole_number")]
    pub reb: f64,
    #[serde(serialize_with = "whole_number")]
    pub ast: f64,
    #[serde(serialize_with = "whole_number")]
    pub stl: f64,
    #[serde(serialize_with = "whole_number")]
    pub blk: f64,
    #[serde(serialize_with = "whole_number")]
    pub tov: f64,
    #[serde(serialize_with = "whole_number")]
    pub fgm: f64,
    #[serde(serialize_with = "whole_number")]
    pub fga: f64,
    pub fg_pct: f64,
    #[serde(serialize_with = "whole_number")]
    pub ftm: f64,
    #[serde(serialize_with = "whole_number")]
    pub fta: f64,
    #[serde(serialize_with = "whole_number")]
    pub fg3m: f64,
}

/// Score one game-log entry and attach player identity.
///
/// Fails only when the game date is in neither known format.
pub fn build_game_row(
    player: &PlayerRef,
    fantasy_team: &str,
    entry: &GameLogEntry,
    rules: &ScoringRules,
    anchor: SeasonAnchor,
) -> Result<GameRow> {
    let stats = &entry.stats;
    let week = compute_week_number(parse_game_date(&stats.game_date)?, anchor);
    let fpts = compute_fantasy_points(stats, rules);

    Ok(GameRow {
        player: player.name.clone(),
        sleeper_id: player.sleeper_id.clone(),
        nba_team: player.team.clone(),
        fantasy_team: fantasy_team.to_string(),
        date: stats.game_date.clone(),
        week,
        matchup: entry.matchup.clone().unwrap_or_default(),
        minutes: stats.minutes,
        fpts,
        fpts_per_min: points_per_minute(fpts, stats.minutes),
        pts: stats.points,
        reb: stats.rebounds,
        ast: stats.assists,
        stl: stats.steals,
        blk: stats.blocks,
        tov: stats.turnovers,
        fgm: stats.field_goals_made,
        fga: stats.field_goals_attempted,
        fg_pct: entry.fg_pct.unwrap_or(0.0),
        ftm: stats.free_throws_made,
        fta: stats.free_throws_attempted,
        fg3m: stats.three_pointers_made,
    })
}

/// Sort by player name, then chronologically.
pub fn sort_game_rows(rows: &mut [GameRow]) {
    rows.sort_by(|a, b| {
        a.player
            .cmp(&b.player)
            .then_with(|| parse_game_date(&a.date).ok().cmp(&parse_game_date(&b.date).ok()))
    });
}

pub fn write_games_csv(path: &Path, rows: &[GameRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Summary numbers logged at the end of a refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameTableStats {
    pub games: usize,
    pub unique_players: usize,
    pub max_week: Option<Week>,
    pub free_agent_games: usize,
}

impl GameTableStats {
    pub fn from_rows(rows: &[GameRow], free_agent_label: &str) -> Self {
        let unique_players = rows
            .iter()
            .map(|r| r.player.as_str())
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        Self {
            games: rows.len(),
            unique_players,
            max_week: rows.iter().map(|r| r.week).max(),
            free_agent_games: rows
                .iter()
                .filter(|r| r.fantasy_team == free_agent_label)
                .count(),
        }
    }
}
