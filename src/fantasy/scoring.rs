//! Fantasy point computation for a single game.
//!
//! League rules come from Sleeper's `scoring_settings` (sparse, keyed by Sleeper
//! category names); box scores come from the NBA Stats game log. A category the
//! league doesn't score is `None` and contributes nothing, the same way a stat
//! missing from the box score counts as zero.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;


pub const FIFTY_POINT_GAME: f64 = 50.0;
pub const FORTY_POINT_GAME: f64 = 40.0;
pub const TWENTY_REBOUND_GAME: f64 = 20.0;
pub const FIFTEEN_ASSIST_GAME: f64 = 15.0;
pub const DOUBLE_DIGITS: f64 = 10.0;

/// Per-category weights and bonus values for a league.
///
/// Field names follow Sleeper's keys; unrecognized keys in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringRules {
    pub pts: Option<f64>,
    pub reb: Option<f64>,
    pub ast: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    #[serde(rename = "to")]
    pub turnovers: Option<f64>,
    pub fgm: Option<f64>,
    pub fga: Option<f64>,
    pub ftm: Option<f64>,
    pub fta: Option<f64>,
    pub tpm: Option<f64>,
    pub bonus_pt_50p: Option<f64>,
    pub bonus_pt_40p: Option<f64>,
    pub bonus_reb_20p: Option<f64>,
    pub bonus_ast_15p: Option<f64>,
    #[serde(rename = "dd")]
    pub double_double: Option<f64>,
    #[serde(rename = "td")]
    pub triple_double: Option<f64>,
}

impl ScoringRules {
    /// Weights in the same order as [`GameStatLine::base_values`].
    fn base_weights(&self) -> [Option<f64>; 11] {
        [
            self.pts,
            self.reb,
            self.ast,
            self.stl,
            self.blk,
            self.turnovers,
            self.fgm,
            self.fga,
            self.ftm,
            self.fta,
            self.tpm,
        ]
    }

    /// Number of categories and bonuses the league actually scores.
    pub fn active_rules(&self) -> usize {
        let bonuses = [
            self.bonus_pt_50p,
            self.bonus_pt_40p,
            self.bonus_reb_20p,
            self.bonus_ast_15p,
            self.double_double,
            self.triple_double,
        ];
        self.base_weights()
            .iter()
            .chain(bonuses.iter())
            .filter(|w| w.is_some())
            .count()
    }
}

impl From<&BTreeMap<String, f64>> for ScoringRules {
    fn from(settings: &BTreeMap<String, f64>) -> Self {
        let get = |key: &str| settings.get(key).copied();
        Self {
            pts: get("pts"),
            reb: get("reb"),
            ast: get("ast"),
            stl: get("stl"),
            blk: get("blk"),
            turnovers: get("to"),
            fgm: get("fgm"),
            fga: get("fga"),
            ftm: get("ftm"),
            fta: get("fta"),
            tpm: get("tpm"),
            bonus_pt_50p: get("bonus_pt_50p"),
            bonus_pt_40p: get("bonus_pt_40p"),
            bonus_reb_20p: get("bonus_reb_20p"),
            bonus_ast_15p: get("bonus_ast_15p"),
            double_double: get("dd"),
            triple_double: get("td"),
        }
    }
}

/// NBA Stats sends `null` for stats it didn't track; those score as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// A missing or `null` date becomes empty and fails later at date parsing.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One player's raw box score for one game, keyed the way NBA Stats names columns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GameStatLine {
    #[serde(rename = "PTS", default, deserialize_with = "null_as_zero")]
    pub points: f64,
    #[serde(rename = "REB", default, deserialize_with = "null_as_zero")]
    pub rebounds: f64,
    #[serde(rename = "AST", default, deserialize_with = "null_as_zero")]
    pub assists: f64,
    #[serde(rename = "STL", default, deserialize_with = "null_as_zero")]
    pub steals: f64,
    #[serde(rename = "BLK", default, deserialize_with = "null_as_zero")]
    pub blocks: f64,
    #[serde(rename = "TOV", default, deserialize_with = "null_as_zero")]
    pub turnovers: f64,
    #[serde(rename = "FGM", default, deserialize_with = "null_as_zero")]
    pub field_goals_made: f64,
    #[serde(rename = "FGA", default, deserialize_with = "null_as_zero")]
    pub field_goals_attempted: f64,
    #[serde(rename = "FTM", default, deserialize_with = "null_as_zero")]
    pub free_throws_made: f64,
    #[serde(rename = "FTA", default, deserialize_with = "null_as_zero")]
    pub free_throws_attempted: f64,
    #[serde(rename = "FG3M", default, deserialize_with = "null_as_zero")]
    pub three_pointers_made: f64,
    #[serde(rename = "GAME_DATE", default, deserialize_with = "null_as_empty")]
    pub game_date: String,
    #[serde(rename = "MIN", default, deserialize_with = "null_as_zero")]
    pub minutes: f64,
}

impl GameStatLine {
    /// Raw values in the same order as [`ScoringRules::base_weights`].
    fn base_values(&self) -> [f64; 11] {
        [
            self.points,
            self.rebounds,
            self.assists,
            self.steals,
            self.blocks,
            self.turnovers,
            self.field_goals_made,
            self.field_goals_attempted,
            self.free_throws_made,
            self.free_throws_attempted,
            self.three_pointers_made,
        ]
    }

    /// How many of points/rebounds/assists/steals/blocks reached double digits.
    pub fn double_digit_categories(&self) -> usize {
        [
            self.points,
            self.rebounds,
            self.assists,
            self.steals,
            self.blocks,
        ]
        .iter()
        .filter(|&&v| v >= DOUBLE_DIGITS)
        .count()
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Fantasy points for one game under the league's rules, rounded once to a tenth.
///
/// Threshold bonuses stack: a 52-point night earns both the 50- and 40-point
/// bonuses, and a triple-double also earns the double-double bonus.
pub fn compute_fantasy_points(stats: &GameStatLine, rules: &ScoringRules) -> f64 {
    let weighted: f64 = rules
        .base_weights()
        .iter()
        .zip(stats.base_values())
        .map(|(weight, value)| weight.unwrap_or(0.0) * value)
        .sum();

    let double_digits = stats.double_digit_categories();
    let bonuses: f64 = [
        (stats.points >= FIFTY_POINT_GAME, rules.bonus_pt_50p),
        (stats.points >= FORTY_POINT_GAME, rules.bonus_pt_40p),
        (stats.rebounds >= TWENTY_REBOUND_GAME, rules.bonus_reb_20p),
        (stats.assists >= FIFTEEN_ASSIST_GAME, rules.bonus_ast_15p),
        (double_digits >= 2, rules.double_double),
        (double_digits >= 3, rules.triple_double),
    ]
    .iter()
    .filter(|(reached, _)| *reached)
    .filter_map(|(_, bonus)| *bonus)
    .sum();

    round_to(weighted + bonuses, 1)
}

/// Fantasy points per minute played, two decimals; zero when the player didn't log minutes.
pub fn points_per_minute(fantasy_points: f64, minutes: f64) -> f64 {
    if minutes > 0.0 {
        round_to(fantasy_points / minutes, 2)
    } else {
        0.0
    }
}
