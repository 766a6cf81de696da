//! Sleeper Fantasy Basketball Dashboard Refresher
//!
//! Pulls league state from the Sleeper API and per-game box scores from NBA
//! Stats, scores every game under the league's own scoring settings, buckets
//! games into fantasy weeks, and writes the JSON/CSV files a static dashboard
//! reads.
//!
//! ## Features
//!
//! - **Fantasy Scoring**: Weighted categories plus stacking milestone and
//!   double-double / triple-double bonuses, rounded to one decimal
//! - **Week Assignment**: Monday-to-Sunday weeks counted from the season start
//! - **Roster Processing**: Fantasy team names, records, and a player -> team lookup
//! - **Free Agents**: Best unrostered players by Sleeper search rank
//! - **NBA Schedule**: Per-team schedule and games left this week
//!
//! ## Quick Start
//!
//! ```rust
//! use sleepr_refresh::{compute_fantasy_points, compute_week_number, GameStatLine, ScoringRules};
//! use sleepr_refresh::SeasonAnchor;
//! use chrono::NaiveDate;
//!
//! let rules = ScoringRules { pts: Some(1.0), reb: Some(1.2), ..Default::default() };
//! let game = GameStatLine { points: 20.0, rebounds: 5.0, ..Default::default() };
//! assert_eq!(compute_fantasy_points(&game, &rules), 26.0);
//!
//! let anchor: SeasonAnchor = "2025-10-21".parse().unwrap();
//! let week = compute_week_number(NaiveDate::from_ymd_opt(2025, 10, 27).unwrap(), anchor);
//! assert_eq!(week.as_u16(), 2);
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export SLEEPR_LEAGUE_ID=1284738635970666496
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fantasy;
pub mod nba;
pub mod output;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, NbaPlayerId, PlayerId, Season, SeasonAnchor, Week};
pub use error::{Result, SleeprError};
pub use fantasy::{compute_fantasy_points, compute_week_number, GameStatLine, ScoringRules};

pub const LEAGUE_ID_ENV_VAR: &str = "SLEEPR_LEAGUE_ID";

/// First day of the 2025-26 regular season.
pub const DEFAULT_SEASON_START: &str = "2025-10-21";
