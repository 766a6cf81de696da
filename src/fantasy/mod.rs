//! Fantasy scoring and week assignment.
//!
//! Both halves are pure functions over in-memory values; nothing here touches the network or disk.

pub mod scoring;
pub mod week;

pub use scoring::{compute_fantasy_points, points_per_minute, round_to, GameStatLine, ScoringRules};
pub use week::{compute_week_number, parse_game_date, week_for_game_date};
