//! Type-safe wrappers for Sleeper and NBA identifiers and calendar values.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, NbaPlayerId, PlayerId};
pub use time::{Season, SeasonAnchor, Week};
