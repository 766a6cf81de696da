//! NBA Stats and NBA CDN: player directory, game logs, league schedule.

pub mod http;
pub mod lookup;
pub mod schedule;
pub mod types;

pub use http::NbaClient;
pub use lookup::find_nba_player_id;
pub use schedule::{build_team_schedule, TeamSchedule};
