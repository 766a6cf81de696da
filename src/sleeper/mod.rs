//! Sleeper API: league, rosters, users, and the NBA player directory.

pub mod cache;
pub mod http;
pub mod roster;
pub mod types;

pub use http::SleeperClient;
pub use roster::{process_rosters, top_free_agents, RosterSummary, FREE_AGENT};
