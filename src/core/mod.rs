//! Core utilities shared across the refresher
//!
//! - `cache`: file system helpers and cache paths
//! - `http`: client construction and NBA Stats headers
//! - `rate_limit`: spacing between consecutive NBA Stats calls

pub mod cache;
pub mod http;
pub mod rate_limit;

// Re-export commonly used items for convenience
pub use cache::{is_fresh, try_read_to_string, write_string};
pub use http::{build_client, nba_stats_headers};
pub use rate_limit::RateLimiter;
