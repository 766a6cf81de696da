//! Error types for the Sleeper dashboard refresher

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeprError>;

#[derive(Error, Debug)]
pub enum SleeprError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Invalid season '{season}', expected a value like 2025-26")]
    InvalidSeason { season: String },

    #[error("Unrecognized date format: {input}")]
    DateParse { input: String },

    #[error("NBA Stats response is missing the {name} result set")]
    MissingResultSet { name: String },
}
