//! HTTP utilities shared by the Sleeper and NBA clients

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headers NBA Stats expects before it will answer; without them requests hang.
pub fn nba_stats_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    Ok(h)
}

/// Client with the shared timeout and the given default headers.
pub fn build_client(headers: HeaderMap) -> Result<Client> {
    Ok(Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}
