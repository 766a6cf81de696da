//! File system helpers for the on-disk payload cache and dashboard artifacts.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

/// Sleeper asks clients to pull `/players/nba` at most once a day.
pub const PLAYERS_CACHE_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Base directory for cached payloads: `~/.cache/sleepr-refresh`.
pub fn cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("sleepr-refresh")
}

/// Path: ~/.cache/sleepr-refresh/players-nba.json
pub fn players_cache_path() -> PathBuf {
    cache_dir().join("players-nba.json")
}

/// Path: ~/.cache/sleepr-refresh/league_{league_id}.json
pub fn league_cache_path(league_id: u64) -> PathBuf {
    cache_dir().join(format!("league_{}.json", league_id))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// True when `path` exists and was modified less than `max_age` ago.
pub fn is_fresh(path: &Path, max_age: Duration) -> bool {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .map(|age| age < max_age)
        .unwrap_or(false)
}
