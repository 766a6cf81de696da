//! Dashboard artifacts: where they go and how they are written.

pub mod games;

use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::{core::write_string, Result};

pub use games::{build_game_row, sort_game_rows, write_games_csv, GameRow, GameTableStats};

pub const DEFAULT_PUBLIC_DIR: &str = "dashboard/public";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Output locations for one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Files the front-end fetches
    pub public_dir: PathBuf,
    /// Timestamped CSV backups
    pub data_dir: PathBuf,
}

impl OutputPaths {
    pub fn new(public_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn scoring(&self) -> PathBuf {
        self.public_dir.join("scoring.json")
    }

    pub fn schedule(&self) -> PathBuf {
        self.public_dir.join("schedule.json")
    }

    pub fn all_players(&self) -> PathBuf {
        self.public_dir.join("all_players.json")
    }

    pub fn rosters(&self) -> PathBuf {
        self.public_dir.join("rosters.json")
    }

    pub fn games(&self) -> PathBuf {
        self.public_dir.join("games.csv")
    }

    /// Path: {data_dir}/all_games_{YYYYmmdd_HHMMSS}.csv
    pub fn games_backup(&self, at: NaiveDateTime) -> PathBuf {
        self.data_dir
            .join(format!("all_games_{}.csv", at.format("%Y%m%d_%H%M%S")))
    }

    pub fn create_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.public_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_DIR, DEFAULT_DATA_DIR)
    }
}

/// Serialize `value` to `path`; pretty output uses two-space indentation.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json_str = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    write_string(path, &json_str)?;
    Ok(())
}
