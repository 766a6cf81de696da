//! Time-related types for NBA seasons and fantasy weeks.

use crate::error::{Result, SleeprError};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NBA season, shown the way NBA Stats expects it (`2025-26`).
///
/// Stored as the calendar year the season starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (u32::from(self.0) + 1) % 100)
    }
}

impl FromStr for Season {
    type Err = SleeprError;

    /// Accepts `2025-26` or a bare start year such as `2025`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SleeprError::InvalidSeason {
            season: s.to_string(),
        };
        let (start, end) = match s.trim().split_once('-') {
            Some((start, end)) => (start, Some(end)),
            None => (s.trim(), None),
        };
        let start_year: u16 = start.parse().map_err(|_| invalid())?;
        if start.len() != 4 {
            return Err(invalid());
        }
        if let Some(end) = end {
            let end_year: u16 = end.parse().map_err(|_| invalid())?;
            if end.len() != 2 || end_year != (start_year + 1) % 100 {
                return Err(invalid());
            }
        }
        Ok(Self(start_year))
    }
}

/// 1-based fantasy week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day one of the fantasy season. Week arithmetic starts from the Monday of this date's week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonAnchor(pub NaiveDate);

impl SeasonAnchor {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Monday on or before the anchor date.
    pub fn monday(&self) -> NaiveDate {
        self.0 - Duration::days(i64::from(self.0.weekday().num_days_from_monday()))
    }
}

impl fmt::Display for SeasonAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for SeasonAnchor {
    type Err = SleeprError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| SleeprError::DateParse {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_display() {
        assert_eq!(Season::new(2025).to_string(), "2025-26");
        assert_eq!(Season::new(2099).to_string(), "2099-00");
        assert_eq!(Season::new(u16::MAX).to_string(), "65535-36");
    }

    #[test]
    fn test_season_from_str() {
        assert_eq!("2025-26".parse::<Season>().unwrap(), Season::new(2025));
        assert_eq!("2024".parse::<Season>().unwrap(), Season::new(2024));
        assert_eq!("1999-00".parse::<Season>().unwrap(), Season::new(1999));
    }

    #[test]
    fn test_season_from_str_rejects_mismatched_years() {
        assert!(matches!(
            "2025-27".parse::<Season>(),
            Err(SleeprError::InvalidSeason { .. })
        ));
        assert!("25-26".parse::<Season>().is_err());
        assert!("2025-2026".parse::<Season>().is_err());
        assert!("season".parse::<Season>().is_err());
    }

    #[test]
    fn test_anchor_monday() {
        // 2025-10-21 is a Tuesday
        let anchor: SeasonAnchor = "2025-10-21".parse().unwrap();
        assert_eq!(anchor.monday(), NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());

        // A Monday anchors to itself
        let monday: SeasonAnchor = "2025-10-20".parse().unwrap();
        assert_eq!(monday.monday(), monday.date());

        // Sunday goes back six days
        let sunday: SeasonAnchor = "2025-10-26".parse().unwrap();
        assert_eq!(sunday.monday(), NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());
    }

    #[test]
    fn test_anchor_from_str_invalid() {
        let result = "Oct 21, 2025".parse::<SeasonAnchor>();
        assert!(matches!(result, Err(SleeprError::DateParse { .. })));
    }
}
