//! Fantasy week assignment.

use chrono::NaiveDate;

use crate::{
    cli::types::{SeasonAnchor, Week},
    error::{Result, SleeprError},
};

/// Formats NBA Stats uses for `GAME_DATE`, tried in order.
const GAME_DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%Y-%m-%d"];

/// Parse a game date like `OCT 22, 2025` or `2025-10-22`.
pub fn parse_game_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    GAME_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| SleeprError::DateParse {
            input: input.to_string(),
        })
}

/// Week number of `game_date`, counting 7-day periods from the anchor's Monday.
///
/// Games before the first week are clamped to week 1.
pub fn compute_week_number(game_date: NaiveDate, anchor: SeasonAnchor) -> Week {
    let days = (game_date - anchor.monday()).num_days();
    let week = (days.div_euclid(7) + 1).max(1);
    Week::new(u16::try_from(week).unwrap_or(u16::MAX))
}

/// Parse `game_date` and assign it a week.
pub fn week_for_game_date(game_date: &str, anchor: SeasonAnchor) -> Result<Week> {
    parse_game_date(game_date).map(|date| compute_week_number(date, anchor))
}
