//! Per-team schedule and games left in the current fantasy week.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::nba::types::ScheduleResponse;

const SCHEDULE_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// One game from a team's point of view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamGame {
    pub date: NaiveDate,
    pub opponent: String,
    pub home: bool,
    pub time: String,
}

/// `schedule.json` as the dashboard reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSchedule {
    pub season: String,
    pub last_updated: String,
    pub week_end: NaiveDate,
    pub team_schedules: BTreeMap<String, Vec<TeamGame>>,
    pub remaining_this_week: BTreeMap<String, Vec<TeamGame>>,
}

/// Last day counted as "this week" for the remaining-games view.
///
/// Monday through Saturday look ahead to the following Monday
/// (`(6 - weekday) % 7 + 1` days); Sunday looks a full week ahead.
pub fn week_end_for(today: NaiveDate) -> NaiveDate {
    let weekday = i64::from(today.weekday().num_days_from_monday());
    let days = if weekday == 6 { 7 } else { (6 - weekday) % 7 + 1 };
    today + Duration::days(days)
}

/// Split every scheduled game into home and away entries, keyed by tricode.
pub fn build_team_schedule(response: &ScheduleResponse, now: NaiveDateTime) -> TeamSchedule {
    let mut team_schedules: BTreeMap<String, Vec<TeamGame>> = BTreeMap::new();

    for game_date in &response.league_schedule.game_dates {
        let Ok(date) = NaiveDateTime::parse_from_str(&game_date.game_date, SCHEDULE_DATE_FORMAT)
        else {
            debug!("Skipping schedule date {:?}", game_date.game_date);
            continue;
        };
        let date = date.date();

        for game in &game_date.games {
            let (Some(home), Some(away)) = (game.home_team.tricode(), game.away_team.tricode())
            else {
                continue;
            };

            team_schedules.entry(home.to_string()).or_default().push(TeamGame {
                date,
                opponent: away.to_string(),
                home: true,
                time: game.game_time_est.clone(),
            });
            team_schedules.entry(away.to_string()).or_default().push(TeamGame {
                date,
                opponent: home.to_string(),
                home: false,
                time: game.game_time_est.clone(),
            });
        }
    }

    let today = now.date();
    let week_end = week_end_for(today);
    let remaining_this_week = team_schedules
        .iter()
        .map(|(team, games)| {
            let remaining = games
                .iter()
                .filter(|g| g.date >= today && g.date <= week_end)
                .cloned()
                .collect();
            (team.clone(), remaining)
        })
        .collect();

    TeamSchedule {
        season: response.league_schedule.season_year.clone(),
        last_updated: now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        week_end,
        team_schedules,
        remaining_this_week,
    }
}
