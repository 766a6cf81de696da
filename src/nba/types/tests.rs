//! Unit tests for NBA Stats payload types

use super::*;
use serde_json::json;

fn game_log_response() -> Value {
    json!({
        "resource": "playergamelog",
        "parameters": { "PlayerID": 201939, "Season": "2025-26" },
        "resultSets": [{
            "name": "PlayerGameLog",
            "headers": ["SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP", "WL", "MIN",
                        "FGM", "FGA", "FG_PCT", "FG3M", "FTM", "FTA", "REB", "AST", "STL", "BLK", "TOV", "PTS"],
            "rowSet": [
                ["22025", 201939, "0022500012", "OCT 24, 2025", "GSW vs. DEN", "W", 34,
                 11, 21, 0.524, 5, 4, 4, 6, 8, 2, 0, 3, 31],
                ["22025", 201939, "0022500001", "OCT 21, 2025", "GSW @ LAL", "L", 32,
                 9, 20, 0.45, null, 5, 6, 4, 7, 1, 1, 4, 27]
            ]
        }]
    })
}

#[test]
fn test_result_set_lookup() {
    let response: StatsResponse = serde_json::from_value(game_log_response()).unwrap();

    assert!(response.result_set(PLAYER_GAME_LOG).is_ok());
    assert!(matches!(
        response.result_set("SeasonTotals"),
        Err(SleeprError::MissingResultSet { .. })
    ));
}

#[test]
fn test_records_zip_headers_with_rows() {
    let response: StatsResponse = serde_json::from_value(game_log_response()).unwrap();
    let records = response.result_set(PLAYER_GAME_LOG).unwrap().records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["GAME_DATE"], "OCT 24, 2025");
    assert_eq!(records[0]["PTS"], 31);
    assert_eq!(records[1]["FG3M"], Value::Null);
}

#[test]
fn test_records_with_short_row() {
    let set = ResultSet {
        name: "Short".to_string(),
        headers: vec!["A".to_string(), "B".to_string()],
        row_set: vec![vec![json!(1)]],
    };

    let records = set.records();
    assert_eq!(records[0].len(), 1);
    assert!(!records[0].contains_key("B"));
}

#[test]
fn test_game_log_entries() {
    let response: StatsResponse = serde_json::from_value(game_log_response()).unwrap();
    let entries: Vec<GameLogEntry> = response
        .result_set(PLAYER_GAME_LOG)
        .unwrap()
        .deserialize_records();

    assert_eq!(entries.len(), 2);
    let first = &entries[0];
    assert_eq!(first.stats.points, 31.0);
    assert_eq!(first.stats.turnovers, 3.0);
    assert_eq!(first.stats.three_pointers_made, 5.0);
    assert_eq!(first.stats.minutes, 34.0);
    assert_eq!(first.stats.game_date, "OCT 24, 2025");
    assert_eq!(first.matchup.as_deref(), Some("GSW vs. DEN"));
    assert_eq!(first.fg_pct, Some(0.524));

    // null three-pointers made counts as zero
    assert_eq!(entries[1].stats.three_pointers_made, 0.0);
}

#[test]
fn test_empty_result_set() {
    let response: StatsResponse = serde_json::from_value(json!({
        "resultSets": [{ "name": "PlayerGameLog", "headers": ["PTS"], "rowSet": [] }]
    }))
    .unwrap();

    let entries: Vec<GameLogEntry> = response
        .result_set(PLAYER_GAME_LOG)
        .unwrap()
        .deserialize_records();
    assert!(entries.is_empty());
}

#[test]
fn test_bad_rows_do_not_drop_the_rest_of_the_log() {
    let response: StatsResponse = serde_json::from_value(json!({
        "resultSets": [{
            "name": "PlayerGameLog",
            "headers": ["GAME_DATE", "MATCHUP", "MIN", "PTS"],
            "rowSet": [
                ["OCT 21, 2025", "GSW @ LAL", 32, 27],
                [null, "GSW vs. POR", 30, 22],
                ["OCT 25, 2025", "GSW vs. SAC", 28, "DNP"],
                ["OCT 27, 2025", "GSW vs. MEM", 35, 30]
            ]
        }]
    }))
    .unwrap();

    let entries: Vec<GameLogEntry> = response
        .result_set(PLAYER_GAME_LOG)
        .unwrap()
        .deserialize_records();

    // The untyped PTS row is skipped; the null date survives to fail at date parsing
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].stats.points, 27.0);
    assert_eq!(entries[1].stats.game_date, "");
    assert!(matches!(
        crate::fantasy::parse_game_date(&entries[1].stats.game_date),
        Err(SleeprError::DateParse { .. })
    ));
    assert_eq!(entries[2].stats.points, 30.0);
}

#[test]
fn test_nba_player_activity() {
    let response: StatsResponse = serde_json::from_value(json!({
        "resultSets": [{
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS"],
            "rowSet": [
                [201939, "Curry, Stephen", "Stephen Curry", 1],
                [977, "Bryant, Kobe", "Kobe Bryant", 0],
                [2544, "James, LeBron", "LeBron James", "1"]
            ]
        }]
    }))
    .unwrap();

    let players: Vec<NbaPlayer> = response
        .result_set(COMMON_ALL_PLAYERS)
        .unwrap()
        .deserialize_records();

    assert_eq!(players.len(), 3);
    assert_eq!(players[0].id, NbaPlayerId::new(201939));
    assert_eq!(players[0].full_name, "Stephen Curry");
    assert!(players[0].is_active());
    assert!(!players[1].is_active());
    assert!(players[2].is_active());
}

#[test]
fn test_schedule_response_defaults() {
    let schedule: ScheduleResponse = serde_json::from_value(json!({
        "leagueSchedule": {
            "seasonYear": "2025-26",
            "gameDates": [{
                "gameDate": "10/21/2025 00:00:00",
                "games": [
                    { "homeTeam": { "teamTricode": "LAL" }, "awayTeam": { "teamTricode": "GSW" }, "gameTimeEst": "1900-01-01T22:00:00Z" },
                    { "homeTeam": { "teamTricode": "" }, "awayTeam": {} }
                ]
            }]
        }
    }))
    .unwrap();

    let games = &schedule.league_schedule.game_dates[0].games;
    assert_eq!(schedule.league_schedule.season_year, "2025-26");
    assert_eq!(games[0].home_team.tricode(), Some("LAL"));
    assert_eq!(games[1].home_team.tricode(), None);
    assert_eq!(games[1].away_team.tricode(), None);
    assert_eq!(games[1].game_time_est, "");
}
