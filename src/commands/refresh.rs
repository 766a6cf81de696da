//! Full and quick dashboard refresh.
//!
//! Pulls league state from Sleeper, writes the JSON artifacts the dashboard
//! reads, then (for a full refresh) scores every game of every rostered
//! player, plus optionally the best free agents, into `games.csv`.

use chrono::Local;
use log::{debug, info, warn};
use std::path::Path;

use crate::{
    cli::types::{LeagueId, Season, SeasonAnchor},
    core::cache::players_cache_path,
    fantasy::ScoringRules,
    nba::{build_team_schedule, find_nba_player_id, NbaClient, TeamSchedule},
    output::{
        build_game_row, sort_game_rows, write_games_csv, write_json, GameRow, GameTableStats,
        OutputPaths,
    },
    sleeper::{
        cache::load_or_fetch_players_at,
        process_rosters,
        roster::{rostered_players, PlayerRef},
        top_free_agents, RosterSummary, SleeperClient, FREE_AGENT,
    },
    Result,
};

use super::resolve_league_id;

/// Parameters for the refresh command
#[derive(Debug, Clone)]
pub struct RefreshParams {
    pub league_id: Option<LeagueId>,
    pub season: Season,
    pub season_start: SeasonAnchor,
    pub quick: bool,
    pub free_agents: bool,
    pub free_agent_limit: usize,
    pub outputs: OutputPaths,
    pub refresh: bool,
}

/// What a refresh did, for logging and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshReport {
    pub teams: usize,
    pub rostered_players: usize,
    pub injured_players: usize,
    pub schedule_saved: bool,
    pub players_fetched: usize,
    pub unresolved: Vec<String>,
    pub games: GameTableStats,
}

/// Handle the refresh command against the live Sleeper and NBA APIs.
pub async fn handle_refresh(params: RefreshParams) -> Result<RefreshReport> {
    let league_id = resolve_league_id(params.league_id)?;
    let sleeper = SleeperClient::new()?;
    let mut nba = NbaClient::new()?;

    // tarpaulin::skip - network bound, exercised through run_refresh with mock servers
    run_refresh(league_id, &params, &sleeper, &mut nba, &players_cache_path()).await
}

/// Refresh with explicit clients and player-cache location.
pub async fn run_refresh(
    league_id: LeagueId,
    params: &RefreshParams,
    sleeper: &SleeperClient,
    nba: &mut NbaClient,
    players_cache: &Path,
) -> Result<RefreshReport> {
    let outputs = &params.outputs;
    info!("Sleeper dashboard refresh for league {league_id}");
    info!(
        "Mode: {}",
        if params.quick {
            "quick (rosters only)"
        } else {
            "full"
        }
    );
    if params.free_agents && !params.quick {
        info!("Including top {} free agents", params.free_agent_limit);
    }

    outputs.create_dirs()?;

    let rosters = sleeper.get_rosters(league_id).await?;
    let users = sleeper.get_users(league_id).await?;
    let league = sleeper.get_league(league_id).await?;
    let (players, cache_status) =
        load_or_fetch_players_at(sleeper, players_cache, params.refresh).await?;
    debug!("Sleeper players: {} ({:?})", players.len(), cache_status);

    info!("Scoring settings: {} categories", league.scoring_settings.len());
    write_json(&outputs.scoring(), &league.scoring_settings, true)?;
    info!("Saved scoring settings to {}", outputs.scoring().display());

    let mut report = RefreshReport::default();
    match save_schedule(nba, outputs).await {
        Ok(schedule) => {
            report.schedule_saved = true;
            info!(
                "Saved NBA schedule to {} ({} teams, week ends {})",
                outputs.schedule().display(),
                schedule.team_schedules.len(),
                schedule.week_end
            );
        }
        Err(e) => warn!("Could not fetch NBA schedule: {e}"),
    }

    write_json(&outputs.all_players(), &players, false)?;
    info!("Saved all NBA players to {}", outputs.all_players().display());

    let summary = process_rosters(&users, &rosters, &players);
    report.teams = summary.rosters.len();
    report.rostered_players = summary.rostered_ids.len();
    report.injured_players = summary.injured_players();
    info!(
        "Found {} rostered players across {} teams",
        report.rostered_players, report.teams
    );

    write_json(&outputs.rosters(), &summary.rosters, true)?;
    info!("Saved rosters to {}", outputs.rosters().display());

    if params.quick {
        info!("Found {} injured players", report.injured_players);
        info!("Quick refresh complete; game logs not updated");
        return Ok(report);
    }

    let mut to_fetch = rostered_players(&summary, &players);
    info!("Will fetch game logs for {} rostered players", to_fetch.len());
    if params.free_agents {
        let free_agents = top_free_agents(&players, &summary.rostered_ids, params.free_agent_limit);
        info!("Adding {} top free agents", free_agents.len());
        to_fetch.extend(free_agents);
    }
    report.players_fetched = to_fetch.len();

    let rules = ScoringRules::from(&league.scoring_settings);
    let mut rows =
        collect_game_rows(nba, params, &to_fetch, &summary, &rules, &mut report.unresolved).await?;

    if rows.is_empty() {
        warn!("No game data fetched!");
    } else {
        sort_game_rows(&mut rows);
        write_games_csv(&outputs.games(), &rows)?;
        info!("Saved {} games to {}", rows.len(), outputs.games().display());

        let backup = outputs.games_backup(Local::now().naive_local());
        write_games_csv(&backup, &rows)?;
        info!("Saved backup to {}", backup.display());
    }

    report.games = GameTableStats::from_rows(&rows, FREE_AGENT);
    log_summary(&report, params.free_agents);

    Ok(report)
}

async fn save_schedule(nba: &NbaClient, outputs: &OutputPaths) -> Result<TeamSchedule> {
    let response = nba.get_schedule().await?;
    let schedule = build_team_schedule(&response, Local::now().naive_local());
    write_json(&outputs.schedule(), &schedule, false)?;
    Ok(schedule)
}

/// Resolve, fetch, and score every player; per-player failures are skipped.
async fn collect_game_rows(
    nba: &mut NbaClient,
    params: &RefreshParams,
    to_fetch: &[PlayerRef],
    summary: &RosterSummary,
    rules: &ScoringRules,
    unresolved: &mut Vec<String>,
) -> Result<Vec<GameRow>> {
    let directory = nba.get_player_directory(params.season).await?;
    debug!("NBA player directory: {} entries", directory.len());

    let total = to_fetch.len();
    let mut rows = Vec::new();

    for (i, player) in to_fetch.iter().enumerate() {
        let Some(nba_id) = find_nba_player_id(&player.name, &directory) else {
            info!("  [{}/{}] {} - NBA ID not found, skipping", i + 1, total, player.name);
            unresolved.push(player.name.clone());
            continue;
        };
        info!("  [{}/{}] {} (NBA ID: {})...", i + 1, total, player.name, nba_id);

        let entries = match nba.get_game_log(nba_id, params.season).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("    Error fetching {}: {e}", player.name);
                continue;
            }
        };

        let fantasy_team = summary.fantasy_team_of(&player.sleeper_id);
        for entry in &entries {
            match build_game_row(player, fantasy_team, entry, rules, params.season_start) {
                Ok(row) => rows.push(row),
                Err(e) => warn!("    Skipping a {} game: {e}", player.name),
            }
        }
    }

    Ok(rows)
}

fn log_summary(report: &RefreshReport, free_agents: bool) {
    let games = &report.games;
    info!("Data refresh complete!");
    info!(
        "  - Rosters: {} teams, {} players",
        report.teams, report.rostered_players
    );
    info!(
        "  - Game logs: {} games for {} players",
        games.games, games.unique_players
    );
    info!(
        "  - Weeks: {}",
        games.max_week.map(|w| w.as_u16()).unwrap_or(0)
    );
    if free_agents {
        info!("  - Free agent games: {}", games.free_agent_games);
    }
}
