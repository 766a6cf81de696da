//! Turns Sleeper league payloads into the roster records the dashboard reads.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::{
    cli::types::PlayerId,
    sleeper::types::{PlayerDirectory, Roster, SleeperPlayer, User},
};

/// Fantasy team label used for players nobody has rostered.
pub const FREE_AGENT: &str = "FREE_AGENT";

/// Free agents ranked at or past this are not worth a game-log fetch.
pub const FREE_AGENT_RANK_CUTOFF: u64 = 500;

/// A player as listed on a fantasy roster in `rosters.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPlayer {
    pub sleeper_id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: String,
    pub injury_status: Option<String>,
}

/// One fantasy team in `rosters.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRecord {
    pub roster_id: u32,
    pub owner_id: Option<String>,
    pub owner_name: String,
    pub team_name: String,
    pub record: String,
    pub players: Vec<RosterPlayer>,
    pub starters: Vec<PlayerId>,
}

/// Which fantasy team a rostered player belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAssignment {
    pub fantasy_team: String,
    pub team_name: String,
    pub roster_id: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RosterSummary {
    pub rosters: Vec<RosterRecord>,
    pub player_to_team: HashMap<PlayerId, TeamAssignment>,
    pub rostered_ids: BTreeSet<PlayerId>,
}

impl RosterSummary {
    /// Owner name of the team rostering `id`, or [`FREE_AGENT`].
    pub fn fantasy_team_of(&self, id: &PlayerId) -> &str {
        self.player_to_team
            .get(id)
            .map(|t| t.fantasy_team.as_str())
            .unwrap_or(FREE_AGENT)
    }

    /// Rostered players that currently carry an injury designation.
    pub fn injured_players(&self) -> usize {
        self.rosters
            .iter()
            .flat_map(|r| &r.players)
            .filter(|p| p.injury_status.is_some())
            .count()
    }
}

/// Candidate for a game-log fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRef {
    pub sleeper_id: PlayerId,
    pub name: String,
    pub team: String,
    pub search_rank: Option<u64>,
}

fn player_name(id: &PlayerId, player: Option<&SleeperPlayer>) -> String {
    let name = player.map(SleeperPlayer::full_name).unwrap_or_default();
    if name.is_empty() {
        format!("Player {}", id)
    } else {
        name
    }
}

/// Build roster records, the player -> team lookup, and the set of rostered ids.
pub fn process_rosters(
    users: &HashMap<String, User>,
    rosters: &[Roster],
    players: &PlayerDirectory,
) -> RosterSummary {
    let mut summary = RosterSummary::default();

    for roster in rosters {
        let user = roster.owner_id.as_ref().and_then(|id| users.get(id));
        let display_name = user.and_then(|u| u.display_name.clone());
        let team_name = user
            .and_then(|u| u.team_name().map(str::to_string))
            .or_else(|| display_name.clone())
            .unwrap_or_else(|| format!("Team {}", roster.roster_id));
        let owner_name = display_name.unwrap_or_else(|| format!("Owner {}", roster.roster_id));

        let mut roster_players = Vec::new();
        for id in roster.players.iter().flatten() {
            summary.rostered_ids.insert(id.clone());
            let info = players.get(id);
            roster_players.push(RosterPlayer {
                sleeper_id: id.clone(),
                name: player_name(id, info),
                team: info.and_then(|p| p.team.clone()).unwrap_or_default(),
                position: info.and_then(|p| p.position.clone()).unwrap_or_default(),
                injury_status: info.and_then(|p| p.injury_status.clone()),
            });

            summary.player_to_team.insert(
                id.clone(),
                TeamAssignment {
                    fantasy_team: owner_name.clone(),
                    team_name: team_name.clone(),
                    roster_id: roster.roster_id,
                },
            );
        }

        summary.rosters.push(RosterRecord {
            roster_id: roster.roster_id,
            owner_id: roster.owner_id.clone(),
            owner_name,
            team_name,
            record: format!("{}-{}", roster.settings.wins, roster.settings.losses),
            players: roster_players,
            starters: roster.starters.clone().unwrap_or_default(),
        });
    }

    summary
}

/// Rostered players Sleeper has a record for, in id order.
pub fn rostered_players(summary: &RosterSummary, players: &PlayerDirectory) -> Vec<PlayerRef> {
    summary
        .rostered_ids
        .iter()
        .filter_map(|id| {
            let player = players.get(id)?;
            Some(PlayerRef {
                sleeper_id: id.clone(),
                name: player.full_name(),
                team: player.team.clone().unwrap_or_default(),
                search_rank: player.search_rank,
            })
        })
        .collect()
}

/// Best unrostered, active players on an NBA team, by Sleeper search rank.
pub fn top_free_agents(
    players: &PlayerDirectory,
    rostered_ids: &BTreeSet<PlayerId>,
    limit: usize,
) -> Vec<PlayerRef> {
    let mut free_agents: Vec<PlayerRef> = players
        .iter()
        .filter(|(id, _)| !rostered_ids.contains(*id))
        .filter(|(_, p)| p.is_active())
        .filter_map(|(id, p)| {
            let team = p.team.as_deref().filter(|t| !t.is_empty())?;
            let rank = p
                .search_rank
                .filter(|r| *r > 0 && *r < FREE_AGENT_RANK_CUTOFF)?;
            Some(PlayerRef {
                sleeper_id: id.clone(),
                name: p.full_name(),
                team: team.to_string(),
                search_rank: Some(rank),
            })
        })
        .collect();

    free_agents.sort_by_key(|fa| fa.search_rank);
    free_agents.truncate(limit);
    free_agents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleeper::types::{RosterSettings, UserMetadata};

    fn player(first: &str, last: &str, team: Option<&str>, rank: Option<u64>) -> SleeperPlayer {
        SleeperPlayer {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            team: team.map(str::to_string),
            position: Some("G".to_string()),
            active: Some(true),
            search_rank: rank,
            ..Default::default()
        }
    }

    fn directory() -> PlayerDirectory {
        let mut players = PlayerDirectory::new();
        players.insert(PlayerId::new("1"), player("Stephen", "Curry", Some("GSW"), Some(10)));
        players.insert(
            PlayerId::new("2"),
            SleeperPlayer {
                injury_status: Some("Questionable".to_string()),
                ..player("Jimmy", "Butler", Some("GSW"), Some(40))
            },
        );
        players.insert(PlayerId::new("3"), player("Tyrese", "Maxey", Some("PHI"), Some(20)));
        players.insert(PlayerId::new("4"), player("Cam", "Johnson", Some("DEN"), Some(150)));
        players.insert(PlayerId::new("5"), player("Free", "Agent", None, Some(5)));
        players.insert(
            PlayerId::new("6"),
            SleeperPlayer {
                active: Some(false),
                ..player("Retired", "Guy", Some("LAL"), Some(8))
            },
        );
        players.insert(PlayerId::new("7"), player("Deep", "Bench", Some("UTA"), Some(900)));
        players.insert(PlayerId::new("8"), player("No", "Rank", Some("UTA"), None));
        players.insert(PlayerId::new("9"), player("Zero", "Rank", Some("UTA"), Some(0)));
        players
    }

    fn users() -> HashMap<String, User> {
        let mut users = HashMap::new();
        users.insert(
            "u1".to_string(),
            User {
                user_id: "u1".to_string(),
                display_name: Some("alpha".to_string()),
                metadata: Some(UserMetadata {
                    team_name: Some("Alpha Dogs".to_string()),
                }),
            },
        );
        users.insert(
            "u2".to_string(),
            User {
                user_id: "u2".to_string(),
                display_name: Some("beta".to_string()),
                metadata: None,
            },
        );
        users
    }

    fn rosters() -> Vec<Roster> {
        vec![
            Roster {
                roster_id: 1,
                owner_id: Some("u1".to_string()),
                players: Some(vec![PlayerId::new("1"), PlayerId::new("2")]),
                starters: Some(vec![PlayerId::new("1")]),
                settings: RosterSettings { wins: 4, losses: 2 },
            },
            Roster {
                roster_id: 2,
                owner_id: Some("u2".to_string()),
                players: Some(vec![PlayerId::new("3"), PlayerId::new("99")]),
                starters: None,
                settings: RosterSettings::default(),
            },
            Roster {
                roster_id: 3,
                owner_id: None,
                players: None,
                starters: None,
                settings: RosterSettings { wins: 1, losses: 5 },
            },
        ]
    }

    #[test]
    fn test_team_and_owner_names_fall_back() {
        let summary = process_rosters(&users(), &rosters(), &directory());

        assert_eq!(summary.rosters.len(), 3);
        assert_eq!(summary.rosters[0].team_name, "Alpha Dogs");
        assert_eq!(summary.rosters[0].owner_name, "alpha");
        assert_eq!(summary.rosters[1].team_name, "beta");
        assert_eq!(summary.rosters[1].owner_name, "beta");
        assert_eq!(summary.rosters[2].team_name, "Team 3");
        assert_eq!(summary.rosters[2].owner_name, "Owner 3");
    }

    #[test]
    fn test_records_and_starters() {
        let summary = process_rosters(&users(), &rosters(), &directory());

        assert_eq!(summary.rosters[0].record, "4-2");
        assert_eq!(summary.rosters[1].record, "0-0");
        assert_eq!(summary.rosters[0].starters, vec![PlayerId::new("1")]);
        assert!(summary.rosters[1].starters.is_empty());
        assert!(summary.rosters[2].players.is_empty());
    }

    #[test]
    fn test_roster_players_and_unknown_ids() {
        let summary = process_rosters(&users(), &rosters(), &directory());

        let butler = &summary.rosters[0].players[1];
        assert_eq!(butler.name, "Jimmy Butler");
        assert_eq!(butler.team, "GSW");
        assert_eq!(butler.injury_status.as_deref(), Some("Questionable"));

        let unknown = &summary.rosters[1].players[1];
        assert_eq!(unknown.name, "Player 99");
        assert_eq!(unknown.team, "");
        assert_eq!(unknown.position, "");
        assert_eq!(summary.injured_players(), 1);
    }

    #[test]
    fn test_player_to_team_lookup() {
        let summary = process_rosters(&users(), &rosters(), &directory());

        let curry = &summary.player_to_team[&PlayerId::new("1")];
        assert_eq!(curry.fantasy_team, "alpha");
        assert_eq!(curry.team_name, "Alpha Dogs");
        assert_eq!(curry.roster_id, 1);

        assert_eq!(summary.fantasy_team_of(&PlayerId::new("3")), "beta");
        assert_eq!(summary.fantasy_team_of(&PlayerId::new("4")), FREE_AGENT);
        assert_eq!(summary.rostered_ids.len(), 4);
    }

    #[test]
    fn test_rostered_players_skip_unknown_records() {
        let players = directory();
        let summary = process_rosters(&users(), &rosters(), &players);

        let refs = rostered_players(&summary, &players);
        let names: Vec<&str> = refs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Stephen Curry", "Jimmy Butler", "Tyrese Maxey"]);
    }

    #[test]
    fn test_top_free_agents_filters_and_sorts() {
        let players = directory();
        let summary = process_rosters(&users(), &rosters(), &players);

        let free_agents = top_free_agents(&players, &summary.rostered_ids, 100);
        let ids: Vec<&str> = free_agents.iter().map(|p| p.sleeper_id.as_str()).collect();

        // 5 has no team, 6 is inactive, 7 ranks too low, 8 and 9 have no usable rank
        assert_eq!(ids, vec!["4"]);
        assert_eq!(free_agents[0].search_rank, Some(150));
    }

    #[test]
    fn test_top_free_agents_limit() {
        let mut players = PlayerDirectory::new();
        for rank in [30u64, 10, 20, 40] {
            players.insert(
                PlayerId::new(format!("p{rank}")),
                player("Free", &rank.to_string(), Some("BOS"), Some(rank)),
            );
        }

        let free_agents = top_free_agents(&players, &BTreeSet::new(), 2);
        let ranks: Vec<Option<u64>> = free_agents.iter().map(|p| p.search_rank).collect();
        assert_eq!(ranks, vec![Some(10), Some(20)]);

        assert!(top_free_agents(&players, &BTreeSet::new(), 0).is_empty());
    }
}
