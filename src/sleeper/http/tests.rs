//! Unit tests for the Sleeper HTTP client

use super::*;
use crate::{cli::types::PlayerId, SleeprError};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    async fn client_for(server: &MockServer) -> SleeperClient {
        SleeperClient::with_base_url(format!("{}/v1/", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_league() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/league/12345"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "league_id": "12345",
                "name": "Test League",
                "scoring_settings": { "pts": 1.0, "dd": 2.0 }
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let league = client.get_league(LeagueId::new(12345)).await.unwrap();

        assert_eq!(league.name.as_deref(), Some("Test League"));
        assert_eq!(league.scoring_settings.get("dd"), Some(&2.0));
    }

    #[tokio::test]
    async fn test_get_rosters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/league/12345/rosters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "roster_id": 1, "owner_id": "u1", "players": ["10", "11"], "settings": { "wins": 3, "losses": 1 } },
                { "roster_id": 2, "owner_id": null, "players": null }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let rosters = client.get_rosters(LeagueId::new(12345)).await.unwrap();

        assert_eq!(rosters.len(), 2);
        assert_eq!(
            rosters[0].players.as_deref(),
            Some(&[PlayerId::new("10"), PlayerId::new("11")][..])
        );
        assert!(rosters[1].players.is_none());
    }

    #[tokio::test]
    async fn test_get_users_indexes_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/league/12345/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "user_id": "u1", "display_name": "alpha", "metadata": { "team_name": "Alpha Dogs" } },
                { "user_id": "u2", "display_name": "beta" }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let users = client.get_users(LeagueId::new(12345)).await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users["u1"].team_name(), Some("Alpha Dogs"));
        assert_eq!(users["u2"].display_name.as_deref(), Some("beta"));
    }

    #[tokio::test]
    async fn test_get_all_players() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/players/nba"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "10": { "first_name": "Stephen", "last_name": "Curry", "team": "GSW", "active": true }
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let players = client.get_all_players().await.unwrap();

        assert_eq!(players[&PlayerId::new("10")].full_name(), "Stephen Curry");
    }

    #[tokio::test]
    async fn test_http_error_status_is_surfaced() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/league/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let result = client.get_league(LeagueId::new(404)).await;

        assert!(matches!(result, Err(SleeprError::Http(_))));
    }
}
