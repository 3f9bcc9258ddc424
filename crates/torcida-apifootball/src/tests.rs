//! Tests for `ApiFootballClient` against a local mock server.

use mockito::Matcher;
use torcida_core::source::FixtureSource;

use crate::{ApiConfig, ApiFootballClient, Error};

fn client(server: &mockito::ServerGuard) -> ApiFootballClient {
  ApiFootballClient::new(ApiConfig {
    base_url: server.url(),
    api_key:  "test-key".to_owned(),
  })
  .expect("client builds")
}

const FIXTURES_BODY: &str = r#"{
  "get": "fixtures",
  "parameters": { "team": "127", "league": "71", "season": "2024" },
  "errors": [],
  "results": 1,
  "response": [
    {
      "fixture": {
        "id": 1180422,
        "date": "2024-04-14T21:00:00+00:00",
        "timestamp": 1713128400,
        "venue": { "id": 204, "name": "Maracanã", "city": "Rio de Janeiro" },
        "status": { "long": "Match Finished", "short": "FT" }
      },
      "league": {
        "id": 71,
        "name": "Serie A",
        "season": 2024,
        "round": "Regular Season - 2"
      },
      "teams": {
        "home": { "id": 127, "name": "Flamengo" },
        "away": { "id": 118, "name": "Bahia" }
      },
      "goals": { "home": 2, "away": 1 },
      "score": {
        "halftime": { "home": 1, "away": 0 },
        "fulltime": { "home": 2, "away": 1 }
      }
    }
  ]
}"#;

#[tokio::test]
async fn team_fixtures_unwraps_the_response_envelope() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("GET", "/fixtures")
    .match_query(Matcher::AllOf(vec![
      Matcher::UrlEncoded("team".into(), "127".into()),
      Matcher::UrlEncoded("league".into(), "71".into()),
      Matcher::UrlEncoded("season".into(), "2024".into()),
    ]))
    .match_header("x-rapidapi-key", "test-key")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(FIXTURES_BODY)
    .create_async()
    .await;

  let records = client(&server).team_fixtures(127, 71, 2024).await.unwrap();

  mock.assert_async().await;
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].fixture.id, Some(1180422));
  assert_eq!(records[0].fixture.status.short.as_deref(), Some("FT"));
  assert_eq!(records[0].teams.home.name.as_deref(), Some("Flamengo"));
  assert_eq!(records[0].goals.home, Some(2));
}

#[tokio::test]
async fn empty_response_is_an_empty_list() {
  let mut server = mockito::Server::new_async().await;
  server
    .mock("GET", "/fixtures")
    .match_query(Matcher::Any)
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(r#"{"errors": [], "results": 0, "response": []}"#)
    .create_async()
    .await;

  let records = client(&server).team_fixtures(127, 71, 1990).await.unwrap();
  assert!(records.is_empty());
}

#[tokio::test]
async fn remote_reported_errors_surface_as_remote() {
  let mut server = mockito::Server::new_async().await;
  server
    .mock("GET", "/fixtures")
    .match_query(Matcher::Any)
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      r#"{"errors": {"token": "Error/Missing application key."}, "response": []}"#,
    )
    .create_async()
    .await;

  let err = client(&server).team_fixtures(127, 71, 2024).await.unwrap_err();
  assert!(matches!(err, Error::Remote(ref msg) if msg.contains("token")));
}

#[tokio::test]
async fn non_success_status_surfaces_as_status() {
  let mut server = mockito::Server::new_async().await;
  server
    .mock("GET", "/fixtures")
    .match_query(Matcher::Any)
    .with_status(500)
    .create_async()
    .await;

  let err = client(&server).team_fixtures(127, 71, 2024).await.unwrap_err();
  assert!(matches!(err, Error::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn search_teams_maps_candidates() {
  let mut server = mockito::Server::new_async().await;
  server
    .mock("GET", "/teams")
    .match_query(Matcher::AllOf(vec![
      Matcher::UrlEncoded("name".into(), "Flamengo".into()),
      Matcher::UrlEncoded("country".into(), "Brazil".into()),
    ]))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      r#"{
        "errors": [],
        "results": 1,
        "response": [
          {
            "team": {
              "id": 127,
              "name": "Flamengo",
              "country": "Brazil",
              "founded": 1895,
              "logo": "https://media.api-sports.io/football/teams/127.png"
            },
            "venue": { "id": 204, "name": "Maracanã" }
          }
        ]
      }"#,
    )
    .create_async()
    .await;

  let candidates =
    client(&server).search_teams("Flamengo", "Brazil").await.unwrap();

  assert_eq!(candidates.len(), 1);
  assert_eq!(candidates[0].team_id, 127);
  assert_eq!(candidates[0].name, "Flamengo");
  assert_eq!(candidates[0].country.as_deref(), Some("Brazil"));
  assert_eq!(candidates[0].founded, Some(1895));
}

#[tokio::test]
async fn fixture_details_is_none_when_unknown() {
  let mut server = mockito::Server::new_async().await;
  server
    .mock("GET", "/fixtures")
    .match_query(Matcher::UrlEncoded("id".into(), "999".into()))
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(r#"{"errors": [], "results": 0, "response": []}"#)
    .create_async()
    .await;

  let detail = client(&server).fixture_details(999).await.unwrap();
  assert!(detail.is_none());
}

#[test]
fn missing_api_key_is_a_construction_error() {
  let err = ApiFootballClient::new(ApiConfig {
    base_url: "http://localhost".to_owned(),
    api_key:  String::new(),
  })
  .unwrap_err();
  assert!(matches!(err, Error::ApiKey));
}
