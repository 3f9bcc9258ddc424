//! Async HTTP client for the API-Football v3 service.
//!
//! [`ApiFootballClient`] implements [`torcida_core::source::FixtureSource`].
//! It is transport glue only: fixture records come back in the provider's
//! raw shape and are handed to the core normalizer untouched.

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, de::DeserializeOwned};

use torcida_core::{
  raw::RawFixtureRecord,
  source::{FixtureSource, TeamCandidate},
};

/// Hostname the hosted API expects in its `x-rapidapi-host` header.
const API_HOST: &str = "v3.football.api-sports.io";

/// Default base URL of the hosted API.
pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the API-Football service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Base URL; overridable for tests and proxies.
  pub base_url: String,
  pub api_key:  String,
}

impl ApiConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    Self { base_url: DEFAULT_BASE_URL.to_owned(), api_key: api_key.into() }
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Async HTTP client for API-Football.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Requests
/// fail fast: one bounded timeout, no retries.
#[derive(Debug, Clone)]
pub struct ApiFootballClient {
  client: reqwest::Client,
  config: ApiConfig,
}

impl ApiFootballClient {
  /// Timeout applied to every request, connection setup included.
  const TIMEOUT: Duration = Duration::from_secs(10);

  pub fn new(config: ApiConfig) -> Result<Self> {
    if config.api_key.is_empty() {
      return Err(Error::ApiKey);
    }

    let mut key =
      HeaderValue::from_str(&config.api_key).map_err(|_| Error::ApiKey)?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("x-rapidapi-key", key);
    headers.insert("x-rapidapi-host", HeaderValue::from_static(API_HOST));

    let client = reqwest::Client::builder()
      .timeout(Self::TIMEOUT)
      .default_headers(headers)
      .build()
      .map_err(Error::Transport)?;

    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Issue one GET and unwrap the provider's response envelope.
  async fn fetch<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>>
  where
    T: DeserializeOwned,
  {
    let resp = self
      .client
      .get(self.url(path))
      .query(query)
      .send()
      .await
      .map_err(classify_transport)?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status(status));
    }

    let envelope: Envelope<T> = resp.json().await.map_err(Error::Decode)?;

    // The provider reports application errors inside a 200 response, as a
    // non-empty `errors` array or object.
    if has_errors(&envelope.errors) {
      return Err(Error::Remote(envelope.errors.to_string()));
    }

    tracing::debug!(path, results = envelope.response.len(), "provider response");
    Ok(envelope.response)
  }
}

/// The provider's uniform response envelope; fields we don't consume are
/// ignored.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
  #[serde(default)]
  errors:   serde_json::Value,
  #[serde(default = "Vec::new")]
  response: Vec<T>,
}

fn has_errors(errors: &serde_json::Value) -> bool {
  match errors {
    serde_json::Value::Null => false,
    serde_json::Value::Array(items) => !items.is_empty(),
    serde_json::Value::Object(map) => !map.is_empty(),
    _ => true,
  }
}

fn classify_transport(e: reqwest::Error) -> Error {
  if e.is_timeout() { Error::Timeout } else { Error::Transport(e) }
}

// ─── Team search shape ───────────────────────────────────────────────────────

/// One element of the `teams` endpoint response.
#[derive(Debug, Deserialize)]
struct RawTeamEntry {
  #[serde(default)]
  team: RawTeamInfo,
}

#[derive(Debug, Default, Deserialize)]
struct RawTeamInfo {
  id:      Option<i64>,
  name:    Option<String>,
  country: Option<String>,
  founded: Option<i32>,
  logo:    Option<String>,
}

impl RawTeamEntry {
  fn into_candidate(self) -> TeamCandidate {
    TeamCandidate {
      team_id:  self.team.id.unwrap_or_default(),
      name:     self.team.name.unwrap_or_default(),
      country:  self.team.country,
      founded:  self.team.founded,
      logo_url: self.team.logo,
    }
  }
}

// ─── FixtureSource impl ──────────────────────────────────────────────────────

impl FixtureSource for ApiFootballClient {
  type Error = Error;

  async fn search_teams(
    &self,
    name: &str,
    country: &str,
  ) -> Result<Vec<TeamCandidate>> {
    let entries: Vec<RawTeamEntry> = self
      .fetch(
        "teams",
        &[("name", name.to_owned()), ("country", country.to_owned())],
      )
      .await?;
    Ok(entries.into_iter().map(RawTeamEntry::into_candidate).collect())
  }

  async fn team_fixtures(
    &self,
    team_id: i64,
    league_id: i64,
    season: i32,
  ) -> Result<Vec<RawFixtureRecord>> {
    let records: Vec<RawFixtureRecord> = self
      .fetch(
        "fixtures",
        &[
          ("team", team_id.to_string()),
          ("league", league_id.to_string()),
          ("season", season.to_string()),
        ],
      )
      .await?;

    tracing::info!(
      team_id,
      league_id,
      season,
      fetched = records.len(),
      "fetched fixtures"
    );
    Ok(records)
  }

  async fn fixture_details(
    &self,
    fixture_id: i64,
  ) -> Result<Option<RawFixtureRecord>> {
    let mut records: Vec<RawFixtureRecord> =
      self.fetch("fixtures", &[("id", fixture_id.to_string())]).await?;

    if records.is_empty() {
      Ok(None)
    } else {
      Ok(Some(records.remove(0)))
    }
  }
}
