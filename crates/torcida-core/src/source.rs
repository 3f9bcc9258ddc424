//! The `FixtureSource` trait — the remote fixture provider consumed by the
//! sync orchestrator.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::raw::RawFixtureRecord;

/// A team returned by the provider's team-search lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCandidate {
  pub team_id:  i64,
  pub name:     String,
  pub country:  Option<String>,
  pub founded:  Option<i32>,
  pub logo_url: Option<String>,
}

/// Abstraction over the remote fixture provider.
///
/// Calls are request/response with a bounded timeout at the implementation;
/// there is no retry and no pagination — the provider is assumed to return
/// the complete result set in one response.
pub trait FixtureSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Search teams by name and country.
  fn search_teams<'a>(
    &'a self,
    name: &'a str,
    country: &'a str,
  ) -> impl Future<Output = Result<Vec<TeamCandidate>, Self::Error>> + Send + 'a;

  /// All fixtures for a team in one competition and season, in one bulk
  /// call.
  fn team_fixtures(
    &self,
    team_id: i64,
    league_id: i64,
    season: i32,
  ) -> impl Future<Output = Result<Vec<RawFixtureRecord>, Self::Error>> + Send + '_;

  /// Full detail for one fixture, or `None` if the provider does not know
  /// it.
  fn fixture_details(
    &self,
    fixture_id: i64,
  ) -> impl Future<Output = Result<Option<RawFixtureRecord>, Self::Error>> + Send + '_;
}
