//! The nested, loosely-structured fixture record returned by the remote
//! provider.
//!
//! Every level is optional: absent substructures deserialise to their
//! defaults so a sparse record never fails to parse, and unknown JSON fields
//! are ignored. [`crate::normalize::normalize`] flattens this shape into the
//! canonical [`crate::fixture::Fixture`].

use serde::{Deserialize, Serialize};

/// One element of the provider's `response` array for the fixtures endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFixtureRecord {
  #[serde(default)]
  pub fixture: RawFixture,
  #[serde(default)]
  pub league:  RawLeague,
  #[serde(default)]
  pub teams:   RawTeams,
  #[serde(default)]
  pub goals:   RawGoals,
  #[serde(default)]
  pub score:   RawScore,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFixture {
  pub id:        Option<i64>,
  /// ISO-8601 kickoff timestamp, usually with a trailing `Z` or an offset.
  pub date:      Option<String>,
  pub timestamp: Option<i64>,
  #[serde(default)]
  pub venue:     RawVenue,
  #[serde(default)]
  pub status:    RawStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVenue {
  pub id:   Option<i64>,
  pub name: Option<String>,
  pub city: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStatus {
  /// Short status code, e.g. `FT`, `NS`, `1H`.
  pub short: Option<String>,
  pub long:  Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLeague {
  pub id:     Option<i64>,
  pub name:   Option<String>,
  pub season: Option<i32>,
  pub round:  Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTeams {
  #[serde(default)]
  pub home: RawTeam,
  #[serde(default)]
  pub away: RawTeam,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTeam {
  pub id:   Option<i64>,
  pub name: Option<String>,
}

/// A home/away goal pair; `None` until the relevant period has been played.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGoals {
  pub home: Option<i32>,
  pub away: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScore {
  #[serde(default)]
  pub halftime: RawGoals,
  #[serde(default)]
  pub fulltime: RawGoals,
}
